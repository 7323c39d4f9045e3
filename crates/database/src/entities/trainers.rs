use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trainers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub room_id: Option<i32>, // NULL when unassigned
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomId",
        to = "super::rooms::Column::Id",
        on_delete = "SetNull"
    )]
    Room,
    #[sea_orm(has_many = "super::trainer_equipment::Entity")]
    TrainerEquipment,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Room.def()
    }
}

impl Related<super::trainer_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerEquipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::Trainer {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            specialization: model.specialization,
            experience_years: model.experience_years,
            room_id: model.room_id,
        }
    }
}
