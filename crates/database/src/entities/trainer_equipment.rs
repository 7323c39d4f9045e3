use sea_orm::entity::prelude::*;

/// Junction table between trainers and equipment, carrying the assigned amount
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "trainer_equipment")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub trainer_id: i32,
    #[sea_orm(primary_key, auto_increment = false)]
    pub equipment_id: i32,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::trainers::Entity",
        from = "Column::TrainerId",
        to = "super::trainers::Column::Id",
        on_delete = "Cascade"
    )]
    Trainer,
    #[sea_orm(
        belongs_to = "super::equipment::Entity",
        from = "Column::EquipmentId",
        to = "super::equipment::Column::Id",
        on_delete = "Cascade"
    )]
    Equipment,
}

impl Related<super::trainers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainer.def()
    }
}

impl Related<super::equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Equipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::TrainerEquipment {
    fn from(model: Model) -> Self {
        Self {
            trainer_id: model.trainer_id,
            equipment_id: model.equipment_id,
            quantity: model.quantity,
        }
    }
}
