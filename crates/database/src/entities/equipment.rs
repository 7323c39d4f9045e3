use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "equipment")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    #[sea_orm(column_name = "type")]
    pub kind: String,
    pub quantity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainer_equipment::Entity")]
    TrainerEquipment,
}

impl Related<super::trainer_equipment::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::TrainerEquipment.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::Equipment {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            kind: model.kind,
            quantity: model.quantity,
        }
    }
}
