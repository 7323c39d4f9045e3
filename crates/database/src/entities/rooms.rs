use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::trainers::Entity")]
    Trainers,
}

impl Related<super::trainers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Trainers.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for models::Room {
    fn from(model: Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            location: model.location,
            capacity: model.capacity,
        }
    }
}
