//! sea-orm backed storage: entities, active models and relation-aware selects.

mod equipment;
mod room;
mod trainer;

use sea_orm::DatabaseConnection;

pub struct OrmStorage {
    db: DatabaseConnection,
}

impl OrmStorage {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}
