//! Storage layer for the gym registry.
//!
//! Rooms, trainers and equipment are managed through three traits
//! ([`RoomManagement`], [`TrainerManagement`], [`EquipmentManagement`]) that
//! together form a [`Storage`]. Two interchangeable implementations exist:
//! [`OrmStorage`] goes through sea-orm entities, [`SqlStorage`] runs
//! hand-written parameterized SQL. Both work on PostgreSQL and SQLite.

pub mod config;
pub mod db;
pub mod entities;
pub mod error;
pub mod services;

pub use config::{Backend, Config, ConfigError};
pub use error::{Error, Result};
pub use services::{
    EquipmentManagement, Outcome, RoomManagement, Storage, TrainerManagement, orm::OrmStorage,
    sql::SqlStorage,
};

use sea_orm::DatabaseConnection;

/// Builds the storage implementation for `backend` on top of `db`
pub fn open(db: DatabaseConnection, backend: Backend) -> Box<dyn Storage> {
    log::debug!("Opening {backend} storage");

    match backend {
        Backend::Orm => Box::new(OrmStorage::new(db)),
        Backend::Sql => Box::new(SqlStorage::new(db)),
    }
}
