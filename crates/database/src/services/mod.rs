//! Management interfaces shared by both storage backends.
//!
//! Every mutation that targets an existing row reports an [`Outcome`] so that
//! callers can tell "applied" apart from "no such row"; backend failures are
//! returned as [`crate::Error`].
//!
//! Deleting a room leaves its trainers unassigned. Deleting a trainer or a
//! piece of equipment removes its assignment rows. Both backends apply these
//! rules inside a single transaction.

pub mod orm;
pub mod sql;

use crate::error::Result;
use async_trait::async_trait;
use models::{
    Equipment, EquipmentTally, NewEquipment, NewRoom, NewTrainer, Room, Trainer,
    TrainerEquipment, TrainerEquipmentReport,
};

/// Result of a mutation aimed at a specific row
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The row existed and the change was committed
    Applied,
    /// No matching row; nothing was written
    NotFound,
}

impl Outcome {
    pub fn is_applied(self) -> bool {
        self == Self::Applied
    }

    pub fn is_not_found(self) -> bool {
        self == Self::NotFound
    }

    pub(crate) fn from_rows_affected(rows: u64) -> Self {
        if rows == 0 {
            Self::NotFound
        } else {
            Self::Applied
        }
    }
}

#[async_trait]
pub trait RoomManagement: Send + Sync {
    /// Persists a new room and returns its id
    async fn add_room(&self, room: NewRoom) -> Result<i32>;

    /// Deletes a room, unassigning any trainers that worked there
    async fn delete_room(&self, room_id: i32) -> Result<Outcome>;

    async fn get_room(&self, room_id: i32) -> Result<Option<Room>>;

    /// All rooms, ordered by id
    async fn list_rooms(&self) -> Result<Vec<Room>>;
}

#[async_trait]
pub trait TrainerManagement: Send + Sync {
    /// Persists a new trainer and returns its id.
    ///
    /// The room id is not checked up front; an unknown room is reported by the
    /// database as a foreign key violation.
    async fn add_trainer(&self, trainer: NewTrainer) -> Result<i32>;

    /// Moves a trainer to another room, or unassigns them with `None`
    async fn update_trainer_room(
        &self,
        trainer_id: i32,
        new_room_id: Option<i32>,
    ) -> Result<Outcome>;

    async fn update_trainer_spec(
        &self,
        trainer_id: i32,
        new_specialization: &str,
    ) -> Result<Outcome>;

    /// Deletes a trainer together with their equipment assignments
    async fn delete_trainer(&self, trainer_id: i32) -> Result<Outcome>;

    /// Trainers whose room is `room_id`, ordered by id
    async fn select_trainers_by_room(&self, room_id: i32) -> Result<Vec<Trainer>>;

    async fn get_trainer(&self, trainer_id: i32) -> Result<Option<Trainer>>;

    /// All trainers, ordered by id
    async fn list_trainers(&self) -> Result<Vec<Trainer>>;
}

#[async_trait]
pub trait EquipmentManagement: Send + Sync {
    /// Persists a new piece of equipment and returns its id
    async fn add_equipment(&self, equipment: NewEquipment) -> Result<i32>;

    /// Assigns `quantity` of a piece of equipment to a trainer.
    ///
    /// Repeated assignments of the same pair accumulate into a single row.
    /// Returns [`Outcome::NotFound`] without writing when either the trainer
    /// or the equipment does not exist.
    async fn add_equipment_to_trainer(
        &self,
        trainer_id: i32,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<Outcome>;

    /// Equipment assigned to one trainer; empty for unknown trainers
    async fn calculate_trainer_equipment(&self, trainer_id: i32) -> Result<EquipmentTally>;

    /// Equipment tallies for every trainer, including those with nothing assigned
    async fn calculate_all_trainer_equipment(&self) -> Result<TrainerEquipmentReport>;

    async fn get_equipment(&self, equipment_id: i32) -> Result<Option<Equipment>>;

    /// All equipment, ordered by id
    async fn list_equipment(&self) -> Result<Vec<Equipment>>;

    /// Deletes a piece of equipment together with its assignments
    async fn delete_equipment(&self, equipment_id: i32) -> Result<Outcome>;

    async fn get_assignment(
        &self,
        trainer_id: i32,
        equipment_id: i32,
    ) -> Result<Option<TrainerEquipment>>;
}

/// The full capability set of a storage backend
pub trait Storage: RoomManagement + TrainerManagement + EquipmentManagement {}

impl<T> Storage for T where T: RoomManagement + TrainerManagement + EquipmentManagement {}
