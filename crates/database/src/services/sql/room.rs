use super::{SqlStorage, insert_returning_id, room_from_row, statement};
use crate::{
    error::Result,
    services::{Outcome, RoomManagement},
};
use async_trait::async_trait;
use log::{debug, warn};
use models::{NewRoom, Room};
use sea_orm::{ConnectionTrait, TransactionTrait, Value};

#[async_trait]
impl RoomManagement for SqlStorage {
    async fn add_room(&self, room: NewRoom) -> Result<i32> {
        let id = insert_returning_id(
            &self.db,
            "INSERT INTO rooms (name, location, capacity) VALUES ($1, $2, $3) RETURNING id",
            [
                Value::from(room.name),
                Value::from(room.location),
                Value::from(room.capacity),
            ],
        )
        .await?;

        debug!("Added room {id}");
        Ok(id)
    }

    async fn delete_room(&self, room_id: i32) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        // Trainers stay, they just no longer have a room
        let orphaned = txn
            .execute(statement(
                &txn,
                "UPDATE trainers SET room_id = NULL WHERE room_id = $1",
                [Value::from(room_id)],
            ))
            .await?;

        let deleted = txn
            .execute(statement(
                &txn,
                "DELETE FROM rooms WHERE id = $1",
                [Value::from(room_id)],
            ))
            .await?;

        let outcome = Outcome::from_rows_affected(deleted.rows_affected());
        if outcome.is_not_found() {
            warn!("Room {room_id} not found, nothing deleted");
            txn.rollback().await?;
            return Ok(outcome);
        }

        txn.commit().await?;

        debug!(
            "Deleted room {room_id}, unassigned {} trainers",
            orphaned.rows_affected()
        );
        Ok(outcome)
    }

    async fn get_room(&self, room_id: i32) -> Result<Option<Room>> {
        let row = self
            .db
            .query_one(statement(
                &self.db,
                "SELECT id, name, location, capacity FROM rooms WHERE id = $1",
                [Value::from(room_id)],
            ))
            .await?;

        Ok(row.as_ref().map(room_from_row).transpose()?)
    }

    async fn list_rooms(&self) -> Result<Vec<Room>> {
        let rows = self
            .db
            .query_all(statement(
                &self.db,
                "SELECT id, name, location, capacity FROM rooms ORDER BY id",
                [],
            ))
            .await?;

        Ok(rows.iter().map(room_from_row).collect::<Result<_, _>>()?)
    }
}
