use super::OrmStorage;
use crate::{
    entities::{rooms, trainers},
    error::Result,
    services::{Outcome, RoomManagement},
};
use async_trait::async_trait;
use log::{debug, warn};
use models::{NewRoom, Room};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait, Value, prelude::Expr,
};

#[async_trait]
impl RoomManagement for OrmStorage {
    async fn add_room(&self, room: NewRoom) -> Result<i32> {
        let inserted = rooms::ActiveModel {
            name: Set(room.name),
            location: Set(room.location),
            capacity: Set(room.capacity),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!("Added room {}", inserted.id);
        Ok(inserted.id)
    }

    async fn delete_room(&self, room_id: i32) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let Some(room) = rooms::Entity::find_by_id(room_id).one(&txn).await? else {
            warn!("Room {room_id} not found, nothing deleted");
            txn.rollback().await?;
            return Ok(Outcome::NotFound);
        };

        // Trainers stay, they just no longer have a room
        let orphaned = trainers::Entity::update_many()
            .col_expr(trainers::Column::RoomId, Expr::value(Value::Int(None)))
            .filter(trainers::Column::RoomId.eq(room_id))
            .exec(&txn)
            .await?;

        room.delete(&txn).await?;
        txn.commit().await?;

        debug!(
            "Deleted room {room_id}, unassigned {} trainers",
            orphaned.rows_affected
        );
        Ok(Outcome::Applied)
    }

    async fn get_room(&self, room_id: i32) -> Result<Option<Room>> {
        let room = rooms::Entity::find_by_id(room_id).one(&self.db).await?;
        Ok(room.map(Room::from))
    }

    async fn list_rooms(&self) -> Result<Vec<Room>> {
        let rooms = rooms::Entity::find()
            .order_by_asc(rooms::Column::Id)
            .all(&self.db)
            .await?;

        Ok(rooms.into_iter().map(Room::from).collect())
    }
}
