use super::OrmStorage;
use crate::{
    entities::{trainer_equipment, trainers},
    error::Result,
    services::{Outcome, TrainerManagement},
};
use async_trait::async_trait;
use log::{debug, warn};
use models::{NewTrainer, Trainer};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait,
};

impl OrmStorage {
    /// Looks up a trainer and applies `change` to its active model if found
    async fn modify_trainer<F>(&self, trainer_id: i32, change: F) -> Result<Outcome>
    where
        F: FnOnce(&mut trainers::ActiveModel) + Send,
    {
        let Some(trainer) = trainers::Entity::find_by_id(trainer_id)
            .one(&self.db)
            .await?
        else {
            warn!("Trainer {trainer_id} not found, nothing updated");
            return Ok(Outcome::NotFound);
        };

        let mut trainer: trainers::ActiveModel = trainer.into();
        change(&mut trainer);
        trainer.update(&self.db).await?;

        Ok(Outcome::Applied)
    }
}

#[async_trait]
impl TrainerManagement for OrmStorage {
    async fn add_trainer(&self, trainer: NewTrainer) -> Result<i32> {
        let inserted = trainers::ActiveModel {
            name: Set(trainer.name),
            specialization: Set(trainer.specialization),
            experience_years: Set(trainer.experience_years),
            room_id: Set(trainer.room_id),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!("Added trainer {}", inserted.id);
        Ok(inserted.id)
    }

    async fn update_trainer_room(
        &self,
        trainer_id: i32,
        new_room_id: Option<i32>,
    ) -> Result<Outcome> {
        self.modify_trainer(trainer_id, |trainer| trainer.room_id = Set(new_room_id))
            .await
    }

    async fn update_trainer_spec(
        &self,
        trainer_id: i32,
        new_specialization: &str,
    ) -> Result<Outcome> {
        let new_specialization = new_specialization.to_owned();
        self.modify_trainer(trainer_id, |trainer| {
            trainer.specialization = Set(new_specialization)
        })
        .await
    }

    async fn delete_trainer(&self, trainer_id: i32) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let Some(trainer) = trainers::Entity::find_by_id(trainer_id).one(&txn).await? else {
            warn!("Trainer {trainer_id} not found, nothing deleted");
            txn.rollback().await?;
            return Ok(Outcome::NotFound);
        };

        let released = trainer_equipment::Entity::delete_many()
            .filter(trainer_equipment::Column::TrainerId.eq(trainer_id))
            .exec(&txn)
            .await?;

        trainer.delete(&txn).await?;
        txn.commit().await?;

        debug!(
            "Deleted trainer {trainer_id} and {} equipment assignments",
            released.rows_affected
        );
        Ok(Outcome::Applied)
    }

    async fn select_trainers_by_room(&self, room_id: i32) -> Result<Vec<Trainer>> {
        let trainers = trainers::Entity::find()
            .filter(trainers::Column::RoomId.eq(room_id))
            .order_by_asc(trainers::Column::Id)
            .all(&self.db)
            .await?;

        Ok(trainers.into_iter().map(Trainer::from).collect())
    }

    async fn get_trainer(&self, trainer_id: i32) -> Result<Option<Trainer>> {
        let trainer = trainers::Entity::find_by_id(trainer_id)
            .one(&self.db)
            .await?;
        Ok(trainer.map(Trainer::from))
    }

    async fn list_trainers(&self) -> Result<Vec<Trainer>> {
        let trainers = trainers::Entity::find()
            .order_by_asc(trainers::Column::Id)
            .all(&self.db)
            .await?;

        Ok(trainers.into_iter().map(Trainer::from).collect())
    }
}
