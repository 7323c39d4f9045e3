use super::{SqlStorage, insert_returning_id, statement, trainer_from_row};
use crate::{
    error::Result,
    services::{Outcome, TrainerManagement},
};
use async_trait::async_trait;
use log::{debug, warn};
use models::{NewTrainer, Trainer};
use sea_orm::{ConnectionTrait, TransactionTrait, Value};

const SELECT_TRAINER: &str =
    "SELECT id, name, specialization, experience_years, room_id FROM trainers";

impl SqlStorage {
    /// Runs a single-row `UPDATE trainers ...` and maps the row count to an outcome
    async fn update_trainer<I>(&self, trainer_id: i32, sql: &str, values: I) -> Result<Outcome>
    where
        I: IntoIterator<Item = Value> + Send,
    {
        let result = self.db.execute(statement(&self.db, sql, values)).await?;

        let outcome = Outcome::from_rows_affected(result.rows_affected());
        if outcome.is_not_found() {
            warn!("Trainer {trainer_id} not found, nothing updated");
        }

        Ok(outcome)
    }
}

#[async_trait]
impl TrainerManagement for SqlStorage {
    async fn add_trainer(&self, trainer: NewTrainer) -> Result<i32> {
        let id = insert_returning_id(
            &self.db,
            r#"
            INSERT INTO trainers (name, specialization, experience_years, room_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
            [
                Value::from(trainer.name),
                Value::from(trainer.specialization),
                Value::from(trainer.experience_years),
                Value::from(trainer.room_id),
            ],
        )
        .await?;

        debug!("Added trainer {id}");
        Ok(id)
    }

    async fn update_trainer_room(
        &self,
        trainer_id: i32,
        new_room_id: Option<i32>,
    ) -> Result<Outcome> {
        self.update_trainer(
            trainer_id,
            "UPDATE trainers SET room_id = $1 WHERE id = $2",
            [Value::from(new_room_id), Value::from(trainer_id)],
        )
        .await
    }

    async fn update_trainer_spec(
        &self,
        trainer_id: i32,
        new_specialization: &str,
    ) -> Result<Outcome> {
        self.update_trainer(
            trainer_id,
            "UPDATE trainers SET specialization = $1 WHERE id = $2",
            [Value::from(new_specialization), Value::from(trainer_id)],
        )
        .await
    }

    async fn delete_trainer(&self, trainer_id: i32) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let released = txn
            .execute(statement(
                &txn,
                "DELETE FROM trainer_equipment WHERE trainer_id = $1",
                [Value::from(trainer_id)],
            ))
            .await?;

        let deleted = txn
            .execute(statement(
                &txn,
                "DELETE FROM trainers WHERE id = $1",
                [Value::from(trainer_id)],
            ))
            .await?;

        let outcome = Outcome::from_rows_affected(deleted.rows_affected());
        if outcome.is_not_found() {
            warn!("Trainer {trainer_id} not found, nothing deleted");
            txn.rollback().await?;
            return Ok(outcome);
        }

        txn.commit().await?;

        debug!(
            "Deleted trainer {trainer_id} and {} equipment assignments",
            released.rows_affected()
        );
        Ok(outcome)
    }

    async fn select_trainers_by_room(&self, room_id: i32) -> Result<Vec<Trainer>> {
        let rows = self
            .db
            .query_all(statement(
                &self.db,
                &format!("{SELECT_TRAINER} WHERE room_id = $1 ORDER BY id"),
                [Value::from(room_id)],
            ))
            .await?;

        Ok(rows.iter().map(trainer_from_row).collect::<Result<_, _>>()?)
    }

    async fn get_trainer(&self, trainer_id: i32) -> Result<Option<Trainer>> {
        let row = self
            .db
            .query_one(statement(
                &self.db,
                &format!("{SELECT_TRAINER} WHERE id = $1"),
                [Value::from(trainer_id)],
            ))
            .await?;

        Ok(row.as_ref().map(trainer_from_row).transpose()?)
    }

    async fn list_trainers(&self) -> Result<Vec<Trainer>> {
        let rows = self
            .db
            .query_all(statement(
                &self.db,
                &format!("{SELECT_TRAINER} ORDER BY id"),
                [],
            ))
            .await?;

        Ok(rows.iter().map(trainer_from_row).collect::<Result<_, _>>()?)
    }
}
