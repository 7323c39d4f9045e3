use super::{SqlStorage, equipment_from_row, exists, insert_returning_id, statement};
use crate::{
    error::Result,
    services::{EquipmentManagement, Outcome},
};
use async_trait::async_trait;
use log::{debug, warn};
use models::{
    Equipment, EquipmentTally, NewEquipment, TrainerEquipment, TrainerEquipmentReport,
};
use sea_orm::{ConnectionTrait, TransactionTrait, Value};
use std::collections::HashMap;

/// Single-statement accumulate-or-insert for one (trainer, equipment) pair
const UPSERT_ASSIGNMENT: &str = r#"
    INSERT INTO trainer_equipment (trainer_id, equipment_id, quantity)
    VALUES ($1, $2, $3)
    ON CONFLICT (trainer_id, equipment_id)
    DO UPDATE SET quantity = trainer_equipment.quantity + excluded.quantity
"#;

#[async_trait]
impl EquipmentManagement for SqlStorage {
    async fn add_equipment(&self, new_equipment: NewEquipment) -> Result<i32> {
        let id = insert_returning_id(
            &self.db,
            r#"INSERT INTO equipment (name, "type", quantity) VALUES ($1, $2, $3) RETURNING id"#,
            [
                Value::from(new_equipment.name),
                Value::from(new_equipment.kind),
                Value::from(new_equipment.quantity),
            ],
        )
        .await?;

        debug!("Added equipment {id}");
        Ok(id)
    }

    async fn add_equipment_to_trainer(
        &self,
        trainer_id: i32,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let trainer_exists = exists(
            &txn,
            "SELECT id FROM trainers WHERE id = $1",
            [Value::from(trainer_id)],
        )
        .await?;
        let equipment_exists = exists(
            &txn,
            "SELECT id FROM equipment WHERE id = $1",
            [Value::from(equipment_id)],
        )
        .await?;

        if !trainer_exists || !equipment_exists {
            warn!("Cannot assign equipment {equipment_id} to trainer {trainer_id}: not found");
            txn.rollback().await?;
            return Ok(Outcome::NotFound);
        }

        txn.execute(statement(
            &txn,
            UPSERT_ASSIGNMENT,
            [
                Value::from(trainer_id),
                Value::from(equipment_id),
                Value::from(quantity),
            ],
        ))
        .await?;

        txn.commit().await?;

        debug!("Assigned {quantity} of equipment {equipment_id} to trainer {trainer_id}");
        Ok(Outcome::Applied)
    }

    async fn calculate_trainer_equipment(&self, trainer_id: i32) -> Result<EquipmentTally> {
        let rows = self
            .db
            .query_all(statement(
                &self.db,
                r#"
                SELECT e.id AS equipment_id, e.name AS equipment_name, te.quantity AS quantity
                FROM trainer_equipment te
                JOIN equipment e ON te.equipment_id = e.id
                WHERE te.trainer_id = $1
                "#,
                [Value::from(trainer_id)],
            ))
            .await?;

        let mut tally = EquipmentTally::new();
        for row in rows {
            tally.insert(
                row.try_get("", "equipment_id")?,
                row.try_get::<String>("", "equipment_name")?,
                row.try_get("", "quantity")?,
            );
        }

        Ok(tally)
    }

    async fn calculate_all_trainer_equipment(&self) -> Result<TrainerEquipmentReport> {
        let trainers = self
            .db
            .query_all(statement(
                &self.db,
                "SELECT id, name FROM trainers ORDER BY id",
                [],
            ))
            .await?;

        let links = self
            .db
            .query_all(statement(
                &self.db,
                r#"
                SELECT te.trainer_id AS trainer_id, e.id AS equipment_id,
                       e.name AS equipment_name, te.quantity AS quantity
                FROM trainer_equipment te
                JOIN equipment e ON te.equipment_id = e.id
                "#,
                [],
            ))
            .await?;

        // Build lookup map
        let mut tallies_by_trainer: HashMap<i32, EquipmentTally> = HashMap::new();
        for row in links {
            tallies_by_trainer
                .entry(row.try_get("", "trainer_id")?)
                .or_default()
                .insert(
                    row.try_get("", "equipment_id")?,
                    row.try_get::<String>("", "equipment_name")?,
                    row.try_get("", "quantity")?,
                );
        }

        let mut report = TrainerEquipmentReport::new();
        for row in trainers {
            let trainer_id: i32 = row.try_get("", "id")?;
            let name: String = row.try_get("", "name")?;
            let tally = tallies_by_trainer.remove(&trainer_id).unwrap_or_default();
            report.insert(trainer_id, name, tally);
        }

        Ok(report)
    }

    async fn get_equipment(&self, equipment_id: i32) -> Result<Option<Equipment>> {
        let row = self
            .db
            .query_one(statement(
                &self.db,
                r#"SELECT id, name, "type", quantity FROM equipment WHERE id = $1"#,
                [Value::from(equipment_id)],
            ))
            .await?;

        Ok(row.as_ref().map(equipment_from_row).transpose()?)
    }

    async fn list_equipment(&self) -> Result<Vec<Equipment>> {
        let rows = self
            .db
            .query_all(statement(
                &self.db,
                r#"SELECT id, name, "type", quantity FROM equipment ORDER BY id"#,
                [],
            ))
            .await?;

        Ok(rows
            .iter()
            .map(equipment_from_row)
            .collect::<Result<_, _>>()?)
    }

    async fn delete_equipment(&self, equipment_id: i32) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let released = txn
            .execute(statement(
                &txn,
                "DELETE FROM trainer_equipment WHERE equipment_id = $1",
                [Value::from(equipment_id)],
            ))
            .await?;

        let deleted = txn
            .execute(statement(
                &txn,
                "DELETE FROM equipment WHERE id = $1",
                [Value::from(equipment_id)],
            ))
            .await?;

        let outcome = Outcome::from_rows_affected(deleted.rows_affected());
        if outcome.is_not_found() {
            warn!("Equipment {equipment_id} not found, nothing deleted");
            txn.rollback().await?;
            return Ok(outcome);
        }

        txn.commit().await?;

        debug!(
            "Deleted equipment {equipment_id} and {} assignments",
            released.rows_affected()
        );
        Ok(outcome)
    }

    async fn get_assignment(
        &self,
        trainer_id: i32,
        equipment_id: i32,
    ) -> Result<Option<TrainerEquipment>> {
        let row = self
            .db
            .query_one(statement(
                &self.db,
                r#"
                SELECT trainer_id, equipment_id, quantity
                FROM trainer_equipment
                WHERE trainer_id = $1 AND equipment_id = $2
                "#,
                [Value::from(trainer_id), Value::from(equipment_id)],
            ))
            .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(Some(TrainerEquipment {
            trainer_id: row.try_get("", "trainer_id")?,
            equipment_id: row.try_get("", "equipment_id")?,
            quantity: row.try_get("", "quantity")?,
        }))
    }
}
