use super::OrmStorage;
use crate::{
    entities::{equipment, trainer_equipment, trainers},
    error::Result,
    services::{EquipmentManagement, Outcome},
};
use async_trait::async_trait;
use log::{debug, warn};
use models::{
    Equipment, EquipmentTally, NewEquipment, TrainerEquipment, TrainerEquipmentReport,
};
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, EntityTrait, ModelTrait, QueryFilter,
    QueryOrder, TransactionTrait, prelude::Expr, sea_query::OnConflict,
};
use std::collections::HashMap;

#[async_trait]
impl EquipmentManagement for OrmStorage {
    async fn add_equipment(&self, new_equipment: NewEquipment) -> Result<i32> {
        let inserted = equipment::ActiveModel {
            name: Set(new_equipment.name),
            kind: Set(new_equipment.kind),
            quantity: Set(new_equipment.quantity),
            ..Default::default()
        }
        .insert(&self.db)
        .await?;

        debug!("Added equipment {}", inserted.id);
        Ok(inserted.id)
    }

    async fn add_equipment_to_trainer(
        &self,
        trainer_id: i32,
        equipment_id: i32,
        quantity: i32,
    ) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let trainer = trainers::Entity::find_by_id(trainer_id).one(&txn).await?;
        let item = equipment::Entity::find_by_id(equipment_id).one(&txn).await?;
        if trainer.is_none() || item.is_none() {
            warn!("Cannot assign equipment {equipment_id} to trainer {trainer_id}: not found");
            txn.rollback().await?;
            return Ok(Outcome::NotFound);
        }

        let link = trainer_equipment::ActiveModel {
            trainer_id: Set(trainer_id),
            equipment_id: Set(equipment_id),
            quantity: Set(quantity),
        };

        // Single statement so two first-time assignments of a pair cannot race
        trainer_equipment::Entity::insert(link)
            .on_conflict(
                OnConflict::columns([
                    trainer_equipment::Column::TrainerId,
                    trainer_equipment::Column::EquipmentId,
                ])
                .value(
                    trainer_equipment::Column::Quantity,
                    Expr::col((trainer_equipment::Entity, trainer_equipment::Column::Quantity))
                        .add(quantity),
                )
                .to_owned(),
            )
            .exec_without_returning(&txn)
            .await?;

        txn.commit().await?;

        debug!("Assigned {quantity} of equipment {equipment_id} to trainer {trainer_id}");
        Ok(Outcome::Applied)
    }

    async fn calculate_trainer_equipment(&self, trainer_id: i32) -> Result<EquipmentTally> {
        let links = trainer_equipment::Entity::find()
            .filter(trainer_equipment::Column::TrainerId.eq(trainer_id))
            .find_also_related(equipment::Entity)
            .all(&self.db)
            .await?;

        let mut tally = EquipmentTally::new();
        for (link, item) in links {
            if let Some(item) = item {
                tally.insert(item.id, item.name, link.quantity);
            }
        }

        Ok(tally)
    }

    async fn calculate_all_trainer_equipment(&self) -> Result<TrainerEquipmentReport> {
        let trainers = trainers::Entity::find()
            .order_by_asc(trainers::Column::Id)
            .all(&self.db)
            .await?;

        let links = trainer_equipment::Entity::find()
            .find_also_related(equipment::Entity)
            .all(&self.db)
            .await?;

        // Build lookup map
        let mut tallies_by_trainer: HashMap<i32, EquipmentTally> = HashMap::new();
        for (link, item) in links {
            if let Some(item) = item {
                tallies_by_trainer
                    .entry(link.trainer_id)
                    .or_default()
                    .insert(item.id, item.name, link.quantity);
            }
        }

        let mut report = TrainerEquipmentReport::new();
        for trainer in trainers {
            let tally = tallies_by_trainer.remove(&trainer.id).unwrap_or_default();
            report.insert(trainer.id, trainer.name, tally);
        }

        Ok(report)
    }

    async fn get_equipment(&self, equipment_id: i32) -> Result<Option<Equipment>> {
        let item = equipment::Entity::find_by_id(equipment_id)
            .one(&self.db)
            .await?;
        Ok(item.map(Equipment::from))
    }

    async fn list_equipment(&self) -> Result<Vec<Equipment>> {
        let items = equipment::Entity::find()
            .order_by_asc(equipment::Column::Id)
            .all(&self.db)
            .await?;

        Ok(items.into_iter().map(Equipment::from).collect())
    }

    async fn delete_equipment(&self, equipment_id: i32) -> Result<Outcome> {
        let txn = self.db.begin().await?;

        let Some(item) = equipment::Entity::find_by_id(equipment_id).one(&txn).await? else {
            warn!("Equipment {equipment_id} not found, nothing deleted");
            txn.rollback().await?;
            return Ok(Outcome::NotFound);
        };

        let released = trainer_equipment::Entity::delete_many()
            .filter(trainer_equipment::Column::EquipmentId.eq(equipment_id))
            .exec(&txn)
            .await?;

        item.delete(&txn).await?;
        txn.commit().await?;

        debug!(
            "Deleted equipment {equipment_id} and {} assignments",
            released.rows_affected
        );
        Ok(Outcome::Applied)
    }

    async fn get_assignment(
        &self,
        trainer_id: i32,
        equipment_id: i32,
    ) -> Result<Option<TrainerEquipment>> {
        let link = trainer_equipment::Entity::find_by_id((trainer_id, equipment_id))
            .one(&self.db)
            .await?;
        Ok(link.map(TrainerEquipment::from))
    }
}
