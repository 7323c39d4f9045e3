use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create rooms table
        manager
            .create_table(
                Table::create()
                    .table(Rooms::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Rooms::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Rooms::Name).string().not_null())
                    .col(ColumnDef::new(Rooms::Location).string().not_null())
                    .col(ColumnDef::new(Rooms::Capacity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create trainers table; removing a room leaves its trainers unassigned
        manager
            .create_table(
                Table::create()
                    .table(Trainers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Trainers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Trainers::Name).string().not_null())
                    .col(ColumnDef::new(Trainers::Specialization).string().not_null())
                    .col(ColumnDef::new(Trainers::ExperienceYears).integer().not_null())
                    .col(ColumnDef::new(Trainers::RoomId).integer().null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-trainers-room_id")
                            .from(Trainers::Table, Trainers::RoomId)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::SetNull),
                    )
                    .to_owned(),
            )
            .await?;

        // Create equipment table
        manager
            .create_table(
                Table::create()
                    .table(Equipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Equipment::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Equipment::Name).string().not_null())
                    .col(ColumnDef::new(Equipment::Type).string().not_null())
                    .col(ColumnDef::new(Equipment::Quantity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // Create trainer_equipment junction table, one row per (trainer, equipment) pair
        manager
            .create_table(
                Table::create()
                    .table(TrainerEquipment::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(TrainerEquipment::TrainerId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainerEquipment::EquipmentId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(TrainerEquipment::Quantity)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .name("pk-trainer_equipment")
                            .col(TrainerEquipment::TrainerId)
                            .col(TrainerEquipment::EquipmentId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-trainer_equipment-trainer_id")
                            .from(TrainerEquipment::Table, TrainerEquipment::TrainerId)
                            .to(Trainers::Table, Trainers::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk-trainer_equipment-equipment_id")
                            .from(TrainerEquipment::Table, TrainerEquipment::EquipmentId)
                            .to(Equipment::Table, Equipment::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name("idx-trainers-room_id")
                    .table(Trainers::Table)
                    .col(Trainers::RoomId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Drop tables in reverse order due to foreign key constraints
        manager
            .drop_table(Table::drop().table(TrainerEquipment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Equipment::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Trainers::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Rooms::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
    Name,
    Location,
    Capacity,
}

#[derive(Iden)]
enum Trainers {
    Table,
    Id,
    Name,
    Specialization,
    ExperienceYears,
    RoomId,
}

#[derive(Iden)]
enum Equipment {
    Table,
    Id,
    Name,
    Type,
    Quantity,
}

#[derive(Iden)]
enum TrainerEquipment {
    Table,
    TrainerId,
    EquipmentId,
    Quantity,
}
