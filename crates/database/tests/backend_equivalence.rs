//! Both backends must leave identical state behind for identical calls, and
//! must be able to read what the other one wrote.

use database::{Backend, Storage, db::connect_and_migrate};
use models::{Equipment, NewEquipment, NewRoom, NewTrainer, Room, Trainer, TrainerEquipmentReport};
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

async fn setup_db() -> (DatabaseConnection, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let db_path = temp_dir.path().join("gym.db");
    let url = format!("sqlite://{}?mode=rwc", db_path.display());

    let db = connect_and_migrate(&url)
        .await
        .expect("connect_and_migrate failed");

    (db, temp_dir)
}

#[derive(Debug, PartialEq)]
struct Snapshot {
    rooms: Vec<Room>,
    trainers: Vec<Trainer>,
    equipment: Vec<Equipment>,
    report: TrainerEquipmentReport,
}

async fn snapshot(storage: &dyn Storage) -> Snapshot {
    Snapshot {
        rooms: storage.list_rooms().await.unwrap(),
        trainers: storage.list_trainers().await.unwrap(),
        equipment: storage.list_equipment().await.unwrap(),
        report: storage.calculate_all_trainer_equipment().await.unwrap(),
    }
}

/// A fixed sequence of mutations touching every operation
async fn run_script(storage: &dyn Storage) {
    let boxing = storage
        .add_room(NewRoom::new("Boxing", "10 Lenin St", 20))
        .await
        .unwrap();
    let cardio = storage
        .add_room(NewRoom::new("Cardio", "5 Mira Ave", 30))
        .await
        .unwrap();
    let groups = storage
        .add_room(NewRoom::new("Group classes", "2 Kosmonavtov St", 25))
        .await
        .unwrap();

    let mut trainers = Vec::new();
    for (name, spec, years, room) in [
        ("Ivanov", "Bodybuilding", 10, Some(boxing)),
        ("Petrov", "Powerlifting", 5, Some(boxing)),
        ("Sidorova", "Fitness", 3, Some(cardio)),
        ("Smirnov", "CrossFit", 7, Some(groups)),
        ("Volkov", "TRX", 4, None),
    ] {
        trainers.push(
            storage
                .add_trainer(NewTrainer::new(name, spec, years, room))
                .await
                .unwrap(),
        );
    }

    let mut equipment = Vec::new();
    for (name, kind, quantity) in [
        ("Dumbbells 2kg", "Strength", 20),
        ("Treadmill", "Cardio", 5),
        ("Smith machine", "Strength", 2),
    ] {
        equipment.push(
            storage
                .add_equipment(NewEquipment::new(name, kind, quantity))
                .await
                .unwrap(),
        );
    }

    for (t, e, q) in [(0, 0, 5), (0, 1, 2), (1, 2, 1), (2, 0, 3), (0, 0, 4), (3, 1, 6)] {
        storage
            .add_equipment_to_trainer(trainers[t], equipment[e], q)
            .await
            .unwrap();
    }

    storage
        .update_trainer_room(trainers[0], Some(cardio))
        .await
        .unwrap();
    storage
        .update_trainer_spec(trainers[4], "Stretching")
        .await
        .unwrap();
    storage.update_trainer_room(9999, Some(boxing)).await.unwrap();

    storage.delete_room(groups).await.unwrap();
    storage.delete_trainer(trainers[1]).await.unwrap();
    storage.delete_equipment(equipment[2]).await.unwrap();
    storage.delete_room(9999).await.unwrap();
}

#[tokio::test]
async fn test_backends_leave_identical_state() {
    let (orm_db, _orm_temp) = setup_db().await;
    let (sql_db, _sql_temp) = setup_db().await;

    let orm = database::open(orm_db, Backend::Orm);
    let sql = database::open(sql_db, Backend::Sql);

    run_script(orm.as_ref()).await;
    run_script(sql.as_ref()).await;

    let orm_state = snapshot(orm.as_ref()).await;
    let sql_state = snapshot(sql.as_ref()).await;

    assert_eq!(orm_state, sql_state);
    assert_eq!(orm_state.rooms.len(), 2);
    assert_eq!(orm_state.trainers.len(), 4);
    assert_eq!(orm_state.equipment.len(), 2);
    assert_eq!(
        orm_state.report.by_trainer_name()["Ivanov"]["Dumbbells 2kg"],
        9
    );
}

#[tokio::test]
async fn test_backends_read_each_others_writes() {
    let (db, _temp) = setup_db().await;

    let orm = database::open(db.clone(), Backend::Orm);
    let sql = database::open(db, Backend::Sql);

    let room = orm
        .add_room(NewRoom::new("Boxing", "10 Lenin St", 20))
        .await
        .unwrap();
    let trainer = sql
        .add_trainer(NewTrainer::new("Kozlova", "Pilates", 2, Some(room)))
        .await
        .unwrap();
    let item = orm
        .add_equipment(NewEquipment::new("Treadmill", "Cardio", 5))
        .await
        .unwrap();

    orm.add_equipment_to_trainer(trainer, item, 3).await.unwrap();
    sql.add_equipment_to_trainer(trainer, item, 4).await.unwrap();

    assert_eq!(snapshot(orm.as_ref()).await, snapshot(sql.as_ref()).await);
    assert_eq!(
        orm.get_assignment(trainer, item)
            .await
            .unwrap()
            .map(|link| link.quantity),
        Some(7)
    );
    assert_eq!(
        sql.select_trainers_by_room(room).await.unwrap(),
        orm.select_trainers_by_room(room).await.unwrap()
    );
}
