use database::{
    Backend, Config, EquipmentManagement, RoomManagement, Storage, TrainerManagement,
    db::connect_and_migrate,
};
use log::{error, info};
use models::{NewEquipment, NewRoom, NewTrainer};

/// Ids handed out while seeding, in insertion order
struct DemoIds {
    rooms: Vec<i32>,
    trainers: Vec<i32>,
    equipment: Vec<i32>,
}

/// Rooms as (name, location, capacity); the first two go through the ORM backend
const ROOMS: [(&str, &str, i32); 4] = [
    ("Boxing hall", "10 Lenin St", 20),
    ("Cardio zone", "5 Mira Ave", 30),
    ("Free weights zone", "15 Gagarin St", 40),
    ("Group classes hall", "2 Kosmonavtov St", 25),
];

/// Trainers as (name, specialization, experience years, room index)
const TRAINERS: [(&str, &str, i32, usize); 6] = [
    ("Ivanov Ivan Ivanovich", "Bodybuilding", 10, 0),
    ("Petrov Petr Petrovich", "Powerlifting", 5, 0),
    ("Sidorova Anna Sergeevna", "Fitness", 3, 1),
    ("Smirnov Aleksei Ivanovich", "CrossFit", 7, 1),
    ("Kozlova Elena Vladimirovna", "Pilates", 2, 0),
    ("Volkov Dmitrii Andreevich", "TRX", 4, 1),
];

/// Equipment as (name, type, stock)
const EQUIPMENT: [(&str, &str, i32); 6] = [
    ("Dumbbells 2kg", "Strength training", 20),
    ("Treadmill", "Cardio", 5),
    ("Smith machine", "Strength training", 2),
    ("Exercise bike", "Cardio", 3),
    ("Elliptical trainer", "Cardio", 4),
    ("Kettlebell 16kg", "Strength training", 10),
];

/// Assignments as (trainer index, equipment index, quantity)
const ASSIGNMENTS: [(usize, usize, i32); 10] = [
    (0, 0, 5),
    (0, 1, 2),
    (1, 2, 1),
    (2, 3, 8),
    (3, 4, 10),
    (4, 0, 3),
    (3, 1, 1),
    (2, 2, 2),
    (1, 3, 6),
    (0, 4, 5),
];

/// Seeds the demo rows, splitting the work between the two backends
async fn seed(orm: &dyn Storage, sql: &dyn Storage) -> anyhow::Result<DemoIds> {
    let mut ids = DemoIds {
        rooms: Vec::new(),
        trainers: Vec::new(),
        equipment: Vec::new(),
    };

    for (idx, (name, location, capacity)) in ROOMS.into_iter().enumerate() {
        let storage = if idx < ROOMS.len() / 2 { orm } else { sql };
        ids.rooms
            .push(storage.add_room(NewRoom::new(name, location, capacity)).await?);
    }

    for (idx, (name, specialization, years, room)) in TRAINERS.into_iter().enumerate() {
        let storage = if idx < TRAINERS.len() / 2 { orm } else { sql };
        let trainer = NewTrainer::new(name, specialization, years, Some(ids.rooms[room]));
        ids.trainers.push(storage.add_trainer(trainer).await?);
    }

    for (idx, (name, kind, quantity)) in EQUIPMENT.into_iter().enumerate() {
        let storage = if idx < EQUIPMENT.len() / 2 { orm } else { sql };
        ids.equipment
            .push(storage.add_equipment(NewEquipment::new(name, kind, quantity)).await?);
    }

    for (idx, (trainer, item, quantity)) in ASSIGNMENTS.into_iter().enumerate() {
        let storage = if idx < ASSIGNMENTS.len() / 2 { orm } else { sql };
        storage
            .add_equipment_to_trainer(ids.trainers[trainer], ids.equipment[item], quantity)
            .await?;
    }

    info!(
        "Seeded {} rooms, {} trainers, {} equipment items, {} assignments",
        ids.rooms.len(),
        ids.trainers.len(),
        ids.equipment.len(),
        ASSIGNMENTS.len()
    );
    Ok(ids)
}

async fn print_room(storage: &dyn Storage, room_id: i32) -> anyhow::Result<()> {
    println!("Trainers in room {room_id}:");
    for trainer in storage.select_trainers_by_room(room_id).await? {
        println!("  {trainer}");
    }
    Ok(())
}

/// Walks through every operation on the configured backend
async fn exercise(storage: &dyn Storage, ids: &DemoIds) -> anyhow::Result<()> {
    let first_room = ids.rooms[0];
    let second_room = ids.rooms[1];

    print_room(storage, first_room).await?;

    // Move two trainers over, show both rooms, then move them back
    storage
        .update_trainer_room(ids.trainers[0], Some(second_room))
        .await?;
    storage
        .update_trainer_room(ids.trainers[1], Some(second_room))
        .await?;
    print_room(storage, first_room).await?;
    print_room(storage, second_room).await?;

    storage
        .update_trainer_room(ids.trainers[0], Some(first_room))
        .await?;
    storage
        .update_trainer_room(ids.trainers[1], Some(first_room))
        .await?;

    let outcome = storage
        .update_trainer_spec(ids.trainers[2], "Functional training")
        .await?;
    println!("Specialization update: {outcome:?}");

    // Delete and re-create the last trainer and the last room
    let (name, specialization, years, room) = TRAINERS[TRAINERS.len() - 1];
    println!("Delete trainer: {:?}", storage.delete_trainer(ids.trainers[5]).await?);
    storage
        .add_trainer(NewTrainer::new(name, specialization, years, Some(ids.rooms[room])))
        .await?;

    let (name, location, capacity) = ROOMS[ROOMS.len() - 1];
    println!("Delete room: {:?}", storage.delete_room(ids.rooms[3]).await?);
    storage
        .add_room(NewRoom::new(name, location, capacity))
        .await?;

    println!("Delete missing room: {:?}", storage.delete_room(-1).await?);

    let report = storage.calculate_all_trainer_equipment().await?;
    println!("{}", serde_json::to_string_pretty(&report.by_trainer_name())?);

    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = Config::from_env()?;
    let db = connect_and_migrate(&config.database_url).await?;

    let orm = database::open(db.clone(), Backend::Orm);
    let sql = database::open(db, Backend::Sql);

    let ids = seed(orm.as_ref(), sql.as_ref()).await?;

    info!("Exercising the {} backend", config.backend);
    let storage = match config.backend {
        Backend::Orm => orm.as_ref(),
        Backend::Sql => sql.as_ref(),
    };
    exercise(storage, &ids).await
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        error!("Seeding failed: {e:#}");
        std::process::exit(1);
    }
}
