pub mod equipment;
pub mod rooms;
pub mod trainer_equipment;
pub mod trainers;
