pub mod equipment;
pub mod room;
pub mod tally;
pub mod trainer;

pub use equipment::{Equipment, NewEquipment, TrainerEquipment};
pub use room::{NewRoom, Room};
pub use tally::{EquipmentTally, TalliedEquipment, TrainerEquipmentReport, TrainerSummary};
pub use trainer::{NewTrainer, Trainer};
