use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A piece of sports equipment and its total stock
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Equipment {
    pub id: i32,
    pub name: String,
    /// Free-text category, stored in the `type` column
    pub kind: String,
    pub quantity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEquipment {
    pub name: String,
    pub kind: String,
    pub quantity: i32,
}

impl NewEquipment {
    pub fn new(name: impl Into<String>, kind: impl Into<String>, quantity: i32) -> Self {
        Self {
            name: name.into(),
            kind: kind.into(),
            quantity,
        }
    }
}

/// Amount of one piece of equipment assigned to one trainer.
///
/// There is at most one of these per `(trainer_id, equipment_id)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerEquipment {
    pub trainer_id: i32,
    pub equipment_id: i32,
    pub quantity: i32,
}

impl Display for Equipment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "({}, '{}', '{}', {})",
            self.id, self.name, self.kind, self.quantity
        )
    }
}

impl Display for TrainerEquipment {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "({}, {}, {})",
            self.trainer_id, self.equipment_id, self.quantity
        )
    }
}
