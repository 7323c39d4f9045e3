use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A trainer, optionally working out of one room
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trainer {
    pub id: i32,
    pub name: String,
    /// Free-text category, e.g. "Powerlifting"
    pub specialization: String,
    pub experience_years: i32,
    /// `None` when the trainer is not assigned to any room
    pub room_id: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewTrainer {
    pub name: String,
    pub specialization: String,
    pub experience_years: i32,
    pub room_id: Option<i32>,
}

impl NewTrainer {
    pub fn new(
        name: impl Into<String>,
        specialization: impl Into<String>,
        experience_years: i32,
        room_id: Option<i32>,
    ) -> Self {
        Self {
            name: name.into(),
            specialization: specialization.into(),
            experience_years,
            room_id,
        }
    }
}

impl Display for Trainer {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "({}, '{}', '{}', {}, ",
            self.id, self.name, self.specialization, self.experience_years
        )?;

        match self.room_id {
            Some(room_id) => write!(f, "{room_id})"),
            None => write!(f, "None)"),
        }
    }
}

#[cfg(test)]
mod test {
    use crate::trainer::Trainer;

    fn trainer(room_id: Option<i32>) -> Trainer {
        Trainer {
            id: 1,
            name: "Ivanov Ivan".to_string(),
            specialization: "Bodybuilding".to_string(),
            experience_years: 10,
            room_id,
        }
    }

    #[test]
    fn test_trainer_display_with_room() {
        assert_eq!(
            trainer(Some(2)).to_string(),
            "(1, 'Ivanov Ivan', 'Bodybuilding', 10, 2)"
        );
    }

    #[test]
    fn test_trainer_display_without_room() {
        assert_eq!(
            trainer(None).to_string(),
            "(1, 'Ivanov Ivan', 'Bodybuilding', 10, None)"
        );
    }
}
