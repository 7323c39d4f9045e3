use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter, Result as FmtResult};

/// A training room that trainers can be assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    pub id: i32,
    pub name: String,
    /// Street address or other free-form location
    pub location: String,
    pub capacity: i32,
}

/// Fields needed to create a room; the id is assigned by the store
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewRoom {
    pub name: String,
    pub location: String,
    pub capacity: i32,
}

impl NewRoom {
    pub fn new(name: impl Into<String>, location: impl Into<String>, capacity: i32) -> Self {
        Self {
            name: name.into(),
            location: location.into(),
            capacity,
        }
    }
}

impl Display for Room {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(
            f,
            "({}, '{}', '{}', {})",
            self.id, self.name, self.location, self.capacity
        )
    }
}

#[cfg(test)]
mod test {
    use crate::room::{NewRoom, Room};

    #[test]
    fn test_room_display() {
        let room = Room {
            id: 3,
            name: "Free weights".to_string(),
            location: "15 Gagarin St".to_string(),
            capacity: 40,
        };

        assert_eq!(room.to_string(), "(3, 'Free weights', '15 Gagarin St', 40)");
    }

    #[test]
    fn test_new_room_accepts_str_and_string() {
        let a = NewRoom::new("Boxing", "10 Lenin St", 20);
        let b = NewRoom::new("Boxing".to_string(), String::from("10 Lenin St"), 20);
        assert_eq!(a, b);
    }
}
