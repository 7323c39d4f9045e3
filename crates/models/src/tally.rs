//! Per-trainer equipment aggregation.
//!
//! Tallies are keyed by stable ids so that two pieces of equipment (or two
//! trainers) sharing a display name never overwrite each other. Name-keyed
//! maps are only produced on request through the `by_name` projections, and
//! those resolve collisions by keeping the entry with the highest id.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, btree_map};

/// One line of a tally: a named piece of equipment and the assigned amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TalliedEquipment {
    pub name: String,
    pub quantity: i32,
}

/// Equipment assigned to a single trainer, keyed by equipment id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EquipmentTally(BTreeMap<i32, TalliedEquipment>);

impl EquipmentTally {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `quantity` of equipment `equipment_id`, replacing any previous line for that id
    pub fn insert(&mut self, equipment_id: i32, name: impl Into<String>, quantity: i32) {
        self.0.insert(
            equipment_id,
            TalliedEquipment {
                name: name.into(),
                quantity,
            },
        );
    }

    pub fn get(&self, equipment_id: i32) -> Option<&TalliedEquipment> {
        self.0.get(&equipment_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates lines in ascending equipment id order
    pub fn iter(&self) -> btree_map::Iter<'_, i32, TalliedEquipment> {
        self.0.iter()
    }

    /// Sum of assigned quantities across all lines
    pub fn total_quantity(&self) -> i64 {
        self.0.values().map(|line| i64::from(line.quantity)).sum()
    }

    /// Projects the tally to equipment name -> quantity.
    ///
    /// When two lines share a name, the one with the higher equipment id wins.
    pub fn by_name(&self) -> BTreeMap<String, i32> {
        self.0
            .values()
            .map(|line| (line.name.clone(), line.quantity))
            .collect()
    }
}

impl<'a> IntoIterator for &'a EquipmentTally {
    type Item = (&'a i32, &'a TalliedEquipment);
    type IntoIter = btree_map::Iter<'a, i32, TalliedEquipment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// A trainer's name together with their equipment tally
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrainerSummary {
    pub name: String,
    pub equipment: EquipmentTally,
}

/// Equipment tallies for every trainer, keyed by trainer id
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrainerEquipmentReport(BTreeMap<i32, TrainerSummary>);

impl TrainerEquipmentReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, trainer_id: i32, name: impl Into<String>, equipment: EquipmentTally) {
        self.0.insert(
            trainer_id,
            TrainerSummary {
                name: name.into(),
                equipment,
            },
        );
    }

    pub fn get(&self, trainer_id: i32) -> Option<&TrainerSummary> {
        self.0.get(&trainer_id)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> btree_map::Iter<'_, i32, TrainerSummary> {
        self.0.iter()
    }

    /// Projects the report to trainer name -> equipment name -> quantity.
    ///
    /// Collisions on either level keep the entry with the higher id.
    pub fn by_trainer_name(&self) -> BTreeMap<String, BTreeMap<String, i32>> {
        self.0
            .values()
            .map(|summary| (summary.name.clone(), summary.equipment.by_name()))
            .collect()
    }
}

impl<'a> IntoIterator for &'a TrainerEquipmentReport {
    type Item = (&'a i32, &'a TrainerSummary);
    type IntoIter = btree_map::Iter<'a, i32, TrainerSummary>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod test {
    use crate::tally::{EquipmentTally, TrainerEquipmentReport};
    use std::collections::BTreeMap;

    #[test]
    fn test_tally_keeps_lines_with_same_name_apart() {
        let mut tally = EquipmentTally::new();
        tally.insert(1, "Dumbbells", 5);
        tally.insert(7, "Dumbbells", 2);

        assert_eq!(tally.len(), 2);
        assert_eq!(tally.total_quantity(), 7);
        assert_eq!(tally.get(1).map(|line| line.quantity), Some(5));
        assert_eq!(tally.get(7).map(|line| line.quantity), Some(2));
    }

    #[test]
    fn test_by_name_prefers_highest_id_on_collision() {
        let mut tally = EquipmentTally::new();
        tally.insert(7, "Dumbbells", 2);
        tally.insert(1, "Dumbbells", 5);
        tally.insert(3, "Treadmill", 1);

        let expected = BTreeMap::from([("Dumbbells".to_string(), 2), ("Treadmill".to_string(), 1)]);
        assert_eq!(tally.by_name(), expected);
    }

    #[test]
    fn test_empty_tally() {
        let tally = EquipmentTally::new();
        assert!(tally.is_empty());
        assert_eq!(tally.total_quantity(), 0);
        assert!(tally.by_name().is_empty());
    }

    #[test]
    fn test_report_projection_includes_trainers_without_equipment() {
        let mut smith = EquipmentTally::new();
        smith.insert(2, "Treadmill", 1);

        let mut report = TrainerEquipmentReport::new();
        report.insert(1, "Smith", smith);
        report.insert(2, "Kozlova", EquipmentTally::new());

        let projected = report.by_trainer_name();
        assert_eq!(projected.len(), 2);
        assert_eq!(projected["Smith"]["Treadmill"], 1);
        assert!(projected["Kozlova"].is_empty());
    }

    #[test]
    fn test_report_serializes_keyed_by_id() {
        let mut tally = EquipmentTally::new();
        tally.insert(4, "Kettlebell", 3);

        let mut report = TrainerEquipmentReport::new();
        report.insert(9, "Volkov", tally);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["9"]["name"], "Volkov");
        assert_eq!(json["9"]["equipment"]["4"]["quantity"], 3);
    }
}
