use crate::model::{Unit, HIDDEN_FLOOR_KEY};
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// One displayed floor and its units in tile order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FloorRow {
    /// Original key text, never reformatted.
    pub key: String,
    pub units: Vec<Unit>,
}

/// The floor grid: displayed floors in ascending numeric order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FloorView {
    pub floors: Vec<FloorRow>,
}

impl FloorView {
    #[must_use]
    pub fn build(floors: &BTreeMap<String, Vec<Unit>>) -> Self {
        let floors = floor_keys(floors)
            .into_iter()
            .map(|key| {
                let mut units = floors.get(key).cloned().unwrap_or_default();
                // Lexicographic on purpose: "10" sorts before "2".
                units.sort_by(|a, b| a.unit_no.cmp(&b.unit_no));
                FloorRow {
                    key: key.to_string(),
                    units,
                }
            })
            .collect();
        Self { floors }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.floors.is_empty()
    }

    #[must_use]
    pub fn unit(&self, floor: usize, unit: usize) -> Option<&Unit> {
        self.floors.get(floor).and_then(|f| f.units.get(unit))
    }

    #[must_use]
    pub fn total_units(&self) -> usize {
        self.floors.iter().map(|f| f.units.len()).sum()
    }
}

/// Displayed floor keys, lowest floor first.
///
/// The hidden key `"-1"` is dropped. Keys that do not parse as numbers go
/// after all numeric keys; ties fall back to plain string order.
#[must_use]
pub fn floor_keys(floors: &BTreeMap<String, Vec<Unit>>) -> Vec<&str> {
    let mut keys: Vec<&str> = floors
        .keys()
        .map(String::as_str)
        .filter(|key| *key != HIDDEN_FLOOR_KEY)
        .collect();
    keys.sort_by(|a, b| compare_floor_keys(a, b));
    keys
}

fn compare_floor_keys(a: &str, b: &str) -> Ordering {
    let numeric = |key: &str| key.trim().parse::<f64>().ok().filter(|n| !n.is_nan());
    match (numeric(a), numeric(b)) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal).then_with(|| a.cmp(b)),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn floors(entries: &[(&str, &[&str])]) -> BTreeMap<String, Vec<Unit>> {
        entries
            .iter()
            .map(|(key, units)| {
                (
                    (*key).to_string(),
                    units.iter().map(|no| Unit::new(*no)).collect(),
                )
            })
            .collect()
    }

    #[test]
    fn keys_sort_numerically_not_lexicographically() {
        let map = floors(&[("10", &[]), ("2", &[]), ("1", &[]), ("0", &[])]);
        assert_eq!(floor_keys(&map), vec!["0", "1", "2", "10"]);
    }

    #[test]
    fn hidden_floor_is_excluded_wherever_it_sorts() {
        let map = floors(&[("-1", &["B1"]), ("-2", &["B2"]), ("3", &["301"])]);
        let view = FloorView::build(&map);
        let keys: Vec<&str> = view.floors.iter().map(|f| f.key.as_str()).collect();
        assert_eq!(keys, vec!["-2", "3"]);
        assert_eq!(view.total_units(), 2);
    }

    #[test]
    fn keys_keep_their_original_spelling() {
        let map = floors(&[("02", &[]), ("1", &[]), ("10", &[])]);
        assert_eq!(floor_keys(&map), vec!["1", "02", "10"]);
    }

    #[test]
    fn non_numeric_keys_go_last() {
        let map = floors(&[("roof", &[]), ("5", &[]), ("mezz", &[])]);
        assert_eq!(floor_keys(&map), vec!["5", "mezz", "roof"]);
    }

    #[test]
    fn units_sort_as_strings() {
        let map = floors(&[("1", &["2", "10", "1"])]);
        let view = FloorView::build(&map);
        let order: Vec<&str> = view.floors[0]
            .units
            .iter()
            .map(|u| u.unit_no.as_str())
            .collect();
        assert_eq!(order, vec!["1", "10", "2"]);
    }

    #[test]
    fn empty_floors_give_empty_view() {
        let view = FloorView::build(&BTreeMap::new());
        assert!(view.is_empty());
        assert_eq!(view.unit(0, 0), None);
    }
}
