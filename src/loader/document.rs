use crate::error::LoadError;
use crate::model::{InventoryDocument, Unit};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Parses an inventory document from JSON text.
///
/// Only the top level is checked: the payload must be valid JSON and an
/// object. Inside it nothing is rejected. Fields of the wrong type are
/// dropped, numbers and numeric strings are coerced where a number is
/// expected, and entries that are not objects are skipped.
///
/// # Errors
///
/// Returns [`LoadError::InvalidJson`] for malformed JSON and
/// [`LoadError::InvalidShape`] when the root is not an object.
///
/// # Example
///
/// ```
/// use inventory_board::loader::parse_document;
///
/// let doc = parse_document(r#"{
///     "project_name": "Marina Heights",
///     "records": [{ "unit_no": "101", "status": "Sold" }],
///     "floors": { "1": [{ "unit_no": "101", "status": "Sold" }] }
/// }"#)?;
/// assert_eq!(doc.project_name, "Marina Heights");
/// assert_eq!(doc.floors["1"][0].unit_no, "101");
/// # Ok::<(), inventory_board::error::LoadError>(())
/// ```
pub fn parse_document(content: &str) -> Result<InventoryDocument, LoadError> {
    let root = match serde_json::from_str::<Value>(content)? {
        Value::Object(root) => root,
        other => {
            return Err(LoadError::InvalidShape {
                message: format!(
                    "expected a JSON object at the root, found {}",
                    kind_of(&other)
                ),
            })
        }
    };

    Ok(InventoryDocument {
        project_name: text(root.get("project_name")).unwrap_or_default(),
        records: units(root.get("records")),
        floors: floors(root.get("floors")),
    })
}

fn floors(value: Option<&Value>) -> BTreeMap<String, Vec<Unit>> {
    match value {
        Some(Value::Object(map)) => map
            .iter()
            .map(|(key, units_value)| (key.clone(), units(Some(units_value))))
            .collect(),
        Some(Value::Null) | None => BTreeMap::new(),
        Some(other) => {
            tracing::warn!(found = kind_of(other), "ignoring non-object floors");
            BTreeMap::new()
        }
    }
}

fn units(value: Option<&Value>) -> Vec<Unit> {
    match value {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(|item| match item {
                Value::Object(fields) => Some(unit(fields)),
                other => {
                    tracing::debug!(found = kind_of(other), "skipping non-object unit entry");
                    None
                }
            })
            .collect(),
        _ => Vec::new(),
    }
}

fn unit(fields: &Map<String, Value>) -> Unit {
    Unit {
        unit_no: text(fields.get("unit_no")).unwrap_or_default(),
        unit_label: text(fields.get("unit_label")).unwrap_or_default(),
        status: text(fields.get("status")),
        unit_type: text(fields.get("unit_type")),
        view: text(fields.get("view")),
        total_area: number(fields.get("total_area")),
        rooms: count(fields.get("rooms")),
        parking: count(fields.get("parking")),
        sales_value: number(fields.get("sales_value")),
        floor_no: text(fields.get("floor_no")),
    }
}

/// Strings as-is, numbers and booleans in their JSON spelling.
fn text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

fn number(value: Option<&Value>) -> Option<f64> {
    let parsed = match value? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    parsed.filter(|n| n.is_finite())
}

/// Counts keep an explicit zero but treat blank strings as missing.
fn count(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::Number(n) => Some(n.to_string()),
        Value::String(s) if !s.trim().is_empty() => Some(s.trim().to_string()),
        _ => None,
    }
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn coerces_loose_field_types() {
        let doc = parse_document(
            r#"{
                "project_name": "Creek Rise",
                "floors": {
                    "3": [{
                        "unit_no": 305,
                        "unit_label": "3BR",
                        "status": "Booked",
                        "total_area": "1450.5",
                        "rooms": 3,
                        "parking": "0",
                        "sales_value": "abc",
                        "floor_no": 3
                    }]
                }
            }"#,
        )
        .unwrap();

        let unit = &doc.floors["3"][0];
        assert_eq!(unit.unit_no, "305");
        assert_eq!(unit.total_area, Some(1450.5));
        assert_eq!(unit.rooms.as_deref(), Some("3"));
        assert_eq!(unit.parking.as_deref(), Some("0"));
        assert_eq!(unit.sales_value, None);
        assert_eq!(unit.floor_no.as_deref(), Some("3"));
        assert!(doc.records.is_empty());
    }

    #[test]
    fn missing_sections_default_to_empty() {
        let doc = parse_document("{}").unwrap();
        assert_eq!(doc, InventoryDocument::default());
    }

    #[test]
    fn skips_entries_that_are_not_objects() {
        let doc = parse_document(r#"{"records": [1, null, {"unit_no": "A1"}], "floors": []}"#)
            .unwrap();
        assert_eq!(doc.records, vec![Unit::new("A1")]);
        assert!(doc.floors.is_empty());
    }

    #[test]
    fn null_and_blank_counts_are_absent() {
        let doc = parse_document(r#"{"records": [{"rooms": null, "parking": "  "}]}"#).unwrap();
        assert_eq!(doc.records[0].rooms, None);
        assert_eq!(doc.records[0].parking, None);
    }

    #[test]
    fn rejects_malformed_json() {
        let err = parse_document("{ not json").unwrap_err();
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }

    #[test]
    fn rejects_non_object_root() {
        let err = parse_document("[]").unwrap_err();
        assert!(matches!(err, LoadError::InvalidShape { .. }));
        assert_eq!(
            err.to_string(),
            "invalid document: expected a JSON object at the root, found array"
        );
    }
}
