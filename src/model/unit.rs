use super::StatusKind;
use serde::Serialize;

/// One sellable unit, normalised from the loaded JSON.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Unit {
    pub unit_no: String,
    pub unit_label: String,
    /// Raw status text as loaded; see [`Unit::status`].
    pub status: Option<String>,
    pub unit_type: Option<String>,
    pub view: Option<String>,
    pub total_area: Option<f64>,
    pub rooms: Option<String>,
    pub parking: Option<String>,
    pub sales_value: Option<f64>,
    pub floor_no: Option<String>,
}

impl Unit {
    #[must_use]
    pub fn new(unit_no: impl Into<String>) -> Self {
        Self {
            unit_no: unit_no.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    /// Classified status. Every caller goes through here so counters and
    /// tiles can never disagree.
    #[must_use]
    pub fn status(&self) -> StatusKind {
        StatusKind::classify(self.status.as_deref())
    }

    /// Status as shown in the detail view: raw text with underscores turned
    /// into spaces, or the canonical name when the field is missing.
    #[must_use]
    pub fn status_text(&self) -> String {
        match self.status.as_deref() {
            Some(raw) if !raw.trim().is_empty() => raw.replace('_', " "),
            _ => self.status().as_str().replace('_', " "),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::Unit;
    use crate::model::StatusKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn status_text_replaces_underscores() {
        let unit = Unit::new("101").with_status("on_hold");
        assert_eq!(unit.status_text(), "on hold");
        assert_eq!(unit.status(), StatusKind::OnHold);
    }

    #[test]
    fn missing_status_reads_as_available() {
        let unit = Unit::new("101");
        assert_eq!(unit.status_text(), "available");
        assert_eq!(unit.status(), StatusKind::Available);
    }
}
