use ratatui::style::Color;
use serde::Serialize;

/// Sale state of a unit, always derived from the raw status text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusKind {
    Available,
    OnHold,
    Booked,
    Sold,
}

impl StatusKind {
    /// Display order of the counter cards.
    pub const ALL: [Self; 4] = [Self::Available, Self::OnHold, Self::Booked, Self::Sold];

    /// Classifies a raw status string.
    ///
    /// Case-insensitive substring match in priority order: "sold", "hold",
    /// "book". Anything else, including a missing or empty status, is
    /// [`StatusKind::Available`].
    ///
    /// ```
    /// use inventory_board::model::StatusKind;
    ///
    /// assert_eq!(StatusKind::classify(Some("SOLD OUT")), StatusKind::Sold);
    /// assert_eq!(StatusKind::classify(Some("on_hold")), StatusKind::OnHold);
    /// assert_eq!(StatusKind::classify(None), StatusKind::Available);
    /// ```
    #[must_use]
    pub fn classify(raw: Option<&str>) -> Self {
        let Some(raw) = raw else {
            return Self::Available;
        };
        let lower = raw.to_lowercase();
        if lower.contains("sold") {
            Self::Sold
        } else if lower.contains("hold") {
            Self::OnHold
        } else if lower.contains("book") {
            Self::Booked
        } else {
            Self::Available
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Available => "Available",
            Self::OnHold => "On Hold",
            Self::Booked => "Booked",
            Self::Sold => "Sold",
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Available => "available",
            Self::OnHold => "on_hold",
            Self::Booked => "booked",
            Self::Sold => "sold",
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        match self {
            Self::Available => Color::Rgb(0x2E, 0x8B, 0x57), // #2e8b57
            Self::OnHold => Color::Rgb(0xF4, 0xA2, 0x61),    // #f4a261
            Self::Booked => Color::Rgb(0x1E, 0x60, 0x91),    // #1e6091
            Self::Sold => Color::Rgb(0x9D, 0x02, 0x08),      // #9d0208
        }
    }

    /// Sold units can be viewed in the grid but never opened.
    #[must_use]
    pub fn is_selectable(self) -> bool {
        self != Self::Sold
    }
}

#[cfg(test)]
mod tests {
    use super::StatusKind;
    use pretty_assertions::assert_eq;

    #[test]
    fn sold_wins_over_every_other_keyword() {
        assert_eq!(StatusKind::classify(Some("Sold")), StatusKind::Sold);
        assert_eq!(StatusKind::classify(Some("sold - on hold")), StatusKind::Sold);
        assert_eq!(StatusKind::classify(Some("booked/SOLD")), StatusKind::Sold);
    }

    #[test]
    fn hold_wins_over_book() {
        assert_eq!(StatusKind::classify(Some("ON_HOLD")), StatusKind::OnHold);
        assert_eq!(StatusKind::classify(Some("booking hold")), StatusKind::OnHold);
    }

    #[test]
    fn book_matches_any_surrounding_text() {
        assert_eq!(StatusKind::classify(Some("Booked")), StatusKind::Booked);
        assert_eq!(StatusKind::classify(Some("pre-booking")), StatusKind::Booked);
    }

    #[test]
    fn unknown_missing_and_empty_are_available() {
        assert_eq!(StatusKind::classify(None), StatusKind::Available);
        assert_eq!(StatusKind::classify(Some("")), StatusKind::Available);
        assert_eq!(StatusKind::classify(Some("reserved")), StatusKind::Available);
        assert_eq!(StatusKind::classify(Some("available")), StatusKind::Available);
    }

    #[test]
    fn only_sold_is_inert() {
        let selectable: Vec<bool> = StatusKind::ALL.iter().map(|k| k.is_selectable()).collect();
        assert_eq!(selectable, vec![true, true, true, false]);
    }
}
