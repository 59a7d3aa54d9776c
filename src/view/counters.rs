use crate::model::{StatusKind, Unit};
use serde::Serialize;

/// Unit totals per status kind.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub available: usize,
    pub on_hold: usize,
    pub booked: usize,
    pub sold: usize,
}

impl StatusCounts {
    /// Counts every record once under its classified status.
    #[must_use]
    pub fn from_records(records: &[Unit]) -> Self {
        records.iter().fold(Self::default(), |mut counts, unit| {
            *counts.slot_mut(unit.status()) += 1;
            counts
        })
    }

    #[must_use]
    pub fn get(&self, kind: StatusKind) -> usize {
        match kind {
            StatusKind::Available => self.available,
            StatusKind::OnHold => self.on_hold,
            StatusKind::Booked => self.booked,
            StatusKind::Sold => self.sold,
        }
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.available + self.on_hold + self.booked + self.sold
    }

    fn slot_mut(&mut self, kind: StatusKind) -> &mut usize {
        match kind {
            StatusKind::Available => &mut self.available,
            StatusKind::OnHold => &mut self.on_hold,
            StatusKind::Booked => &mut self.booked,
            StatusKind::Sold => &mut self.sold,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_records_count_zero() {
        assert_eq!(StatusCounts::from_records(&[]), StatusCounts::default());
    }

    #[test]
    fn counts_sum_to_record_count() {
        let records: Vec<Unit> = ["Sold", "SOLD", "on_hold", "Booked", "", "whatever", "hold"]
            .iter()
            .enumerate()
            .map(|(i, s)| Unit::new(i.to_string()).with_status(*s))
            .chain(std::iter::once(Unit::new("no-status")))
            .collect();

        let counts = StatusCounts::from_records(&records);

        assert_eq!(
            counts,
            StatusCounts {
                available: 3,
                on_hold: 2,
                booked: 1,
                sold: 2,
            }
        );
        assert_eq!(counts.total(), records.len());
        assert_eq!(counts.get(StatusKind::OnHold), 2);
    }
}
