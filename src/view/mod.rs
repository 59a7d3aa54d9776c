//! Read-only views derived from an [`InventoryDocument`](crate::model::InventoryDocument).

pub mod counters;
pub mod floors;
pub mod format;

pub use counters::StatusCounts;
pub use floors::{floor_keys, FloorRow, FloorView};
pub use format::{format_aed, format_area, text_or_placeholder, PLACEHOLDER};

use crate::model::InventoryDocument;
use serde::Serialize;

/// Everything the dashboard draws from one document.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct InventoryView {
    pub project_name: String,
    pub counts: StatusCounts,
    pub grid: FloorView,
}

impl InventoryView {
    #[must_use]
    pub fn derive(document: &InventoryDocument) -> Self {
        Self {
            project_name: document.project_name.clone(),
            counts: StatusCounts::from_records(&document.records),
            grid: FloorView::build(&document.floors),
        }
    }
}
