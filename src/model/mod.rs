pub mod document;
pub mod status;
pub mod unit;

pub use document::{InventoryDocument, HIDDEN_FLOOR_KEY};
pub use status::StatusKind;
pub use unit::Unit;
