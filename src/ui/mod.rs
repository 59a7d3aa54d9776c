pub mod app;
pub mod dashboard;
pub mod layout;

pub use app::{App, UnitRef};
