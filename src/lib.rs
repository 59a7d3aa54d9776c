//! # Inventory Board
//!
//! A terminal dashboard for a building's sale inventory.
//!
//! ## Features
//!
//! - Load an inventory document from a local file or over HTTP
//! - Count units by status (available, on hold, booked, sold)
//! - Browse units floor by floor, with a detail card per unit
//! - Export the floor grid to CSV and JSON
//!
//! ## Example
//!
//! ```no_run
//! use inventory_board::loader::{load_document, DataSource};
//! use inventory_board::view::InventoryView;
//!
//! let document = load_document(&DataSource::default()).expect("Failed to load");
//! let view = InventoryView::derive(&document);
//! println!("Project: {}", view.project_name);
//! println!("Sold: {}", view.counts.sold);
//! ```

pub mod error;
pub mod export;
pub mod loader;
pub mod model;
pub mod ui;
pub mod view;
