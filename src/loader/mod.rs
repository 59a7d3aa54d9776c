pub mod document;
pub mod source;

pub use crate::error::LoadError;
pub use document::parse_document;
pub use source::{DataSource, DEFAULT_SOURCE};

use crate::model::InventoryDocument;
use std::sync::mpsc::{self, Receiver};
use std::thread;

/// Result of the single background load.
pub type LoadOutcome = Result<InventoryDocument, LoadError>;

/// Reads and parses the document, blocking the calling thread.
pub fn load_document(source: &DataSource) -> LoadOutcome {
    tracing::info!(%source, "loading inventory");
    let content = source.read_to_string()?;
    let document = parse_document(&content)?;
    tracing::info!(
        %source,
        project = %document.project_name,
        records = document.records.len(),
        floors = document.floors.len(),
        "inventory loaded"
    );
    Ok(document)
}

/// Starts one best-effort load on a background thread.
///
/// Exactly one outcome is sent. There is no retry, timeout or cancellation;
/// dropping the receiver just discards the result.
#[must_use]
pub fn spawn_loader(source: DataSource) -> Receiver<LoadOutcome> {
    let (tx, rx) = mpsc::channel();
    thread::spawn(move || {
        let outcome = load_document(&source);
        // The UI may already be gone.
        let _ = tx.send(outcome);
    });
    rx
}
