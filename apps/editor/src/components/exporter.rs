//! Export flow: persist the latest edits, then ask the backend to produce
//! the PDF and surface where to navigate next.

use std::sync::Arc;

use crate::backend::{BackendClient, Navigation};
use crate::components::saver::Saver;
use crate::errors::EditorError;
use crate::models::region::EditableRegion;

pub struct Exporter {
    backend: Arc<BackendClient>,
    saver: Saver,
}

impl Exporter {
    pub fn new(backend: Arc<BackendClient>, saver: Saver) -> Self {
        Self { backend, saver }
    }

    /// Saves first — the PDF is rendered from the server-side copy — then
    /// starts generation. A failed save aborts the export.
    pub async fn export(&self, regions: &[EditableRegion]) -> Result<Navigation, EditorError> {
        self.saver.save(regions).await?;
        self.backend.process_pdf().await
    }
}
