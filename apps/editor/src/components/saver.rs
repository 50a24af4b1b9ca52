//! Save flow: rebuild the Record from the editable regions and upsert it
//! on the backend. The Record is constructed fresh on every save — there
//! is no incremental diffing.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::binding::collect;
use crate::errors::EditorError;
use crate::models::record::Record;
use crate::models::region::EditableRegion;

#[derive(Clone)]
pub struct Saver {
    backend: Arc<BackendClient>,
}

impl Saver {
    pub fn new(backend: Arc<BackendClient>) -> Self {
        Self { backend }
    }

    /// Collects the regions and sends the result to the save endpoint.
    pub async fn save(&self, regions: &[EditableRegion]) -> Result<(), EditorError> {
        let record = collect(regions)?;
        self.push(&record).await
    }

    /// Sends an already-built Record, bypassing collection. Used by the
    /// offline sync flow.
    pub async fn push(&self, record: &Record) -> Result<(), EditorError> {
        self.backend.save_record(record).await
    }
}
