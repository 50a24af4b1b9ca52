//! Preview flow: pull the cached Record back out of the client cache and
//! project it into the preview page's regions.

use std::sync::Arc;

use tracing::{info, warn};

use crate::binding::populate;
use crate::errors::EditorError;
use crate::models::region::EditableRegion;
use crate::store::ClientCache;

/// Outcome of a preview load.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewLoad {
    Loaded { photo: Option<String> },
    /// Nothing cached — the user reached the preview without filling the
    /// form. Logged, not an error.
    Empty,
}

pub struct PreviewLoader {
    cache: Arc<dyn ClientCache>,
}

impl PreviewLoader {
    pub fn new(cache: Arc<dyn ClientCache>) -> Self {
        Self { cache }
    }

    pub async fn load(&self, regions: &mut [EditableRegion]) -> Result<PreviewLoad, EditorError> {
        let Some(record) = self.cache.get_record().await? else {
            warn!("no résumé data in the client cache");
            return Ok(PreviewLoad::Empty);
        };

        populate(&record, regions);
        let photo = self.cache.get_photo().await?;
        info!(regions = regions.len(), photo = photo.is_some(), "preview loaded");
        Ok(PreviewLoad::Loaded { photo })
    }
}
