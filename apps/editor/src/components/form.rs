//! Form page flow: submit validation, the cache handoff to the preview
//! page, photo attachment and repeatable-entry support.

use std::path::Path;
use std::sync::Arc;

use base64::engine::general_purpose::STANDARD as B64;
use base64::Engine;

use crate::backend::BackendClient;
use crate::binding::collect;
use crate::errors::EditorError;
use crate::models::region::{field_text, EditableRegion};
use crate::store::ClientCache;

const FIRST_NAME_PATH: &str = "personal_info.first_name";
const LAST_NAME_PATH: &str = "personal_info.last_name";

/// The eight repeatable entry kinds the form can grow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Education,
    Experience,
    Skill,
    Language,
    Certification,
    Hobby,
    Reference,
    Software,
}

impl FieldKind {
    /// Path segment of the fragment endpoint (`/add-field/{kind}`).
    pub fn as_str(self) -> &'static str {
        match self {
            FieldKind::Education => "education",
            FieldKind::Experience => "experience",
            FieldKind::Skill => "skill",
            FieldKind::Language => "language",
            FieldKind::Certification => "certification",
            FieldKind::Hobby => "hobby",
            FieldKind::Reference => "reference",
            FieldKind::Software => "software",
        }
    }

    /// Prefix used when renaming a fragment's inputs into the form; lines
    /// up with the Record's section keys.
    pub fn section_prefix(self) -> &'static str {
        match self {
            FieldKind::Education => "education",
            FieldKind::Experience => "experience",
            FieldKind::Skill => "skills",
            FieldKind::Language => "languages",
            FieldKind::Certification => "certifications",
            FieldKind::Hobby => "hobbys",
            FieldKind::Reference => "references",
            FieldKind::Software => "softwares",
        }
    }
}

/// Input name for field `base` of the `index`-th entry of a repeatable
/// section, matching the markup convention the collector relies on.
pub fn entry_input_name(kind: FieldKind, index: usize, base: &str) -> String {
    format!("{}-{index}-{base}", kind.section_prefix())
}

pub struct FormController {
    backend: Arc<BackendClient>,
    cache: Arc<dyn ClientCache>,
}

impl FormController {
    pub fn new(backend: Arc<BackendClient>, cache: Arc<dyn ClientCache>) -> Self {
        Self { backend, cache }
    }

    /// Validates and hands the form's Record to the preview page through
    /// the client cache. Both name fields are required; nothing is stored
    /// when validation fails. An attached photo rides along on the Record.
    pub async fn submit_for_preview(
        &self,
        regions: &[EditableRegion],
    ) -> Result<(), EditorError> {
        let first = field_text(regions, FIRST_NAME_PATH);
        let last = field_text(regions, LAST_NAME_PATH);
        if first.is_empty() || last.is_empty() {
            return Err(EditorError::Validation(
                "Please fill in both first name and last name fields".to_string(),
            ));
        }

        let mut record = collect(regions)?;
        record.photo = self.cache.get_photo().await?;
        self.cache.put_record(&record).await
    }

    /// Reads an image file and caches it as a data URI for the preview
    /// page, returning the encoded value.
    pub async fn attach_photo(&self, path: &Path) -> Result<String, EditorError> {
        let content_type = image_content_type(path)?;
        let bytes = tokio::fs::read(path).await?;
        let data_uri = format!("data:{content_type};base64,{}", B64.encode(&bytes));
        self.cache.put_photo(&data_uri).await?;
        Ok(data_uri)
    }

    /// Fetches the HTML fragment for one new repeatable entry of `kind`.
    pub async fn new_entry_fragment(&self, kind: FieldKind) -> Result<String, EditorError> {
        self.backend.field_fragment(kind.as_str()).await
    }
}

fn image_content_type(path: &Path) -> Result<&'static str, EditorError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_lowercase)
        .unwrap_or_default();
    match ext.as_str() {
        "png" => Ok("image/png"),
        "jpg" | "jpeg" => Ok("image/jpeg"),
        "gif" => Ok("image/gif"),
        "webp" => Ok("image/webp"),
        _ => Err(EditorError::Validation(format!(
            "Unsupported image format: {}",
            path.display()
        ))),
    }
}
