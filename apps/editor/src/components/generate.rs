//! AI-assisted text generation: the professional summary and the
//! experience description flows. Both stream progressively — each event
//! carries the cumulative text so far and replaces the visible value.

use std::sync::Arc;

use tracing::warn;

use crate::backend::{BackendClient, ExperienceRequest, SummaryRequest};
use crate::errors::EditorError;
use crate::models::region::{self, EditableRegion};

const FIRST_NAME_PATH: &str = "personal_info.first_name";
const LAST_NAME_PATH: &str = "personal_info.last_name";

/// Streams a professional summary built from the person's name and a short
/// guidance text.
pub struct SummaryGenerator {
    backend: Arc<BackendClient>,
    ui_lang: String,
}

impl SummaryGenerator {
    pub fn new(backend: Arc<BackendClient>, ui_lang: &str) -> Self {
        Self {
            backend,
            ui_lang: ui_lang.to_string(),
        }
    }

    /// Guidance is required; the name fields are read from their regions
    /// and a missing region degrades to empty text, logged. Returns the
    /// final summary; `on_text` sees every intermediate state.
    pub async fn generate(
        &self,
        regions: &[EditableRegion],
        guidance: &str,
        on_text: &mut dyn FnMut(&str),
    ) -> Result<String, EditorError> {
        let guidance = guidance.trim();
        if guidance.is_empty() {
            return Err(EditorError::Validation(
                "Some guidance is required to personalize the summary".to_string(),
            ));
        }

        let request = SummaryRequest {
            first_name: expected_region_text(regions, FIRST_NAME_PATH),
            last_name: expected_region_text(regions, LAST_NAME_PATH),
            guidance: guidance.to_string(),
            ui_lang: self.ui_lang.clone(),
        };

        self.backend.stream_summary(&request, on_text).await
    }
}

/// Context for one experience entry, as read off its form fields.
#[derive(Debug, Clone, Default)]
pub struct ExperienceContext {
    pub company: String,
    pub position: String,
    pub start_date: String,
    pub end_date: String,
    /// Mirrors the "current position" checkbox: the end date collapses to
    /// `"Present"` while set.
    pub is_current: bool,
}

/// Streams a generated description for one experience entry.
pub struct ExperienceDescriptionGenerator {
    backend: Arc<BackendClient>,
    ui_lang: String,
}

impl ExperienceDescriptionGenerator {
    pub fn new(backend: Arc<BackendClient>, ui_lang: &str) -> Self {
        Self {
            backend,
            ui_lang: ui_lang.to_string(),
        }
    }

    /// Company and position are required. The streamed text is flattened
    /// through [`flatten_bullets`] before reaching `on_text` — this flow
    /// renders `*` bullets inline as spaces, unlike the preview's
    /// `*` → newline rule. The divergence is deliberate.
    pub async fn generate(
        &self,
        experience: &ExperienceContext,
        on_text: &mut dyn FnMut(&str),
    ) -> Result<String, EditorError> {
        let company = experience.company.trim();
        let position = experience.position.trim();
        if company.is_empty() || position.is_empty() {
            return Err(EditorError::Validation(
                "Company and position are required before generating a description".to_string(),
            ));
        }

        let end_date = if experience.is_current {
            "Present".to_string()
        } else {
            experience.end_date.trim().to_string()
        };
        let request = ExperienceRequest {
            company: company.to_string(),
            position: position.to_string(),
            start_date: experience.start_date.trim().to_string(),
            end_date,
            ui_lang: self.ui_lang.clone(),
        };

        let mut forward = |text: &str| on_text(&flatten_bullets(text));
        let raw = self
            .backend
            .stream_experience_description(&request, &mut forward)
            .await?;
        Ok(flatten_bullets(&raw))
    }
}

fn expected_region_text(regions: &[EditableRegion], path: &str) -> String {
    match region::find_field(regions, path) {
        Some(r) => r.value.trim().to_string(),
        None => {
            warn!(path, "expected region is missing; using empty text");
            String::new()
        }
    }
}

/// Collapses each `*` and any whitespace right after it into one space.
pub fn flatten_bullets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c == '*' {
            out.push(' ');
            while chars.peek().is_some_and(|n| n.is_whitespace()) {
                chars.next();
            }
        } else {
            out.push(c);
        }
    }
    out
}
