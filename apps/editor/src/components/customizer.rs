//! Job-targeted customization: send the current Record plus the job
//! context to the backend, write the tailored Record back into the
//! regions, then save the applied result right away.

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::binding::{collect, populate};
use crate::components::saver::Saver;
use crate::errors::EditorError;
use crate::models::region::EditableRegion;

pub struct Customizer {
    backend: Arc<BackendClient>,
    saver: Saver,
}

impl Customizer {
    pub fn new(backend: Arc<BackendClient>, saver: Saver) -> Self {
        Self { backend, saver }
    }

    /// Tailors the résumé to a job description. The description is
    /// required; career goals are optional. On success the regions hold
    /// the customized text (asterisk bullets expanded to newlines) and the
    /// result has been saved to the backend.
    pub async fn customize(
        &self,
        regions: &mut [EditableRegion],
        job_description: &str,
        career_goals: &str,
    ) -> Result<(), EditorError> {
        let job_description = job_description.trim();
        if job_description.is_empty() {
            return Err(EditorError::Validation(
                "A job description is required".to_string(),
            ));
        }

        let current = collect(regions.iter())?;
        let customized = self
            .backend
            .customize_for_job(job_description, career_goals.trim(), &current)
            .await?;

        populate(&customized, regions);
        self.saver.save(regions).await
    }
}
