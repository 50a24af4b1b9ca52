// The page's controllers, wired once through an explicit registry. Each
// component owns its collaborators; a missing expected region degrades to
// a logged warning, never a panic.

#![allow(dead_code)]

pub mod customizer;
pub mod exporter;
pub mod form;
pub mod generate;
pub mod preview;
pub mod saver;

use std::sync::Arc;

use crate::backend::BackendClient;
use crate::store::ClientCache;

pub struct ComponentRegistry {
    pub form: form::FormController,
    pub saver: saver::Saver,
    pub customizer: customizer::Customizer,
    pub exporter: exporter::Exporter,
    pub preview: preview::PreviewLoader,
    pub summary: generate::SummaryGenerator,
    pub experience: generate::ExperienceDescriptionGenerator,
}

impl ComponentRegistry {
    pub fn new(backend: Arc<BackendClient>, cache: Arc<dyn ClientCache>, ui_lang: &str) -> Self {
        let saver = saver::Saver::new(backend.clone());
        ComponentRegistry {
            form: form::FormController::new(backend.clone(), cache.clone()),
            customizer: customizer::Customizer::new(backend.clone(), saver.clone()),
            exporter: exporter::Exporter::new(backend.clone(), saver.clone()),
            preview: preview::PreviewLoader::new(cache),
            summary: generate::SummaryGenerator::new(backend.clone(), ui_lang),
            experience: generate::ExperienceDescriptionGenerator::new(backend, ui_lang),
            saver,
        }
    }
}
