use std::sync::Arc;

use crate::media::MediaStore;
use crate::repository::{LeadRepository, ResumeRepository};

/// Shared application state injected into all route handlers via Axum
/// extractors. Handlers depend on the repository traits, so tests swap in
/// the in-memory implementations.
#[derive(Clone)]
pub struct AppState {
    pub resumes: Arc<dyn ResumeRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub media: MediaStore,
}
