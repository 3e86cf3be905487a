use std::sync::Arc;

use crate::application::services::MappingService;

/// Shared application state injected into all handlers.
#[derive(Clone)]
pub struct AppState {
    pub mapping_service: Arc<MappingService>,
}
