//! Shared application state for axum handlers.

use std::sync::Arc;

use surveyhub_app::ports::{MentalHealthRepository, SocialMediaRepository};
use surveyhub_app::services::record_service::RecordService;

/// Application state shared across all axum handlers.
///
/// Generic over the repository types to avoid dynamic dispatch.
/// `Clone` is implemented manually so the underlying types themselves do not
/// need to be `Clone`: only the `Arc` wrappers are cloned.
pub struct AppState<MR, SR> {
    /// Mental-health record service.
    pub mental_health: Arc<RecordService<MR>>,
    /// Social-media record service.
    pub social_media: Arc<RecordService<SR>>,
}

impl<MR, SR> Clone for AppState<MR, SR> {
    fn clone(&self) -> Self {
        Self {
            mental_health: Arc::clone(&self.mental_health),
            social_media: Arc::clone(&self.social_media),
        }
    }
}

impl<MR, SR> AppState<MR, SR>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    /// Create a new application state from service instances.
    pub fn new(mental_health: RecordService<MR>, social_media: RecordService<SR>) -> Self {
        Self {
            mental_health: Arc::new(mental_health),
            social_media: Arc::new(social_media),
        }
    }
}
