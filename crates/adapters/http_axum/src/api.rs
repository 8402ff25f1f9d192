//! JSON REST API handler modules.

pub mod greeting;
#[allow(clippy::missing_errors_doc)]
pub mod mental_health;
pub mod response;
#[allow(clippy::missing_errors_doc)]
pub mod social_media;

use axum::Router;
use axum::routing::{MethodRouter, get};

use surveyhub_app::ports::{MentalHealthRepository, SocialMediaRepository};

use crate::state::AppState;

/// Register `method_router` at `path` both with and without a trailing slash.
fn slashed<S>(router: Router<S>, path: &str, method_router: MethodRouter<S>) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .route(path, method_router.clone())
        .route(&format!("{path}/"), method_router)
}

/// Build the record sub-router.
pub fn routes<MR, SR>() -> Router<AppState<MR, SR>>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let router = Router::new()
        .route("/", get(greeting::root))
        .route("/hello/{name}", get(greeting::hello));

    // Mental health
    let router = slashed(
        router,
        "/mental_health",
        get(mental_health::list::<MR, SR>).post(mental_health::create::<MR, SR>),
    );
    let router = slashed(
        router,
        "/mental_health/search_by_age",
        get(mental_health::search_by_age::<MR, SR>),
    );
    let router = slashed(
        router,
        "/mental_health/filter_by_sleep_issues",
        get(mental_health::filter_by_sleep_issues::<MR, SR>),
    );
    let router = router.route(
        "/mental_health/{id}",
        get(mental_health::get::<MR, SR>)
            .put(mental_health::update::<MR, SR>)
            .delete(mental_health::delete::<MR, SR>),
    );

    // Social media
    let router = slashed(
        router,
        "/social_media",
        get(social_media::list::<MR, SR>).post(social_media::create::<MR, SR>),
    );
    let router = slashed(
        router,
        "/social_media/search_by_gender",
        get(social_media::search_by_gender::<MR, SR>),
    );
    let router = slashed(
        router,
        "/social_media/filter_by_age",
        get(social_media::filter_by_age::<MR, SR>),
    );
    router.route(
        "/social_media/{id}",
        get(social_media::get::<MR, SR>)
            .put(social_media::update::<MR, SR>)
            .delete(social_media::delete::<MR, SR>),
    )
}
