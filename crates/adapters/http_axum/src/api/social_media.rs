//! JSON REST handlers for social-media entries.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use serde::Deserialize;

use surveyhub_app::ports::{MentalHealthRepository, SocialMediaRepository};
use surveyhub_domain::error::{SurveyError, ValidationError};
use surveyhub_domain::id::SocialMediaId;
use surveyhub_domain::social_media::{SocialMediaAnswers, SocialMediaEntry, SocialMediaPatch};

use super::response::{CreateResponse, ListResponse, RecordResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `GET /social_media/search_by_gender/`.
#[derive(Deserialize)]
pub struct GenderQuery {
    pub gender: String,
}

fn parse_id(id: &str) -> Result<SocialMediaId, SurveyError> {
    SocialMediaId::from_str(id).map_err(|_| ValidationError::InvalidId(id.to_string()).into())
}

/// `GET /social_media/`
pub async fn list<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
) -> Result<ListResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let entries = state
        .social_media
        .list()
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `GET /social_media/{id}`
pub async fn get<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<RecordResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id).map_err(|err| ApiError::read(err, &uri))?;
    let entry = state
        .social_media
        .get(id)
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(RecordResponse::Ok(Json(entry)))
}

/// `POST /social_media/`
pub async fn create<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<SocialMediaAnswers>, JsonRejection>,
) -> Result<CreateResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let Json(draft) = body.map_err(|rejection| ApiError::rejected(rejection, &uri))?;
    let created = state
        .social_media
        .create(draft)
        .await
        .map_err(|err| ApiError::write(err, &uri))?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /social_media/{id}`
pub async fn update<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    body: Result<Json<SocialMediaPatch>, JsonRejection>,
) -> Result<RecordResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id).map_err(|err| ApiError::write(err, &uri))?;
    let Json(patch) = body.map_err(|rejection| ApiError::rejected(rejection, &uri))?;
    let updated = state
        .social_media
        .update(id, patch)
        .await
        .map_err(|err| ApiError::write(err, &uri))?;
    Ok(RecordResponse::Ok(Json(updated)))
}

/// `DELETE /social_media/{id}`
pub async fn delete<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<RecordResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id).map_err(|err| ApiError::write(err, &uri))?;
    let removed = state
        .social_media
        .delete(id)
        .await
        .map_err(|err| ApiError::write(err, &uri))?;
    Ok(RecordResponse::Ok(Json(removed)))
}

/// `GET /social_media/search_by_gender/?gender=X`
pub async fn search_by_gender<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<GenderQuery>, QueryRejection>,
) -> Result<ListResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let Query(GenderQuery { gender }) =
        query.map_err(|rejection| ApiError::rejected(rejection, &uri))?;
    let entries = state
        .social_media
        .search_by_gender(&gender)
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `GET /social_media/filter_by_age/`
pub async fn filter_by_age<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
) -> Result<ListResponse<SocialMediaEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let entries = state
        .social_media
        .list_sorted_by_age()
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(ListResponse::Ok(Json(entries)))
}
