//! JSON REST handlers for mental-health entries.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{OriginalUri, Path, Query, State};
use serde::Deserialize;

use surveyhub_app::ports::{MentalHealthRepository, SocialMediaRepository};
use surveyhub_domain::error::{SurveyError, ValidationError};
use surveyhub_domain::id::MentalHealthId;
use surveyhub_domain::mental_health::{MentalHealthAnswers, MentalHealthEntry, MentalHealthPatch};

use super::response::{CreateResponse, ListResponse, RecordResponse};
use crate::error::ApiError;
use crate::state::AppState;

/// Query string of `GET /mental_health/search_by_age/`.
#[derive(Deserialize)]
pub struct AgeQuery {
    pub age: i64,
}

fn parse_id(id: &str) -> Result<MentalHealthId, SurveyError> {
    MentalHealthId::from_str(id).map_err(|_| ValidationError::InvalidId(id.to_string()).into())
}

/// `GET /mental_health/`
pub async fn list<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
) -> Result<ListResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let entries = state
        .mental_health
        .list()
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `GET /mental_health/{id}`
pub async fn get<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<RecordResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id).map_err(|err| ApiError::read(err, &uri))?;
    let entry = state
        .mental_health
        .get(id)
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(RecordResponse::Ok(Json(entry)))
}

/// `POST /mental_health/`
pub async fn create<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    body: Result<Json<MentalHealthAnswers>, JsonRejection>,
) -> Result<CreateResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let Json(draft) = body.map_err(|rejection| ApiError::rejected(rejection, &uri))?;
    let created = state
        .mental_health
        .create(draft)
        .await
        .map_err(|err| ApiError::write(err, &uri))?;
    Ok(CreateResponse::Created(Json(created)))
}

/// `PUT /mental_health/{id}`
pub async fn update<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
    body: Result<Json<MentalHealthPatch>, JsonRejection>,
) -> Result<RecordResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id).map_err(|err| ApiError::write(err, &uri))?;
    let Json(patch) = body.map_err(|rejection| ApiError::rejected(rejection, &uri))?;
    let updated = state
        .mental_health
        .update(id, patch)
        .await
        .map_err(|err| ApiError::write(err, &uri))?;
    Ok(RecordResponse::Ok(Json(updated)))
}

/// `DELETE /mental_health/{id}`
pub async fn delete<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    Path(id): Path<String>,
) -> Result<RecordResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let id = parse_id(&id).map_err(|err| ApiError::write(err, &uri))?;
    let removed = state
        .mental_health
        .delete(id)
        .await
        .map_err(|err| ApiError::write(err, &uri))?;
    Ok(RecordResponse::Ok(Json(removed)))
}

/// `GET /mental_health/search_by_age/?age=N`
pub async fn search_by_age<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
    query: Result<Query<AgeQuery>, QueryRejection>,
) -> Result<ListResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let Query(AgeQuery { age }) =
        query.map_err(|rejection| ApiError::rejected(rejection, &uri))?;
    let entries = state
        .mental_health
        .search_by_age(age)
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(ListResponse::Ok(Json(entries)))
}

/// `GET /mental_health/filter_by_sleep_issues/`
pub async fn filter_by_sleep_issues<MR, SR>(
    State(state): State<AppState<MR, SR>>,
    OriginalUri(uri): OriginalUri,
) -> Result<ListResponse<MentalHealthEntry>, ApiError>
where
    MR: MentalHealthRepository + Send + Sync + 'static,
    SR: SocialMediaRepository + Send + Sync + 'static,
{
    let entries = state
        .mental_health
        .list_sorted_by_sleep_issues()
        .await
        .map_err(|err| ApiError::read(err, &uri))?;
    Ok(ListResponse::Ok(Json(entries)))
}
