//! Record service: use-cases shared by every survey record kind.
//!
//! One generic service covers create/get/list/update/delete for any
//! [`RecordStore`]; kind-specific filters are added by inherent impls bounded
//! on the matching repository trait.

use surveyhub_domain::error::{NotFoundError, SurveyError};
use surveyhub_domain::mental_health::MentalHealthEntry;
use surveyhub_domain::record::{Record, Validate};
use surveyhub_domain::social_media::SocialMediaEntry;

use crate::ports::{MentalHealthRepository, RecordId, RecordStore, SocialMediaRepository};

/// Application service for one record kind.
pub struct RecordService<R> {
    repo: R,
}

fn not_found<R: RecordStore>(id: RecordId<R>) -> SurveyError {
    NotFoundError {
        kind: <R::Record as Record>::KIND,
        id: id.to_string(),
    }
    .into()
}

impl<R: RecordStore> RecordService<R> {
    /// Create a new service backed by the given repository.
    pub fn new(repo: R) -> Self {
        Self { repo }
    }

    /// Validate the draft and store it as a new record.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Validation`] if any bound is violated (the
    /// store is not touched), or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(kind = <R::Record as Record>::KIND))]
    pub async fn create(&self, draft: R::Draft) -> Result<R::Record, SurveyError> {
        draft.validate()?;
        let record = self.repo.create(draft).await?;
        tracing::debug!(id = %record.id(), "record created");
        Ok(record)
    }

    /// Look up a record by id, returning an error if not found.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(kind = <R::Record as Record>::KIND, id = %id))]
    pub async fn get(&self, id: RecordId<R>) -> Result<R::Record, SurveyError> {
        self.repo.get_by_id(id).await?.ok_or_else(|| not_found::<R>(id))
    }

    /// List all records.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list(&self) -> Result<Vec<R::Record>, SurveyError> {
        self.repo.get_all().await
    }

    /// Overwrite the fields supplied in `patch` and return the result.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::Validation`] if a supplied field violates its
    /// bound, [`SurveyError::NotFound`] when no record with `id` exists, or a
    /// storage error from the repository.
    #[tracing::instrument(skip_all, fields(kind = <R::Record as Record>::KIND, id = %id))]
    pub async fn update(&self, id: RecordId<R>, patch: R::Patch) -> Result<R::Record, SurveyError> {
        patch.validate()?;
        self.repo
            .update(id, patch)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }

    /// Delete a record and return it as a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`SurveyError::NotFound`] when no record with `id` exists,
    /// or a storage error from the repository.
    #[tracing::instrument(skip_all, fields(kind = <R::Record as Record>::KIND, id = %id))]
    pub async fn delete(&self, id: RecordId<R>) -> Result<R::Record, SurveyError> {
        self.repo
            .delete(id)
            .await?
            .ok_or_else(|| not_found::<R>(id))
    }
}

impl<R: MentalHealthRepository> RecordService<R> {
    /// Entries whose age equals `age`. An empty list is a valid answer.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_by_age(&self, age: i64) -> Result<Vec<MentalHealthEntry>, SurveyError> {
        self.repo.find_by_age(age).await
    }

    /// All entries ordered by ascending `sleep_issues`.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sorted_by_sleep_issues(&self) -> Result<Vec<MentalHealthEntry>, SurveyError> {
        self.repo.get_all_by_sleep_issues().await
    }
}

impl<R: SocialMediaRepository> RecordService<R> {
    /// Entries whose gender matches `gender`, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    #[tracing::instrument(skip(self))]
    pub async fn search_by_gender(&self, gender: &str) -> Result<Vec<SocialMediaEntry>, SurveyError> {
        self.repo.find_by_gender(gender).await
    }

    /// All entries ordered by ascending age.
    ///
    /// # Errors
    ///
    /// Returns a storage error propagated from the repository.
    pub async fn list_sorted_by_age(&self) -> Result<Vec<SocialMediaEntry>, SurveyError> {
        self.repo.get_all_by_age().await
    }
}
