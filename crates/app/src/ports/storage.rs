//! Storage port: repository traits for persistence.
//!
//! Every record kind supports the same five primitives through
//! [`RecordStore`]; kind-specific filters live on sub-traits. Lookups that
//! find nothing yield `None` (the absent marker) rather than an error.

use std::future::Future;

use surveyhub_domain::error::SurveyError;
use surveyhub_domain::mental_health::{MentalHealthAnswers, MentalHealthEntry, MentalHealthPatch};
use surveyhub_domain::record::{Record, Validate};
use surveyhub_domain::social_media::{SocialMediaAnswers, SocialMediaEntry, SocialMediaPatch};

/// Identifier type of the records held by store `S`.
pub type RecordId<S> = <<S as RecordStore>::Record as Record>::Id;

/// Create/get/list/update/delete over a single table.
///
/// Each call runs in its own transaction: it either commits in full or
/// leaves the store untouched.
pub trait RecordStore {
    /// The stored record, including its assigned identity.
    type Record: Record + Send;
    /// Field set accepted on creation.
    type Draft: Validate + Send;
    /// Sparse field set accepted on update.
    type Patch: Validate + Send;

    /// Insert a new record and return it with its assigned identity.
    fn create(
        &self,
        draft: Self::Draft,
    ) -> impl Future<Output = Result<Self::Record, SurveyError>> + Send;

    /// Get a record by its identifier.
    fn get_by_id(
        &self,
        id: <Self::Record as Record>::Id,
    ) -> impl Future<Output = Result<Option<Self::Record>, SurveyError>> + Send;

    /// Get all records.
    fn get_all(&self) -> impl Future<Output = Result<Vec<Self::Record>, SurveyError>> + Send;

    /// Overwrite the supplied fields of an existing record.
    ///
    /// Returns `None` when no record has this identifier.
    fn update(
        &self,
        id: <Self::Record as Record>::Id,
        patch: Self::Patch,
    ) -> impl Future<Output = Result<Option<Self::Record>, SurveyError>> + Send;

    /// Remove a record, returning what was removed.
    ///
    /// Returns `None` when no record has this identifier.
    fn delete(
        &self,
        id: <Self::Record as Record>::Id,
    ) -> impl Future<Output = Result<Option<Self::Record>, SurveyError>> + Send;
}

/// Store for [`MentalHealthEntry`] records.
pub trait MentalHealthRepository:
    RecordStore<
        Record = MentalHealthEntry,
        Draft = MentalHealthAnswers,
        Patch = MentalHealthPatch,
    >
{
    /// Get every entry whose age equals `age` exactly.
    ///
    /// Any value is a valid question; ages outside the accepted range simply
    /// match nothing.
    fn find_by_age(
        &self,
        age: i64,
    ) -> impl Future<Output = Result<Vec<MentalHealthEntry>, SurveyError>> + Send;

    /// Get every entry ordered by ascending `sleep_issues`.
    fn get_all_by_sleep_issues(
        &self,
    ) -> impl Future<Output = Result<Vec<MentalHealthEntry>, SurveyError>> + Send;
}

/// Store for [`SocialMediaEntry`] records.
pub trait SocialMediaRepository:
    RecordStore<Record = SocialMediaEntry, Draft = SocialMediaAnswers, Patch = SocialMediaPatch>
{
    /// Get every entry whose gender matches `gender`, ignoring case.
    fn find_by_gender(
        &self,
        gender: &str,
    ) -> impl Future<Output = Result<Vec<SocialMediaEntry>, SurveyError>> + Send;

    /// Get every entry ordered by ascending age.
    fn get_all_by_age(
        &self,
    ) -> impl Future<Output = Result<Vec<SocialMediaEntry>, SurveyError>> + Send;
}
