//! Social-media usage survey entries.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::SocialMediaId;
use crate::record::{Record, Validate, overwrite};
use crate::validation::{AGE, RATING, in_range, length, one_of, when_some};

/// Values accepted for [`SocialMediaAnswers::uses_social_media`].
pub const USES_SOCIAL_MEDIA: &[&str] = &["Yes", "No"];

const GENDER_LEN: (usize, usize) = (1, 30);
const OCCUPATION_STATUS_LEN: (usize, usize) = (1, 50);
const ORGANIZATION_AFFILIATION_LEN: (usize, usize) = (0, 100);
const PLATFORMS_USED_LEN: (usize, usize) = (1, 255);
const DAILY_USE_AVERAGE_LEN: (usize, usize) = (1, 50);

/// The answers given by one respondent, without identity.
///
/// This is the draft accepted when creating an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaAnswers {
    pub age: u8,
    pub gender: String,
    pub occupation_status: String,
    #[serde(default)]
    pub organization_affiliation: Option<String>,
    /// Either `"Yes"` or `"No"`.
    pub uses_social_media: String,
    pub platforms_used: String,
    /// Free text such as `"Between 2 and 3 hours"`.
    pub daily_use_average: String,
    pub usage_without_purpose: u8,
    pub distraction_when_busy: u8,
    pub restless_without_social_media: u8,
    pub easily_distracted: u8,
    pub compare_with_successful_people: u8,
    pub seek_validation: u8,
    pub date: String,
}

/// A stored social-media entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialMediaEntry {
    pub id: SocialMediaId,
    #[serde(flatten)]
    pub answers: SocialMediaAnswers,
}

/// Sparse update for a [`SocialMediaEntry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SocialMediaPatch {
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub occupation_status: Option<String>,
    pub organization_affiliation: Option<String>,
    pub uses_social_media: Option<String>,
    pub platforms_used: Option<String>,
    pub daily_use_average: Option<String>,
    pub usage_without_purpose: Option<u8>,
    pub distraction_when_busy: Option<u8>,
    pub restless_without_social_media: Option<u8>,
    pub easily_distracted: Option<u8>,
    pub compare_with_successful_people: Option<u8>,
    pub seek_validation: Option<u8>,
    pub date: Option<String>,
}

impl SocialMediaAnswers {
    /// Overwrite every field the patch supplies.
    pub fn apply(&mut self, patch: SocialMediaPatch) {
        overwrite(&mut self.age, patch.age);
        overwrite(&mut self.gender, patch.gender);
        overwrite(&mut self.occupation_status, patch.occupation_status);
        if patch.organization_affiliation.is_some() {
            self.organization_affiliation = patch.organization_affiliation;
        }
        overwrite(&mut self.uses_social_media, patch.uses_social_media);
        overwrite(&mut self.platforms_used, patch.platforms_used);
        overwrite(&mut self.daily_use_average, patch.daily_use_average);
        overwrite(&mut self.usage_without_purpose, patch.usage_without_purpose);
        overwrite(&mut self.distraction_when_busy, patch.distraction_when_busy);
        overwrite(
            &mut self.restless_without_social_media,
            patch.restless_without_social_media,
        );
        overwrite(&mut self.easily_distracted, patch.easily_distracted);
        overwrite(
            &mut self.compare_with_successful_people,
            patch.compare_with_successful_people,
        );
        overwrite(&mut self.seek_validation, patch.seek_validation);
        overwrite(&mut self.date, patch.date);
    }

    fn ratings(&self) -> [(&'static str, u8); 6] {
        [
            ("usage_without_purpose", self.usage_without_purpose),
            ("distraction_when_busy", self.distraction_when_busy),
            (
                "restless_without_social_media",
                self.restless_without_social_media,
            ),
            ("easily_distracted", self.easily_distracted),
            (
                "compare_with_successful_people",
                self.compare_with_successful_people,
            ),
            ("seek_validation", self.seek_validation),
        ]
    }
}

impl Validate for SocialMediaAnswers {
    fn validate(&self) -> Result<(), ValidationError> {
        in_range("age", self.age, &AGE)?;
        length("gender", &self.gender, GENDER_LEN.0, GENDER_LEN.1)?;
        length(
            "occupation_status",
            &self.occupation_status,
            OCCUPATION_STATUS_LEN.0,
            OCCUPATION_STATUS_LEN.1,
        )?;
        when_some(self.organization_affiliation.as_deref(), |affiliation| {
            length(
                "organization_affiliation",
                affiliation,
                ORGANIZATION_AFFILIATION_LEN.0,
                ORGANIZATION_AFFILIATION_LEN.1,
            )
        })?;
        one_of(
            "uses_social_media",
            &self.uses_social_media,
            USES_SOCIAL_MEDIA,
        )?;
        length(
            "platforms_used",
            &self.platforms_used,
            PLATFORMS_USED_LEN.0,
            PLATFORMS_USED_LEN.1,
        )?;
        length(
            "daily_use_average",
            &self.daily_use_average,
            DAILY_USE_AVERAGE_LEN.0,
            DAILY_USE_AVERAGE_LEN.1,
        )?;
        for (field, value) in self.ratings() {
            in_range(field, value, &RATING)?;
        }
        Ok(())
    }
}

impl SocialMediaPatch {
    fn ratings(&self) -> [(&'static str, Option<u8>); 6] {
        [
            ("usage_without_purpose", self.usage_without_purpose),
            ("distraction_when_busy", self.distraction_when_busy),
            (
                "restless_without_social_media",
                self.restless_without_social_media,
            ),
            ("easily_distracted", self.easily_distracted),
            (
                "compare_with_successful_people",
                self.compare_with_successful_people,
            ),
            ("seek_validation", self.seek_validation),
        ]
    }
}

impl Validate for SocialMediaPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        when_some(self.age.as_ref(), |age| in_range("age", *age, &AGE))?;
        when_some(self.gender.as_deref(), |gender| {
            length("gender", gender, GENDER_LEN.0, GENDER_LEN.1)
        })?;
        when_some(self.occupation_status.as_deref(), |status| {
            length(
                "occupation_status",
                status,
                OCCUPATION_STATUS_LEN.0,
                OCCUPATION_STATUS_LEN.1,
            )
        })?;
        when_some(self.organization_affiliation.as_deref(), |affiliation| {
            length(
                "organization_affiliation",
                affiliation,
                ORGANIZATION_AFFILIATION_LEN.0,
                ORGANIZATION_AFFILIATION_LEN.1,
            )
        })?;
        when_some(self.uses_social_media.as_deref(), |uses| {
            one_of("uses_social_media", uses, USES_SOCIAL_MEDIA)
        })?;
        when_some(self.platforms_used.as_deref(), |platforms| {
            length(
                "platforms_used",
                platforms,
                PLATFORMS_USED_LEN.0,
                PLATFORMS_USED_LEN.1,
            )
        })?;
        when_some(self.daily_use_average.as_deref(), |average| {
            length(
                "daily_use_average",
                average,
                DAILY_USE_AVERAGE_LEN.0,
                DAILY_USE_AVERAGE_LEN.1,
            )
        })?;
        for (field, value) in self.ratings() {
            when_some(value.as_ref(), |value| in_range(field, *value, &RATING))?;
        }
        Ok(())
    }
}

impl Record for SocialMediaEntry {
    type Id = SocialMediaId;

    const KIND: &'static str = "SocialMediaEntry";

    fn id(&self) -> SocialMediaId {
        self.id
    }
}
