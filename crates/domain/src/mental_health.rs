//! Mental-health survey entries.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::MentalHealthId;
use crate::record::{Record, Validate, overwrite};
use crate::validation::{AGE, RATING, in_range, length, when_some};

/// The answers given by one respondent, without identity.
///
/// This is the draft accepted when creating an entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalHealthAnswers {
    pub age: u8,
    pub gender: String,
    pub relationship_status: String,
    pub bothered_by_worries: u8,
    pub difficulty_concentrating: u8,
    pub comparison_feelings: u8,
    pub feel_depressed: u8,
    pub fluctuation_interest: u8,
    pub sleep_issues: u8,
    /// Free-form date string, stored as supplied.
    pub date: String,
}

/// A stored mental-health entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MentalHealthEntry {
    pub id: MentalHealthId,
    #[serde(flatten)]
    pub answers: MentalHealthAnswers,
}

/// Sparse update for a [`MentalHealthEntry`].
///
/// `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MentalHealthPatch {
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub relationship_status: Option<String>,
    pub bothered_by_worries: Option<u8>,
    pub difficulty_concentrating: Option<u8>,
    pub comparison_feelings: Option<u8>,
    pub feel_depressed: Option<u8>,
    pub fluctuation_interest: Option<u8>,
    pub sleep_issues: Option<u8>,
    pub date: Option<String>,
}

const GENDER_LEN: (usize, usize) = (1, 30);
const RELATIONSHIP_STATUS_LEN: (usize, usize) = (1, 50);

impl MentalHealthAnswers {
    /// Overwrite every field the patch supplies.
    pub fn apply(&mut self, patch: MentalHealthPatch) {
        overwrite(&mut self.age, patch.age);
        overwrite(&mut self.gender, patch.gender);
        overwrite(&mut self.relationship_status, patch.relationship_status);
        overwrite(&mut self.bothered_by_worries, patch.bothered_by_worries);
        overwrite(
            &mut self.difficulty_concentrating,
            patch.difficulty_concentrating,
        );
        overwrite(&mut self.comparison_feelings, patch.comparison_feelings);
        overwrite(&mut self.feel_depressed, patch.feel_depressed);
        overwrite(&mut self.fluctuation_interest, patch.fluctuation_interest);
        overwrite(&mut self.sleep_issues, patch.sleep_issues);
        overwrite(&mut self.date, patch.date);
    }

    fn ratings(&self) -> [(&'static str, u8); 6] {
        [
            ("bothered_by_worries", self.bothered_by_worries),
            ("difficulty_concentrating", self.difficulty_concentrating),
            ("comparison_feelings", self.comparison_feelings),
            ("feel_depressed", self.feel_depressed),
            ("fluctuation_interest", self.fluctuation_interest),
            ("sleep_issues", self.sleep_issues),
        ]
    }
}

impl Validate for MentalHealthAnswers {
    fn validate(&self) -> Result<(), ValidationError> {
        in_range("age", self.age, &AGE)?;
        length("gender", &self.gender, GENDER_LEN.0, GENDER_LEN.1)?;
        length(
            "relationship_status",
            &self.relationship_status,
            RELATIONSHIP_STATUS_LEN.0,
            RELATIONSHIP_STATUS_LEN.1,
        )?;
        for (field, value) in self.ratings() {
            in_range(field, value, &RATING)?;
        }
        Ok(())
    }
}

impl MentalHealthPatch {
    fn ratings(&self) -> [(&'static str, Option<u8>); 6] {
        [
            ("bothered_by_worries", self.bothered_by_worries),
            ("difficulty_concentrating", self.difficulty_concentrating),
            ("comparison_feelings", self.comparison_feelings),
            ("feel_depressed", self.feel_depressed),
            ("fluctuation_interest", self.fluctuation_interest),
            ("sleep_issues", self.sleep_issues),
        ]
    }
}

impl Validate for MentalHealthPatch {
    fn validate(&self) -> Result<(), ValidationError> {
        when_some(self.age.as_ref(), |age| in_range("age", *age, &AGE))?;
        when_some(self.gender.as_deref(), |gender| {
            length("gender", gender, GENDER_LEN.0, GENDER_LEN.1)
        })?;
        when_some(self.relationship_status.as_deref(), |status| {
            length(
                "relationship_status",
                status,
                RELATIONSHIP_STATUS_LEN.0,
                RELATIONSHIP_STATUS_LEN.1,
            )
        })?;
        for (field, value) in self.ratings() {
            when_some(value.as_ref(), |value| in_range(field, *value, &RATING))?;
        }
        Ok(())
    }
}

impl Record for MentalHealthEntry {
    type Id = MentalHealthId;

    const KIND: &'static str = "MentalHealthEntry";

    fn id(&self) -> MentalHealthId {
        self.id
    }
}
