//! `SQLite` implementation of [`SocialMediaRepository`].

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row, Sqlite, SqliteConnection, SqlitePool};

use surveyhub_app::ports::{RecordStore, SocialMediaRepository};
use surveyhub_domain::error::SurveyError;
use surveyhub_domain::id::SocialMediaId;
use surveyhub_domain::social_media::{SocialMediaAnswers, SocialMediaEntry, SocialMediaPatch};

use crate::error::StorageError;
use crate::row::small_int;
use crate::session::Session;

struct Wrapper(SocialMediaEntry);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<SocialMediaEntry> {
        value.map(|w| w.0)
    }

    fn all(values: Vec<Self>) -> Vec<SocialMediaEntry> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(SocialMediaEntry {
            id: SocialMediaId::new(id),
            answers: SocialMediaAnswers {
                age: small_int(row, "age")?,
                gender: row.try_get("gender")?,
                occupation_status: row.try_get("occupation_status")?,
                organization_affiliation: row.try_get("organization_affiliation")?,
                uses_social_media: row.try_get("uses_social_media")?,
                platforms_used: row.try_get("platforms_used")?,
                daily_use_average: row.try_get("daily_use_average")?,
                usage_without_purpose: small_int(row, "usage_without_purpose")?,
                distraction_when_busy: small_int(row, "distraction_when_busy")?,
                restless_without_social_media: small_int(row, "restless_without_social_media")?,
                easily_distracted: small_int(row, "easily_distracted")?,
                compare_with_successful_people: small_int(row, "compare_with_successful_people")?,
                seek_validation: small_int(row, "seek_validation")?,
                date: row.try_get("date")?,
            },
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO social_media (
        age, gender, occupation_status, organization_affiliation, uses_social_media,
        platforms_used, daily_use_average, usage_without_purpose, distraction_when_busy,
        restless_without_social_media, easily_distracted, compare_with_successful_people,
        seek_validation, date
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING *
";

const UPDATE: &str = r"
    UPDATE social_media
    SET age = ?, gender = ?, occupation_status = ?, organization_affiliation = ?,
        uses_social_media = ?, platforms_used = ?, daily_use_average = ?,
        usage_without_purpose = ?, distraction_when_busy = ?,
        restless_without_social_media = ?, easily_distracted = ?,
        compare_with_successful_people = ?, seek_validation = ?, date = ?
    WHERE id = ?
    RETURNING *
";

const SELECT_BY_ID: &str = "SELECT * FROM social_media WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM social_media ORDER BY id";
// LIKE is case-insensitive for ASCII in SQLite; `%` and `_` act as wildcards.
const SELECT_BY_GENDER: &str = "SELECT * FROM social_media WHERE gender LIKE ? ORDER BY id";
const SELECT_BY_AGE: &str = "SELECT * FROM social_media ORDER BY age, id";
const DELETE_BY_ID: &str = "DELETE FROM social_media WHERE id = ? RETURNING *";

fn bind_answers<'q>(
    query: QueryAs<'q, Sqlite, Wrapper, SqliteArguments<'q>>,
    answers: &'q SocialMediaAnswers,
) -> QueryAs<'q, Sqlite, Wrapper, SqliteArguments<'q>> {
    query
        .bind(i64::from(answers.age))
        .bind(answers.gender.as_str())
        .bind(answers.occupation_status.as_str())
        .bind(answers.organization_affiliation.as_deref())
        .bind(answers.uses_social_media.as_str())
        .bind(answers.platforms_used.as_str())
        .bind(answers.daily_use_average.as_str())
        .bind(i64::from(answers.usage_without_purpose))
        .bind(i64::from(answers.distraction_when_busy))
        .bind(i64::from(answers.restless_without_social_media))
        .bind(i64::from(answers.easily_distracted))
        .bind(i64::from(answers.compare_with_successful_people))
        .bind(i64::from(answers.seek_validation))
        .bind(answers.date.as_str())
}

async fn insert(
    conn: &mut SqliteConnection,
    answers: &SocialMediaAnswers,
) -> Result<SocialMediaEntry, StorageError> {
    let row: Wrapper = bind_answers(sqlx::query_as(INSERT), answers)
        .fetch_one(conn)
        .await?;
    Ok(row.0)
}

async fn select_by_id(
    conn: &mut SqliteConnection,
    id: SocialMediaId,
) -> Result<Option<SocialMediaEntry>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
        .bind(id.as_i64())
        .fetch_optional(conn)
        .await?;
    Ok(Wrapper::maybe(row))
}

async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<SocialMediaEntry>, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL).fetch_all(conn).await?;
    Ok(Wrapper::all(rows))
}

async fn select_by_gender(
    conn: &mut SqliteConnection,
    gender: &str,
) -> Result<Vec<SocialMediaEntry>, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_GENDER)
        .bind(gender)
        .fetch_all(conn)
        .await?;
    Ok(Wrapper::all(rows))
}

async fn select_by_age(conn: &mut SqliteConnection) -> Result<Vec<SocialMediaEntry>, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_AGE).fetch_all(conn).await?;
    Ok(Wrapper::all(rows))
}

async fn overwrite(
    conn: &mut SqliteConnection,
    entry: &SocialMediaEntry,
) -> Result<SocialMediaEntry, StorageError> {
    let row: Wrapper = bind_answers(sqlx::query_as(UPDATE), &entry.answers)
        .bind(entry.id.as_i64())
        .fetch_one(conn)
        .await?;
    Ok(row.0)
}

async fn delete_by_id(
    conn: &mut SqliteConnection,
    id: SocialMediaId,
) -> Result<Option<SocialMediaEntry>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
        .bind(id.as_i64())
        .fetch_optional(conn)
        .await?;
    Ok(Wrapper::maybe(row))
}

/// `SQLite`-backed social-media repository.
pub struct SqliteSocialMediaRepository {
    pool: SqlitePool,
}

impl SqliteSocialMediaRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteSocialMediaRepository {
    type Record = SocialMediaEntry;
    type Draft = SocialMediaAnswers;
    type Patch = SocialMediaPatch;

    async fn create(&self, draft: SocialMediaAnswers) -> Result<SocialMediaEntry, SurveyError> {
        let mut session = Session::begin_immediate(&self.pool).await?;
        let entry = insert(session.conn(), &draft).await?;
        session.commit().await?;
        Ok(entry)
    }

    async fn get_by_id(&self, id: SocialMediaId) -> Result<Option<SocialMediaEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entry = select_by_id(session.conn(), id).await?;
        session.commit().await?;
        Ok(entry)
    }

    async fn get_all(&self) -> Result<Vec<SocialMediaEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entries = select_all(session.conn()).await?;
        session.commit().await?;
        Ok(entries)
    }

    async fn update(
        &self,
        id: SocialMediaId,
        patch: SocialMediaPatch,
    ) -> Result<Option<SocialMediaEntry>, SurveyError> {
        let mut session = Session::begin_immediate(&self.pool).await?;
        let Some(mut entry) = select_by_id(session.conn(), id).await? else {
            return Ok(None);
        };
        entry.answers.apply(patch);
        let updated = overwrite(session.conn(), &entry).await?;
        session.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: SocialMediaId) -> Result<Option<SocialMediaEntry>, SurveyError> {
        let mut session = Session::begin_immediate(&self.pool).await?;
        let removed = delete_by_id(session.conn(), id).await?;
        session.commit().await?;
        Ok(removed)
    }
}

impl SocialMediaRepository for SqliteSocialMediaRepository {
    async fn find_by_gender(&self, gender: &str) -> Result<Vec<SocialMediaEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entries = select_by_gender(session.conn(), gender).await?;
        session.commit().await?;
        Ok(entries)
    }

    async fn get_all_by_age(&self) -> Result<Vec<SocialMediaEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entries = select_by_age(session.conn()).await?;
        session.commit().await?;
        Ok(entries)
    }
}
