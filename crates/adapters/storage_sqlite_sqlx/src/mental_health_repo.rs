//! `SQLite` implementation of [`MentalHealthRepository`].

use sqlx::query::QueryAs;
use sqlx::sqlite::{SqliteArguments, SqliteRow};
use sqlx::{FromRow, Row, Sqlite, SqliteConnection, SqlitePool};

use surveyhub_app::ports::{MentalHealthRepository, RecordStore};
use surveyhub_domain::error::SurveyError;
use surveyhub_domain::id::MentalHealthId;
use surveyhub_domain::mental_health::{MentalHealthAnswers, MentalHealthEntry, MentalHealthPatch};

use crate::error::StorageError;
use crate::row::small_int;
use crate::session::Session;

/// Wrapper for converting database rows into domain types without polluting
/// domain structs with database concerns.
struct Wrapper(MentalHealthEntry);

impl Wrapper {
    fn maybe(value: Option<Self>) -> Option<MentalHealthEntry> {
        value.map(|w| w.0)
    }

    fn all(values: Vec<Self>) -> Vec<MentalHealthEntry> {
        values.into_iter().map(|w| w.0).collect()
    }
}

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id")?;

        Ok(Self(MentalHealthEntry {
            id: MentalHealthId::new(id),
            answers: MentalHealthAnswers {
                age: small_int(row, "age")?,
                gender: row.try_get("gender")?,
                relationship_status: row.try_get("relationship_status")?,
                bothered_by_worries: small_int(row, "bothered_by_worries")?,
                difficulty_concentrating: small_int(row, "difficulty_concentrating")?,
                comparison_feelings: small_int(row, "comparison_feelings")?,
                feel_depressed: small_int(row, "feel_depressed")?,
                fluctuation_interest: small_int(row, "fluctuation_interest")?,
                sleep_issues: small_int(row, "sleep_issues")?,
                date: row.try_get("date")?,
            },
        }))
    }
}

const INSERT: &str = r"
    INSERT INTO mental_health (
        age, gender, relationship_status, bothered_by_worries, difficulty_concentrating,
        comparison_feelings, feel_depressed, fluctuation_interest, sleep_issues, date
    )
    VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
    RETURNING *
";

const UPDATE: &str = r"
    UPDATE mental_health
    SET age = ?, gender = ?, relationship_status = ?, bothered_by_worries = ?,
        difficulty_concentrating = ?, comparison_feelings = ?, feel_depressed = ?,
        fluctuation_interest = ?, sleep_issues = ?, date = ?
    WHERE id = ?
    RETURNING *
";

const SELECT_BY_ID: &str = "SELECT * FROM mental_health WHERE id = ?";
const SELECT_ALL: &str = "SELECT * FROM mental_health ORDER BY id";
const SELECT_BY_AGE: &str = "SELECT * FROM mental_health WHERE age = ? ORDER BY id";
const SELECT_BY_SLEEP_ISSUES: &str = "SELECT * FROM mental_health ORDER BY sleep_issues, id";
const DELETE_BY_ID: &str = "DELETE FROM mental_health WHERE id = ? RETURNING *";

/// Bind every answer column in the order used by [`INSERT`] and [`UPDATE`].
fn bind_answers<'q>(
    query: QueryAs<'q, Sqlite, Wrapper, SqliteArguments<'q>>,
    answers: &'q MentalHealthAnswers,
) -> QueryAs<'q, Sqlite, Wrapper, SqliteArguments<'q>> {
    query
        .bind(i64::from(answers.age))
        .bind(answers.gender.as_str())
        .bind(answers.relationship_status.as_str())
        .bind(i64::from(answers.bothered_by_worries))
        .bind(i64::from(answers.difficulty_concentrating))
        .bind(i64::from(answers.comparison_feelings))
        .bind(i64::from(answers.feel_depressed))
        .bind(i64::from(answers.fluctuation_interest))
        .bind(i64::from(answers.sleep_issues))
        .bind(answers.date.as_str())
}

async fn insert(
    conn: &mut SqliteConnection,
    answers: &MentalHealthAnswers,
) -> Result<MentalHealthEntry, StorageError> {
    let row: Wrapper = bind_answers(sqlx::query_as(INSERT), answers)
        .fetch_one(conn)
        .await?;
    Ok(row.0)
}

async fn select_by_id(
    conn: &mut SqliteConnection,
    id: MentalHealthId,
) -> Result<Option<MentalHealthEntry>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
        .bind(id.as_i64())
        .fetch_optional(conn)
        .await?;
    Ok(Wrapper::maybe(row))
}

async fn select_all(conn: &mut SqliteConnection) -> Result<Vec<MentalHealthEntry>, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_ALL).fetch_all(conn).await?;
    Ok(Wrapper::all(rows))
}

async fn select_by_age(
    conn: &mut SqliteConnection,
    age: i64,
) -> Result<Vec<MentalHealthEntry>, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_AGE)
        .bind(age)
        .fetch_all(conn)
        .await?;
    Ok(Wrapper::all(rows))
}

async fn select_by_sleep_issues(
    conn: &mut SqliteConnection,
) -> Result<Vec<MentalHealthEntry>, StorageError> {
    let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_SLEEP_ISSUES)
        .fetch_all(conn)
        .await?;
    Ok(Wrapper::all(rows))
}

async fn overwrite(
    conn: &mut SqliteConnection,
    entry: &MentalHealthEntry,
) -> Result<MentalHealthEntry, StorageError> {
    let row: Wrapper = bind_answers(sqlx::query_as(UPDATE), &entry.answers)
        .bind(entry.id.as_i64())
        .fetch_one(conn)
        .await?;
    Ok(row.0)
}

async fn delete_by_id(
    conn: &mut SqliteConnection,
    id: MentalHealthId,
) -> Result<Option<MentalHealthEntry>, StorageError> {
    let row: Option<Wrapper> = sqlx::query_as(DELETE_BY_ID)
        .bind(id.as_i64())
        .fetch_optional(conn)
        .await?;
    Ok(Wrapper::maybe(row))
}

/// `SQLite`-backed mental-health repository.
pub struct SqliteMentalHealthRepository {
    pool: SqlitePool,
}

impl SqliteMentalHealthRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl RecordStore for SqliteMentalHealthRepository {
    type Record = MentalHealthEntry;
    type Draft = MentalHealthAnswers;
    type Patch = MentalHealthPatch;

    async fn create(&self, draft: MentalHealthAnswers) -> Result<MentalHealthEntry, SurveyError> {
        let mut session = Session::begin_immediate(&self.pool).await?;
        let entry = insert(session.conn(), &draft).await?;
        session.commit().await?;
        Ok(entry)
    }

    async fn get_by_id(&self, id: MentalHealthId) -> Result<Option<MentalHealthEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entry = select_by_id(session.conn(), id).await?;
        session.commit().await?;
        Ok(entry)
    }

    async fn get_all(&self) -> Result<Vec<MentalHealthEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entries = select_all(session.conn()).await?;
        session.commit().await?;
        Ok(entries)
    }

    async fn update(
        &self,
        id: MentalHealthId,
        patch: MentalHealthPatch,
    ) -> Result<Option<MentalHealthEntry>, SurveyError> {
        let mut session = Session::begin_immediate(&self.pool).await?;
        let Some(mut entry) = select_by_id(session.conn(), id).await? else {
            return Ok(None);
        };
        entry.answers.apply(patch);
        let updated = overwrite(session.conn(), &entry).await?;
        session.commit().await?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: MentalHealthId) -> Result<Option<MentalHealthEntry>, SurveyError> {
        let mut session = Session::begin_immediate(&self.pool).await?;
        let removed = delete_by_id(session.conn(), id).await?;
        session.commit().await?;
        Ok(removed)
    }
}

impl MentalHealthRepository for SqliteMentalHealthRepository {
    async fn find_by_age(&self, age: i64) -> Result<Vec<MentalHealthEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entries = select_by_age(session.conn(), age).await?;
        session.commit().await?;
        Ok(entries)
    }

    async fn get_all_by_sleep_issues(&self) -> Result<Vec<MentalHealthEntry>, SurveyError> {
        let mut session = Session::begin(&self.pool).await?;
        let entries = select_by_sleep_issues(session.conn()).await?;
        session.commit().await?;
        Ok(entries)
    }
}
