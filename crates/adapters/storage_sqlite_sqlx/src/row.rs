//! Column decoding helpers shared by the repositories.

use sqlx::Row;
use sqlx::sqlite::SqliteRow;

/// Read an `INTEGER` column that the schema constrains to a small range.
pub(crate) fn small_int(row: &SqliteRow, column: &str) -> Result<u8, sqlx::Error> {
    let value: i64 = row.try_get(column)?;
    u8::try_from(value).map_err(|err| sqlx::Error::Decode(Box::new(err)))
}
