//! Per-operation transactional sessions.
//!
//! Every repository call checks a [`Session`] out of the pool, passes its
//! connection explicitly to the query functions, and commits at the end.
//! A session that is dropped without [`Session::commit`] (an early `?`
//! return, a panic, a cancelled future) is rolled back by sqlx, so the
//! connection always returns to the pool in a clean state.
//!
//! Reads use [`Session::begin`]; writes use [`Session::begin_immediate`].

use sqlx::{Sqlite, SqliteConnection, SqlitePool, Transaction};

use crate::error::StorageError;

/// A transaction checked out from the pool.
pub struct Session {
    tx: Transaction<'static, Sqlite>,
}

impl Session {
    /// Begin a new transaction on a pooled connection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if no connection can be acquired
    /// or `BEGIN` fails.
    pub async fn begin(pool: &SqlitePool) -> Result<Self, StorageError> {
        let tx = pool.begin().await?;
        Ok(Self { tx })
    }

    /// Begin a transaction that holds the write lock from its first statement.
    ///
    /// A deferred transaction that reads before writing cannot wait for the
    /// lock when it upgrades; `SQLITE_BUSY` is returned immediately. Taking
    /// the lock up front lets concurrent writers queue on the busy timeout
    /// instead, so the last one to commit wins.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if no connection can be acquired
    /// or the lock is not granted within the busy timeout.
    pub async fn begin_immediate(pool: &SqlitePool) -> Result<Self, StorageError> {
        let tx = pool.begin_with("BEGIN IMMEDIATE").await?;
        Ok(Self { tx })
    }

    /// The connection every statement of this session runs on.
    pub fn conn(&mut self) -> &mut SqliteConnection {
        &mut self.tx
    }

    /// Commit the transaction, releasing the connection.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Database`] if `COMMIT` fails; the transaction
    /// is then rolled back.
    pub async fn commit(self) -> Result<(), StorageError> {
        self.tx.commit().await?;
        Ok(())
    }
}
