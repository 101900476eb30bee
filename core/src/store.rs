//! SQLite persistence layer.
//!
//! RULE: Only the store talks to the database.
//! The importer and the runner hand records to store methods — they
//! never execute SQL directly.

use crate::error::EtlResult;
use rusqlite::Connection;

mod asset;
mod investment;
mod investor;

pub struct InvestStore {
    conn: Connection,
    path: Option<String>, // None for :memory:, Some(path) for file
}

impl InvestStore {
    pub fn open(path: &str) -> EtlResult<Self> {
        let conn = Connection::open(path)?;
        // WAL mode only for real files (:memory: ignores it).
        let _ = conn.execute_batch("PRAGMA journal_mode=WAL;");
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self {
            conn,
            path: Some(path.to_string()),
        })
    }

    /// Open an in-memory database (used in tests).
    pub fn in_memory() -> EtlResult<Self> {
        let conn = Connection::open(":memory:")?;
        conn.execute_batch("PRAGMA foreign_keys=ON;")?;
        Ok(Self { conn, path: None })
    }

    /// Reopen a new connection to the same database.
    /// For in-memory databases, this returns a new in-memory database (isolated).
    /// For file-based databases, this opens the same file.
    pub fn reopen(&self) -> EtlResult<Self> {
        match &self.path {
            Some(p) => Self::open(p),
            None => Self::in_memory(),
        }
    }

    /// Create the Investors, Assets, and Investments tables if absent.
    ///
    /// Every statement in the batch is `CREATE TABLE IF NOT EXISTS`, so
    /// the call is idempotent: safe to invoke any number of times, never
    /// touches existing rows, and a partially created schema heals on
    /// the next run.
    pub fn ensure_schema(&self) -> EtlResult<()> {
        self.conn
            .execute_batch(include_str!("../migrations/001_schema.sql"))?;
        Ok(())
    }

    // ── Schema introspection (tests and tooling) ───────────────

    /// Names of all user tables, sorted.
    pub fn table_names(&self) -> EtlResult<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'table' AND name NOT LIKE 'sqlite_%'
             ORDER BY name ASC",
        )?;
        let names = stmt
            .query_map([], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }

    /// Column names of `table`, in declaration order.
    pub fn table_columns(&self, table: &str) -> EtlResult<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT name FROM pragma_table_info(?1)")?;
        let names = stmt
            .query_map([table], |row| row.get(0))?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(names)
    }
}
