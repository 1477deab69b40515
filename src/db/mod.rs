// src/db/mod.rs

//! Database layer for Recetario
//!
//! All recipes, ingredients and their associations live in a single SQLite
//! file. This module opens connections with the pragmas the models rely on
//! (foreign keys for cascading deletes), keeps the schema migrated, and
//! wraps multi-statement changes in commit-or-rollback transactions.

pub mod models;
pub mod paths;
pub mod schema;

use crate::error::{Error, Result};
use rusqlite::{Connection, Transaction};
use std::path::Path;
use tracing::{debug, info, warn};

/// Create the database file (and parent directories) and apply the schema
pub fn init(db_path: &str) -> Result<()> {
    let path = Path::new(db_path);
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)?;
    }

    info!("Initializing database at {}", db_path);
    let conn = Connection::open(path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(())
}

/// Open an existing database, bringing its schema up to date
pub fn open(db_path: &str) -> Result<Connection> {
    if !Path::new(db_path).exists() {
        return Err(Error::InitError(format!(
            "Database not found at {}. Run 'recetario init' first.",
            db_path
        )));
    }

    debug!("Opening database at {}", db_path);
    let conn = Connection::open(db_path)?;
    configure(&conn)?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Open a private in-memory database with the full schema
pub fn open_in_memory() -> Result<Connection> {
    let conn = Connection::open_in_memory()?;
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    schema::migrate(&conn)?;
    Ok(conn)
}

/// Apply connection pragmas
fn configure(conn: &Connection) -> Result<()> {
    conn.execute("PRAGMA foreign_keys = ON", [])?;
    let mode: String = conn.query_row("PRAGMA journal_mode = WAL", [], |row| row.get(0))?;
    debug!("Journal mode: {}", mode);
    Ok(())
}

/// Run `f` inside a transaction
///
/// The transaction commits when `f` returns `Ok` and rolls back otherwise,
/// leaving every table as it was before the call.
pub fn transaction<T, F>(conn: &mut Connection, f: F) -> Result<T>
where
    F: FnOnce(&Transaction) -> Result<T>,
{
    let tx = conn.transaction()?;
    match f(&tx) {
        Ok(value) => {
            tx.commit()?;
            Ok(value)
        }
        Err(e) => {
            warn!("Rolling back transaction: {}", e);
            tx.rollback()?;
            Err(e)
        }
    }
}
