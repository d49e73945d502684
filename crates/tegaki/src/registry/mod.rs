//! Registry store for the character alphabet.
//!
//! This module provides the `SQLite`-backed persistent record of which
//! characters in the fixed alphabet have been captured, plus the monotonic
//! counter used to name saved image files.

pub mod migrations;
pub mod schema;

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension};
use tracing::{debug, info};

use crate::alphabet;
use crate::error::{Error, Result};

/// Metadata key for the persistent image-index counter.
const IMAGE_INDEX_KEY: &str = "next_image_index";

/// A single character record in the registry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CharacterRecord {
    /// The alphabet symbol this record tracks.
    pub symbol: char,
    /// Whether a saved sample has been linked for this symbol.
    pub registered: bool,
    /// Path of the linked sample image, if any.
    pub image_path: Option<PathBuf>,
    /// When the symbol was registered, if it has been.
    pub registered_at: Option<DateTime<Utc>>,
}

/// Statistics about the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegistryStats {
    /// Total number of seeded characters.
    pub total: i64,
    /// Number of characters with a linked sample.
    pub registered: i64,
    /// Number of characters still waiting for a sample.
    pub unregistered: i64,
    /// Size of the database file in bytes.
    pub db_size_bytes: u64,
}

/// Persistent registry of captured characters.
///
/// Opening the registry idempotently creates the schema and seeds one record
/// per alphabet character with insert-if-absent semantics, so existing
/// records (and their registered flags) are never overwritten.
#[derive(Debug)]
pub struct Registry {
    /// Path to the database file.
    path: PathBuf,
    /// Database connection, held open for the process lifetime.
    conn: Connection,
}

impl Registry {
    /// Open or create a registry database at the given path.
    ///
    /// Creates the parent directories and database file if they don't exist,
    /// initializes the schema, and seeds the alphabet.
    ///
    /// # Errors
    ///
    /// Returns an error if the database cannot be opened or schema
    /// initialization fails.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent() {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|source| Error::DirectoryCreate {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
        }

        debug!("Opening registry at {}", path.display());
        let conn = Connection::open(&path).map_err(|source| Error::DatabaseOpen {
            path: path.clone(),
            source,
        })?;

        // Enable WAL mode for better concurrent read performance
        conn.execute_batch("PRAGMA journal_mode=WAL; PRAGMA synchronous=NORMAL;")?;

        migrations::initialize_schema(&conn)?;
        seed_alphabet(&conn)?;

        info!("Registry opened at {}", path.display());
        Ok(Self { path, conn })
    }

    /// Create an in-memory registry for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the in-memory database cannot be created.
    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().map_err(|source| Error::DatabaseOpen {
            path: PathBuf::from(":memory:"),
            source,
        })?;

        migrations::initialize_schema(&conn)?;
        seed_alphabet(&conn)?;

        Ok(Self {
            path: PathBuf::from(":memory:"),
            conn,
        })
    }

    /// Get the path to the database file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// List the symbols that have no linked sample yet, in seeded order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_unregistered(&self) -> Result<Vec<char>> {
        let mut stmt = self
            .conn
            .prepare("SELECT symbol FROM chars WHERE registered = 0 ORDER BY symbol")?;

        let symbols = stmt
            .query_map([], |row| row.get::<_, String>(0))?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(symbols.iter().filter_map(|s| s.chars().next()).collect())
    }

    /// List every character record, in seeded order.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn list_all(&self) -> Result<Vec<CharacterRecord>> {
        let mut stmt = self.conn.prepare(
            "SELECT symbol, registered, image_path, registered_at FROM chars ORDER BY symbol",
        )?;

        let records = stmt
            .query_map([], row_to_record)?
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(records)
    }

    /// Get a single character record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn get(&self, symbol: char) -> Result<Option<CharacterRecord>> {
        let record = self
            .conn
            .query_row(
                "SELECT symbol, registered, image_path, registered_at FROM chars WHERE symbol = ?1",
                [symbol.to_string()],
                row_to_record,
            )
            .optional()?;
        Ok(record)
    }

    /// Mark a symbol registered, linking the saved sample path.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownSymbol`] if the symbol was never seeded; the
    /// store is left unchanged in that case.
    pub fn mark_registered(&self, symbol: char, image_path: &Path) -> Result<()> {
        let registered_at = Utc::now().to_rfc3339();
        let affected = self.conn.execute(
            "UPDATE chars SET registered = 1, image_path = ?2, registered_at = ?3 WHERE symbol = ?1",
            params![
                symbol.to_string(),
                image_path.display().to_string(),
                registered_at,
            ],
        )?;

        if affected == 0 {
            return Err(Error::unknown_symbol(symbol));
        }

        info!("Registered '{}' -> {}", symbol, image_path.display());
        Ok(())
    }

    /// Allocate the next image index.
    ///
    /// The counter starts at 1 and is read and advanced inside a single
    /// transaction, so every caller observes a distinct index regardless of
    /// what files exist in the output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn next_image_index(&mut self) -> Result<u32> {
        let tx = self.conn.transaction()?;

        let current: Option<String> = tx
            .query_row(
                "SELECT value FROM metadata WHERE key = ?1",
                [IMAGE_INDEX_KEY],
                |row| row.get(0),
            )
            .optional()?;

        let index: u32 = current.and_then(|v| v.parse().ok()).unwrap_or(1);

        tx.execute(
            "INSERT OR REPLACE INTO metadata (key, value) VALUES (?1, ?2)",
            (IMAGE_INDEX_KEY, (index + 1).to_string()),
        )?;
        tx.commit()?;

        debug!("Allocated image index {index}");
        Ok(index)
    }

    /// Get registry statistics.
    ///
    /// # Errors
    ///
    /// Returns an error if the database operation fails.
    pub fn stats(&self) -> Result<RegistryStats> {
        let total: i64 = self
            .conn
            .query_row("SELECT COUNT(*) FROM chars", [], |row| row.get(0))?;
        let registered: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM chars WHERE registered = 1",
            [],
            |row| row.get(0),
        )?;

        let db_size_bytes = if self.path.to_string_lossy() == ":memory:" {
            0
        } else {
            std::fs::metadata(&self.path).map(|m| m.len()).unwrap_or(0)
        };

        Ok(RegistryStats {
            total,
            registered,
            unregistered: total - registered,
            db_size_bytes,
        })
    }
}

/// Seed one record per alphabet character, insert-if-absent.
fn seed_alphabet(conn: &Connection) -> Result<()> {
    let mut stmt = conn.prepare(
        "INSERT OR IGNORE INTO chars (symbol, registered, image_path) VALUES (?1, 0, NULL)",
    )?;
    for symbol in alphabet::HIRAGANA {
        stmt.execute([symbol.to_string()])?;
    }
    Ok(())
}

/// Convert a database row to a `CharacterRecord`.
fn row_to_record(row: &rusqlite::Row) -> rusqlite::Result<CharacterRecord> {
    let symbol: String = row.get(0)?;
    let registered: bool = row.get(1)?;
    let image_path: Option<String> = row.get(2)?;
    let registered_at: Option<String> = row.get(3)?;

    Ok(CharacterRecord {
        symbol: symbol.chars().next().unwrap_or('\u{fffd}'),
        registered,
        image_path: image_path.map(PathBuf::from),
        registered_at: registered_at
            .and_then(|s| DateTime::parse_from_rfc3339(&s).ok())
            .map(|dt| dt.with_timezone(&Utc)),
    })
}
