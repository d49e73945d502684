//! `SQLite` schema definitions for the character registry.
//!
//! This module contains the SQL statements for creating and managing
//! the registry schema.

/// SQL statement to create the chars table.
pub const CREATE_CHARS_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS chars (
    symbol TEXT PRIMARY KEY,
    registered INTEGER NOT NULL DEFAULT 0,
    image_path TEXT,
    registered_at TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now'))
)
";

/// SQL statement to create an index on `registered` for the unregistered view.
pub const CREATE_REGISTERED_INDEX: &str = r"
CREATE INDEX IF NOT EXISTS idx_chars_registered ON chars(registered)
";

/// SQL statement to create the metadata table for storing key-value pairs.
///
/// Holds the schema version and the persistent image-index counter.
pub const CREATE_METADATA_TABLE: &str = r"
CREATE TABLE IF NOT EXISTS metadata (
    key TEXT PRIMARY KEY,
    value TEXT NOT NULL
)
";

/// All schema creation statements in order.
pub const SCHEMA_STATEMENTS: &[&str] = &[
    CREATE_CHARS_TABLE,
    CREATE_REGISTERED_INDEX,
    CREATE_METADATA_TABLE,
];
