//! Schema bootstrap for the lab tables.
//!
//! Every table has an engine-assigned `id` primary key; dates are stored as
//! TEXT. External migration tooling owns schema evolution; this module only
//! creates the baseline tables so a fresh database (or a test database) is
//! immediately usable.

use rusqlite::Connection;

pub(crate) fn init(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS "experiment" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            protocol TEXT,
            metadata TEXT,
            date_started TEXT,
            description TEXT
        );

        CREATE TABLE IF NOT EXISTS "run" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            date_run_start TEXT,
            experiment_id INTEGER REFERENCES "experiment"(id),
            computer TEXT,
            minion TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS "barcode" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            kit TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS "user" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            email TEXT,
            role TEXT
        );

        CREATE TABLE IF NOT EXISTS "computer" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            device_name TEXT
        );

        CREATE TABLE IF NOT EXISTS "participant" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            date_enrolled TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS "sample" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            participant_id INTEGER REFERENCES "participant"(id),
            sample_type TEXT,
            date_collected TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS "library_prep" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            sample_id INTEGER REFERENCES "sample"(id),
            kit TEXT,
            date_prepared TEXT,
            operator TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS "minion" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            computer_used TEXT,
            device_date TEXT,
            notes TEXT
        );

        CREATE TABLE IF NOT EXISTS "operator" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT,
            initials TEXT
        );

        CREATE TABLE IF NOT EXISTS "sequencing_unit" (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            flow_cell_id TEXT,
            unit_type TEXT,
            date_received TEXT,
            notes TEXT
        );
        "#,
    )
}
