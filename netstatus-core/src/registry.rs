use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::Mutex;

use crate::Result;

/// A credential record captured by the registration form.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisteredNetwork {
    pub ssid: String,
    pub security: String,
    pub password: String,
    pub interval: String,
    pub brand: String,
    pub registered_at: DateTime<Utc>,
}

/// The listable view of a record. Passwords stay in the database.
#[derive(Debug, Clone, Serialize)]
pub struct RegisteredSummary {
    pub ssid: String,
    pub brand: String,
    pub interval: String,
    pub registered_at: DateTime<Utc>,
}

/// Durable store for registered networks.
///
/// The status path never reads this data back; `list` exists for the
/// maintenance endpoint and for tests.
pub struct RegistrationStore {
    conn: Mutex<Connection>,
}

impl RegistrationStore {
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_connection(Connection::open(path)?)
    }

    /// Test stores live in memory.
    pub fn open_in_memory() -> Result<Self> {
        Self::from_connection(Connection::open_in_memory()?)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        conn.execute(
            "CREATE TABLE IF NOT EXISTS registered_networks (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                ssid TEXT NOT NULL,
                security TEXT NOT NULL,
                password TEXT NOT NULL,
                interval TEXT NOT NULL,
                brand TEXT NOT NULL,
                registered_at TEXT NOT NULL
            )",
            [],
        )?;
        Ok(Self { conn: Mutex::new(conn) })
    }

    pub fn insert(&self, network: &RegisteredNetwork) -> Result<()> {
        self.conn.lock().unwrap().execute(
            "INSERT INTO registered_networks
                (ssid, security, password, interval, brand, registered_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
            params![
                network.ssid,
                network.security,
                network.password,
                network.interval,
                network.brand,
                network.registered_at,
            ],
        )?;
        Ok(())
    }

    /// Everything on file, most recent first.
    pub fn list(&self) -> Result<Vec<RegisteredSummary>> {
        let conn = self.conn.lock().unwrap();
        let mut stmt = conn.prepare(
            "SELECT ssid, brand, interval, registered_at
             FROM registered_networks
             ORDER BY registered_at DESC, id DESC",
        )?;
        let rows = stmt.query_map([], |row| {
            Ok(RegisteredSummary {
                ssid: row.get(0)?,
                brand: row.get(1)?,
                interval: row.get(2)?,
                registered_at: row.get(3)?,
            })
        })?;
        Ok(rows.collect::<std::result::Result<Vec<_>, _>>()?)
    }
}
