//! Connection definitions loaded from TOML
//!
//! ```toml
//! [[connection]]
//! name = "orders"
//! driver = "postgres"
//! url = "jdbc:postgresql://localhost:5432/orders"
//! username = "app"
//! password_env = "ORDERS_DB_PASSWORD"
//! ```
//!
//! `driver` accepts either a driver class name or a catalogue id from
//! [`JdbcDriver::id`].

use crate::{JdbcConnectionParams, JdbcDriver};
use jurl_core::{JurlError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

/// One `[[connection]]` table
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionEntry {
    /// Unique name within the file
    pub name: String,

    /// Driver class name or catalogue id
    pub driver: String,

    /// JDBC URL
    pub url: String,

    #[serde(default)]
    pub username: Option<String>,

    /// Inline password. Prefer `password_env` outside of throwaway setups.
    #[serde(default)]
    pub password: Option<String>,

    /// Environment variable holding the password
    #[serde(default)]
    pub password_env: Option<String>,
}

impl ConnectionEntry {
    /// Driver class name, expanding catalogue ids
    pub fn driver_class_name(&self) -> &str {
        JdbcDriver::from_id(&self.driver)
            .map(|driver| driver.class_name())
            .unwrap_or(self.driver.as_str())
    }
}

impl fmt::Debug for ConnectionEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionEntry")
            .field("name", &self.name)
            .field("driver", &self.driver)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("password_env", &self.password_env)
            .finish()
    }
}

/// A parsed connections file
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ConnectionsFile {
    #[serde(default, rename = "connection")]
    pub connections: Vec<ConnectionEntry>,
}

/// A validated connection with its name
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NamedConnection {
    pub name: String,
    pub params: JdbcConnectionParams,
}

impl ConnectionsFile {
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Read and decode a connections file without validating entries
    pub fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!(path = %path.display(), "reading connections file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Read a connections file and validate every entry
    pub fn load(path: impl AsRef<Path>) -> Result<Vec<NamedConnection>> {
        Self::read(path)?.resolve()
    }

    /// Validate every entry, reading `password_env` from the process environment
    pub fn resolve(&self) -> Result<Vec<NamedConnection>> {
        self.resolve_with(|key| std::env::var(key).ok())
    }

    /// Validate every entry, looking environment variables up with `lookup`
    pub fn resolve_with<F>(&self, lookup: F) -> Result<Vec<NamedConnection>>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut seen = HashSet::new();
        let mut resolved = Vec::with_capacity(self.connections.len());

        for entry in &self.connections {
            if entry.name.trim().is_empty() {
                return Err(JurlError::Configuration(
                    "connection name cannot be empty".to_string(),
                ));
            }
            if !seen.insert(entry.name.as_str()) {
                return Err(JurlError::Configuration(format!(
                    "duplicate connection name '{}'",
                    entry.name
                )));
            }

            let params = resolve_entry(entry, &lookup).map_err(|e| match e {
                JurlError::Configuration(msg) => {
                    JurlError::Configuration(format!("connection '{}': {}", entry.name, msg))
                }
                other => other,
            })?;

            resolved.push(NamedConnection {
                name: entry.name.clone(),
                params,
            });
        }

        tracing::info!(count = resolved.len(), "loaded connection definitions");
        Ok(resolved)
    }
}

fn resolve_entry<F>(entry: &ConnectionEntry, lookup: &F) -> Result<JdbcConnectionParams>
where
    F: Fn(&str) -> Option<String>,
{
    if entry.password.is_some() && entry.password_env.is_some() {
        return Err(JurlError::Configuration(
            "set either password or password_env, not both".to_string(),
        ));
    }

    let mut params = JdbcConnectionParams::new(entry.driver_class_name(), entry.url.as_str())?;

    if let Some(username) = &entry.username {
        params = params.with_username(username.as_str());
    }

    let password = match &entry.password_env {
        Some(var) => Some(lookup(var.as_str()).ok_or_else(|| {
            JurlError::Configuration(format!("environment variable {} is not set", var))
        })?),
        None => entry.password.clone(),
    };
    if let Some(password) = password {
        params = params.with_password(password);
    }

    Ok(params)
}
