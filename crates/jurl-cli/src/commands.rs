//! Subcommand implementations
//!
//! Each command returns the text to print so it can be tested without
//! capturing stdout.

use anyhow::{Context, Result};
use comfy_table::Table;
use jurl_connection::{ConnectionsFile, JdbcDriver};
use jurl_core::{HostAndPort, UrlDialect, parse as parse_url, replace_host_port};
use std::path::Path;

/// Driver class name to use for `url`, guessing from its prefix if needed
fn driver_for<'a>(driver: Option<&'a str>, url: &str) -> &'a str {
    driver
        .or_else(|| JdbcDriver::from_url(url).map(|d| d.class_name()))
        .unwrap_or_default()
}

pub fn parse(driver: Option<&str>, url: &str, json: bool) -> Result<String> {
    let driver = driver_for(driver, url);
    let hp = parse_url(driver, url)?;

    if json {
        Ok(serde_json::to_string_pretty(&hp)?)
    } else {
        Ok(hp.to_string())
    }
}

pub fn replace(url: &str, from: &HostAndPort, to: &HostAndPort) -> String {
    let rewritten = replace_host_port(url, from, to);
    if rewritten == url {
        tracing::info!(from = %from, "host/port not found in URL, printing it unchanged");
    }
    rewritten
}

pub fn dialect(url: &str, driver: Option<&str>) -> String {
    let dialect = match driver {
        Some(driver) => UrlDialect::for_driver(driver, url),
        None => UrlDialect::detect(url),
    };
    dialect.to_string()
}

pub fn check(path: &Path) -> Result<String> {
    let connections = ConnectionsFile::load(path)
        .with_context(|| format!("failed to load connections from {}", path.display()))?;

    let mut table = Table::new();
    table.set_header(vec!["Name", "Driver", "Host", "Port", "Dialect"]);
    for connection in &connections {
        let params = &connection.params;
        let driver = params
            .driver()
            .map(|d| d.display_name().to_string())
            .unwrap_or_else(|| params.driver_class_name().to_string());
        table.add_row(vec![
            connection.name.clone(),
            driver,
            params.host().to_string(),
            params.port().to_string(),
            params.dialect().to_string(),
        ]);
    }

    Ok(table.to_string())
}
