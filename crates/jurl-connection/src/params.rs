//! JDBC connection parameters

use crate::JdbcDriver;
use jurl_core::{HostAndPort, Result, UrlDialect, parse, replace_host_port};
use std::fmt;

/// Everything needed to open a JDBC connection.
///
/// The host and port are read out of the URL once, when the parameters are
/// created, so an unusable URL is reported up front rather than when the
/// connection is first opened.
#[derive(Clone, PartialEq, Eq)]
pub struct JdbcConnectionParams {
    driver_class_name: String,
    url: String,
    username: Option<String>,
    password: Option<String>,
    host_and_port: HostAndPort,
}

impl JdbcConnectionParams {
    /// Create parameters for a driver class name and URL
    pub fn new(driver_class_name: impl Into<String>, url: impl Into<String>) -> Result<Self> {
        let driver_class_name = driver_class_name.into();
        let url = url.into();
        let host_and_port = parse(&driver_class_name, &url)?;

        tracing::debug!(
            driver = %driver_class_name,
            host = %host_and_port.host(),
            port = host_and_port.port(),
            "created JDBC connection params"
        );

        Ok(Self {
            driver_class_name,
            url,
            username: None,
            password: None,
            host_and_port,
        })
    }

    /// Create parameters for a catalogued driver
    pub fn for_driver(driver: JdbcDriver, url: impl Into<String>) -> Result<Self> {
        Self::new(driver.class_name(), url)
    }

    pub fn with_username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    pub fn with_password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn driver_class_name(&self) -> &str {
        &self.driver_class_name
    }

    pub fn username(&self) -> Option<&str> {
        self.username.as_deref()
    }

    pub fn password(&self) -> Option<&str> {
        self.password.as_deref()
    }

    pub fn host(&self) -> &str {
        self.host_and_port.host()
    }

    pub fn port(&self) -> u16 {
        self.host_and_port.port()
    }

    pub fn host_and_port(&self) -> &HostAndPort {
        &self.host_and_port
    }

    /// The catalogued driver for this class name, if any
    pub fn driver(&self) -> Option<JdbcDriver> {
        JdbcDriver::from_class_name(&self.driver_class_name)
    }

    /// URL dialect used to read the host and port
    pub fn dialect(&self) -> UrlDialect {
        UrlDialect::for_driver(&self.driver_class_name, &self.url)
    }

    /// Copy of these parameters pointing at `target` instead.
    ///
    /// Used to hand a container-internal address (network alias and
    /// container port) to a client that runs on the same Docker network.
    /// If the URL does not contain the current host/port the copy is
    /// identical to `self`. The copy's host and port are read back from the
    /// rewritten URL, so a descriptor where only one of `HOST`/`PORT` was
    /// substituted reports what the URL actually says.
    pub fn with_host_port(&self, target: &HostAndPort) -> Self {
        let url = replace_host_port(&self.url, &self.host_and_port, target);
        if url == self.url {
            tracing::debug!(
                url = %self.url,
                target = %target,
                "URL unchanged, keeping original host/port"
            );
            return self.clone();
        }

        match parse(&self.driver_class_name, &url) {
            Ok(host_and_port) => Self {
                url,
                host_and_port,
                ..self.clone()
            },
            Err(e) => {
                tracing::warn!(
                    url = %url,
                    error = %e,
                    "rewritten URL does not parse, keeping original"
                );
                self.clone()
            }
        }
    }
}

impl fmt::Debug for JdbcConnectionParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("JdbcConnectionParams")
            .field("driver_class_name", &self.driver_class_name)
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "<redacted>"))
            .field("host_and_port", &self.host_and_port)
            .finish()
    }
}
