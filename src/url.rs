//! Connection parameters and JDBC URL construction.

use crate::capabilities::AccessMode;
use crate::error::{Error, Result};

/// Driver class of the ODBC bridge.
pub const ODBC_BRIDGE_DRIVER: &str = "sun.jdbc.odbc.JdbcOdbcDriver";

/// Port value some hosts store to mean "not configured".
pub const PORT_PLACEHOLDER: &str = "-1";

/// Host used when none is configured.
pub const DEFAULT_HOST: &str = "localhost";

/// What a native URL does when no port is configured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PortPolicy {
    /// Fill in this port.
    Default(u16),
    /// Leave the port segment out; the driver applies its own default.
    Omit,
}

/// Connection parameters as entered by the user.
///
/// Host and port stay strings: they may be empty or hold a placeholder, and
/// the dialect decides how to default them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConnectParams {
    pub access_mode: AccessMode,
    pub host: String,
    pub port: String,
    pub database: String,
}

impl ConnectParams {
    /// Create native connection parameters.
    pub fn new(host: impl Into<String>, port: impl Into<String>, database: impl Into<String>) -> Self {
        Self {
            access_mode: AccessMode::Native,
            host: host.into(),
            port: port.into(),
            database: database.into(),
        }
    }

    /// Set the access mode.
    pub fn with_access_mode(mut self, access_mode: AccessMode) -> Self {
        self.access_mode = access_mode;
        self
    }

    /// Parse a connection string like "host:port/database" or "host/database".
    pub fn parse(conn_str: &str) -> Result<Self> {
        let (addr_part, database) =
            conn_str
                .split_once('/')
                .ok_or_else(|| Error::InvalidConnectString {
                    message: "Expected format: host[:port]/database".to_string(),
                })?;

        let (host, port) = match addr_part.split_once(':') {
            Some((h, p)) => {
                p.parse::<u16>().map_err(|_| Error::InvalidConnectString {
                    message: format!("Invalid port: {}", p),
                })?;
                (h, p)
            }
            None => (addr_part, ""),
        };

        Ok(Self::new(host, port, database))
    }
}

/// Build a native URL of the form `<scheme>host[:port]/database`.
pub(crate) fn native_url(
    scheme: &str,
    port_policy: PortPolicy,
    host: &str,
    port: &str,
    database: &str,
) -> Result<String> {
    let host = if host.is_empty() { DEFAULT_HOST } else { host };

    if database.is_empty() {
        return Err(Error::missing_database_name());
    }
    let separator = if database.starts_with('/') { "" } else { "/" };

    let port_unset = port.is_empty() || port == PORT_PLACEHOLDER;
    let url = match (port_unset, port_policy) {
        (false, _) => format!("{scheme}{host}:{port}{separator}{database}"),
        (true, PortPolicy::Default(default)) => {
            format!("{scheme}{host}:{default}{separator}{database}")
        }
        (true, PortPolicy::Omit) => format!("{scheme}{host}{separator}{database}"),
    };
    Ok(url)
}

/// Build the ODBC bridge URL for a data source name.
pub(crate) fn odbc_url(database: &str) -> String {
    format!("jdbc:odbc:{}", database)
}
