use std::path::PathBuf;

use serde::Deserialize;

use super::ConfigError;
use crate::session::{Connector, DryRunConnector, SocketConnector};

#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub connection: Option<Connection>,
}

/// Where the layer management service listens.
#[derive(Debug, Deserialize, Default, Clone, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Connection {
    pub socket: Option<PathBuf>,
}

impl Config {
    /// Validate the merged configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Some(socket) = self.socket()
            && socket.as_os_str().is_empty()
        {
            errors.push("connection.socket must not be empty".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Overlay `other` on top of `self`; fields set in `other` win.
    pub fn merge(self, other: Config) -> Config {
        Config {
            connection: match (self.connection, other.connection) {
                (None, None) => None,
                (Some(b), None) => Some(b),
                (None, Some(o)) => Some(o),
                (Some(b), Some(o)) => Some(Connection {
                    socket: o.socket.or(b.socket),
                }),
            },
        }
    }

    pub fn socket(&self) -> Option<&PathBuf> {
        self.connection.as_ref().and_then(|c| c.socket.as_ref())
    }

    /// The connector commands use: the configured socket, or a dry run
    /// that prints each request when no socket is set.
    pub fn connector(&self) -> Box<dyn Connector> {
        match self.socket() {
            Some(path) => Box::new(SocketConnector::new(path.clone())),
            None => Box::new(DryRunConnector::new()),
        }
    }
}

pub fn parse_config(yaml: &str) -> Result<Config, ConfigError> {
    let config: Config = serde_saphyr::from_str(yaml)?;
    Ok(config)
}
