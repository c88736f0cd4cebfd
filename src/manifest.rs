//! # Route Manifest
//!
//! A TOML file declaring static routes, used by the `waypost` binary to build a
//! dispatcher without writing code.
//!
//! ```toml
//! [[routes]]
//! method = "GET"
//! path = "/users/:id"
//! echo = true
//!
//! [[routes]]
//! method = "POST"
//! path = "/users"
//! status = 201
//! body = "created"
//! content_type = "text/plain"
//! ```
//!
//! Routes are registered in file order. `GET` routes are also reachable under `HEAD`.
//! With `echo = true` the route answers with [`crate::echo::echo_handler`] and the
//! static fields are ignored.

use http::{HeaderValue, Method};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::dispatcher::RouterBuilder;
use crate::echo::echo_handler;
use crate::handlers::StaticResponse;

fn default_status() -> u16 {
    200
}

/// One `[[routes]]` entry.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RouteEntry {
    pub method: String,
    pub path: String,
    #[serde(default = "default_status")]
    pub status: u16,
    #[serde(default)]
    pub body: String,
    #[serde(default)]
    pub content_type: Option<String>,
    #[serde(default)]
    pub echo: bool,
}

/// Parsed manifest file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// Error loading or applying a manifest.
#[derive(Debug)]
pub enum ConfigError {
    /// The file could not be read.
    Io {
        /// Manifest path
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },
    /// The TOML did not parse or did not fit the manifest shape.
    Parse {
        /// Parser message
        message: String,
    },
    /// A route declares a method that is not a valid HTTP token.
    InvalidMethod {
        /// The rejected method text
        method: String,
    },
    /// A route declares a content type that is not a valid header value.
    InvalidContentType {
        /// The rejected content type
        content_type: String,
    },
    /// A route declares a status outside 100..=999.
    InvalidStatus {
        /// Route path
        path: String,
        /// The rejected status
        status: u16,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io { path, source } => {
                write!(f, "failed to read manifest {}: {source}", path.display())
            }
            ConfigError::Parse { message } => write!(f, "invalid manifest: {message}"),
            ConfigError::InvalidMethod { method } => {
                write!(f, "invalid HTTP method '{method}' in manifest")
            }
            ConfigError::InvalidContentType { content_type } => {
                write!(f, "invalid content type '{content_type}' in manifest")
            }
            ConfigError::InvalidStatus { path, status } => {
                write!(f, "invalid status {status} for route '{path}'")
            }
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl Manifest {
    /// Parse manifest TOML.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })
    }

    /// Read and parse a manifest file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml_str(&content)
    }

    /// Register every route on `builder`, in file order.
    ///
    /// Entries are validated before anything is registered, so a bad entry leaves
    /// the builder untouched.
    pub fn apply(&self, builder: &mut RouterBuilder) -> Result<(), ConfigError> {
        let prepared = self
            .routes
            .iter()
            .map(|entry| entry.prepare().map(|prepared| (entry, prepared)))
            .collect::<Result<Vec<_>, _>>()?;

        for (entry, (method, handler)) in prepared {
            match handler {
                Some(response) if method == Method::GET => {
                    builder.get(&entry.path, response);
                }
                Some(response) => {
                    builder.add(method, &entry.path, response);
                }
                None if method == Method::GET => {
                    builder.get(&entry.path, echo_handler);
                }
                None => {
                    builder.add(method, &entry.path, echo_handler);
                }
            }
        }
        Ok(())
    }
}

impl RouteEntry {
    /// Validated method plus the static response (`None` for echo routes).
    fn prepare(&self) -> Result<(Method, Option<StaticResponse>), ConfigError> {
        let method = Method::from_bytes(self.method.as_bytes()).map_err(|_| {
            ConfigError::InvalidMethod {
                method: self.method.clone(),
            }
        })?;
        if self.echo {
            return Ok((method, None));
        }
        if !(100..=999).contains(&self.status) {
            return Err(ConfigError::InvalidStatus {
                path: self.path.clone(),
                status: self.status,
            });
        }

        let mut response = StaticResponse::new(self.status, self.body.as_bytes());
        if let Some(content_type) = &self.content_type {
            let value = HeaderValue::from_str(content_type).map_err(|_| {
                ConfigError::InvalidContentType {
                    content_type: content_type.clone(),
                }
            })?;
            response = response.with_content_type(value);
        }
        Ok((method, Some(response)))
    }
}
