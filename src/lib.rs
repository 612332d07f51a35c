//! Blocking client for the Clash of Clans REST API.
//!
//! ```no_run
//! use clash_api::{Client, QueryParams};
//!
//! let client = Client::new("my-api-token");
//! let clan = client.clan_information("#2PP", &QueryParams::new())?;
//! let search = client.clans(&QueryParams::new().with("name", "Clash").with("limit", 5))?;
//! # Ok::<(), clash_api::ClashError>(())
//! ```
//!
//! Responses are returned as raw [`serde_json::Value`]s. The HTTP status is not
//! inspected, so an error reported by the service (invalid token, unknown tag,
//! throttling) arrives as a JSON object carrying `reason`/`message` fields
//! rather than as an `Err`.

pub mod api;
pub mod config;
pub mod error;

pub use api::client::{Client, DEFAULT_TIMEOUT_SECS};
pub use api::params::QueryParams;
pub use api::transport::{Transport, UreqTransport};
pub use error::ClashError;
