//! Typed Rust client for the templated SMS REST API (version `2013-12-26`).
//!
//! The crate is split the usual way: a domain layer of strong types, a transport layer
//! for wire-format quirks (request signing, JSON bodies, URLs), and a small client layer
//! orchestrating requests.
//!
//! ```rust,no_run
//! use ccpsms::SmsClient;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ccpsms::SmsError> {
//!     let client = SmsClient::new("app.cloopen.com:8883", "<account sid>", "<auth token>", "<app id>")?;
//!     client.send_message("1", "13800000000", ["6532", "5"]).await?;
//!     let templates = client.get_templates().await?;
//!     println!("{templates}");
//!     Ok(())
//! }
//! ```
#![forbid(unsafe_code)]

pub mod client;
pub mod domain;
mod transport;

pub use client::{Credentials, SmsClient, SmsClientBuilder, SmsError};
pub use domain::{
    AccountSid, AppId, AuthToken, Host, Recipient, SEND_MAX_RECIPIENTS, SendTemplateSms,
    SendTemplateSmsResponse, StatusCode, TemplateId, Timestamp, TimestampZone, ValidationError,
};
pub use transport::API_VERSION;
