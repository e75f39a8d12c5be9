//! # zdesk
//!
//! zdesk is a Rust client for the Zendesk helpdesk REST API.
//!
//! Method calls map one-to-one onto HTTP requests: every operation the API
//! offers is described by an entry in a static endpoint registry, and a
//! single dispatch routine turns that entry plus caller parameters into an
//! authenticated request and a classified response.
//!
//! ## Features
//!
//! - **Endpoint registry**: every supported operation declared as data
//!   (name, HTTP method, path template, documented success status)
//! - **Single dispatch path**: URL templating, credential attachment, and
//!   status classification happen in one place
//! - **Authentication**: HTTP Basic with an account password or an API token
//! - **Generic responses**: decoded JSON documents rather than per-resource
//!   model types that would have to track the API
//! - **Security**: credentials are never logged
//!
//! ## Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`auth`] - Credential schemes and `Authorization` header attachment
//! - [`client`] - Request dispatcher and per-resource convenience methods
//! - [`config`] - Configuration, built by hand or from environment variables
//! - [`endpoints`] - The static operation registry and path templates
//! - [`error`] - Error types for dispatch, transport, and classification
//!
//! ## Configuration
//!
//! [`Config::from_env`](config::Config::from_env) reads:
//!
//! - `ZENDESK_URL`: Base URL of the Zendesk instance
//! - `ZENDESK_EMAIL`: Account email for authentication
//! - `ZENDESK_TOKEN` or `ZENDESK_PASSWORD`: exactly one of the two
//!
//! Optional:
//! - `ZENDESK_API_VERSION`: `1` or `2` (defaults to `2`)
//!
//! ## Security Considerations
//!
//! Credentials are stored only in memory and are:
//! - Never logged at any log level
//! - Not carried by any error variant
//!
//! ## Example
//!
//! Using the [`ZdeskClient`](client::ZdeskClient) directly:
//!
//! ```ignore
//! use zdesk::client::{CollectionParams, ZdeskClient};
//! use zdesk::config::Config;
//!
//! async fn example() -> Result<(), zdesk::error::ZdeskError> {
//!     let config = Config::from_env()?;
//!     let client = ZdeskClient::new(&config)?;
//!
//!     // First page of tickets, newest first
//!     let options = CollectionParams::new()
//!         .with_per_page(25)
//!         .with_sort_order("desc");
//!
//!     let tickets = client.list_tickets(options).await?;
//!     if let Some(doc) = tickets.json() {
//!         println!("{}", doc["tickets"]);
//!     }
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod auth;
pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
