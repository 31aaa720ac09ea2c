//! tallybook - Terminal front end for a double-entry accounting backend
//!
//! This library provides the core functionality for the tallybook CLI. All
//! financial computation and persistence live in an external HTTP backend;
//! this side handles data entry, client-side validation, and report
//! rendering.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (chart, journal entries, invoices, etc.)
//! - `api`: Blocking HTTP client and wire types
//! - `services`: Business logic layer
//! - `reports`: Report views built from backend balances
//! - `display`: Terminal formatting
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use tallybook::config::{paths::TallyPaths, settings::Settings};
//!
//! let paths = TallyPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;

pub use error::TallyError;
