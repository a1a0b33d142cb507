//! Money Flow - personal finance tracker
//!
//! This library provides the core functionality for Money Flow: recording
//! income and expense transactions against named categories, tracking
//! savings goals, and aggregating everything into a monthly dashboard that
//! is served over a JSON API and rendered in the terminal.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `models`: Core data models (transactions, categories, goals, money)
//! - `storage`: Single-file JSON storage layer
//! - `services`: Business logic and dashboard aggregations
//! - `reports`: Dashboard composition
//! - `display`: Terminal formatting
//! - `api`: axum HTTP routes
//! - `cli`: clap command handlers
//!
//! # Example
//!
//! ```rust,ignore
//! use money_flow::config::{paths::MoneyFlowPaths, settings::Settings};
//! use money_flow::reports::DashboardReport;
//! use money_flow::storage::Storage;
//!
//! let paths = MoneyFlowPaths::new()?;
//! let settings = Settings::load_or_create(&paths)?;
//! let storage = Storage::open(&paths)?;
//! let report = DashboardReport::generate(&storage, &settings, chrono::Local::now().date_naive())?;
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod display;
pub mod error;
pub mod models;
pub mod reports;
pub mod services;
pub mod storage;

pub use error::MoneyFlowError;
