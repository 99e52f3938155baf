//! Configuration for the travelog web application.
//!
//! Settings resolve once at startup from the process environment (with a
//! `.env` file honored if present) and are read-only afterwards. The
//! consuming application calls [`Config::load`] before serving anything
//! and hands out shared references from there.

pub mod config;
pub mod constants;

pub use config::Config;
