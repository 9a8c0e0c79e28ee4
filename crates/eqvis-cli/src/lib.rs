//! # eqvis-cli
//!
//! Command-line tools for the eqmarl-vis document index:
//! - Render the README from its TOML manifest
//! - Check that a committed README matches its manifest
//! - Inspect what a README lists
//! - Manage the `eqvis` configuration file

#![warn(clippy::all)]
#![forbid(unsafe_code)]
#![cfg_attr(test, allow(clippy::unwrap_used, clippy::expect_used, clippy::panic))]

pub mod cli;
pub mod commands;
pub mod config;
pub mod config_handlers;
pub mod logging;

pub use config::EqvisConfig;
