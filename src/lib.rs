//! TabShell: a minimal multi-tab desktop web browser shell.
//!
//! This library crate exposes all modules for use by the binary and integration tests.

pub mod app;
pub mod ipc_handler;
pub mod logging;
pub mod managers;
pub mod platform;
pub mod services;
pub mod shell;
pub mod types;
pub mod views;

#[cfg(feature = "gui")]
pub mod ui;
