//! Terminal portfolio: a command interpreter minigame and a code typing challenge.
//!
//! The binary in `main.rs` drives the TUI; the library exposes the engines so
//! integration tests and benchmarks can exercise them directly.

pub mod app;
pub mod challenge;
pub mod config;
pub mod console;
pub mod effects;
pub mod event;
pub mod logging;
pub mod store;
pub mod ui;
