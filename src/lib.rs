//! # funcctl
//!
//! A Rust CLI tool for creating, deploying and verifying serverless function
//! apps by driving the platform command-line tools.
//!
//! ## Usage
//!
//! ```bash
//! funcctl create-project [NAME] [LANGUAGE]
//! funcctl deploy [APP]
//! funcctl verify APP FUNCTION [--language L] [--retries N]
//! ```
//!
//! ## Modules
//!
//! - `actions` - The user-facing actions, keyed by identifier
//! - `automation` - Scripted prompt answering and the URL mailbox
//! - `cli` - Argument parsing and command routing
//! - `config` - Settings file handling with defaults
//! - `interaction` - User prompts and progress display
//! - `project` - Function-project conventions shared across modules
//! - `scaffold` - Debug scaffold files written into new projects
//! - `subprocess` - Unified subprocess abstraction layer for testing
//! - `tree` - Cached model of deployed apps and their functions
//! - `verify` - Bounded-retry deployment verification and HTTP smoke check
pub mod actions;
pub mod automation;
pub mod cli;
pub mod config;
pub mod error;
pub mod interaction;
pub mod project;
pub mod scaffold;
pub mod subprocess;
pub mod tree;
pub mod verify;
