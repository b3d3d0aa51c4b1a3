//! Widgetboard Console - command shell over the widget catalog.
//!
//! This crate is the presentation side of Widgetboard. The `widgetboard`
//! binary builds one [`DashboardStore`](widgetboard_core::DashboardStore) from
//! [`Config`] and lends it to a [`Shell`], which reads commands line by line
//! and prints results as text or JSON.
//!
//! # Modules
//!
//! - [`config`]: Configuration from environment variables
//! - [`error`]: Error types for console operations
//! - [`tokenize`]: Shell-like splitting of command lines
//! - [`command`]: Shell commands and their parser
//! - [`form`]: Custom-widget and preset-selection forms
//! - [`output`]: Text and JSON result writers
//! - [`shell`]: The command interpreter

pub mod command;
pub mod config;
pub mod error;
pub mod form;
pub mod output;
pub mod shell;
pub mod tokenize;

pub use command::Command;
pub use config::{Config, ConfigError, IdStrategy, OutputFormat};
pub use error::{CommandError, ConsoleError, FormError, Result};
pub use form::{CustomWidgetForm, PresetSelection};
pub use output::Output;
pub use shell::{Flow, Shell};
