//! # folio - Portfolio Chatbot
//!
//! `folio` is a terminal chatbot that answers questions about one person.
//! Visitors type keywords such as `skills` or `resume`; each keyword (or
//! one of its aliases) maps to a canned response filled in from a profile.
//!
//! ## Quick Start
//!
//! ```bash
//! # Chat interactively
//! folio
//!
//! # Ask a single question
//! folio ask skills
//!
//! # Replay a script and export the transcript
//! printf 'intro\nskills\ncontact\n' | folio replay --export text
//!
//! # Write the built-in profile for editing
//! folio profile init
//! ```
//!
//! ## Profile
//!
//! The profile is stored in `~/.config/folio/profile.toml`. Every section
//! is optional; missing values fall back to the built-in profile:
//!
//! ```toml
//! [personal]
//! name = "Ada Lovelace"
//! title = "Analyst"
//!
//! [settings]
//! typing_delay_ms = 800
//!
//! [commands]
//! resume = ["resume", "cv"]
//! ```

/// Conversation state, message history and the interactive session.
pub mod chat;

/// Command-line interface definitions and handlers.
pub mod cli;

/// Keyword commands and response rendering.
pub mod command;

/// File system utilities.
pub mod fs;

/// Reading replay scripts from files and stdin.
pub mod input;

/// Global output configuration (quiet mode, colors).
pub mod output;

/// XDG-style path utilities for configuration.
pub mod paths;

/// Profile loading, saving and validation.
pub mod profile;

/// `{placeholder}` template substitution.
pub mod template;

/// Terminal UI components (spinner, colors, screen control).
pub mod ui;
