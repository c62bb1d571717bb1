//! Subcommand implementations.

/// One-shot question handler.
pub mod ask;

/// Chat mode command handler.
pub mod chat;

/// Keyword listing handler.
pub mod keywords;

/// Profile management command handler.
pub mod profile;

/// Script replay handler.
pub mod replay;
