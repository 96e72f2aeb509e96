//! UI Command Handlers
//!
//! This module organizes UI command handlers by domain.
//! Each submodule implements handlers for App via `impl` blocks.

mod session_handlers;
mod settings_handlers;
mod snapshot_handlers;
