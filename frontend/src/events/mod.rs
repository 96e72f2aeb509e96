//! Events Module
//!
//! Command types flowing from the view layer to the controller.

mod ui_command;

pub use ui_command::UiCommand;
