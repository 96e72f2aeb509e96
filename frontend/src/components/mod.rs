//! Components Module
//!
//! Reusable, stateless UI building blocks.

mod button;
mod dialog;
mod toast;

pub use button::ActionButton;
pub use dialog::ErrorDialog;
pub use toast::Toast;
