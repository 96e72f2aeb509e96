//! Pages Module
//!
//! View layer: pure render functions emitting `UiCommand`s.

pub mod detection;

pub use detection::{DetectionPage, DetectionView};
