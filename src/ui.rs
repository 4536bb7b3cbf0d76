//! UI module for the sound-bars demo
//!
//! # Architecture
//!
//! - **Primitives** (`primitives`): Low-level `canvas::Program` implementations
//! - **Theme** (`theme`): Dark/light palettes and shared styles
//! - **Icons** (`icons`): Inline SVG assets

pub mod icons;
pub mod primitives;
pub mod theme;
