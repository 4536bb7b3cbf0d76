//! Inline SVG icons
//!
//! Kept as source strings and loaded through `svg::Handle::from_memory`, so
//! the binary ships without an asset directory. All icons use
//! `currentColor` and are recolored at the call site via `svg::Style`.

pub const PLAY: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M8 5v14l11-7z"/></svg>"#;

pub const STOP: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" fill="currentColor"><path d="M6 6h12v12H6z"/></svg>"#;
