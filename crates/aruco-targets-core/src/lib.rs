//! Core types and utilities for printable marker targets.
//!
//! This crate is intentionally small: it knows about pixel canvases, physical
//! units, a couple of drawing primitives and the caption font. It does *not*
//! know anything about marker dictionaries or page layouts.

mod canvas;
mod draw;
mod font;
mod geometry;
mod logger;

pub use canvas::{blit, blit_centered, gray_to_rgb, white_gray, CanvasError};
pub use draw::draw_crosshair;
pub use font::{
    pixel_height, FontError, TextSize, Typeface, MAX_FONT_SCALE, PX_PER_FONT_SCALE,
};
pub use geometry::{centered_offset, mm_to_px, PaperSize, MM_PER_INCH};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
