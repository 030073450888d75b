//! Adapter implementations for board ports and rendering.

pub mod html;
pub mod memory;
