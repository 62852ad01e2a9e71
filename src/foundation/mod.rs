//! Shared building blocks: error taxonomy and frame-buffer views.

pub mod error;
pub mod frame;
