//! Declarative reflection parameters and the derived segment geometry.

pub mod config;
pub mod segments;
