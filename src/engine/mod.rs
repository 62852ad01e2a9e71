//! The engine facade: configuration setters, lazy geometry derivation, and
//! the threading orchestrator.

pub mod kaleidoscope;
