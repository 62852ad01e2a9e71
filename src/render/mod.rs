//! Per-band pixel processing: sampling, edge policy, block processors, and
//! the segment visualizer.

pub mod block;
pub mod sampler;
pub mod visualise;
