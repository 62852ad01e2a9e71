//! Kaleido is a kaleidoscope reflection engine for raw video frames.
//!
//! The engine slices the frame into `2 * segmentation` angular wedges around a
//! configurable origin, designates one wedge as the *source segment*, and fills
//! every other wedge with a mirrored/rotated copy of it — the classic
//! kaleidoscope. Samples that land outside the frame are either folded back in
//! by tessellated reflection or replaced with a background color, with a
//! configurable clamp threshold at the edges.
//!
//! # Pipeline overview
//!
//! 1. **Configure**: [`Kaleidoscope`] setters mutate a declarative
//!    [`GeometryConfig`]; any geometry change marks derived state stale.
//! 2. **Initialize**: segment count, angular width, and the source-segment
//!    start angle are derived lazily before the next frame.
//! 3. **Process**: the frame is partitioned into disjoint horizontal row bands
//!    and each band is rendered concurrently on a rayon pool (or synchronously
//!    when a single thread is requested). Each band runs either the scalar or
//!    the 4-wide SIMD block processor; the two are numerically equivalent.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate; the SIMD path uses
//!   the portable `wide` vector types and band parallelism is expressed as
//!   disjoint `&mut` slices.
//! - **Caller-owned frames**: the engine never allocates frame memory; input
//!   and output are plain byte slices described by a [`FrameLayout`].
//! - **Deterministic**: for a given configuration and input frame the output
//!   is byte-identical regardless of thread count.
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod engine;
mod foundation;
mod geometry;
mod reflect;
mod render;

pub use engine::kaleidoscope::Kaleidoscope;
pub use foundation::error::{KaleidoError, KaleidoResult};
pub use foundation::frame::FrameLayout;
pub use geometry::config::{Corner, Direction, GeometryConfig};
pub use geometry::segments::SegmentGeometry;
pub use render::visualise::SEGMENT_PALETTE;
