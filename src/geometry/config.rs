//! Declarative parameters of the kaleidoscope transform.
//!
//! Pure data; validation happens at the [`crate::Kaleidoscope`] setters so a
//! rejected value never reaches the config, and the last accepted value is
//! always observable through the paired getter.

/// Rotational direction, or none for corner-centered source wedges.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Direction {
    /// Clockwise in image coordinates (y grows downward).
    Clockwise,
    /// Anticlockwise in image coordinates.
    Anticlockwise,
    /// No direction; only meaningful as a segment direction.
    None,
}

/// One of the four image corners, in unit-square coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Corner {
    /// `(0, 0)`.
    TopLeft,
    /// `(1, 0)`.
    TopRight,
    /// `(1, 1)`.
    BottomRight,
    /// `(0, 1)`.
    BottomLeft,
}

impl Corner {
    /// Position in the unit square.
    pub fn unit_point(self) -> kurbo::Point {
        match self {
            Corner::TopLeft => kurbo::Point::new(0.0, 0.0),
            Corner::TopRight => kurbo::Point::new(1.0, 0.0),
            Corner::BottomRight => kurbo::Point::new(1.0, 1.0),
            Corner::BottomLeft => kurbo::Point::new(0.0, 1.0),
        }
    }

    pub(crate) fn walk_index(self) -> usize {
        match self {
            Corner::TopLeft => 0,
            Corner::TopRight => 1,
            Corner::BottomRight => 2,
            Corner::BottomLeft => 3,
        }
    }
}

/// The transform's declarative parameters.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct GeometryConfig {
    /// Normalized `[0,1]×[0,1]` center of the reflection.
    pub origin: (f32, f32),
    /// Half the number of wedges; `n_segments = 2 * segmentation`.
    pub segmentation: u32,
    /// Whether the source wedge is corner-centered (`None`) or extends from
    /// the corner in a rotational direction.
    pub segment_direction: Direction,
    /// Corner that anchors the source wedge when no explicit angle is set.
    pub preferred_corner: Corner,
    /// Direction to walk the corners when breaking distance ties.
    pub corner_search_direction: Direction,
    /// Explicit source-segment angle (radians from the positive x axis,
    /// increasing anticlockwise). Overrides corner-based placement when set.
    pub source_segment_angle: Option<f32>,
    /// Edge policy: tessellated reflection (`true`) or background fill.
    pub edge_reflect: bool,
    /// Pixel written when a background-mode sample falls outside the frame.
    /// When absent the destination pixel is left untouched.
    pub background_color: Option<Vec<u8>>,
    /// Out-of-range samples within this many pixels of an edge are clamped
    /// to the edge instead of treated as background.
    pub edge_threshold: u32,
    /// Worker count for `process`: 0 auto-detects, 1 forces single-threaded.
    pub threads: u32,
}

impl Default for GeometryConfig {
    fn default() -> Self {
        Self {
            origin: (0.5, 0.5),
            segmentation: 16,
            segment_direction: Direction::None,
            preferred_corner: Corner::BottomRight,
            corner_search_direction: Direction::Clockwise,
            source_segment_angle: None,
            edge_reflect: true,
            background_color: None,
            edge_threshold: 0,
            threads: 0,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/geometry/config.rs"]
mod tests;
