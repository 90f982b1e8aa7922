//! Geometry for the cosmetic page behaviours.

use serde::Serialize;

/// Scroll offset below which the header always stays visible.
pub const HEADER_HIDE_THRESHOLD: f64 = 100.0;

/// Maximum hero tilt, in degrees, at the element's edge.
pub const TILT_DEGREES: f64 = 5.0;

/// Whether the site header should be on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum HeaderVisibility {
    Shown,
    Hidden,
}

impl HeaderVisibility {
    /// CSS `transform` for the header.
    #[must_use]
    pub const fn transform(self) -> &'static str {
        match self {
            Self::Shown => "translateY(0)",
            Self::Hidden => "translateY(-100%)",
        }
    }
}

/// Decide header visibility from the previous and current scroll offsets.
///
/// The header hides only while scrolling down past the threshold.
#[must_use]
pub fn next_header_visibility(previous: f64, current: f64) -> HeaderVisibility {
    if current > previous && current > HEADER_HIDE_THRESHOLD {
        HeaderVisibility::Hidden
    } else {
        HeaderVisibility::Shown
    }
}

/// Axis-aligned bounding box in page coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }
}

/// Rotation applied to the hero image.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tilt {
    pub rotate_y: f64,
    pub rotate_x: f64,
}

impl Tilt {
    /// The untilted resting transform.
    pub const RESET_TRANSFORM: &'static str = "perspective(1000px) rotateY(0) rotateX(0)";

    /// Tilt for a pointer at (`x`, `y`) over `rect`.
    ///
    /// Returns `None` for an element without area.
    #[must_use]
    pub fn from_pointer(rect: Rect, x: f64, y: f64) -> Option<Self> {
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return None;
        }
        let dx = (x - rect.left) / rect.width - 0.5;
        let dy = (y - rect.top) / rect.height - 0.5;
        Some(Self {
            rotate_y: dx * TILT_DEGREES,
            rotate_x: dy * -TILT_DEGREES,
        })
    }

    /// CSS `transform` for this tilt.
    #[must_use]
    pub fn transform(&self) -> String {
        // + 0.0 normalises -0.0
        format!(
            "perspective(1000px) rotateY({}deg) rotateX({}deg)",
            self.rotate_y + 0.0,
            self.rotate_x + 0.0
        )
    }
}
