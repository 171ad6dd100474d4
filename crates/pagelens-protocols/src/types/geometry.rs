//! Geometry types: viewport, bounding box, scroll metrics.

use serde::{Deserialize, Serialize};

/// Viewport information for coordinate calculations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportInfo {
    /// Viewport width in CSS pixels.
    pub width: u32,
    /// Viewport height in CSS pixels.
    pub height: u32,
}

impl Default for ViewportInfo {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 720,
        }
    }
}

/// Bounding box for an element, in viewport coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Check if a point is inside this bounding box.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.x + self.width && y >= self.y && y <= self.y + self.height
    }

    /// Get the center point of this bounding box.
    pub fn center(&self) -> (f64, f64) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Zero width or zero height.
    pub fn is_zero_area(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }

    /// True when the whole box lies inside the viewport.
    pub fn is_within_viewport(&self, viewport: &ViewportInfo) -> bool {
        !(self.x < 0.0
            || self.y < 0.0
            || self.x + self.width > f64::from(viewport.width)
            || self.y + self.height > f64::from(viewport.height))
    }

    /// Shift the box by the origin of an enclosing frame.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..self
        }
    }
}

/// Scroll axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Vertical,
    Horizontal,
}

/// Raw scroll geometry of an element, as reported by layout.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct ScrollMetrics {
    pub scroll_top: f64,
    pub scroll_left: f64,
    pub scroll_width: f64,
    pub scroll_height: f64,
    pub client_width: f64,
    pub client_height: f64,
}

impl ScrollMetrics {
    /// Scrollable distance along an axis (`scrollSize - clientSize`).
    pub fn overflow(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.scroll_height - self.client_height,
            Axis::Horizontal => self.scroll_width - self.client_width,
        }
    }

    /// Current scroll offset along an axis.
    pub fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Vertical => self.scroll_top,
            Axis::Horizontal => self.scroll_left,
        }
    }
}

/// Scroll position as a percentage per axis.
///
/// `None` means the axis has no scrollable overflow.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ScrollState {
    pub top: Option<f64>,
    pub left: Option<f64>,
}
