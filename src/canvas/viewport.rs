use super::transform::Point;

/// Lower zoom bound. Stepping below this clamps silently.
pub const MIN_ZOOM: f64 = 0.3;
/// Upper zoom bound.
pub const MAX_ZOOM: f64 = 2.0;
/// Increment applied by a single zoom-in or zoom-out step.
pub const ZOOM_STEP: f64 = 0.1;

/// The current pan offset and zoom factor of the canvas.
///
/// Viewport state is transient: it is owned exclusively by the
/// [`EditorController`](crate::controller::EditorController), never persisted,
/// and the rendering layer only reads it. Zoom is kept inside
/// `[MIN_ZOOM, MAX_ZOOM]` at all times; the pan offset is unclamped.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    zoom: f64,
    pan: Point,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            zoom: 1.0,
            pan: Point::ZERO,
        }
    }
}

impl Viewport {
    pub fn zoom(&self) -> f64 {
        self.zoom
    }

    pub fn pan(&self) -> Point {
        self.pan
    }

    /// Sets the zoom factor, clamping into the valid range.
    pub fn set_zoom(&mut self, zoom: f64) {
        self.zoom = zoom.clamp(MIN_ZOOM, MAX_ZOOM);
    }

    pub fn zoom_in(&mut self) {
        self.set_zoom(self.zoom + ZOOM_STEP);
    }

    pub fn zoom_out(&mut self) {
        self.set_zoom(self.zoom - ZOOM_STEP);
    }

    /// Accumulates a screen-space delta into the pan offset.
    pub fn pan_by(&mut self, delta: Point) {
        self.pan = self.pan + delta;
    }

    /// Restores the default view: zoom 1.0, no pan.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
