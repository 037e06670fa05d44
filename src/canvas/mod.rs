//! Coordinate spaces and viewport state for the editor canvas.
//!
//! Stage positions live in *canvas space*, a logical coordinate system that is
//! independent of how the canvas is currently panned or zoomed. Pointer events
//! arrive in *screen space*, relative to the canvas element's bounding box.
//! This module owns the conversion between the two, plus the [`Viewport`]
//! struct holding the current pan offset and zoom factor.

pub mod transform;
pub mod viewport;

pub use transform::{Point, to_canvas, to_screen};
pub use viewport::{MAX_ZOOM, MIN_ZOOM, Viewport, ZOOM_STEP};
