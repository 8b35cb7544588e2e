//! Interaction core for zooming a fractal viewport by drag selection.
//!
//! The host renders some rectangle of the fractal plane (an [`Area`]) onto a
//! fixed-size pixel canvas (a [`Viewport`]) and polls pointer position and
//! modifier keys. This crate owns everything between those polls and the next
//! render request:
//!
//! - [`Selection`] tracks one pointer-driven rectangle, with aspect-ratio
//!   locking (shift) and symmetric expansion around the anchor (ctrl).
//! - [`CoordinateConverter`] maps a committed pixel rectangle back into the
//!   domain plane the viewport currently represents.
//! - [`SelectionDriver`] is the state machine the host feeds pointer events
//!   into; on release it yields the next [`Area`] to render.
//!
//! Rendering, pixel drawing, and input-device handling stay on the host side.
//! The crate only consumes already-sampled coordinates and key states.

pub mod constants;
pub mod coords;
pub mod error;
pub mod input;
pub mod perf;
pub mod selection;
pub mod types;

pub use coords::{CoordinateContext, CoordinateConverter};
pub use error::{GeometryError, GeometryResult};
pub use input::{CommitOutcome, DriverState, PointerSample, SelectionDriver};
pub use selection::Selection;
pub use types::{Area, Pixel, Viewport};
