//! The shape capability and its variants.
//!
//! Every shape implements [`Shape`]. Flat shapes additionally implement
//! [`FlatShape`], which is the only capability a [`Prism`] accepts as its
//! base, so extruding a solid (or a prism) does not type-check.

pub mod flat;
pub mod prism;
pub mod solid;

pub use flat::{Circle, Ellipse, Rectangle, Square};
pub use prism::Prism;
pub use solid::{Cube, Cuboid, Ellipsoid, Sphere};

use std::borrow::Cow;
use std::fmt;

use crate::error::Result;

/// Human-readable name of a shape kind.
///
/// Fixed variants hand out a `&'static str`; a prism builds its tag from
/// its base and owns it.
pub type Tag = Cow<'static, str>;

/// Whether a shape has a volume at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Dimension {
    /// Two-dimensional: area only.
    Flat,
    /// Three-dimensional: area and volume.
    Solid,
}

impl fmt::Display for Dimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flat => f.write_str("flat"),
            Self::Solid => f.write_str("solid"),
        }
    }
}

/// Capability shared by every shape.
pub trait Shape: fmt::Debug {
    /// Returns the area (surface area for solids).
    fn area(&self) -> f64;

    /// Returns the enclosed volume.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::UnsupportedOperation`](crate::error::ShapeError::UnsupportedOperation)
    /// for flat shapes, which have no volume.
    fn volume(&self) -> Result<f64>;

    /// Returns the name of this shape kind.
    fn tag(&self) -> Tag;

    /// Returns whether the shape is flat or solid.
    fn dimension(&self) -> Dimension;
}

/// Capability of two-dimensional shapes, the only valid prism bases.
///
/// Sealed: only the flat shapes of this crate implement it, so a type
/// outside the crate cannot opt in as a prism base.
///
/// ```compile_fail
/// use mensura::geometry::{Dimension, FlatShape, Shape, Tag};
///
/// #[derive(Debug)]
/// struct Slab;
///
/// impl Shape for Slab {
///     fn area(&self) -> f64 {
///         1.0
///     }
///
///     fn volume(&self) -> mensura::Result<f64> {
///         Ok(1.0)
///     }
///
///     fn tag(&self) -> Tag {
///         Tag::Borrowed("slab")
///     }
///
///     fn dimension(&self) -> Dimension {
///         Dimension::Solid
///     }
/// }
///
/// impl FlatShape for Slab {}
/// ```
pub trait FlatShape: Shape + sealed::Sealed {}

mod sealed {
    pub trait Sealed {}
}
