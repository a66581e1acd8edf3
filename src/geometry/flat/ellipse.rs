use std::f64::consts::PI;

use crate::error::{Result, ShapeError};
use crate::geometry::{sealed, Dimension, FlatShape, Shape, Tag};
use crate::math::{check_dimension, Vector2};

/// An ellipse given by its two semi-axes.
///
/// `A = π * rx * ry`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipse {
    radii: Vector2,
}

impl Ellipse {
    /// Creates a new ellipse. Radii are not checked.
    #[must_use]
    pub fn new(radius_x: f64, radius_y: f64) -> Self {
        Self {
            radii: Vector2::new(radius_x, radius_y),
        }
    }

    /// Creates a new ellipse, rejecting negative or non-finite radii.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) naming the
    /// offending radius.
    pub fn try_new(radius_x: f64, radius_y: f64) -> Result<Self> {
        Ok(Self::new(
            check_dimension("radius_x", radius_x)?,
            check_dimension("radius_y", radius_y)?,
        ))
    }

    /// Returns the semi-axis along x.
    #[must_use]
    pub fn radius_x(&self) -> f64 {
        self.radii.x
    }

    /// Returns the semi-axis along y.
    #[must_use]
    pub fn radius_y(&self) -> f64 {
        self.radii.y
    }
}

impl Default for Ellipse {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Shape for Ellipse {
    fn area(&self) -> f64 {
        PI * self.radii.product()
    }

    fn volume(&self) -> Result<f64> {
        Err(ShapeError::no_volume(self.tag()).into())
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("ellipse")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Flat
    }
}

impl FlatShape for Ellipse {}

impl sealed::Sealed for Ellipse {}

/// An ellipse with equal radii.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Circle {
    ellipse: Ellipse,
}

impl Circle {
    /// Creates a new circle with the given radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            ellipse: Ellipse::new(radius, radius),
        }
    }

    /// Creates a new circle, rejecting a negative or non-finite radius.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) for an
    /// invalid radius.
    pub fn try_new(radius: f64) -> Result<Self> {
        Ok(Self::new(check_dimension("radius", radius)?))
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.ellipse.radius_x()
    }

    /// Returns the underlying ellipse.
    #[must_use]
    pub fn as_ellipse(&self) -> &Ellipse {
        &self.ellipse
    }
}

impl Shape for Circle {
    fn area(&self) -> f64 {
        self.ellipse.area()
    }

    fn volume(&self) -> Result<f64> {
        Err(ShapeError::no_volume(self.tag()).into())
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("circle")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Flat
    }
}

impl FlatShape for Circle {}

impl sealed::Sealed for Circle {}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MensuraError;
    use approx::assert_relative_eq;

    #[test]
    fn ellipse_area() {
        assert_relative_eq!(Ellipse::new(2.0, 3.0).area(), 6.0 * PI);
        assert_relative_eq!(Ellipse::new(0.5, 0.25).area(), PI * 0.125);
    }

    #[test]
    fn circle_area() {
        for r in [0.0, 1.0, 3.0, 7.5] {
            assert_relative_eq!(Circle::new(r).area(), PI * r * r);
        }
    }

    #[test]
    fn negative_radius_propagates() {
        assert_relative_eq!(Ellipse::new(-1.0, 2.0).area(), -2.0 * PI);
    }

    #[test]
    fn flat_variants_have_no_volume() {
        let shapes: [&dyn Shape; 4] = [
            &Ellipse::new(2.0, 3.0),
            &Ellipse::default(),
            &Circle::new(3.0),
            &Circle::new(0.0),
        ];
        for shape in shapes {
            let err = shape.volume().unwrap_err();
            assert!(
                matches!(
                    err,
                    MensuraError::Shape(ShapeError::UnsupportedOperation { operation: "volume", .. })
                ),
                "{shape:?}: {err}"
            );
        }
    }

    #[test]
    fn circle_wraps_equal_radii_ellipse() {
        let circle = Circle::new(1.5);
        assert_relative_eq!(circle.radius(), 1.5);
        assert_eq!(circle.as_ellipse(), &Ellipse::new(1.5, 1.5));
    }

    #[test]
    fn tags_differ() {
        assert_eq!(Ellipse::new(1.0, 2.0).tag(), "ellipse");
        assert_eq!(Circle::new(1.0).tag(), "circle");
        assert_ne!(Circle::new(1.0).tag(), Ellipse::new(1.0, 1.0).tag());
    }

    #[test]
    fn error_message_names_shape() {
        let err = Circle::new(1.0).volume().unwrap_err();
        assert_eq!(err.to_string(), "volume is not defined for a circle");
    }

    #[test]
    fn try_new_validates() {
        assert!(Ellipse::try_new(-1.0, 1.0).is_err());
        assert!(Circle::try_new(f64::INFINITY).is_err());
        assert_eq!(Circle::try_new(0.0).unwrap(), Circle::new(0.0));
    }
}
