use crate::error::{Result, ShapeError};
use crate::geometry::{sealed, Dimension, FlatShape, Shape, Tag};
use crate::math::{check_dimension, Vector2};

/// An axis-aligned rectangle given by its width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    size: Vector2,
}

impl Rectangle {
    /// Creates a new rectangle.
    ///
    /// Dimensions are not checked; zero or negative values flow into the
    /// area as-is. Use [`Rectangle::try_new`] to reject them.
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            size: Vector2::new(width, height),
        }
    }

    /// Creates a new rectangle, rejecting negative or non-finite sides.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) naming the
    /// offending side.
    pub fn try_new(width: f64, height: f64) -> Result<Self> {
        Ok(Self::new(
            check_dimension("width", width)?,
            check_dimension("height", height)?,
        ))
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.size.x
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.size.y
    }
}

impl Default for Rectangle {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl Shape for Rectangle {
    fn area(&self) -> f64 {
        self.size.product()
    }

    fn volume(&self) -> Result<f64> {
        Err(ShapeError::no_volume(self.tag()).into())
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("rectangle")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Flat
    }
}

impl FlatShape for Rectangle {}

impl sealed::Sealed for Rectangle {}

/// A rectangle with equal sides.
///
/// Holds a [`Rectangle`] built from a single side, so the sides cannot
/// drift apart after construction.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Square {
    rect: Rectangle,
}

impl Square {
    /// Creates a new square with the given side.
    #[must_use]
    pub fn new(side: f64) -> Self {
        Self {
            rect: Rectangle::new(side, side),
        }
    }

    /// Creates a new square, rejecting a negative or non-finite side.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) for an
    /// invalid side.
    pub fn try_new(side: f64) -> Result<Self> {
        Ok(Self::new(check_dimension("side", side)?))
    }

    /// Returns the side length.
    #[must_use]
    pub fn side(&self) -> f64 {
        self.rect.width()
    }

    /// Returns the underlying rectangle.
    #[must_use]
    pub fn as_rectangle(&self) -> &Rectangle {
        &self.rect
    }
}

impl Shape for Square {
    fn area(&self) -> f64 {
        self.rect.area()
    }

    fn volume(&self) -> Result<f64> {
        Err(ShapeError::no_volume(self.tag()).into())
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("square")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Flat
    }
}

impl FlatShape for Square {}

impl sealed::Sealed for Square {}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::MensuraError;

    fn assert_no_volume(shape: &dyn Shape, expected_tag: &str) {
        match shape.volume() {
            Err(MensuraError::Shape(ShapeError::UnsupportedOperation { operation, shape })) => {
                assert_eq!(operation, "volume");
                assert_eq!(shape, expected_tag);
            }
            other => panic!("expected unsupported volume, got {other:?}"),
        }
    }

    #[test]
    fn rectangle_area() {
        assert_eq!(Rectangle::new(4.0, 5.0).area(), 20.0);
        assert_eq!(Rectangle::new(0.5, 3.0).area(), 1.5);
    }

    #[test]
    fn rectangle_accepts_degenerate_sides() {
        assert_eq!(Rectangle::new(0.0, 7.0).area(), 0.0);
        assert_eq!(Rectangle::new(-2.0, 3.0).area(), -6.0);
        assert_eq!(Rectangle::default().area(), 0.0);
    }

    #[test]
    fn rectangle_has_no_volume() {
        assert_no_volume(&Rectangle::new(4.0, 5.0), "rectangle");
        assert_no_volume(&Rectangle::new(0.0, 0.0), "rectangle");
    }

    #[test]
    fn square_area() {
        for s in [0.0, 1.0, 4.0, 2.5] {
            assert_eq!(Square::new(s).area(), s * s);
        }
    }

    #[test]
    fn square_has_no_volume() {
        assert_no_volume(&Square::new(4.0), "square");
        assert_no_volume(&Square::default(), "square");
    }

    #[test]
    fn square_wraps_equal_sided_rectangle() {
        let square = Square::new(3.0);
        assert_eq!(square.side(), 3.0);
        assert_eq!(square.as_rectangle(), &Rectangle::new(3.0, 3.0));
    }

    #[test]
    fn tags_differ() {
        assert_ne!(Square::new(1.0).tag(), Rectangle::new(1.0, 1.0).tag());
        assert_eq!(Square::new(1.0).dimension(), Dimension::Flat);
    }

    #[test]
    fn try_new_validates() {
        assert!(Rectangle::try_new(1.0, 2.0).is_ok());
        assert!(Rectangle::try_new(1.0, -2.0).is_err());
        assert!(Square::try_new(f64::NAN).is_err());
        assert_eq!(Square::try_new(2.0).unwrap(), Square::new(2.0));
    }
}
