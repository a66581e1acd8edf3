use crate::error::Result;
use crate::geometry::{Dimension, Shape, Tag};
use crate::math::{check_dimension, Vector3};

/// A rectangular box given by its length, width and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cuboid {
    extents: Vector3,
}

impl Cuboid {
    /// Creates a new cuboid. Extents are not checked.
    #[must_use]
    pub fn new(length: f64, width: f64, height: f64) -> Self {
        Self {
            extents: Vector3::new(length, width, height),
        }
    }

    /// Creates a new cuboid, rejecting negative or non-finite extents.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) naming the
    /// offending extent.
    pub fn try_new(length: f64, width: f64, height: f64) -> Result<Self> {
        Ok(Self::new(
            check_dimension("length", length)?,
            check_dimension("width", width)?,
            check_dimension("height", height)?,
        ))
    }

    /// Returns the length.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.extents.x
    }

    /// Returns the width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.extents.y
    }

    /// Returns the height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.extents.z
    }
}

impl Default for Cuboid {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Shape for Cuboid {
    fn area(&self) -> f64 {
        let (l, w, h) = (self.extents.x, self.extents.y, self.extents.z);
        2.0 * (l * w + l * h + w * h)
    }

    fn volume(&self) -> Result<f64> {
        Ok(self.extents.product())
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("cuboid")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Solid
    }
}

/// A cuboid with three equal edges.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Cube {
    cuboid: Cuboid,
}

impl Cube {
    /// Creates a new cube with the given edge.
    #[must_use]
    pub fn new(edge: f64) -> Self {
        Self {
            cuboid: Cuboid::new(edge, edge, edge),
        }
    }

    /// Creates a new cube, rejecting a negative or non-finite edge.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) for an
    /// invalid edge.
    pub fn try_new(edge: f64) -> Result<Self> {
        Ok(Self::new(check_dimension("edge", edge)?))
    }

    /// Returns the edge length.
    #[must_use]
    pub fn edge(&self) -> f64 {
        self.cuboid.length()
    }

    /// Returns the underlying cuboid.
    #[must_use]
    pub fn as_cuboid(&self) -> &Cuboid {
        &self.cuboid
    }
}

impl Shape for Cube {
    fn area(&self) -> f64 {
        self.cuboid.area()
    }

    fn volume(&self) -> Result<f64> {
        self.cuboid.volume()
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("cube")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Solid
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn cuboid_area_and_volume() {
        let cuboid = Cuboid::new(4.0, 5.0, 6.0);
        // 2*(20 + 24 + 30) = 148
        assert_eq!(cuboid.area(), 148.0);
        assert_eq!(cuboid.volume().unwrap(), 120.0);
    }

    #[test]
    fn cuboid_matches_closed_forms() {
        for (l, w, h) in [(1.0, 2.0, 3.0), (0.5, 0.5, 8.0), (2.0, 3.0, 4.0)] {
            let cuboid = Cuboid::new(l, w, h);
            assert!((cuboid.area() - 2.0 * (l * w + l * h + w * h)).abs() < TOLERANCE);
            assert!((cuboid.volume().unwrap() - l * w * h).abs() < TOLERANCE);
        }
    }

    #[test]
    fn cube_volume_and_area() {
        for s in [0.0, 1.0, 4.0, 1.5] {
            let cube = Cube::new(s);
            assert_eq!(cube.volume().unwrap(), s * s * s);
            assert_eq!(cube.area(), 6.0 * s * s);
        }
    }

    #[test]
    fn degenerate_extents_are_not_rejected() {
        let flat_box = Cuboid::new(3.0, 4.0, 0.0);
        assert_eq!(flat_box.volume().unwrap(), 0.0);
        assert_eq!(flat_box.area(), 24.0);
        assert_eq!(Cuboid::new(-1.0, 2.0, 3.0).volume().unwrap(), -6.0);
        assert_eq!(Cuboid::default().volume().unwrap(), 0.0);
    }

    #[test]
    fn cube_wraps_equal_edged_cuboid() {
        let cube = Cube::new(2.0);
        assert_eq!(cube.edge(), 2.0);
        assert_eq!(cube.as_cuboid(), &Cuboid::new(2.0, 2.0, 2.0));
    }

    #[test]
    fn tags_differ() {
        assert_eq!(Cuboid::new(1.0, 1.0, 1.0).tag(), "cuboid");
        assert_eq!(Cube::new(1.0).tag(), "cube");
        assert_eq!(Cube::new(1.0).dimension(), Dimension::Solid);
    }

    #[test]
    fn try_new_validates() {
        assert!(Cuboid::try_new(1.0, 2.0, -3.0).is_err());
        assert!(Cube::try_new(f64::NAN).is_err());
        assert_eq!(Cube::try_new(3.0).unwrap(), Cube::new(3.0));
    }
}
