use std::f64::consts::PI;

use crate::error::Result;
use crate::geometry::{Dimension, Shape, Tag};
use crate::math::{check_dimension, thomsen, AreaFormula, Vector3};

/// An ellipsoid given by its three semi-axes.
///
/// `V = 4/3 * π * rx * ry * rz`. The surface area has no closed form and
/// is approximated with [`thomsen::surface_area`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ellipsoid {
    radii: Vector3,
    formula: AreaFormula,
}

impl Ellipsoid {
    /// Creates a new ellipsoid using the default area formula. Radii are
    /// not checked.
    #[must_use]
    pub fn new(radius_x: f64, radius_y: f64, radius_z: f64) -> Self {
        Self {
            radii: Vector3::new(radius_x, radius_y, radius_z),
            formula: AreaFormula::default(),
        }
    }

    /// Creates a new ellipsoid, rejecting negative or non-finite radii.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) naming the
    /// offending radius.
    pub fn try_new(radius_x: f64, radius_y: f64, radius_z: f64) -> Result<Self> {
        Ok(Self::new(
            check_dimension("radius_x", radius_x)?,
            check_dimension("radius_y", radius_y)?,
            check_dimension("radius_z", radius_z)?,
        ))
    }

    /// Selects the surface area expression.
    #[must_use]
    pub fn with_area_formula(mut self, formula: AreaFormula) -> Self {
        self.formula = formula;
        self
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

    /// Returns the semi-axis along z.
    #[must_use]
    pub fn radius_z(&self) -> f64 {
        self.radii.z
    }

    /// Returns the selected area formula.
    #[must_use]
    pub fn area_formula(&self) -> AreaFormula {
        self.formula
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

impl Shape for Ellipsoid {
    fn area(&self) -> f64 {
        thomsen::surface_area(&self.radii, self.formula)
    }

    fn volume(&self) -> Result<f64> {
        Ok(4.0 / 3.0 * PI * self.radii.product())
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("ellipsoid")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Solid
    }
}

/// An ellipsoid with three equal radii.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Sphere {
    ellipsoid: Ellipsoid,
}

impl Sphere {
    /// Creates a new sphere with the given radius.
    #[must_use]
    pub fn new(radius: f64) -> Self {
        Self {
            ellipsoid: Ellipsoid::new(radius, radius, radius),
        }
    }

    /// Creates a new sphere, rejecting a negative or non-finite radius.
    ///
    /// # Errors
    ///
    /// Returns a [`DimensionError`](crate::error::DimensionError) for an
    /// invalid radius.
    pub fn try_new(radius: f64) -> Result<Self> {
        Ok(Self::new(check_dimension("radius", radius)?))
    }

    /// Selects the surface area expression of the underlying ellipsoid.
    #[must_use]
    pub fn with_area_formula(self, formula: AreaFormula) -> Self {
        Self {
            ellipsoid: self.ellipsoid.with_area_formula(formula),
        }
    }

    /// Returns the radius.
    #[must_use]
    pub fn radius(&self) -> f64 {
        self.ellipsoid.radius_x()
    }

    /// Returns the underlying ellipsoid.
    #[must_use]
    pub fn as_ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }
}

impl Shape for Sphere {
    fn area(&self) -> f64 {
        self.ellipsoid.area()
    }

    fn volume(&self) -> Result<f64> {
        self.ellipsoid.volume()
    }

    fn tag(&self) -> Tag {
        Tag::Borrowed("sphere")
    }

    fn dimension(&self) -> Dimension {
        Dimension::Solid
    }
}
