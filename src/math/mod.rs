pub mod thomsen;

pub use thomsen::{AreaFormula, THOMSEN_P};

use crate::error::{DimensionError, Result};

/// Width and height of a flat shape, or its two radii.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Three extents of a solid shape, or its three radii.
pub type Vector3 = nalgebra::Vector3<f64>;

/// Global tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Checks that a dimension is finite and non-negative.
///
/// Used by the validating `try_new` constructors only; the plain `new`
/// constructors accept any value.
///
/// # Errors
///
/// Returns [`DimensionError::NonFinite`] for NaN or infinite values and
/// [`DimensionError::Negative`] for values below zero.
pub fn check_dimension(parameter: &'static str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(DimensionError::NonFinite { parameter, value }.into());
    }
    if value < 0.0 {
        return Err(DimensionError::Negative { parameter, value }.into());
    }
    Ok(value)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::MensuraError;

    #[test]
    fn accepts_zero_and_positive() {
        assert!(check_dimension("width", 0.0).is_ok());
        assert!(check_dimension("width", 2.5).is_ok());
    }

    #[test]
    fn rejects_negative() {
        let err = check_dimension("height", -1.0).unwrap_err();
        assert!(matches!(
            err,
            MensuraError::Dimension(DimensionError::Negative {
                parameter: "height",
                ..
            })
        ));
    }

    #[test]
    fn rejects_nan_and_infinity() {
        for value in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = check_dimension("radius", value).unwrap_err();
            assert!(matches!(
                err,
                MensuraError::Dimension(DimensionError::NonFinite { .. })
            ));
        }
    }
}
