//! Scalar trait bounds for planar coordinates.
//!
//! All geometric code in this crate is generic over the coordinate scalar
//! through the [`CoordinateScalar`] trait, an alias-style bound satisfied by
//! `f32` and `f64`. Predicates are evaluated with ordinary floating-point
//! arithmetic; callers that need to reject non-finite inputs up front can use
//! [`Point::validate`](crate::geometry::point::Point::validate).

use num_traits::Float;
use serde::{Serialize, de::DeserializeOwned};
use std::fmt::Debug;
use thiserror::Error;

/// Errors that can occur during coordinate validation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CoordinateValidationError {
    /// A coordinate value is invalid (NaN or infinite).
    #[error("Invalid coordinate at index {coordinate_index}: {coordinate_value}")]
    InvalidCoordinate {
        /// Index of the invalid coordinate (0 for x, 1 for y).
        coordinate_index: usize,
        /// Value of the invalid coordinate, as a string.
        coordinate_value: String,
    },
}

/// Trait alias for scalars usable as planar coordinates.
///
/// Combines the floating-point arithmetic required by the geometric
/// predicates with the serialization and formatting bounds the container
/// types rely on. Implemented automatically for any qualifying type,
/// including `f32` and `f64`.
pub trait CoordinateScalar:
    Float + Default + Debug + Serialize + DeserializeOwned + 'static
{
}

impl<T> CoordinateScalar for T where
    T: Float + Default + Debug + Serialize + DeserializeOwned + 'static
{
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_coordinate_scalar<T: CoordinateScalar>() {}

    #[test]
    fn standard_floats_are_coordinate_scalars() {
        assert_coordinate_scalar::<f32>();
        assert_coordinate_scalar::<f64>();
    }

    #[test]
    fn validation_error_display() {
        let err = CoordinateValidationError::InvalidCoordinate {
            coordinate_index: 1,
            coordinate_value: "NaN".to_string(),
        };
        assert_eq!(err.to_string(), "Invalid coordinate at index 1: NaN");
    }
}
