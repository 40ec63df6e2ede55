//! Validation errors shared by shapes, the scene, and random generators.

use std::fmt;

/// The single error kind for rejected arguments.
///
/// Variants name the trigger; callers that only care about "was the input
/// valid" can treat every variant the same.
#[derive(Clone, Debug, PartialEq)]
pub enum InvalidArgument {
    /// Depth below zero (construction or `set_depth`).
    NegativeDepth { depth: i32 },
    /// Two points used to build a composite shape sit at different depths.
    DepthMismatch { p: u32, q: u32 },
    /// A defining point has a NaN or infinite coordinate.
    NonFiniteCoordinate,
    /// Both defining points have the same coordinates.
    CoincidentPoints,
    /// Segment endpoints differ on both axes.
    NotAxisAligned,
    /// Rectangle corners share an x or y coordinate (zero width or height).
    DegenerateRectangle,
    /// Scale factor `<= 0`.
    NonPositiveScale { factor: f64 },
    /// Circle radius `<= 0`.
    NonPositiveRadius { radius: f64 },
    /// Draw-depth filter below the `-1` "all depths" sentinel.
    InvalidDrawDepth { depth: i32 },
    /// Generator parameters out of range.
    InvalidParams { reason: String },
}

impl InvalidArgument {
    pub(crate) fn params(reason: impl Into<String>) -> Self {
        Self::InvalidParams {
            reason: reason.into(),
        }
    }
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NegativeDepth { depth } => write!(f, "depth cannot be negative (got {depth})"),
            Self::DepthMismatch { p, q } => {
                write!(f, "points must share a depth (got {p} and {q})")
            }
            Self::NonFiniteCoordinate => write!(f, "coordinates must be finite"),
            Self::CoincidentPoints => write!(f, "points must not coincide"),
            Self::NotAxisAligned => write!(f, "line segment is not axis aligned"),
            Self::DegenerateRectangle => write!(
                f,
                "rectangle corners must differ on both axes (zero width or height)"
            ),
            Self::NonPositiveScale { factor } => {
                write!(f, "scale factor must be > 0 (got {factor})")
            }
            Self::NonPositiveRadius { radius } => {
                write!(f, "radius must be > 0 (got {radius})")
            }
            Self::InvalidDrawDepth { depth } => {
                write!(f, "draw depth must be >= 0 or -1 for all (got {depth})")
            }
            Self::InvalidParams { reason } => write!(f, "invalid generator params: {reason}"),
        }
    }
}

impl std::error::Error for InvalidArgument {}

/// Result alias used throughout the crate.
pub type ShapeResult<T> = Result<T, InvalidArgument>;

/// Validate a caller-supplied depth.
#[inline]
pub(crate) fn check_depth(depth: i32) -> ShapeResult<u32> {
    u32::try_from(depth).map_err(|_| InvalidArgument::NegativeDepth { depth })
}

/// Validate a scale factor. NaN is rejected as well.
#[inline]
pub(crate) fn check_scale(factor: f64) -> ShapeResult<()> {
    if factor > 0.0 {
        Ok(())
    } else {
        Err(InvalidArgument::NonPositiveScale { factor })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn depth_check_accepts_zero_and_rejects_negative() {
        assert_eq!(check_depth(0), Ok(0));
        assert_eq!(check_depth(7), Ok(7));
        assert_eq!(
            check_depth(-1),
            Err(InvalidArgument::NegativeDepth { depth: -1 })
        );
    }

    #[test]
    fn scale_check_rejects_zero_negative_nan() {
        assert!(check_scale(0.5).is_ok());
        assert!(check_scale(0.0).is_err());
        assert!(check_scale(-2.0).is_err());
        assert!(check_scale(f64::NAN).is_err());
    }

    #[test]
    fn display_mentions_offending_value() {
        let msg = InvalidArgument::NonPositiveRadius { radius: -3.0 }.to_string();
        assert!(msg.contains("-3"));
    }
}
