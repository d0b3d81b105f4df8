//! Provides [`Error`] etc.
use std::fmt::{Display, Formatter};

/// Alias for a `Result<T, gcjtrans::Error>`.
pub type Result<T> = std::result::Result<T, Error>;

/// Represents all possible errors that can occur by this crate.
///
/// The six conversion functions and [`distance`](crate::distance()) never fail,
/// this is returned only by the checked constructor, the parsers
/// and the iterative inverse transformation.
#[derive(Debug, PartialEq)]
pub struct Error {
    kind: ErrorKind,
}

/// The detailed cause of [`Error`].
#[derive(Debug, PartialEq)]
pub enum ErrorKind {
    /// Latitude or longitude is out-of-range.
    OutOfRangePosition {
        /// The axis of the invalid value
        axis: ErrorAxis,
        /// Lower bound (inclusive)
        low: f64,
        /// Upper bound (inclusive)
        high: f64,
    },
    /// Latitude or longitude is NaN.
    NanPosition {
        /// The axis of the invalid value
        axis: ErrorAxis,
    },
    /// Invalid point notation.
    ParsePoint {
        /// Invalid data
        s: String,
    },
    /// Unknown coordinate reference system name.
    ParseCrs {
        /// Invalid data
        s: String,
    },
    /// Error is still high even iteration exhausted.
    NotConvergent {
        /// Resulting latitude
        latitude: f64,
        /// Resulting longitude
        longitude: f64,
        /// Error criteria
        criteria: f64,
        /// Max iteration
        iteration: usize,
    },
}

/// An axis of [`Point`](crate::Point) used by [`ErrorKind`].
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum ErrorAxis {
    Latitude,
    Longitude,
}

impl Error {
    #[cold]
    pub(crate) const fn new_out_of_range(axis: ErrorAxis, low: f64, high: f64) -> Self {
        Self {
            kind: ErrorKind::OutOfRangePosition { axis, low, high },
        }
    }

    #[cold]
    pub(crate) const fn new_nan(axis: ErrorAxis) -> Self {
        Self {
            kind: ErrorKind::NanPosition { axis },
        }
    }

    #[cold]
    pub(crate) fn new_parse_point(s: &str) -> Self {
        Self {
            kind: ErrorKind::ParsePoint { s: s.to_string() },
        }
    }

    #[cold]
    pub(crate) fn new_parse_crs(s: &str) -> Self {
        Self {
            kind: ErrorKind::ParseCrs { s: s.to_string() },
        }
    }

    #[cold]
    pub(crate) const fn new_not_convergent(
        latitude: f64,
        longitude: f64,
        criteria: f64,
        iteration: usize,
    ) -> Self {
        Self {
            kind: ErrorKind::NotConvergent {
                latitude,
                longitude,
                criteria,
                iteration,
            },
        }
    }

    /// Returns the detailed cause.
    pub const fn kind(&self) -> &ErrorKind {
        &self.kind
    }
}

impl std::error::Error for Error {}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match &self.kind {
            ErrorKind::OutOfRangePosition { axis, low, high } => {
                write!(f, "invalid {axis}: must satisfy {low:?} <= and <= {high:?}")
            }
            ErrorKind::NanPosition { axis } => write!(f, "invalid {axis}: NaN"),
            ErrorKind::ParsePoint { s } => write!(f, "invalid point: '{s}'"),
            ErrorKind::ParseCrs { s } => {
                write!(f, "unknown coordinate reference system: '{s}'")
            }
            ErrorKind::NotConvergent {
                iteration,
                criteria,
                ..
            } => write!(
                f,
                "error is still higher than {criteria:?} even exhaust {iteration:?} iterations"
            ),
        }
    }
}

impl Display for ErrorAxis {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        match self {
            Self::Latitude => f.write_str("latitude"),
            Self::Longitude => f.write_str("longitude"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display() {
        assert_eq!(
            Error::new_out_of_range(ErrorAxis::Latitude, -90.0, 90.0).to_string(),
            "invalid latitude: must satisfy -90.0 <= and <= 90.0"
        );
        assert_eq!(
            Error::new_nan(ErrorAxis::Longitude).to_string(),
            "invalid longitude: NaN"
        );
        assert_eq!(
            Error::new_parse_crs("utm").to_string(),
            "unknown coordinate reference system: 'utm'"
        );
        assert_eq!(
            Error::new_parse_point("1;2").to_string(),
            "invalid point: '1;2'"
        );
        assert_eq!(
            Error::new_not_convergent(35.0, 135.0, 1e-9, 20).to_string(),
            "error is still higher than 1e-9 even exhaust 20 iterations"
        );
    }

    #[test]
    fn test_kind() {
        let e = Error::new_parse_crs("utm");
        assert_eq!(
            e.kind(),
            &ErrorKind::ParseCrs {
                s: "utm".to_string()
            }
        );
    }
}
