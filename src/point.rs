//! Provides [`Point`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::ErrorAxis;
use crate::{Crs, Error, Result};

/// Returns the longitude wrapped into -180.0 <= and <= 180.0.
#[inline]
fn normalize_longitude(t: f64) -> f64 {
    if (-180.0..=180.0).contains(&t) {
        t
    } else {
        (t + 180.0).rem_euclid(360.0) - 180.0
    }
}

/// Returns the latitude folded into -90.0 <= and <= 90.0, over the pole.
#[inline]
fn normalize_latitude(t: f64) -> f64 {
    match normalize_longitude(t) {
        s if s > 90.0 => 180.0 - s,
        s if s < -90.0 => -180.0 - s,
        s => s,
    }
}

/// Represents a position on the Earth, a pair of latitude and longitude \[deg\].
///
/// The value itself does not carry its coordinate reference system,
/// the caller chooses it by the conversion function.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let point = Point::new(39.908722, 116.397499);
/// assert_eq!(point.latitude(), &39.908722);
/// assert_eq!(point.longitude(), &116.397499);
///
/// // Notation
/// assert_eq!(point.to_string(), "39.908722,116.397499");
/// assert_eq!("39.908722, 116.397499".parse::<Point>(), Ok(point));
/// ```
#[derive(Debug, PartialEq, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// The latitude \[deg\] of the point
    pub(crate) latitude: f64,
    /// The longitude \[deg\] of the point
    pub(crate) longitude: f64,
}

impl From<(f64, f64)> for Point {
    /// see [`Point::new()`]
    fn from(rhs: (f64, f64)) -> Self {
        Self::new(rhs.0, rhs.1)
    }
}

impl From<Point> for (f64, f64) {
    fn from(rhs: Point) -> Self {
        (rhs.latitude, rhs.longitude)
    }
}

impl Display for Point {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

impl FromStr for Point {
    type Err = Error;

    /// Makes a [`Point`] from `"<latitude>,<longitude>"`.
    ///
    /// This does not check the value range.
    ///
    /// # Errors
    ///
    /// When `s` is not a pair of comma separated numbers.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert_eq!("35.0,135.0".parse::<Point>(), Ok(Point::new(35.0, 135.0)));
    /// assert_eq!(" 35 , 135 ".parse::<Point>(), Ok(Point::new(35.0, 135.0)));
    /// assert!("35.0".parse::<Point>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        let (latitude, longitude) = s
            .split_once(',')
            .ok_or_else(|| Error::new_parse_point(s))?;

        let latitude = latitude
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::new_parse_point(s))?;
        let longitude = longitude
            .trim()
            .parse::<f64>()
            .map_err(|_| Error::new_parse_point(s))?;

        Ok(Self::new(latitude, longitude))
    }
}

impl Point {
    /// Makes a [`Point`].
    ///
    /// This does not check the value range.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(35.0, 145.0);
    /// assert_eq!(point.latitude(), &35.0);
    /// assert_eq!(point.longitude(), &145.0);
    /// ```
    #[inline]
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Makes a [`Point`] with checking.
    ///
    /// # Errors
    ///
    /// If `latitude` and/or `longitude` is NaN or out-of-range,
    /// `latitude` must satisfy -90.0 <= and <= 90.0
    /// and `longitude` does -180.0 <= and <= 180.0.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// # fn main() -> Result<()> {
    /// let point = Point::try_new(35.0, 145.0)?;
    /// assert_eq!(point, Point::new(35.0, 145.0));
    ///
    /// // If out-of-range, returns Err
    /// assert!(Point::try_new(91.0, 145.0).is_err());
    /// assert!(Point::try_new(35.0, 181.0).is_err());
    /// assert!(Point::try_new(f64::NAN, 145.0).is_err());
    /// # Ok(())}
    /// ```
    pub fn try_new(latitude: f64, longitude: f64) -> Result<Self> {
        if latitude.is_nan() {
            return Err(Error::new_nan(ErrorAxis::Latitude));
        };
        if latitude.lt(&-90.) || 90.0.lt(&latitude) {
            return Err(Error::new_out_of_range(ErrorAxis::Latitude, -90.0, 90.0));
        };
        if longitude.is_nan() {
            return Err(Error::new_nan(ErrorAxis::Longitude));
        };
        if longitude.lt(&-180.) || 180.0.lt(&longitude) {
            return Err(Error::new_out_of_range(
                ErrorAxis::Longitude,
                -180.0,
                180.0,
            ));
        };

        Ok(Self::new(latitude, longitude))
    }

    /// Returns the latitude of `self`.
    #[inline]
    pub const fn latitude(&self) -> &f64 {
        &self.latitude
    }

    /// Returns the longitude of `self`.
    #[inline]
    pub const fn longitude(&self) -> &f64 {
        &self.longitude
    }

    /// Makes a normalized [`Point`] from `self`.
    ///
    /// The result has normalized [`latitude`](Point::latitude)
    /// and [`longitude`](Point::longitude) which value -90.0 <= and <= 90.0,
    /// and -180.0 <= and <= 180.0 respectively.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let point = Point::new(100.0, 200.0);
    ///
    /// assert_eq!(point.normalize(), Point::new(80.0, -160.0));
    /// ```
    pub fn normalize(&self) -> Self {
        Self {
            latitude: normalize_latitude(self.latitude),
            longitude: normalize_longitude(self.longitude),
        }
    }

    /// Returns the great-circle distance \[km\] to `other`, see [`distance()`](crate::distance()).
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let a = Point::new(39.922501, 116.387271);
    /// let b = Point::new(39.923423, 116.368904);
    ///
    /// assert_eq!(a.distance(&b), 1.5714);
    /// ```
    #[inline]
    pub fn distance(&self, other: &Point) -> f64 {
        crate::distance(*self, *other)
    }

    /// Returns `true` if `self` is outside the region GCJ-02 applies,
    /// see [`is_out_of_china()`](crate::is_out_of_china()).
    #[inline]
    pub fn is_out_of_china(&self) -> bool {
        crate::is_out_of_china(*self)
    }

    /// Returns `self` converted from `from` into `to`, see [`transform()`](crate::transform()).
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// let origin = Point::new(39.908722, 116.397499);
    ///
    /// assert_eq!(
    ///     origin.transform(Crs::WGS84, Crs::BD09),
    ///     gps84_to_bd09(origin)
    /// );
    /// ```
    #[inline]
    pub fn transform(&self, from: Crs, to: Crs) -> Self {
        crate::transform(*self, from, to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_normalize() {
        for (e, v) in [
            (35.0, 35.0),
            (80.0, 100.0),
            (-10.0, 190.0),
            (-80.0, -100.0),
            (10.0, -190.0),
            (-90.0, 270.0),
            (90.0, -270.0),
            (0.0, 360.0),
            (20.0, 380.0),
        ] {
            assert_eq!(Point::new(v, 0.0).normalize(), Point::new(e, 0.0));
        }

        for (e, v) in [
            (145.0, 145.0),
            (180.0, 180.0),
            (-180.0, -180.0),
            (-170.0, 190.0),
            (170.0, -190.0),
            (-160.0, 200.0),
            (0.0, 360.0),
            (20.0, -340.0),
        ] {
            assert_eq!(Point::new(0.0, v).normalize(), Point::new(0.0, e));
        }

        // Beijing, one turn off
        let actual = Point::new(39.908722, 116.397499 - 360.0).normalize();
        assert!((actual.latitude() - 39.908722).abs() < 1e-9);
        assert!((actual.longitude() - 116.397499).abs() < 1e-9);
        assert!(!actual.is_out_of_china());

        let actual = Point::new(f64::NAN, f64::NAN).normalize();
        assert!(actual.latitude().is_nan());
        assert!(actual.longitude().is_nan());
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Point::try_new(90.0, -180.0), Ok(Point::new(90.0, -180.0)));

        assert_eq!(
            Point::try_new(-90.1, 0.0).unwrap_err().kind(),
            &ErrorKind::OutOfRangePosition {
                axis: ErrorAxis::Latitude,
                low: -90.0,
                high: 90.0
            }
        );
        assert_eq!(
            Point::try_new(0.0, 180.1).unwrap_err().kind(),
            &ErrorKind::OutOfRangePosition {
                axis: ErrorAxis::Longitude,
                low: -180.0,
                high: 180.0
            }
        );
        assert_eq!(
            Point::try_new(0.0, f64::NAN).unwrap_err().kind(),
            &ErrorKind::NanPosition {
                axis: ErrorAxis::Longitude
            }
        );
    }

    #[test]
    fn test_from_str() {
        assert_eq!("1,2".parse::<Point>(), Ok(Point::new(1.0, 2.0)));
        assert_eq!("-1.5,\t+2.25".parse::<Point>(), Ok(Point::new(-1.5, 2.25)));

        for s in ["", ",", "1", "1,", ",2", "a,2", "1,b", "1,2,3"] {
            assert_eq!(
                s.parse::<Point>().unwrap_err().kind(),
                &ErrorKind::ParsePoint { s: s.to_string() }
            );
        }
    }

    #[test]
    fn test_display() {
        for p in [
            Point::new(39.908722, 116.397499),
            Point::new(-0.5, 180.0),
            Point::new(0.1, 0.2),
        ] {
            assert_eq!(p.to_string().parse::<Point>(), Ok(p));
        }
    }

    #[test]
    fn test_tuple() {
        let p = Point::from((35.0, 135.0));
        assert_eq!(p, Point::new(35.0, 135.0));
        assert_eq!(<(f64, f64)>::from(p), (35.0, 135.0));
    }

    #[test]
    #[cfg(feature = "serde")]
    fn test_serde() {
        use serde_test::{assert_tokens, Token};

        assert_tokens(
            &Point::new(35.0, 135.0),
            &[
                Token::Struct {
                    name: "Point",
                    len: 2,
                },
                Token::Str("latitude"),
                Token::F64(35.0),
                Token::Str("longitude"),
                Token::F64(135.0),
                Token::StructEnd,
            ],
        );
    }
}
