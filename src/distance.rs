//! Provides the great-circle distance.
use crate::Point;

/// The radius of the Earth \[km\] used by [`distance()`].
pub const EARTH_RADIUS: f64 = 6378.137;

/// Returns `d` \[deg\] in radian.
#[inline]
pub fn degrees_to_radians(d: f64) -> f64 {
    d * std::f64::consts::PI / 180.0
}

/// Returns `r` \[rad\] in degree.
#[inline]
pub fn radians_to_degrees(r: f64) -> f64 {
    r * 180.0 / std::f64::consts::PI
}

/// Returns the great-circle distance \[km\] between `p1` and `p2` by the haversine formula.
///
/// The result is rounded to 4 decimal places by [`f64::round`],
/// which rounds half-way cases away from zero.
///
/// This does not check the value range of the points.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let a = Point::new(39.922501, 116.387271);
/// let b = Point::new(39.923423, 116.368904);
///
/// assert_eq!(distance(a, b), 1.5714);
/// assert_eq!(distance(a, a), 0.0);
/// ```
pub fn distance(p1: Point, p2: Point) -> f64 {
    let lat1 = degrees_to_radians(p1.latitude);
    let lon1 = degrees_to_radians(p1.longitude);

    let lat2 = degrees_to_radians(p2.latitude);
    let lon2 = degrees_to_radians(p2.longitude);

    let d_lat = lat1 - lat2;
    let d_lon = lon1 - lon2;

    let a = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let d = 2.0 * a.sqrt().asin() * EARTH_RADIUS;

    // adding +0.0 clears the sign of -0.0
    (d * 10000.0).round() / 10000.0 + 0.0
}
