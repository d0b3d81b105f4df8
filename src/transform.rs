//! Provides the conversions among WGS-84, GCJ-02 and BD-09.
//!
//! GCJ-02 offsets WGS-84 by an empirical correction
//! which applies only within a bounding box of mainland China,
//! see [`is_out_of_china()`].
//! BD-09 warps GCJ-02 further in polar coordinates.
//!
//! All functions do not check the value range, NaN and infinity propagate.
use std::f64::consts::PI;

use crate::{Error, Point, Result};

/// The semi-major axis \[m\] of the Krasovsky 1940 ellipsoid used by GCJ-02.
pub const A: f64 = 6378245.0;

/// The eccentricity squared of the Krasovsky 1940 ellipsoid used by GCJ-02.
#[allow(clippy::excessive_precision)]
pub const EE: f64 = 0.00669342162296594323;

/// The angular scale of the BD-09 warp.
pub const X_PI: f64 = PI * 3000.0 / 180.0;

/// Max error \[deg\] of [`gcj02_to_gps84_exact()`].
pub const MAX_ERROR: f64 = 1e-9;

/// Max iteration of [`gcj02_to_gps84_exact()`].
pub const MAX_ITERATION: usize = 20;

// The operation order of the correction terms must be kept,
// reordering changes the last bits of the result.
#[inline]
fn transform_lat(x: f64, y: f64) -> f64 {
    let mut ret = -100.0 + 2.0 * x + 3.0 * y + 0.2 * y * y + 0.1 * x * y + 0.2 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (y * PI).sin() + 40.0 * (y / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (160.0 * (y / 12.0 * PI).sin() + 320.0 * (y * PI / 30.0).sin()) * 2.0 / 3.0;
    ret
}

#[inline]
fn transform_lon(x: f64, y: f64) -> f64 {
    let mut ret = 300.0 + x + 2.0 * y + 0.1 * x * x + 0.1 * x * y + 0.1 * x.abs().sqrt();
    ret += (20.0 * (6.0 * x * PI).sin() + 20.0 * (2.0 * x * PI).sin()) * 2.0 / 3.0;
    ret += (20.0 * (x * PI).sin() + 40.0 * (x / 3.0 * PI).sin()) * 2.0 / 3.0;
    ret += (150.0 * (x / 12.0 * PI).sin() + 300.0 * (x / 30.0 * PI).sin()) * 2.0 / 3.0;
    ret
}

/// Returns `true` if `p` is outside the region GCJ-02 applies.
///
/// The region is the rectangle 72.004 <= longitude <= 137.8347
/// and 0.8293 <= latitude <= 55.8271.
/// It is a coarse approximation of mainland China, not its border,
/// for example, Seoul and Hanoi are inside.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// // Beijing
/// assert!(!is_out_of_china(Point::new(39.908722, 116.397499)));
/// // Tokyo
/// assert!(is_out_of_china(Point::new(35.681236, 139.767125)));
/// ```
#[inline]
pub fn is_out_of_china(p: Point) -> bool {
    p.longitude < 72.004 || p.longitude > 137.8347 || p.latitude < 0.8293 || p.latitude > 55.8271
}

/// Returns the GCJ-02 position of the WGS-84 position `p`.
///
/// This returns `p` as is if [`is_out_of_china()`] holds.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(39.908722, 116.397499);
/// let result = gps84_to_gcj02(origin);
///
/// assert!((result.latitude() - 39.91012550007891).abs() < 1e-12);
/// assert!((result.longitude() - 116.4037425752605).abs() < 1e-12);
///
/// // Out of China
/// let origin = Point::new(35.681236, 139.767125);
/// assert_eq!(gps84_to_gcj02(origin), origin);
/// ```
pub fn gps84_to_gcj02(p: Point) -> Point {
    if is_out_of_china(p) {
        return p;
    }

    let d_lat = transform_lat(p.longitude - 105.0, p.latitude - 35.0);
    let d_lon = transform_lon(p.longitude - 105.0, p.latitude - 35.0);

    let rad_lat = p.latitude / 180.0 * PI;
    let magic = rad_lat.sin();
    let magic = 1.0 - EE * magic * magic;
    let sqrt_magic = magic.sqrt();

    let d_lat = (d_lat * 180.0) / ((A * (1.0 - EE)) / (magic * sqrt_magic) * PI);
    let d_lon = (d_lon * 180.0) / (A / sqrt_magic * rad_lat.cos() * PI);

    Point::new(p.latitude + d_lat, p.longitude + d_lon)
}

/// Returns the WGS-84 position of the GCJ-02 position `p`.
///
/// This is a one-shot approximation, it estimates the offset at `p`
/// instead of the unknown origin.
/// The error is within about 1e-4 \[deg\] (several meters),
/// use [`gcj02_to_gps84_exact()`] for the iterative solution.
///
/// This returns `p` as is if [`is_out_of_china()`] holds.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(39.908722, 116.397499);
/// let result = gcj02_to_gps84(gps84_to_gcj02(origin));
///
/// assert!((result.latitude() - origin.latitude()).abs() < 1e-4);
/// assert!((result.longitude() - origin.longitude()).abs() < 1e-4);
/// ```
pub fn gcj02_to_gps84(p: Point) -> Point {
    let gcj = gps84_to_gcj02(p);
    Point::new(
        p.latitude * 2.0 - gcj.latitude,
        p.longitude * 2.0 - gcj.longitude,
    )
}

/// Returns the WGS-84 position of the GCJ-02 position `p` by iteration.
///
/// The first step equals to [`gcj02_to_gps84()`],
/// it stops when the error of both latitude and longitude,
/// as measured by [`gps84_to_gcj02()`], is less than [`MAX_ERROR`].
///
/// # Errors
///
/// If the error does not fall below [`MAX_ERROR`] in [`MAX_ITERATION`] steps,
/// e.g. `p` contains NaN, or `p` lies close to the edge of
/// [`is_out_of_china()`]'s rectangle where a step may leave it.
///
/// This returns `p` as is if [`is_out_of_china()`] holds, including infinity.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// # fn main() -> Result<()> {
/// let origin = Point::new(39.908722, 116.397499);
/// let result = gcj02_to_gps84_exact(gps84_to_gcj02(origin))?;
///
/// assert!((result.latitude() - origin.latitude()).abs() < 1e-8);
/// assert!((result.longitude() - origin.longitude()).abs() < 1e-8);
/// # Ok(())}
/// ```
pub fn gcj02_to_gps84_exact(p: Point) -> Result<Point> {
    if is_out_of_china(p) {
        return Ok(p);
    }

    let mut current = p;

    for _ in 0..MAX_ITERATION {
        let gcj = gps84_to_gcj02(current);

        let delta_lat = gcj.latitude - p.latitude;
        let delta_lon = gcj.longitude - p.longitude;

        if delta_lat.abs().lt(&MAX_ERROR) && delta_lon.abs().lt(&MAX_ERROR) {
            return Ok(current);
        }

        current = Point::new(current.latitude - delta_lat, current.longitude - delta_lon);
    }

    Err(Error::new_not_convergent(
        current.latitude,
        current.longitude,
        MAX_ERROR,
        MAX_ITERATION,
    ))
}

/// Returns the BD-09 position of the GCJ-02 position `p`.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(39.91012550007891, 116.4037425752605);
/// let result = gcj02_to_bd09(origin);
///
/// assert!((result.latitude() - 39.91646474746305).abs() < 1e-12);
/// assert!((result.longitude() - 116.41011556899208).abs() < 1e-12);
/// ```
pub fn gcj02_to_bd09(p: Point) -> Point {
    let x = p.longitude;
    let y = p.latitude;

    let z = (x * x + y * y).sqrt() + 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) + 0.000003 * (x * X_PI).cos();

    Point::new(z * theta.sin() + 0.006, z * theta.cos() + 0.0065)
}

/// Returns the GCJ-02 position of the BD-09 position `p`.
///
/// This is not the exact inverse of [`gcj02_to_bd09()`],
/// the correction terms are evaluated at the BD-09 position.
/// The error is less than 3e-6 \[deg\] within [`is_out_of_china()`]'s rectangle,
/// it is about 1e-6 \[deg\] at mid-latitudes and grows toward high latitudes.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(39.91012550007891, 116.4037425752605);
/// let result = bd09_to_gcj02(gcj02_to_bd09(origin));
///
/// assert!((result.latitude() - origin.latitude()).abs() < 1e-6);
/// assert!((result.longitude() - origin.longitude()).abs() < 1e-6);
/// ```
pub fn bd09_to_gcj02(p: Point) -> Point {
    let x = p.longitude - 0.0065;
    let y = p.latitude - 0.006;

    let z = (x * x + y * y).sqrt() - 0.00002 * (y * X_PI).sin();
    let theta = y.atan2(x) - 0.000003 * (x * X_PI).cos();

    Point::new(z * theta.sin(), z * theta.cos())
}

/// Returns the BD-09 position of the WGS-84 position `p`.
///
/// This is equivalent to `gcj02_to_bd09(gps84_to_gcj02(p))`.
#[inline]
pub fn gps84_to_bd09(p: Point) -> Point {
    gcj02_to_bd09(gps84_to_gcj02(p))
}

/// Returns the WGS-84 position of the BD-09 position `p`.
///
/// This is equivalent to `gcj02_to_gps84(bd09_to_gcj02(p))`.
#[inline]
pub fn bd09_to_gps84(p: Point) -> Point {
    gcj02_to_gps84(bd09_to_gcj02(p))
}

/// Returns the WGS-84 position of the BD-09 position `p` by iteration.
///
/// This is equivalent to `gcj02_to_gps84_exact(bd09_to_gcj02(p))`,
/// the error of [`bd09_to_gcj02()`] remains.
///
/// # Errors
///
/// See [`gcj02_to_gps84_exact()`].
#[inline]
pub fn bd09_to_gps84_exact(p: Point) -> Result<Point> {
    gcj02_to_gps84_exact(bd09_to_gcj02(p))
}
