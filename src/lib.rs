//! # gcjtrans
//!
//! Coordinate conversion among WGS-84 (GPS), GCJ-02 and BD-09,
//! the coordinate reference systems of web maps in mainland China,
//! and the great-circle distance.
//!
//! ```
//! use gcjtrans::{Point, distance, gps84_to_gcj02, gcj02_to_gps84, gps84_to_bd09};
//!
//! // Makes the origin of transformation (WGS-84)
//! let origin = Point::new(39.908722, 116.397499);
//!
//! // Converts into GCJ-02, e.g. for AMap (Gaode) and Tencent Maps
//! let gcj = gps84_to_gcj02(origin);
//! // Prints GCJ-02: Point { latitude: 39.91012550007891, longitude: 116.4037425752605 }
//! println!("GCJ-02: {gcj:?}");
//!
//! // Converts into BD-09, e.g. for Baidu Maps
//! let bd = gps84_to_bd09(origin);
//! // Prints BD-09: Point { latitude: 39.91646474746305, longitude: 116.41011556899208 }
//! println!("BD-09: {bd:?}");
//!
//! // Converts back, this is an approximation
//! let wgs = gcj02_to_gps84(gcj);
//! // Prints WGS-84: Point { latitude: 39.908721412085974, longitude: 116.3974986583168 }
//! println!("WGS-84: {wgs:?}");
//!
//! // Great-circle distance [km]
//! assert_eq!(distance(origin, wgs), 0.0001);
//! ```
//!
//! Features:
//!
//! - Conversions [`gps84_to_gcj02`], [`gcj02_to_gps84`], [`gcj02_to_bd09`],
//!   [`bd09_to_gcj02`], [`gps84_to_bd09`] and [`bd09_to_gps84`]
//! - Iterative inverse [`gcj02_to_gps84_exact`] and [`bd09_to_gps84_exact`]
//! - Conversion by name, [`Crs`] and [`transform()`]
//! - Haversine distance, [`distance()`]
//! - No dependency
//!   - It depends on [`serde`][serde] crate only if `serde` feature on
//!
//! [serde]: https://crates.io/crates/serde
//!
//! GCJ-02 applies only within a rectangle around mainland China, see [`is_out_of_china`];
//! the conversions between WGS-84 and GCJ-02 return the point as is outside it.
//!
//! All functions are pure, they hold no state
//! and are safe to call from any thread concurrently.
//!
//! # Serialization and Deserialization
//!
//! It supports (de)serialization by [`serde` crate](https://crates.io/crates/serde)
//! for [`Point`] and [`Crs`] only if the feature `serde` is enabled.
//!
//! ```
//! # #[cfg(feature = "serde")]
//! # fn main() -> serde_json::Result<()> {
//! use gcjtrans::{Crs, Point};
//!
//! let point = Point::new(35.0, 135.0);
//!
//! // Serialize to json
//! let json = serde_json::to_string(&point)?;
//! assert_eq!(json, r#"{"latitude":35.0,"longitude":135.0}"#);
//! assert_eq!(serde_json::to_string(&Crs::GCJ02)?, r#""GCJ02""#);
//!
//! // Deserialize from json
//! let result: Point = serde_json::from_str(&json)?;
//! assert_eq!(result, point);
//! # Ok(())}
//! # #[cfg(not(feature = "serde"))]
//! # fn main() {}
//! ```

#[doc(inline)]
pub use crs::{transform, Crs};
#[doc(inline)]
pub use distance::distance;
#[doc(inline)]
pub use error::{Error, Result};
#[doc(inline)]
pub use point::Point;
#[doc(inline)]
pub use transform::{
    bd09_to_gcj02, bd09_to_gps84, bd09_to_gps84_exact, gcj02_to_bd09, gcj02_to_gps84,
    gcj02_to_gps84_exact, gps84_to_bd09, gps84_to_gcj02, is_out_of_china,
};

pub mod crs;
pub mod distance;
pub mod error;
pub mod point;
pub mod transform;
