//! Provides [`Crs`] and [`transform()`].
use std::fmt::{Display, Formatter};
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::transform::{
    bd09_to_gcj02, bd09_to_gps84, gcj02_to_bd09, gcj02_to_gps84, gps84_to_bd09, gps84_to_gcj02,
};
use crate::{Error, Point, Result};

/// The coordinate reference system of [`Point`].
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// assert_eq!("gcj-02".parse::<Crs>(), Ok(Crs::GCJ02));
/// assert_eq!(Crs::GCJ02.to_string(), "GCJ02");
/// ```
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Crs {
    /// WGS-84, the GPS datum.
    WGS84,
    /// GCJ-02, the "Mars" coordinate system.
    GCJ02,
    /// BD-09, the Baidu coordinate system.
    BD09,
}

impl Display for Crs {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::WGS84 => "WGS84",
            Self::GCJ02 => "GCJ02",
            Self::BD09 => "BD09",
        };
        f.write_str(s)
    }
}

impl FromStr for Crs {
    type Err = Error;

    /// Makes a [`Crs`] from its name, case insensitive.
    ///
    /// This accepts `wgs84`, `wgs-84`, `gps84` and `gps` for [`Crs::WGS84`],
    /// `gcj02`, `gcj-02` and `mars` for [`Crs::GCJ02`],
    /// and `bd09`, `bd-09` and `baidu` for [`Crs::BD09`].
    ///
    /// # Errors
    ///
    /// When `s` is none of them.
    ///
    /// # Example
    ///
    /// ```
    /// # use gcjtrans::*;
    /// assert_eq!("WGS-84".parse::<Crs>(), Ok(Crs::WGS84));
    /// assert_eq!("baidu".parse::<Crs>(), Ok(Crs::BD09));
    /// assert!("utm".parse::<Crs>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "wgs84" | "wgs-84" | "gps84" | "gps" => Ok(Self::WGS84),
            "gcj02" | "gcj-02" | "mars" => Ok(Self::GCJ02),
            "bd09" | "bd-09" | "baidu" => Ok(Self::BD09),
            _ => Err(Error::new_parse_crs(s)),
        }
    }
}

/// Returns `p` converted from `from` into `to`.
///
/// This returns `p` as is if `from` equals to `to`,
/// otherwise dispatches to the corresponding conversion function.
///
/// # Example
///
/// ```
/// # use gcjtrans::*;
/// let origin = Point::new(39.908722, 116.397499);
///
/// assert_eq!(transform(origin, Crs::WGS84, Crs::GCJ02), gps84_to_gcj02(origin));
/// assert_eq!(transform(origin, Crs::BD09, Crs::BD09), origin);
/// ```
pub fn transform(p: Point, from: Crs, to: Crs) -> Point {
    match (from, to) {
        (Crs::WGS84, Crs::GCJ02) => gps84_to_gcj02(p),
        (Crs::WGS84, Crs::BD09) => gps84_to_bd09(p),
        (Crs::GCJ02, Crs::WGS84) => gcj02_to_gps84(p),
        (Crs::GCJ02, Crs::BD09) => gcj02_to_bd09(p),
        (Crs::BD09, Crs::WGS84) => bd09_to_gps84(p),
        (Crs::BD09, Crs::GCJ02) => bd09_to_gcj02(p),
        (Crs::WGS84, Crs::WGS84) | (Crs::GCJ02, Crs::GCJ02) | (Crs::BD09, Crs::BD09) => p,
    }
}
