//! GridScore - fixed-point score in hundredths of a point

use std::cmp::Ordering;
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Sub};

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Number of score units in one point.
pub const UNITS_PER_POINT: i64 = 100;

/// A score measured in hundredths of a point.
///
/// Breakpoint weights such as `0.5` and `1.5` are fractional, so scores are
/// kept as integers to make comparisons during pruning exact. On the wire
/// the score is a plain decimal number.
///
/// # Examples
///
/// ```
/// use arkgrid_core::GridScore;
///
/// let relic = GridScore::of(11) + GridScore::from_f64(0.5);
/// assert_eq!(relic, GridScore::from_f64(11.5));
/// assert_eq!(relic.to_string(), "11.5");
/// assert!(relic > GridScore::of(11));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GridScore {
    units: i64,
}

impl GridScore {
    /// The zero score.
    pub const ZERO: GridScore = GridScore { units: 0 };

    /// Creates a score of whole points.
    #[inline]
    pub const fn of(points: i64) -> Self {
        GridScore {
            units: points * UNITS_PER_POINT,
        }
    }

    /// Creates a score from raw hundredths.
    #[inline]
    pub const fn of_units(units: i64) -> Self {
        GridScore { units }
    }

    /// Converts a decimal weight, rounding to the nearest hundredth.
    pub fn from_f64(value: f64) -> Self {
        GridScore {
            units: (value * UNITS_PER_POINT as f64).round() as i64,
        }
    }

    /// Returns the raw hundredths.
    #[inline]
    pub const fn units(&self) -> i64 {
        self.units
    }

    /// Returns the score as a decimal number.
    pub fn as_f64(&self) -> f64 {
        self.units as f64 / UNITS_PER_POINT as f64
    }
}

impl Ord for GridScore {
    fn cmp(&self, other: &Self) -> Ordering {
        self.units.cmp(&other.units)
    }
}

impl PartialOrd for GridScore {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Add for GridScore {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        GridScore::of_units(self.units + other.units)
    }
}

impl AddAssign for GridScore {
    fn add_assign(&mut self, other: Self) {
        self.units += other.units;
    }
}

impl Sub for GridScore {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        GridScore::of_units(self.units - other.units)
    }
}

impl Sum for GridScore {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(GridScore::ZERO, Add::add)
    }
}

impl<'a> Sum<&'a GridScore> for GridScore {
    fn sum<I: Iterator<Item = &'a GridScore>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

impl fmt::Debug for GridScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GridScore({})", self)
    }
}

impl fmt::Display for GridScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.units < 0 { "-" } else { "" };
        let abs = self.units.unsigned_abs();
        let whole = abs / UNITS_PER_POINT as u64;
        let frac = abs % UNITS_PER_POINT as u64;
        if frac == 0 {
            write!(f, "{}{}", sign, whole)
        } else if frac % 10 == 0 {
            write!(f, "{}{}.{}", sign, whole, frac / 10)
        } else {
            write!(f, "{}{}.{:02}", sign, whole, frac)
        }
    }
}

impl Serialize for GridScore {
    fn serialize<Se: Serializer>(&self, serializer: Se) -> Result<Se::Ok, Se::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

impl<'de> Deserialize<'de> for GridScore {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        f64::deserialize(deserializer).map(GridScore::from_f64)
    }
}
