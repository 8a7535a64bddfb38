use std::{
    cmp,
    iter::Sum,
    ops::{Add, AddAssign},
};

use serde::{Deserialize, Serialize};

pub const EARTH_RADIUS: Distance = Distance::from_meters(6_371_000.0);
const DEGREES_TO_RADIANS: f64 = std::f64::consts::PI / 180.0;

#[derive(Debug, Clone, Copy, Default)]
pub struct Distance(f64);

impl PartialEq for Distance {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl PartialOrd for Distance {
    fn partial_cmp(&self, other: &Self) -> Option<cmp::Ordering> {
        self.0.partial_cmp(&other.0)
    }
}

impl Add for Distance {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Distance {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl Sum for Distance {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), |acc, distance| acc + distance)
    }
}

impl Distance {
    pub const fn from_meters(distance: f64) -> Self {
        Self(distance)
    }

    pub const fn from_kilometers(distance: f64) -> Self {
        Self(distance * 1000.0)
    }

    pub const fn as_meters(&self) -> f64 {
        self.0
    }

    pub const fn as_kilometers(&self) -> f64 {
        self.0 / 1000.0
    }

    pub fn is_zero(&self) -> bool {
        self.0 == 0.0
    }

    /// Ratio between two distances, `None` when the divisor is zero.
    pub fn ratio(&self, divisor: &Self) -> Option<f64> {
        if divisor.is_zero() {
            None
        } else {
            Some(self.0 / divisor.0)
        }
    }
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl From<(f64, f64)> for Coordinate {
    fn from((latitude, longitude): (f64, f64)) -> Self {
        Self {
            latitude,
            longitude,
        }
    }
}

impl Coordinate {
    /// Great circle distance using the spherical law of cosines.
    /// Identical points are exactly zero apart.
    pub fn great_circle_distance(&self, coord: &Self) -> Distance {
        if self == coord {
            return Distance::default();
        }
        let lat_a = self.latitude * DEGREES_TO_RADIANS;
        let lat_b = coord.latitude * DEGREES_TO_RADIANS;
        let delta_lon = (self.longitude - coord.longitude).abs() * DEGREES_TO_RADIANS;
        let cosine = f64::sin(lat_a) * f64::sin(lat_b)
            + f64::cos(lat_a) * f64::cos(lat_b) * f64::cos(delta_lon);
        // Rounding can push nearly identical points just outside the acos domain
        Distance::from_meters(f64::acos(cosine.clamp(-1.0, 1.0)) * EARTH_RADIUS.as_meters())
    }
}

#[test]
fn identical_points_test() {
    let coord = Coordinate::from((55.611087, 37.20829));
    assert_eq!(coord.great_circle_distance(&coord), Distance::default());
}

#[test]
fn distance_eq_test() {
    let dist_a = Distance::from_meters(1000.0);
    let dist_b = Distance::from_kilometers(1.0);
    assert_eq!(dist_a, dist_b)
}

#[test]
fn distance_ratio_test() {
    let route = Distance::from_meters(1500.0);
    assert_eq!(route.ratio(&Distance::from_meters(1000.0)), Some(1.5));
    assert_eq!(route.ratio(&Distance::default()), None);
}
