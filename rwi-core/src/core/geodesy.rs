//
// Copyright (c) Pirmin Kalberer. All rights reserved.
// Licensed under the MIT License. See LICENSE file in the project root for full license information.
//

//! Metric lengths to decimal degrees
//!
//! Plain degree-length approximations derived from the equatorial and the
//! polar circumference. Only meaningful for spans up to a few kilometers.
//! Latitudes at the poles are out of domain (the longitude span diverges).

use std::f64::consts;

/// Length of one degree of longitude at the equator in meters (40075.017 km / 360)
pub const EQUATOR_DEGREE_LENGTH: f64 = 111319.491667;
/// Length of one degree of latitude in meters (40007.863 km / 360)
pub const MERIDIAN_DEGREE_LENGTH: f64 = 111132.952778;

/// Longitude span in degrees of `meters` at `latitude`
pub fn meters_to_longitude(meters: f64, latitude: f64) -> f64 {
    meters / (EQUATOR_DEGREE_LENGTH * (latitude * (consts::PI / 180.0)).cos())
}

/// Latitude span in degrees of `meters`
pub fn meters_to_latitude(meters: f64) -> f64 {
    meters / MERIDIAN_DEGREE_LENGTH
}
