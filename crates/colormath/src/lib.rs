//! Color math primitives for camera color calibration
//!
//! Chromaticity and tristimulus conversion, correlated color temperature,
//! linearized Bradford chromatic adaptation, and the small 3x3 linear algebra
//! these need.

#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod adapt;
pub mod colortemp;
pub mod matrix;
pub mod rgb;
pub mod xy;
