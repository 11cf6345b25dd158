//! Unit conversion utilities
//!
//! Maps real-world feet to on-screen pixels at a fixed scale, snaps values to
//! a grid increment, and formats/parses feet-and-inches text.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::constants::PIXELS_PER_FOOT;
use crate::geometry::Point;

/// Fixed feet-to-pixel scale.
///
/// Both axes share the scale and the origin: pixel (0, 0) is the room's top
/// left corner, +x to the right, +y down the depth of the room.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct UnitScale {
    pixels_per_foot: f64,
}

impl UnitScale {
    /// Creates a scale. Non-positive or non-finite values fall back to the
    /// default scale.
    pub fn new(pixels_per_foot: f64) -> Self {
        if pixels_per_foot.is_finite() && pixels_per_foot > 0.0 {
            Self { pixels_per_foot }
        } else {
            tracing::warn!(pixels_per_foot, "ignoring invalid scale");
            Self::default()
        }
    }

    /// Pixels per foot.
    pub fn pixels_per_foot(&self) -> f64 {
        self.pixels_per_foot
    }

    /// Converts a length in feet to pixels.
    pub fn feet_to_pixels(&self, feet: f64) -> f64 {
        feet * self.pixels_per_foot
    }

    /// Converts a length in pixels to feet.
    pub fn pixels_to_feet(&self, pixels: f64) -> f64 {
        pixels / self.pixels_per_foot
    }

    /// Converts a pixel position to room coordinates in feet.
    pub fn pixel_to_feet(&self, pixel_x: f64, pixel_y: f64) -> Point {
        Point::new(self.pixels_to_feet(pixel_x), self.pixels_to_feet(pixel_y))
    }

    /// Converts room coordinates in feet to a pixel position.
    pub fn feet_to_pixel(&self, point: Point) -> (f64, f64) {
        (self.feet_to_pixels(point.x), self.feet_to_pixels(point.y))
    }
}

impl Default for UnitScale {
    fn default() -> Self {
        Self {
            pixels_per_foot: PIXELS_PER_FOOT,
        }
    }
}

impl fmt::Display for UnitScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} px/ft", self.pixels_per_foot)
    }
}

/// Rounds `value` to the nearest multiple of `increment`.
///
/// Non-positive increments disable snapping.
pub fn snap_to_increment(value: f64, increment: f64) -> f64 {
    if increment <= 0.0 || !increment.is_finite() {
        return value;
    }
    (value / increment).round() * increment
}

/// Formats a length in feet as feet and whole inches, e.g. `2' 6"`.
pub fn format_feet_inches(feet: f64) -> String {
    let total_inches = (feet.abs() * 12.0).round() as i64;
    let sign = if feet < 0.0 && total_inches != 0 { "-" } else { "" };
    let whole_feet = total_inches / 12;
    let inches = total_inches % 12;

    match (whole_feet, inches) {
        (0, 0) => "0'".to_string(),
        (f, 0) => format!("{}{}'", sign, f),
        (0, i) => format!("{}{}\"", sign, i),
        (f, i) => format!("{}{}' {}\"", sign, f, i),
    }
}

/// Parses a length into feet.
///
/// Accepts decimal feet (`2.5`), feet and inches (`2' 6"`, `2'6"`), feet only
/// (`2'`), inches only (`30"`), and fractional inches (`4 1/2"`).
pub fn parse_feet(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(0.0);
    }

    let (feet_part, rest) = match input.split_once('\'') {
        Some((feet, rest)) => (Some(feet.trim()), rest.trim()),
        None => (None, input),
    };

    let mut total = 0.0;
    if let Some(feet) = feet_part {
        total += parse_number(feet)?;
    }

    if let Some(inches) = rest.strip_suffix('"') {
        total += parse_number(inches.trim())? / 12.0;
    } else if !rest.is_empty() {
        if feet_part.is_some() {
            return Err(format!("Missing inch mark in: {}", input));
        }
        total += parse_number(rest)?;
    }

    if total < 0.0 {
        return Err("Length cannot be negative".to_string());
    }
    Ok(total)
}

/// Parses a decimal number or a mixed fraction such as `1 1/2`.
fn parse_number(input: &str) -> Result<f64, String> {
    if input.is_empty() {
        return Err("Missing number".to_string());
    }

    let mut total = 0.0;
    for part in input.split_whitespace() {
        if let Some((num, den)) = part.split_once('/') {
            let num = num.parse::<f64>().map_err(|_| "Invalid numerator")?;
            let den = den.parse::<f64>().map_err(|_| "Invalid denominator")?;
            if den == 0.0 {
                return Err("Division by zero".to_string());
            }
            total += num / den;
        } else {
            total += part
                .parse::<f64>()
                .map_err(|_| format!("Invalid number: {}", part))?;
        }
    }
    Ok(total)
}
