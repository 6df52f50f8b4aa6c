//! Pure BMI math: input parsing, the imperial formula and category bands.
//! Nothing in here touches the database or the terminal.

use crate::error::ValidationError;
use crate::models::{BmiReading, Category};

/// Conversion factor for the imperial formula (pounds and inches).
const IMPERIAL_FACTOR: f64 = 703.0;

/// Parse a free-text field into a strictly positive, finite number.
pub fn parse_positive(raw: &str) -> Option<f64> {
    let value = raw.trim().parse::<f64>().ok()?;
    if value.is_finite() && value > 0.0 {
        Some(value)
    } else {
        None
    }
}

/// Validate both inputs, weight first. Returns the parsed `(weight, height)`.
pub fn validate_inputs(weight: &str, height: &str) -> Result<(f64, f64), ValidationError> {
    let weight = parse_positive(weight).ok_or(ValidationError::InvalidWeight)?;
    let height = parse_positive(height).ok_or(ValidationError::InvalidHeight)?;
    Ok((weight, height))
}

/// `(weight / height²) × 703`, rounded to one decimal place.
pub fn compute_bmi(weight: f64, height: f64) -> f64 {
    round_tenths(weight / (height * height) * IMPERIAL_FACTOR)
}

fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Map a BMI value onto its band. The checks run from the top band down and
/// the first match wins, so each band only needs a lower bound.
pub fn category(bmi: f64) -> Category {
    if bmi > 30.0 {
        Category::Obese
    } else if bmi > 25.0 {
        Category::Overweight
    } else if bmi > 18.5 {
        Category::Healthy
    } else {
        Category::Underweight
    }
}

/// Validate raw inputs and build the reading shown in the result area. A
/// height so small that the formula overflows is rejected as an invalid height.
pub fn evaluate(weight: &str, height: &str) -> Result<BmiReading, ValidationError> {
    let (weight, height) = validate_inputs(weight, height)?;
    let bmi = compute_bmi(weight, height);
    if !bmi.is_finite() {
        return Err(ValidationError::InvalidHeight);
    }
    Ok(BmiReading {
        weight,
        height,
        bmi,
        category: category(bmi),
    })
}
