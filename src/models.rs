//! Domain models that mirror the SQLite schema and get passed between the
//! session and the TUI. These stay light-weight data holders so the other
//! layers can focus on presentation and persistence.

use std::fmt;

use chrono::NaiveDate;

#[derive(Debug, Clone, PartialEq)]
/// One row of the `bmis` table. Rows are append-only, so nothing in the crate
/// ever hands a `Measurement` back to the store for mutation.
pub struct Measurement {
    /// Store-assigned primary key. Newer rows always carry a larger id, which is
    /// what the history ordering relies on.
    pub id: i64,
    /// BMI rounded to one decimal place at compute time.
    pub bmi: f64,
    /// Weight in pounds, as entered.
    pub weight: f64,
    /// Height in inches, as entered.
    pub height: f64,
    /// Date the row was inserted, stamped by SQLite rather than the client.
    pub recorded_on: NaiveDate,
}

impl Measurement {
    /// Single history line in the `date: bmi (W:weight, H:height)` layout.
    pub fn history_line(&self) -> String {
        format!(
            "{}: {:.1} (W:{}, H:{})",
            self.recorded_on.format("%Y-%m-%d"),
            self.bmi,
            self.weight,
            self.height
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Qualitative band derived from a BMI value.
pub enum Category {
    Underweight,
    Healthy,
    Overweight,
    Obese,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Category::Underweight => "Underweight",
            Category::Healthy => "Healthy",
            Category::Overweight => "Overweight",
            Category::Obese => "Obese",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Result of a successful compute action, ready for the result area.
pub struct BmiReading {
    pub weight: f64,
    pub height: f64,
    pub bmi: f64,
    pub category: Category,
}

impl BmiReading {
    /// First result line, e.g. `Body Mass Index is 25.0`.
    pub fn summary(&self) -> String {
        format!("Body Mass Index is {:.1}", self.bmi)
    }

    /// Second result line, the category wrapped in parentheses.
    pub fn description(&self) -> String {
        format!("({})", self.category)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn history_line_matches_list_layout() {
        let measurement = Measurement {
            id: 7,
            bmi: 22.5,
            weight: 140.0,
            height: 68.5,
            recorded_on: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
        };
        assert_eq!(measurement.history_line(), "2024-03-09: 22.5 (W:140, H:68.5)");
    }

    #[test]
    fn reading_lines_keep_one_decimal() {
        let reading = BmiReading {
            weight: 150.0,
            height: 65.0,
            bmi: 25.0,
            category: Category::Healthy,
        };
        assert_eq!(reading.summary(), "Body Mass Index is 25.0");
        assert_eq!(reading.description(), "(Healthy)");
    }
}
