use csv::StringRecord;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{ChartError, ChartResult};

/// One state row of the health-risk dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub abbreviation: String,
    pub poverty_percent: f64,
    pub healthcare_lack_percent: f64,
}

impl DataPoint {
    #[must_use]
    pub fn new(
        abbreviation: impl Into<String>,
        poverty_percent: f64,
        healthcare_lack_percent: f64,
    ) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            poverty_percent,
            healthcare_lack_percent,
        }
    }

    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.poverty_percent.is_finite() && self.healthcare_lack_percent.is_finite()
    }
}

/// Column positions of the fields the chart reads; other columns are ignored.
#[derive(Debug, Clone, Copy)]
struct ColumnIndex {
    abbr: usize,
    poverty: usize,
    healthcare: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> ChartResult<Self> {
        let find = |column: &str| {
            headers
                .iter()
                .position(|header| header == column)
                .ok_or_else(|| {
                    ChartError::InvalidData(format!(
                        "dataset is missing required column `{column}`"
                    ))
                })
        };

        Ok(Self {
            abbr: find("abbr")?,
            poverty: find("poverty")?,
            healthcare: find("healthcare")?,
        })
    }
}

/// Converts numeric text the way a loosely typed host runtime does.
///
/// Surrounding whitespace is ignored and empty text becomes `0`. Decimal and
/// exponent notation, signed `Infinity` and `0x`/`0o`/`0b` integer literals
/// are accepted; anything else yields NaN.
#[must_use]
pub fn coerce_numeric(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    if let Some(value) = parse_radix_literal(trimmed) {
        return value;
    }

    let decimal_chars = trimmed
        .bytes()
        .all(|b| b.is_ascii_digit() || matches!(b, b'.' | b'e' | b'E' | b'+' | b'-'));
    if !decimal_chars {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

fn parse_radix_literal(text: &str) -> Option<f64> {
    let (radix, digits) = match text.get(..2)? {
        "0x" | "0X" => (16, &text[2..]),
        "0o" | "0O" => (8, &text[2..]),
        "0b" | "0B" => (2, &text[2..]),
        _ => return None,
    };
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Some(f64::NAN);
    }
    // u128 covers every literal short enough to be meaningful; longer ones
    // saturate rather than wrap.
    let value = u128::from_str_radix(digits, radix).map_or(f64::INFINITY, |v| v as f64);
    Some(value)
}

/// Parses the csv body into data points, coercing the numeric columns.
///
/// Rows whose numeric fields do not coerce to finite values are kept and
/// reported through `tracing`; callers decide what to draw.
pub fn parse_dataset(body: &str) -> ChartResult<Vec<DataPoint>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(body.as_bytes());

    let columns = ColumnIndex::from_headers(reader.headers()?)?;

    let mut points = Vec::new();
    let mut non_finite_rows = 0usize;
    for (row_index, record) in reader.records().enumerate() {
        let record = record?;
        let poverty = record.get(columns.poverty);
        let healthcare = record.get(columns.healthcare);
        // A short row leaves the field undefined, which coerces to NaN.
        let point = DataPoint::new(
            record.get(columns.abbr).unwrap_or_default(),
            poverty.map_or(f64::NAN, coerce_numeric),
            healthcare.map_or(f64::NAN, coerce_numeric),
        );

        if !point.is_finite() {
            non_finite_rows += 1;
            for (field, value, raw) in [
                ("poverty", point.poverty_percent, poverty),
                ("healthcare", point.healthcare_lack_percent, healthcare),
            ] {
                if !value.is_finite() {
                    warn!(
                        row_index,
                        abbreviation = %point.abbreviation,
                        field,
                        raw = raw.unwrap_or("<missing>"),
                        "dataset field did not coerce to a finite number"
                    );
                }
            }
        }
        points.push(point);
    }

    if non_finite_rows > 0 {
        warn!(
            rows = points.len(),
            non_finite_rows, "dataset contains rows with non-finite numeric fields"
        );
    }
    debug!(rows = points.len(), "parsed dataset");
    Ok(points)
}
