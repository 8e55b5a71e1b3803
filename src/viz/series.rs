//! Series construction: point encoding by axis type plus default styling.

use crate::format::parse_date_millis;
use crate::models::{AxisType, Line, Point, Scalar, SeriesKind};
use crate::style::default_color;
use crate::viz::types::{PointOptions, SeriesOptions};

/// Epoch-millis for a datetime x value. Numbers pass through; strings are
/// parsed as dates. Anything unparsable becomes `0` and is logged.
pub fn datetime_millis(value: &Scalar) -> f64 {
    match value {
        Scalar::Number(ms) => *ms,
        Scalar::Text(s) => match parse_date_millis(s) {
            Some(ms) => ms as f64,
            None => {
                log::warn!("failed to parse date {s:?}; using 0");
                0.0
            }
        },
        Scalar::Bool(b) => {
            log::warn!("boolean {b} is not a date; using 0");
            0.0
        }
        Scalar::Null => 0.0,
    }
}

/// Encode one point for an axis of type `axis`.
///
/// - datetime: `[millis, y]`
/// - category: `{name, y}` with the x value as the name
/// - anything else: `[x, y]` with x read as a number
///
/// Unparsable numbers become `0`.
pub fn encode_point(point: &Point, axis: AxisType) -> PointOptions {
    let y = point.y.to_number_or_zero();
    match axis {
        AxisType::Datetime => PointOptions::Pair(datetime_millis(&point.x), y),
        AxisType::Category => PointOptions::Named {
            name: point.x.to_string(),
            y,
            color: None,
        },
        AxisType::Linear | AxisType::Logarithmic | AxisType::Unknown => {
            PointOptions::Pair(point.x.to_number_or_zero(), y)
        }
    }
}

/// Build a renderer series from a named line.
///
/// Color falls back to the default palette at `index`; dash style and line
/// width pass through only when set. On horizontal charts a `column` series
/// becomes a `bar` series.
pub fn build_series(line: &Line, axis: AxisType, index: usize, horizontal: bool) -> SeriesOptions {
    let name = if line.name.is_empty() {
        format!("Series {}", index + 1)
    } else {
        line.name.clone()
    };

    let mut kind = line.kind.unwrap_or(SeriesKind::Line);
    if horizontal && kind == SeriesKind::Column {
        kind = SeriesKind::Bar;
    }

    SeriesOptions {
        name,
        kind: Some(kind),
        color: Some(
            line.color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| default_color(index).to_string()),
        ),
        data: Some(line.data.iter().map(|p| encode_point(p, axis)).collect()),
        dash_style: line.dash_style.clone().filter(|d| !d.is_empty()),
        line_width: line.line_width.filter(|w| *w != 0.0),
        ..SeriesOptions::default()
    }
}
