//! Tooltip formatters.
//!
//! The renderer cannot run our formatting code, so a compiled chart carries a
//! serializable descriptor naming the formatter and its inputs. `render_*`
//! evaluates the descriptor in-process, which is what the host calls back into
//! (and what the tests exercise).

use crate::format::Formatter;
use crate::models::{Scalar, SemanticType};
use serde::Serialize;

/// One series' value at the hovered x position.
#[derive(Debug, Clone, PartialEq)]
pub struct TooltipPoint {
    pub series: String,
    pub color: String,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TooltipFormatter {
    /// All series sharing one datetime x under a single date header.
    #[serde(rename_all = "camelCase")]
    SharedDatetime { value_type: SemanticType },
    /// Heatmap cell: `y label / x label` header plus the cell value.
    #[serde(rename_all = "camelCase")]
    HeatmapCell {
        x_labels: Vec<String>,
        y_labels: Vec<String>,
        value_type: SemanticType,
    },
}

impl TooltipFormatter {
    /// Render a shared tooltip for x = `x_millis`. `None` for non-shared formatters.
    pub fn render_shared(
        &self,
        fmt: &Formatter,
        x_millis: f64,
        points: &[TooltipPoint],
    ) -> Option<String> {
        let TooltipFormatter::SharedDatetime { value_type } = self else {
            return None;
        };
        let header = fmt.format(Some(&Scalar::Number(x_millis)), Some(SemanticType::DateTime));
        let rows = points
            .iter()
            .map(|p| {
                let value = fmt.format(Some(&Scalar::Number(p.y)), Some(*value_type));
                format!(
                    "<span style=\"color:{}\">\u{25CF}</span> {}: <b>{}</b>",
                    p.color, p.series, value
                )
            })
            .collect::<Vec<_>>()
            .join("<br/>");
        Some(format!("<b>{header}</b><br/>{rows}"))
    }

    /// Render a heatmap cell tooltip. `None` for non-cell formatters.
    pub fn render_cell(&self, fmt: &Formatter, x: usize, y: usize, value: f64) -> Option<String> {
        let TooltipFormatter::HeatmapCell {
            x_labels,
            y_labels,
            value_type,
        } = self
        else {
            return None;
        };
        let label = |labels: &[String], i: usize| labels.get(i).cloned().unwrap_or_default();
        Some(format!(
            "<b>{} / {}</b><br>Value: {}",
            label(y_labels, y),
            label(x_labels, x),
            fmt.format(Some(&Scalar::Number(value)), Some(*value_type))
        ))
    }
}
