//! Pie and nested-ring (donut) charts.

use crate::error::ChartResult;
use crate::models::{PieChart, PieSeriesDef, SeriesKind};
use crate::style::{Rgba, default_color};
use crate::viz::types::{
    ChartFrame, ChartOptions, DataLabels, LabelFilter, LabelStyle, PointOptions, SeriesOptions,
    TitleOptions, TooltipOptions,
};

const PIE_HEIGHT: u32 = 640;

pub fn compile(chart: &PieChart) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;
    let series = chart
        .data
        .iter()
        .enumerate()
        .map(|(i, ring)| ring_series(ring, i))
        .collect();

    Ok(ChartOptions {
        title: TitleOptions::left(def.title_or("Chart")),
        chart: Some(ChartFrame {
            kind: Some(SeriesKind::Pie),
            height: PIE_HEIGHT,
        }),
        tooltip: Some(TooltipOptions {
            value_suffix: Some("%".into()),
            ..TooltipOptions::default()
        }),
        series,
        ..ChartOptions::base()
    })
}

fn ring_series(ring: &PieSeriesDef, index: usize) -> SeriesOptions {
    let count = ring.points.len();
    let data = ring
        .points
        .iter()
        .enumerate()
        .map(|(pi, point)| PointOptions::Named {
            name: point.name.clone(),
            y: point.y.to_number_or_zero(),
            color: Some(slice_color(index, pi, count)),
        })
        .collect();

    let inner_size = ring.inner_size.clone().filter(|s| !s.is_empty());
    let data_labels = if inner_size.is_some() {
        DataLabels {
            format: Some(
                "<b>{point.name}</b>: <span style=\"opacity: 0.5\">{y}%</span>".into(),
            ),
            filter: Some(LabelFilter {
                property: "y".into(),
                operator: ">".into(),
                value: 1.0,
            }),
            style: Some(LabelStyle {
                font_weight: Some("normal".into()),
                ..LabelStyle::default()
            }),
            ..DataLabels::default()
        }
    } else {
        DataLabels {
            color: Some("#ffffff".into()),
            distance: Some("-50%".into()),
            ..DataLabels::default()
        }
    };

    SeriesOptions {
        name: ring.name.clone(),
        kind: Some(SeriesKind::Pie),
        id: Some(format!("series-{index}")),
        data: Some(data),
        size: ring.size.clone(),
        inner_size,
        data_labels: Some(data_labels),
        ..SeriesOptions::default()
    }
}

/// Slice color: the default palette for the first ring; later rings fade from
/// 20% brighter at the first slice towards the base color.
fn slice_color(ring: usize, slice: usize, count: usize) -> String {
    let base = default_color(slice);
    if ring == 0 {
        return base.to_string();
    }
    let brightness = 0.2 - (slice as f64 / count as f64) / 5.0;
    Rgba::from_hex(base)
        .map(|c| c.brighten(brightness).to_css())
        .unwrap_or_else(|| base.to_string())
}
