//! Multi-series line chart.

use crate::error::ChartResult;
use crate::models::{AxisDef, AxisType, LineChart, SemanticType, SeriesKind};
use crate::viz::axis::{
    AxisOverrides, configure_axis, process_all_axis_straight_lines, process_plot_bands,
};
use crate::viz::series::build_series;
use crate::viz::tooltip::TooltipFormatter;
use crate::viz::types::{AxisLabels, ChartFrame, ChartOptions, TitleOptions, TooltipOptions};

pub(crate) const CARTESIAN_HEIGHT: u32 = 300;
const OVERLAY_COLOR: &str = "#ff7f0e";

pub fn compile(chart: &LineChart) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;
    let x_def = def.x_axis.as_ref();
    let y_def = def.y_axis.as_ref();
    let x_type = AxisDef::kind_or_linear(x_def);
    let y_type = AxisDef::kind_or_linear(y_def);

    let (x_lines, y_lines) = process_all_axis_straight_lines(&chart.straight_lines);

    let mut series: Vec<_> = chart
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| build_series(line, x_type, i, false))
        .collect();

    if let Some(overlay) = &chart.overlay {
        let mut s = build_series(overlay, x_type, series.len(), false);
        s.color = Some(
            overlay
                .color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| OVERLAY_COLOR.to_string()),
        );
        s.z_index = Some(5);
        series.push(s);
    }

    let x_axis = configure_axis(
        x_def,
        AxisOverrides {
            kind: Some(x_type),
            plot_bands: Some(process_plot_bands(&chart.x_plot_bands)),
            plot_lines: Some(x_lines),
            labels: Some(AxisLabels::small().upright()),
            ..AxisOverrides::default()
        },
    );
    let y_axis = configure_axis(
        y_def,
        AxisOverrides {
            kind: Some(y_type),
            plot_bands: Some(process_plot_bands(&chart.y_plot_bands)),
            plot_lines: Some(y_lines),
            labels: Some(AxisLabels::small()),
            ..AxisOverrides::default()
        },
    );

    Ok(ChartOptions {
        title: TitleOptions::left(def.title.clone()),
        chart: Some(ChartFrame {
            kind: Some(SeriesKind::Line),
            height: CARTESIAN_HEIGHT,
        }),
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        tooltip: Some(datetime_tooltip(x_type)),
        series,
        ..ChartOptions::base()
    })
}

/// Tooltip for line-like charts: values grouped under one date header on a
/// datetime x-axis, the renderer's default tooltip otherwise.
pub(crate) fn datetime_tooltip(x_type: AxisType) -> TooltipOptions {
    let datetime = x_type == AxisType::Datetime;
    TooltipOptions {
        value_decimals: Some(2),
        shared: datetime.then_some(true),
        formatter: datetime.then_some(TooltipFormatter::SharedDatetime {
            value_type: SemanticType::Decimal,
        }),
        ..TooltipOptions::default()
    }
}
