//! Area chart: line data rendered as filled areas, optionally stacked.

use crate::error::ChartResult;
use crate::models::{AxisDef, LineChart, SeriesKind};
use crate::viz::axis::{
    AxisOverrides, configure_axis, process_all_axis_straight_lines, process_plot_bands,
};
use crate::viz::line::{CARTESIAN_HEIGHT, datetime_tooltip};
use crate::viz::series::build_series;
use crate::viz::types::{
    AreaPlotOptions, AxisLabels, ChartFrame, ChartOptions, MarkerOptions, PlotOptions,
    TitleOptions,
};

const DEFAULT_FILL_OPACITY: f64 = 0.3;

pub fn compile(chart: &LineChart) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;
    let x_def = def.x_axis.as_ref();
    let y_def = def.y_axis.as_ref();
    let x_type = AxisDef::kind_or_linear(x_def);

    let (x_lines, y_lines) = process_all_axis_straight_lines(&chart.straight_lines);

    let series = chart
        .lines
        .iter()
        .enumerate()
        .map(|(i, line)| {
            let mut s = build_series(line, x_type, i, false);
            s.kind = Some(SeriesKind::Area);
            s.fill_opacity = Some(line.fill_opacity.unwrap_or(DEFAULT_FILL_OPACITY));
            s
        })
        .collect();

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
            plot_bands: Some(process_plot_bands(&chart.y_plot_bands)),
            plot_lines: Some(y_lines),
            labels: Some(AxisLabels::small()),
            ..AxisOverrides::default()
        },
    );

    Ok(ChartOptions {
        title: TitleOptions::left(def.title.clone()),
        chart: Some(ChartFrame {
            kind: Some(SeriesKind::Area),
            height: CARTESIAN_HEIGHT,
        }),
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        tooltip: Some(datetime_tooltip(x_type)),
        plot_options: Some(PlotOptions {
            area: Some(AreaPlotOptions {
                stacking: chart.stacked.then(|| "normal".to_string()),
                marker: MarkerOptions {
                    enabled: Some(false),
                    ..MarkerOptions::default()
                },
            }),
            ..PlotOptions::default()
        }),
        series,
        ..ChartOptions::base()
    })
}
