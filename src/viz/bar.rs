//! Single-series bar (horizontal) and column (vertical) charts.

use crate::error::ChartResult;
use crate::models::{BarChart, SeriesKind};
use crate::viz::axis::{AxisOverrides, configure_axis, process_all_axis_straight_lines};
use crate::viz::line::CARTESIAN_HEIGHT;
use crate::viz::types::{
    AxisLabels, ChartFrame, ChartOptions, PointOptions, SeriesOptions, TitleOptions,
    TooltipOptions,
};

/// Compile a bar chart. `horizontal` swaps the axis definitions, emits `bar`
/// instead of `column`, and keeps category labels upright instead of rotated.
pub fn compile(chart: &BarChart, horizontal: bool) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;
    let (x_def, y_def) = if horizontal {
        (def.y_axis.as_ref(), def.x_axis.as_ref())
    } else {
        (def.x_axis.as_ref(), def.y_axis.as_ref())
    };
    let kind = if horizontal {
        SeriesKind::Bar
    } else {
        SeriesKind::Column
    };

    let (x_lines, y_lines) = process_all_axis_straight_lines(&chart.straight_lines);

    let series = SeriesOptions {
        name: def.title_or("Value").to_string(),
        kind: Some(kind),
        data: Some(
            chart
                .data
                .iter()
                .map(|v| PointOptions::Value(v.to_number_or_zero()))
                .collect(),
        ),
        point_width: chart.bar_width,
        ..SeriesOptions::default()
    };

    let x_axis = configure_axis(
        x_def,
        AxisOverrides {
            plot_lines: Some(x_lines),
            labels: Some(AxisLabels::small().rotated(if horizontal { 0.0 } else { 270.0 })),
            ..AxisOverrides::titled_from(x_def, "").with_categories_of(x_def)
        },
    );
    let y_axis = configure_axis(
        y_def,
        AxisOverrides {
            plot_lines: Some(y_lines),
            labels: Some(AxisLabels::small()),
            ..AxisOverrides::default().with_categories_of(y_def)
        },
    );

    Ok(ChartOptions {
        title: TitleOptions::left(def.title_or("Bar Chart")),
        chart: Some(ChartFrame {
            kind: Some(kind),
            height: CARTESIAN_HEIGHT,
        }),
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        tooltip: Some(TooltipOptions {
            value_decimals: Some(2),
            ..TooltipOptions::default()
        }),
        series: vec![series],
        ..ChartOptions::base()
    })
}
