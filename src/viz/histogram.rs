//! Histogram: a hidden scatter source series plus a derived histogram series
//! the renderer bins from it.

use crate::error::{ChartError, ChartResult};
use crate::models::{AxisDef, HistogramChart, SeriesKind};
use crate::viz::axis::{AxisOverrides, configure_axis, process_all_axis_straight_lines};
use crate::viz::line::CARTESIAN_HEIGHT;
use crate::viz::types::{
    AxisLabels, ChartFrame, ChartOptions, HistogramPlotOptions, PlotOptions, PointOptions,
    SeriesOptions, TitleOptions, TooltipOptions,
};

const SOURCE_SERIES_ID: &str = "s1";

pub fn compile(chart: &HistogramChart) -> ChartResult<ChartOptions> {
    if chart.bins_count == Some(0) {
        return Err(ChartError::InvalidData(
            "histogram bins count must be positive".into(),
        ));
    }
    let def = &chart.chart_def;
    let x_def = def.x_axis.as_ref();
    let y_def = def.y_axis.as_ref();

    let (x_lines, y_lines) = process_all_axis_straight_lines(&chart.straight_lines);

    let histogram = SeriesOptions {
        name: AxisDef::label_text(x_def).unwrap_or_default().to_string(),
        kind: Some(SeriesKind::Histogram),
        base_series: Some(SOURCE_SERIES_ID.to_string()),
        z_index: Some(-1),
        ..SeriesOptions::default()
    };
    let source = SeriesOptions {
        name: "Data".to_string(),
        kind: Some(SeriesKind::Scatter),
        id: Some(SOURCE_SERIES_ID.to_string()),
        data: Some(
            chart
                .data
                .iter()
                .map(|v| PointOptions::Value(v.to_number_or_zero()))
                .collect(),
        ),
        show_in_legend: Some(false),
        visible: Some(false),
        ..SeriesOptions::default()
    };

    let x_axis = configure_axis(
        x_def,
        AxisOverrides {
            plot_lines: Some(x_lines),
            labels: Some(AxisLabels::small()),
            ..AxisOverrides::titled_from(x_def, "").with_categories_of(x_def)
        },
    );
    let y_axis = configure_axis(
        y_def,
        AxisOverrides {
            plot_lines: Some(y_lines),
            labels: Some(AxisLabels::small().upright()),
            ..AxisOverrides::default()
        },
    );

    Ok(ChartOptions {
        title: TitleOptions::left(def.title.clone()),
        chart: Some(ChartFrame {
            kind: None,
            height: CARTESIAN_HEIGHT,
        }),
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        tooltip: Some(TooltipOptions {
            value_decimals: Some(2),
            ..TooltipOptions::default()
        }),
        plot_options: Some(PlotOptions {
            histogram: Some(HistogramPlotOptions {
                bins_number: chart.bins_count,
            }),
            ..PlotOptions::default()
        }),
        series: vec![histogram, source],
        ..ChartOptions::base()
    })
}
