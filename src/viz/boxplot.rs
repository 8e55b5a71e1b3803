//! Box plot: five-number summaries plus an outlier scatter.

use crate::error::{ChartError, ChartResult};
use crate::models::{BoxPlotChart, BoxPlotPoint, SeriesKind};
use crate::style::PRIMARY_COLOR;
use crate::viz::axis::{AxisOverrides, configure_axis};
use crate::viz::line::CARTESIAN_HEIGHT;
use crate::viz::types::{
    AxisLabels, BoxPlotPlotOptions, ChartFrame, ChartOptions, LegendOptions, MarkerOptions,
    PlotOptions, PointOptions, SeriesOptions, SeriesTooltip, TitleOptions,
};

const BOX_TOOLTIP: &str = "Minimum: {point.low}<br/>\
Lower quartile: {point.q1}<br/>\
Median: {point.median}<br/>\
Upper quartile: {point.q3}<br/>\
Maximum: {point.high}<br/>";

pub fn compile(chart: &BoxPlotChart) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;
    let title = def.title_or("Box Plot");
    if let Some(bad) = chart.data.points.iter().position(|p| !is_finite(p)) {
        return Err(ChartError::InvalidData(format!(
            "box {bad} has a non-finite summary value"
        )));
    }
    let x_def = def.x_axis.as_ref();
    let y_def = def.y_axis.as_ref();

    let boxes = SeriesOptions {
        name: title.to_string(),
        kind: Some(SeriesKind::Boxplot),
        data: Some(chart.data.points.iter().copied().map(PointOptions::Box).collect()),
        tooltip: Some(SeriesTooltip {
            header_format: Some("<em>{point.key}</em><br/>".into()),
            point_format: Some(BOX_TOOLTIP.into()),
        }),
        ..SeriesOptions::default()
    };
    let outliers = SeriesOptions {
        name: "Outliers".into(),
        kind: Some(SeriesKind::Scatter),
        color: Some(PRIMARY_COLOR.into()),
        data: Some(
            chart
                .data
                .outliers
                .iter()
                .map(|&(x, y)| PointOptions::Pair(x, y))
                .collect(),
        ),
        marker: Some(MarkerOptions {
            fill_color: Some("white".into()),
            line_width: Some(1.0),
            line_color: Some(PRIMARY_COLOR.into()),
            ..MarkerOptions::default()
        }),
        tooltip: Some(SeriesTooltip {
            point_format: Some("Outlier: {point.y}".into()),
            ..SeriesTooltip::default()
        }),
        ..SeriesOptions::default()
    };

    let x_axis = configure_axis(
        x_def,
        AxisOverrides {
            categories: Some(x_def.map(|d| d.categories.clone()).unwrap_or_default()),
            labels: Some(AxisLabels::small()),
            ..AxisOverrides::titled_from(x_def, "")
        },
    );
    let y_axis = configure_axis(
        y_def,
        AxisOverrides {
            labels: Some(AxisLabels::small()),
            ..AxisOverrides::titled_from(y_def, "Values")
        },
    );

    Ok(ChartOptions {
        title: TitleOptions::left(title),
        chart: Some(ChartFrame {
            kind: Some(SeriesKind::Boxplot),
            height: CARTESIAN_HEIGHT,
        }),
        legend: LegendOptions::enabled(),
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        plot_options: Some(PlotOptions {
            boxplot: Some(BoxPlotPlotOptions {
                fill_color: PRIMARY_COLOR.into(),
                line_width: 1.0,
                median_width: 1.0,
                stem_width: 1.0,
                whisker_width: 2.0,
                whisker_length: "50%".into(),
                whisker_color: "#333333".into(),
            }),
            ..PlotOptions::default()
        }),
        series: vec![boxes, outliers],
        ..ChartOptions::base()
    })
}

fn is_finite(p: &BoxPlotPoint) -> bool {
    [p.low, p.q1, p.median, p.q3, p.high]
        .iter()
        .all(|v| v.is_finite())
}
