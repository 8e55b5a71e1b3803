//! X-range: one interval per round trip on a datetime axis.

use crate::error::ChartResult;
use crate::models::{AxisType, SeriesKind, XRangeChart};
use crate::viz::series::datetime_millis;
use crate::viz::types::{
    AxisOptions, ChartFrame, ChartOptions, DataLabels, PointOptions, SeriesOptions, TitleOptions,
};

const XRANGE_HEIGHT: u32 = 400;
const LONG_COLOR: &str = "#2f7ed8";
const SHORT_COLOR: &str = "#d62c20";

pub fn compile(chart: &XRangeChart) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;

    let data = chart
        .points
        .iter()
        .map(|p| PointOptions::Interval {
            x: datetime_millis(&p.x),
            x2: datetime_millis(&p.x2),
            y: p.y.to_number_or_zero(),
            color: (if p.is_long { LONG_COLOR } else { SHORT_COLOR }).to_string(),
        })
        .collect();

    let series = SeriesOptions {
        name: "RoundTrip Lifetime".into(),
        kind: Some(SeriesKind::Xrange),
        border_color: Some("gray".into()),
        point_width: Some(20.0),
        data: Some(data),
        data_labels: Some(DataLabels {
            enabled: Some(true),
            ..DataLabels::default()
        }),
        ..SeriesOptions::default()
    };

    Ok(ChartOptions {
        title: TitleOptions::left(def.title_or("Chart")),
        chart: Some(ChartFrame {
            kind: Some(SeriesKind::Xrange),
            height: XRANGE_HEIGHT,
        }),
        x_axis: Some(AxisOptions {
            kind: Some(AxisType::Datetime),
            ..AxisOptions::default()
        }),
        y_axis: Some(AxisOptions {
            title: TitleOptions::text(""),
            categories: Some(chart.categories.clone()),
            reversed: Some(true),
            ..AxisOptions::default()
        }),
        series: vec![series],
        ..ChartOptions::base()
    })
}
