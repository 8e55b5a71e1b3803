//! Heatmap over two category axes.

use crate::error::ChartResult;
use crate::models::{AxisDef, HeatMapChart, SemanticType, SeriesKind};
use crate::style::PRIMARY_COLOR;
use crate::viz::axis::{AxisOverrides, configure_axis};
use crate::viz::tooltip::TooltipFormatter;
use crate::viz::types::{
    ChartFrame, ChartOptions, ColorAxisOptions, DataLabels, LabelStyle, LegendOptions,
    PointOptions, SeriesOptions, TitleOptions, TooltipOptions,
};

const DEFAULT_HEIGHT: u32 = 400;

pub fn compile(chart: &HeatMapChart) -> ChartResult<ChartOptions> {
    let def = &chart.chart_def;
    let title = def.title_or("Chart");
    let x_def = def.x_axis.as_ref();
    let y_def = def.y_axis.as_ref();
    let x_labels = labels_of(x_def);
    let y_labels = labels_of(y_def);

    let x_axis = configure_axis(
        x_def,
        AxisOverrides {
            categories: Some(x_labels.clone()),
            ..AxisOverrides::titled_from(x_def, "")
        },
    );
    let y_axis = configure_axis(
        y_def,
        AxisOverrides {
            categories: Some(y_labels.clone()),
            reversed: Some(true),
            ..AxisOverrides::titled_from(y_def, "")
        },
    );

    let series = SeriesOptions {
        name: title.to_string(),
        border_width: Some(1.0),
        data: Some(
            chart
                .points
                .iter()
                .map(|(x, y, v)| PointOptions::Cell(x.clone(), y.clone(), v.clone()))
                .collect(),
        ),
        data_labels: Some(DataLabels {
            enabled: Some(chart.show_data_labels != Some(false)),
            color: Some("#000000".into()),
            format: Some("{point.value:.1f}".into()),
            style: Some(LabelStyle {
                font_size: Some("10px".into()),
                text_outline: Some("none".into()),
                ..LabelStyle::default()
            }),
            ..DataLabels::default()
        }),
        ..SeriesOptions::default()
    };

    Ok(ChartOptions {
        title: TitleOptions::text(title),
        chart: Some(ChartFrame {
            kind: Some(SeriesKind::Heatmap),
            height: chart.height.filter(|h| *h > 0).unwrap_or(DEFAULT_HEIGHT),
        }),
        legend: LegendOptions {
            align: Some("right".into()),
            layout: Some("vertical".into()),
            margin: Some(0.0),
            vertical_align: Some("top".into()),
            y: Some(25.0),
            symbol_height: Some(280.0),
            ..LegendOptions::default()
        },
        x_axis: Some(x_axis),
        y_axis: Some(y_axis),
        color_axis: Some(ColorAxisOptions {
            min: 0.0,
            min_color: "#FFFFFF".into(),
            max_color: PRIMARY_COLOR.into(),
        }),
        tooltip: Some(TooltipOptions {
            formatter: Some(TooltipFormatter::HeatmapCell {
                x_labels,
                y_labels,
                value_type: SemanticType::Decimal,
            }),
            ..TooltipOptions::default()
        }),
        series: vec![series],
        ..ChartOptions::base()
    })
}

fn labels_of(def: Option<&AxisDef>) -> Vec<String> {
    def.map(|d| d.categories.clone()).unwrap_or_default()
}
