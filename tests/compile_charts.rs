use serde_json::{Value, json};
use tearsheet_charts::models::{AxisType, SeriesKind};
use tearsheet_charts::viz::tooltip::{TooltipFormatter, TooltipPoint};
use tearsheet_charts::viz::types::PointOptions;
use tearsheet_charts::{ChartCompiler, ChartOptions, Formatter};

fn compile(v: &Value) -> ChartOptions {
    ChartCompiler::initialize(Formatter::default())
        .try_compile(v)
        .expect("chart compiles")
}

fn returns_chart() -> Value {
    json!({
        "chartDef": {
            "id": "cum-returns",
            "title": "Cumulative Returns",
            "type": "Lines",
            "category": "strategy_benchmark",
            "xAxis": {"type": "datetime", "label": "Date"},
            "yAxis": {"type": "linear", "label": "Return", "min": -1, "max": 2}
        },
        "lines": [
            {"name": "Strategy", "data": [
                {"x": "2024-01-01", "y": 0.0},
                {"x": "2024-01-02", "y": 0.01},
                {"x": "2024-01-03", "y": 0.025}
            ]},
            {"name": "Benchmark", "dashStyle": "Dash", "data": [
                {"x": "2024-01-01", "y": 0.0},
                {"x": "2024-01-02", "y": -0.004},
                {"x": "2024-01-03", "y": "0.012"}
            ]}
        ],
        "straightLines": [{"title": "Break-even", "value": 0, "vertical": true}],
        "xPlotBands": [{"from": "2024-01-01", "to": "2024-01-02", "label": "Drawdown"}]
    })
}

#[test]
fn datetime_line_chart_shares_tooltip_across_series() {
    let opts = compile(&returns_chart());
    assert_eq!(opts.series.len(), 2);

    let tooltip = opts.tooltip.as_ref().unwrap();
    assert_eq!(tooltip.shared, Some(true));
    assert_eq!(tooltip.value_decimals, Some(2));
    let formatter = tooltip.formatter.as_ref().unwrap();
    assert!(matches!(formatter, TooltipFormatter::SharedDatetime { .. }));

    // Gather both series' values at the second shared x.
    let x = match &opts.series[0].data.as_ref().unwrap()[1] {
        PointOptions::Pair(x, _) => *x,
        other => panic!("unexpected point {other:?}"),
    };
    let points: Vec<TooltipPoint> = opts
        .series
        .iter()
        .map(|s| {
            let y = s
                .data
                .as_ref()
                .unwrap()
                .iter()
                .find_map(|p| match p {
                    PointOptions::Pair(px, y) if *px == x => Some(*y),
                    _ => None,
                })
                .unwrap();
            TooltipPoint {
                series: s.name.clone(),
                color: s.color.clone().unwrap(),
                y,
            }
        })
        .collect();

    let html = formatter
        .render_shared(&Formatter::default(), x, &points)
        .unwrap();
    assert_eq!(html.matches("1/2/2024, 12:00:00 AM").count(), 1);
    assert!(html.starts_with("<b>1/2/2024, 12:00:00 AM</b><br/>"));
    assert!(html.contains("Strategy: <b>0.01</b>"));
    assert!(html.contains("Benchmark: <b>-0.00</b>"));
}

#[test]
fn line_chart_axes_and_reference_lines() {
    let opts = compile(&returns_chart());
    assert_eq!(opts.title_text(), Some("Cumulative Returns"));
    assert_eq!(opts.title.align.as_deref(), Some("left"));
    assert_eq!(opts.chart.as_ref().unwrap().height, 300);

    let x = opts.x_axis.as_ref().unwrap();
    assert_eq!(x.kind, Some(AxisType::Datetime));
    assert_eq!(x.plot_bands.len(), 1);
    assert!(x.plot_lines.is_empty());

    let y = opts.y_axis.as_ref().unwrap();
    assert_eq!((y.min, y.max), (Some(-1.0), Some(2.0)));
    assert_eq!(y.plot_lines.len(), 1);
    assert_eq!(y.plot_lines[0].label.text, "Break-even");

    assert_eq!(opts.series[0].color.as_deref(), Some("#2f7ed8"));
    assert_eq!(opts.series[1].color.as_deref(), Some("#0d233a"));
    assert_eq!(opts.series[1].dash_style.as_deref(), Some("Dash"));
}

#[test]
fn line_overlay_is_appended_on_top() {
    let mut v = returns_chart();
    v["overlay"] = json!({"name": "Rolling mean", "data": [{"x": "2024-01-03", "y": 0.02}]});
    let opts = compile(&v);
    let overlay = opts.series.last().unwrap();
    assert_eq!(overlay.name, "Rolling mean");
    assert_eq!(overlay.color.as_deref(), Some("#ff7f0e"));
    assert_eq!(overlay.z_index, Some(5));
}

#[test]
fn linear_line_chart_has_plain_tooltip() {
    let v = json!({
        "chartDef": {"id": "l", "title": "", "type": "Lines", "xAxis": {"type": "linear"}},
        "lines": [{"name": "", "data": [{"x": "3", "y": 1}]}]
    });
    let opts = compile(&v);
    let tooltip = opts.tooltip.unwrap();
    assert_eq!(tooltip.formatter, None);
    assert_eq!(tooltip.shared, None);
    assert_eq!(opts.series[0].name, "Series 1");
    assert_eq!(
        opts.series[0].data.as_ref().unwrap()[0],
        PointOptions::Pair(3.0, 1.0)
    );
}

#[test]
fn area_chart_stacks_and_fills() {
    let v = json!({
        "chartDef": {"id": "a", "title": "Exposure", "type": "Area", "xAxis": {"type": "datetime"}},
        "lines": [
            {"name": "Long", "data": [{"x": 0, "y": 1}]},
            {"name": "Short", "fillOpacity": 0.6, "data": [{"x": 0, "y": -1}]}
        ],
        "stacked": true
    });
    let opts = compile(&v);
    assert_eq!(opts.series[0].kind, Some(SeriesKind::Area));
    assert_eq!(opts.series[0].fill_opacity, Some(0.3));
    assert_eq!(opts.series[1].fill_opacity, Some(0.6));
    let area = opts.plot_options.unwrap().area.unwrap();
    assert_eq!(area.stacking.as_deref(), Some("normal"));
    assert_eq!(area.marker.enabled, Some(false));
}

#[test]
fn bar_orientation_swaps_axes_and_rotation() {
    let chart = |tag: &str| {
        json!({
            "chartDef": {
                "id": "b", "title": "", "type": tag,
                "xAxis": {"type": "category", "label": "Month", "categories": ["Jan", "Feb"]},
                "yAxis": {"type": "linear", "label": "Return"}
            },
            "data": [1.5, "2"],
            "barWidth": 12
        })
    };

    let column = compile(&chart("Column"));
    assert_eq!(column.chart.as_ref().unwrap().kind, Some(SeriesKind::Column));
    assert_eq!(column.title_text(), Some("Bar Chart"));
    let x = column.x_axis.as_ref().unwrap();
    assert_eq!(x.title.text.as_deref(), Some("Month"));
    assert_eq!(x.categories, Some(vec!["Jan".to_string(), "Feb".to_string()]));
    assert_eq!(x.labels.as_ref().unwrap().rotation, Some(270.0));
    let s = &column.series[0];
    assert_eq!(s.name, "Value");
    assert_eq!(s.point_width, Some(12.0));
    assert_eq!(
        s.data.as_ref().unwrap(),
        &vec![PointOptions::Value(1.5), PointOptions::Value(2.0)]
    );

    let bar = compile(&chart("Bar"));
    assert_eq!(bar.series[0].kind, Some(SeriesKind::Bar));
    let x = bar.x_axis.as_ref().unwrap();
    assert_eq!(x.title.text.as_deref(), Some("Return"));
    assert_eq!(x.labels.as_ref().unwrap().rotation, Some(0.0));
    assert_eq!(
        bar.y_axis.as_ref().unwrap().categories,
        Some(vec!["Jan".to_string(), "Feb".to_string()])
    );
}

#[test]
fn histogram_links_derived_series_to_hidden_source() {
    let v = json!({
        "chartDef": {"id": "h", "title": "Daily returns", "type": "Histogram",
                     "xAxis": {"label": "Return"}},
        "data": [0.1, -0.2, 0.05],
        "binsCount": 20
    });
    let opts = compile(&v);
    let [hist, source] = opts.series.as_slice() else {
        panic!("expected two series");
    };
    assert_eq!(hist.kind, Some(SeriesKind::Histogram));
    assert_eq!(hist.name, "Return");
    assert_eq!(hist.base_series.as_deref(), Some("s1"));
    assert_eq!(source.id.as_deref(), Some("s1"));
    assert_eq!(source.kind, Some(SeriesKind::Scatter));
    assert_eq!(source.visible, Some(false));
    assert_eq!(source.len(), 3);
    assert_eq!(opts.plot_options.unwrap().histogram.unwrap().bins_number, Some(20));
}

#[test]
fn null_values_fall_back_instead_of_failing_the_chart() {
    let line = compile(&json!({
        "chartDef": {"id": "r", "title": null, "type": "Lines", "xAxis": {"type": "datetime"}},
        "lines": [{"name": null, "data": [{"x": "1970-01-02", "y": null}]}]
    }));
    assert_eq!(line.series.len(), 1);
    assert_eq!(line.series[0].name, "Series 1");
    assert_eq!(
        line.series[0].data.as_ref().unwrap(),
        &vec![PointOptions::Pair(86_400_000.0, 0.0)]
    );

    let column = compile(&json!({
        "chartDef": {"id": "c", "title": null, "type": "Column"},
        "data": [1, null, 2]
    }));
    assert_eq!(column.title_text(), Some("Bar Chart"));
    assert_eq!(
        column.series[0].data.as_ref().unwrap(),
        &vec![PointOptions::Value(1.0), PointOptions::Value(0.0), PointOptions::Value(2.0)]
    );

    let hist = compile(&json!({
        "chartDef": {"id": "h", "title": "Daily returns", "type": "Histogram"},
        "data": [0.1, null],
        "binsCount": 20.0
    }));
    assert_eq!(hist.plot_options.unwrap().histogram.unwrap().bins_number, Some(20));

    let heat = compile(&json!({
        "chartDef": {"id": "m", "title": "Monthly returns", "type": "HeatMap"},
        "points": [[0, 0, null]]
    }));
    assert_eq!(heat.series[0].len(), 1);
}

#[test]
fn pie_rings_get_inner_and_outer_labels() {
    let v = json!({
        "chartDef": {"id": "p", "title": "", "type": "Pie"},
        "data": [
            {"name": "Sectors", "size": "60%", "points": [{"name": "Tech", "y": 60}, {"name": "Energy", "y": 40}]},
            {"name": "Holdings", "size": "100%", "innerSize": "60%", "points": [{"name": "AAPL", "y": 35}, {"name": "XOM", "y": 0.5}]}
        ]
    });
    let opts = compile(&v);
    assert_eq!(opts.title_text(), Some("Chart"));
    assert_eq!(opts.chart.as_ref().unwrap().height, 640);
    assert_eq!(opts.tooltip.as_ref().unwrap().value_suffix.as_deref(), Some("%"));

    let outer = &opts.series[0];
    assert_eq!(outer.id.as_deref(), Some("series-0"));
    let labels = outer.data_labels.as_ref().unwrap();
    assert_eq!(labels.color.as_deref(), Some("#ffffff"));
    assert_eq!(labels.distance.as_deref(), Some("-50%"));

    let inner = &opts.series[1];
    assert_eq!(inner.inner_size.as_deref(), Some("60%"));
    let filter = inner.data_labels.as_ref().unwrap().filter.as_ref().unwrap();
    assert_eq!((filter.property.as_str(), filter.operator.as_str(), filter.value), ("y", ">", 1.0));
    match &inner.data.as_ref().unwrap()[0] {
        PointOptions::Named { color, .. } => assert_eq!(color.as_deref(), Some("rgb(98,177,255)")),
        other => panic!("unexpected point {other:?}"),
    }
}

#[test]
fn heatmap_reverses_y_and_explains_cells() {
    let v = json!({
        "chartDef": {"id": "m", "title": "Monthly returns", "type": "HeatMap",
                     "xAxis": {"type": "category", "categories": ["Jan", "Feb"]},
                     "yAxis": {"type": "category", "categories": ["2023", "2024"]}},
        "points": [[0, 0, 1.25], [1, 1, -0.5]],
        "showDataLabels": false
    });
    let opts = compile(&v);
    assert_eq!(opts.title.align, None);
    assert_eq!(opts.chart.as_ref().unwrap().height, 400);
    assert_eq!(opts.y_axis.as_ref().unwrap().reversed, Some(true));
    let color_axis = opts.color_axis.as_ref().unwrap();
    assert_eq!(color_axis.min, 0.0);
    assert_eq!(color_axis.min_color, "#FFFFFF");
    assert_eq!(opts.legend.layout.as_deref(), Some("vertical"));
    assert_eq!(
        opts.series[0].data_labels.as_ref().unwrap().enabled,
        Some(false)
    );

    let tooltip = opts.tooltip.as_ref().unwrap().formatter.as_ref().unwrap();
    assert_eq!(
        tooltip.render_cell(&Formatter::default(), 1, 1, -0.5).unwrap(),
        "<b>2024 / Feb</b><br>Value: -0.50"
    );
}

#[test]
fn box_plot_accepts_both_point_shapes() {
    let v = json!({
        "chartDef": {"id": "bp", "title": "", "type": "BoxPlot"},
        "data": {
            "points": [[1, 2, 3, 4, 5], {"low": 0, "q1": 1, "median": 2, "q3": 3, "high": 4}],
            "outliers": [[0, 9.5]]
        }
    });
    let opts = compile(&v);
    assert_eq!(opts.title_text(), Some("Box Plot"));
    assert_eq!(opts.y_axis.as_ref().unwrap().title.text.as_deref(), Some("Values"));
    let [boxes, outliers] = opts.series.as_slice() else {
        panic!("expected two series");
    };
    assert_eq!(boxes.len(), 2);
    assert_eq!(outliers.name, "Outliers");
    let marker = outliers.marker.as_ref().unwrap();
    assert_eq!(marker.fill_color.as_deref(), Some("white"));
    assert_eq!(marker.line_color, outliers.color);
    assert_eq!(
        opts.plot_options.unwrap().boxplot.unwrap().whisker_color,
        "#333333"
    );
}

#[test]
fn xrange_colors_by_direction() {
    let v = json!({
        "chartDef": {"id": "x", "title": "Round trips", "type": "XRange"},
        "categories": ["AAPL", "MSFT"],
        "points": [
            {"x": "2024-01-01", "x2": "2024-01-05", "y": 0, "is_long": true},
            {"x": 0, "x2": 86400000, "y": 1, "isLong": false}
        ]
    });
    let opts = compile(&v);
    assert_eq!(opts.x_axis.as_ref().unwrap().kind, Some(AxisType::Datetime));
    let y = opts.y_axis.as_ref().unwrap();
    assert_eq!(y.reversed, Some(true));
    assert_eq!(y.title.text.as_deref(), Some(""));
    let data = opts.series[0].data.as_ref().unwrap();
    assert_eq!(
        data[1],
        PointOptions::Interval {
            x: 0.0,
            x2: 86_400_000.0,
            y: 1.0,
            color: "#d62c20".into()
        }
    );
    match &data[0] {
        PointOptions::Interval { color, .. } => assert_eq!(color, "#2f7ed8"),
        other => panic!("unexpected point {other:?}"),
    }
}

#[test]
fn compilation_is_deterministic() {
    let compiler = ChartCompiler::initialize(Formatter::default());
    let v = returns_chart();
    let a = serde_json::to_value(compiler.compile(&v)).unwrap();
    let b = serde_json::to_value(compiler.compile(&v)).unwrap();
    assert_eq!(a, b);
}
