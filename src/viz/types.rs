//! Rendering configuration produced by the chart compilers.
//!
//! The shape follows the option tree of the host charting library: every field
//! is fully resolved, so the renderer only draws. Optional fields are skipped
//! when unset, which keeps serialized output small and stable.

use crate::models::{AxisType, BoxPlotPoint, Scalar, SeriesKind};
use crate::viz::tooltip::TooltipFormatter;
use serde::Serialize;

/// `{ "enabled": bool }` switch used by several option groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Toggle {
    pub enabled: bool,
}

impl Toggle {
    pub const ON: Toggle = Toggle { enabled: true };
    pub const OFF: Toggle = Toggle { enabled: false };
}

/// Title block for the chart or an axis. A `null` text hides the title.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TitleOptions {
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
}

impl TitleOptions {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            align: None,
        }
    }

    pub fn left(text: impl Into<String>) -> Self {
        Self {
            text: Some(text.into()),
            align: Some("left".into()),
        }
    }
}

/// Text style shared by axis labels, data labels, and plot-line labels.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub font_weight: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_outline: Option<String>,
}

impl LabelStyle {
    pub fn font_size(size: &str) -> Self {
        Self {
            font_size: Some(size.into()),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AxisLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LabelStyle>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overflow: Option<String>,
}

impl AxisLabels {
    /// 11px labels, the size every cartesian chart uses.
    pub fn small() -> Self {
        Self {
            style: Some(LabelStyle::font_size("11px")),
            ..Self::default()
        }
    }

    pub fn rotated(mut self, degrees: f64) -> Self {
        self.rotation = Some(degrees);
        self
    }

    /// Upright labels that may overflow the plot area.
    pub fn upright(self) -> Self {
        Self {
            overflow: Some("allow".into()),
            ..self.rotated(0.0)
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotBandLabel {
    pub text: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotBandOptions {
    pub from: Scalar,
    pub to: Scalar,
    pub color: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<PlotBandLabel>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlotLineLabel {
    pub text: String,
    pub style: LabelStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlotLineOptions {
    pub value: Scalar,
    pub color: String,
    pub width: f64,
    pub dash_style: String,
    pub z_index: i32,
    pub label: PlotLineLabel,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AxisOptions {
    pub title: TitleOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub grid_line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<AxisType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reversed: Option<bool>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plot_bands: Vec<PlotBandOptions>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub plot_lines: Vec<PlotLineOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<AxisLabels>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColorAxisOptions {
    pub min: f64,
    pub min_color: String,
    pub max_color: String,
}

/// Chart frame: renderer chart kind and pixel height.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartFrame {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesKind>,
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LegendOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layout: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical_align: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol_height: Option<f64>,
}

impl LegendOptions {
    pub fn enabled() -> Self {
        Self {
            enabled: Some(true),
            ..Self::default()
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TooltipOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_decimals: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value_suffix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub shared: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatter: Option<TooltipFormatter>,
}

/// Per-series tooltip templates.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesTooltip {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub header_format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_format: Option<String>,
}

/// `{ property, operator, value }` filter on data labels.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelFilter {
    pub property: String,
    pub operator: String,
    pub value: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DataLabels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub format: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<LabelFilter>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub distance: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<LabelStyle>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_color: Option<String>,
}

/// One encoded data point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum PointOptions {
    /// Bare y value.
    Value(f64),
    /// `[x, y]`.
    Pair(f64, f64),
    /// Named point on a category axis or a pie slice.
    Named {
        name: String,
        y: f64,
        #[serde(skip_serializing_if = "Option::is_none")]
        color: Option<String>,
    },
    /// `[x, y, value]` heatmap cell.
    Cell(Scalar, Scalar, Scalar),
    /// Five-number box summary.
    Box(BoxPlotPoint),
    /// Interval on a datetime axis.
    Interval { x: f64, x2: f64, y: f64, color: String },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SeriesOptions {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<SeriesKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<PointOptions>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dash_style: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fill_opacity: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub z_index: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_series: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub show_in_legend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub visible: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inner_size: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub border_color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub point_width: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_labels: Option<DataLabels>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<MarkerOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<SeriesTooltip>,
}

impl SeriesOptions {
    /// Number of encoded points, zero for derived series without data.
    pub fn len(&self) -> usize {
        self.data.as_ref().map_or(0, Vec::len)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaPlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacking: Option<String>,
    pub marker: MarkerOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramPlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bins_number: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotPlotOptions {
    pub fill_color: String,
    pub line_width: f64,
    pub median_width: f64,
    pub stem_width: f64,
    pub whisker_width: f64,
    pub whisker_length: String,
    pub whisker_color: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PlotOptions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub area: Option<AreaPlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub histogram: Option<HistogramPlotOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub boxplot: Option<BoxPlotPlotOptions>,
}

/// Complete rendering configuration for one chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub colors: Vec<String>,
    pub credits: Toggle,
    pub exporting: Toggle,
    pub legend: LegendOptions,
    pub accessibility: Toggle,
    pub title: TitleOptions,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chart: Option<ChartFrame>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_axis: Option<AxisOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y_axis: Option<AxisOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color_axis: Option<ColorAxisOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tooltip: Option<TooltipOptions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub plot_options: Option<PlotOptions>,
    pub series: Vec<SeriesOptions>,
}

impl ChartOptions {
    /// Base configuration every chart starts from: default colors, credits
    /// off, exporting, legend and accessibility on, empty title, no series.
    pub fn base() -> Self {
        Self {
            colors: crate::style::DEFAULT_COLORS
                .iter()
                .map(|c| c.to_string())
                .collect(),
            credits: Toggle::OFF,
            exporting: Toggle::ON,
            legend: LegendOptions::enabled(),
            accessibility: Toggle::ON,
            title: TitleOptions::default(),
            chart: None,
            x_axis: None,
            y_axis: None,
            color_axis: None,
            tooltip: None,
            plot_options: None,
            series: Vec::new(),
        }
    }

    pub fn with_title(mut self, title: TitleOptions) -> Self {
        self.title = title;
        self
    }

    /// Title text, if any.
    pub fn title_text(&self) -> Option<&str> {
        self.title.text.as_deref()
    }
}
