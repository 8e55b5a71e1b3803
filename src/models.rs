use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// A raw value as it appears in the tearsheet: number, string, boolean, or
/// `null`. Nested arrays and objects are kept as their JSON text.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl Scalar {
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }

    /// Numeric reading of the scalar. Strings are parsed leniently (leading
    /// numeric prefix, like `parseFloat`); booleans and `null` are not numbers.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Scalar::Number(n) => Some(*n),
            Scalar::Text(s) => crate::format::parse_float(s),
            Scalar::Bool(_) | Scalar::Null => None,
        }
    }

    /// Numeric reading with `0` standing in for anything unparsable or NaN.
    pub fn to_number_or_zero(&self) -> f64 {
        match self.as_number() {
            Some(n) if !n.is_nan() => n,
            _ => 0.0,
        }
    }
}

impl From<&Value> for Scalar {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => Scalar::Null,
            Value::Bool(b) => Scalar::Bool(*b),
            Value::Number(n) => n.as_f64().map_or(Scalar::Null, Scalar::Number),
            Value::String(s) => Scalar::Text(s.clone()),
            other => Scalar::Text(other.to_string()),
        }
    }
}

impl<'de> Deserialize<'de> for Scalar {
    /// Never fails on a well-formed JSON value; see `From<&Value>`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(|v| Scalar::from(&v))
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => Ok(()),
            Scalar::Bool(b) => write!(f, "{b}"),
            Scalar::Number(n) => f.write_str(&crate::format::js_number_string(*n)),
            Scalar::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Scalar {
    fn from(v: f64) -> Self {
        Scalar::Number(v)
    }
}

impl From<i64> for Scalar {
    fn from(v: i64) -> Self {
        Scalar::Number(v as f64)
    }
}

impl From<bool> for Scalar {
    fn from(v: bool) -> Self {
        Scalar::Bool(v)
    }
}

impl From<&str> for Scalar {
    fn from(v: &str) -> Self {
        Scalar::Text(v.to_string())
    }
}

impl From<String> for Scalar {
    fn from(v: String) -> Self {
        Scalar::Text(v)
    }
}

/// Formatting intent attached to a scalar, independent of its JSON type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SemanticType {
    Percent,
    Decimal,
    Integer,
    Date,
    DateTime,
    Monetary,
    Duration,
    String,
    DayDuration,
    /// Any tag this crate does not know; formats like an untagged value.
    #[serde(other)]
    Other,
}

/// Widget discriminant carried in `chartDef.type` (and in table `type`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WidgetType {
    Card,
    DataTable,
    Lines,
    Area,
    HeatMap,
    Bar,
    Column,
    Histogram,
    BoxPlot,
    XRange,
    Pie,
}

impl WidgetType {
    /// Parse the wire tag. Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<Self> {
        Some(match tag {
            "Card" => WidgetType::Card,
            "DataTable" => WidgetType::DataTable,
            "Lines" => WidgetType::Lines,
            "Area" => WidgetType::Area,
            "HeatMap" => WidgetType::HeatMap,
            "Bar" => WidgetType::Bar,
            "Column" => WidgetType::Column,
            "Histogram" => WidgetType::Histogram,
            "BoxPlot" => WidgetType::BoxPlot,
            "XRange" => WidgetType::XRange,
            "Pie" => WidgetType::Pie,
            _ => return None,
        })
    }

    pub fn is_chart(self) -> bool {
        !matches!(self, WidgetType::Card | WidgetType::DataTable)
    }
}

/// The six fixed tearsheet categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    StrategyBenchmark,
    RiskAnalysis,
    ReturnsDistribution,
    Positions,
    Transactions,
    RoundTrip,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::StrategyBenchmark,
        Category::RiskAnalysis,
        Category::ReturnsDistribution,
        Category::Positions,
        Category::Transactions,
        Category::RoundTrip,
    ];

    /// Top-level key of this category in the tearsheet document.
    pub fn key(self) -> &'static str {
        match self {
            Category::StrategyBenchmark => "strategy_benchmark",
            Category::RiskAnalysis => "risk_analysis",
            Category::ReturnsDistribution => "returns_distribution",
            Category::Positions => "positions",
            Category::Transactions => "transactions",
            Category::RoundTrip => "round_trip",
        }
    }

    pub fn display_name(self) -> &'static str {
        match self {
            Category::StrategyBenchmark => "STRATEGY & BENCHMARK",
            Category::RiskAnalysis => "RISK ANALYSIS",
            Category::ReturnsDistribution => "RETURNS DISTRIBUTION",
            Category::Positions => "POSITIONS",
            Category::Transactions => "TRANSACTIONS",
            Category::RoundTrip => "ROUND TRIP",
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        Category::ALL.into_iter().find(|c| c.key() == key)
    }
}

/// Axis scale type. Tags outside the four known ones are kept as `Unknown`
/// so a chart with an odd axis still compiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisType {
    Linear,
    Logarithmic,
    Datetime,
    Category,
    #[serde(other)]
    Unknown,
}

impl AxisType {
    pub fn is_recognized(self) -> bool {
        !matches!(self, AxisType::Unknown)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisDef {
    #[serde(rename = "type", default)]
    pub kind: Option<AxisType>,
    #[serde(default)]
    pub label: Option<String>,
    /// Only meaningful for `category` axes.
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub categories: Vec<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl AxisDef {
    /// Axis type used for point encoding; absent means linear.
    pub fn kind_or_linear(def: Option<&AxisDef>) -> AxisType {
        def.and_then(|d| d.kind).unwrap_or(AxisType::Linear)
    }

    /// Label text, treating an empty label like a missing one.
    pub fn label_text(def: Option<&AxisDef>) -> Option<&str> {
        def.and_then(|d| d.label.as_deref()).filter(|l| !l.is_empty())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartDef {
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub id: String,
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub title: String,
    #[serde(rename = "type")]
    pub widget_type: WidgetType,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub x_axis: Option<AxisDef>,
    #[serde(default)]
    pub y_axis: Option<AxisDef>,
}

impl ChartDef {
    /// Chart title, or `fallback` when the title is empty.
    pub fn title_or<'a>(&'a self, fallback: &'a str) -> &'a str {
        if self.title.is_empty() { fallback } else { &self.title }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Point {
    #[serde(default)]
    pub x: Scalar,
    #[serde(default)]
    pub y: Scalar,
}

impl Point {
    pub fn new(x: impl Into<Scalar>, y: impl Into<Scalar>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

/// Renderer series kinds a line may request explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeriesKind {
    Line,
    Area,
    Bar,
    Column,
    Histogram,
    Scatter,
    Pie,
    Heatmap,
    Boxplot,
    Xrange,
}

/// One named data series.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Line {
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub data: Vec<Point>,
    #[serde(rename = "type", default)]
    pub kind: Option<SeriesKind>,
    #[serde(default)]
    pub dash_style: Option<String>,
    #[serde(default)]
    pub line_width: Option<f64>,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub fill_opacity: Option<f64>,
}

/// Shaded region on an axis; `from <= to` by convention only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotBand {
    pub from: Scalar,
    pub to: Scalar,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub label: Option<String>,
}

/// Reference line. `vertical: false` lands on the x-axis, `vertical: true` on the y-axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StraightLine {
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub title: String,
    #[serde(default)]
    pub value: Scalar,
    #[serde(default)]
    pub vertical: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineChart {
    pub chart_def: ChartDef,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub lines: Vec<Line>,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub straight_lines: Vec<StraightLine>,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub x_plot_bands: Vec<PlotBand>,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub y_plot_bands: Vec<PlotBand>,
    #[serde(default)]
    pub overlay: Option<Line>,
    #[serde(default)]
    pub stacked: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BarChart {
    pub chart_def: ChartDef,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub data: Vec<Scalar>,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub straight_lines: Vec<StraightLine>,
    #[serde(default)]
    pub bar_width: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistogramChart {
    pub chart_def: ChartDef,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub data: Vec<Scalar>,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub straight_lines: Vec<StraightLine>,
    #[serde(default, deserialize_with = "de_count")]
    pub bins_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PiePoint {
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub name: String,
    #[serde(default)]
    pub y: Scalar,
}

/// One ring of a (possibly nested) pie.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieSeriesDef {
    #[serde(default, deserialize_with = "de_string_or_empty")]
    pub name: String,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub points: Vec<PiePoint>,
    #[serde(default)]
    pub size: Option<String>,
    #[serde(default)]
    pub inner_size: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PieChart {
    pub chart_def: ChartDef,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub data: Vec<PieSeriesDef>,
}

/// `[x, y, value]`; x and y index into the axis categories.
pub type HeatMapPoint = (Scalar, Scalar, Scalar);

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeatMapChart {
    pub chart_def: ChartDef,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub points: Vec<HeatMapPoint>,
    #[serde(default, deserialize_with = "de_count")]
    pub height: Option<u32>,
    #[serde(default)]
    pub show_data_labels: Option<bool>,
}

/// Five-number summary of one box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BoxPlotPoint {
    pub low: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub high: f64,
}

impl<'de> Deserialize<'de> for BoxPlotPoint {
    /// Accepts either `{low, q1, median, q3, high}` or `[low, q1, median, q3, high]`.
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct Named {
            low: f64,
            q1: f64,
            median: f64,
            q3: f64,
            high: f64,
        }

        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Named(Named),
            Quintuple([f64; 5]),
        }

        Ok(match Repr::deserialize(deserializer)? {
            Repr::Named(n) => BoxPlotPoint {
                low: n.low,
                q1: n.q1,
                median: n.median,
                q3: n.q3,
                high: n.high,
            },
            Repr::Quintuple([low, q1, median, q3, high]) => BoxPlotPoint {
                low,
                q1,
                median,
                q3,
                high,
            },
        })
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BoxPlotData {
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub points: Vec<BoxPlotPoint>,
    /// `(x, y)` pairs; x indexes the box the outlier belongs to.
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub outliers: Vec<(f64, f64)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoxPlotChart {
    pub chart_def: ChartDef,
    #[serde(default)]
    pub data: BoxPlotData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct XRangePoint {
    #[serde(default)]
    pub x: Scalar,
    #[serde(default)]
    pub x2: Scalar,
    #[serde(default)]
    pub y: Scalar,
    #[serde(default, alias = "isLong")]
    pub is_long: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct XRangeChart {
    pub chart_def: ChartDef,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub categories: Vec<String>,
    #[serde(default, deserialize_with = "de_list_or_empty")]
    pub points: Vec<XRangePoint>,
}

/// Widgets of one category. Entries stay raw JSON so one malformed widget
/// cannot stop the rest of the category from rendering.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TearsheetSection {
    #[serde(default, deserialize_with = "de_raw_list")]
    pub cards: Vec<Value>,
    #[serde(default, deserialize_with = "de_raw_list")]
    pub charts: Vec<Value>,
    #[serde(default, deserialize_with = "de_raw_list")]
    pub tables: Vec<Value>,
}

impl TearsheetSection {
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty() && self.charts.is_empty() && self.tables.is_empty()
    }
}

/// The full analytics document: six fixed categories.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Tearsheet {
    #[serde(default)]
    pub strategy_benchmark: Option<TearsheetSection>,
    #[serde(default)]
    pub risk_analysis: Option<TearsheetSection>,
    #[serde(default)]
    pub returns_distribution: Option<TearsheetSection>,
    #[serde(default)]
    pub positions: Option<TearsheetSection>,
    #[serde(default)]
    pub transactions: Option<TearsheetSection>,
    #[serde(default)]
    pub round_trip: Option<TearsheetSection>,
}

impl Tearsheet {
    pub fn section(&self, category: Category) -> Option<&TearsheetSection> {
        match category {
            Category::StrategyBenchmark => self.strategy_benchmark.as_ref(),
            Category::RiskAnalysis => self.risk_analysis.as_ref(),
            Category::ReturnsDistribution => self.returns_distribution.as_ref(),
            Category::Positions => self.positions.as_ref(),
            Category::Transactions => self.transactions.as_ref(),
            Category::RoundTrip => self.round_trip.as_ref(),
        }
    }

    /// Categories in their fixed dashboard order, paired with their content.
    pub fn sections(&self) -> impl Iterator<Item = (Category, Option<&TearsheetSection>)> + '_ {
        Category::ALL.into_iter().map(|c| (c, self.section(c)))
    }
}

/// Serde helper: a typed list where `null` counts as empty.
fn de_list_or_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helper: a string where `null` counts as empty.
fn de_string_or_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// Serde helper: a non-negative count that may arrive as a float (`20.0`).
/// Fractions truncate and negatives clamp to zero.
fn de_count<'de, D>(deserializer: D) -> Result<Option<u32>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.map(|n| n as u32))
}

/// Serde helper: a raw widget list. Anything that is not an array (missing,
/// `null`, a stray object) is treated as "nothing to render".
fn de_raw_list<'de, D>(deserializer: D) -> Result<Vec<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Array(items) => Ok(items),
        _ => Ok(Vec::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalar_accepts_number_string_and_bool() {
        let v: Vec<Scalar> = serde_json::from_value(json!([1.5, "abc", true])).unwrap();
        assert_eq!(v[0], Scalar::Number(1.5));
        assert_eq!(v[1], Scalar::Text("abc".into()));
        assert_eq!(v[2], Scalar::Bool(true));
    }

    #[test]
    fn scalar_keeps_null_and_stringifies_nested_values() {
        let v: Vec<Scalar> = serde_json::from_value(json!([null, [1, 2], {"a": 1}])).unwrap();
        assert_eq!(v[0], Scalar::Null);
        assert_eq!(v[0].to_number_or_zero(), 0.0);
        assert_eq!(v[0].to_string(), "");
        assert_eq!(v[1], Scalar::Text("[1,2]".into()));
        assert_eq!(v[2], Scalar::Text(r#"{"a":1}"#.into()));
    }

    #[test]
    fn null_names_and_float_counts_are_read_leniently() {
        let def: ChartDef =
            serde_json::from_value(json!({"id": null, "title": null, "type": "Column"})).unwrap();
        assert_eq!(def.title_or("Bar Chart"), "Bar Chart");
        assert!(def.id.is_empty());

        let h: HistogramChart = serde_json::from_value(json!({
            "chartDef": {"type": "Histogram"},
            "data": [1, null],
            "binsCount": 20.0
        }))
        .unwrap();
        assert_eq!(h.bins_count, Some(20));
        assert_eq!(h.data[1], Scalar::Null);

        let m: HeatMapChart = serde_json::from_value(json!({
            "chartDef": {"type": "HeatMap"},
            "points": [[0, 0, null]],
            "height": 350.7
        }))
        .unwrap();
        assert_eq!(m.height, Some(350));
        assert_eq!(m.points[0].2, Scalar::Null);
    }

    #[test]
    fn scalar_display_matches_js_string() {
        assert_eq!(Scalar::Number(3.0).to_string(), "3");
        assert_eq!(Scalar::Number(0.25).to_string(), "0.25");
        assert_eq!(Scalar::Bool(false).to_string(), "false");
        assert_eq!(Scalar::Text("x".into()).to_string(), "x");
    }

    #[test]
    fn unknown_axis_type_is_kept_as_unknown() {
        let def: AxisDef = serde_json::from_value(json!({"type": "polar"})).unwrap();
        assert_eq!(def.kind, Some(AxisType::Unknown));
        assert!(def.categories.is_empty());
    }

    #[test]
    fn box_plot_point_accepts_object_or_quintuple() {
        let a: BoxPlotPoint =
            serde_json::from_value(json!({"low": 1, "q1": 2, "median": 3, "q3": 4, "high": 5}))
                .unwrap();
        let b: BoxPlotPoint = serde_json::from_value(json!([1, 2, 3, 4, 5])).unwrap();
        assert_eq!(a, b);
        assert!(serde_json::from_value::<BoxPlotPoint>(json!([1, 2, 3])).is_err());
    }

    #[test]
    fn xrange_point_accepts_both_long_flag_spellings() {
        let a: XRangePoint =
            serde_json::from_value(json!({"x": 1, "x2": 2, "y": 0, "is_long": true})).unwrap();
        let b: XRangePoint =
            serde_json::from_value(json!({"x": 1, "x2": 2, "y": 0, "isLong": true})).unwrap();
        assert!(a.is_long && b.is_long);
    }

    #[test]
    fn section_lists_tolerate_null_and_missing() {
        let s: TearsheetSection =
            serde_json::from_value(json!({"cards": null, "charts": {"oops": 1}})).unwrap();
        assert!(s.is_empty());
    }
}
