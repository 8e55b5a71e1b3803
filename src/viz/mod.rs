//! Chart compilation: raw chart JSON to a fully resolved rendering configuration.
//!
//! - `Chart` is the typed sum over the eight chart kinds (bar and column share a payload)
//! - `ChartCompiler` dispatches on it and never fails: unknown kinds, missing
//!   definitions, and compiler errors become placeholder configurations
//! - Renderer extension modules (heatmap, histogram, box plot, x-range) are
//!   registered explicitly at construction, not as a side effect of loading
//!
//! ```
//! use tearsheet_charts::format::Formatter;
//! use tearsheet_charts::viz::ChartCompiler;
//!
//! let compiler = ChartCompiler::initialize(Formatter::default());
//! let opts = compiler.compile(&serde_json::json!({ "chartDef": { "type": "Sankey" } }));
//! assert_eq!(opts.title_text(), Some("Unsupported chart type"));
//! ```

pub mod area;
pub mod axis;
pub mod bar;
pub mod boxplot;
pub mod heatmap;
pub mod histogram;
pub mod line;
pub mod pie;
pub mod series;
pub mod tooltip;
pub mod types;
pub mod xrange;

pub use types::ChartOptions;

use crate::error::{ChartError, ChartResult};
use crate::format::Formatter;
use crate::models::{
    BarChart, BoxPlotChart, HeatMapChart, HistogramChart, LineChart, PieChart, WidgetType,
    XRangeChart,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeSet;
use std::fmt;
use types::TitleOptions;

pub const UNSUPPORTED_FORMAT: &str = "Unsupported chart format";
pub const UNSUPPORTED_TYPE: &str = "Unsupported chart type";
pub const RENDER_FAILED: &str = "Chart could not be rendered";

/// Optional renderer extension a chart kind depends on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RendererModule {
    HeatMap,
    Histogram,
    /// Extended series types; box plots live here.
    More,
    XRange,
}

impl RendererModule {
    pub const ALL: [RendererModule; 4] = [
        RendererModule::HeatMap,
        RendererModule::Histogram,
        RendererModule::More,
        RendererModule::XRange,
    ];

    /// Module a widget kind needs beyond the core renderer, if any.
    pub fn required_by(kind: WidgetType) -> Option<Self> {
        match kind {
            WidgetType::HeatMap => Some(RendererModule::HeatMap),
            WidgetType::Histogram => Some(RendererModule::Histogram),
            WidgetType::BoxPlot => Some(RendererModule::More),
            WidgetType::XRange => Some(RendererModule::XRange),
            _ => None,
        }
    }
}

impl fmt::Display for RendererModule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            RendererModule::HeatMap => "heatmap",
            RendererModule::Histogram => "histogram",
            RendererModule::More => "more",
            RendererModule::XRange => "xrange",
        })
    }
}

/// Set of registered renderer modules.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ModuleRegistry(BTreeSet<RendererModule>);

impl ModuleRegistry {
    pub fn all() -> Self {
        Self(RendererModule::ALL.into_iter().collect())
    }

    pub fn with(mut self, module: RendererModule) -> Self {
        self.0.insert(module);
        self
    }

    pub fn contains(&self, module: RendererModule) -> bool {
        self.0.contains(&module)
    }

    pub fn iter(&self) -> impl Iterator<Item = RendererModule> + '_ {
        self.0.iter().copied()
    }
}

/// A chart payload, typed by its `chartDef.type` discriminant.
#[derive(Debug, Clone, PartialEq)]
pub enum Chart {
    Lines(LineChart),
    Area(LineChart),
    Bar(BarChart),
    Column(BarChart),
    Histogram(HistogramChart),
    Pie(PieChart),
    HeatMap(HeatMapChart),
    BoxPlot(BoxPlotChart),
    XRange(XRangeChart),
}

impl Chart {
    /// Read a raw chart object.
    ///
    /// Errors with `MissingDefinition` when `chartDef` or its `type` is absent,
    /// `UnsupportedType` for tags that are unknown, `null`, or not charts, and
    /// `Malformed` when the payload does not fit the kind's shape.
    pub fn from_value(value: &Value) -> ChartResult<Chart> {
        let tag = match value.get("chartDef").and_then(Value::as_object) {
            None => return Err(ChartError::MissingDefinition),
            Some(def) => match def.get("type") {
                None => return Err(ChartError::MissingDefinition),
                Some(Value::String(tag)) => tag.as_str(),
                Some(other) => return Err(ChartError::UnsupportedType(other.to_string())),
            },
        };
        let kind = WidgetType::from_tag(tag)
            .filter(|k| k.is_chart())
            .ok_or_else(|| ChartError::UnsupportedType(tag.to_string()))?;

        Ok(match kind {
            WidgetType::Lines => Chart::Lines(LineChart::deserialize(value)?),
            WidgetType::Area => Chart::Area(LineChart::deserialize(value)?),
            WidgetType::Bar => Chart::Bar(BarChart::deserialize(value)?),
            WidgetType::Column => Chart::Column(BarChart::deserialize(value)?),
            WidgetType::Histogram => Chart::Histogram(HistogramChart::deserialize(value)?),
            WidgetType::Pie => Chart::Pie(PieChart::deserialize(value)?),
            WidgetType::HeatMap => Chart::HeatMap(HeatMapChart::deserialize(value)?),
            WidgetType::BoxPlot => Chart::BoxPlot(BoxPlotChart::deserialize(value)?),
            WidgetType::XRange => Chart::XRange(XRangeChart::deserialize(value)?),
            WidgetType::Card | WidgetType::DataTable => {
                return Err(ChartError::UnsupportedType(tag.to_string()));
            }
        })
    }

    pub fn kind(&self) -> WidgetType {
        match self {
            Chart::Lines(_) => WidgetType::Lines,
            Chart::Area(_) => WidgetType::Area,
            Chart::Bar(_) => WidgetType::Bar,
            Chart::Column(_) => WidgetType::Column,
            Chart::Histogram(_) => WidgetType::Histogram,
            Chart::Pie(_) => WidgetType::Pie,
            Chart::HeatMap(_) => WidgetType::HeatMap,
            Chart::BoxPlot(_) => WidgetType::BoxPlot,
            Chart::XRange(_) => WidgetType::XRange,
        }
    }

    /// Run the compiler for this kind.
    pub fn compile(&self) -> ChartResult<ChartOptions> {
        match self {
            Chart::Lines(c) => line::compile(c),
            Chart::Area(c) => area::compile(c),
            Chart::Bar(c) => bar::compile(c, true),
            Chart::Column(c) => bar::compile(c, false),
            Chart::Histogram(c) => histogram::compile(c),
            Chart::Pie(c) => pie::compile(c),
            Chart::HeatMap(c) => heatmap::compile(c),
            Chart::BoxPlot(c) => boxplot::compile(c),
            Chart::XRange(c) => xrange::compile(c),
        }
    }
}

/// Entry point for compiling charts. Holds the display formatter and the set
/// of renderer modules charts may rely on.
#[derive(Debug, Clone)]
pub struct ChartCompiler {
    formatter: Formatter,
    modules: ModuleRegistry,
}

impl ChartCompiler {
    /// Compiler with every renderer module registered.
    pub fn initialize(formatter: Formatter) -> Self {
        let modules = ModuleRegistry::all();
        log::debug!(
            "chart compiler initialized with modules: {}",
            modules
                .iter()
                .map(|m| m.to_string())
                .collect::<Vec<_>>()
                .join(", ")
        );
        Self { formatter, modules }
    }

    pub fn new(formatter: Formatter, modules: ModuleRegistry) -> Self {
        Self { formatter, modules }
    }

    pub fn formatter(&self) -> &Formatter {
        &self.formatter
    }

    pub fn modules(&self) -> &ModuleRegistry {
        &self.modules
    }

    /// Compile a raw chart object, propagating failures.
    pub fn try_compile(&self, value: &Value) -> ChartResult<ChartOptions> {
        let chart = Chart::from_value(value)?;
        if let Some(module) = RendererModule::required_by(chart.kind())
            && !self.modules.contains(module)
        {
            return Err(ChartError::ModuleNotRegistered(module));
        }
        chart.compile()
    }

    /// Compile a raw chart object. Never fails: any error yields a placeholder
    /// configuration with a visible title and no series.
    pub fn compile(&self, value: &Value) -> ChartOptions {
        match self.try_compile(value) {
            Ok(options) => options,
            Err(err) => {
                log::warn!("rendering placeholder for chart: {err}");
                placeholder(&err)
            }
        }
    }
}

impl Default for ChartCompiler {
    fn default() -> Self {
        Self::initialize(Formatter::default())
    }
}

/// Placeholder configuration for a chart that could not be compiled.
pub fn placeholder(err: &ChartError) -> ChartOptions {
    let title = match err {
        ChartError::MissingDefinition => TitleOptions::left(UNSUPPORTED_FORMAT),
        ChartError::UnsupportedType(_) | ChartError::ModuleNotRegistered(_) => {
            TitleOptions::text(UNSUPPORTED_TYPE)
        }
        ChartError::Malformed(_) | ChartError::InvalidData(_) => TitleOptions::text(RENDER_FAILED),
    };
    ChartOptions::base().with_title(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn missing_definition_is_unsupported_format() {
        let c = ChartCompiler::default();
        for v in [
            json!({}),
            json!({"chartDef": null}),
            json!({"chartDef": "Lines"}),
            json!({"chartDef": {"title": "x"}, "data": {"points": []}}),
        ] {
            let opts = c.compile(&v);
            assert_eq!(opts.title_text(), Some(UNSUPPORTED_FORMAT));
            assert_eq!(opts.title.align.as_deref(), Some("left"));
            assert!(opts.series.is_empty());
        }
    }

    #[test]
    fn non_chart_tags_are_unsupported() {
        let c = ChartCompiler::default();
        for tag in [json!("Sankey"), json!("Card"), json!("DataTable"), json!(null), json!(3)] {
            let opts = c.compile(&json!({"chartDef": {"id": "a", "title": "t", "type": tag}}));
            assert_eq!(opts.title_text(), Some(UNSUPPORTED_TYPE));
        }
    }

    #[test]
    fn unregistered_module_is_unsupported() {
        let c = ChartCompiler::new(
            Formatter::default(),
            ModuleRegistry::default().with(RendererModule::Histogram),
        );
        let heat = json!({"chartDef": {"id": "h", "title": "Corr", "type": "HeatMap"}, "points": []});
        assert!(matches!(
            c.try_compile(&heat),
            Err(ChartError::ModuleNotRegistered(RendererModule::HeatMap))
        ));
        assert_eq!(c.compile(&heat).title_text(), Some(UNSUPPORTED_TYPE));

        let hist = json!({"chartDef": {"id": "h", "title": "Dist", "type": "Histogram"}, "data": [1, 2]});
        assert_eq!(c.compile(&hist).title_text(), Some("Dist"));
    }

    #[test]
    fn malformed_payload_could_not_be_rendered() {
        let c = ChartCompiler::default();
        let v = json!({"chartDef": {"id": "l", "title": "t", "type": "Lines"}, "lines": 42});
        let opts = c.compile(&v);
        assert_eq!(opts.title_text(), Some(RENDER_FAILED));
        assert_eq!(opts.title.align, None);
    }

    #[test]
    fn registry_covers_every_module() {
        let all = ModuleRegistry::all();
        assert!(RendererModule::ALL.iter().all(|m| all.contains(*m)));
        assert_eq!(
            serde_json::to_value(&all).unwrap(),
            json!(["heatmap", "histogram", "more", "xrange"])
        );
    }
}
