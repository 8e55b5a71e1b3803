//! tearsheet_charts
//!
//! Compiles a portfolio-analytics tearsheet (a JSON document of cards, charts
//! and tables in six fixed categories) into fully resolved rendering
//! configurations. Pairs with the `tearsheet` CLI.
//!
//! ### Features
//! - Eight chart kinds (line, area, bar/column, histogram, pie, heatmap, box plot, x-range)
//! - Charts that cannot be compiled degrade to visible placeholders, never errors
//! - Locale-aware value formatting by semantic type (percent, monetary, duration, ...)
//! - Legacy and current card/table schemas normalized into one shape
//! - Export tables as CSV, dashboards as JSON
//!
//! ### Example
//! ```no_run
//! use tearsheet_charts::{ChartCompiler, Formatter, build_dashboard, storage};
//!
//! let doc = storage::load_tearsheet("tearsheet.json")?;
//! let compiler = ChartCompiler::initialize(Formatter::new("en"));
//! let dashboard = build_dashboard(&doc, &compiler);
//! storage::save_json(&dashboard, "dashboard.json", true)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod cards;
pub mod dashboard;
pub mod error;
pub mod format;
pub mod models;
pub mod storage;
pub mod style;
pub mod tables;
pub mod viz;

pub use dashboard::{Dashboard, build_dashboard};
pub use error::{ChartError, ChartResult};
pub use format::{Formatter, format_duration, format_value};
pub use models::{Category, Scalar, SemanticType, Tearsheet, WidgetType};
pub use style::cubehelix_palette;
pub use viz::{Chart, ChartCompiler, ChartOptions, ModuleRegistry, RendererModule};
