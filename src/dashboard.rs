//! Whole-document assembly: one section per category, every widget resolved.

use crate::cards::{Card, CardView};
use crate::models::{Category, Tearsheet, TearsheetSection, WidgetType};
use crate::tables::{Table, TableView};
use crate::viz::{ChartCompiler, ChartOptions, RendererModule};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeSet;

pub const DASHBOARD_TITLE: &str = "Portfolio Tearsheet";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SectionView {
    pub key: &'static str,
    pub label: &'static str,
    pub available: bool,
    pub charts: Vec<ChartOptions>,
    pub cards: Vec<CardView>,
    pub tables: Vec<TableView>,
    /// Widgets that were skipped, one message each.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Dashboard {
    pub title: &'static str,
    /// Renderer modules the compiled charts rely on.
    pub modules: BTreeSet<RendererModule>,
    pub sections: Vec<SectionView>,
}

/// Compile a full tearsheet. Categories keep their fixed order; a missing
/// category yields an unavailable, empty section.
pub fn build_dashboard(doc: &Tearsheet, compiler: &ChartCompiler) -> Dashboard {
    let mut modules = BTreeSet::new();
    let sections = doc
        .sections()
        .map(|(category, section)| {
            if let Some(s) = section {
                modules.extend(s.charts.iter().filter_map(module_for));
            }
            build_section(category, section, compiler)
        })
        .collect();

    Dashboard {
        title: DASHBOARD_TITLE,
        modules,
        sections,
    }
}

pub fn build_section(
    category: Category,
    section: Option<&TearsheetSection>,
    compiler: &ChartCompiler,
) -> SectionView {
    let mut view = SectionView {
        key: category.key(),
        label: category.display_name(),
        available: section.is_some(),
        charts: Vec::new(),
        cards: Vec::new(),
        tables: Vec::new(),
        warnings: Vec::new(),
    };
    let Some(section) = section else {
        log::debug!("category {} absent from document", category.key());
        return view;
    };

    let fmt = compiler.formatter();
    view.charts = section.charts.iter().map(|c| compiler.compile(c)).collect();

    for (i, raw) in section.cards.iter().enumerate() {
        match Card::from_value(raw) {
            Ok(card) => view.cards.push(card.render(fmt)),
            Err(e) => {
                log::warn!("skipping card {i} in {}: {e}", category.key());
                view.warnings.push(format!("card {i}: {e}"));
            }
        }
    }
    for (i, raw) in section.tables.iter().enumerate() {
        match Table::from_value(raw) {
            Ok(table) => view.tables.push(table.render(fmt)),
            Err(e) => {
                log::warn!("skipping table {i} in {}: {e}", category.key());
                view.warnings.push(format!("table {i}: {e}"));
            }
        }
    }
    view
}

fn module_for(chart: &Value) -> Option<RendererModule> {
    chart
        .get("chartDef")?
        .get("type")?
        .as_str()
        .and_then(WidgetType::from_tag)
        .and_then(RendererModule::required_by)
}
