//! Axis configuration shared by the cartesian chart compilers.

use crate::models::{AxisDef, AxisType, PlotBand, StraightLine};
use crate::style::{Rgba, cubehelix_palette};
use crate::viz::types::{
    AxisLabels, AxisOptions, LabelStyle, PlotBandLabel, PlotBandOptions, PlotLineLabel,
    PlotLineOptions, TitleOptions,
};

const PLOT_BAND_OPACITY: f64 = 0.4;
const PLOT_LINE_COLOR: &str = "#FF0000";
const PLOT_LINE_LABEL_COLOR: &str = "rgba(0, 0, 0, 0.6)";

/// Caller-side settings layered over an axis definition. Every `Some` wins.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AxisOverrides {
    pub title: Option<TitleOptions>,
    pub kind: Option<AxisType>,
    pub categories: Option<Vec<String>>,
    pub reversed: Option<bool>,
    pub plot_bands: Option<Vec<PlotBandOptions>>,
    pub plot_lines: Option<Vec<PlotLineOptions>>,
    pub labels: Option<AxisLabels>,
}

impl AxisOverrides {
    /// Title the axis with its label, or with `fallback` when it has none.
    pub fn titled_from(def: Option<&AxisDef>, fallback: &str) -> Self {
        Self {
            title: Some(TitleOptions::text(
                AxisDef::label_text(def).unwrap_or(fallback),
            )),
            ..Self::default()
        }
    }

    /// Categories of the definition, if it has any.
    pub fn with_categories_of(mut self, def: Option<&AxisDef>) -> Self {
        self.categories = def
            .map(|d| d.categories.clone())
            .filter(|c| !c.is_empty());
        self
    }
}

/// Resolve an axis definition plus overrides into renderer axis options.
///
/// Defaults: grid lines on (width 1), title from the label (hidden when absent),
/// bounds from the definition for non-category axes. The axis type is only
/// emitted for the four recognized types.
pub fn configure_axis(def: Option<&AxisDef>, overrides: AxisOverrides) -> AxisOptions {
    let kind = def.and_then(|d| d.kind).filter(|k| k.is_recognized());
    let bounded = kind != Some(AxisType::Category);

    let mut axis = AxisOptions {
        title: TitleOptions {
            text: AxisDef::label_text(def).map(str::to_string),
            align: None,
        },
        grid_line_width: Some(1.0),
        min: def.and_then(|d| d.min).filter(|_| bounded),
        max: def.and_then(|d| d.max).filter(|_| bounded),
        kind,
        ..AxisOptions::default()
    };

    if let Some(title) = overrides.title {
        axis.title = title;
    }
    if let Some(kind) = overrides.kind.filter(|k| k.is_recognized()) {
        axis.kind = Some(kind);
    }
    if let Some(categories) = overrides.categories {
        axis.categories = Some(categories);
    }
    if let Some(reversed) = overrides.reversed {
        axis.reversed = Some(reversed);
    }
    if let Some(bands) = overrides.plot_bands {
        axis.plot_bands = bands;
    }
    if let Some(lines) = overrides.plot_lines {
        axis.plot_lines = lines;
    }
    if let Some(labels) = overrides.labels {
        axis.labels = Some(labels);
    }
    axis
}

/// Give every plot band a color: its own, or the i-th stop of a reversed
/// cubehelix palette sized to the band count, at 40% opacity.
pub fn process_plot_bands(bands: &[PlotBand]) -> Vec<PlotBandOptions> {
    if bands.is_empty() {
        return Vec::new();
    }
    let palette = cubehelix_palette(bands.len(), true);
    bands
        .iter()
        .enumerate()
        .map(|(i, band)| {
            let color = band.color.clone().unwrap_or_else(|| {
                let stop = palette[i.min(palette.len() - 1)];
                Rgba::from_hex(stop)
                    .map(|c| c.with_opacity(PLOT_BAND_OPACITY).to_css())
                    .unwrap_or_else(|| stop.to_string())
            });
            PlotBandOptions {
                from: band.from.clone(),
                to: band.to.clone(),
                color,
                label: band.label.clone().map(|text| PlotBandLabel { text }),
            }
        })
        .collect()
}

/// Dashed red reference lines labelled with their titles.
pub fn process_straight_lines<'a>(
    lines: impl IntoIterator<Item = &'a StraightLine>,
) -> Vec<PlotLineOptions> {
    lines
        .into_iter()
        .map(|line| PlotLineOptions {
            value: line.value.clone(),
            color: PLOT_LINE_COLOR.to_string(),
            width: 1.0,
            dash_style: "Dash".to_string(),
            z_index: 1000,
            label: PlotLineLabel {
                text: line.title.clone(),
                style: LabelStyle {
                    color: Some(PLOT_LINE_LABEL_COLOR.to_string()),
                    font_size: Some("10px".to_string()),
                    ..LabelStyle::default()
                },
            },
        })
        .collect()
}

/// Split reference lines into `(x-axis lines, y-axis lines)`.
///
/// Lines with `vertical == false` go to the x-axis and `vertical == true` to
/// the y-axis. This reads inverted against the field name but is the behavior
/// existing tearsheet producers are written against.
pub fn process_all_axis_straight_lines(
    lines: &[StraightLine],
) -> (Vec<PlotLineOptions>, Vec<PlotLineOptions>) {
    let x_lines = process_straight_lines(lines.iter().filter(|l| !l.vertical));
    let y_lines = process_straight_lines(lines.iter().filter(|l| l.vertical));
    (x_lines, y_lines)
}
