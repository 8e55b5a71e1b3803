//! Colors for compiled charts: the default series palette, the sequential
//! cubehelix ramp used for plot bands, and the small amount of color math the
//! compilers need (opacity, brightening, CSS output).
//!
//! # Example
//!
//! ```rust
//! use tearsheet_charts::style::{cubehelix_palette, Rgba};
//!
//! let ramp = cubehelix_palette(4, false);
//! assert_eq!(ramp.len(), 4);
//!
//! let band = Rgba::from_hex(ramp[0]).unwrap().with_opacity(0.4);
//! assert_eq!(band.to_css(), "rgba(26,21,48,0.4)");
//! ```
//!
//! All functions are deterministic: identical inputs always produce identical outputs.

/// RGBA color with a fractional alpha channel.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f64,
}

impl Rgba {
    /// Create a new RGBA color.
    pub fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Create an opaque RGB color.
    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Parse `#rrggbb` or `#rgb`. Returns `None` for anything else.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |s: &str| u8::from_str_radix(s, 16).ok();
        match digits.len() {
            6 => Some(Self::rgb(
                channel(&digits[0..2])?,
                channel(&digits[2..4])?,
                channel(&digits[4..6])?,
            )),
            3 => {
                let expand = |i: usize| channel(&digits[i..=i].repeat(2));
                Some(Self::rgb(expand(0)?, expand(1)?, expand(2)?))
            }
            _ => None,
        }
    }

    /// Same color with its alpha replaced.
    pub fn with_opacity(self, alpha: f64) -> Self {
        Self { a: alpha, ..self }
    }

    /// Shift every channel by `amount * 255` (truncated), clamped to 0..=255.
    /// Positive amounts lighten, negative darken.
    pub fn brighten(self, amount: f64) -> Self {
        let shift = (amount * 255.0).trunc() as i32;
        let adjust = |c: u8| (c as i32 + shift).clamp(0, 255) as u8;
        Self {
            r: adjust(self.r),
            g: adjust(self.g),
            b: adjust(self.b),
            a: self.a,
        }
    }

    /// CSS color string: `rgb(r,g,b)` when opaque, `rgba(r,g,b,a)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 1.0 {
            format!("rgb({},{},{})", self.r, self.g, self.b)
        } else {
            format!("rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

/// Default series colors, handed to the renderer and used when a series has none.
pub const DEFAULT_COLORS: [&str; 10] = [
    "#2f7ed8", // blue
    "#0d233a", // navy
    "#8bbc21", // green
    "#910000", // dark red
    "#1aadce", // cyan
    "#492970", // purple
    "#f28f43", // orange
    "#77a1e5", // light blue
    "#c42525", // red
    "#a6c96a", // light green
];

/// First default color; heatmap gradients, box fills and outliers key off it.
pub const PRIMARY_COLOR: &str = DEFAULT_COLORS[0];

/// Get a color from the default palette.
#[inline]
pub fn default_color(idx: usize) -> &'static str {
    DEFAULT_COLORS[idx % DEFAULT_COLORS.len()]
}

/// 16-stop cubehelix ramp, dark navy through teal to pale yellow.
const CUBEHELIX16: [&str; 16] = [
    "#1a1530", "#25214d", "#2c2e69", "#2f3f84", "#2d5199", "#2863a7", "#2376b3", "#1e88ba",
    "#1c9cbc", "#24aeba", "#35bfb4", "#50cea9", "#73dc9b", "#9be68c", "#c5ec7d", "#f0ef77",
];

/// Sample `count` evenly spaced stops from the cubehelix ramp.
///
/// Index `i` maps to `floor(i * 15 / (count - 1))`, so counts above 16 repeat
/// stops. `count <= 1` yields only the first stop. `reverse` flips the sampled
/// sequence; it does not change which stops are sampled.
pub fn cubehelix_palette(count: usize, reverse: bool) -> Vec<&'static str> {
    if count <= 1 {
        return vec![CUBEHELIX16[0]];
    }
    let last = CUBEHELIX16.len() - 1;
    let mut out: Vec<&'static str> = (0..count)
        .map(|i| CUBEHELIX16[i * last / (count - 1)])
        .collect();
    if reverse {
        out.reverse();
    }
    out
}
