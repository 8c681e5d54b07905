//! Categorical palettes and color interpolation.

/// 10-color categorical palette (d3 `category10`).
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd", "#8c564b", "#e377c2", "#7f7f7f",
    "#bcbd22", "#17becf",
];

/// 20-color categorical palette (d3 `category20`).
pub const CATEGORY20: [&str; 20] = [
    "#1f77b4", "#aec7e8", "#ff7f0e", "#ffbb78", "#2ca02c", "#98df8a", "#d62728", "#ff9896",
    "#9467bd", "#c5b0d5", "#8c564b", "#c49c94", "#e377c2", "#f7b6d2", "#7f7f7f", "#c7c7c7",
    "#bcbd22", "#dbdb8d", "#17becf", "#9edae5",
];

/// Fill of destination-role chord groups.
pub const DESTINATION_FILL: &str = "#444444";

/// Stroke of the lightest network edge.
pub const EDGE_LIGHT: Rgb = Rgb(0xd1, 0xd1, 0xd1);
/// Stroke of the heaviest network edge.
pub const EDGE_DARK: Rgb = Rgb(0x00, 0x00, 0x00);

pub fn category10(index: usize) -> &'static str {
    CATEGORY10[index % CATEGORY10.len()]
}

pub fn category20(index: usize) -> &'static str {
    CATEGORY20[index % CATEGORY20.len()]
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.0, self.1, self.2)
    }

    /// Channel-wise linear blend; `t` is clamped to `[0, 1]`.
    pub fn interpolate(self, other: Rgb, t: f64) -> Rgb {
        let t = if t.is_finite() { t.clamp(0.0, 1.0) } else { 0.0 };
        let mix = |a: u8, b: u8| {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Rgb(
            mix(self.0, other.0),
            mix(self.1, other.1),
            mix(self.2, other.2),
        )
    }
}
