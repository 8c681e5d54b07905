use crate::model::{
    Bounds, LayoutPoint, RadarAxisLayout, RadarCurveLayout, RadarDiagramLayout,
    RadarGraticuleLayout, RadarValueLayout,
};
use crate::palette;
use crate::path;
use vislink_core::{RadarModel, VislinkConfig};

/// Frame of a radar diagram.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RadarFrame {
    pub width: f64,
    pub height: f64,
    /// Concentric levels; `levels - 1` graticule polygons are drawn inside the outer rim.
    pub levels: usize,
    pub axis_label_factor: f64,
}

impl Default for RadarFrame {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
            levels: 10,
            axis_label_factor: 1.05,
        }
    }
}

impl RadarFrame {
    /// Reads `radar.width`, `radar.height`, `radar.levels` and `radar.axisLabelFactor`.
    pub fn from_config(cfg: &VislinkConfig) -> Self {
        let d = Self::default();
        Self {
            width: cfg.get_f64("radar.width").unwrap_or(d.width),
            height: cfg.get_f64("radar.height").unwrap_or(d.height),
            levels: cfg
                .get_u64("radar.levels")
                .map(|n| n as usize)
                .unwrap_or(d.levels),
            axis_label_factor: cfg
                .get_f64("radar.axisLabelFactor")
                .unwrap_or(d.axis_label_factor),
        }
    }
}

fn polar_xy(radius: f64, angle: f64) -> LayoutPoint {
    LayoutPoint {
        x: radius * angle.cos(),
        y: radius * angle.sin(),
    }
}

fn axis_angle(i: usize, axis_count: usize) -> f64 {
    -std::f64::consts::FRAC_PI_2 + (i as f64) * (std::f64::consts::TAU / (axis_count as f64))
}

pub fn layout_radar_diagram(model: &RadarModel, frame: &RadarFrame) -> RadarDiagramLayout {
    let center_x = frame.width / 2.0;
    let center_y = frame.height / 2.0;
    let radius = frame.width.min(frame.height) / 2.0;
    let axis_count = model.axes.len();

    let axes: Vec<RadarAxisLayout> = model
        .axes
        .iter()
        .enumerate()
        .map(|(i, label)| {
            let angle = axis_angle(i, axis_count);
            let line = polar_xy(radius, angle);
            let text = polar_xy(radius * frame.axis_label_factor, angle);
            RadarAxisLayout {
                label: label.clone(),
                angle,
                max_value: model.axis_max.get(i).copied().unwrap_or(0.0),
                line_x2: line.x,
                line_y2: line.y,
                label_x: text.x,
                label_y: text.y,
            }
        })
        .collect();

    let mut graticules: Vec<RadarGraticuleLayout> = Vec::new();
    if axis_count > 0 && frame.levels > 1 {
        for level in 1..frame.levels {
            let r = radius * (level as f64) / (frame.levels as f64);
            graticules.push(RadarGraticuleLayout {
                level,
                r,
                points: (0..axis_count)
                    .map(|i| polar_xy(r, axis_angle(i, axis_count)))
                    .collect(),
            });
        }
    }

    let curves: Vec<RadarCurveLayout> = model
        .series
        .iter()
        .enumerate()
        .map(|(idx, s)| {
            let points: Vec<LayoutPoint> = s
                .entries
                .iter()
                .enumerate()
                .map(|(i, e)| polar_xy(radius * e.normalized_value, axis_angle(i, axis_count)))
                .collect();
            RadarCurveLayout {
                label: s.split.to_string(),
                color: palette::category10(idx).to_string(),
                values: s
                    .entries
                    .iter()
                    .map(|e| RadarValueLayout {
                        axis: e.axis.clone(),
                        normalized_value: e.normalized_value,
                        raw_value: e.raw_value,
                    })
                    .collect(),
                path_d: path::closed_polygon(&points),
                points,
            }
        })
        .collect();

    tracing::debug!(
        axes = axes.len(),
        curves = curves.len(),
        graticules = graticules.len(),
        "radar layout"
    );

    RadarDiagramLayout {
        bounds: Some(Bounds::of_size(frame.width, frame.height)),
        width: frame.width,
        height: frame.height,
        center_x,
        center_y,
        radius,
        axis_label_factor: frame.axis_label_factor,
        axes,
        graticules,
        curves,
    }
}
