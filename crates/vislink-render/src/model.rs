use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutMeta {
    pub diagram_type: String,
    /// Name of the aggregated metric, when the payload carried one.
    pub metric: Option<String>,
    pub effective_config: Value,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

impl Bounds {
    pub fn of_size(width: f64, height: f64) -> Self {
        Self {
            min_x: 0.0,
            min_y: 0.0,
            max_x: width,
            max_y: height,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPoint {
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordGroupLayout {
    pub index: usize,
    /// The key without its role marker.
    pub label: String,
    pub role: String,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
    pub fill: String,
    pub path_d: String,
}

/// One side of a ribbon: the slice of group `index` reserved for `subindex`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChordSubgroupLayout {
    pub index: usize,
    pub subindex: usize,
    pub value: f64,
    pub start_angle: f64,
    pub end_angle: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordRibbonLayout {
    pub source: ChordSubgroupLayout,
    pub target: ChordSubgroupLayout,
    pub fill: String,
    pub path_d: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChordDiagramLayout {
    pub bounds: Option<Bounds>,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub inner_radius: f64,
    pub outer_radius: f64,
    pub padding: f64,
    pub groups: Vec<ChordGroupLayout>,
    pub ribbons: Vec<ChordRibbonLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkNodeLayout {
    pub name: String,
    pub weight: f64,
    pub x: f64,
    pub y: f64,
    pub radius: f64,
    pub color: String,
    pub fixed: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkEdgeLayout {
    pub source_index: usize,
    pub target_index: usize,
    pub weight: f64,
    pub stroke: String,
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkDiagramLayout {
    pub bounds: Option<Bounds>,
    pub width: f64,
    pub height: f64,
    pub iterations: usize,
    pub converged: bool,
    #[serde(default)]
    pub nodes: Vec<NetworkNodeLayout>,
    #[serde(default)]
    pub edges: Vec<NetworkEdgeLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarAxisLayout {
    pub label: String,
    pub angle: f64,
    pub max_value: f64,
    pub line_x2: f64,
    pub line_y2: f64,
    pub label_x: f64,
    pub label_y: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarGraticuleLayout {
    pub level: usize,
    pub r: f64,
    #[serde(default)]
    pub points: Vec<LayoutPoint>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarValueLayout {
    pub axis: String,
    pub normalized_value: f64,
    pub raw_value: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarCurveLayout {
    pub label: String,
    pub color: String,
    #[serde(default)]
    pub values: Vec<RadarValueLayout>,
    #[serde(default)]
    pub points: Vec<LayoutPoint>,
    pub path_d: String,
}

/// Radar geometry. Points are relative to `(center_x, center_y)`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RadarDiagramLayout {
    pub bounds: Option<Bounds>,
    pub width: f64,
    pub height: f64,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub axis_label_factor: f64,
    #[serde(default)]
    pub axes: Vec<RadarAxisLayout>,
    #[serde(default)]
    pub graticules: Vec<RadarGraticuleLayout>,
    #[serde(default)]
    pub curves: Vec<RadarCurveLayout>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum LayoutDiagram {
    ChordDiagram(ChordDiagramLayout),
    NetworkDiagram(NetworkDiagramLayout),
    RadarDiagram(RadarDiagramLayout),
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayoutedDiagram {
    pub meta: LayoutMeta,
    pub layout: LayoutDiagram,
}
