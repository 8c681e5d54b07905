use crate::model::{
    Bounds, ChordDiagramLayout, ChordGroupLayout, ChordRibbonLayout, ChordSubgroupLayout,
};
use crate::palette;
use crate::path;
use std::f64::consts::TAU;
use vislink_core::{ChordMatrix, ChordOptions, Role};

/// Lays the matrix out on a circle.
///
/// Each group gets an arc proportional to its row sum, with `padding` radians between groups.
/// Within a group, the slices for each column are ordered by value (descending by default).
/// Every unordered pair with a non-zero cell becomes one ribbon whose source is the larger side.
/// Ribbons always take the categorical color of their source index, even for destination groups.
pub fn layout_chord_diagram(matrix: &ChordMatrix, opts: &ChordOptions) -> ChordDiagramLayout {
    let n = matrix.len();
    let inner_radius = opts.width.min(opts.height) * 0.41;
    let outer_radius = inner_radius * 1.1;

    let group_sums: Vec<f64> = (0..n).map(|i| matrix.row_sum(i)).collect();
    let total: f64 = group_sums.iter().sum();
    let k = if total > 0.0 {
        ((TAU - opts.padding * n as f64) / total).max(0.0)
    } else {
        0.0
    };

    // subgroups[i][j]: slice of group i facing group j.
    let mut subgroups: Vec<Vec<ChordSubgroupLayout>> = Vec::with_capacity(n);
    let mut groups: Vec<ChordGroupLayout> = Vec::with_capacity(n);
    let mut x = 0.0f64;
    for (i, (row, label)) in matrix.matrix().iter().zip(matrix.labels()).enumerate() {
        let cell = |j: usize| row.get(j).copied().unwrap_or(0.0);
        let mut order: Vec<usize> = (0..n).collect();
        if opts.sort_subgroups_descending {
            order.sort_by(|&a, &b| cell(b).total_cmp(&cell(a)));
        }

        let x0 = x;
        let mut slices: Vec<Option<ChordSubgroupLayout>> = vec![None; n];
        for j in order {
            let value = cell(j);
            let start_angle = x;
            x += value * k;
            slices[j] = Some(ChordSubgroupLayout {
                index: i,
                subindex: j,
                value,
                start_angle,
                end_angle: x,
            });
        }
        subgroups.push(slices.into_iter().flatten().collect());

        let fill = match label.role {
            Role::Destination => palette::DESTINATION_FILL.to_string(),
            Role::Source => palette::category10(i).to_string(),
        };
        groups.push(ChordGroupLayout {
            index: i,
            label: label.key.to_string(),
            role: label.role.as_str().to_string(),
            value: group_sums[i],
            start_angle: x0,
            end_angle: x,
            fill,
            path_d: path::annulus_sector(inner_radius, outer_radius, x0, x),
        });
        x += opts.padding;
    }

    let mut ribbons: Vec<ChordRibbonLayout> = Vec::new();
    for i in 0..n {
        for j in i..n {
            let (Some(a), Some(b)) = (
                subgroups.get(i).and_then(|g| g.get(j)),
                subgroups.get(j).and_then(|g| g.get(i)),
            ) else {
                continue;
            };
            if a.value == 0.0 && b.value == 0.0 {
                continue;
            }
            let (source, target) = if a.value < b.value { (b, a) } else { (a, b) };
            ribbons.push(ChordRibbonLayout {
                fill: palette::category10(source.index).to_string(),
                path_d: path::ribbon(
                    inner_radius,
                    (source.start_angle, source.end_angle),
                    (target.start_angle, target.end_angle),
                ),
                source: source.clone(),
                target: target.clone(),
            });
        }
    }

    tracing::debug!(
        groups = groups.len(),
        ribbons = ribbons.len(),
        "chord layout"
    );

    ChordDiagramLayout {
        bounds: Some(Bounds::of_size(opts.width, opts.height)),
        width: opts.width,
        height: opts.height,
        center_x: opts.width / 2.0,
        center_y: opts.height / 2.0,
        inner_radius,
        outer_radius,
        padding: opts.padding,
        groups,
        ribbons,
    }
}
