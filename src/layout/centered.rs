use super::types::FlatNode;
use crate::config::CenteredConfig;

/// Centered-tree placement for one level of a plan diagram.
///
/// The middle sibling anchors at `origin_x + column_pitch / 2` and the
/// rest fan out by whole pitches around it. When the default pitch
/// would land a label too close to the reference column relative to its
/// rendered width, the pitch for that sibling is widened by the label
/// length. `level_index` is 0-based; the whole level shares one row.
pub(super) fn assign_level(
    level_index: usize,
    member_indices: &[usize],
    nodes: &mut [FlatNode],
    config: &CenteredConfig,
) {
    let row_y = config.origin_y + level_index as f32 * config.row_height;

    if level_index == 0 {
        for &index in member_indices {
            nodes[index].x = config.origin_x;
            nodes[index].y = config.origin_y;
        }
        return;
    }

    let n = member_indices.len();
    let center_index = if n % 2 == 0 { n / 2 } else { (n - 1) / 2 };
    let center_x = config.origin_x + config.column_pitch / 2.0;

    for (sibling_index, &index) in member_indices.iter().enumerate() {
        let node = &mut nodes[index];
        node.y = row_y;
        if sibling_index == center_index {
            node.x = center_x;
            continue;
        }
        let delta = sibling_index as f32 - center_index as f32;
        let tentative = center_x + delta * config.column_pitch;
        let label_len = node.name.chars().count() as f32;
        let crowding = (tentative - config.reference_column_x).abs() * delta.abs() / 2.0;
        if crowding < label_len * config.label_width_factor {
            node.x = center_x + delta * (config.column_pitch + label_len);
        } else {
            node.x = tentative;
        }
    }
}
