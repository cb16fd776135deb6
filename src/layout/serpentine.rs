use super::types::FlatNode;
use crate::config::SerpentineConfig;

/// Serpentine-grid placement for wait-for chains: rows of four that
/// alternate direction, so a mostly linear chain wraps compactly
/// instead of marching off one side of the canvas.
///
/// Indices are 1-based over flatten order. A `pos == 0` node closes the
/// previous row using the first entry of the next row's table, which is
/// what turns the alternation into a continuous snake.
pub(super) fn assign(nodes: &mut [FlatNode], config: &SerpentineConfig) {
    let mut reversed = config.columns;
    reversed.reverse();

    for (i, node) in nodes.iter_mut().enumerate() {
        let idx = i + 1;
        let group = idx / 4;
        let pos = idx % 4;
        let table = if group % 2 == 0 {
            &config.columns
        } else {
            &reversed
        };
        node.x = if pos > 0 { table[pos - 1] } else { table[0] };
        node.y = if pos == 0 {
            config.origin_y + config.row_height * (group as f32 - 1.0)
        } else {
            config.origin_y + config.row_height * group as f32
        };
    }

    // The chain head is always anchored at the origin.
    if let Some(first) = nodes.first_mut() {
        first.x = config.origin_x;
        first.y = config.origin_y;
    }
}
