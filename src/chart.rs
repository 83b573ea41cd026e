//! Doughnut chart of the scanned root's immediate children.
//!
//! Aggregation is pure (top entries by size, remainder folded into a
//! synthetic "Others" slice); drawing goes straight to a 2d canvas context.
//! When no canvas or context is available the caller falls back to a
//! textual placeholder instead of failing the render.

use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::types::FileNode;

/// Fixed slice palette, cycled by slot index.
pub const PALETTE: [&str; 10] = [
    "#3b82f6", "#ef4444", "#22c55e", "#eab308", "#a855f7",
    "#ec4899", "#6366f1", "#14b8a6", "#f97316", "#64748b",
];

/// Upper bound on rendered slices, the synthetic remainder included.
pub const MAX_SLICES: usize = 10;

pub const OTHERS_LABEL: &str = "Others";

// Matches the panel background so the doughnut hole blends in.
const HOLE_COLOR: &str = "#0f1117";

#[derive(Debug, Clone, PartialEq)]
pub struct ChartSlice {
    pub label: String,
    pub size: u64,
    pub color: &'static str,
}

/// Aggregate the root's immediate children into chart slices: sort by size
/// descending and keep at most `MAX_SLICES` entries. With more children
/// than that, the top `MAX_SLICES - 1` are kept and everything else is
/// summed into a trailing "Others" slice.
pub fn top_slices(root: &FileNode) -> Vec<ChartSlice> {
    let mut entries: Vec<(&str, u64)> = root
        .children
        .iter()
        .map(|child| (child.name.as_str(), child.size))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1));

    let mut slices: Vec<ChartSlice> = Vec::with_capacity(entries.len().min(MAX_SLICES));
    if entries.len() > MAX_SLICES {
        let rest: u64 = entries[MAX_SLICES - 1..].iter().map(|(_, size)| size).sum();
        entries.truncate(MAX_SLICES - 1);
        for (label, size) in &entries {
            slices.push(ChartSlice { label: (*label).to_string(), size: *size, color: "" });
        }
        slices.push(ChartSlice { label: OTHERS_LABEL.to_string(), size: rest, color: "" });
    } else {
        for (label, size) in &entries {
            slices.push(ChartSlice { label: (*label).to_string(), size: *size, color: "" });
        }
    }
    for (i, slice) in slices.iter_mut().enumerate() {
        slice.color = PALETTE[i % PALETTE.len()];
    }
    slices
}

/// Draw `slices` as a doughnut on the canvas with the given element id.
/// Clears the previous drawing first; an empty or all-zero input leaves the
/// canvas blank. Errors mean "no charting capability here".
pub fn draw_doughnut(canvas_id: &str, slices: &[ChartSlice]) -> Result<(), String> {
    let document = web_sys::window()
        .and_then(|win| win.document())
        .ok_or_else(|| "document unavailable".to_string())?;
    let canvas: HtmlCanvasElement = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| "chart canvas missing".to_string())?
        .dyn_into()
        .map_err(|_| "chart target is not a canvas".to_string())?;
    let ctx: CanvasRenderingContext2d = canvas
        .get_context("2d")
        .map_err(|_| "2d context unavailable".to_string())?
        .ok_or_else(|| "2d context unavailable".to_string())?
        .dyn_into()
        .map_err(|_| "2d context unavailable".to_string())?;

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;
    ctx.clear_rect(0.0, 0.0, width, height);

    let total: u64 = slices.iter().map(|s| s.size).sum();
    if total == 0 {
        return Ok(());
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = cx.min(cy) * 0.9;
    let full_turn = 2.0 * std::f64::consts::PI;

    // start at twelve o'clock
    let mut start = -std::f64::consts::FRAC_PI_2;
    for slice in slices {
        let sweep = slice.size as f64 / total as f64 * full_turn;
        ctx.begin_path();
        ctx.move_to(cx, cy);
        ctx.arc(cx, cy, radius, start, start + sweep)
            .map_err(|_| "arc drawing failed".to_string())?;
        ctx.close_path();
        ctx.set_fill_style_str(slice.color);
        ctx.fill();
        start += sweep;
    }

    // punch the hole for the doughnut look
    ctx.begin_path();
    ctx.arc(cx, cy, radius * 0.55, 0.0, full_turn)
        .map_err(|_| "arc drawing failed".to_string())?;
    ctx.set_fill_style_str(HOLE_COLOR);
    ctx.fill();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::NodeKind;

    fn file(name: &str, size: u64) -> FileNode {
        FileNode { name: name.into(), kind: NodeKind::File, size, children: Vec::new() }
    }

    fn root(children: Vec<FileNode>) -> FileNode {
        let size = children.iter().map(|c| c.size).sum();
        FileNode { name: "root".into(), kind: NodeKind::Directory, size, children }
    }

    #[test]
    fn few_children_need_no_remainder() {
        let tree = root(vec![file("a", 3), file("b", 7), file("c", 5)]);
        let slices = top_slices(&tree);
        assert_eq!(slices.len(), 3);
        assert_eq!(slices[0].label, "b");
        assert_eq!(slices[1].label, "c");
        assert_eq!(slices[2].label, "a");
        assert!(slices.iter().all(|s| s.label != OTHERS_LABEL));
    }

    #[test]
    fn exactly_ten_children_fill_all_slots_without_others() {
        let tree = root((0..10).map(|i| file(&format!("c{}", i), 100 - i)).collect());
        let slices = top_slices(&tree);
        assert_eq!(slices.len(), 10);
        assert!(slices.iter().all(|s| s.label != OTHERS_LABEL));
    }

    #[test]
    fn eleven_children_fold_the_tail_into_others() {
        let sizes = [5u64, 1, 4, 1, 5, 9, 2, 6, 5, 3, 5];
        let tree = root(
            sizes
                .iter()
                .enumerate()
                .map(|(i, &size)| file(&format!("c{}", i), size))
                .collect(),
        );
        let slices = top_slices(&tree);
        assert_eq!(slices.len(), 10);

        // first nine ranks never increase and match the sorted input
        let top: Vec<u64> = slices[..9].iter().map(|s| s.size).collect();
        assert_eq!(top, vec![9, 6, 5, 5, 5, 5, 4, 3, 2]);
        assert!(top.windows(2).all(|w| w[0] >= w[1]));

        // the tenth slot is the synthetic remainder summing the true tail
        assert_eq!(slices[9].label, OTHERS_LABEL);
        let total: u64 = sizes.iter().sum();
        assert_eq!(slices[9].size, total - top.iter().sum::<u64>());
        assert_eq!(slices[9].size, 2);
    }

    #[test]
    fn palette_is_assigned_by_slot() {
        let tree = root((0..11).map(|i| file(&format!("c{}", i), 11 - i)).collect());
        let slices = top_slices(&tree);
        for (i, slice) in slices.iter().enumerate() {
            assert_eq!(slice.color, PALETTE[i % PALETTE.len()]);
        }
    }

    #[test]
    fn empty_root_yields_no_slices() {
        assert!(top_slices(&root(Vec::new())).is_empty());
    }
}
