// Canvas drawing for the tier grid. Full redraw on every call; the grid is small.
use web_sys::CanvasRenderingContext2d;

use crate::config::TileSize;
use crate::coords::{self, GridCoord, TileBounds};
use crate::model::Grid;
use crate::state::SelectionState;

const OUTLINE: &str = "rgba(0,0,0,0.3)";
const HOVER: &str = "rgba(255,255,0,0.8)";
const SELECTED: &str = "#58a6ff";
const LABEL: &str = "#0e1116";
const MIN_FONT_PX: f64 = 8.0;

pub struct Scene<'a> {
    pub grid: &'a Grid,
    pub tile: TileSize,
    pub background: &'a str,
    pub width: f64,
    pub height: f64,
    pub selection: SelectionState,
}

fn trace_diamond(ctx: &CanvasRenderingContext2d, b: &TileBounds) {
    ctx.begin_path();
    ctx.move_to(b.points[0].x, b.points[0].y);
    for p in &b.points[1..] {
        ctx.line_to(p.x, p.y);
    }
    ctx.close_path();
}

fn outline(ctx: &CanvasRenderingContext2d, scene: &Scene, coord: GridCoord, color: &str) {
    let b = coords::tile_bounds(coord.x, coord.y, scene.tile, scene.grid.offset());
    ctx.set_stroke_style_str(color);
    ctx.set_line_width(3.0);
    trace_diamond(ctx, &b);
    ctx.stroke();
}

pub fn draw_scene(ctx: &CanvasRenderingContext2d, scene: &Scene) {
    ctx.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0).ok();
    ctx.set_fill_style_str(scene.background);
    ctx.fill_rect(0.0, 0.0, scene.width, scene.height);

    let font_px = (scene.tile.width / 8.0).min(scene.tile.height / 4.0);
    let offset = scene.grid.offset();
    for cell in scene.grid.cells() {
        let c = cell.coord();
        let b = coords::tile_bounds(c.x, c.y, scene.tile, offset);
        ctx.set_fill_style_str(cell.color());
        trace_diamond(ctx, &b);
        ctx.fill();
        ctx.set_stroke_style_str(OUTLINE);
        ctx.set_line_width(1.0);
        ctx.stroke();

        if font_px >= MIN_FONT_PX {
            ctx.set_fill_style_str(LABEL);
            ctx.set_font(&format!("{}px 'Courier New', monospace", font_px.floor()));
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
            let line = font_px * 0.6;
            let env = cell.environment.to_uppercase();
            let tier = cell.tier.to_uppercase();
            ctx.fill_text(&env, b.center.x, b.center.y - line).ok();
            ctx.fill_text(&tier, b.center.x, b.center.y + line).ok();
        }
    }

    let SelectionState { hovered, selected } = scene.selection;
    if let Some(sel) = selected {
        outline(ctx, scene, sel, SELECTED);
    }
    if let Some(h) = hovered.filter(|h| Some(*h) != selected) {
        outline(ctx, scene, h, HOVER);
    }
}
