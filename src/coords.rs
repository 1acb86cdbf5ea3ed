//! Isometric coordinate math.
//!
//! Grid space has `x` running along tiers and `y` along environments. A grid
//! position projects to the *center* of its diamond on screen:
//!
//! ```text
//! screen_x = (x - y) * tile_width / 2
//! screen_y = (x + y) * tile_height / 2
//! ```
//!
//! Everything here is pure and allocation free.

use crate::config::{TileSize, Viewport};

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScreenPoint {
    pub x: f64,
    pub y: f64,
}

impl ScreenPoint {
    pub const ORIGIN: ScreenPoint = ScreenPoint { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Integer grid address. May lie outside any particular grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCoord {
    pub x: i32,
    pub y: i32,
}

impl GridCoord {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Screen footprint of one tile.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TileBounds {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub center: ScreenPoint,
    /// Diamond corners: top, right, bottom, left.
    pub points: [ScreenPoint; 4],
}

/// Axis-aligned box in screen space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Extent {
    pub left: f64,
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
}

impl Extent {
    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

pub fn grid_to_screen(grid_x: f64, grid_y: f64, tile: TileSize) -> ScreenPoint {
    ScreenPoint {
        x: (grid_x - grid_y) * tile.half_width(),
        y: (grid_x + grid_y) * tile.half_height(),
    }
}

/// Inverse of [`grid_to_screen`]; the result is real valued.
pub fn screen_to_grid(screen_x: f64, screen_y: f64, tile: TileSize) -> (f64, f64) {
    let iso_x = screen_x / tile.half_width();
    let iso_y = screen_y / tile.half_height();
    ((iso_x + iso_y) / 2.0, (iso_y - iso_x) / 2.0)
}

pub fn tile_bounds(grid_x: i32, grid_y: i32, tile: TileSize, offset: ScreenPoint) -> TileBounds {
    let projected = grid_to_screen(grid_x as f64, grid_y as f64, tile);
    let (hw, hh) = (tile.half_width(), tile.half_height());
    let cx = projected.x + offset.x;
    let cy = projected.y + offset.y;
    TileBounds {
        left: cx - hw,
        top: cy - hh,
        right: cx + hw,
        bottom: cy + hh,
        center: ScreenPoint::new(cx, cy),
        points: [
            ScreenPoint::new(cx, cy - hh),
            ScreenPoint::new(cx + hw, cy),
            ScreenPoint::new(cx, cy + hh),
            ScreenPoint::new(cx - hw, cy),
        ],
    }
}

/// Grid position whose diamond contains the screen point.
///
/// Each axis is rounded half away from zero (`f64::round`). Because rounding
/// happens in grid space, the cell regions are exactly the tile diamonds.
/// The result is not bounds checked.
pub fn screen_to_nearest_cell(
    screen_x: f64,
    screen_y: f64,
    tile: TileSize,
    offset: ScreenPoint,
) -> GridCoord {
    let (gx, gy) = screen_to_grid(screen_x - offset.x, screen_y - offset.y, tile);
    GridCoord {
        x: gx.round() as i32,
        y: gy.round() as i32,
    }
}

/// Bounding-box containment test. Over-reports near the diamond corners,
/// where neighbouring tiles' boxes overlap; see [`point_in_diamond`].
pub fn point_in_tile(
    point: ScreenPoint,
    grid_x: i32,
    grid_y: i32,
    tile: TileSize,
    offset: ScreenPoint,
) -> bool {
    let b = tile_bounds(grid_x, grid_y, tile, offset);
    point.x >= b.left && point.x <= b.right && point.y >= b.top && point.y <= b.bottom
}

/// Exact containment in the tile's diamond, edges included.
pub fn point_in_diamond(
    point: ScreenPoint,
    grid_x: i32,
    grid_y: i32,
    tile: TileSize,
    offset: ScreenPoint,
) -> bool {
    let b = tile_bounds(grid_x, grid_y, tile, offset);
    let dx = (point.x - b.center.x).abs() / tile.half_width();
    let dy = (point.y - b.center.y).abs() / tile.half_height();
    dx + dy <= 1.0
}

/// Screen box covering every tile of a `cols x rows` grid drawn at zero offset.
pub fn grid_extent(cols: usize, rows: usize, tile: TileSize) -> Extent {
    let (cols, rows) = (cols as f64, rows as f64);
    Extent {
        left: -rows * tile.half_width(),
        top: -tile.half_height(),
        right: cols * tile.half_width(),
        bottom: (cols + rows - 1.0) * tile.half_height(),
    }
}

/// Offset that puts the middle of `extent` at the middle of the viewport.
pub fn center_offset(extent: Extent, viewport: Viewport) -> ScreenPoint {
    ScreenPoint {
        x: (viewport.width - (extent.left + extent.right)) / 2.0,
        y: (viewport.height - (extent.top + extent.bottom)) / 2.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const TILE: TileSize = TileSize {
        width: 64.0,
        height: 32.0,
    };

    #[test]
    fn projects_reference_tiles() {
        assert_eq!(grid_to_screen(0.0, 0.0, TILE), ScreenPoint::new(0.0, 0.0));
        assert_eq!(grid_to_screen(1.0, 0.0, TILE), ScreenPoint::new(32.0, 16.0));
        assert_eq!(grid_to_screen(0.0, 1.0, TILE), ScreenPoint::new(-32.0, 16.0));
        assert_eq!(grid_to_screen(3.0, 2.0, TILE), ScreenPoint::new(32.0, 80.0));
    }

    #[test]
    fn inverse_recovers_grid_position() {
        assert_eq!(screen_to_grid(32.0, 80.0, TILE), (3.0, 2.0));
        assert_eq!(screen_to_grid(-32.0, 16.0, TILE), (0.0, 1.0));
    }

    #[test]
    fn bounds_wind_top_right_bottom_left() {
        let b = tile_bounds(1, 0, TILE, ScreenPoint::new(100.0, 50.0));
        assert_eq!(b.center, ScreenPoint::new(132.0, 66.0));
        assert_eq!((b.left, b.top, b.right, b.bottom), (100.0, 50.0, 164.0, 82.0));
        assert_eq!(
            b.points,
            [
                ScreenPoint::new(132.0, 50.0),
                ScreenPoint::new(164.0, 66.0),
                ScreenPoint::new(132.0, 82.0),
                ScreenPoint::new(100.0, 66.0),
            ]
        );
    }

    #[test]
    fn nearest_cell_can_leave_the_grid() {
        let c = screen_to_nearest_cell(-200.0, -200.0, TILE, ScreenPoint::ORIGIN);
        assert!(c.x < 0 || c.y < 0);
    }

    #[test]
    fn nearest_cell_rounds_half_away_from_zero() {
        // Exactly on the edge shared by (0,0) and (1,0).
        let c = screen_to_nearest_cell(16.0, 8.0, TILE, ScreenPoint::ORIGIN);
        assert_eq!(c, GridCoord::new(1, 0));
        // Mirror image on the negative side rounds away from zero too.
        let c = screen_to_nearest_cell(-16.0, -8.0, TILE, ScreenPoint::ORIGIN);
        assert_eq!(c, GridCoord::new(-1, 0));
    }

    #[test]
    fn bounding_box_test_overreports_at_corners() {
        // Top-left corner of the (0,0) box is outside its diamond, inside (-1,0)'s.
        let corner = ScreenPoint::new(-30.0, -14.0);
        assert!(point_in_tile(corner, 0, 0, TILE, ScreenPoint::ORIGIN));
        assert!(!point_in_diamond(corner, 0, 0, TILE, ScreenPoint::ORIGIN));
        assert_eq!(
            screen_to_nearest_cell(corner.x, corner.y, TILE, ScreenPoint::ORIGIN),
            GridCoord::new(-1, 0)
        );
    }

    #[test]
    fn extent_of_reference_grid() {
        let e = grid_extent(4, 3, TILE);
        assert_eq!((e.left, e.top, e.right, e.bottom), (-96.0, -16.0, 128.0, 96.0));
        assert_eq!(e.width(), 224.0);
        assert_eq!(e.height(), 112.0);
    }

    #[test]
    fn centering_splits_the_margin() {
        let e = grid_extent(4, 3, TILE);
        let off = center_offset(
            e,
            Viewport {
                width: 1024.0,
                height: 768.0,
            },
        );
        assert_eq!(off.x + e.left, 1024.0 - (off.x + e.right));
        assert_eq!(off.y + e.top, 768.0 - (off.y + e.bottom));
    }

    proptest! {
        #[test]
        fn round_trip_through_screen_space(
            x in 0i32..4, y in 0i32..3,
            tw in 1.0f64..512.0, th in 1.0f64..512.0,
            ox in -2000.0f64..2000.0, oy in -2000.0f64..2000.0,
        ) {
            let tile = TileSize { width: tw, height: th };
            let offset = ScreenPoint::new(ox, oy);
            let p = grid_to_screen(x as f64, y as f64, tile);
            prop_assert_eq!(
                screen_to_nearest_cell(p.x + ox, p.y + oy, tile, offset),
                GridCoord::new(x, y)
            );
            let (gx, gy) = screen_to_grid(p.x, p.y, tile);
            prop_assert!((gx - x as f64).abs() < 1e-9);
            prop_assert!((gy - y as f64).abs() < 1e-9);
        }

        #[test]
        fn nearest_cell_matches_diamond(
            x in -5i32..10, y in -5i32..10,
            u in -0.49f64..0.49, v in -0.49f64..0.49,
            tw in 8.0f64..256.0, th in 8.0f64..256.0,
        ) {
            let tile = TileSize { width: tw, height: th };
            let b = tile_bounds(x, y, tile, ScreenPoint::ORIGIN);
            // |u| + |v| < 0.98 keeps the point strictly inside the diamond.
            let p = ScreenPoint::new(
                b.center.x + u * tile.half_width(),
                b.center.y + v * tile.half_height(),
            );
            prop_assert!(point_in_diamond(p, x, y, tile, ScreenPoint::ORIGIN));
            prop_assert!(point_in_tile(p, x, y, tile, ScreenPoint::ORIGIN));
            prop_assert_eq!(
                screen_to_nearest_cell(p.x, p.y, tile, ScreenPoint::ORIGIN),
                GridCoord::new(x, y)
            );
        }
    }
}
