//! Hover and selection tracking for the grid.
//!
//! [`SelectionController`] turns raw pointer input into hover/selection
//! transitions and reports them to registered [`SelectionListener`]s. It never
//! draws; the grid is borrowed read-only for every call.

use tracing::{debug, info};

use crate::config::{GridConfig, TileSize};
use crate::coords::{self, GridCoord};
use crate::model::{Grid, GridCell};

/// Receives transitions. Every hook defaults to a no-op.
pub trait SelectionListener {
    fn hover_changed(&mut self, _current: Option<&GridCell>, _previous: Option<&GridCell>) {}
    fn selection_changed(&mut self, _current: Option<&GridCell>, _previous: Option<&GridCell>) {}
    /// Second click on the same cell within the double-click window.
    fn cell_activated(&mut self, _cell: &GridCell) {}
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ListenerId(u32);

/// Pointer input in canvas pixel coordinates, processed in arrival order.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PointerInput {
    Move { x: f64, y: f64 },
    Down { x: f64, y: f64 },
    Up { x: f64, y: f64, timestamp_ms: f64 },
    Leave,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SelectionState {
    pub hovered: Option<GridCoord>,
    pub selected: Option<GridCoord>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Hovering(GridCoord),
    Selected {
        selected: GridCoord,
        hovered: Option<GridCoord>,
    },
}

impl SelectionState {
    pub fn phase(&self) -> Phase {
        match (self.selected, self.hovered) {
            (Some(selected), hovered) => Phase::Selected { selected, hovered },
            (None, Some(h)) => Phase::Hovering(h),
            (None, None) => Phase::Idle,
        }
    }
}

#[derive(Clone, Copy, Debug)]
struct Click {
    coord: GridCoord,
    at_ms: f64,
}

pub struct SelectionController {
    state: SelectionState,
    tile: TileSize,
    double_click_ms: f64,
    pressed: bool,
    last_click: Option<Click>,
    listeners: Vec<(ListenerId, Box<dyn SelectionListener>)>,
    next_id: u32,
}

impl SelectionController {
    pub fn new(tile: TileSize, double_click_ms: f64) -> Self {
        Self {
            state: SelectionState::default(),
            tile,
            double_click_ms,
            pressed: false,
            last_click: None,
            listeners: Vec::new(),
            next_id: 0,
        }
    }

    pub fn from_config(cfg: &GridConfig) -> Self {
        Self::new(cfg.tile, cfg.double_click_ms)
    }

    pub fn subscribe(&mut self, listener: Box<dyn SelectionListener>) -> ListenerId {
        let id = ListenerId(self.next_id);
        self.next_id += 1;
        self.listeners.push((id, listener));
        debug!(id = id.0, total = self.listeners.len(), "selection listener added");
        id
    }

    /// Returns false if the id was not registered.
    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        before != self.listeners.len()
    }

    pub fn state(&self) -> SelectionState {
        self.state
    }

    pub fn current_hover(&self) -> Option<GridCoord> {
        self.state.hovered
    }

    pub fn current_selection(&self) -> Option<GridCoord> {
        self.state.selected
    }

    pub fn hovered_cell<'g>(&self, grid: &'g Grid) -> Option<&'g GridCell> {
        self.state.hovered.and_then(|c| grid.cell_at(c))
    }

    pub fn selected_cell<'g>(&self, grid: &'g Grid) -> Option<&'g GridCell> {
        self.state.selected.and_then(|c| grid.cell_at(c))
    }

    pub fn handle(&mut self, grid: &Grid, input: PointerInput) {
        match input {
            PointerInput::Move { x, y } => {
                let target = self
                    .resolve(grid, x, y)
                    .filter(|c| Some(*c) != self.state.selected);
                self.set_hovered(grid, target);
            }
            PointerInput::Down { .. } => self.pressed = true,
            PointerInput::Up { x, y, timestamp_ms } => {
                if !std::mem::take(&mut self.pressed) {
                    return;
                }
                if let Some(coord) = self.resolve(grid, x, y) {
                    self.click(grid, coord, timestamp_ms);
                }
            }
            PointerInput::Leave => self.set_hovered(grid, None),
        }
    }

    /// Drops the selection, if any, and notifies.
    pub fn clear_selection(&mut self, grid: &Grid) {
        self.last_click = None;
        if let Some(previous) = self.state.selected.take() {
            self.notify_selection(grid, None, Some(previous));
        }
    }

    fn resolve(&self, grid: &Grid, x: f64, y: f64) -> Option<GridCoord> {
        let c = coords::screen_to_nearest_cell(x, y, self.tile, grid.offset());
        grid.is_valid_coord(c.x, c.y).then_some(c)
    }

    fn set_hovered(&mut self, grid: &Grid, next: Option<GridCoord>) {
        if self.state.hovered == next {
            return;
        }
        let previous = std::mem::replace(&mut self.state.hovered, next);
        let current = next.and_then(|c| grid.cell_at(c));
        let previous = previous.and_then(|c| grid.cell_at(c));
        debug!(
            current = ?current.map(|c| c.display_label()),
            previous = ?previous.map(|c| c.display_label()),
            "hover changed"
        );
        for (_, l) in self.listeners.iter_mut() {
            l.hover_changed(current, previous);
        }
    }

    fn click(&mut self, grid: &Grid, coord: GridCoord, at_ms: f64) {
        let previous = self.state.selected;
        let next = if previous == Some(coord) { None } else { Some(coord) };
        self.state.selected = next;
        self.notify_selection(grid, next, previous);
        if next.is_some() && self.state.hovered == next {
            self.set_hovered(grid, None);
        }

        let double = self.last_click.is_some_and(|last| {
            last.coord == coord && at_ms - last.at_ms <= self.double_click_ms
        });
        if double {
            self.last_click = None;
            if let Some(cell) = grid.cell_at(coord) {
                info!(cell = %cell.display_label(), "cell activated");
                for (_, l) in self.listeners.iter_mut() {
                    l.cell_activated(cell);
                }
            }
        } else {
            self.last_click = Some(Click { coord, at_ms });
        }
    }

    fn notify_selection(&mut self, grid: &Grid, next: Option<GridCoord>, previous: Option<GridCoord>) {
        let current = next.and_then(|c| grid.cell_at(c));
        let previous = previous.and_then(|c| grid.cell_at(c));
        info!(
            selected = %current.map(|c| c.display_label()).unwrap_or_else(|| "None".into()),
            "selection changed"
        );
        for (_, l) in self.listeners.iter_mut() {
            l.selection_changed(current, previous);
        }
    }
}

/// Logs selection changes and activations.
pub struct LogListener;

impl SelectionListener for LogListener {
    fn selection_changed(&mut self, current: Option<&GridCell>, _previous: Option<&GridCell>) {
        match current {
            Some(c) => info!("Selected: {} - {}", c.display_label(), c.service_name()),
            None => info!("Selection cleared"),
        }
    }

    fn cell_activated(&mut self, cell: &GridCell) {
        info!("Activated: {}", cell.service_name());
    }
}
