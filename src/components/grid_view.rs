use std::cell::RefCell;
use std::rc::Rc;

use tracing::{debug, error};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    CanvasRenderingContext2d, Event, EventTarget, HtmlCanvasElement, KeyboardEvent, MouseEvent,
};
use yew::prelude::*;

use crate::config::{GridConfig, Viewport};
use crate::model::{Grid, GridCell};
use crate::render::{Scene, draw_scene};
use crate::state::{LogListener, PointerInput, SelectionController, SelectionListener};

#[derive(Properties, PartialEq, Clone)]
pub struct GridViewProps {
    pub grid: Grid,
    pub config: Rc<GridConfig>,
    pub on_hover: Callback<Option<GridCell>>,
    pub on_select: Callback<Option<GridCell>>,
    pub on_activate: Callback<GridCell>,
}

/// Forwards controller notifications into yew callbacks.
struct CallbackListener {
    on_hover: Callback<Option<GridCell>>,
    on_select: Callback<Option<GridCell>>,
    on_activate: Callback<GridCell>,
}

impl SelectionListener for CallbackListener {
    fn hover_changed(&mut self, current: Option<&GridCell>, _previous: Option<&GridCell>) {
        self.on_hover.emit(current.cloned());
    }

    fn selection_changed(&mut self, current: Option<&GridCell>, _previous: Option<&GridCell>) {
        self.on_select.emit(current.cloned());
    }

    fn cell_activated(&mut self, cell: &GridCell) {
        self.on_activate.emit(cell.clone());
    }
}

struct Listener {
    target: EventTarget,
    event: &'static str,
    callback: Closure<dyn FnMut(Event)>,
}

/// DOM listeners owned by the mounted canvas; removed on drop.
#[derive(Default)]
struct CanvasBindings {
    listeners: Vec<Listener>,
}

impl CanvasBindings {
    fn listen<F>(&mut self, target: &EventTarget, event: &'static str, f: F) -> Result<(), JsValue>
    where
        F: FnMut(Event) + 'static,
    {
        let callback = Closure::wrap(Box::new(f) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(event, callback.as_ref().unchecked_ref())?;
        self.listeners.push(Listener {
            target: target.clone(),
            event,
            callback,
        });
        Ok(())
    }
}

impl Drop for CanvasBindings {
    fn drop(&mut self) {
        for l in &self.listeners {
            let _ = l
                .target
                .remove_event_listener_with_callback(l.event, l.callback.as_ref().unchecked_ref());
        }
        debug!(count = self.listeners.len(), "canvas listeners removed");
    }
}

/// Pointer position relative to the canvas, whichever element received the event.
fn canvas_point(canvas: &HtmlCanvasElement, e: &MouseEvent) -> (f64, f64) {
    let rect = canvas.get_bounding_client_rect();
    (
        e.client_x() as f64 - rect.left(),
        e.client_y() as f64 - rect.top(),
    )
}

fn bind_canvas(
    canvas_ref: &NodeRef,
    grid: Rc<RefCell<Grid>>,
    controller: Rc<RefCell<SelectionController>>,
    config: Rc<GridConfig>,
) -> Result<CanvasBindings, JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no global window"))?;
    let canvas = canvas_ref
        .cast::<HtmlCanvasElement>()
        .ok_or_else(|| JsValue::from_str("canvas not mounted"))?;
    let ctx = canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)?;

    let fit_to_window: Rc<dyn Fn()> = {
        let window = window.clone();
        let canvas = canvas.clone();
        let grid = grid.clone();
        let config = config.clone();
        Rc::new(move || {
            let width = window
                .inner_width()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(config.viewport.width)
                .max(0.0);
            let height = window
                .inner_height()
                .ok()
                .and_then(|v| v.as_f64())
                .unwrap_or(config.viewport.height)
                .max(0.0);
            canvas.set_width(width as u32);
            canvas.set_height(height as u32);
            let offset = grid
                .borrow_mut()
                .recompute_offset(Viewport { width, height }, config.tile);
            debug!(width, height, offset_x = offset.x, offset_y = offset.y, "viewport fitted");
        })
    };

    let draw: Rc<dyn Fn()> = {
        let canvas = canvas.clone();
        let grid = grid.clone();
        let controller = controller.clone();
        let config = config.clone();
        Rc::new(move || {
            if !canvas.is_connected() {
                return;
            }
            let grid = grid.borrow();
            let scene = Scene {
                grid: &grid,
                tile: config.tile,
                background: &config.background,
                width: canvas.width() as f64,
                height: canvas.height() as f64,
                selection: controller.borrow().state(),
            };
            draw_scene(&ctx, &scene);
        })
    };

    fit_to_window();
    draw();

    // Feeds one pointer event through the controller, then redraws.
    let dispatch = {
        let grid = grid.clone();
        let controller = controller.clone();
        let draw = draw.clone();
        Rc::new(move |input: PointerInput| {
            controller.borrow_mut().handle(&grid.borrow(), input);
            draw();
        })
    };
    let on_mouse = |map: fn(&MouseEvent, (f64, f64)) -> Option<PointerInput>| {
        let canvas = canvas.clone();
        let dispatch = dispatch.clone();
        move |ev: Event| {
            let Some(e) = ev.dyn_ref::<MouseEvent>() else {
                return;
            };
            if let Some(input) = map(e, canvas_point(&canvas, e)) {
                dispatch(input);
            }
        }
    };

    let mut bindings = CanvasBindings::default();
    bindings.listen(
        &canvas,
        "mousemove",
        on_mouse(|_, (x, y)| Some(PointerInput::Move { x, y })),
    )?;
    bindings.listen(
        &canvas,
        "mousedown",
        on_mouse(|e, (x, y)| (e.button() == 0).then_some(PointerInput::Down { x, y })),
    )?;
    bindings.listen(
        &window,
        "mouseup",
        on_mouse(|e, (x, y)| {
            (e.button() == 0).then_some(PointerInput::Up {
                x,
                y,
                timestamp_ms: e.time_stamp(),
            })
        }),
    )?;
    bindings.listen(&canvas, "mouseleave", {
        let dispatch = dispatch.clone();
        move |_| dispatch(PointerInput::Leave)
    })?;
    bindings.listen(&window, "resize", {
        let draw = draw.clone();
        move |_| {
            fit_to_window();
            draw();
        }
    })?;
    bindings.listen(&window, "keydown", move |ev: Event| {
        let Some(e) = ev.dyn_ref::<KeyboardEvent>() else {
            return;
        };
        if e.key() == "Escape" {
            controller.borrow_mut().clear_selection(&grid.borrow());
            draw();
        }
    })?;
    Ok(bindings)
}

#[function_component(GridView)]
pub fn grid_view(props: &GridViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let grid = use_mut_ref(|| props.grid.clone());
    let controller = use_mut_ref(|| SelectionController::from_config(&props.config));

    {
        let canvas_ref = canvas_ref.clone();
        let grid = grid.clone();
        let controller = controller.clone();
        let config = props.config.clone();
        let bridge = CallbackListener {
            on_hover: props.on_hover.clone(),
            on_select: props.on_select.clone(),
            on_activate: props.on_activate.clone(),
        };
        use_effect_with((), move |_| {
            let ids = {
                let mut ctl = controller.borrow_mut();
                [ctl.subscribe(Box::new(bridge)), ctl.subscribe(Box::new(LogListener))]
            };
            let bindings = match bind_canvas(&canvas_ref, grid, controller.clone(), config) {
                Ok(b) => Some(b),
                Err(err) => {
                    error!(?err, "failed to set up grid canvas");
                    None
                }
            };
            move || {
                drop(bindings);
                let mut ctl = controller.borrow_mut();
                for id in ids {
                    ctl.unsubscribe(id);
                }
            }
        });
    }

    html! {
        <canvas ref={canvas_ref} style="display:block; position:absolute; inset:0;"></canvas>
    }
}
