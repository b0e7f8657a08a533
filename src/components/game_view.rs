use std::cell::RefCell;
use std::rc::Rc;

use gloo::events::EventListener;
use gloo::timers::callback::Interval;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, KeyboardEvent};
use yew::prelude::*;

use super::{
    camera_controls::CameraControls, controls_panel::ControlsPanel,
    game_over_overlay::GameOverOverlay, intro_overlay::IntroOverlay, stats_panel::StatsPanel,
};
use crate::config::Palette;
use crate::input::{command_for_key, Command};
use crate::model::{GameAction, GameState, GameStatus};
use crate::render::{scene, viewport, ProjectionState};
use crate::state::{Camera, Ticker};
use crate::util::clog;

#[derive(Properties, PartialEq, Clone)]
pub struct GameViewProps {
    pub game: UseReducerHandle<GameState>,
    pub high_score: u32,
    pub previous_best: u32,
}

type Redraw = Rc<RefCell<Option<Rc<dyn Fn()>>>>;

fn canvas_context(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    let ctx = canvas
        .get_context("2d")?
        .ok_or("Failed to get 2d context")?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok(ctx)
}

/// Rebuilds the projection for the current window width, camera and grid,
/// and resizes the canvas to match.
fn update_canvas_size(canvas: &HtmlCanvasElement, camera: &Camera, grid_size: u32) -> ProjectionState {
    let params = camera.projection_params(grid_size, viewport::window_iso_width());
    let projection = ProjectionState::new(params);
    let size = projection.canvas();
    if canvas.width() != size.width || canvas.height() != size.height {
        canvas.set_width(size.width);
        canvas.set_height(size.height);
    }
    clog(&format!(
        "projection grid={} canvas={}x{} tile={:.1}px focal={:?}",
        grid_size,
        size.width,
        size.height,
        projection.tile_width(),
        projection.focal_length()
    ));
    projection
}

fn dispatch(game_ref: &RefCell<UseReducerHandle<GameState>>, action: GameAction) {
    let handle = game_ref.borrow().clone();
    handle.dispatch(action);
}

fn run(slot: &Redraw) {
    if let Some(f) = &*slot.borrow() {
        f();
    }
}

#[function_component(GameView)]
pub fn game_view(props: &GameViewProps) -> Html {
    let canvas_ref = use_node_ref();
    let camera = use_mut_ref(Camera::default);
    let camera_view = use_state(Camera::default);
    let projection = use_mut_ref(|| None::<ProjectionState>);
    let game_ref = use_mut_ref(|| props.game.clone());
    let draw_ref: Redraw = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    // recompute projection + redraw
    let refresh_ref: Redraw = use_mut_ref(|| None::<Rc<dyn Fn()>>);
    let ticker = use_mut_ref(Ticker::<Interval>::default);

    // Effect: latest game handle each version, then redraw (rebuild on grid growth)
    {
        let game_ref = game_ref.clone();
        let current_handle = props.game.clone();
        let projection = projection.clone();
        let draw_ref = draw_ref.clone();
        let refresh_ref = refresh_ref.clone();
        let version = props.game.version;
        use_effect_with(version, move |_| {
            *game_ref.borrow_mut() = current_handle.clone();
            let grid_changed = projection
                .borrow()
                .as_ref()
                .is_some_and(|p| p.grid_size() != current_handle.grid_size);
            if grid_changed {
                run(&refresh_ref);
            } else {
                run(&draw_ref);
            }
            || ()
        });
    }
    // Effect: tick timer follows play state and speed
    {
        let ticker = ticker.clone();
        let game_ref = game_ref.clone();
        let playing = props.game.status == GameStatus::Playing;
        let tick_ms = props.game.tick_ms;
        use_effect_with((playing, tick_ms), move |&(playing, tick_ms)| {
            if playing {
                let game_ref = game_ref.clone();
                ticker
                    .borrow_mut()
                    .arm(tick_ms, move || dispatch(&game_ref, GameAction::Tick));
            } else {
                ticker.borrow_mut().cancel();
            }
            || ()
        });
    }
    // Main mount effect (canvas, listeners)
    {
        let canvas_ref = canvas_ref.clone();
        let camera = camera.clone();
        let camera_view = camera_view.clone();
        let projection = projection.clone();
        let game_ref = game_ref.clone();
        let draw_ref = draw_ref.clone();
        let refresh_ref = refresh_ref.clone();
        let ticker = ticker.clone();
        use_effect_with((), move |_| {
            let mount = || -> Result<Vec<EventListener>, JsValue> {
                let window = web_sys::window().ok_or("no window")?;
                let canvas: HtmlCanvasElement = canvas_ref
                    .cast::<HtmlCanvasElement>()
                    .ok_or("canvas_ref not attached to a canvas element")?;
                let ctx = canvas_context(&canvas)?;
                let palette = Palette::default();

                let draw: Rc<dyn Fn()> = {
                    let canvas = canvas.clone();
                    let projection = projection.clone();
                    let game_ref = game_ref.clone();
                    Rc::new(move || {
                        if !canvas.is_connected() {
                            return;
                        }
                        let projection = projection.borrow();
                        let Some(projection) = projection.as_ref() else {
                            return;
                        };
                        let handle = game_ref.borrow().clone();
                        let mut surface = ctx.clone();
                        scene::draw(&mut surface, projection, &handle.snapshot(), &palette);
                    })
                };
                let refresh: Rc<dyn Fn()> = {
                    let canvas = canvas.clone();
                    let camera = camera.clone();
                    let projection = projection.clone();
                    let game_ref = game_ref.clone();
                    let draw = draw.clone();
                    Rc::new(move || {
                        let grid_size = game_ref.borrow().grid_size;
                        let next = update_canvas_size(&canvas, &camera.borrow(), grid_size);
                        *projection.borrow_mut() = Some(next);
                        draw();
                    })
                };
                *draw_ref.borrow_mut() = Some(draw);
                *refresh_ref.borrow_mut() = Some(refresh.clone());
                refresh();

                let resize = {
                    let refresh = refresh.clone();
                    EventListener::new(&window, "resize", move |_| refresh())
                };
                let keydown = {
                    let refresh = refresh.clone();
                    let camera = camera.clone();
                    let camera_view = camera_view.clone();
                    let game_ref = game_ref.clone();
                    EventListener::new(&window, "keydown", move |event| {
                        let Some(event) = event.dyn_ref::<KeyboardEvent>() else {
                            return;
                        };
                        let Some(command) = command_for_key(&event.key()) else {
                            return;
                        };
                        event.prevent_default();
                        match command {
                            Command::Turn(dir) => dispatch(&game_ref, GameAction::Turn(dir)),
                            Command::TogglePause => dispatch(&game_ref, GameAction::TogglePause),
                            Command::Start => dispatch(&game_ref, GameAction::Start),
                            cmd if cmd.is_camera() => {
                                let changed = camera.borrow_mut().apply(cmd);
                                if changed {
                                    refresh();
                                    let snapshot = *camera.borrow();
                                    camera_view.set(snapshot);
                                }
                            }
                            _ => {}
                        }
                    })
                };
                Ok(vec![resize, keydown])
            };
            let listeners = match mount() {
                Ok(listeners) => listeners,
                Err(err) => {
                    clog(&format!("game view mount failed: {:?}", err));
                    Vec::new()
                }
            };
            move || {
                drop(listeners);
                ticker.borrow_mut().cancel();
                *draw_ref.borrow_mut() = None;
                *refresh_ref.borrow_mut() = None;
            }
        });
    }

    let camera_cb = |command: Command| {
        let camera = camera.clone();
        let camera_view = camera_view.clone();
        let refresh_ref = refresh_ref.clone();
        Callback::from(move |()| {
            let changed = camera.borrow_mut().apply(command);
            if changed {
                run(&refresh_ref);
                let snapshot = *camera.borrow();
                camera_view.set(snapshot);
            }
        })
    };
    let action_cb = |action: GameAction| {
        let game = props.game.clone();
        Callback::from(move |()| game.dispatch(action.clone()))
    };

    let game = &*props.game;
    let pause_label = match game.status {
        GameStatus::Paused => "Resume (Space)",
        _ => "Pause (Space)",
    };

    html! {<div style="position:relative; min-height:100vh; padding:34px; box-sizing:border-box; background:#0d1117; color:#c9d1d9;">
        <canvas ref={canvas_ref.clone()} id="game-canvas" style="display:block; margin:0 auto; border:1px solid #30363d;"></canvas>
        <StatsPanel score={game.score} level={game.level} high_score={props.high_score.max(game.score)} grid_size={game.grid_size} tick_ms={game.tick_ms} />
        <ControlsPanel pause_label={pause_label.to_string()} paused={game.status == GameStatus::Paused} on_toggle_pause={action_cb(GameAction::TogglePause)} on_restart={action_cb(GameAction::Restart)} />
        <CameraControls rotation={camera_view.rotation} perspective={camera_view.perspective_strength}
            on_rotate_left={camera_cb(Command::RotateLeft)} on_rotate_right={camera_cb(Command::RotateRight)}
            on_perspective_up={camera_cb(Command::IncreasePerspective)} on_perspective_down={camera_cb(Command::DecreasePerspective)} />
        <IntroOverlay show={game.status == GameStatus::Ready} high_score={props.high_score} start={action_cb(GameAction::Start)} />
        <GameOverOverlay show={game.status == GameStatus::GameOver} score={game.score} level={game.level} high_score={props.high_score.max(game.score)} previous_best={props.previous_best} restart={action_cb(GameAction::Start)} />
    </div>}
}
