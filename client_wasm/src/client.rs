use std::cell::RefCell;
use std::rc::Rc;

use game_core::{draw_list, Game, Palette};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, MouseEvent};

use crate::{canvas, input};

/// Main client state
struct Client {
    game: Game,
    ctx: CanvasRenderingContext2d,
    palette: Palette,
}

impl Client {
    fn new(canvas: &HtmlCanvasElement, seed: u64) -> Result<Self, JsValue> {
        let game = Game::new(seed);

        // The canvas backing store matches the field one to one
        canvas.set_width(game.config().field_width as u32);
        canvas.set_height(game.config().field_height as u32);

        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("Canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|e| JsValue::from_str(&format!("Unexpected context type: {:?}", e)))?;

        Ok(Self {
            game,
            ctx,
            palette: Palette::default(),
        })
    }

    /// Advance one tick, then paint the result
    fn frame(&mut self) -> Result<(), JsValue> {
        self.game.advance();
        let snapshot = self.game.snapshot();
        canvas::paint(&self.ctx, &draw_list(&snapshot, &self.palette))
    }
}

/// Start the game on `canvas` and keep it running every animation frame
#[wasm_bindgen]
pub fn init_client(canvas: HtmlCanvasElement) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Info) {
        web_sys::console::warn_1(&JsValue::from_str(&format!("Logger not installed: {}", e)));
    }

    let seed = js_sys::Date::now() as u64;
    let mut client = Client::new(&canvas, seed)?;
    client.game.reset_ball();
    log::info!("Client initialized with seed: {}", seed);

    let client = Rc::new(RefCell::new(client));
    setup_pointer_handler(&canvas, client.clone())?;
    request_animation_frame(client)
}

fn setup_pointer_handler(
    canvas: &HtmlCanvasElement,
    client: Rc<RefCell<Client>>,
) -> Result<(), JsValue> {
    let canvas_clone = canvas.clone();
    let closure = Closure::<dyn FnMut(_)>::new(move |event: MouseEvent| {
        let y = input::field_y_from_event(&event, &canvas_clone);
        client.borrow_mut().game.set_pointer_y(y);
    });
    canvas.add_event_listener_with_callback("mousemove", closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn request_animation_frame(client: Rc<RefCell<Client>>) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("No window"))?;
    let closure = Closure::once(move |_time: f64| game_loop(client));
    window.request_animation_frame(closure.as_ref().unchecked_ref())?;
    closure.forget();
    Ok(())
}

fn game_loop(client: Rc<RefCell<Client>>) {
    if let Err(e) = client.borrow_mut().frame() {
        log::warn!("Render error: {:?}", e);
    }

    if let Err(e) = request_animation_frame(client) {
        log::error!("Frame loop stopped: {:?}", e);
    }
}
