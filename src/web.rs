// src/web.rs
//! ブラウザ側とのつなぎ。Canvas に描いて、HTML Audio で音を鳴らす。
//! JS からは `SolitaireApp` を作って、入力イベントと requestAnimationFrame の時刻を渡してもらう。

use log::{error, info, warn};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlAudioElement, HtmlCanvasElement};

use crate::app::button::ButtonState;
use crate::app::event_handler::{InputEvent, Key};
use crate::app::renderer::{self, CardRenderer, RectStyle};
use crate::app::sound::SoundBackend;
use crate::app::state_getter;
use crate::app::GameApp;
use crate::components::card::{Card, CardColor};
use crate::components::position::Rect;
use crate::config::layout::{CARD_HEIGHT, CARD_WIDTH, WINDOW_HEIGHT, WINDOW_WIDTH};
use crate::config::settings::GameSettings;

const MOVE_SOUND_FILE: &str = "sounds/move.wav";

fn to_js_error(message: String) -> JsValue {
    js_sys::Error::new(&message).into()
}

/// Canvas と 2D コンテキストを取得する。
fn initialize_canvas(canvas_id: &str) -> Result<(HtmlCanvasElement, CanvasRenderingContext2d), JsValue> {
    let document = web_sys::window()
        .and_then(|w| w.document())
        .ok_or_else(|| to_js_error("No document available".to_string()))?;
    let canvas = document
        .get_element_by_id(canvas_id)
        .ok_or_else(|| to_js_error(format!("Canvas '{}' not found", canvas_id)))?
        .dyn_into::<HtmlCanvasElement>()?;
    canvas.set_width(WINDOW_WIDTH as u32);
    canvas.set_height(WINDOW_HEIGHT as u32);
    let context = canvas
        .get_context("2d")?
        .ok_or_else(|| to_js_error("2d context unavailable".to_string()))?
        .dyn_into::<CanvasRenderingContext2d>()?;
    Ok((canvas, context))
}

/// Canvas 2D で描くレンダラー。
pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    context: CanvasRenderingContext2d,
}

impl CanvasRenderer {
    fn fill_text(&self, text: &str, x: f32, y: f32) {
        if let Err(e) = self.context.fill_text(text, f64::from(x), f64::from(y)) {
            warn!("[Render] fill_text failed: {:?}", e);
        }
    }
}

impl CardRenderer for CanvasRenderer {
    fn clear(&mut self) {
        let ctx = &self.context;
        ctx.set_fill_style_str("#0b6623");
        ctx.fill_rect(0.0, 0.0, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
    }

    fn draw_card(&mut self, card: &Card, x: f32, y: f32) {
        let ctx = &self.context;
        let (x, y) = (f64::from(x), f64::from(y));
        let (w, h) = (f64::from(CARD_WIDTH), f64::from(CARD_HEIGHT));
        if card.is_face_up {
            ctx.set_fill_style_str("#ffffff");
            ctx.fill_rect(x, y, w, h);
            ctx.set_stroke_style_str("#333333");
            ctx.stroke_rect(x, y, w, h);
            let color = match card.color() {
                CardColor::Red => "#cc0000",
                CardColor::Black => "#000000",
            };
            ctx.set_fill_style_str(color);
            ctx.set_font("16px sans-serif");
            self.fill_text(&card.label(), (x + 5.0) as f32, (y + 18.0) as f32);
        } else {
            ctx.set_fill_style_str("#1e3f8a");
            ctx.fill_rect(x, y, w, h);
            ctx.set_stroke_style_str("#ffffff");
            ctx.stroke_rect(x, y, w, h);
        }
    }

    fn draw_rect(&mut self, rect: &Rect, style: RectStyle) {
        let ctx = &self.context;
        let (x, y, w, h) = (f64::from(rect.x), f64::from(rect.y), f64::from(rect.width), f64::from(rect.height));
        match style {
            RectStyle::EmptySlot => {
                ctx.set_stroke_style_str("#cccccc");
                ctx.stroke_rect(x, y, w, h);
            }
            RectStyle::Highlight => {
                ctx.set_stroke_style_str("#ffd700");
                ctx.set_line_width(3.0);
                ctx.stroke_rect(x, y, w, h);
                ctx.set_line_width(1.0);
            }
            RectStyle::Button(state) => {
                let fill = match state {
                    ButtonState::Normal => "#444444",
                    ButtonState::Hovered => "#666666",
                    ButtonState::Pressed => "#222222",
                };
                ctx.set_fill_style_str(fill);
                ctx.fill_rect(x, y, w, h);
            }
        }
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32) {
        self.context.set_fill_style_str("#ffffff");
        self.context.set_font("18px sans-serif");
        self.fill_text(text, x, y);
    }
}

/// `<audio>` で効果音を鳴らす。
struct HtmlAudioBackend {
    move_sound: Option<HtmlAudioElement>,
}

impl HtmlAudioBackend {
    fn new() -> Self {
        let move_sound = match HtmlAudioElement::new_with_src(MOVE_SOUND_FILE) {
            Ok(audio) => Some(audio),
            Err(e) => {
                warn!("[Sound] Failed to load {}: {:?}", MOVE_SOUND_FILE, e);
                None
            }
        };
        Self { move_sound }
    }
}

impl SoundBackend for HtmlAudioBackend {
    fn play_move(&mut self) {
        if let Some(audio) = &self.move_sound {
            audio.set_current_time(0.0);
            if let Err(e) = audio.play() {
                warn!("[Sound] play() failed: {:?}", e);
            }
        }
    }
}

/// JS に公開するゲーム本体。
#[wasm_bindgen]
pub struct SolitaireApp {
    app: GameApp,
    renderer: CanvasRenderer,
}

#[wasm_bindgen]
impl SolitaireApp {
    /// `settings_json` は省略可。書いた項目だけデフォルトを上書きする。
    #[wasm_bindgen(constructor)]
    pub fn new(canvas_id: &str, settings_json: Option<String>) -> Result<SolitaireApp, JsValue> {
        let settings = match settings_json {
            Some(json) => GameSettings::from_json(&json).map_err(to_js_error)?,
            None => GameSettings::default(),
        };
        let (canvas, context) = initialize_canvas(canvas_id)?;
        info!("[Web] SolitaireApp created on #{}", canvas_id);
        Ok(Self {
            app: GameApp::new(settings, Box::new(HtmlAudioBackend::new())),
            renderer: CanvasRenderer { canvas, context },
        })
    }

    pub fn pointer_down(&mut self, x: f32, y: f32, button: i16, clicks: u32, now_ms: f64) {
        self.app.handle_event(InputEvent::PointerDown { x, y, button, clicks }, now_ms);
    }

    pub fn pointer_move(&mut self, x: f32, y: f32, now_ms: f64) {
        self.app.handle_event(InputEvent::PointerMove { x, y }, now_ms);
    }

    pub fn pointer_up(&mut self, x: f32, y: f32, button: i16, now_ms: f64) {
        self.app.handle_event(InputEvent::PointerUp { x, y, button }, now_ms);
    }

    pub fn key_down(&mut self, key: &str, now_ms: f64) {
        self.app.handle_event(InputEvent::KeyDown(Key::from_code(key)), now_ms);
    }

    /// 1 フレーム分。先に update (アニメーションの反映) してから描く。
    pub fn tick(&mut self, now_ms: f64) {
        self.app.update(now_ms);
        renderer::render_frame(&self.app, &mut self.renderer, now_ms);
    }

    pub fn get_game_state_json(&self, now_ms: f64) -> Result<String, JsValue> {
        state_getter::snapshot_json(&self.app, now_ms).map_err(|e| {
            error!("[Web] {}", e);
            to_js_error(e)
        })
    }

    pub fn should_quit(&self) -> bool {
        self.app.should_quit()
    }
}
