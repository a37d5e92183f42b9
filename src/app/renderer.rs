// src/app/renderer.rs
//! GameApp の描画関連ロジック。
//!
//! 実際にピクセルを塗るのは `CardRenderer` の実装 (ブラウザなら web.rs の Canvas 版)。
//! ここでは「何をどこに描くか」だけを決めるよ。

use crate::components::card::Card;
use crate::components::position::Rect;
use crate::components::stack::StackType;
use crate::config::layout::{
    BANNER_X, BANNER_Y, CARD_HEIGHT, CARD_SPACING_Y, CARD_WIDTH, HUD_LINE_HEIGHT, HUD_START_Y, HUD_X,
    MENU_BUTTON_START_Y, MENU_BUTTON_X,
};

use super::button::ButtonState;
use super::game_app::{GameApp, Screen};

/// 矩形の描き方。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RectStyle {
    /// 空のパイルの枠
    EmptySlot,
    /// ヒントのハイライト
    Highlight,
    Button(ButtonState),
}

/// 描画係。
pub trait CardRenderer {
    fn clear(&mut self);
    fn draw_card(&mut self, card: &Card, x: f32, y: f32);
    fn draw_rect(&mut self, rect: &Rect, style: RectStyle);
    fn draw_text(&mut self, text: &str, x: f32, y: f32);
}

/// 1 フレーム分を描く。update のあとに呼ぶこと。
pub fn render_frame(app: &GameApp, renderer: &mut dyn CardRenderer, now_ms: f64) {
    renderer.clear();
    match app.screen() {
        Screen::Menu => {
            renderer.draw_text("Welcome to Solitaire!", MENU_BUTTON_X, MENU_BUTTON_START_Y - 60.0);
        }
        Screen::Settings => {
            let sound = if app.is_sound_on() { "ON" } else { "OFF" };
            renderer.draw_text(&format!("Sound: {}", sound), MENU_BUTTON_X, MENU_BUTTON_START_Y - 60.0);
        }
        Screen::Statistics => {
            let stats = app.stats();
            let time = stats.best_time_secs.map_or_else(|| "--".to_string(), |t| format!("{}s", t));
            let moves = stats.best_moves.map_or_else(|| "--".to_string(), |m| m.to_string());
            renderer.draw_text(&format!("Best Time: {}", time), MENU_BUTTON_X, MENU_BUTTON_START_Y - 80.0);
            renderer.draw_text(&format!("Fewest Moves: {}", moves), MENU_BUTTON_X, MENU_BUTTON_START_Y - 50.0);
        }
        Screen::Playing => render_table(app, renderer, now_ms),
    }
    render_buttons(app, renderer);
}

fn render_table(app: &GameApp, renderer: &mut dyn CardRenderer, now_ms: f64) {
    let game = app.game();

    // --- パイル ---
    for pile in game.piles() {
        if pile.is_empty() {
            renderer.draw_rect(&Rect::at(pile.anchor, CARD_WIDTH, CARD_HEIGHT), RectStyle::EmptySlot);
        }
        for (i, card) in pile.cards.iter().enumerate() {
            let pos = pile.card_position(i);
            renderer.draw_card(card, pos.x, pos.y);
        }
    }

    // --- ヒント ---
    if let Some(active) = app.active_hint() {
        let source = game.pile(active.hint.source);
        if active.hint.card_index < source.len() {
            renderer.draw_rect(&source.card_rect(active.hint.card_index), RectStyle::Highlight);
        }
        let target = game.pile(active.hint.foundation);
        renderer.draw_rect(&target.card_rect(0), RectStyle::Highlight);
    }

    // --- 飛んでいるカード ---
    for animation in app.animations().iter() {
        let pos = animation.position_at(now_ms);
        renderer.draw_card(animation.card(), pos.x, pos.y);
    }

    // --- ドラッグ中のカード (一番手前) ---
    if let Some(info) = app.dragging() {
        let origin = info.draw_origin();
        for (i, card) in info.cards.iter().enumerate() {
            renderer.draw_card(card, origin.x, origin.y + i as f32 * CARD_SPACING_Y);
        }
    }

    // --- HUD ---
    let lines = [
        format!("Score: {}", game.score),
        format!("Moves: {}", game.move_count),
        format!("Time: {}", app.elapsed_secs(now_ms)),
        format!("Draw Count: {}", app.draw_count()),
        game.deal_mode.label().to_string(),
    ];
    for (i, line) in lines.iter().enumerate() {
        renderer.draw_text(line, HUD_X, HUD_START_Y + i as f32 * HUD_LINE_HEIGHT);
    }

    if app.is_won() {
        renderer.draw_text("YOU WIN!", BANNER_X, BANNER_Y);
    } else if app.is_paused() {
        renderer.draw_text("PAUSED", BANNER_X, BANNER_Y);
    }

    // 山札の残り枚数
    let stock = game.pile(StackType::Stock);
    renderer.draw_text(&format!("{}", stock.len()), stock.anchor.x, stock.anchor.y + CARD_HEIGHT + 15.0);
}

fn render_buttons(app: &GameApp, renderer: &mut dyn CardRenderer) {
    for button in app.buttons() {
        renderer.draw_rect(&button.rect, RectStyle::Button(button.state));
        renderer.draw_text(
            button.action.label(app.is_paused()),
            button.rect.x + 10.0,
            button.rect.y + button.rect.height / 2.0,
        );
    }
}
