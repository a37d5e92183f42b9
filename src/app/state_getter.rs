//! Gets the current session state from GameApp and converts it to JSON.

use log::{debug, error};
use serde::Serialize;

use crate::components::card::Card;
use crate::components::game_state::DealMode;
use crate::components::stack::Pile;

use super::game_app::{GameApp, Screen, Stats};

/// JSON に書き出す形。GameApp の中身を借りているだけ。
#[derive(Serialize)]
struct SessionSnapshot<'a> {
    screen: Screen,
    paused: bool,
    won: bool,
    score: u32,
    move_count: u32,
    draw_count: u8,
    deal_mode: DealMode,
    elapsed_secs: u64,
    stats: Stats,
    piles: Vec<&'a Pile>,
    dragging: Option<&'a [Card]>,
    animations_in_flight: usize,
    undo_depth: usize,
}

/// 今のセッションの見えている状態を JSON 文字列で返します。
pub fn snapshot_json(app: &GameApp, now_ms: f64) -> Result<String, String> {
    let game = app.game();
    let snapshot = SessionSnapshot {
        screen: app.screen(),
        paused: app.is_paused(),
        won: app.is_won(),
        score: game.score,
        move_count: game.move_count,
        draw_count: app.draw_count(),
        deal_mode: game.deal_mode,
        elapsed_secs: app.elapsed_secs(now_ms),
        stats: app.stats(),
        piles: game.piles().collect(),
        dragging: app.dragging().map(|d| d.cards.as_slice()),
        animations_in_flight: app.animations().len(),
        undo_depth: app.history_len(),
    };
    match serde_json::to_string(&snapshot) {
        Ok(json) => {
            debug!("[State] Serialized snapshot ({} bytes).", json.len());
            Ok(json)
        }
        Err(e) => {
            let error_msg = format!("Failed to serialize game state: {}", e);
            error!("{}", error_msg);
            Err(error_msg)
        }
    }
}
