// src/app/stock_handler.rs
//! 山札 (Stock) のクリック。捨て札へ引く or 捨て札を山札に戻す。

use log::debug;

use crate::logic::rules;

use super::game_app::GameApp;

/// 山札がクリックされたときの処理。盤面が変わったら true。
/// 変わったときだけスナップショットを積んで勝利判定する。
pub fn handle_stock_click(app: &mut GameApp, now_ms: f64) -> bool {
    let changed = rules::draw_from_stock(&mut app.game, app.draw_count);
    if changed {
        app.hint = None;
        app.after_committed_move(now_ms);
    } else {
        debug!("[Stock] Click ignored, nothing to draw or recycle.");
    }
    changed
}
