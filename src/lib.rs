// src/lib.rs

// WASM と JavaScript を繋ぐための基本！
use wasm_bindgen::prelude::*;

// 自分で作ったモジュールたち！ これでコードを整理してるんだ。
pub mod app; // 入力・画面遷移・描画の指示
pub mod components; // 盤面のデータ
pub mod config; // レイアウト定数と設定
pub mod logger;
pub mod logic; // ルール・Undo・アニメーション・ヒント
pub mod web; // ブラウザ向けの入口

pub use app::{GameApp, Screen};
pub use components::{Card, GameState, Pile, StackType};
pub use config::GameSettings;

// main 関数の代わりに、Wasm がロードされた時に最初に実行される関数だよ。
#[wasm_bindgen(start)]
pub fn start() {
    console_error_panic_hook::set_once();
    if logger::init(log::LevelFilter::Info).is_ok() {
        log::info!("Panic hook set! Logger ready.");
    }
}
