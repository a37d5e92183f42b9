// src/config/settings.rs

use serde::{Deserialize, Serialize};

use crate::components::game_state::DealMode;

pub const DEFAULT_ANIMATION_MS: f64 = 500.0;
pub const DEFAULT_HINT_MS: f64 = 2000.0;

/// ゲームの設定値だよ。JSON で上書きできて、書かなかった項目はデフォルトのまま。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameSettings {
    /// 自動移動アニメーションの長さ (ms)
    pub animation_ms: f64,
    /// ヒントのハイライトを出しておく時間 (ms)
    pub hint_ms: f64,
    /// 山札から一度に引く枚数。1 か 3 だけ。
    pub draw_count: u8,
    pub deal_mode: DealMode,
    pub sound_on: bool,
}

impl Default for GameSettings {
    fn default() -> Self {
        Self {
            animation_ms: DEFAULT_ANIMATION_MS,
            hint_ms: DEFAULT_HINT_MS,
            draw_count: 1,
            deal_mode: DealMode::Random,
            sound_on: true,
        }
    }
}

impl GameSettings {
    /// JSON 文字列から設定を読む。
    pub fn from_json(json: &str) -> Result<Self, String> {
        let settings: GameSettings =
            serde_json::from_str(json).map_err(|e| format!("Failed to parse settings: {}", e))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<(), String> {
        if !matches!(self.draw_count, 1 | 3) {
            return Err(format!("draw_count must be 1 or 3, got {}", self.draw_count));
        }
        if self.animation_ms < 0.0 || self.hint_ms < 0.0 {
            return Err("durations must not be negative".to_string());
        }
        Ok(())
    }
}
