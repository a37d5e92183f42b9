// src/app/sound.rs
//! 効果音まわり。実際に音を鳴らすのは `SoundBackend` の実装 (ブラウザなら web.rs) の仕事。

use log::{debug, info};

/// 音を鳴らす係。
pub trait SoundBackend {
    fn play_move(&mut self);
}

/// 何も鳴らさないバックエンド。ヘッドレス実行用。
#[derive(Debug, Default)]
pub struct SilentBackend;

impl SoundBackend for SilentBackend {
    fn play_move(&mut self) {}
}

pub struct SoundManager {
    backend: Box<dyn SoundBackend>,
    sound_on: bool,
}

impl SoundManager {
    pub fn new(backend: Box<dyn SoundBackend>, sound_on: bool) -> Self {
        Self { backend, sound_on }
    }

    /// カードが動いたときの音。OFF なら何もしない。
    pub fn play_move_sound(&mut self) {
        if self.sound_on {
            debug!("[Sound] move");
            self.backend.play_move();
        }
    }

    pub fn toggle_sound(&mut self) {
        self.sound_on = !self.sound_on;
        info!("[Sound] Sound {}", if self.sound_on { "ON" } else { "OFF" });
    }

    pub fn is_sound_on(&self) -> bool {
        self.sound_on
    }
}
