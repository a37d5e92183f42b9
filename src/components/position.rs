// src/components/position.rs

use serde::{Deserialize, Serialize};

/// 2D空間での位置 (x, y) だよ。📍
///
/// 座標は f32。アニメーションで滑らかに動かすから小数点以下も持っておく！
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// `(dx, dy)` だけずらした位置。
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self { x: self.x + dx, y: self.y + dy }
    }
}

/// 左上 + 幅・高さで表す矩形。当たり判定に使うよ。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    pub fn at(origin: Position, width: f32, height: f32) -> Self {
        Self::new(origin.x, origin.y, width, height)
    }

    /// 点が矩形の中にあるか。右端・下端も「中」に含めるよ。
    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px <= self.x + self.width && py >= self.y && py <= self.y + self.height
    }
}
