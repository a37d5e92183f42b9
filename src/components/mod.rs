// src/components/mod.rs

// 盤面を表すデータ部品たち。ロジックは logic/ 側に置くよ！
pub mod card;
pub mod dragging_info;
pub mod game_state;
pub mod position;
pub mod stack;

pub use card::{Card, CardColor, Rank, Suit};
pub use dragging_info::DraggingInfo;
pub use game_state::{DealMode, GameState};
pub use position::{Position, Rect};
pub use stack::{Pile, StackType};
