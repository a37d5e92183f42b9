// src/logic/mod.rs

// 盤面を動かすルールと、その周りの仕組み (Undo・アニメーション・ヒント) だよ。
pub mod animation;
pub mod auto_move;
pub mod deck;
pub mod rules;
pub mod undo;
