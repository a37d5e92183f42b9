// src/logic/animation.rs
//! 自動移動のアニメーションを時間で進めるスケジューラーだよ。🎞️
//!
//! カードは動き始めた瞬間に元のパイルから外されていて、アニメーションが終わった tick に
//! `PendingMove` として 1 回だけ返される。盤面への反映 (組札に積む・加点など) は
//! 受け取った側 (GameApp) がその tick の update 中にやる。

use log::debug;
use serde::Serialize;

use crate::components::card::Card;
use crate::components::position::Position;
use crate::components::stack::StackType;

/// `e(t) = 1 - (1 - t)^2`。最初が速くて最後にゆっくり止まる。
pub fn ease_out_quad(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv
}

/// `a` から `b` への線形補間。`e = 0` でちょうど `a`、`e = 1` でちょうど `b` になる形で書いてある。
pub fn lerp(a: f32, b: f32, e: f32) -> f32 {
    a * (1.0 - e) + b * e
}

/// 経過時間を 0.0〜1.0 に丸めた進み具合。長さ 0 以下なら即完了扱い。
pub fn progress(start_ms: f64, duration_ms: f64, now_ms: f64) -> f64 {
    if duration_ms <= 0.0 {
        return 1.0;
    }
    ((now_ms - start_ms) / duration_ms).clamp(0.0, 1.0)
}

/// アニメーション完了時に盤面へ反映する手。
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PendingMove {
    pub card: Card,
    pub from: StackType,
    pub to: StackType,
    /// 予約した時点のセッション世代。Undo や新しいゲームで世代が変わると無効になる。
    pub epoch: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Animation {
    pub from_pos: Position,
    pub to_pos: Position,
    pub start_ms: f64,
    pub duration_ms: f64,
    pub commit: PendingMove,
}

impl Animation {
    pub fn new(commit: PendingMove, from_pos: Position, to_pos: Position, start_ms: f64, duration_ms: f64) -> Self {
        Self { from_pos, to_pos, start_ms, duration_ms, commit }
    }

    pub fn card(&self) -> &Card {
        &self.commit.card
    }

    pub fn progress(&self, now_ms: f64) -> f64 {
        progress(self.start_ms, self.duration_ms, now_ms)
    }

    pub fn is_finished(&self, now_ms: f64) -> bool {
        self.progress(now_ms) >= 1.0
    }

    /// `now_ms` 時点で描く位置。
    pub fn position_at(&self, now_ms: f64) -> Position {
        let e = ease_out_quad(self.progress(now_ms)) as f32;
        Position::new(lerp(self.from_pos.x, self.to_pos.x, e), lerp(self.from_pos.y, self.to_pos.y, e))
    }
}

/// 飛んでいる途中のアニメーションの集まり。順番に意味はない。
/// 一度入れたアニメーションは途中で取り消せないよ。
#[derive(Debug, Default)]
pub struct AnimationScheduler {
    animations: Vec<Animation>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, animation: Animation) {
        debug!(
            "[Anim] Scheduled {} {:?} -> {:?} ({} ms)",
            animation.card().label(),
            animation.commit.from,
            animation.commit.to,
            animation.duration_ms
        );
        self.animations.push(animation);
    }

    /// 時間を進めて、完了したアニメーションを取り除く。
    /// 完了した分の `PendingMove` をスキャン順で返す。各アニメーションについて 1 回だけ。
    pub fn advance(&mut self, now_ms: f64) -> Vec<PendingMove> {
        let mut finished = Vec::new();
        self.animations.retain(|animation| {
            if animation.is_finished(now_ms) {
                finished.push(animation.commit);
                false
            } else {
                true
            }
        });
        if !finished.is_empty() {
            debug!("[Anim] {} animation(s) finished, {} still in flight.", finished.len(), self.animations.len());
        }
        finished
    }

    pub fn iter(&self) -> impl Iterator<Item = &Animation> {
        self.animations.iter()
    }

    /// 指定した世代でまだ反映待ちの手。
    pub fn pending_for_epoch(&self, epoch: u64) -> impl Iterator<Item = &PendingMove> {
        self.animations.iter().map(|a| &a.commit).filter(move |c| c.epoch == epoch)
    }

    pub fn len(&self) -> usize {
        self.animations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.animations.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::card::{Rank, Suit};

    fn sample_move(epoch: u64) -> PendingMove {
        PendingMove {
            card: Card::new(Suit::Heart, Rank::Ace, true),
            from: StackType::Waste,
            to: StackType::Foundation(0),
            epoch,
        }
    }

    fn sample_animation(start_ms: f64, duration_ms: f64) -> Animation {
        Animation::new(
            sample_move(0),
            Position::new(130.0, 50.0),
            Position::new(400.0, 50.0),
            start_ms,
            duration_ms,
        )
    }

    #[test]
    fn interpolation_hits_endpoints_exactly() {
        let anim = sample_animation(1000.0, 500.0);
        assert_eq!(anim.position_at(1000.0), anim.from_pos);
        assert_eq!(anim.position_at(900.0), anim.from_pos, "開始前は元の位置に留まる");
        assert_eq!(anim.position_at(1500.0), anim.to_pos);
        assert_eq!(anim.position_at(9999.0), anim.to_pos);
    }

    #[test]
    fn easing_front_loads_motion() {
        assert_eq!(ease_out_quad(0.0), 0.0);
        assert_eq!(ease_out_quad(1.0), 1.0);
        for step in 1..100 {
            let t = f64::from(step) / 100.0;
            assert!(ease_out_quad(t) >= t, "t = {} で線形より遅れてる", t);
        }

        let anim = sample_animation(0.0, 500.0);
        let mid = anim.position_at(250.0);
        let linear = lerp(anim.from_pos.x, anim.to_pos.x, 0.5);
        assert!(mid.x >= linear);
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        assert_eq!(progress(100.0, 0.0, 100.0), 1.0);
        assert_eq!(progress(100.0, -5.0, 0.0), 1.0);
    }

    #[test]
    fn advance_returns_each_commit_exactly_once() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(sample_animation(0.0, 500.0));
        scheduler.schedule(sample_animation(200.0, 500.0));

        assert!(scheduler.advance(499.0).is_empty());
        assert_eq!(scheduler.len(), 2);

        let first = scheduler.advance(500.0);
        assert_eq!(first.len(), 1);
        assert_eq!(scheduler.len(), 1);

        assert!(scheduler.advance(600.0).is_empty(), "完了済みのものはもう返らない");
        assert_eq!(scheduler.advance(700.0).len(), 1);
        assert!(scheduler.is_empty());
        assert!(scheduler.advance(10_000.0).is_empty());
    }

    #[test]
    fn pending_filtered_by_epoch() {
        let mut scheduler = AnimationScheduler::new();
        scheduler.schedule(Animation::new(sample_move(1), Position::default(), Position::default(), 0.0, 500.0));
        scheduler.schedule(Animation::new(sample_move(2), Position::default(), Position::default(), 0.0, 500.0));
        assert_eq!(scheduler.pending_for_epoch(2).count(), 1);
        assert_eq!(scheduler.pending_for_epoch(3).count(), 0);
    }
}
