//! # Animator 模块
//!
//! 单个内容块的入场动画状态机。
//!
//! ## 状态转换
//!
//! ```text
//! Unarmed   -> 尚未观察到可见；渲染为隐藏态
//! Animating -> 可见性信号首次变为 true 后进入；按 delay + duration 播放过渡
//! Settled   -> 过渡完成（或 kind = none）；渲染为可见态，永不重播
//! ```
//!
//! - `Unarmed → Animating` 仅由可见性信号的首次 false → true 触发；
//!   之后的任何可见性事件一律忽略（trigger-once）
//! - `Animating → Settled` 在进入 `Animating` 起经过 `delay + duration`
//!   秒后无条件发生，不依赖外部完成回调
//! - 没有任何转换会回到 `Unarmed`
//!
//! 触发瞬间会捕获当时配置的隐藏态几何与时序参数：过渡播放期间
//! 替换配置不会中止过渡，新值只影响之后触发的过渡（而每个实例
//! 至多触发一次）。

use crate::config::{AnimationConfig, AnimationKind};
use crate::easing::EasingFunction;
use crate::geometry::SectionGeometry;

/// 内容块动画阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SectionPhase {
    /// 尚未观察到可见
    #[default]
    Unarmed,
    /// 过渡进行中
    Animating,
    /// 最终可见态，不再重播
    Settled,
}

/// 内容块动画实例
///
/// 每个被包装的内容块持有一个实例；实例状态彼此独立。
#[derive(Debug, Clone)]
pub struct SectionAnimator {
    /// 当前阶段
    phase: SectionPhase,
    /// 触发时捕获的隐藏态几何
    hidden: SectionGeometry,
    /// 触发时捕获的起始延迟（秒）
    delay: f32,
    /// 触发时捕获的过渡时长（秒）
    duration: f32,
    /// 过渡用缓动函数
    easing: EasingFunction,
    /// 进入 `Animating` 以来的经过时间
    elapsed: f32,
}

impl SectionAnimator {
    /// 创建新的动画实例
    ///
    /// `kind = none` 时实例永久处于 `Settled`，不观察可见性、
    /// 没有中间渲染状态。
    pub fn new(config: &AnimationConfig) -> Self {
        let phase = if config.kind == AnimationKind::None {
            SectionPhase::Settled
        } else {
            SectionPhase::Unarmed
        };

        Self {
            phase,
            hidden: SectionGeometry::hidden(config),
            delay: config.delay,
            duration: config.duration,
            easing: EasingFunction::default(),
            elapsed: 0.0,
        }
    }

    /// 当前阶段
    pub fn phase(&self) -> SectionPhase {
        self.phase
    }

    /// 是否已处于最终可见态
    pub fn is_settled(&self) -> bool {
        self.phase == SectionPhase::Settled
    }

    /// 可见性信号变为 true
    ///
    /// 仅在 `Unarmed` 时生效：捕获当前配置的隐藏态与时序并进入
    /// `Animating`。其余阶段忽略（trigger-once）。
    ///
    /// `delay + duration <= 0` 时直接落到 `Settled`（非正时长按
    /// 立即完成容忍，不做钳制）。
    pub fn mark_visible(&mut self, config: &AnimationConfig) {
        if self.phase != SectionPhase::Unarmed {
            return;
        }

        if config.kind == AnimationKind::None {
            self.phase = SectionPhase::Settled;
            return;
        }

        if config.delay + config.duration <= 0.0 {
            self.phase = SectionPhase::Settled;
            return;
        }

        self.hidden = SectionGeometry::hidden(config);
        self.delay = config.delay;
        self.duration = config.duration;
        self.elapsed = 0.0;
        self.phase = SectionPhase::Animating;
    }

    /// 推进经过时间
    ///
    /// # 返回
    /// - `true`: 过渡仍在进行中
    /// - `false`: 实例不在 `Animating`（含本次推进后完成）
    pub fn update(&mut self, dt: f32) -> bool {
        if self.phase != SectionPhase::Animating {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed >= self.delay + self.duration {
            self.phase = SectionPhase::Settled;
            false
        } else {
            true
        }
    }

    /// 当前几何状态
    ///
    /// `Unarmed` 阶段的隐藏态跟随**当前**配置（配置被替换后，下一次
    /// 渲染即读到新值）；`Animating` 阶段使用触发时捕获的快照。
    pub fn geometry(&self, config: &AnimationConfig) -> SectionGeometry {
        match self.phase {
            SectionPhase::Unarmed => SectionGeometry::hidden(config),
            SectionPhase::Animating => {
                if self.elapsed < self.delay {
                    self.hidden
                } else if self.duration <= 0.0 {
                    SectionGeometry::visible()
                } else {
                    let t = ((self.elapsed - self.delay) / self.duration).clamp(0.0, 1.0);
                    self.hidden
                        .lerp(&SectionGeometry::visible(), self.easing.apply(t))
                }
            }
            SectionPhase::Settled => SectionGeometry::visible(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AnimationDirection;
    use crate::geometry::Vec2;

    fn jump_config() -> AnimationConfig {
        AnimationConfig::default() // jump / normal / 0.5s / 0.2s
    }

    #[test]
    fn test_new_starts_unarmed() {
        let anim = SectionAnimator::new(&jump_config());
        assert_eq!(anim.phase(), SectionPhase::Unarmed);
    }

    #[test]
    fn test_none_is_permanently_settled() {
        let config = AnimationConfig {
            kind: AnimationKind::None,
            ..jump_config()
        };
        let mut anim = SectionAnimator::new(&config);
        assert!(anim.is_settled());
        assert_eq!(anim.geometry(&config), SectionGeometry::visible());

        // 可见性与时间推进都不改变任何东西
        anim.mark_visible(&config);
        assert!(!anim.update(10.0));
        assert_eq!(anim.geometry(&config), SectionGeometry::visible());
    }

    #[test]
    fn test_none_ignores_duration_and_delay() {
        // duration/delay 对 none 没有任何可观察影响
        let config = AnimationConfig {
            kind: AnimationKind::None,
            direction: AnimationDirection::Rtl,
            duration: 99.0,
            delay: 99.0,
        };
        let anim = SectionAnimator::new(&config);
        assert_eq!(anim.geometry(&config), SectionGeometry::visible());
    }

    #[test]
    fn test_unarmed_stays_hidden_indefinitely() {
        let config = jump_config();
        let mut anim = SectionAnimator::new(&config);

        // 从未收到可见性信号：隐藏态保持任意久
        for _ in 0..100 {
            assert!(!anim.update(1.0));
        }
        let g = anim.geometry(&config);
        assert_eq!(g.offset, Vec2::new(0.0, 50.0));
        assert_eq!(g.opacity, 0.0);
        assert_eq!(anim.phase(), SectionPhase::Unarmed);
    }

    #[test]
    fn test_unarmed_tracks_current_config() {
        let mut config = jump_config();
        let anim = SectionAnimator::new(&config);

        // 配置替换后，下一次渲染读到新的隐藏态
        config.kind = AnimationKind::Fade;
        config.direction = AnimationDirection::Rtl;
        let g = anim.geometry(&config);
        assert_eq!(g.offset, Vec2::new(50.0, 0.0));
        assert_eq!(g.opacity, 0.0);
    }

    #[test]
    fn test_default_scenario_timing() {
        // 默认配置（jump/normal/0.5/0.2），t=0 时触发：
        // t < 0.2 保持隐藏态，t = 0.7 起为可见态
        let config = jump_config();
        let mut anim = SectionAnimator::new(&config);
        anim.mark_visible(&config);
        assert_eq!(anim.phase(), SectionPhase::Animating);

        // 延迟期内保持隐藏态
        anim.update(0.1);
        let g = anim.geometry(&config);
        assert_eq!(g.offset, Vec2::new(0.0, 50.0));
        assert_eq!(g.opacity, 0.0);

        // 过渡中：几何介于两端之间
        anim.update(0.35); // elapsed = 0.45
        let g = anim.geometry(&config);
        assert!(g.opacity > 0.0 && g.opacity < 1.0);
        assert!(g.offset.y > 0.0 && g.offset.y < 50.0);

        // elapsed = 0.7：到达 Settled
        assert!(!anim.update(0.25));
        assert_eq!(anim.phase(), SectionPhase::Settled);
        assert_eq!(anim.geometry(&config), SectionGeometry::visible());
    }

    #[test]
    fn test_trigger_once() {
        let config = jump_config();
        let mut anim = SectionAnimator::new(&config);
        anim.mark_visible(&config);
        anim.update(0.3);

        // 重复触发被忽略，经过时间不被重置
        anim.mark_visible(&config);
        assert!(!anim.update(0.4)); // elapsed = 0.7
        assert!(anim.is_settled());
    }

    #[test]
    fn test_settled_is_immune() {
        let config = jump_config();
        let mut anim = SectionAnimator::new(&config);
        anim.mark_visible(&config);
        anim.update(1.0);
        assert!(anim.is_settled());

        // 再次触发、替换配置、继续推进：均无可见变化
        let replaced = AnimationConfig {
            kind: AnimationKind::Fade,
            direction: AnimationDirection::Ltr,
            duration: 2.0,
            delay: 1.0,
        };
        anim.mark_visible(&replaced);
        anim.update(5.0);
        assert_eq!(anim.geometry(&replaced), SectionGeometry::visible());
        assert_eq!(anim.phase(), SectionPhase::Settled);
    }

    #[test]
    fn test_animating_uses_trigger_snapshot() {
        let config = jump_config();
        let mut anim = SectionAnimator::new(&config);
        anim.mark_visible(&config);

        // 过渡播放期间替换配置：捕获的隐藏态不变
        let replaced = AnimationConfig {
            kind: AnimationKind::Fade,
            direction: AnimationDirection::Rtl,
            ..config
        };
        let g = anim.geometry(&replaced);
        assert_eq!(g.offset, Vec2::new(0.0, 50.0)); // 仍是 jump 的隐藏态
    }

    #[test]
    fn test_non_positive_total_settles_immediately() {
        let config = AnimationConfig {
            duration: 0.0,
            delay: 0.0,
            ..jump_config()
        };
        let mut anim = SectionAnimator::new(&config);
        anim.mark_visible(&config);
        assert!(anim.is_settled());

        let config = AnimationConfig {
            duration: -1.0,
            delay: 0.5,
            ..jump_config()
        };
        let mut anim = SectionAnimator::new(&config);
        anim.mark_visible(&config);
        assert!(anim.is_settled());
    }

    #[test]
    fn test_fade_rtl_hidden_geometry() {
        let config = AnimationConfig {
            kind: AnimationKind::Fade,
            direction: AnimationDirection::Rtl,
            ..jump_config()
        };
        let anim = SectionAnimator::new(&config);
        let g = anim.geometry(&config);
        assert_eq!(g.offset, Vec2::new(50.0, 0.0));
        assert_eq!(g.opacity, 0.0);
    }
}
