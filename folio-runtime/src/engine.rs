//! # Engine 模块
//!
//! 页面引擎：配置的唯一持有者。
//!
//! ## 执行模型
//!
//! ```text
//! tick(dt, inputs) -> Vec<Command>
//! ```
//!
//! 1. 首次 tick 时向 Host 公告初始主题
//! 2. 处理 Host 送入的语义化事件（可见性、配置替换、下载流程）
//! 3. 按 `dt` 推进每个内容块的动画状态机
//! 4. 返回本次产生的全部 Command
//!
//! 配置替换是原子的整值交换：任何内容块都不可能读到半新半旧的
//! 配置。每个内容块的动画状态彼此独立，全部运行在单线程的事件
//! 循环上。

use crate::animator::{SectionAnimator, SectionPhase};
use crate::command::{Command, ThemeMode, ToastKind};
use crate::config::PortfolioConfig;
use crate::geometry::SectionGeometry;
use crate::input::{DownloadOutcome, PageInput};
use crate::section::SectionId;

/// 页面引擎
///
/// # 使用示例
///
/// ```ignore
/// let mut page = PortfolioPage::new(PortfolioConfig::default());
///
/// loop {
///     let commands = page.tick(dt, &inputs);
///
///     // Host 执行 commands，绘制时读取每个内容块的几何状态
///     for id in SectionId::ALL {
///         draw_section(id, page.geometry(id));
///     }
/// }
/// ```
pub struct PortfolioPage {
    /// 当前配置（整值替换，不做原地修改）
    config: PortfolioConfig,
    /// 每个内容块的动画实例，下标与 [`SectionId::ALL`] 对应
    animators: [SectionAnimator; SectionId::ALL.len()],
    /// 是否已向 Host 公告初始主题
    theme_announced: bool,
    /// 是否有一次下载流程在进行中
    download_in_flight: bool,
}

impl PortfolioPage {
    /// 创建页面引擎
    pub fn new(config: PortfolioConfig) -> Self {
        Self {
            config,
            animators: SectionId::ALL.map(|_| SectionAnimator::new(&config.animation)),
            theme_announced: false,
            download_in_flight: false,
        }
    }

    /// 当前配置
    pub fn config(&self) -> &PortfolioConfig {
        &self.config
    }

    /// 是否有下载流程在进行中
    pub fn is_downloading(&self) -> bool {
        self.download_in_flight
    }

    /// 内容块的当前几何状态
    pub fn geometry(&self, id: SectionId) -> SectionGeometry {
        self.animators[id.index()].geometry(&self.config.animation)
    }

    /// 内容块的当前动画阶段
    pub fn phase(&self, id: SectionId) -> SectionPhase {
        self.animators[id.index()].phase()
    }

    /// 核心驱动函数
    ///
    /// # 参数
    ///
    /// - `dt`: 距上次 tick 的时间（秒）
    /// - `inputs`: 本帧采集到的全部输入
    ///
    /// # 返回
    ///
    /// 本次 tick 产生的所有指令。
    pub fn tick(&mut self, dt: f32, inputs: &[PageInput]) -> Vec<Command> {
        let mut commands = Vec::new();

        // 1. 初始主题公告（仅一次）
        if !self.theme_announced {
            self.theme_announced = true;
            commands.push(Command::SetRootTheme {
                mode: ThemeMode::from_dark_flag(self.config.style.dark_mode),
            });
        }

        // 2. 处理输入
        for input in inputs {
            self.handle_input(input, &mut commands);
        }

        // 3. 推进动画
        for animator in &mut self.animators {
            animator.update(dt);
        }

        commands
    }

    /// 处理单个输入事件
    fn handle_input(&mut self, input: &PageInput, commands: &mut Vec<Command>) {
        match input {
            PageInput::SectionEntered { id } => {
                self.animators[id.index()].mark_visible(&self.config.animation);
            }

            // 可见性回落对动画没有意义（trigger-once）
            PageInput::SectionLeft { .. } => {}

            PageInput::ReplaceConfig { config } => {
                let was_dark = self.config.style.dark_mode;
                self.config = *config;

                // 只有 dark_mode 实际翻转时才镜像主题属性
                if self.config.style.dark_mode != was_dark {
                    commands.push(Command::SetRootTheme {
                        mode: ThemeMode::from_dark_flag(self.config.style.dark_mode),
                    });
                }
            }

            PageInput::DownloadRequested => {
                // 同一时刻至多一次下载流程，不排队、不重试
                if !self.download_in_flight {
                    self.download_in_flight = true;
                    commands.push(Command::FetchResume);
                }
            }

            PageInput::DownloadFinished { outcome } => {
                self.download_in_flight = false;
                commands.push(match outcome {
                    DownloadOutcome::Saved { path } => Command::ShowToast {
                        kind: ToastKind::Success,
                        message: format!("Resume saved to {path}"),
                    },
                    DownloadOutcome::Failed { reason } => Command::ShowToast {
                        kind: ToastKind::Error,
                        message: format!("Download failed: {reason}"),
                    },
                });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AnimationDirection, AnimationKind};
    use crate::edit::ConfigEdit;
    use crate::geometry::Vec2;

    fn page() -> PortfolioPage {
        PortfolioPage::new(PortfolioConfig::default())
    }

    /// 吃掉首次 tick 的主题公告
    fn primed_page() -> PortfolioPage {
        let mut page = page();
        page.tick(0.0, &[]);
        page
    }

    #[test]
    fn test_first_tick_announces_theme() {
        let mut page = page();
        let commands = page.tick(0.0, &[]);
        assert_eq!(
            commands,
            vec![Command::SetRootTheme {
                mode: ThemeMode::Light
            }]
        );

        // 之后不再重复公告
        assert!(page.tick(0.0, &[]).is_empty());
    }

    #[test]
    fn test_sections_start_hidden() {
        let page = primed_page();
        for id in SectionId::ALL {
            assert_eq!(page.phase(id), SectionPhase::Unarmed);
            assert_eq!(page.geometry(id).opacity, 0.0);
        }
    }

    #[test]
    fn test_none_config_renders_visible_from_first_frame() {
        let mut config = PortfolioConfig::default();
        config.animation.kind = AnimationKind::None;
        let page = PortfolioPage::new(config);

        for id in SectionId::ALL {
            assert_eq!(page.phase(id), SectionPhase::Settled);
            assert_eq!(page.geometry(id), SectionGeometry::visible());
        }
    }

    #[test]
    fn test_entered_section_settles_after_delay_plus_duration() {
        let mut page = primed_page();

        // t=0 触发 Hero；默认 delay 0.2 + duration 0.5
        page.tick(0.0, &[PageInput::entered(SectionId::Hero)]);
        assert_eq!(page.phase(SectionId::Hero), SectionPhase::Animating);

        // 延迟期内仍是隐藏态几何
        page.tick(0.1, &[]);
        let g = page.geometry(SectionId::Hero);
        assert_eq!(g.offset, Vec2::new(0.0, 50.0));
        assert_eq!(g.opacity, 0.0);

        // 未触发的其他内容块不受影响
        assert_eq!(page.phase(SectionId::Skills), SectionPhase::Unarmed);

        // 0.7 秒后到达 Settled，且此后可见性回落不再有影响
        page.tick(0.6, &[]);
        assert_eq!(page.phase(SectionId::Hero), SectionPhase::Settled);
        page.tick(0.1, &[PageInput::left(SectionId::Hero)]);
        assert_eq!(page.geometry(SectionId::Hero), SectionGeometry::visible());
    }

    #[test]
    fn test_replace_config_mirrors_theme_only_on_dark_change() {
        let mut page = primed_page();

        // dark_mode 翻转 → 镜像主题
        let dark = ConfigEdit::DarkMode(true).apply(page.config());
        let commands = page.tick(0.0, &[PageInput::replace(dark)]);
        assert_eq!(
            commands,
            vec![Command::SetRootTheme {
                mode: ThemeMode::Dark
            }]
        );

        // 其他样式字段不触碰主题属性
        let radius = ConfigEdit::BorderRadius(16.0).apply(page.config());
        assert!(page.tick(0.0, &[PageInput::replace(radius)]).is_empty());
        assert_eq!(page.config().style.border_radius, 16.0);

        // 翻回 light
        let light = ConfigEdit::DarkMode(false).apply(page.config());
        let commands = page.tick(0.0, &[PageInput::replace(light)]);
        assert_eq!(
            commands,
            vec![Command::SetRootTheme {
                mode: ThemeMode::Light
            }]
        );
    }

    #[test]
    fn test_settled_section_ignores_config_replacement() {
        let mut page = primed_page();
        page.tick(0.0, &[PageInput::entered(SectionId::Hero)]);
        page.tick(1.0, &[]);
        assert_eq!(page.phase(SectionId::Hero), SectionPhase::Settled);

        // 替换为截然不同的动画配置：已完成的内容块无可见变化
        let mut replaced = *page.config();
        replaced.animation.kind = AnimationKind::Fade;
        replaced.animation.direction = AnimationDirection::Rtl;
        replaced.animation.duration = 2.0;
        page.tick(0.0, &[PageInput::replace(replaced)]);

        assert_eq!(page.geometry(SectionId::Hero), SectionGeometry::visible());
        assert_eq!(page.phase(SectionId::Hero), SectionPhase::Settled);

        // 尚未触发的内容块在下一次渲染即读到新隐藏态
        let g = page.geometry(SectionId::Skills);
        assert_eq!(g.offset, Vec2::new(50.0, 0.0));
    }

    #[test]
    fn test_download_flow_success() {
        let mut page = primed_page();

        let commands = page.tick(0.0, &[PageInput::DownloadRequested]);
        assert_eq!(commands, vec![Command::FetchResume]);
        assert!(page.is_downloading());

        // 进行中重复请求被忽略
        assert!(page.tick(0.0, &[PageInput::DownloadRequested]).is_empty());

        let commands = page.tick(
            0.0,
            &[PageInput::DownloadFinished {
                outcome: DownloadOutcome::Saved {
                    path: "downloads/resume.pdf".to_string(),
                },
            }],
        );
        assert!(!page.is_downloading());
        assert_eq!(
            commands,
            vec![Command::ShowToast {
                kind: ToastKind::Success,
                message: "Resume saved to downloads/resume.pdf".to_string(),
            }]
        );
    }

    #[test]
    fn test_download_flow_failure_then_retry_by_reattempt() {
        let mut page = primed_page();
        page.tick(0.0, &[PageInput::DownloadRequested]);

        let commands = page.tick(
            0.0,
            &[PageInput::DownloadFinished {
                outcome: DownloadOutcome::Failed {
                    reason: "resume.pdf not found".to_string(),
                },
            }],
        );
        assert_eq!(
            commands,
            vec![Command::ShowToast {
                kind: ToastKind::Error,
                message: "Download failed: resume.pdf not found".to_string(),
            }]
        );

        // 失败后用户可以重新发起（无自动重试）
        let commands = page.tick(0.0, &[PageInput::DownloadRequested]);
        assert_eq!(commands, vec![Command::FetchResume]);
    }
}
