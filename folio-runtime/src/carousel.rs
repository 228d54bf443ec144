//! # Carousel 模块
//!
//! 技能跑马灯的纯逻辑：去重、首尾相接的循环列表与时间驱动的偏移。
//!
//! 渲染层把 [`SkillCarousel::items`] 横向排开，整条按
//! [`SkillCarousel::offset`] 平移；列表被复制一倍，偏移在走到一半时
//! 回绕，视觉上形成无缝循环。

/// 默认完整一圈的时长（秒）
pub const DEFAULT_LOOP_SECS: f32 = 40.0;

/// 技能跑马灯
#[derive(Debug, Clone)]
pub struct SkillCarousel {
    /// 去重后的技能列表，复制一倍以便无缝循环
    items: Vec<String>,
    /// 完整一圈的时长（秒）
    loop_secs: f32,
    /// 累计时间
    elapsed: f32,
}

impl SkillCarousel {
    /// 由平铺技能列表创建
    ///
    /// 去重保留首次出现的顺序，然后整体复制一份接在尾部。
    pub fn new<I, S>(skills: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut unique: Vec<String> = Vec::new();
        for skill in skills {
            let skill = skill.into();
            if !unique.contains(&skill) {
                unique.push(skill);
            }
        }

        let mut items = unique.clone();
        items.extend(unique);

        Self {
            items,
            loop_secs: DEFAULT_LOOP_SECS,
            elapsed: 0.0,
        }
    }

    /// 设置完整一圈的时长
    pub fn with_loop_secs(mut self, secs: f32) -> Self {
        self.loop_secs = secs.max(0.1);
        self
    }

    /// 推进时间
    pub fn update(&mut self, dt: f32) {
        self.elapsed = (self.elapsed + dt) % self.loop_secs;
    }

    /// 循环列表（原列表 + 复制的一份）
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// 去重后的条目数（半条列表的长度）
    pub fn unique_len(&self) -> usize {
        self.items.len() / 2
    }

    /// 当前偏移，取值 `[0, 0.5)`，单位是整条（双倍）列表的宽度占比
    pub fn offset(&self) -> f32 {
        self.elapsed / self.loop_secs * 0.5
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dedup_preserves_order() {
        let carousel = SkillCarousel::new(["React", "CSS", "React", "HTML", "CSS"]);
        assert_eq!(carousel.unique_len(), 3);
        assert_eq!(
            &carousel.items()[..3],
            &["React".to_string(), "CSS".to_string(), "HTML".to_string()]
        );
    }

    #[test]
    fn test_items_are_doubled() {
        let carousel = SkillCarousel::new(["A", "B"]);
        assert_eq!(carousel.items(), &["A", "B", "A", "B"]);
    }

    #[test]
    fn test_offset_wraps_at_half() {
        let mut carousel = SkillCarousel::new(["A", "B"]).with_loop_secs(10.0);
        assert_eq!(carousel.offset(), 0.0);

        carousel.update(5.0);
        assert!((carousel.offset() - 0.25).abs() < 1e-6);

        // 一整圈后回到起点
        carousel.update(5.0);
        assert!(carousel.offset() < 1e-6);
    }
}
