//! # Section 模块
//!
//! 页面内容块的标识。每个内容块由一个独立的
//! [`SectionAnimator`](crate::animator::SectionAnimator) 包装。

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// 页面内容块
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionId {
    /// 页首装饰图案
    Emblem,
    /// 主介绍区
    Hero,
    /// 技能区
    Skills,
    /// 工作经历区
    Experience,
    /// 项目区
    Projects,
    /// 教育经历区
    Education,
    /// 语言区
    Languages,
    /// 页脚
    Footer,
}

impl SectionId {
    /// 页面内的全部内容块，按排版顺序
    pub const ALL: [SectionId; 8] = [
        SectionId::Emblem,
        SectionId::Hero,
        SectionId::Skills,
        SectionId::Experience,
        SectionId::Projects,
        SectionId::Education,
        SectionId::Languages,
        SectionId::Footer,
    ];

    /// 在 [`SectionId::ALL`] 中的下标
    pub fn index(&self) -> usize {
        match self {
            SectionId::Emblem => 0,
            SectionId::Hero => 1,
            SectionId::Skills => 2,
            SectionId::Experience => 3,
            SectionId::Projects => 4,
            SectionId::Education => 5,
            SectionId::Languages => 6,
            SectionId::Footer => 7,
        }
    }

    /// 区块标题（页脚与装饰块无标题）
    pub fn title(&self) -> Option<&'static str> {
        match self {
            SectionId::Emblem | SectionId::Hero | SectionId::Footer => None,
            SectionId::Skills => Some("Skills & Expertise"),
            SectionId::Experience => Some("Work Experience"),
            SectionId::Projects => Some("Projects"),
            SectionId::Education => Some("Education"),
            SectionId::Languages => Some("Languages"),
        }
    }
}

impl FromStr for SectionId {
    type Err = ();

    /// 从字符串解析（不区分大小写）
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "emblem" => Ok(Self::Emblem),
            "hero" => Ok(Self::Hero),
            "skills" => Ok(Self::Skills),
            "experience" => Ok(Self::Experience),
            "projects" => Ok(Self::Projects),
            "education" => Ok(Self::Education),
            "languages" => Ok(Self::Languages),
            "footer" => Ok(Self::Footer),
            _ => Err(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_all_covers_every_section() {
        assert_eq!(SectionId::ALL.len(), 8);
        // 排版顺序固定：装饰块最先，页脚最后
        assert_eq!(SectionId::ALL[0], SectionId::Emblem);
        assert_eq!(SectionId::ALL[7], SectionId::Footer);
    }

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in SectionId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_from_str() {
        assert_eq!(SectionId::from_str("hero"), Ok(SectionId::Hero));
        assert_eq!(SectionId::from_str("PROJECTS"), Ok(SectionId::Projects));
        assert_eq!(SectionId::from_str("nav"), Err(()));
    }

    #[test]
    fn test_titles() {
        assert_eq!(SectionId::Skills.title(), Some("Skills & Expertise"));
        assert_eq!(SectionId::Footer.title(), None);
    }
}
