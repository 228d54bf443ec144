//! # Content 模块
//!
//! 页面内容的静态数据模型。
//!
//! 内容是只读输入：编译期内置一份默认简历数据，也可以在启动时从
//! JSON 文件整体替换（[`PortfolioData::from_json`]）。运行期间内容
//! 永不变化。

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// 社交链接
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    /// 平台名称
    pub name: String,
    /// 链接地址
    pub url: String,
}

/// 个人信息
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    /// 姓名
    pub name: String,
    /// 头衔
    pub title: String,
    /// 联系邮箱
    pub email: String,
    /// 所在地（可为空）
    #[serde(default)]
    pub location: String,
    /// 自我介绍
    pub about: String,
    /// 社交链接
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

/// 技能熟练度层级
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Proficiency {
    /// 熟练
    Advanced,
    /// 中等
    Intermediate,
    /// 入门
    Basic,
}

impl Proficiency {
    /// 统计视图使用的等级值（百分比）
    pub fn level(&self) -> u8 {
        match self {
            Proficiency::Advanced => 90,
            Proficiency::Intermediate => 70,
            Proficiency::Basic => 50,
        }
    }

    /// 层级标签
    pub fn label(&self) -> &'static str {
        match self {
            Proficiency::Advanced => "Advanced",
            Proficiency::Intermediate => "Intermediate",
            Proficiency::Basic => "Basic",
        }
    }
}

/// 一组同熟练度的技能
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    /// 熟练度层级
    pub tier: Proficiency,
    /// 技能名称列表
    pub skills: Vec<String>,
}

/// 统计视图的单行数据
#[derive(Debug, Clone, PartialEq)]
pub struct SkillBar {
    /// 技能名称
    pub name: String,
    /// 等级值（百分比）
    pub level: u8,
    /// 所属层级
    pub tier: Proficiency,
}

/// 工作经历
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    /// 公司名称
    pub company: String,
    /// 职位
    pub role: String,
    /// 时间段
    pub period: String,
    /// 描述
    pub description: String,
    /// 使用的技术（可为空）
    #[serde(default)]
    pub technologies: Vec<String>,
}

/// 项目
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// 项目名称
    pub title: String,
    /// 时间段
    pub period: String,
    /// 描述
    pub description: String,
    /// 使用的技术
    pub technologies: Vec<String>,
}

/// 教育经历
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Education {
    /// 学位
    pub degree: String,
    /// 院校
    pub institution: String,
    /// 时间段
    pub period: String,
    /// 成绩
    pub score: String,
}

/// 语言能力
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Language {
    /// 语言名称
    pub name: String,
    /// 掌握程度
    pub level: String,
}

/// 页面内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioData {
    /// 个人信息
    pub personal: PersonalInfo,
    /// 技能分组（按熟练度从高到低排列）
    pub skills: Vec<SkillGroup>,
    /// 工作经历
    pub experience: Vec<Experience>,
    /// 项目列表
    pub projects: Vec<Project>,
    /// 教育经历
    pub education: Vec<Education>,
    /// 语言能力
    pub languages: Vec<Language>,
}

impl PortfolioData {
    /// 从 JSON 文本解析内容
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        serde_json::from_str(text).map_err(ContentError::from)
    }

    /// 展开为统计视图的行数据（按层级顺序）
    pub fn skill_bars(&self) -> Vec<SkillBar> {
        self.skills
            .iter()
            .flat_map(|group| {
                group.skills.iter().map(|name| SkillBar {
                    name: name.clone(),
                    level: group.tier.level(),
                    tier: group.tier,
                })
            })
            .collect()
    }

    /// 全部技能的平铺列表（保留分组顺序，可能含重复）
    pub fn flat_skills(&self) -> Vec<&str> {
        self.skills
            .iter()
            .flat_map(|group| group.skills.iter().map(String::as_str))
            .collect()
    }
}

impl Default for PortfolioData {
    /// 内置默认内容
    fn default() -> Self {
        fn owned(items: &[&str]) -> Vec<String> {
            items.iter().map(|s| s.to_string()).collect()
        }

        Self {
            personal: PersonalInfo {
                name: "Mohamad Ibrahim M".to_string(),
                title: "Web Developer".to_string(),
                email: "mohamadrahimsha.m99@gmail.com".to_string(),
                location: String::new(),
                about: "My career aspiration is to thrive in a professional environment \
                        within a dynamic and expanding organisation, where I can \
                        wholeheartedly contribute to both the technical growth of the \
                        company and my own professional development."
                    .to_string(),
                social: vec![
                    SocialLink {
                        name: "GitHub".to_string(),
                        url: "https://github.com/mohamadrahimsha".to_string(),
                    },
                    SocialLink {
                        name: "LinkedIn".to_string(),
                        url: "https://www.linkedin.com/in/mohamadrahimsha".to_string(),
                    },
                ],
            },
            skills: vec![
                SkillGroup {
                    tier: Proficiency::Advanced,
                    skills: owned(&["HTML", "CSS", "Tailwind CSS"]),
                },
                SkillGroup {
                    tier: Proficiency::Intermediate,
                    skills: owned(&[
                        "JavaScript",
                        "React",
                        "Angular",
                        "NodeJs",
                        "MS Office",
                        "Figma",
                        "Adobe",
                    ]),
                },
                SkillGroup {
                    tier: Proficiency::Basic,
                    skills: owned(&["dotNet", "Vue"]),
                },
            ],
            experience: vec![
                Experience {
                    company: "Hakuna Matata Pvt".to_string(),
                    role: "Full Stack Developer".to_string(),
                    period: "12/2021 - Present".to_string(),
                    description: "Actively contributed to numerous projects focused on \
                                  issue resolution and optimization, including code \
                                  upgrades and enhancements."
                        .to_string(),
                    technologies: Vec::new(),
                },
                Experience {
                    company: "Doodleblue".to_string(),
                    role: "Internship".to_string(),
                    period: "07/2021 - 11/2021".to_string(),
                    description: "Served as an intern in the role of a front-end \
                                  developer. Undertook comprehensive training in HTML, \
                                  CSS, and JavaScript."
                        .to_string(),
                    technologies: Vec::new(),
                },
            ],
            projects: vec![
                Project {
                    title: "Bank of India".to_string(),
                    period: "01/2022 - 10/2022".to_string(),
                    description: "Successfully contributed to the development and \
                                  implementation of various loan pages. Enhancing the \
                                  user experience and functionality of the Bank of India \
                                  project."
                        .to_string(),
                    technologies: owned(&["Angular", "Javascript", "Adobe Xd."]),
                },
                Project {
                    title: "Happisales".to_string(),
                    period: "02/2023 - 03/2024".to_string(),
                    description: "Played a pivotal role in new implementations and issue \
                                  resolution. Significantly improving the overall \
                                  performance and functionality of the project. Working \
                                  with Vue JS (Front-end) and NodeJs (back-end)."
                        .to_string(),
                    technologies: owned(&["Vue JS", "Node JS", "Angular Material", "Postgres"]),
                },
                Project {
                    title: "Max Healthcare".to_string(),
                    period: "03/2024 - 05/2024".to_string(),
                    description: "Developed a full-featured healthcare management system \
                                  for Max Healthcare, managing patient records, \
                                  prescriptions, and other medical details. Implemented \
                                  key features such as user authentication, data \
                                  visualization, and secure data handling."
                        .to_string(),
                    technologies: owned(&["Angular", "Angular Material", "Tailwind CSS"]),
                },
                Project {
                    title: "Tree Plantation".to_string(),
                    period: "05/2024 - 06/2024".to_string(),
                    description: "Developed an admin application for managing tree \
                                  plantation and sapling activities for Green Earth \
                                  Initiatives. Features included tracking sapling orders, \
                                  scheduling plantations, and managing volunteers."
                        .to_string(),
                    technologies: owned(&["Angular TS", "Tailwind CSS"]),
                },
                Project {
                    title: "TVSE Auction India".to_string(),
                    period: "07/2024 - 09/2024".to_string(),
                    description: "Developed an admin and customer web application for \
                                  managing the auction and bidding activities for \
                                  products. Features included the dynamic components \
                                  using angular and angular material."
                        .to_string(),
                    technologies: owned(&["Angular TS", "Angular Material", "Tailwind CSS"]),
                },
                Project {
                    title: "Survey Application".to_string(),
                    period: "09/2024 - 10/2024".to_string(),
                    description: "Developed an admin application for managing surveys and \
                                  their responses. Ensured data security and compliance \
                                  with environmental regulations."
                        .to_string(),
                    technologies: owned(&["dotNet", "Postgres", "React", "Tailwind CSS"]),
                },
                Project {
                    title: "Red FM".to_string(),
                    period: "12/2024 - 01/2025".to_string(),
                    description: "Developed and maintained a dynamic web application for \
                                  RED FM using React.js and Tailwind CSS. Designed \
                                  responsive UI components for key modules, including \
                                  live radio streaming, program schedules, and event \
                                  highlights."
                        .to_string(),
                    technologies: owned(&["React", "Tailwind CSS"]),
                },
                Project {
                    title: "Dedalus".to_string(),
                    period: "2/2024 - Present".to_string(),
                    description: "Developed and maintained a dynamic web application for \
                                  Dedalus using Angular / Material and Tailwind CSS. \
                                  Implementing the ngRx concept for maintaining the \
                                  global state management."
                        .to_string(),
                    technologies: owned(&["Angular TS", "Angular Material", "Tailwind CSS"]),
                },
                Project {
                    title: "Insect Detection in crops using CNN".to_string(),
                    period: "04/2021 - 05/2021".to_string(),
                    description: "Developed an insect detection system using \
                                  Convolutional Neural Networks. The system effectively \
                                  identifies different elements of insect species at \
                                  different growth times."
                        .to_string(),
                    technologies: owned(&["CNN", "VGG19", "Region Proposal Network"]),
                },
                Project {
                    title: "Informative Hook Site".to_string(),
                    period: "08/2019 - 09/2019".to_string(),
                    description: "Developed a comprehensive website containing major \
                                  information with optimized file size and enhanced \
                                  storage efficiency."
                        .to_string(),
                    technologies: owned(&["HTML5", "CSS3", "Bootstrap", "JavaScript"]),
                },
            ],
            education: vec![Education {
                degree: "Bachelor of Engineering".to_string(),
                institution: "Anna University - Paavai Engineering College".to_string(),
                period: "2017 - 2021".to_string(),
                score: "85%".to_string(),
            }],
            languages: vec![
                Language {
                    name: "Tamil".to_string(),
                    level: "Native".to_string(),
                },
                Language {
                    name: "English".to_string(),
                    level: "Intermediate".to_string(),
                },
                Language {
                    name: "Hindi".to_string(),
                    level: "Basic".to_string(),
                },
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_content_shape() {
        let data = PortfolioData::default();
        assert_eq!(data.personal.name, "Mohamad Ibrahim M");
        assert_eq!(data.skills.len(), 3);
        assert_eq!(data.skills[0].tier, Proficiency::Advanced);
        assert_eq!(data.projects.len(), 10);
        assert_eq!(data.languages.len(), 3);
    }

    #[test]
    fn test_skill_bars_levels() {
        let data = PortfolioData::default();
        let bars = data.skill_bars();

        // 每个技能一行，层级映射到固定等级值
        assert_eq!(bars.len(), data.flat_skills().len());
        assert!(bars
            .iter()
            .filter(|b| b.tier == Proficiency::Advanced)
            .all(|b| b.level == 90));
        assert!(bars
            .iter()
            .filter(|b| b.tier == Proficiency::Basic)
            .all(|b| b.level == 50));
    }

    #[test]
    fn test_json_roundtrip() {
        let data = PortfolioData::default();
        let json = serde_json::to_string(&data).unwrap();
        let deserialized = PortfolioData::from_json(&json).unwrap();
        assert_eq!(data, deserialized);
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(PortfolioData::from_json("not json").is_err());
        assert!(PortfolioData::from_json("{}").is_err());
    }

    #[test]
    fn test_optional_fields_default() {
        // location / social / technologies 允许缺省
        let json = r#"{
            "personal": {
                "name": "A", "title": "B", "email": "a@b.c", "about": "d"
            },
            "skills": [{ "tier": "advanced", "skills": ["Rust"] }],
            "experience": [{
                "company": "X", "role": "Y", "period": "Z", "description": "W"
            }],
            "projects": [],
            "education": [],
            "languages": []
        }"#;
        let data = PortfolioData::from_json(json).unwrap();
        assert!(data.personal.social.is_empty());
        assert!(data.experience[0].technologies.is_empty());
    }
}
