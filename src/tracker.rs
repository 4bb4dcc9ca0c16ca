// 跟踪器定义与issue引用模式注册表
//
// 每个跟踪器变体携带：引用识别模式、issue链接模板、
// 以及提取/分类两个能力开关

use std::fmt;

use lazy_static::lazy_static;
use regex::Regex;

const STORYBOARD_STORY_LINK: &str = "https://storyboard.openstack.org/#!/story/";
const LAUNCHPAD_BUG_LINK: &str = "https://launchpad.net/bugs/";
const JIRA_TASK_LINK: &str = "https://mirantis.jira.com/browse/";

lazy_static! {
    static ref LAUNCHPAD_ISSUE_PATTERN: Regex = Regex::new(
        r"(?i)(?:Closes-Bug|Close-Bug|Partial-Bug|Related-Bug|Fixes-Bug|Fix-Bug):?\s?#?\d+"
    )
    .expect("launchpad issue pattern");
    static ref STORYBOARD_ISSUE_PATTERN: Regex =
        Regex::new(r"(?i)(?:Story|Task):\s?#?\d+").expect("storyboard issue pattern");
    static ref JIRA_ISSUE_PATTERN: Regex =
        Regex::new(r"(?i)PROD[-:]\d+").expect("jira issue pattern");
    static ref ISSUE_ID_PATTERN: Regex = Regex::new(r"\d+").expect("issue id pattern");
}

/// 支持的issue跟踪器
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tracker {
    Launchpad,
    Storyboard,
    Jira,
}

impl Tracker {
    pub const ALL: [Tracker; 3] = [Tracker::Launchpad, Tracker::Storyboard, Tracker::Jira];

    pub fn name(&self) -> &'static str {
        match self {
            Tracker::Launchpad => "launchpad",
            Tracker::Storyboard => "storyboard",
            Tracker::Jira => "jira",
        }
    }

    /// 提交信息中识别issue引用的模式
    ///
    /// 返回 `None` 表示该跟踪器还没有定义引用模式
    pub fn pattern(&self) -> Option<&'static Regex> {
        match self {
            Tracker::Launchpad => Some(&LAUNCHPAD_ISSUE_PATTERN),
            Tracker::Storyboard => Some(&STORYBOARD_ISSUE_PATTERN),
            Tracker::Jira => Some(&JIRA_ISSUE_PATTERN),
        }
    }

    /// 是否在提交扫描阶段启用该跟踪器
    ///
    /// 显式的能力开关：Storyboard/Jira 的模式已定义但暂未激活
    pub fn extraction_enabled(&self) -> bool {
        matches!(self, Tracker::Launchpad)
    }

    /// 是否实现了该跟踪器的安全issue分类
    pub fn classification_supported(&self) -> bool {
        matches!(self, Tracker::Launchpad)
    }

    pub fn base_link(&self) -> &'static str {
        match self {
            Tracker::Launchpad => LAUNCHPAD_BUG_LINK,
            Tracker::Storyboard => STORYBOARD_STORY_LINK,
            Tracker::Jira => JIRA_TASK_LINK,
        }
    }

    /// 拼接issue页面链接
    pub fn issue_link(&self, issue_id: &str) -> String {
        format!("{}{}", self.base_link(), issue_id)
    }
}

impl fmt::Display for Tracker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 从原始匹配文本中取第一段连续数字作为issue id
pub(crate) fn issue_id(raw_match: &str) -> Option<String> {
    ISSUE_ID_PATTERN
        .find(raw_match)
        .map(|m| m.as_str().to_string())
}
