// 最终报告行的累积与格式化

use std::fmt;

use crate::extract::CommitGroup;

/// 一条安全issue报告：短SHA、提交标题、跟踪器链接
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportLine {
    pub short_hash: String,
    pub title: String,
    pub link: String,
}

impl ReportLine {
    pub fn new(group: &CommitGroup, link: String) -> Self {
        Self {
            short_hash: group.hexsha.chars().take(7).collect(),
            title: group.title.clone(),
            link,
        }
    }
}

impl fmt::Display for ReportLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {}", self.short_hash, self.title, self.link)
    }
}

/// 按分类顺序累积报告行
#[derive(Debug, Default)]
pub struct Report {
    lines: Vec<ReportLine>,
}

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn extend(&mut self, lines: impl IntoIterator<Item = ReportLine>) {
        self.lines.extend(lines);
    }

    pub fn lines(&self) -> &[ReportLine] {
        &self.lines
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}
