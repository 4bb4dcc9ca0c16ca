// 提交信息中的issue引用提取
//
// 对每个启用提取的跟踪器扫描提交全文，把匹配到的issue id
// 按 跟踪器 -> 提交 分组累积到 ReferenceMap 中

use std::collections::HashMap;

use crate::git::Commit;
use crate::tracker::{self, Tracker};

/// 单个提交在某个跟踪器下引用的issue集合
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitGroup {
    /// 完整提交SHA
    pub hexsha: String,
    /// 提交标题（信息首行）
    pub title: String,
    /// 按匹配顺序排列的issue id，允许重复
    pub bugs_ref: Vec<String>,
}

/// 一次扫描运行的引用累积结果
///
/// 每个跟踪器下的分组保持提交遇到顺序，分类阶段按该顺序消费，
/// 因此最终报告的顺序是确定的
#[derive(Debug, Default)]
pub struct ReferenceMap {
    groups: HashMap<Tracker, Vec<CommitGroup>>,
}

impl ReferenceMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// 扫描单个提交，把发现的issue引用并入映射
    ///
    /// 没有任何匹配的提交不会留下空分组
    pub fn extract(&mut self, commit: &Commit) {
        for tracker in Tracker::ALL {
            if !tracker.extraction_enabled() {
                continue;
            }
            let Some(pattern) = tracker.pattern() else {
                continue;
            };

            let ids: Vec<String> = pattern
                .find_iter(&commit.message)
                .filter(|m| !m.as_str().is_empty())
                .filter_map(|m| tracker::issue_id(m.as_str()))
                .collect();
            if ids.is_empty() {
                continue;
            }

            let groups = self.groups.entry(tracker).or_default();
            if let Some(group) = groups.iter_mut().find(|g| g.hexsha == commit.hexsha) {
                group.bugs_ref.extend(ids);
            } else {
                groups.push(CommitGroup {
                    hexsha: commit.hexsha.clone(),
                    title: commit.summary.clone(),
                    bugs_ref: ids,
                });
            }
        }
    }

    /// 某个跟踪器下的分组，按提交遇到顺序
    pub fn groups(&self, tracker: Tracker) -> &[CommitGroup] {
        self.groups.get(&tracker).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.groups.values().all(Vec::is_empty)
    }
}
