//! 引用提取到报告生成的管线测试
//!
//! 不触网：分类器的页面解析与安全标记判定在单元测试中覆盖，
//! 这里验证提取、分组、报告格式化的端到端行为

use secnotes::classify::Classifier;
use secnotes::errors::TrackerError;
use secnotes::git::Commit;
use secnotes::{ReferenceMap, ReportLine, Tracker};

fn commit(hexsha: &str, summary: &str, body: &str) -> Commit {
    Commit {
        hexsha: hexsha.to_string(),
        summary: summary.to_string(),
        message: format!("{summary}\n\n{body}"),
    }
}

#[test]
fn test_extraction_over_commit_range() {
    let commits = vec![
        commit("abcdef1234567", "Fix leak.", "Closes-Bug: #999"),
        commit("1111111aaaaaa", "Refactor", "No references here"),
        commit(
            "2222222bbbbbb",
            "Fix two bugs",
            "Closes-Bug:#45\nRelated-Bug: 46",
        ),
    ];

    let mut references = ReferenceMap::new();
    for c in &commits {
        references.extract(c);
    }

    let groups = references.groups(Tracker::Launchpad);
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].hexsha, "abcdef1234567");
    assert_eq!(groups[0].bugs_ref, vec!["999"]);
    assert_eq!(groups[1].hexsha, "2222222bbbbbb");
    assert_eq!(groups[1].bugs_ref, vec!["45", "46"]);
}

#[test]
fn test_report_line_from_extracted_group() {
    let mut references = ReferenceMap::new();
    references.extract(&commit("abcdef1234567", "Fix leak.", "Closes-Bug: #999"));

    let group = &references.groups(Tracker::Launchpad)[0];
    let link = Tracker::Launchpad.issue_link(&group.bugs_ref[0]);
    let line = ReportLine::new(group, link);

    assert_eq!(
        line.to_string(),
        "abcdef1 Fix leak. https://launchpad.net/bugs/999"
    );
}

#[test]
fn test_unsupported_trackers_never_return_empty_success() {
    let classifier = Classifier::new().unwrap();
    let references = ReferenceMap::new();

    for tracker in [Tracker::Storyboard, Tracker::Jira] {
        let result = classifier.classify(tracker, &references);
        assert!(
            matches!(result, Err(TrackerError::Unsupported(t)) if t == tracker),
            "tracker {tracker} should be rejected"
        );
    }
}
