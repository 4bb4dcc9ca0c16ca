// 跟踪器安全issue分类
//
// 逐个抓取被引用issue的跟踪器页面，从页面标题判断是否为安全公告。
// 整个管线是同步阻塞的，单个抓取/解析失败会中止该跟踪器剩余批次

use std::time::Duration;

use scraper::{Html, Selector};
use tracing::{debug, info};

use crate::errors::TrackerError;
use crate::extract::ReferenceMap;
use crate::report::ReportLine;
use crate::tracker::Tracker;

const FETCH_TIMEOUT_SECONDS: u64 = 10;

/// Launchpad安全公告的标题前缀
const SECURITY_MARKER: &str = "[OSSA-";

/// 跟踪器页面分类器
#[derive(Debug)]
pub struct Classifier {
    client: reqwest::blocking::Client,
}

impl Classifier {
    pub fn new() -> Result<Self, TrackerError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECONDS))
            .build()?;
        Ok(Self { client })
    }

    /// 对某个跟踪器下的全部引用分类，返回命中安全公告的报告行
    ///
    /// 未实现的跟踪器立即报错，即使它没有任何引用
    pub fn classify(
        &self,
        tracker: Tracker,
        references: &ReferenceMap,
    ) -> Result<Vec<ReportLine>, TrackerError> {
        if !tracker.classification_supported() {
            return Err(TrackerError::Unsupported(tracker));
        }

        info!("crawling tracker {tracker} for security issues");
        let mut lines = Vec::new();
        for group in references.groups(tracker) {
            for bug_number in &group.bugs_ref {
                let link = tracker.issue_link(bug_number);
                debug!("fetching {link}");
                let body = self.fetch(&link)?;
                let title = parse_bug_title(&body)
                    .ok_or_else(|| TrackerError::TitleMissing { link: link.clone() })?;
                if is_security_advisory(&title) {
                    lines.push(ReportLine::new(group, link));
                }
            }
        }
        Ok(lines)
    }

    fn fetch(&self, url: &str) -> Result<String, TrackerError> {
        let response = self.client.get(url).send()?;
        Ok(response.text()?)
    }
}

/// 从issue页面HTML中取第一个 `<h1><span>` 的文本作为规范标题
pub(crate) fn parse_bug_title(html: &str) -> Option<String> {
    let document = Html::parse_document(html);
    let selector = Selector::parse("h1 > span").ok()?;
    document
        .select(&selector)
        .next()
        .map(|element| element.text().collect::<String>())
}

/// 标题以安全公告标记开头（大小写敏感）
pub(crate) fn is_security_advisory(title: &str) -> bool {
    title.trim_start().starts_with(SECURITY_MARKER)
}
