// Git命令封装：仓库同步与提交范围遍历

use std::path::{Path, PathBuf};
use std::process::Command;

use tracing::{debug, info};

use crate::errors::GitError;

// 字段/记录分隔符，避免提交信息中的换行干扰解析
const LOG_FIELD_SEP: char = '\x1f';
const LOG_RECORD_SEP: char = '\x1e';

/// 提交记录，extractor只读取这三个字段
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    /// 完整提交SHA
    pub hexsha: String,
    /// 提交信息首行
    pub summary: String,
    /// 完整提交信息
    pub message: String,
}

impl Commit {
    /// 7位短SHA
    pub fn short_sha(&self) -> &str {
        &self.hexsha[..self.hexsha.len().min(7)]
    }
}

/// 在指定目录下执行Git命令
pub fn run_git(work_dir: &Path, args: &[&str]) -> Result<String, GitError> {
    debug!("executing git {}", args.join(" "));
    let output = Command::new("git")
        .current_dir(work_dir)
        .args(args)
        .output()?;

    if !output.status.success() {
        return Err(GitError::CommandFailed {
            command: format!("git {}", args.join(" ")),
            status_code: output.status.code(),
            stderr: String::from_utf8_lossy(&output.stderr).to_string(),
        });
    }
    Ok(String::from_utf8_lossy(&output.stdout).to_string())
}

/// 确保本地仓库存在且为最新：已有仓库执行fetch，否则克隆master分支
///
/// 返回仓库所在路径
pub fn sync_repo(repo_url: &str, workdir: &Path, name: &str) -> Result<PathBuf, GitError> {
    let repo_path = workdir.join(name);
    if repo_path.join(".git").is_dir() {
        info!("repo {} exists, fetching last updates", repo_path.display());
        run_git(&repo_path, &["fetch", "origin"])?;
    } else {
        info!("cloning repo into {}", repo_path.display());
        run_git(workdir, &["clone", "--branch", "master", repo_url, name])?;
    }
    Ok(repo_path)
}

/// 遍历 `start^...end` 范围内的提交（不含merge提交），按git log输出顺序返回
pub fn iter_commits(repo_path: &Path, start: &str, end: &str) -> Result<Vec<Commit>, GitError> {
    let range = format!("{start}^...{end}");
    let format_arg = format!("--pretty=format:%H{LOG_FIELD_SEP}%s{LOG_FIELD_SEP}%B{LOG_RECORD_SEP}");
    let stdout = run_git(repo_path, &["log", "--no-merges", &format_arg, &range])?;

    Ok(stdout
        .split(LOG_RECORD_SEP)
        .filter_map(parse_log_record)
        .collect())
}

fn parse_log_record(record: &str) -> Option<Commit> {
    let record = record.trim_start();
    let mut fields = record.splitn(3, LOG_FIELD_SEP);
    let hexsha = fields.next()?;
    let summary = fields.next()?;
    let message = fields.next()?;
    if hexsha.is_empty() {
        return None;
    }
    Some(Commit {
        hexsha: hexsha.to_string(),
        summary: summary.to_string(),
        message: message.trim_end().to_string(),
    })
}
