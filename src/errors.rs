use thiserror::Error;

use crate::tracker::Tracker;

/// secnotes 统一错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Git command error: {0}")]
    Git(#[from] GitError),
    #[error("Tracker error: {0}")]
    Tracker(#[from] TrackerError),
    #[error("Wrong url format: {0}")]
    InvalidUrl(String),
    #[error("I/O error while {0}: {1}")]
    IO(String, #[source] std::io::Error),
}

/// 跟踪器分类阶段的错误
#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("functionality for tracker {0} isn't implemented")]
    Unsupported(Tracker),
    #[error("failed to fetch tracker page: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("no bug title found on tracker page {link}")]
    TitleMissing { link: String },
}

/// Git 命令执行错误
#[derive(Debug, Error)]
pub enum GitError {
    #[error("command '{command}' failed with status {status_code:?}: {stderr}")]
    CommandFailed {
        command: String,
        status_code: Option<i32>,
        stderr: String,
    },
    #[error("failed to run git: {0}")]
    Io(#[from] std::io::Error),
}
