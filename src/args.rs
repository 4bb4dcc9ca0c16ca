use clap::Parser;
use std::path::PathBuf;

/// secnotes - 参数解析
#[derive(Parser, Debug)]
#[command(name = "secnotes")]
#[command(about = "分析从起始提交到结束提交的git日志，提取bug引用，并扫描bug跟踪器中的安全issue")]
pub struct Args {
    /// Gerrit地址（完整的HTTP(S) URL）
    #[arg(long, default_value = "https://gerrit.mcp.mirantis.com")]
    pub gerrit: String,

    /// 项目仓库的存储目录，默认为系统临时目录下的secnotes
    #[arg(long)]
    pub workdir: Option<PathBuf>,

    /// 访问Gerrit HTTP API/仓库的用户名
    #[arg(long)]
    pub gerrit_username: String,

    /// Gerrit HTTP密码
    #[arg(long)]
    pub gerrit_password: String,

    /// Gerrit项目名称
    #[arg(long)]
    pub project: String,

    /// 起始提交SHA，在日志历史中必须位于--end-commit之前
    #[arg(long)]
    pub start_commit: String,

    /// 结束提交SHA，在日志历史中必须位于--start-commit之后
    #[arg(long)]
    pub end_commit: String,
}

impl Args {
    pub fn workdir(&self) -> PathBuf {
        self.workdir
            .clone()
            .unwrap_or_else(|| std::env::temp_dir().join("secnotes"))
    }
}
