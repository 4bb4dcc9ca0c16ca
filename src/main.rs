use std::fs;

use clap::Parser;
use tracing::info;

use secnotes::args::Args;
use secnotes::classify::Classifier;
use secnotes::errors::AppError;
use secnotes::extract::ReferenceMap;
use secnotes::report::Report;
use secnotes::tracker::Tracker;
use secnotes::{gerrit, git};

fn main() -> Result<(), AppError> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let repo_url = gerrit::repo_url(
        &args.gerrit,
        &args.project,
        Some(&args.gerrit_username),
        Some(&args.gerrit_password),
    )?;

    let workdir = args.workdir();
    fs::create_dir_all(&workdir)
        .map_err(|e| AppError::IO(format!("creating workdir {}", workdir.display()), e))?;
    let repo_path = git::sync_repo(&repo_url, &workdir, project_basename(&args.project))?;

    info!("start analyzing commits");
    let commits = git::iter_commits(&repo_path, &args.start_commit, &args.end_commit)?;
    let mut references = ReferenceMap::new();
    for commit in &commits {
        references.extract(commit);
    }

    let classifier = Classifier::new()?;
    let mut report = Report::new();
    for tracker in Tracker::ALL {
        if !tracker.extraction_enabled() {
            continue;
        }
        report.extend(classifier.classify(tracker, &references)?);
    }

    for line in report.lines() {
        println!("{line}");
    }
    Ok(())
}

fn project_basename(project: &str) -> &str {
    project.rsplit('/').next().unwrap_or(project)
}
