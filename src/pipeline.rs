use crate::batch::optimize_all;
use crate::config::Config;
use crate::constants::{ALREADY_OPTIMIZED_MESSAGE, NO_IMAGES_MESSAGE, SUCCESS_MESSAGE};
use crate::error::Result;
use crate::scan::{discover_images, IgnoreMatcher};
use crate::units::{diff_rate, format_bytes};
use std::path::PathBuf;
use tracing::info;

/// How a run ended when nothing went wrong
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// No supported image below the root, nothing written
    NoImages,
    /// Optimizers ran but the total size did not change, nothing written
    AlreadyOptimized,
    /// The report was written to `report_path`
    Optimized {
        report_path: PathBuf,
        files: usize,
        delta: i64,
        rate: String,
    },
}

impl Outcome {
    /// The status line printed on stdout
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::NoImages => NO_IMAGES_MESSAGE,
            Outcome::AlreadyOptimized => ALREADY_OPTIMIZED_MESSAGE,
            Outcome::Optimized { .. } => SUCCESS_MESSAGE,
        }
    }

    /// What was saved and where the report went, for a written report only
    pub fn detail(&self) -> Option<String> {
        match self {
            Outcome::Optimized {
                report_path,
                files,
                delta,
                rate,
            } => Some(format!(
                "{} files, File size: {} ({}), report: {}",
                files,
                format_bytes(*delta),
                rate,
                report_path.display()
            )),
            _ => None,
        }
    }
}

/// Discover, optimize, and report.
pub fn run(config: &Config) -> Result<Outcome> {
    let ignore = IgnoreMatcher::new(&config.ignored_files);
    let images = discover_images(&config.root, &ignore, &config.tools)?;
    if images.is_empty() {
        return Ok(Outcome::NoImages);
    }
    info!(count = images.len(), root = %config.root.display(), "discovered images");

    let report = optimize_all(&images, &config.tools, config.jobs, config.show_progress)?;

    let delta = report.totals.delta();
    if delta == 0 {
        return Ok(Outcome::AlreadyOptimized);
    }

    report.write_to(&config.report_path)?;
    info!(
        path = %config.report_path.display(),
        delta = %format_bytes(delta),
        "report written"
    );

    Ok(Outcome::Optimized {
        report_path: config.report_path.clone(),
        files: report.rows.len(),
        delta,
        rate: diff_rate(report.totals.before, report.totals.after),
    })
}
