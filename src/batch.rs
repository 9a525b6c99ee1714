use crate::command::ToolSet;
use crate::constants::PROGRESS_BAR_TEMPLATE;
use crate::error::Result;
use crate::optimize::optimize;
use crate::report::{Report, ReportRow};
use crate::scan::DiscoveredImage;
use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;
use std::fs;
use std::path::Path;
use tracing::{info, warn};

/// Size of a file in bytes.
///
/// A file that cannot be inspected counts as empty: the failure is logged and
/// only the accuracy of the report suffers.
pub fn measure_size(path: &Path) -> i64 {
    match fs::metadata(path) {
        Ok(metadata) => i64::try_from(metadata.len()).unwrap_or(i64::MAX),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "failed to read file size");
            0
        }
    }
}

fn optimize_one(tools: &ToolSet, image: &DiscoveredImage) -> Result<ReportRow> {
    let before = measure_size(&image.path);
    optimize(tools, image)?;
    let after = measure_size(&image.path);

    Ok(ReportRow::new(
        image.path.display().to_string(),
        before,
        after,
    ))
}

fn create_progress_bar(len: u64, visible: bool) -> ProgressBar {
    if !visible {
        return ProgressBar::hidden();
    }
    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(PROGRESS_BAR_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-"),
    );
    pb.set_message("optimizing");
    pb
}

/// Optimizes every image in parallel and aggregates the size report.
///
/// Each task measures, optimizes and measures again, then hands its row back;
/// rows are folded into the report in discovery order once all tasks are done.
/// `jobs` caps the pool width (rayon's default when `None`). The first tool
/// failure fails the whole run.
pub fn optimize_all(
    images: &[DiscoveredImage],
    tools: &ToolSet,
    jobs: Option<usize>,
    show_progress: bool,
) -> Result<Report> {
    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(num_threads) = jobs {
        builder = builder.num_threads(num_threads);
    }
    let pool = builder.build()?;

    info!(
        files = images.len(),
        threads = pool.current_num_threads(),
        "optimizing images"
    );

    let progress = create_progress_bar(images.len() as u64, show_progress);

    let rows: Result<Vec<ReportRow>> = pool.install(|| {
        images
            .par_iter()
            .map(|image| {
                let row = optimize_one(tools, image);
                progress.inc(1);
                row
            })
            .collect()
    });

    progress.finish_and_clear();

    let mut report = Report::default();
    for row in rows? {
        report.push(row);
    }
    Ok(report)
}
