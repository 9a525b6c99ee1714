pub mod batch;
pub mod classify;
pub mod cli;
pub mod command;
pub mod config;
pub mod constants;
pub mod error;
pub mod logger;
pub mod optimize;
pub mod pipeline;
pub mod report;
pub mod scan;
pub mod units;

pub use batch::{measure_size, optimize_all};
pub use classify::{classify, ImageType};
pub use command::{ToolCommand, ToolSet};
pub use config::Config;
pub use error::{OptimizeError, Result};
pub use optimize::optimize;
pub use pipeline::{run, Outcome};
pub use report::{Report, ReportRow, RunTotals};
pub use scan::{discover_images, expand_ignored_files, DiscoveredImage, IgnoreMatcher};
pub use units::{diff_rate, format_bytes};
