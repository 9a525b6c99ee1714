use crate::command::{ToolCommand, ToolSet};
use crate::constants::{
    FILE_COMMAND_ENV, GIF_OPTIMIZER_ENV, IGNORED_FILES_ENV, JPEG_OPTIMIZER_ENV,
    PNG_OPTIMIZER_ENV, REPORT_FILE_NAME, SVG_OPTIMIZER_ENV,
};
use crate::scan::expand_ignored_files;
use std::env;
use std::path::PathBuf;

/// Everything a run needs, resolved before any file is touched
#[derive(Debug, Clone)]
pub struct Config {
    pub root: PathBuf,
    /// Concrete paths expanded from `IGNORED_FILES`
    pub ignored_files: Vec<PathBuf>,
    pub tools: ToolSet,
    pub jobs: Option<usize>,
    pub report_path: PathBuf,
    pub show_progress: bool,
}

impl Config {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ignored_files: Vec::new(),
            tools: ToolSet::default(),
            jobs: None,
            report_path: PathBuf::from(REPORT_FILE_NAME),
            show_progress: false,
        }
    }

    /// Reads `IGNORED_FILES` and the tool overrides from the process environment.
    pub fn from_env(root: impl Into<PathBuf>) -> Self {
        Self::from_lookup(root, |key| env::var(key).ok())
    }

    /// Like [`Config::from_env`] with an arbitrary variable source.
    pub fn from_lookup<F>(root: impl Into<PathBuf>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new(root);

        if let Some(patterns) = lookup(IGNORED_FILES_ENV) {
            config.ignored_files = expand_ignored_files(&config.root, &patterns);
        }

        let overrides = [
            (FILE_COMMAND_ENV, &mut config.tools.file),
            (JPEG_OPTIMIZER_ENV, &mut config.tools.jpeg),
            (PNG_OPTIMIZER_ENV, &mut config.tools.png),
            (GIF_OPTIMIZER_ENV, &mut config.tools.gif),
            (SVG_OPTIMIZER_ENV, &mut config.tools.svg),
        ];
        for (key, tool) in overrides {
            if let Some(command) = lookup(key).as_deref().and_then(ToolCommand::parse) {
                *tool = command;
            }
        }

        config
    }

    pub fn with_jobs(mut self, jobs: Option<usize>) -> Self {
        self.jobs = jobs;
        self
    }

    pub fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }
}
