use crate::constants::{
    DEFAULT_FILE_COMMAND, DEFAULT_GIF_OPTIMIZER, DEFAULT_JPEG_OPTIMIZER, DEFAULT_PNG_OPTIMIZER,
    DEFAULT_SVG_OPTIMIZER,
};
use crate::error::{OptimizeError, Result};
use std::ffi::OsStr;
use std::process::Command;
use tracing::debug;

/// An external program together with the arguments that always precede
/// the per-call arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolCommand {
    pub program: String,
    pub leading_args: Vec<String>,
}

impl ToolCommand {
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            leading_args: Vec::new(),
        }
    }

    /// Parse a command line such as `npx svgo` into program and leading
    /// arguments. Returns `None` for a blank value.
    pub fn parse(value: &str) -> Option<Self> {
        let mut words = value.split_whitespace();
        let program = words.next()?;
        Some(Self {
            program: program.to_string(),
            leading_args: words.map(str::to_string).collect(),
        })
    }

    /// Run the program to completion and return its standard output.
    ///
    /// A program that cannot be started, or that exits unsuccessfully, is
    /// reported as an error; there is no retry and no timeout.
    pub fn run<I, S>(&self, args: I) -> Result<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        let mut command = Command::new(&self.program);
        command.args(&self.leading_args).args(args);
        debug!(command = ?command, "running external tool");

        let output = command.output().map_err(|source| OptimizeError::CommandSpawn {
            program: self.program.clone(),
            source,
        })?;

        if !output.status.success() {
            return Err(OptimizeError::CommandFailed {
                program: self.program.clone(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

/// The external collaborators used for classification and optimization
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolSet {
    pub file: ToolCommand,
    pub jpeg: ToolCommand,
    pub png: ToolCommand,
    pub gif: ToolCommand,
    pub svg: ToolCommand,
}

impl Default for ToolSet {
    fn default() -> Self {
        Self {
            file: ToolCommand::new(DEFAULT_FILE_COMMAND),
            jpeg: ToolCommand::new(DEFAULT_JPEG_OPTIMIZER),
            png: ToolCommand::new(DEFAULT_PNG_OPTIMIZER),
            gif: ToolCommand::new(DEFAULT_GIF_OPTIMIZER),
            svg: ToolCommand::new(DEFAULT_SVG_OPTIMIZER),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tool_command() {
        let cmd = ToolCommand::parse("npx  svgo --quiet").unwrap();
        assert_eq!(cmd.program, "npx");
        assert_eq!(cmd.leading_args, vec!["svgo", "--quiet"]);

        let cmd = ToolCommand::parse("jpegoptim").unwrap();
        assert_eq!(cmd, ToolCommand::new("jpegoptim"));

        assert!(ToolCommand::parse("").is_none());
        assert!(ToolCommand::parse("   ").is_none());
    }

    #[test]
    fn test_default_tool_set() {
        let tools = ToolSet::default();
        assert_eq!(tools.file.program, "file");
        assert_eq!(tools.jpeg.program, "jpegoptim");
        assert_eq!(tools.png.program, "optipng");
        assert_eq!(tools.gif.program, "gifsicle");
        assert_eq!(tools.svg.program, "svgo");
    }

    #[test]
    fn test_run_missing_program() {
        let cmd = ToolCommand::new("imgcmp-definitely-not-installed");
        let result = cmd.run(["x"]);
        assert!(matches!(result, Err(OptimizeError::CommandSpawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn test_run_captures_stdout() {
        let cmd = ToolCommand::parse("sh -c").unwrap();
        let output = cmd.run(["echo hello"]).unwrap();
        assert_eq!(output.trim(), "hello");
    }

    #[cfg(unix)]
    #[test]
    fn test_run_failure_status() {
        let cmd = ToolCommand::parse("sh -c").unwrap();
        let result = cmd.run(["echo broken >&2; exit 3"]);
        match result {
            Err(OptimizeError::CommandFailed { program, status, stderr }) => {
                assert_eq!(program, "sh");
                assert_eq!(status.code(), Some(3));
                assert_eq!(stderr, "broken");
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }
}
