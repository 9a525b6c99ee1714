#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Prints `file`-style output based on the extension of the first argument
const FAKE_FILE: &str = r#"case "$1" in
  *.jpg) echo "$1: JPEG image data, JFIF standard 1.01" ;;
  *.png) echo "$1: PNG image data, 16 x 16, 8-bit/color RGBA" ;;
  *.gif) echo "$1: GIF image data, version 89a, 16 x 16" ;;
  *.svg) echo "$1: SVG Scalable Vector Graphics image" ;;
  *) echo "$1: ASCII text" ;;
esac
"#;

/// Cuts the file named by the last argument down to three quarters
const FAKE_SHRINK: &str = r#"for f in "$@"; do :; done
size=$(wc -c < "$f")
keep=$((size * 3 / 4))
head -c "$keep" "$f" > "$f.tmp" && mv "$f.tmp" "$f"
"#;

const FAKE_NOOP: &str = "exit 0\n";

const FAKE_FAIL: &str = "echo \"optimizer crashed\" >&2\nexit 1\n";

/// Shell scripts standing in for `file` and the optimizers
pub struct FakeTools {
    dir: TempDir,
}

impl FakeTools {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        for (name, body) in [
            ("file.sh", FAKE_FILE),
            ("shrink.sh", FAKE_SHRINK),
            ("noop.sh", FAKE_NOOP),
            ("fail.sh", FAKE_FAIL),
        ] {
            fs::write(dir.path().join(name), body).unwrap();
        }
        // Same as file.sh, but records every call in file_calls.log
        let counting = format!(
            "echo \"$1\" >> \"{}\"\n{}",
            dir.path().join("file_calls.log").display(),
            FAKE_FILE
        );
        fs::write(dir.path().join("counting_file.sh"), counting).unwrap();
        Self { dir }
    }

    /// Paths passed to counting_file.sh so far, one per call
    pub fn file_calls(&self) -> Vec<String> {
        fs::read_to_string(self.dir.path().join("file_calls.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Command line running one of the scripts, e.g. `sh /tmp/x/file.sh`
    pub fn command(&self, name: &str) -> String {
        format!("sh {}", self.dir.path().join(name).display())
    }

    /// Environment where JPEGs shrink and every other optimizer is a no-op
    pub fn env(&self) -> Vec<(&'static str, String)> {
        vec![
            ("IMGCMP_FILE", self.command("file.sh")),
            ("IMGCMP_JPEGOPTIM", self.command("shrink.sh")),
            ("IMGCMP_OPTIPNG", self.command("noop.sh")),
            ("IMGCMP_GIFSICLE", self.command("noop.sh")),
            ("IMGCMP_SVGO", self.command("noop.sh")),
        ]
    }
}

pub fn write_file(path: &Path, size: usize) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, vec![b'x'; size]).unwrap();
    path.to_path_buf()
}

pub fn create_temp_directory() -> TempDir {
    TempDir::new().unwrap()
}
