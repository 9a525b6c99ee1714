use crate::logger::Verbosity;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "imgcmp",
    about = "Optimize the images of a directory tree in place and write a pull request summary",
    long_about = "imgcmp finds JPEG, PNG, GIF and SVG files below ROOT, optimizes each one in place \
                  with jpegoptim, optipng, gifsicle or svgo, and writes the size savings as a \
                  markdown pull request message to ./pull_request_message.md.",
    version,
    after_help = "ENVIRONMENT:\n  \
    IGNORED_FILES       Colon separated globs relative to ROOT to leave untouched\n  \
    IMGCMP_FILE         Type detection command (default: file)\n  \
    IMGCMP_JPEGOPTIM    JPEG optimizer (default: jpegoptim)\n  \
    IMGCMP_OPTIPNG      PNG optimizer (default: optipng)\n  \
    IMGCMP_GIFSICLE     GIF optimizer (default: gifsicle)\n  \
    IMGCMP_SVGO         SVG minifier (default: svgo)\n\n\
    EXAMPLES:\n  \
    imgcmp .\n  \
    IGNORED_FILES='docs/*.png:vendor' imgcmp ./site -j 4"
)]
pub struct Args {
    #[arg(help = "Root directory to scan for images")]
    pub root: PathBuf,

    #[arg(
        short = 'j',
        long,
        help = "Number of parallel optimizer jobs (default: auto)",
        long_help = "Number of images optimized at the same time. \
                     If not specified, uses number of CPU cores."
    )]
    pub jobs: Option<usize>,

    #[arg(short, long, help = "Show debug output on stderr")]
    pub verbose: bool,

    #[arg(
        short,
        long,
        conflicts_with = "verbose",
        help = "Only report errors, hide the progress bar"
    )]
    pub quiet: bool,
}

impl Args {
    pub fn verbosity(&self) -> Verbosity {
        Verbosity::from_flags(self.quiet, self.verbose)
    }
}
