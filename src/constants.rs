pub const DEFAULT_FILE_COMMAND: &str = "file";
pub const DEFAULT_JPEG_OPTIMIZER: &str = "jpegoptim";
pub const DEFAULT_PNG_OPTIMIZER: &str = "optipng";
pub const DEFAULT_GIF_OPTIMIZER: &str = "gifsicle";
pub const DEFAULT_SVG_OPTIMIZER: &str = "svgo";

// Environment variables
pub const IGNORED_FILES_ENV: &str = "IGNORED_FILES";
pub const FILE_COMMAND_ENV: &str = "IMGCMP_FILE";
pub const JPEG_OPTIMIZER_ENV: &str = "IMGCMP_JPEGOPTIM";
pub const PNG_OPTIMIZER_ENV: &str = "IMGCMP_OPTIPNG";
pub const GIF_OPTIMIZER_ENV: &str = "IMGCMP_GIFSICLE";
pub const SVG_OPTIMIZER_ENV: &str = "IMGCMP_SVGO";

pub const IGNORED_FILES_SEPARATOR: char = ':';

// Optimizer arguments, the image path is appended last
pub const JPEG_OPTIMIZER_ARGS: &[&str] = &["-m85"];
pub const PNG_OPTIMIZER_ARGS: &[&str] = &["-o2"];
pub const GIF_OPTIMIZER_ARGS: &[&str] = &["-b", "-O3", "--colors", "256"];
pub const SVG_OPTIMIZER_ARGS: &[&str] = &[];

pub const REPORT_FILE_NAME: &str = "pull_request_message.md";
pub const REPORT_TITLE: &str = "[imgcmp] Optimize images";
pub const REPORT_HEADER: &str = "## Successfully optimized";
pub const TOTAL_ROW_NAME: &str = "Total";
pub const DIFF_RATE_UNDEFINED: &str = "N/A";

pub const NO_IMAGES_MESSAGE: &str = "there is no image files";
pub const ALREADY_OPTIMIZED_MESSAGE: &str = "images are already optimized";
pub const SUCCESS_MESSAGE: &str = "Successfully optimized";

pub const PROGRESS_BAR_TEMPLATE: &str =
    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}";
