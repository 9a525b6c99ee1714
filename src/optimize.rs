use crate::classify::ImageType;
use crate::command::{ToolCommand, ToolSet};
use crate::constants::{
    GIF_OPTIMIZER_ARGS, JPEG_OPTIMIZER_ARGS, PNG_OPTIMIZER_ARGS, SVG_OPTIMIZER_ARGS,
};
use crate::error::Result;
use crate::scan::DiscoveredImage;
use std::ffi::OsString;
use std::path::Path;
use tracing::debug;

/// Selects the optimizer for an image type and builds its arguments.
///
/// Returns `None` for unsupported files, which are left untouched.
pub fn optimizer_for<'a>(
    tools: &'a ToolSet,
    kind: ImageType,
    path: &Path,
) -> Option<(&'a ToolCommand, Vec<OsString>)> {
    let (tool, fixed_args) = match kind {
        ImageType::Jpeg => (&tools.jpeg, JPEG_OPTIMIZER_ARGS),
        ImageType::Png => (&tools.png, PNG_OPTIMIZER_ARGS),
        ImageType::Gif => (&tools.gif, GIF_OPTIMIZER_ARGS),
        ImageType::Svg => (&tools.svg, SVG_OPTIMIZER_ARGS),
        ImageType::Unsupported => return None,
    };

    let mut args: Vec<OsString> = fixed_args.iter().map(OsString::from).collect();
    args.push(path.as_os_str().to_os_string());
    Some((tool, args))
}

/// Optimizes one image in place. The original is overwritten, no backup is kept.
pub fn optimize(tools: &ToolSet, image: &DiscoveredImage) -> Result<()> {
    match optimizer_for(tools, image.kind, &image.path) {
        Some((tool, args)) => {
            tool.run(args)?;
            debug!(path = %image.path.display(), tool = %tool.program, "optimized");
        }
        None => debug!(path = %image.path.display(), "no optimizer for file"),
    }
    Ok(())
}
