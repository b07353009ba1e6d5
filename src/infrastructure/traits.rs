//! I/O boundary traits for testability
//!
//! Rendering and displaying a chart both leave the process (image encoder,
//! fonts, an external viewer), so the command driver only sees these traits.

use std::path::Path;

use crate::application::ChartSpec;
use crate::infrastructure::InfraResult;

/// Turns a chart description into an image file.
pub trait ChartRenderer: Send + Sync {
    /// Render `spec` to `path`. The image format follows the file extension.
    fn render(&self, spec: &ChartSpec, path: &Path) -> InfraResult<()>;
}

/// How the viewer process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewerExit {
    /// The viewer window was closed; the image is no longer needed.
    Closed,
    /// The launcher handed the image to another process and returned; the
    /// image must outlive this process.
    Detached,
}

/// Shows a rendered image to the user.
pub trait ChartViewer: Send + Sync {
    /// Whether there is anywhere to show the image (false when headless).
    fn available(&self) -> bool;

    /// Open the image.
    /// Blocks until the viewer command exits.
    fn show(&self, path: &Path) -> InfraResult<ViewerExit>;
}
