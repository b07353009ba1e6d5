//! Service container for dependency injection
//!
//! Wires the chart renderer and viewer to the loaded settings.

use std::sync::Arc;

use crate::config::Settings;
use crate::infrastructure::render::PlottersRenderer;
use crate::infrastructure::traits::{ChartRenderer, ChartViewer};
use crate::infrastructure::viewer::SystemViewer;

/// Container holding the application's I/O collaborators.
pub struct ServiceContainer {
    /// Application settings
    pub settings: Arc<Settings>,

    /// Chart image renderer
    pub renderer: Arc<dyn ChartRenderer>,

    /// Image viewer
    pub viewer: Arc<dyn ChartViewer>,
}

impl ServiceContainer {
    /// Create a new service container with real implementations.
    pub fn new(settings: Settings) -> Self {
        let renderer = Arc::new(PlottersRenderer::new(settings.width, settings.height));
        let viewer = Arc::new(SystemViewer::from_settings(&settings));
        Self::with_deps(settings, renderer, viewer)
    }

    /// Create a service container with custom dependencies (for testing).
    pub fn with_deps(
        settings: Settings,
        renderer: Arc<dyn ChartRenderer>,
        viewer: Arc<dyn ChartViewer>,
    ) -> Self {
        let settings = Arc::new(settings);

        Self {
            settings,
            renderer,
            viewer,
        }
    }
}
