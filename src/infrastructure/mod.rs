//! Infrastructure layer: I/O implementations and DI container
//!
//! This layer implements the rendering and display traits and wires them up.

pub mod di;
pub mod error;
pub mod render;
pub mod traits;
pub mod viewer;

pub use di::ServiceContainer;
pub use error::{InfraError, InfraResult};
pub use render::PlottersRenderer;
pub use traits::{ChartRenderer, ChartViewer, ViewerExit};
pub use viewer::{display_available, SystemViewer};
