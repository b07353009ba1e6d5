//! Application layer: use cases
//!
//! This layer drives the domain models and describes their presentation,
//! without touching the terminal, the filesystem or a display.

pub mod chart;
pub mod error;
pub mod error_ext;
pub mod report;

pub use chart::{ChartSpec, LegendPosition, LineSpec, Y_AXIS_CEILING, Y_AXIS_FLOOR};
pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use report::ScalingReport;
