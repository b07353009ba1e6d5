use std::io::Write;
use std::path::PathBuf;

use tracing::{debug, info, instrument};

use crate::application::{ChartSpec, ScalingReport};
use crate::cli::args::Cli;
use crate::cli::output;
use crate::cli::CliResult;
use crate::domain::Domain;
use crate::infrastructure::{InfraError, ServiceContainer, ViewerExit};

/// What happened to the chart once the report was printed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DisplayOutcome {
    /// Display turned off in settings; nothing rendered.
    Disabled,
    /// No graphical environment; nothing rendered.
    Headless,
    /// Rendered and shown; the viewer has exited and the image is removed.
    Shown,
    /// Rendered and handed to a viewer that outlives this process; the image is kept.
    Detached(PathBuf),
}

/// Print the tree-search series to `out`, then render and show the chart.
#[instrument(skip_all)]
pub fn execute_command(
    _cli: &Cli,
    container: &ServiceContainer,
    out: &mut impl Write,
) -> CliResult<DisplayOutcome> {
    let report = ScalingReport::compute(Domain::default())?;
    report.write_pairs(out)?;

    let spec = ChartSpec::scaling(&report);
    show_chart(container, &spec)
}

fn show_chart(container: &ServiceContainer, spec: &ChartSpec) -> CliResult<DisplayOutcome> {
    if !container.settings.show {
        info!("chart display disabled by settings");
        return Ok(DisplayOutcome::Disabled);
    }
    if !container.viewer.available() {
        debug!("viewer reports no display");
        output::warning("no graphical display available, skipping chart");
        return Ok(DisplayOutcome::Headless);
    }

    let image = tempfile::Builder::new()
        .prefix("plot-scaling-")
        .suffix(".png")
        .tempfile()
        .map_err(|e| InfraError::io("create chart image", e))?
        .into_temp_path();

    container.renderer.render(spec, &image)?;
    info!("chart rendered, waiting for viewer");

    match container.viewer.show(&image)? {
        ViewerExit::Closed => {
            image
                .close()
                .map_err(|e| InfraError::io("remove chart image", e))?;
            Ok(DisplayOutcome::Shown)
        }
        ViewerExit::Detached => {
            let kept = image
                .keep()
                .map_err(|e| InfraError::io("keep chart image", e.error))?;
            info!("viewer detached, chart kept at {}", kept.display());
            output::note(&format!("chart image kept at {}", kept.display()));
            Ok(DisplayOutcome::Detached(kept))
        }
    }
}
