//! PNG rendering of a `ChartSpec` with plotters

use std::path::Path;

use plotters::prelude::*;
use tracing::debug;

use crate::application::{ChartSpec, LegendPosition};
use crate::infrastructure::traits::ChartRenderer;
use crate::infrastructure::{InfraError, InfraResult};

/// Bitmap renderer; the file extension picks the encoder (`.png`).
#[derive(Debug, Clone, Copy)]
pub struct PlottersRenderer {
    width: u32,
    height: u32,
}

impl PlottersRenderer {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

fn legend_anchor(position: LegendPosition) -> SeriesLabelPosition {
    match position {
        LegendPosition::UpperLeft => SeriesLabelPosition::UpperLeft,
        LegendPosition::UpperRight => SeriesLabelPosition::UpperRight,
        LegendPosition::LowerLeft => SeriesLabelPosition::LowerLeft,
        LegendPosition::LowerRight => SeriesLabelPosition::LowerRight,
    }
}

impl ChartRenderer for PlottersRenderer {
    fn render(&self, spec: &ChartSpec, path: &Path) -> InfraResult<()> {
        debug!(
            "rendering {}x{} chart to {}",
            self.width,
            self.height,
            path.display()
        );
        let root = BitMapBackend::new(path, (self.width, self.height)).into_drawing_area();
        root.fill(&WHITE).map_err(InfraError::render)?;

        let mut chart = ChartBuilder::on(&root)
            .margin(15)
            .x_label_area_size(45)
            .y_label_area_size(80)
            .build_cartesian_2d(spec.x_range.clone(), spec.y_range.clone().log_scale())
            .map_err(InfraError::render)?;

        let x_format = |x: &f64| format!("{x:.0}");
        let y_format = |y: &f64| format!("{y:.0e}");
        let mut mesh = chart.configure_mesh();
        mesh.x_desc(spec.x_label)
            .y_desc(spec.y_label)
            .x_label_formatter(&x_format)
            .y_label_formatter(&y_format);
        if !spec.grid {
            mesh.disable_mesh();
        }
        mesh.draw().map_err(InfraError::render)?;

        for (idx, line) in spec.lines.iter().enumerate() {
            let style = Palette99::pick(idx).stroke_width(2);
            for segment in &line.segments {
                chart
                    .draw_series(LineSeries::new(segment.iter().copied(), style))
                    .map_err(InfraError::render)?;
            }
            // Legend entry carries no data, so a line split by clipping is listed once.
            chart
                .draw_series(LineSeries::new(std::iter::empty::<(f64, f64)>(), style))
                .map_err(InfraError::render)?
                .label(line.label)
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));
        }

        chart
            .configure_series_labels()
            .position(legend_anchor(spec.legend))
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK)
            .draw()
            .map_err(InfraError::render)?;

        root.present().map_err(InfraError::render)?;
        Ok(())
    }
}
