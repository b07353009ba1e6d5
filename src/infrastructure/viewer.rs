//! Hands the rendered chart to an external image viewer

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use crate::config::Settings;
use crate::infrastructure::traits::{ChartViewer, ViewerExit};
use crate::infrastructure::{InfraError, InfraResult};

/// Viewer using the configured command, or the platform opener.
#[derive(Debug, Clone)]
pub struct SystemViewer {
    command: Option<(String, Vec<String>)>,
    /// Whether the command returns only once the window is closed.
    waits: bool,
}

impl Default for SystemViewer {
    fn default() -> Self {
        Self {
            command: None,
            waits: platform_opener_waits(),
        }
    }
}

impl SystemViewer {
    pub fn from_settings(settings: &Settings) -> Self {
        match settings.viewer_command() {
            Some(command) => Self {
                command: Some(command),
                waits: settings.viewer_waits,
            },
            None => Self::default(),
        }
    }

    /// Whether `show` returning means the window was closed.
    pub fn waits(&self) -> bool {
        self.waits
    }

    /// Program and leading arguments; the image path goes last.
    pub fn command(&self) -> (String, Vec<String>) {
        self.command.clone().unwrap_or_else(platform_opener)
    }
}

/// Opener that waits for the window to close where the platform allows it.
fn platform_opener() -> (String, Vec<String>) {
    if cfg!(target_os = "macos") {
        ("open".into(), vec!["-W".into()])
    } else if cfg!(windows) {
        (
            "cmd".into(),
            vec!["/C".into(), "start".into(), "/WAIT".into(), String::new()],
        )
    } else {
        ("xdg-open".into(), vec![])
    }
}

/// `xdg-open` hands the file to a detached application and returns at once.
fn platform_opener_waits() -> bool {
    cfg!(any(target_os = "macos", windows))
}

/// Whether a graphical session is reachable.
///
/// macOS and Windows always have one; elsewhere an X11 or Wayland display must be set.
pub fn display_available() -> bool {
    display_available_with(|name| std::env::var_os(name))
}

fn display_available_with(lookup: impl Fn(&str) -> Option<OsString>) -> bool {
    if cfg!(any(target_os = "macos", windows)) {
        return true;
    }
    ["DISPLAY", "WAYLAND_DISPLAY"]
        .iter()
        .any(|name| lookup(name).is_some_and(|v| !v.is_empty()))
}

impl ChartViewer for SystemViewer {
    /// An explicitly configured viewer is trusted to know where it draws.
    fn available(&self) -> bool {
        self.command.is_some() || display_available()
    }

    #[instrument(skip(self))]
    fn show(&self, path: &Path) -> InfraResult<ViewerExit> {
        let (program, args) = self.command();
        debug!("launching viewer: {} {:?}", program, args);

        let status = Command::new(&program)
            .args(&args)
            .arg(path)
            .status()
            .map_err(|e| InfraError::Viewer {
                message: format!("cannot start '{}': {}", program, e),
            })?;

        if !status.success() {
            Err::<(), InfraError>(InfraError::Viewer {
                message: format!("'{}' exited with status: {}", program, status),
            });
        }
        Ok(if self.waits {
            ViewerExit::Closed
        } else {
            ViewerExit::Detached
        })
    }
}
