//! Tests for the command driver with fake renderer and viewer

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use plot_scaling::application::ChartSpec;
use plot_scaling::cli::{execute_command, Cli, CliError, DisplayOutcome};
use plot_scaling::config::Settings;
use plot_scaling::exitcode;
use plot_scaling::infrastructure::{
    ChartRenderer, ChartViewer, InfraError, InfraResult, ServiceContainer, SystemViewer,
    ViewerExit,
};
use plot_scaling::util::testing;

/// Records what it was asked to render and writes a placeholder file.
#[derive(Default)]
struct RecordingRenderer {
    rendered: Mutex<Vec<(ChartSpec, PathBuf)>>,
}

impl ChartRenderer for RecordingRenderer {
    fn render(&self, spec: &ChartSpec, path: &Path) -> InfraResult<()> {
        std::fs::write(path, b"png").map_err(|e| InfraError::io("write", e))?;
        self.rendered
            .lock()
            .unwrap()
            .push((spec.clone(), path.to_path_buf()));
        Ok(())
    }
}

struct FakeViewer {
    available: bool,
    fail: bool,
    exit: ViewerExit,
    shown: Mutex<Vec<PathBuf>>,
}

impl FakeViewer {
    fn new(available: bool, fail: bool) -> Self {
        Self {
            available,
            fail,
            exit: ViewerExit::Closed,
            shown: Mutex::new(Vec::new()),
        }
    }

    fn detaching() -> Self {
        Self {
            exit: ViewerExit::Detached,
            ..Self::new(true, false)
        }
    }
}

impl ChartViewer for FakeViewer {
    fn available(&self) -> bool {
        self.available
    }

    fn show(&self, path: &Path) -> InfraResult<ViewerExit> {
        assert!(path.exists(), "image must exist while the viewer runs");
        self.shown.lock().unwrap().push(path.to_path_buf());
        if self.fail {
            Err(InfraError::Viewer {
                message: "closed with error".into(),
            })
        } else {
            Ok(self.exit)
        }
    }
}

fn container(
    show: bool,
    viewer: FakeViewer,
) -> (ServiceContainer, Arc<RecordingRenderer>, Arc<FakeViewer>) {
    testing::init_test_setup();
    let renderer = Arc::new(RecordingRenderer::default());
    let viewer = Arc::new(viewer);
    let settings = Settings {
        show,
        ..Settings::default()
    };
    let container = ServiceContainer::with_deps(settings, renderer.clone(), viewer.clone());
    (container, renderer, viewer)
}

#[test]
fn given_display_when_executing_then_prints_report_renders_and_shows() {
    let (container, renderer, viewer) = container(true, FakeViewer::new(true, false));
    let mut out = Vec::new();

    let outcome = execute_command(&Cli {}, &container, &mut out).unwrap();

    assert_eq!(outcome, DisplayOutcome::Shown);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 28);

    let rendered = renderer.rendered.lock().unwrap();
    assert_eq!(rendered.len(), 1);
    let (spec, path) = &rendered[0];
    assert_eq!(spec.lines.len(), 2);
    assert_eq!(path.extension().and_then(|e| e.to_str()), Some("png"));

    let shown = viewer.shown.lock().unwrap();
    assert_eq!(shown.as_slice(), std::slice::from_ref(path));
    assert!(!path.exists(), "temporary image is removed after viewing");
}

#[test]
fn given_show_disabled_when_executing_then_only_prints_report() {
    let (container, renderer, viewer) = container(false, FakeViewer::new(true, false));
    let mut out = Vec::new();

    let outcome = execute_command(&Cli {}, &container, &mut out).unwrap();

    assert_eq!(outcome, DisplayOutcome::Disabled);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 28);
    assert!(renderer.rendered.lock().unwrap().is_empty());
    assert!(viewer.shown.lock().unwrap().is_empty());
}

#[test]
fn given_headless_when_executing_then_skips_chart_without_error() {
    let (container, renderer, viewer) = container(true, FakeViewer::new(false, false));
    let mut out = Vec::new();

    let outcome = execute_command(&Cli {}, &container, &mut out).unwrap();

    assert_eq!(outcome, DisplayOutcome::Headless);
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 28);
    assert!(renderer.rendered.lock().unwrap().is_empty());
    assert!(viewer.shown.lock().unwrap().is_empty());
}

#[test]
fn given_failing_viewer_when_executing_then_error_is_fatal() {
    let (container, _renderer, _viewer) = container(true, FakeViewer::new(true, true));
    let mut out = Vec::new();

    let err = execute_command(&Cli {}, &container, &mut out).unwrap_err();

    assert!(matches!(err, CliError::Infra(InfraError::Viewer { .. })));
    assert_eq!(err.exit_code(), exitcode::UNAVAILABLE);
    // report is printed before the chart is attempted
    assert_eq!(String::from_utf8(out).unwrap().lines().count(), 28);
}

#[test]
fn given_detaching_viewer_when_executing_then_image_is_kept() {
    let (container, _renderer, viewer) = container(true, FakeViewer::detaching());
    let mut out = Vec::new();

    let outcome = execute_command(&Cli {}, &container, &mut out).unwrap();

    let shown = viewer.shown.lock().unwrap();
    assert_eq!(outcome, DisplayOutcome::Detached(shown[0].clone()));
    assert!(shown[0].exists(), "image must outlive a detached viewer");
    std::fs::remove_file(&shown[0]).unwrap();
}

/// A launcher that backgrounds the real viewer and returns at once, like `xdg-open`.
#[cfg(unix)]
#[test]
fn given_backgrounding_launcher_when_executing_then_late_reader_finds_image() {
    use std::os::unix::fs::PermissionsExt;
    use std::time::{Duration, Instant};

    testing::init_test_setup();
    let dir = tempfile::TempDir::new().unwrap();
    let report = dir.path().join("seen");
    let script = dir.path().join("launcher.sh");
    std::fs::write(
        &script,
        format!(
            "#!/bin/sh\n\
             ( sleep 0.5; if [ -f \"$1\" ]; then echo present; else echo missing; fi > '{}' ) &\n\
             exit 0\n",
            report.display()
        ),
    )
    .unwrap();
    std::fs::set_permissions(&script, std::fs::Permissions::from_mode(0o755)).unwrap();

    let settings = Settings {
        viewer: Some(script.display().to_string()),
        ..Settings::default()
    };
    let viewer = Arc::new(SystemViewer::from_settings(&settings));
    let container =
        ServiceContainer::with_deps(settings, Arc::new(RecordingRenderer::default()), viewer);
    let mut out = Vec::new();

    let outcome = execute_command(&Cli {}, &container, &mut out).unwrap();

    let deadline = Instant::now() + Duration::from_secs(5);
    let seen = loop {
        match std::fs::read_to_string(&report) {
            Ok(text) if !text.is_empty() => break text,
            _ if Instant::now() > deadline => panic!("launcher never reported"),
            _ => std::thread::sleep(Duration::from_millis(50)),
        }
    };
    assert_eq!(seen.trim(), "present");

    match outcome {
        DisplayOutcome::Detached(path) => std::fs::remove_file(path).unwrap(),
        other => panic!("expected detached outcome, got {other:?}"),
    }
}
