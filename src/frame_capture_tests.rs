use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use anyhow::Result;

use crate::adapters::{ActiveGameSession, FilesystemCapturePaths, ImageFileWriter};
use crate::core::interfaces::ports::{
    BackgroundTask, CaptureImageWriter, RenderTargetProvider, TaskRunner,
};
use crate::core::models::{
    CaptureDestination, CaptureError, CaptureSettings, DestinationState, EncodedImage,
    ImageFormat,
};
use crate::core::orchestrators::FrameCapture;

const EXAMPLE_FRAME: [u8; 16] = [
    10, 20, 30, 255, 40, 50, 60, 255, 70, 80, 90, 255, 100, 110, 120, 255,
];

struct FakeRenderTarget {
    width: u32,
    height: u32,
    raw_data: Option<Vec<u8>>,
}

impl FakeRenderTarget {
    fn example_frame() -> Self {
        Self {
            width: 2,
            height: 2,
            raw_data: Some(EXAMPLE_FRAME.to_vec()),
        }
    }

    fn empty() -> Self {
        Self {
            width: 2,
            height: 2,
            raw_data: None,
        }
    }
}

impl RenderTargetProvider for FakeRenderTarget {
    fn color_buffer_raw_data(&self) -> Option<&[u8]> {
        self.raw_data.as_deref()
    }

    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }
}

#[derive(Default)]
struct DeferredTaskRunner {
    queued_tasks: Mutex<Vec<(String, BackgroundTask)>>,
    rejects_tasks: bool,
}

impl DeferredTaskRunner {
    fn rejecting() -> Self {
        Self {
            queued_tasks: Mutex::new(Vec::new()),
            rejects_tasks: true,
        }
    }

    fn queued_task_names(&self) -> Vec<String> {
        self.queued_tasks
            .lock()
            .unwrap()
            .iter()
            .map(|(name, _)| name.clone())
            .collect()
    }

    fn run_next(&self) {
        let (_, task) = self.queued_tasks.lock().unwrap().remove(0);
        task();
    }

    fn run_all(&self) {
        let tasks = std::mem::take(&mut *self.queued_tasks.lock().unwrap());
        for (_, task) in tasks {
            task();
        }
    }
}

impl TaskRunner for DeferredTaskRunner {
    fn submit_task(&self, task_name: &str, task: BackgroundTask) -> Result<()> {
        if self.rejects_tasks {
            anyhow::bail!("runner is shutting down");
        }
        self.queued_tasks
            .lock()
            .unwrap()
            .push((task_name.to_string(), task));
        Ok(())
    }
}

#[derive(Default)]
struct RecordingImageWriter {
    writes: Mutex<Vec<(PathBuf, EncodedImage)>>,
    fails_writes: bool,
}

impl RecordingImageWriter {
    fn failing() -> Self {
        Self {
            writes: Mutex::new(Vec::new()),
            fails_writes: true,
        }
    }

    fn written_paths(&self) -> Vec<PathBuf> {
        self.writes
            .lock()
            .unwrap()
            .iter()
            .map(|(path, _)| path.clone())
            .collect()
    }
}

impl CaptureImageWriter for RecordingImageWriter {
    fn write_image(&self, image: &EncodedImage, path: &Path, _format: ImageFormat) -> Result<()> {
        if self.fails_writes {
            anyhow::bail!("disk full");
        }
        self.writes
            .lock()
            .unwrap()
            .push((path.to_path_buf(), image.clone()));
        Ok(())
    }
}

struct CaptureFixture {
    _root: tempfile::TempDir,
    root_path: PathBuf,
    task_runner: Arc<DeferredTaskRunner>,
    image_writer: Arc<RecordingImageWriter>,
    frame_capture: FrameCapture,
}

impl CaptureFixture {
    fn build(
        render_target: FakeRenderTarget,
        task_runner: DeferredTaskRunner,
        image_writer: RecordingImageWriter,
        game_session: ActiveGameSession,
    ) -> Self {
        let root = tempfile::tempdir().unwrap();
        let root_path = root.path().to_path_buf();
        let task_runner = Arc::new(task_runner);
        let image_writer = Arc::new(image_writer);
        let frame_capture = FrameCapture::build(
            Arc::new(render_target),
            task_runner.clone(),
            Arc::new(FilesystemCapturePaths::build(
                root_path.join("screenshots"),
                root_path.join("saves"),
                5,
            )),
            Arc::new(game_session),
            image_writer.clone(),
            CaptureSettings::default(),
        );

        Self {
            _root: root,
            root_path,
            task_runner,
            image_writer,
            frame_capture,
        }
    }

    fn with_example_frame() -> Self {
        Self::build(
            FakeRenderTarget::example_frame(),
            DeferredTaskRunner::default(),
            RecordingImageWriter::default(),
            ActiveGameSession::with_game("World"),
        )
    }
}

fn assert_screenshot_file_name(path: &Path, width: u32, height: u32) {
    let file_name = path.file_name().unwrap().to_str().unwrap();
    let suffix = format!("-{}x{}.png", width, height);

    assert!(file_name.starts_with("FrameGrabber-"), "{}", file_name);
    assert!(file_name.ends_with(&suffix), "{}", file_name);

    let timestamp = &file_name["FrameGrabber-".len()..file_name.len() - suffix.len()];
    assert_eq!(timestamp.len(), 12, "{}", file_name);
    assert!(timestamp.chars().all(|c| c.is_ascii_digit()), "{}", file_name);
}

#[test]
fn test_capture_without_buffer_submits_nothing_and_keeps_request() {
    let fixture = CaptureFixture::build(
        FakeRenderTarget::empty(),
        DeferredTaskRunner::default(),
        RecordingImageWriter::default(),
        ActiveGameSession::with_game("World"),
    );
    fixture.frame_capture.request_screenshot();

    let result = fixture.frame_capture.capture();

    assert!(matches!(result, Err(CaptureError::NoDataAvailable)));
    assert!(fixture.task_runner.queued_task_names().is_empty());
    assert!(fixture.image_writer.written_paths().is_empty());
    assert_eq!(
        fixture
            .frame_capture
            .destination_state(CaptureDestination::Screenshot),
        DestinationState::Requested
    );
    assert!(fixture.frame_capture.is_capturing());
}

#[test]
fn test_capture_with_short_buffer_is_rejected() {
    let fixture = CaptureFixture::build(
        FakeRenderTarget {
            width: 4,
            height: 4,
            raw_data: Some(vec![0u8; 8]),
        },
        DeferredTaskRunner::default(),
        RecordingImageWriter::default(),
        ActiveGameSession::default(),
    );
    fixture.frame_capture.request_screenshot();

    let result = fixture.frame_capture.capture();

    assert!(matches!(result, Err(CaptureError::BufferTooSmall { .. })));
    assert!(fixture.task_runner.queued_task_names().is_empty());
}

#[test]
fn test_game_preview_without_buffer_leaves_preview_requested() {
    let fixture = CaptureFixture::build(
        FakeRenderTarget::empty(),
        DeferredTaskRunner::default(),
        RecordingImageWriter::default(),
        ActiveGameSession::with_game("World"),
    );

    let result = fixture.frame_capture.request_game_preview();

    assert!(matches!(result, Err(CaptureError::NoDataAvailable)));
    assert!(fixture
        .frame_capture
        .is_pending(CaptureDestination::GamePreview));
    assert!(fixture.task_runner.queued_task_names().is_empty());
}

#[test]
fn test_screenshot_capture_writes_one_file_and_clears_request() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();
    assert!(fixture.frame_capture.is_capturing());

    let destinations = fixture.frame_capture.capture().unwrap();

    assert_eq!(destinations, vec![CaptureDestination::Screenshot]);
    assert!(!fixture.frame_capture.is_capturing());
    assert_eq!(
        fixture.task_runner.queued_task_names(),
        vec!["Write screenshot".to_string()]
    );
    assert_eq!(
        fixture
            .frame_capture
            .destination_state(CaptureDestination::Screenshot),
        DestinationState::InFlight
    );

    fixture.task_runner.run_all();

    let written_paths = fixture.image_writer.written_paths();
    assert_eq!(written_paths.len(), 1);
    assert_eq!(
        written_paths[0].parent().unwrap(),
        fixture.root_path.join("screenshots")
    );
    assert_screenshot_file_name(&written_paths[0], 2, 2);
    assert!(!fixture
        .frame_capture
        .is_pending(CaptureDestination::Screenshot));
}

#[test]
fn test_written_image_is_flipped_rgb_of_frame() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();

    fixture.frame_capture.capture().unwrap();
    fixture.task_runner.run_all();

    let writes = fixture.image_writer.writes.lock().unwrap();
    let image = &writes[0].1;
    assert_eq!(image.pixel_at(0, 0), [70, 80, 90]);
    assert_eq!(image.pixel_at(1, 0), [100, 110, 120]);
    assert_eq!(image.pixel_at(0, 1), [10, 20, 30]);
    assert_eq!(image.pixel_at(1, 1), [40, 50, 60]);
}

#[test]
fn test_game_preview_clears_only_after_its_write() {
    let fixture = CaptureFixture::with_example_frame();

    let destinations = fixture.frame_capture.request_game_preview().unwrap();

    assert_eq!(destinations, vec![CaptureDestination::GamePreview]);
    assert!(fixture
        .frame_capture
        .is_pending(CaptureDestination::GamePreview));

    fixture.task_runner.run_all();

    assert_eq!(
        fixture.image_writer.written_paths(),
        vec![fixture
            .root_path
            .join("saves")
            .join("World")
            .join("previews")
            .join("1.png")]
    );
    assert!(!fixture
        .frame_capture
        .is_pending(CaptureDestination::GamePreview));
}

#[test]
fn test_screenshot_and_preview_requests_do_not_clear_each_other() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();
    fixture.frame_capture.capture().unwrap();

    let preview_destinations = fixture.frame_capture.request_game_preview().unwrap();

    assert_eq!(preview_destinations, vec![CaptureDestination::GamePreview]);
    assert_eq!(fixture.task_runner.queued_task_names().len(), 2);

    fixture.task_runner.run_next();

    assert!(!fixture
        .frame_capture
        .is_pending(CaptureDestination::Screenshot));
    assert_eq!(
        fixture
            .frame_capture
            .destination_state(CaptureDestination::GamePreview),
        DestinationState::InFlight
    );

    fixture.task_runner.run_next();

    assert!(!fixture
        .frame_capture
        .is_pending(CaptureDestination::GamePreview));
    assert_eq!(fixture.image_writer.written_paths().len(), 2);
}

#[test]
fn test_both_pending_destinations_share_one_task() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();

    let destinations = fixture.frame_capture.request_game_preview().unwrap();

    assert_eq!(
        destinations,
        vec![
            CaptureDestination::GamePreview,
            CaptureDestination::Screenshot
        ]
    );
    assert_eq!(fixture.task_runner.queued_task_names().len(), 1);

    fixture.task_runner.run_all();

    let written_paths = fixture.image_writer.written_paths();
    assert_eq!(written_paths.len(), 2);
    assert!(written_paths[0].ends_with("previews/1.png"));
    assert_screenshot_file_name(&written_paths[1], 2, 2);
}

#[test]
fn test_screenshot_request_while_in_flight_is_dropped() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();
    fixture.frame_capture.capture().unwrap();

    fixture.frame_capture.request_screenshot();
    let second_capture = fixture.frame_capture.capture().unwrap();

    assert!(second_capture.is_empty());
    assert_eq!(fixture.task_runner.queued_task_names().len(), 1);
}

#[test]
fn test_dropped_screenshot_request_does_not_mark_capturing() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();
    fixture.frame_capture.capture().unwrap();
    assert!(!fixture.frame_capture.is_capturing());

    fixture.frame_capture.request_screenshot();

    assert!(!fixture.frame_capture.is_capturing());
    assert_eq!(
        fixture
            .frame_capture
            .destination_state(CaptureDestination::Screenshot),
        DestinationState::InFlight
    );
}

#[test]
fn test_screenshot_request_after_write_finishes_marks_capturing() {
    let fixture = CaptureFixture::with_example_frame();
    fixture.frame_capture.request_screenshot();
    fixture.frame_capture.capture().unwrap();
    fixture.task_runner.run_all();

    fixture.frame_capture.request_screenshot();

    assert!(fixture.frame_capture.is_capturing());
}

#[test]
fn test_capture_with_nothing_requested_schedules_nothing() {
    let fixture = CaptureFixture::with_example_frame();

    let destinations = fixture.frame_capture.capture().unwrap();

    assert!(destinations.is_empty());
    assert!(fixture.task_runner.queued_task_names().is_empty());
    assert!(!fixture.frame_capture.is_capturing());
}

#[test]
fn test_missing_game_session_skips_preview_write() {
    let fixture = CaptureFixture::build(
        FakeRenderTarget::example_frame(),
        DeferredTaskRunner::default(),
        RecordingImageWriter::default(),
        ActiveGameSession::default(),
    );

    fixture.frame_capture.request_game_preview().unwrap();
    fixture.task_runner.run_all();

    assert!(fixture.image_writer.written_paths().is_empty());
    assert!(!fixture
        .frame_capture
        .is_pending(CaptureDestination::GamePreview));
}

#[test]
fn test_write_failure_is_swallowed_and_request_released() {
    let fixture = CaptureFixture::build(
        FakeRenderTarget::example_frame(),
        DeferredTaskRunner::default(),
        RecordingImageWriter::failing(),
        ActiveGameSession::with_game("World"),
    );
    fixture.frame_capture.request_screenshot();

    fixture.frame_capture.capture().unwrap();
    fixture.task_runner.run_all();

    assert!(!fixture
        .frame_capture
        .is_pending(CaptureDestination::Screenshot));
}

#[test]
fn test_rejected_task_returns_error_and_keeps_request() {
    let fixture = CaptureFixture::build(
        FakeRenderTarget::example_frame(),
        DeferredTaskRunner::rejecting(),
        RecordingImageWriter::default(),
        ActiveGameSession::with_game("World"),
    );
    fixture.frame_capture.request_screenshot();

    let result = fixture.frame_capture.capture();

    assert!(matches!(result, Err(CaptureError::TaskRejected { .. })));
    assert_eq!(
        fixture
            .frame_capture
            .destination_state(CaptureDestination::Screenshot),
        DestinationState::Requested
    );
    assert!(fixture.frame_capture.is_capturing());
}

#[test]
fn test_screenshot_reaches_disk_through_image_file_writer() {
    let root = tempfile::tempdir().unwrap();
    let task_runner = Arc::new(DeferredTaskRunner::default());
    let frame_capture = FrameCapture::build(
        Arc::new(FakeRenderTarget::example_frame()),
        task_runner.clone(),
        Arc::new(FilesystemCapturePaths::build(
            root.path().join("screenshots"),
            root.path().join("saves"),
            5,
        )),
        Arc::new(ActiveGameSession::default()),
        Arc::new(ImageFileWriter::initialize()),
        CaptureSettings::default(),
    );

    frame_capture.request_screenshot();
    frame_capture.capture().unwrap();
    task_runner.run_all();

    let written_files: Vec<PathBuf> = std::fs::read_dir(root.path().join("screenshots"))
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    assert_eq!(written_files.len(), 1);
    assert_screenshot_file_name(&written_files[0], 2, 2);

    let decoded = image::open(&written_files[0]).unwrap().to_rgb8();
    assert_eq!(decoded.get_pixel(0, 0).0, [70, 80, 90]);
    assert_eq!(decoded.get_pixel(1, 1).0, [40, 50, 60]);
}
