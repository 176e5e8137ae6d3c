use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Local};

use crate::core::interfaces::ports::{
    CaptureImageWriter, CapturePathProvider, GameSessionProvider, RenderTargetProvider, TaskRunner,
};
use crate::core::models::{
    CaptureDestination, CaptureError, CaptureRequests, CaptureSettings, CapturedFrame,
    DestinationState, EncodedImage, ImageFormat, PixelBuffer,
};
use crate::global_constants::{
    LOG_TAG_CAPTURE, MESSAGE_MISSING_GAME_SESSION, MESSAGE_NO_SCREENSHOT_DATA,
    MESSAGE_SCREENSHOT_FAILED, MESSAGE_SCREENSHOT_SAVED, SCREENSHOT_TIMESTAMP_FORMAT,
    TASK_NAME_WRITE_SCREENSHOT,
};

/// Grabs the final render target and writes it out as a screenshot and/or a
/// save-game preview.
///
/// The frame is copied on the calling thread; conversion and file writes run
/// in one background task per capture.
pub struct FrameCapture {
    render_target: Arc<dyn RenderTargetProvider>,
    task_runner: Arc<dyn TaskRunner>,
    write_context: Arc<CaptureWriteContext>,
    is_capturing: AtomicBool,
}

struct CaptureWriteContext {
    requests: CaptureRequests,
    path_provider: Arc<dyn CapturePathProvider>,
    game_session: Arc<dyn GameSessionProvider>,
    image_writer: Arc<dyn CaptureImageWriter>,
    settings: CaptureSettings,
}

struct CaptureWriteJob {
    context: Arc<CaptureWriteContext>,
    frame: CapturedFrame,
    destinations: Vec<CaptureDestination>,
}

impl FrameCapture {
    pub fn build(
        render_target: Arc<dyn RenderTargetProvider>,
        task_runner: Arc<dyn TaskRunner>,
        path_provider: Arc<dyn CapturePathProvider>,
        game_session: Arc<dyn GameSessionProvider>,
        image_writer: Arc<dyn CaptureImageWriter>,
        settings: CaptureSettings,
    ) -> Self {
        log::debug!(
            "{} building frame capture, format={}",
            LOG_TAG_CAPTURE,
            settings.screenshot_format
        );

        Self {
            render_target,
            task_runner,
            write_context: Arc::new(CaptureWriteContext {
                requests: CaptureRequests::default(),
                path_provider,
                game_session,
                image_writer,
                settings,
            }),
            is_capturing: AtomicBool::new(false),
        }
    }

    /// Marks a screenshot as pending. The host loop should call [`capture`]
    /// once the next frame is finished.
    ///
    /// [`capture`]: FrameCapture::capture
    pub fn request_screenshot(&self) {
        let state = self.request_destination(CaptureDestination::Screenshot);
        if state == DestinationState::Requested {
            self.is_capturing.store(true, Ordering::Release);
        }
    }

    pub fn request_game_preview(&self) -> Result<Vec<CaptureDestination>, CaptureError> {
        self.request_destination(CaptureDestination::GamePreview);
        self.capture()
    }

    pub fn capture(&self) -> Result<Vec<CaptureDestination>, CaptureError> {
        self.is_capturing.store(true, Ordering::Release);

        let frame = match self.read_finished_frame() {
            Ok(frame) => frame,
            Err(error) => {
                log::error!("{} {} ({})", LOG_TAG_CAPTURE, MESSAGE_NO_SCREENSHOT_DATA, error);
                self.is_capturing
                    .store(self.has_requested_destinations(), Ordering::Release);
                return Err(error);
            }
        };

        let destinations = self.write_context.requests.claim_requested();
        if destinations.is_empty() {
            log::debug!("{} nothing requested, skipping write", LOG_TAG_CAPTURE);
            self.is_capturing.store(false, Ordering::Release);
            return Ok(destinations);
        }

        self.schedule_write(frame, &destinations)?;
        self.is_capturing.store(false, Ordering::Release);

        Ok(destinations)
    }

    pub fn is_capturing(&self) -> bool {
        self.is_capturing.load(Ordering::Acquire)
    }

    pub fn is_pending(&self, destination: CaptureDestination) -> bool {
        self.destination_state(destination) != DestinationState::Idle
    }

    pub fn destination_state(&self, destination: CaptureDestination) -> DestinationState {
        self.write_context.requests.state_of(destination)
    }

    pub fn settings(&self) -> &CaptureSettings {
        &self.write_context.settings
    }

    fn request_destination(&self, destination: CaptureDestination) -> DestinationState {
        let state = self.write_context.requests.request(destination);
        match state {
            DestinationState::Requested => {
                log::debug!("{} {} requested", LOG_TAG_CAPTURE, destination);
            }
            other => {
                log::info!(
                    "{} {} request dropped, previous capture is {:?}",
                    LOG_TAG_CAPTURE,
                    destination,
                    other
                );
            }
        }
        state
    }

    fn has_requested_destinations(&self) -> bool {
        CaptureDestination::ALL
            .into_iter()
            .any(|destination| self.destination_state(destination) == DestinationState::Requested)
    }

    fn read_finished_frame(&self) -> Result<CapturedFrame, CaptureError> {
        let raw_data = self
            .render_target
            .color_buffer_raw_data()
            .ok_or(CaptureError::NoDataAvailable)?;

        let buffer = PixelBuffer::build_from_raw_data(
            self.render_target.width(),
            self.render_target.height(),
            raw_data,
        )?;

        Ok(buffer.copy_to_captured_frame())
    }

    fn schedule_write(
        &self,
        frame: CapturedFrame,
        destinations: &[CaptureDestination],
    ) -> Result<(), CaptureError> {
        log::debug!(
            "{} scheduling write of {}x{} frame for {:?}",
            LOG_TAG_CAPTURE,
            frame.width,
            frame.height,
            destinations
        );

        let job = CaptureWriteJob {
            context: Arc::clone(&self.write_context),
            frame,
            destinations: destinations.to_vec(),
        };

        if let Err(error) = self
            .task_runner
            .submit_task(TASK_NAME_WRITE_SCREENSHOT, Box::new(move || job.run()))
        {
            log::error!(
                "{} could not schedule '{}': {:#}",
                LOG_TAG_CAPTURE,
                TASK_NAME_WRITE_SCREENSHOT,
                error
            );
            for destination in destinations {
                self.write_context.requests.requeue(*destination);
            }
            return Err(CaptureError::TaskRejected {
                name: TASK_NAME_WRITE_SCREENSHOT.to_string(),
                reason: format!("{:#}", error),
            });
        }

        Ok(())
    }
}

impl CaptureWriteJob {
    fn run(self) {
        let image = EncodedImage::convert_from_pixel_buffer(&self.frame.as_pixel_buffer());

        for destination in &self.destinations {
            let write_result = self
                .context
                .resolve_destination_path(*destination, image.width(), image.height())
                .and_then(|path| self.context.write_image_to_file(&image, path));

            if let Err(error) = write_result {
                log::warn!(
                    "{} {} {}: {}",
                    LOG_TAG_CAPTURE,
                    MESSAGE_SCREENSHOT_FAILED,
                    destination,
                    error
                );
            }

            self.context.requests.release(*destination);
        }
    }
}

impl CaptureWriteContext {
    fn resolve_destination_path(
        &self,
        destination: CaptureDestination,
        width: u32,
        height: u32,
    ) -> Result<PathBuf, CaptureError> {
        match destination {
            CaptureDestination::Screenshot => self.resolve_screenshot_path(width, height),
            CaptureDestination::GamePreview => self.resolve_game_preview_path(),
        }
    }

    fn resolve_screenshot_path(&self, width: u32, height: u32) -> Result<PathBuf, CaptureError> {
        let screenshot_directory = self
            .path_provider
            .screenshot_directory()
            .map_err(|error| CaptureError::MissingContext(format!("{:#}", error)))?;

        let file_name = screenshot_file_name(
            &self.settings.screenshot_prefix,
            &Local::now(),
            width,
            height,
            self.settings.screenshot_format,
        );

        Ok(screenshot_directory.join(file_name))
    }

    fn resolve_game_preview_path(&self) -> Result<PathBuf, CaptureError> {
        let game_name = self.game_session.active_game_name().ok_or_else(|| {
            CaptureError::MissingContext(MESSAGE_MISSING_GAME_SESSION.to_string())
        })?;

        let save_directory = self
            .path_provider
            .save_directory(&game_name)
            .map_err(|error| CaptureError::MissingContext(format!("{:#}", error)))?;

        self.path_provider
            .next_game_preview_path(&save_directory, self.settings.screenshot_format)
            .map_err(|error| CaptureError::IoWriteFailure {
                path: save_directory,
                reason: format!("{:#}", error),
            })
    }

    fn write_image_to_file(&self, image: &EncodedImage, path: PathBuf) -> Result<(), CaptureError> {
        match self
            .image_writer
            .write_image(image, &path, self.settings.screenshot_format)
        {
            Ok(()) => {
                log::info!("{} {} {:?}", LOG_TAG_CAPTURE, MESSAGE_SCREENSHOT_SAVED, path);
                Ok(())
            }
            Err(error) => Err(CaptureError::IoWriteFailure {
                path,
                reason: format!("{:#}", error),
            }),
        }
    }
}

/// `<prefix>-<yyMMddHHmmss>-<width>x<height>.<extension>`
pub fn screenshot_file_name(
    prefix: &str,
    timestamp: &DateTime<Local>,
    width: u32,
    height: u32,
    format: ImageFormat,
) -> String {
    format!(
        "{}-{}-{}x{}.{}",
        prefix,
        timestamp.format(SCREENSHOT_TIMESTAMP_FORMAT),
        width,
        height,
        format.file_extension()
    )
}
