use std::sync::Arc;

use anyhow::{Context, Result};

use frame_grabber::adapters::{
    ActiveGameSession, FilesystemCapturePaths, HostCapabilities, ImageFileWriter,
    JsonSaveConfigStore, SyntheticRenderTarget, TokioTaskRunner,
};
use frame_grabber::core::interfaces::ports::CapturePathProvider;
use frame_grabber::core::models::CaptureSettings;
use frame_grabber::core::orchestrators::{FrameCapture, GameConfiguration};
use frame_grabber::global_constants::{APPLICATION_NAME, LOG_TAG_MAIN, SAVE_CONFIGS_FILE_NAME};

const DEMO_FRAME_WIDTH: u32 = 320;
const DEMO_FRAME_HEIGHT: u32 = 180;

fn main() -> Result<()> {
    env_logger::init();

    log::info!("{} Starting {}", LOG_TAG_MAIN, APPLICATION_NAME);

    let settings = CaptureSettings::load().unwrap_or_else(|error| {
        log::error!(
            "{} Failed to load settings, using defaults: {:#}",
            LOG_TAG_MAIN,
            error
        );
        CaptureSettings::default()
    });
    let game_name = std::env::args().nth(1);

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;

    runtime.block_on(run_capture_session(settings, game_name))
}

async fn run_capture_session(settings: CaptureSettings, game_name: Option<String>) -> Result<()> {
    let task_runner = Arc::new(TokioTaskRunner::from_current_runtime()?);
    let capture_paths = Arc::new(FilesystemCapturePaths::build_from_settings(&settings)?);
    let game_session = Arc::new(match &game_name {
        Some(name) => ActiveGameSession::with_game(name.clone()),
        None => ActiveGameSession::default(),
    });

    let frame_capture = FrameCapture::build(
        Arc::new(SyntheticRenderTarget::build_gradient(
            DEMO_FRAME_WIDTH,
            DEMO_FRAME_HEIGHT,
        )),
        task_runner.clone(),
        capture_paths.clone(),
        game_session,
        Arc::new(ImageFileWriter::initialize()),
        settings,
    );

    frame_capture.request_screenshot();
    if frame_capture.is_capturing() {
        if let Err(error) = frame_capture.capture() {
            log::error!("{} Screenshot capture failed: {}", LOG_TAG_MAIN, error);
        }
    }

    if let Some(game_name) = &game_name {
        let save_directory = capture_paths
            .save_directory(game_name)
            .context("Failed to resolve save directory")?;
        let config_store = JsonSaveConfigStore::open(&save_directory.join(SAVE_CONFIGS_FILE_NAME))?;
        let game_configuration = GameConfiguration::build(Arc::new(
            HostCapabilities::with_save_config_store(Arc::new(config_store)),
        ));
        let outcome = game_configuration.open_for(game_name)?;
        log::info!("{} Game configuration: {:?}", LOG_TAG_MAIN, outcome);

        if let Err(error) = frame_capture.request_game_preview() {
            log::error!("{} Game preview capture failed: {}", LOG_TAG_MAIN, error);
        }
    }

    let awaited = task_runner.wait_for_pending_tasks().await;
    log::info!(
        "{} Finished, awaited {} outstanding write task(s)",
        LOG_TAG_MAIN,
        awaited
    );

    Ok(())
}
