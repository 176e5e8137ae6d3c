mod capture_image_writer;
mod capture_path_provider;
mod game_session_provider;
mod render_target_provider;
mod save_config_store;
mod task_runner;

pub use capture_image_writer::CaptureImageWriter;
pub use capture_path_provider::CapturePathProvider;
pub use game_session_provider::GameSessionProvider;
pub use render_target_provider::RenderTargetProvider;
pub use save_config_store::{SaveConfigStore, SaveGameCapabilities};
pub use task_runner::{BackgroundTask, TaskRunner};
