mod filesystem_capture_paths;
mod game_preview_slots;
mod host_context;
mod image_file_writer;
mod json_save_config_store;
mod synthetic_render_target;
mod tokio_task_runner;

pub use filesystem_capture_paths::FilesystemCapturePaths;
pub use game_preview_slots::next_game_preview_image_path;
pub use host_context::{ActiveGameSession, HostCapabilities};
pub use image_file_writer::ImageFileWriter;
pub use json_save_config_store::JsonSaveConfigStore;
pub use synthetic_render_target::SyntheticRenderTarget;
pub use tokio_task_runner::TokioTaskRunner;
