use std::path::{Path, PathBuf};
use std::time::SystemTime;

use anyhow::{Context, Result};

use crate::core::models::ImageFormat;
use crate::global_constants::{LOG_TAG_PATHS, PREVIEWS_DIRECTORY_NAME};

/// Picks the preview image slot to write next inside a save directory.
///
/// Slots are `previews/1.<ext>` .. `previews/<max>.<ext>`. The first missing
/// slot wins; once all exist the least recently modified one is reused.
pub fn next_game_preview_image_path(
    save_directory: &Path,
    max_preview_images: usize,
    format: ImageFormat,
) -> Result<PathBuf> {
    if max_preview_images == 0 {
        anyhow::bail!("At least one preview slot is required");
    }

    let previews_directory = save_directory.join(PREVIEWS_DIRECTORY_NAME);
    std::fs::create_dir_all(&previews_directory).with_context(|| {
        format!(
            "Unable to create previews directory {:?}",
            previews_directory
        )
    })?;

    let slot_paths: Vec<PathBuf> = (1..=max_preview_images)
        .map(|slot| previews_directory.join(format!("{}.{}", slot, format.file_extension())))
        .collect();

    if let Some(free_slot) = slot_paths.iter().find(|slot_path| !slot_path.exists()) {
        log::debug!("{} using free preview slot {:?}", LOG_TAG_PATHS, free_slot);
        return Ok(free_slot.clone());
    }

    let oldest_slot = slot_paths
        .into_iter()
        .min_by_key(|slot_path| last_modified(slot_path))
        .context("No preview slots available")?;

    log::debug!("{} reusing oldest preview slot {:?}", LOG_TAG_PATHS, oldest_slot);
    Ok(oldest_slot)
}

fn last_modified(path: &Path) -> SystemTime {
    std::fs::metadata(path)
        .and_then(|metadata| metadata.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}
