use std::sync::Mutex;

use anyhow::{Context, Result};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::core::interfaces::ports::{BackgroundTask, TaskRunner};
use crate::global_constants::LOG_TAG_TASKS;

/// Runs capture writes on tokio's blocking pool.
pub struct TokioTaskRunner {
    runtime_handle: Handle,
    pending_tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl TokioTaskRunner {
    pub fn build(runtime_handle: Handle) -> Self {
        log::debug!("{} initializing tokio task runner", LOG_TAG_TASKS);
        Self {
            runtime_handle,
            pending_tasks: Mutex::new(Vec::new()),
        }
    }

    pub fn from_current_runtime() -> Result<Self> {
        let runtime_handle =
            Handle::try_current().context("Task runner must be created inside a tokio runtime")?;
        Ok(Self::build(runtime_handle))
    }

    /// Waits for every task submitted so far. Returns how many were awaited.
    pub async fn wait_for_pending_tasks(&self) -> usize {
        let pending_tasks = match self.pending_tasks.lock() {
            Ok(mut tasks) => std::mem::take(&mut *tasks),
            Err(poisoned) => std::mem::take(&mut *poisoned.into_inner()),
        };

        let task_count = pending_tasks.len();
        for task in pending_tasks {
            if let Err(error) = task.await {
                log::warn!("{} background task failed: {}", LOG_TAG_TASKS, error);
            }
        }

        log::debug!("{} awaited {} background tasks", LOG_TAG_TASKS, task_count);
        task_count
    }
}

impl TaskRunner for TokioTaskRunner {
    fn submit_task(&self, task_name: &str, task: BackgroundTask) -> Result<()> {
        let mut pending_tasks = self
            .pending_tasks
            .lock()
            .map_err(|_| anyhow::anyhow!("Task list lock poisoned"))?;

        pending_tasks.retain(|pending_task| !pending_task.is_finished());

        let task_name = task_name.to_string();
        log::debug!("{} submitting '{}'", LOG_TAG_TASKS, task_name);

        let join_handle = self.runtime_handle.spawn_blocking(move || {
            log::debug!("{} running '{}'", LOG_TAG_TASKS, task_name);
            task();
            log::debug!("{} finished '{}'", LOG_TAG_TASKS, task_name);
        });
        pending_tasks.push(join_handle);

        Ok(())
    }
}
