use anyhow::Result;

pub type BackgroundTask = Box<dyn FnOnce() + Send + 'static>;

pub trait TaskRunner: Send + Sync {
    fn submit_task(&self, task_name: &str, task: BackgroundTask) -> Result<()>;
}
