use thiserror::Error;

#[derive(Error, Debug)]
pub enum TaskError {
    /// Host-initiated teardown of the task thread. The lifecycle driver
    /// swallows this silently; it is not a defect.
    #[error("task cancelled")]
    Cancelled,

    #[error("malformed parameter list: {0}")]
    MalformedInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("work error: {0}")]
    Work(#[from] anyhow::Error),
}

pub type TaskResult<T> = Result<T, TaskError>;
