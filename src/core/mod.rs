mod callback;
mod cancel;
mod errors;
mod settings;
mod task;

pub mod scratch;

pub use callback::{CookieGetterSettings, HostCallback};
pub use cancel::CancellationToken;
pub use errors::{TaskError, TaskResult};
pub use settings::{ParamTable, SpiderSettings};
pub use task::{url_scheme_full, LogLevel, Spider, SpiderTask};

#[cfg(test)]
pub(crate) mod mock_callback;
