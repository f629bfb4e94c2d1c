pub mod core;
pub mod demo;

pub use core::scratch;
pub use core::{
    url_scheme_full, CancellationToken, CookieGetterSettings, HostCallback, LogLevel, ParamTable,
    Spider, SpiderSettings, SpiderTask, TaskError, TaskResult,
};
