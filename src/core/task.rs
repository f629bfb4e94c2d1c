use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use base64::Engine;
use chrono::Utc;
use log::{error, info};

use super::callback::{CookieGetterSettings, HostCallback};
use super::cancel::CancellationToken;
use super::errors::{TaskError, TaskResult};
use super::scratch;
use super::settings::{parse_parms, ParamTable, SpiderSettings};

/// Severity tag shown in the host's per-task log view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    Plain,
    Info,
    Success,
    Warning,
    Error,
}

impl LogLevel {
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Plain => "",
            LogLevel::Info => "I",
            LogLevel::Success => "S",
            LogLevel::Warning => "W",
            LogLevel::Error => "E",
        }
    }
}

/// The work capability a concrete spider supplies.
///
/// `begin_work` runs once per task, on the host-owned task thread. The
/// default body is a placeholder banner; real spiders replace it
/// entirely and never call back into it.
pub trait Spider {
    /// Spider name, shown in the start banner.
    fn name(&self) -> String;

    fn begin_work(&mut self, task: &mut SpiderTask) -> TaskResult<()> {
        // Logging instantly after the click feels off in the host UI.
        std::thread::sleep(std::time::Duration::from_millis(900));
        task.log(&format!(
            "ThreadId=\"{:?}\"; SpiderObj=\"{}\";",
            std::thread::current().id(),
            self.name()
        ));
        task.log("&gt;&gt; task started");
        task.log("\n");
        Ok(())
    }
}

/// One task execution: identity, parameter table, settings, and the
/// borrowed host callback. Never reused across tasks.
pub struct SpiderTask {
    task_id: String,
    params: ParamTable,
    settings: SpiderSettings,
    callback: Arc<dyn HostCallback>,
    cancel: CancellationToken,
}

impl SpiderTask {
    pub fn new(settings: SpiderSettings, callback: Arc<dyn HostCallback>) -> Self {
        Self {
            task_id: settings.task_id.clone(),
            params: ParamTable::new(),
            settings,
            callback,
            cancel: CancellationToken::new(),
        }
    }

    /// Installs a host-shared cancellation token. Without one the task
    /// simply never observes a cancellation request.
    pub fn with_cancellation(mut self, cancel: CancellationToken) -> Self {
        self.cancel = cancel;
        self
    }

    pub fn task_id(&self) -> &str {
        &self.task_id
    }

    pub fn settings(&self) -> &SpiderSettings {
        &self.settings
    }

    pub fn cancellation(&self) -> &CancellationToken {
        &self.cancel
    }

    /// Drives one task through its full lifecycle.
    ///
    /// Settings import and the work routine run guarded: cancellation
    /// ends the task silently, any other failure is logged (summary to
    /// the task stream, full detail to the process sink). Either way the
    /// host receives exactly one completion directive, followed by the
    /// optional memory-trim hook.
    pub fn run(&mut self, spider: &mut dyn Spider) {
        let started = Instant::now();

        let outcome = match self.import_settings() {
            Ok(()) => spider.begin_work(self),
            Err(e) => Err(e),
        };

        match outcome {
            Ok(()) => {}
            Err(TaskError::Cancelled) => {
                // Host teardown, not a defect.
            }
            Err(e) => {
                self.log_error(&e.to_string());
                error!("[{}] task failed: {e:?}", self.task_id);
            }
        }

        let elapsed = started.elapsed().as_secs_f64();
        self.log("\n");
        self.log(&format!("&gt;&gt; task finished (took {elapsed:.3}s)"));
        self.run_js(&format!("Task.get('{}').taskIsEnd();", self.task_id));

        self.callback.trim_memory();
    }

    /// Builds the parameter table from `ParmsJsonStr`. Called once by
    /// `run`; direct callers see the raw `MalformedInput` failure.
    pub fn import_settings(&mut self) -> TaskResult<()> {
        self.params = parse_parms(&self.settings.parms_json)?;
        Ok(())
    }

    /// Looks up a parameter by name. Absence is `None`, never an error.
    pub fn get_parm(&self, name: &str) -> Option<&str> {
        self.params.get(name).map(String::as_str)
    }

    pub fn log(&self, content: &str) {
        self.log_with(LogLevel::Plain, content);
    }

    pub fn log_info(&self, content: &str) {
        self.log_with(LogLevel::Info, content);
    }

    pub fn log_success(&self, content: &str) {
        self.log_with(LogLevel::Success, content);
    }

    pub fn log_warning(&self, content: &str) {
        self.log_with(LogLevel::Warning, content);
    }

    pub fn log_error(&self, content: &str) {
        self.log_with(LogLevel::Error, content);
    }

    /// Single funnel for all task logging: one line to the process sink,
    /// one log-append directive to the host's per-task log view.
    fn log_with(&self, level: LogLevel, content: &str) {
        let tag = level.tag();
        if tag.is_empty() {
            info!("[{}] {}", self.task_id, content);
        } else {
            info!("[{}][{}] {}", self.task_id, tag, content);
        }

        // Content may carry quotes or newlines; base64 keeps it safe
        // across the script-injection boundary.
        let encoded = base64::engine::general_purpose::STANDARD.encode(content);
        self.run_js(&format!(
            "Task.log('{}', '{}', '{}', '{}', true);",
            self.task_id,
            encoded,
            tag,
            Utc::now().timestamp(),
        ));
    }

    /// Executes script in the host environment. Fire and forget.
    pub fn run_js(&self, code: &str) {
        self.callback.run_script(code);
    }

    /// Fetches cookies through the host-managed browser.
    pub fn cookies_via_browser(&self, settings: &CookieGetterSettings) -> Option<String> {
        self.callback.cookies_via_browser(settings)
    }

    /// Clean, empty scratch directory keyed by `tag`. See [`scratch`].
    pub fn temp_dir(&self, tag: Option<&str>) -> TaskResult<PathBuf> {
        scratch::create(tag)
    }

    pub fn delete_temp_dir(&self, tag: Option<&str>) -> TaskResult<()> {
        scratch::remove(tag)
    }
}

/// Completes a protocol-relative URL (`//host/path`) with `http:` or
/// `https:` per `prefer_https`. Anything already carrying a scheme, and
/// anything too short to carry the `//` prefix, comes back unchanged.
pub fn url_scheme_full(url: &str, prefer_https: bool) -> String {
    if url.starts_with("//") {
        let scheme = if prefer_https { "https:" } else { "http:" };
        format!("{scheme}{url}")
    } else {
        url.to_string()
    }
}
