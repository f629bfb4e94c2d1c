use parking_lot::Mutex;

use super::callback::{CookieGetterSettings, HostCallback};

/// Records every host interaction so tests can assert on the script
/// traffic a task produced.
#[derive(Default)]
pub struct MockCallback {
    scripts: Mutex<Vec<String>>,
    trim_calls: Mutex<usize>,
    cookie_response: Option<String>,
}

impl MockCallback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cookies(mut self, cookies: &str) -> Self {
        self.cookie_response = Some(cookies.to_string());
        self
    }

    pub fn scripts(&self) -> Vec<String> {
        self.scripts.lock().clone()
    }

    pub fn trim_calls(&self) -> usize {
        *self.trim_calls.lock()
    }

    /// How many times the task's "ended" directive was sent.
    pub fn completion_count(&self, task_id: &str) -> usize {
        let marker = format!("Task.get('{task_id}').taskIsEnd();");
        self.scripts.lock().iter().filter(|s| **s == marker).count()
    }

    /// The `(base64_content, level, timestamp)` fields of every
    /// log-append directive recorded for `task_id`.
    pub fn log_rows(&self, task_id: &str) -> Vec<(String, String, String)> {
        let prefix = format!("Task.log('{task_id}', '");
        self.scripts
            .lock()
            .iter()
            .filter_map(|s| {
                let rest = s.strip_prefix(&prefix)?;
                let rest = rest.strip_suffix("', true);")?;
                let mut fields = rest.split("', '");
                Some((
                    fields.next()?.to_string(),
                    fields.next()?.to_string(),
                    fields.next()?.to_string(),
                ))
            })
            .collect()
    }

    pub fn has_level(&self, task_id: &str, level: &str) -> bool {
        self.log_rows(task_id).iter().any(|(_, l, _)| l == level)
    }
}

impl HostCallback for MockCallback {
    fn run_script(&self, code: &str) {
        self.scripts.lock().push(code.to_string());
    }

    fn cookies_via_browser(&self, _settings: &CookieGetterSettings) -> Option<String> {
        self.cookie_response.clone()
    }

    fn trim_memory(&self) {
        *self.trim_calls.lock() += 1;
    }
}
