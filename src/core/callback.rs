use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Cookie-retrieval configuration. The core never inspects it; it is
/// handed to the host-managed browser unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CookieGetterSettings(pub Value);

/// Capabilities the host lends a task for the duration of one run. The
/// core only consumes this contract; it never implements it.
pub trait HostCallback: Send + Sync {
    /// Execute script in the host environment. Fire and forget.
    fn run_script(&self, code: &str);

    /// Retrieve cookies from the host-managed browser instance.
    /// `None` (or an empty string) signals host-defined failure.
    fn cookies_via_browser(&self, settings: &CookieGetterSettings) -> Option<String>;

    /// Post-task hook asking the host to trim idle process memory.
    /// Best effort; the lifecycle driver ignores the outcome.
    fn trim_memory(&self) {}
}
