use log::debug;

use crate::core::{CookieGetterSettings, HostCallback, Spider, SpiderTask, TaskResult};

/// Stand-in for a real host: prints the script directives that would
/// otherwise be injected into the embedded browser.
pub struct ConsoleHost;

impl HostCallback for ConsoleHost {
    fn run_script(&self, code: &str) {
        println!("js> {code}");
    }

    fn cookies_via_browser(&self, _settings: &CookieGetterSettings) -> Option<String> {
        None
    }
}

/// Walks a fake paginated listing, checking for cancellation between
/// pages. Shows the shape a concrete spider takes on top of the task
/// contract.
pub struct DemoSpider;

impl Spider for DemoSpider {
    fn name(&self) -> String {
        "demo".to_string()
    }

    fn begin_work(&mut self, task: &mut SpiderTask) -> TaskResult<()> {
        let keyword = task.get_parm("keyword").unwrap_or("(none)").to_string();
        let pages: u32 = task
            .get_parm("pages")
            .and_then(|p| p.parse().ok())
            .unwrap_or(1);

        task.log_info(&format!("crawling \"{keyword}\" across {pages} pages"));

        for page in 1..=pages {
            task.cancellation().checkpoint()?;
            debug!("pretending to fetch page {page}");
            task.log(&format!("page {page}/{pages} collected"));
        }

        task.log_success("all pages collected");
        Ok(())
    }
}
