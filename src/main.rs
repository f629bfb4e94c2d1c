use std::sync::Arc;

use spidertask::demo::{ConsoleHost, DemoSpider};
use spidertask::{SpiderSettings, SpiderTask};

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let settings = SpiderSettings {
        task_id: "demo-1".to_string(),
        parms_json: r#"[{"name":"keyword","value":"rust"},{"name":"pages","value":"3"}]"#
            .to_string(),
    };

    let mut task = SpiderTask::new(settings, Arc::new(ConsoleHost));
    task.run(&mut DemoSpider);
}
