pub mod demo_spider;

pub use demo_spider::{ConsoleHost, DemoSpider};
