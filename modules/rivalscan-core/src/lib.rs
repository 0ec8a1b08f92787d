pub mod config;
pub mod names;
pub mod ports;
pub mod prompts;
pub mod types;

pub use config::AppConfig;
pub use names::clean_competitor_names;
pub use ports::{NameExtractor, PageExtractor, ReportWriter, WebSearcher};
pub use types::{MarketData, PageInfo, SearchHit};
