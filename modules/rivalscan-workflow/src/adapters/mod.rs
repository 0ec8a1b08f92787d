//! Concrete port implementations.
//!
//! Production backends (Serper search, HTTP scraping, OpenAI) and the
//! deterministic offline substitutes. Startup wiring picks per port; the
//! workflow core only ever sees the traits.

pub mod offline;
pub mod openai;
pub mod page;
pub mod serper;

pub use offline::{SamplePageExtractor, SampleReportWriter, SampleSearcher, TokenNameExtractor};
pub use openai::{LlmNameExtractor, LlmReportWriter};
pub use page::HttpPageExtractor;
pub use serper::SerperSearcher;
