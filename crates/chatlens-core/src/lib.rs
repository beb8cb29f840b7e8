pub mod aggregate;
pub mod analyze;
pub mod config;
pub mod dataset;
pub mod render;
pub mod summarize;

pub use aggregate::{aggregate, TranscriptStats, UNKNOWN_LABEL};
pub use analyze::{AnalyzeError, Analyzer};
pub use config::{default_config, load_config, ChatlensConfig};
pub use dataset::DatasetIndex;
pub use render::render_conversation;
pub use summarize::{Summarizer, Summary, DEGRADED_PREFIX};
