pub mod config;
pub mod constants;
pub mod dataset;
pub mod domain;
pub mod error;
pub mod logging;
pub mod metrics;
pub mod pipeline;

pub use config::{Config, EngineSettings, SchemaVersion};
pub use dataset::{Dataset, DatasetInfo, Member};
pub use domain::{AtonLink, AtonRecord, AtonTag, AtonType, LinkKind, PeerRef};
pub use error::{EngineError, Result};
pub use pipeline::S125Engine;
