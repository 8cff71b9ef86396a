mod environment;
mod settings;

pub use environment::Environment;
pub use settings::{
    ExtractionSettings, GatewaySettings, LoggingSettings, ServerSettings, Settings,
};
