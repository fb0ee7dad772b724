pub mod config;
pub mod params;

pub use config::{AppConfig, DefaultsConfig, EncodingConfig, LimitsConfig, ServerConfig};
pub use params::{ParamError, RenderParams};
