use check_tiles::{EncodeOptions, GifOptions, PngOptions, WavePattern};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// Application configuration loaded from config.yaml
///
/// Every section and field is optional; anything missing takes the
/// built-in default.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Default)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub limits: LimitsConfig,
    pub encoding: EncodingConfig,
    /// Render parameters used when a request leaves them out
    pub defaults: DefaultsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct ServerConfig {
    /// Listen address, overridden by `BIND_ADDR`
    pub bind: String,
    /// Renders running longer than this are cancelled
    pub render_timeout_secs: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:3000".to_string(),
            render_timeout_secs: 120,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct LimitsConfig {
    /// Largest accepted upload in bytes
    pub max_upload_bytes: usize,
    /// Tall sources at high column counts produce huge canvases
    pub max_grid_rows: u32,
    /// Canvas pixels summed over all frames; every frame stays in memory
    /// until encoding, at four bytes per pixel
    pub max_render_pixels: u64,
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            max_upload_bytes: 20 * 1024 * 1024,
            max_grid_rows: 256,
            max_render_pixels: 400_000_000,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct EncodingConfig {
    /// Re-compress still images with oxipng
    pub optimize_png: bool,
    /// GIF quantization speed, 1 (best) to 30 (fastest)
    pub gif_speed: i32,
}

impl Default for EncodingConfig {
    fn default() -> Self {
        Self {
            optimize_png: true,
            gif_speed: 10,
        }
    }
}

/// Default render parameters. Colors are hex strings as in requests.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(default)]
pub struct DefaultsConfig {
    pub columns: u32,
    pub thickness: f64,
    pub pattern: WavePattern,
    pub speed: f64,
    pub fps: u32,
    pub frames: u32,
    pub background: String,
    pub check: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            columns: 24,
            thickness: 0.10,
            pattern: WavePattern::Static,
            speed: 3.0,
            fps: 15,
            frames: 30,
            background: "#000000".to_string(),
            check: "#000000".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, or use defaults if none is given
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::info!("No config file set, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        bind = %config.server.bind,
                        max_upload_bytes = config.limits.max_upload_bytes,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Replace the listen address, e.g. from `BIND_ADDR`
    pub fn with_bind(mut self, bind: Option<String>) -> Self {
        if let Some(bind) = bind {
            self.server.bind = bind;
        }
        self
    }

    pub fn render_timeout(&self) -> Duration {
        Duration::from_secs(self.server.render_timeout_secs)
    }

    pub fn encode_options(&self) -> EncodeOptions {
        EncodeOptions {
            png: PngOptions {
                optimize: self.encoding.optimize_png,
            },
            gif: GifOptions {
                speed: self.encoding.gif_speed,
            },
        }
    }
}
