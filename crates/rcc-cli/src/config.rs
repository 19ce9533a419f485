//! CLI configuration from environment.

use rcc_core::SurfaceKind;
use std::env;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

impl OutputFormat {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "text" | "txt" => Some(Self::Text),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub output: OutputFormat,
    pub default_surface: SurfaceKind,
    /// Extra tracing filter directive, e.g. "rcc_core=debug"
    pub log_directive: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary variable source. Unparseable values fall
    /// back to the defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            output: lookup("RCC_OUTPUT")
                .and_then(|s| OutputFormat::parse(&s))
                .unwrap_or(OutputFormat::Text),
            default_surface: lookup("RCC_DEFAULT_SURFACE")
                .and_then(|s| s.parse().ok())
                .unwrap_or(SurfaceKind::Paved),
            log_directive: lookup("RCC_LOG").filter(|s| !s.trim().is_empty()),
        }
    }

    /// `--json` on the command line wins over `RCC_OUTPUT`.
    pub fn output_for(&self, json_flag: bool) -> OutputFormat {
        if json_flag {
            OutputFormat::Json
        } else {
            self.output
        }
    }
}
