//! Configuration file loading for docfacts.
//!
//! Reads `docfacts.json` from the working root. Falls back to defaults when the
//! file is missing or incomplete. Only presentation is configurable; the fact
//! sheet and document paths are fixed.

use std::path::Path;

use serde::{Deserialize, Serialize};

pub const CONFIG_FILE: &str = "docfacts.json";

/// Widest `=` rule the human report will draw.
pub const MAX_BANNER_WIDTH: usize = 200;

/// Top-level docfacts configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DocfactsConfig {
    #[serde(default)]
    pub report: ReportConfig,
}

/// Human report layout.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportConfig {
    #[serde(default = "default_banner_width")]
    pub banner_width: usize,
    #[serde(default = "default_true")]
    pub summary: bool,
}

fn default_banner_width() -> usize {
    60
}
fn default_true() -> bool {
    true
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            banner_width: default_banner_width(),
            summary: true,
        }
    }
}

impl DocfactsConfig {
    /// Load configuration from `docfacts.json` inside the given root.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(root: &Path) -> Self {
        let config_path = root.join(CONFIG_FILE);
        let content = match std::fs::read_to_string(&config_path) {
            Ok(c) => c,
            Err(_) => return Self::default(),
        };
        match serde_json::from_str::<Self>(&content) {
            Ok(mut cfg) => {
                if cfg.report.banner_width > MAX_BANNER_WIDTH {
                    eprintln!(
                        "docfacts: warning: report.banner_width {} in {} exceeds {}, clamping",
                        cfg.report.banner_width,
                        config_path.display(),
                        MAX_BANNER_WIDTH
                    );
                    cfg.report.banner_width = MAX_BANNER_WIDTH;
                }
                cfg
            }
            Err(e) => {
                eprintln!(
                    "docfacts: warning: failed to parse {}: {}, using defaults",
                    config_path.display(),
                    e
                );
                Self::default()
            }
        }
    }
}
