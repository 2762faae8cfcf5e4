use std::{collections::HashMap, env, fs};

use serde::Deserialize;
use tracing::warn;
use url::Url;

/// Remote endpoints the workflow talks to. Defaults point at the
/// production services; a `putaway.toml` file in the working directory
/// and `APP__*` environment variables override them, in that order.
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub catalog_url: String,
    pub submit_url: String,
    pub qr_render_url: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_url: "https://api-staging.inveesync.in/test/get-items".into(),
            submit_url: "https://api-staging.inveesync.in/test/submit".into(),
            qr_render_url: "https://api.qrserver.com/v1/create-qr-code/".into(),
        }
    }
}

impl Settings {
    /// Image URL for a scannable rendering of `payload` at the
    /// configured QR endpoint.
    pub fn qr_image_url(&self, payload: &str) -> String {
        format!("{}?data={}", self.qr_render_url, urlencoding::encode(payload))
    }
}

pub fn load_settings() -> Settings {
    let mut settings = Settings::default();

    if let Ok(raw) = fs::read_to_string("putaway.toml") {
        if let Ok(file_cfg) = toml::from_str::<HashMap<String, String>>(&raw) {
            apply_file_overrides(&mut settings, &file_cfg);
        }
    }

    if let Ok(v) = env::var("APP__CATALOG_URL") {
        override_endpoint(&mut settings.catalog_url, &v);
    }
    if let Ok(v) = env::var("APP__SUBMIT_URL") {
        override_endpoint(&mut settings.submit_url, &v);
    }
    if let Ok(v) = env::var("APP__QR_RENDER_URL") {
        override_endpoint(&mut settings.qr_render_url, &v);
    }

    settings
}

fn apply_file_overrides(settings: &mut Settings, file_cfg: &HashMap<String, String>) {
    if let Some(v) = file_cfg.get("catalog_url") {
        override_endpoint(&mut settings.catalog_url, v);
    }
    if let Some(v) = file_cfg.get("submit_url") {
        override_endpoint(&mut settings.submit_url, v);
    }
    if let Some(v) = file_cfg.get("qr_render_url") {
        override_endpoint(&mut settings.qr_render_url, v);
    }
}

fn override_endpoint(slot: &mut String, value: &str) {
    match Url::parse(value) {
        Ok(_) => *slot = value.to_string(),
        Err(err) => warn!("ignoring invalid endpoint override '{value}': {err}"),
    }
}
