//! Client generation boundary.
//!
//! The crate never implements the API client itself: this module resolves a
//! generation config (input schema URL, output directory, generator plugins),
//! fetches the backend's OpenAPI document, and hands it to external generator
//! commands that produce the client source.

use std::path::{Path, PathBuf};
use std::process::Command;
use std::time::Duration;

use thiserror::Error;
use tokio::time::timeout;

use crate::config::GeneratorSettings;

pub const DEFAULT_INPUT: &str = "http://localhost:8000/openapi.json";
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const DEFAULT_OUTPUT: &str = "src/client";
pub const DEFAULT_PLUGIN: &str = "progenitor";

/// Environment variable the base URL resolves from when no explicit value
/// is given. Unset means the localhost fallback silently applies.
pub const BASE_URL_ENV: &str = "BASE_URL";

const FETCH_TIMEOUT: Duration = Duration::from_secs(30);

/// Generator plugins run offline but may compile templates; keep this loose
const PLUGIN_TIMEOUT: Duration = Duration::from_secs(120);

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("failed to fetch schema from {url}")]
    Fetch {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("schema at {url} is not a usable OpenAPI document: {reason}")]
    InvalidDocument { url: String, reason: String },

    #[error("could not write generated client into {path}")]
    Output {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to run generator plugin `{name}`")]
    Spawn {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("generator plugin `{name}` failed: {detail}")]
    Plugin { name: String, detail: String },

    #[error("generator plugin `{name}` timed out")]
    Timeout { name: String },
}

/// One generator plugin: the external command to run, plus the base URL the
/// generated client will talk to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginSpec {
    pub name: String,
    pub base_url: String,
}

/// Resolved description of a single generation invocation. Built once per
/// run, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Network location of the OpenAPI document
    pub input: String,

    /// Directory the generated client source is written into
    pub output: PathBuf,

    /// Generator plugins, run in order
    pub plugins: Vec<PluginSpec>,
}

impl GenerationConfig {
    /// Resolve the config for one invocation: CLI flag wins over the config
    /// file, which wins over the environment and the built-in defaults.
    pub fn resolve(
        settings: &GeneratorSettings,
        input: Option<String>,
        output: Option<PathBuf>,
        base_url: Option<String>,
    ) -> Self {
        let base_url = resolve_base_url(base_url.or_else(|| settings.base_url.clone()));

        let names = if settings.plugins.is_empty() {
            vec![DEFAULT_PLUGIN.to_string()]
        } else {
            settings.plugins.clone()
        };

        Self {
            input: input
                .or_else(|| settings.input.clone())
                .unwrap_or_else(|| DEFAULT_INPUT.to_string()),
            output: output
                .or_else(|| settings.output.clone())
                .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT)),
            plugins: names
                .into_iter()
                .map(|name| PluginSpec {
                    name,
                    base_url: base_url.clone(),
                })
                .collect(),
        }
    }
}

/// Explicit value → BASE_URL → localhost fallback.
pub fn resolve_base_url(explicit: Option<String>) -> String {
    base_url_or_default(explicit.or_else(|| std::env::var(BASE_URL_ENV).ok()))
}

fn base_url_or_default(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
}

/// Run one generation invocation: fetch, validate, write the document,
/// then hand it to each configured plugin.
pub async fn run(config: &GenerationConfig) -> Result<(), GenerateError> {
    tracing::info!("Fetching schema from {}", config.input);
    let body = fetch_document(&config.input).await?;
    let version = validate_document(&config.input, &body)?;
    tracing::info!("Schema describes OpenAPI {}", version);

    let document_path = write_document(&config.output, &body)?;

    for plugin in &config.plugins {
        // The fallback activating silently is easy to miss; make it visible
        tracing::info!(
            "Running plugin `{}` with base url {}",
            plugin.name,
            plugin.base_url
        );
        run_plugin(plugin, &document_path, &config.output).await?;
    }

    Ok(())
}

async fn fetch_document(url: &str) -> Result<String, GenerateError> {
    let fetch = |e| GenerateError::Fetch {
        url: url.to_string(),
        source: e,
    };

    let client = reqwest::Client::builder()
        .timeout(FETCH_TIMEOUT)
        .build()
        .map_err(fetch)?;

    let response = client
        .get(url)
        .send()
        .await
        .and_then(|r| r.error_for_status())
        .map_err(fetch)?;

    response.text().await.map_err(fetch)
}

/// Check the body parses as JSON and carries an OpenAPI/Swagger version
/// marker; returns the version string.
fn validate_document(url: &str, body: &str) -> Result<String, GenerateError> {
    let invalid = |reason: String| GenerateError::InvalidDocument {
        url: url.to_string(),
        reason,
    };

    let document: serde_json::Value =
        serde_json::from_str(body).map_err(|e| invalid(e.to_string()))?;

    document
        .get("openapi")
        .or_else(|| document.get("swagger"))
        .and_then(|v| v.as_str())
        .map(str::to_string)
        .ok_or_else(|| invalid("missing openapi/swagger version field".to_string()))
}

/// Write the fetched document into the output directory so plugins (and
/// later regenerations) work from the exact schema that was fetched.
fn write_document(output: &Path, body: &str) -> Result<PathBuf, GenerateError> {
    let io = |source| GenerateError::Output {
        path: output.to_path_buf(),
        source,
    };

    std::fs::create_dir_all(output).map_err(io)?;
    let document_path = output.join("openapi.json");
    std::fs::write(&document_path, body).map_err(io)?;

    Ok(document_path)
}

async fn run_plugin(
    plugin: &PluginSpec,
    document: &Path,
    output: &Path,
) -> Result<(), GenerateError> {
    let name = plugin.name.clone();
    let base_url = plugin.base_url.clone();
    let document = document.to_path_buf();
    let out_dir = output.to_path_buf();

    let result = timeout(
        PLUGIN_TIMEOUT,
        tokio::task::spawn_blocking(move || {
            Command::new(&name)
                .arg("-i")
                .arg(&document)
                .arg("-o")
                .arg(&out_dir)
                .env(BASE_URL_ENV, &base_url)
                .output()
        }),
    )
    .await;

    let output = match result {
        Ok(Ok(output)) => output.map_err(|e| GenerateError::Spawn {
            name: plugin.name.clone(),
            source: e,
        })?,
        Ok(Err(e)) => {
            return Err(GenerateError::Plugin {
                name: plugin.name.clone(),
                detail: format!("task failed: {}", e),
            })
        }
        Err(_) => {
            return Err(GenerateError::Timeout {
                name: plugin.name.clone(),
            })
        }
    };

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(GenerateError::Plugin {
            name: plugin.name.clone(),
            detail: format!("{} ({})", output.status, stderr.trim()),
        });
    }

    Ok(())
}
