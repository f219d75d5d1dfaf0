//! Tracing subscriber setup.

use super::export::{OtlpFileExporter, SCOPE_NAME};
use super::rotate::{RotatingFile, RotationPolicy};
use crate::infrastructure::paths::{get_data_dir, TRACE_FILE_NAME};
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use opentelemetry_sdk::trace::TracerProvider;
use std::path::PathBuf;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `trace_level` is unset or unparseable.
pub const DEFAULT_TRACE_LEVEL: &str = "info";

/// Installs the global subscriber exporting spans to
/// `~/.local/share/zellij/zgallery/zgallery-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created the
/// plugin runs without a subscriber. Only the first call in a process takes
/// effect.
pub fn init_tracing(config: &Config) {
    let data_dir = get_data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let provider = tracer_provider(data_dir.join(TRACE_FILE_NAME), RotationPolicy::default());
    let otel_layer = OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME));

    let _ = tracing_subscriber::registry()
        .with(env_filter(config.trace_level.as_deref()))
        .with(otel_layer)
        .try_init();
}

/// Provider exporting every finished span straight to `path`.
pub fn tracer_provider(path: PathBuf, policy: RotationPolicy) -> TracerProvider {
    let resource = Resource::new(vec![
        KeyValue::new("service.name", SCOPE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let exporter = OtlpFileExporter::new(RotatingFile::new(path, policy), resource.clone());

    TracerProvider::builder()
        .with_config(opentelemetry_sdk::trace::Config::default().with_resource(resource))
        .with_simple_exporter(exporter)
        .build()
}

fn env_filter(level: Option<&str>) -> EnvFilter {
    let level = level.unwrap_or(DEFAULT_TRACE_LEVEL);
    EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_TRACE_LEVEL))
}

#[cfg(test)]
mod tests {
    use super::*;
    use opentelemetry::trace::TracerProvider as _;

    #[test]
    fn spans_reach_the_trace_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(TRACE_FILE_NAME);
        let provider = tracer_provider(path.clone(), RotationPolicy::default());
        let subscriber = tracing_subscriber::registry()
            .with(env_filter(Some("debug")))
            .with(OpenTelemetryLayer::new(provider.tracer(SCOPE_NAME)));

        tracing::subscriber::with_default(subscriber, || {
            let span = tracing::debug_span!("fetch_page", category = "sport");
            span.in_scope(|| tracing::debug!("requesting"));
        });

        let contents = std::fs::read_to_string(&path).unwrap();
        assert!(contents.contains("\"name\":\"fetch_page\""));
        assert!(contents.contains("\"scope\":{\"name\":\"zgallery\"}"));
    }
}
