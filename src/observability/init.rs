//! Tracing subscriber setup.

use super::tracer::file_tracer_provider;
use crate::Config;
use opentelemetry::trace::TracerProvider as _;
use opentelemetry::KeyValue;
use opentelemetry_sdk::resource::Resource;
use tracing_opentelemetry::OpenTelemetryLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Service name attached to every exported span.
pub const SERVICE_NAME: &str = "Marquee";

/// Trace file name inside the data directory.
pub const TRACE_FILE: &str = "marquee-otlp.json";

/// Installs the global subscriber: an `EnvFilter` built from
/// `config.trace_level` feeding an OpenTelemetry layer that exports to
/// `{data_dir}/marquee-otlp.json`.
///
/// Observability is optional: if the data directory cannot be created, or a
/// subscriber is already installed, this does nothing. An unparsable level
/// falls back to `info`.
pub fn init_tracing(config: &Config) {
    let data_dir = crate::infrastructure::data_dir();
    if std::fs::create_dir_all(&data_dir).is_err() {
        return;
    }

    let filter = EnvFilter::try_new(&config.trace_level).unwrap_or_else(|_| EnvFilter::new("info"));

    let resource = Resource::new(vec![
        KeyValue::new("service.name", SERVICE_NAME),
        KeyValue::new("service.version", env!("CARGO_PKG_VERSION")),
    ]);
    let provider = file_tracer_provider(data_dir.join(TRACE_FILE), resource);
    let tracer = provider.tracer(SERVICE_NAME);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(OpenTelemetryLayer::new(tracer))
        .try_init();
}
