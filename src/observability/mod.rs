//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → OtlpFileExporter → marquee-otlp.json
//! ```
//!
//! - Traces go to `~/.local/share/zellij/marquee/marquee-otlp.json`
//! - Files rotate at 10 MiB, keeping 3 backups
//! - Level comes from the `trace_level` plugin option (default `info`)
//!
//! # Modules
//!
//! - [`init`]: subscriber installation
//! - [`tracer`]: tracer provider and span exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: rotating trace file

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE};
