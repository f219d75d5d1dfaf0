//! OpenTelemetry tracing with file-based OTLP export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → SDK provider → OtlpFileExporter → RotatingFile
//! ```
//!
//! Traces land in `~/.local/share/zellij/zgallery/zgallery-otlp.json`, one
//! OTLP/JSON document per line, rotated at 10 MiB with three backups. The
//! filter comes from the `trace_level` setting and defaults to `info`.
//!
//! ```rust,no_run
//! use zgallery::observability::init_tracing;
//! use zgallery::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("plugin loaded");
//! ```
//!
//! - [`init`]: subscriber installation
//! - [`export`]: span exporter and OTLP JSON encoding
//! - [`rotate`]: size-rotated output file

pub mod export;
pub mod init;
pub mod rotate;

pub use init::{init_tracing, tracer_provider};
pub use rotate::{RotatingFile, RotationPolicy};
