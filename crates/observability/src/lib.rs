//! codegpt observability: logging and optional trace export.
//!
//! Installs one `tracing` subscriber for the process: an `EnvFilter`, a
//! console layer on stderr (stdout carries command output), and an
//! OpenTelemetry OTLP layer when an endpoint is configured.
//!
//! ```no_run
//! use codegpt_observability::{init, ObservabilityConfig};
//!
//! let config = ObservabilityConfig::new("codegpt")
//!     .with_log_level("debug");
//! init(config)?;
//!
//! tracing::info!("ready");
//! # Ok::<(), codegpt_observability::ObservabilityError>(())
//! ```
//!
//! # Environment Variables
//!
//! - `OTEL_SERVICE_NAME` - Service name
//! - `OTEL_EXPORTER_OTLP_ENDPOINT` - OTLP endpoint; export is off when unset
//! - `CODEGPT_LOG` or `RUST_LOG` - Log filter

pub mod config;
pub mod error;
pub mod telemetry;
pub mod tracing;

pub use config::ObservabilityConfig;
pub use error::ObservabilityError;
pub use telemetry::{init, shutdown};
pub use tracing::{record_duration, record_error};
