//! Client for the credit evaluation service.
//!
//! This crate provides a typed client for the evaluation REST API
//! (`/api/v1/evaluate`, `/api/v1/policy`, `/api/v1/health`) and for the
//! companion "advanced" JSON API (users, system date, files, reports). It
//! also carries the metrics and tracing bootstrap shared by the binaries.

pub mod client;
pub mod endpoints;
pub mod error;
pub mod metrics;
pub mod metrics_exporter;
pub mod models;
mod service;
pub mod tracing;

#[cfg(any(feature = "test-utils", test))]
pub mod testing;

pub use client::PreevalClient;
pub use client::builder::PreevalClientBuilder;
pub use error::{ClientError, Result};
pub use metrics::{ErrorCategory, MetricsCollector};
pub use metrics_exporter::{MetricsExporter, MetricsExporterError};
pub use models::{
    ApiResponse, CreditApplication, Decision, EmploymentType, EvaluationResult, FileCreateRequest,
    FileWriteRequest, HealthStatus, PolicyInfo, ReportRequest,
};
pub use service::EvaluationService;
pub use tracing::{LogFormat, TracingConfig, TracingError, TracingGuard};
