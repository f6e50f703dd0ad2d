//! Logging and OpenTelemetry tracing initialization.
//!
//! Installs a `tracing-subscriber` registry with an `EnvFilter` (default
//! `info`), a fmt layer writing to stderr, and, when an OTLP endpoint is
//! configured, a `tracing-opentelemetry` layer exporting spans over gRPC.
//!
//! ```rust,ignore
//! use es_client::TracingConfig;
//!
//! let guard = TracingConfig::new()
//!     .with_otlp_endpoint("http://localhost:4317")
//!     .init()?;
//! // Run application...
//! guard.shutdown();
//! ```

use opentelemetry::trace::TracerProvider;
use opentelemetry_sdk::trace::SdkTracerProvider;
use std::time::Duration;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Configuration for logging and OpenTelemetry tracing.
#[derive(Debug, Clone)]
pub struct TracingConfig {
    /// OTLP endpoint (e.g. "http://localhost:4317")
    pub otlp_endpoint: Option<String>,
    pub service_name: String,
    pub service_version: String,
    /// Default filter directive when `RUST_LOG` is unset
    pub default_filter: String,
    /// Exporter timeout
    pub timeout: Duration,
}

impl Default for TracingConfig {
    fn default() -> Self {
        Self {
            otlp_endpoint: None,
            service_name: "es-janitor".to_string(),
            service_version: env!("CARGO_PKG_VERSION").to_string(),
            default_filter: "info".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl TracingConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set OTLP endpoint.
    pub fn with_otlp_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.otlp_endpoint = Some(endpoint.into());
        self
    }

    /// Builder method to set service name.
    pub fn with_service_name(mut self, name: impl Into<String>) -> Self {
        self.service_name = name.into();
        self
    }

    /// Builder method to set service version.
    pub fn with_service_version(mut self, version: impl Into<String>) -> Self {
        self.service_version = version.into();
        self
    }

    /// Builder method to set the fallback filter directive.
    pub fn with_default_filter(mut self, filter: impl Into<String>) -> Self {
        self.default_filter = filter.into();
        self
    }

    /// Initialize the global tracing subscriber.
    ///
    /// # Returns
    /// A guard that must be held until shutdown so pending spans are flushed.
    ///
    /// # Errors
    /// Returns an error if the OTLP pipeline fails to initialize or a global
    /// subscriber is already set.
    pub fn init(&self) -> Result<TracingGuard, TracingError> {
        use tracing_subscriber::fmt;

        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.default_filter));

        let provider = self
            .otlp_endpoint
            .as_deref()
            .map(|endpoint| self.create_tracer_provider(endpoint))
            .transpose()?;

        let init_result = match provider.as_ref() {
            Some(provider) => {
                let tracer = provider.tracer(self.service_name.clone());
                let otel_layer = tracing_opentelemetry::layer().with_tracer(tracer);
                tracing_subscriber::registry()
                    .with(env_filter)
                    .with(otel_layer)
                    .with(fmt::layer().with_writer(std::io::stderr))
                    .try_init()
            }
            None => tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init(),
        };
        init_result.map_err(|e| TracingError::InitError(e.to_string()))?;

        Ok(TracingGuard { provider })
    }

    fn create_tracer_provider(&self, endpoint: &str) -> Result<SdkTracerProvider, TracingError> {
        use opentelemetry_otlp::{Protocol, WithExportConfig};
        use opentelemetry_sdk::trace::{BatchConfig, BatchSpanProcessor, Sampler};

        let otlp_exporter = opentelemetry_otlp::SpanExporter::builder()
            .with_tonic()
            .with_endpoint(endpoint)
            .with_timeout(self.timeout)
            .with_protocol(Protocol::Grpc)
            .build()
            .map_err(|e| TracingError::InitError(e.to_string()))?;

        let batch_processor = BatchSpanProcessor::builder(otlp_exporter)
            .with_batch_config(BatchConfig::default())
            .build();

        let resource = opentelemetry_sdk::Resource::builder()
            .with_attributes(vec![
                opentelemetry::KeyValue::new("service.name", self.service_name.clone()),
                opentelemetry::KeyValue::new("service.version", self.service_version.clone()),
            ])
            .build();

        Ok(SdkTracerProvider::builder()
            .with_span_processor(batch_processor)
            .with_resource(resource)
            .with_sampler(Sampler::AlwaysOn)
            .build())
    }
}

/// Guard that holds tracer resources until shutdown.
pub struct TracingGuard {
    provider: Option<SdkTracerProvider>,
}

impl TracingGuard {
    /// Whether spans are being exported over OTLP.
    pub fn is_exporting(&self) -> bool {
        self.provider.is_some()
    }

    /// Flush pending spans and shut the exporter down.
    pub fn shutdown(&self) {
        if let Some(ref provider) = self.provider {
            let _ = provider.shutdown();
        }
    }
}

/// Errors that can occur during tracing initialization.
#[derive(Debug, thiserror::Error)]
pub enum TracingError {
    #[error("Failed to initialize tracing: {0}")]
    InitError(String),
}

/// Inject the current span context into request headers (W3C `traceparent`).
pub fn inject_trace_context(builder: reqwest::RequestBuilder) -> reqwest::RequestBuilder {
    use opentelemetry::propagation::TextMapPropagator;
    use opentelemetry_sdk::propagation::TraceContextPropagator;
    use std::collections::HashMap;
    use tracing_opentelemetry::OpenTelemetrySpanExt;

    let propagator = TraceContextPropagator::new();
    let mut headers = HashMap::new();
    let context = tracing::Span::current().context();

    propagator.inject_context(&context, &mut headers);

    headers
        .into_iter()
        .fold(builder, |builder, (key, value)| builder.header(key, value))
}
