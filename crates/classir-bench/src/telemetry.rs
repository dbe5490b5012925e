//! Logging setup for the harness binary.
//!
//! Reports own stdout; every log record goes to stderr whatever the format.

use anyhow::{anyhow, Result};
use tracing::{info, Subscriber};
use tracing_subscriber::{fmt::MakeWriter, layer::SubscriberExt, EnvFilter};

const DEFAULT_FILTER: &str = "info,classir_bench=debug";

fn build_subscriber<W>(
    json: bool,
    filter: EnvFilter,
    writer: W,
) -> Box<dyn Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let registry = tracing_subscriber::registry().with(filter);

    if json {
        Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_target(true)
                    .with_writer(writer),
            ),
        )
    } else {
        Box::new(
            registry.with(
                tracing_subscriber::fmt::layer()
                    .with_target(true)
                    .with_writer(writer),
            ),
        )
    }
}

pub fn init_telemetry(json: bool) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into());
    tracing::subscriber::set_global_default(build_subscriber(json, filter, std::io::stderr))
        .map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    info!("Telemetry initialized");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Capture(Arc<Mutex<Vec<u8>>>);

    impl Write for Capture {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl Capture {
        fn contents(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    fn log_with(json: bool) -> String {
        let capture = Capture::default();
        let writer = capture.clone();
        let subscriber = build_subscriber(json, EnvFilter::new(DEFAULT_FILTER), move || writer.clone());
        tracing::subscriber::with_default(subscriber, || {
            info!(benchmark = "gcd", "Benchmark finished");
        });
        capture.contents()
    }

    #[test]
    fn test_json_logs_go_to_given_writer() {
        let logged = log_with(true);
        let line = logged.lines().next().expect("one JSON log line");
        let record: serde_json::Value = serde_json::from_str(line).unwrap();
        assert_eq!(record["level"], "INFO");
        assert_eq!(record["fields"]["message"], "Benchmark finished");
        assert_eq!(record["fields"]["benchmark"], "gcd");
    }

    #[test]
    fn test_text_logs_go_to_given_writer() {
        let logged = log_with(false);
        assert!(logged.contains("Benchmark finished"));
        assert!(logged.contains("gcd"));
        assert!(!logged.trim_start().starts_with('{'));
    }
}
