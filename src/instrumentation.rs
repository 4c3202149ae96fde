//! Timing instrumentation for the controller operations.
//!
//! Enable with `--features instrumentation`. Every span entered under the
//! `instrument` attribute is timed, and `print_timing_statistics` reports the
//! totals when the program exits.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::sync::Mutex;
use std::time::Instant;
use tracing::span;
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::Layer;

/// Call count and total nanoseconds per span name.
static TIMING_DATA: Lazy<Mutex<HashMap<&'static str, (u64, u64)>>> =
    Lazy::new(|| Mutex::new(HashMap::new()));

/// Tracing layer that collects timing statistics for each instrumented span.
struct TimingLayer;

impl<S> Layer<S> for TimingLayer
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_enter(&self, id: &span::Id, ctx: Context<'_, S>) {
        if let Some(span) = ctx.span(id) {
            span.extensions_mut().insert(Instant::now());
        }
    }

    fn on_exit(&self, id: &span::Id, ctx: Context<'_, S>) {
        let span = match ctx.span(id) {
            Some(span) => span,
            None => return,
        };
        let start = match span.extensions_mut().remove::<Instant>() {
            Some(start) => start,
            None => return,
        };

        if let Ok(mut data) = TIMING_DATA.lock() {
            let entry = data.entry(span.name()).or_insert((0, 0));
            entry.0 += 1;
            entry.1 += start.elapsed().as_nanos() as u64;
        }
    }
}

/// Initialize the tracing subscriber with the timing layer.
///
/// Span events are printed as well when `RUST_LOG` is set to anything but "off".
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "off".to_string());

    let result = if env_filter == "off" || env_filter.is_empty() {
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::new("trace"))
            .with(TimingLayer);
        tracing::subscriber::set_global_default(subscriber)
    } else {
        use tracing_subscriber::fmt;

        let fmt_layer = fmt::layer().with_target(false).compact();
        let subscriber = tracing_subscriber::registry()
            .with(EnvFilter::from_default_env())
            .with(TimingLayer)
            .with(fmt_layer);
        tracing::subscriber::set_global_default(subscriber)
    };

    if let Err(error) = result {
        eprintln!("Failed to set tracing subscriber: {}", error);
    }
}

/// Print call counts and timings, slowest total first.
pub fn print_timing_statistics() {
    let mut entries: Vec<(&'static str, (u64, u64))> = match TIMING_DATA.lock() {
        Ok(data) => data.iter().map(|(name, totals)| (*name, *totals)).collect(),
        Err(_) => return,
    };

    if entries.is_empty() {
        eprintln!("\nNo timing data collected.");
        return;
    }

    entries.sort_by_key(|(_, (_, total))| std::cmp::Reverse(*total));

    eprintln!("\n{:=<72}", "");
    eprintln!(
        "{:<32} {:>12} {:>12} {:>12}",
        "Operation", "Calls", "Total (µs)", "Avg (µs)"
    );
    eprintln!("{:-<72}", "");
    for (name, (count, total_nanos)) in &entries {
        let total_micros = *total_nanos as f64 / 1_000.0;
        let avg_micros = total_micros / (*count).max(1) as f64;
        eprintln!(
            "{:<32} {:>12} {:>12.2} {:>12.2}",
            name, count, total_micros, avg_micros
        );
    }
    eprintln!("{:=<72}", "");
}
