//! Redirect notifications.
//!
//! The resolver notifies an observer synchronously, once per `resolve` call
//! whose outcome is a non-exact match (cache hits included). `from` is the
//! current path exactly as the caller supplied it; `to` is the matched
//! candidate in its original form. Exact matches and "no match" never
//! notify.

/// Receives redirect decisions from the resolver.
pub trait RedirectObserver: Send + Sync {
    fn on_redirect(&self, from: &str, to: &str);
}

impl<F> RedirectObserver for F
where
    F: Fn(&str, &str) + Send + Sync,
{
    fn on_redirect(&self, from: &str, to: &str) {
        self(from, to)
    }
}

/// Observer that records each redirect decision as a log event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingObserver;

impl RedirectObserver for LoggingObserver {
    fn on_redirect(&self, from: &str, to: &str) {
        tracing::info!(from, to, "Fuzzy route match");
    }
}
