//! Shared fixtures for integration tests.

use std::sync::{Arc, Mutex};

use route_fuzz::RedirectObserver;

/// Routes used throughout the resolution tests.
#[allow(dead_code)]
pub const SITE_ROUTES: [&str; 4] = ["/about", "/contact", "/products/shoes", "/blog"];

/// Observer that keeps every notification it receives.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct RecordingObserver {
    seen: Arc<Mutex<Vec<(String, String)>>>,
}

#[allow(dead_code)]
impl RecordingObserver {
    pub fn seen(&self) -> Vec<(String, String)> {
        self.seen.lock().unwrap().clone()
    }
}

impl RedirectObserver for RecordingObserver {
    fn on_redirect(&self, from: &str, to: &str) {
        self.seen
            .lock()
            .unwrap()
            .push((from.to_string(), to.to_string()));
    }
}

/// Write `content` to a unique file under the system temp directory.
#[allow(dead_code)]
pub fn write_temp_config(name: &str, content: &str) -> std::path::PathBuf {
    let path = std::env::temp_dir().join(format!("route-fuzz-{}-{name}.toml", std::process::id()));
    std::fs::write(&path, content).unwrap();
    path
}
