// src/progress.rs
/// Lightweight progress reporting used by long-running operations (crawl/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a vendor profile was crawled).
    fn item_done(&mut self, _label: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Progress sink that forwards to the log.
pub struct LogProgress {
    total: usize,
    done: usize,
}

impl LogProgress {
    pub fn new() -> Self {
        Self { total: 0, done: 0 }
    }
}

impl Default for LogProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
        logf!("Crawl: {total} profile(s) queued");
    }

    fn log(&mut self, msg: &str) {
        logd!("{msg}");
    }

    fn item_done(&mut self, label: &str) {
        self.done += 1;
        logf!("[{}/{}] {label}", self.done, self.total);
    }

    fn finish(&mut self) {
        logf!("Crawl: finished {}/{}", self.done, self.total);
    }
}
