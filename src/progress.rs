// src/progress.rs
/// Lightweight progress reporting for the scrape loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of films to visit.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One film page was read; `count` reviews came out of it.
    fn item_done(&mut self, _url: &str, _title: &str, _count: usize) {}

    /// One film page could not be read; the run carries on.
    fn item_failed(&mut self, _url: &str, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
