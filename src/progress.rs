// src/progress.rs
/// Lightweight progress reporting for the harvester's year loop.
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// Called when one logical unit completes (e.g., a draft year was fetched).
    fn item_done(&mut self, _id: u32, _rows: usize) {}

    /// Called when one logical unit fails; the run stops after this.
    fn item_failed(&mut self, _id: u32, _err: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}

/// Progress lines through the log.
#[derive(Default)]
pub struct ConsoleProgress {
    total: usize,
    done: usize,
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn log(&mut self, msg: &str) {
        logf!("{msg}");
    }

    fn item_done(&mut self, id: u32, rows: usize) {
        self.done += 1;
        logf!("[{}/{}] {id}: {rows} rows", self.done, self.total);
    }

    fn item_failed(&mut self, id: u32, err: &str) {
        loge!("{id}: {err}");
    }

    fn finish(&mut self) {
        logf!("Finished {}/{}", self.done, self.total);
    }
}
