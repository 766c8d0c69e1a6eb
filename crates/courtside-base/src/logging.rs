use log::{LevelFilter, Log, Metadata, Record};
use std::io::Write;
use std::sync::OnceLock;
use std::time::Instant;

/// A logger that writes to stdout using println!
///
/// Lines carry the uptime since logger init and the emitting thread id.
/// The pipeline splits work across a frame-producer thread and the UI
/// thread, so the thread id is the first thing worth reading in a line.
pub struct StdoutLogger;

static START: OnceLock<Instant> = OnceLock::new();

fn uptime_secs() -> f64 {
    START.get().map(|s| s.elapsed().as_secs_f64()).unwrap_or(0.0)
}

impl Log for StdoutLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let level = record.level();
        let thread_id = std::thread::current().id();
        let file = record.file().unwrap_or("unknown");
        let line = record.line().unwrap_or(0);

        println!(
            "{:10.3} [{}] [thread:{:?}] {}:{} - {}",
            uptime_secs(),
            level,
            thread_id,
            file,
            line,
            record.args()
        );
    }

    fn flush(&self) {
        std::io::stdout().flush().ok();
    }
}

/// Initialize the global logger with StdoutLogger
///
/// Sets the max level based on build mode:
/// - Debug builds: LevelFilter::Debug (all levels active)
/// - Release builds: LevelFilter::Info (Debug suppressed)
///
/// This can only be called once per process. Subsequent calls are silently ignored.
pub fn init_stdout_logger() {
    static LOGGER: StdoutLogger = StdoutLogger;

    START.get_or_init(Instant::now);

    let max_level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(max_level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_uptime_zero_before_init() {
        // START may have been initialized by another test in the same
        // process; either way uptime must be non-negative.
        assert!(uptime_secs() >= 0.0);
    }

    #[test]
    fn test_init_is_idempotent() {
        init_stdout_logger();
        init_stdout_logger();
        log::info!("logger survives double init");
    }
}
