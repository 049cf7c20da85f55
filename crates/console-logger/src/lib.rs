//! Console Logger
//!
//! `tracing` subscriber for the front end. Each formatted event goes to the
//! browser console (`console.error` / `warn` / `log` by level) on wasm32 and
//! to stderr everywhere else. No timestamps: the console adds its own and
//! `SystemTime` is unavailable in the browser.

use std::io::{self, Write};

use tracing::{Level, Metadata};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Buffers one event and flushes it on drop
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl ConsoleWriter {
    fn new(level: Level) -> Self {
        Self { level, buf: Vec::new() }
    }

    fn emit(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let line = line.trim_end();
        write_line(self.level, line);
        self.buf.clear();
    }
}

impl Write for ConsoleWriter {
    fn write(&mut self, data: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(data);
        Ok(data.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.emit();
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        self.emit();
    }
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::ERROR => web_sys::console::error_1(&value),
        Level::WARN => web_sys::console::warn_1(&value),
        Level::INFO => web_sys::console::info_1(&value),
        _ => web_sys::console::log_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

/// `MakeWriter` choosing the console method from the event level
#[derive(Debug, Clone, Copy, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter::new(Level::INFO)
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter::new(*meta.level())
    }
}

/// Install the global subscriber. `directives` uses `EnvFilter` syntax
/// (e.g. `"info,taskboard_core=debug"`). Calling twice is an error, not a panic.
pub fn init_logger(directives: &str) -> Result<(), TryInitError> {
    let filter = EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("info"));

    let layer = fmt::layer()
        .with_writer(MakeConsoleWriter)
        .with_ansi(false)
        .without_time()
        .with_target(true);

    tracing_subscriber::registry().with(filter).with(layer).try_init()
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::*;

    #[test]
    fn test_writer_buffers_until_flush() {
        let mut writer = ConsoleWriter::new(Level::DEBUG);
        writer.write_all(b"hello ").unwrap();
        writer.write_all(b"world\n").unwrap();
        assert_eq!(writer.buf, b"hello world\n");
        writer.flush().unwrap();
        assert!(writer.buf.is_empty());
    }

    /// Records the level of every writer handed out for an event
    #[derive(Clone, Default)]
    struct RecordingWriter {
        levels: Arc<Mutex<Vec<Level>>>,
    }

    impl<'a> MakeWriter<'a> for RecordingWriter {
        type Writer = ConsoleWriter;

        fn make_writer(&'a self) -> Self::Writer {
            MakeConsoleWriter.make_writer()
        }

        fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
            let writer = MakeConsoleWriter.make_writer_for(meta);
            self.levels.lock().unwrap().push(writer.level);
            writer
        }
    }

    #[test]
    fn test_untargeted_writer_is_info() {
        assert_eq!(MakeConsoleWriter.make_writer().level, Level::INFO);
    }

    #[test]
    fn test_event_level_selects_console_method() {
        let recorder = RecordingWriter::default();
        let subscriber = tracing_subscriber::registry().with(
            fmt::layer()
                .with_writer(recorder.clone())
                .with_ansi(false)
                .without_time(),
        );

        tracing::subscriber::with_default(subscriber, || {
            tracing::warn!("slow response");
            tracing::error!("request failed");
        });

        assert_eq!(*recorder.levels.lock().unwrap(), vec![Level::WARN, Level::ERROR]);
    }

    #[test]
    fn test_init_twice_is_error() {
        let first = init_logger("debug");
        let second = init_logger("debug");
        assert!(first.is_ok());
        assert!(second.is_err());
    }
}
