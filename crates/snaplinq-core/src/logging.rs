//! `tracing` setup for the CLI: `~/.local/state/snaplinq/snaplinq.log`, or stderr.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

/// Filter used when `RUST_LOG` is unset.
const DEFAULT_DIRECTIVES: &str = "info,snaplinq_core=debug,snaplinq_cli=debug,sqlx=warn";

/// Per-event sink handed out by [`LogFile`]. Falls back to stderr when the
/// log file handle cannot be duplicated.
enum Sink {
    Log(fs::File),
    Stderr,
}

impl io::Write for Sink {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        match self {
            Sink::Log(f) => f.write(buf),
            Sink::Stderr => io::stderr().lock().write(buf),
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        match self {
            Sink::Log(f) => f.flush(),
            Sink::Stderr => io::stderr().lock().flush(),
        }
    }
}

/// Append-only `snaplinq.log` shared by every event.
struct LogFile(fs::File);

impl LogFile {
    fn open(path: &Path) -> io::Result<Self> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map(LogFile)
    }
}

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = Sink;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => Sink::Log(f),
            Err(_) => Sink::Stderr,
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Log file location: `~/.local/state/snaplinq/snaplinq.log`.
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("snaplinq")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("snaplinq")
        .join("snaplinq.log"))
}

/// Log to `snaplinq.log` under the XDG state dir.
///
/// Errors if the file cannot be opened; the CLI then calls
/// [`init_logging_stderr`] instead.
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = LogFile::open(&path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(BoxMakeWriter::new(file))
        .with_ansi(false)
        .init();

    tracing::info!(path = %path.display(), "logging to file");
    Ok(())
}

/// Log to stderr only.
pub fn init_logging_stderr() {
    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        assert!(DEFAULT_DIRECTIVES
            .split(',')
            .all(|d| d.parse::<tracing_subscriber::filter::Directive>().is_ok()));
    }

    #[test]
    fn log_file_appends_across_writers() {
        use std::io::Write;

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("snaplinq.log");
        let log = LogFile::open(&path).unwrap();
        log.make_writer().write_all(b"first\n").unwrap();
        log.make_writer().write_all(b"second\n").unwrap();

        let again = LogFile::open(&path).unwrap();
        again.make_writer().write_all(b"third\n").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\nthird\n");
    }

    #[test]
    fn log_file_lives_under_snaplinq_dir() {
        if let Ok(path) = log_file_path() {
            assert!(path.ends_with("snaplinq/snaplinq.log"));
        }
    }
}
