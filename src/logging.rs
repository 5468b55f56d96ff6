use std::fs::{self, File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

pub const LOG_FILE_NAME: &str = "skip-browser.log";

/// Rotate once the log passes 5 MB
const MAX_LOG_SIZE: u64 = 5 * 1024 * 1024;
/// Most recent bytes kept after rotation
const KEEP_SIZE: u64 = 1024 * 1024;

/// Trim the log to its last `keep` bytes once it grows past `max`.
fn rotate_log_if_needed(log_path: &Path, max: u64, keep: u64) -> std::io::Result<()> {
    if !log_path.exists() {
        return Ok(());
    }

    let len = fs::metadata(log_path)?.len();
    if len <= max {
        return Ok(());
    }

    let mut file = File::open(log_path)?;
    file.seek(SeekFrom::Start(len.saturating_sub(keep)))?;
    let mut tail = Vec::new();
    file.read_to_end(&mut tail)?;
    drop(file);

    // Drop the partial first line
    let skip = tail
        .iter()
        .position(|&b| b == b'\n')
        .map(|i| i + 1)
        .unwrap_or(0);

    let mut file = File::create(log_path)?;
    file.write_all(b"--- Log rotated (older entries removed) ---\n")?;
    file.write_all(&tail[skip..])?;
    Ok(())
}

/// Hands out writers onto one shared log file
#[derive(Clone)]
struct LogWriterFactory {
    file: Arc<Mutex<File>>,
}

struct LogWriter {
    file: Arc<Mutex<File>>,
}

impl Write for LogWriter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        match self.file.lock() {
            Ok(mut file) => file.write(buf),
            Err(poisoned) => poisoned.into_inner().write(buf),
        }
    }

    fn flush(&mut self) -> std::io::Result<()> {
        match self.file.lock() {
            Ok(mut file) => file.flush(),
            Err(poisoned) => poisoned.into_inner().flush(),
        }
    }
}

impl<'a> MakeWriter<'a> for LogWriterFactory {
    type Writer = LogWriter;

    fn make_writer(&'a self) -> Self::Writer {
        LogWriter {
            file: self.file.clone(),
        }
    }
}

/// Send `tracing` output to `{data_dir}/skip-browser.log`.
///
/// The terminal belongs to the TUI, so nothing is written to stdout or
/// stderr. `RUST_LOG` takes precedence over `level`.
pub fn init_logging(data_dir: &Path, level: &str) -> std::io::Result<PathBuf> {
    fs::create_dir_all(data_dir)?;
    let log_path = data_dir.join(LOG_FILE_NAME);

    if let Err(e) = rotate_log_if_needed(&log_path, MAX_LOG_SIZE, KEEP_SIZE) {
        eprintln!("Warning: Failed to rotate log file: {}", e);
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;
    let writer = LogWriterFactory {
        file: Arc::new(Mutex::new(file)),
    };

    let default_filter = format!("skip_browser={level}");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(log_path = %log_path.display(), "logging initialized");
    Ok(log_path)
}
