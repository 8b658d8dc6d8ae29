use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::sync::Mutex;
use once_cell::sync::Lazy;
use log::{
    LevelFilter,
    Metadata,
    Record
};

use crate::core::{
    Error,
    Result,
};

// Stdout belongs to the console protocol, so log records never go there.
enum Sink {
    Console,
    File(File),
    Muted,
}

static SINK: Lazy<Mutex<Sink>> = Lazy::new(|| Mutex::new(Sink::Muted));

static MY_LOGGER: MyLogger = MyLogger;
struct MyLogger;
impl log::Log for MyLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        let Ok(mut sink) = SINK.lock() else {
            return;
        };
        let line = format!(
            "[{}] [{}] [{}] {}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
            record.target(),
            record.level(),
            record.args()
        );
        match &mut *sink {
            Sink::Console   => eprintln!("{}", line),
            Sink::File(fp)  => { _ = writeln!(fp, "{}", line); }
            Sink::Muted     => {}
        }
    }

    fn flush(&self) {
        let Ok(mut sink) = SINK.lock() else {
            return;
        };
        match &mut *sink {
            Sink::Console   => { _ = io::stderr().flush(); }
            Sink::File(fp)  => { _ = fp.flush(); }
            Sink::Muted     => {}
        }
    }
}

fn open_log_file(path: &str) -> Result<File> {
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| Error::Io(format!("Opening log file {} error: {}", path, e)))
}

pub fn setup(level: LevelFilter, file: Option<&str>) -> Result<()> {
    let sink = match file {
        Some(path) => Sink::File(open_log_file(path)?),
        None => Sink::Console,
    };

    if let Ok(mut guard) = SINK.lock() {
        *guard = sink;
    }
    _ = log::set_logger(&MY_LOGGER);
    log::set_max_level(level);
    Ok(())
}

pub fn revert_console_output() {
    let Ok(mut guard) = SINK.lock() else {
        return;
    };
    if let Sink::Console = *guard {
        *guard = Sink::Muted;
    }
}

pub fn teardown() {
    log::logger().flush();
    if let Ok(mut guard) = SINK.lock() {
        *guard = Sink::Muted;
    }
    log::set_max_level(LevelFilter::Off);
}
