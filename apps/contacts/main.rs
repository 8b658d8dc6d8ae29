use std::io::{self, IsTerminal, Write};
use std::process::ExitCode;
use clap::Parser;
use log::{debug, error, LevelFilter};

mod prompt;
use prompt::ReedlineReader;

use contacts::{
    configuration as cfg,
    logger,
    Console,
    LineReader,
    PhoneBook,
    PhoneBookBuilder,
    StdinReader,
};

#[derive(Parser, Debug)]
#[command(name = "contacts")]
#[command(version = "1.0")]
#[command(about = "Console contact book", long_about = None)]
struct Options {
    /// The phone book file; contacts are kept in memory only when omitted
    #[arg(value_name = "FILE")]
    file: Option<String>,

    /// The configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<String>,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(short, long, value_name = "LEVEL")]
    log_level: Option<String>,
}

fn run<R: LineReader, W: Write>(book: PhoneBook, reader: R, out: W) -> ExitCode {
    let mut console = Console::new(book, reader, out);
    let rc = console.run();
    logger::teardown();

    match rc {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Console error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn main() -> ExitCode {
    let opts = Options::parse();

    let mut builder = cfg::Builder::new();
    if let Some(path) = opts.config.as_deref() {
        if let Err(e) = builder.load(path) {
            eprintln!("{e}");
            return ExitCode::FAILURE;
        }
    }
    if let Some(path) = opts.file.as_deref() {
        builder.with_data_file(path);
    }
    if let Some(level) = opts.log_level.as_deref() {
        match level.parse::<LevelFilter>() {
            Ok(v) => { builder.with_log_level(v); },
            Err(_) => {
                eprintln!("Invalid log level: {level}");
                return ExitCode::FAILURE;
            }
        }
    }

    let cfg = match builder.build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Building configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::setup(cfg.log_level(), cfg.log_file()) {
        eprintln!("Setting up logger error: {e}");
        return ExitCode::FAILURE;
    }
    debug!("config: {}", cfg.dump());

    let mut book = match PhoneBookBuilder::new()
        .with_optional_path(cfg.data_file())
        .build() {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Creating phone book error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = book.load() {
        error!("Loading phone book error: {e}");
        eprintln!("Loading phone book error: {e}");
        logger::teardown();
        return ExitCode::FAILURE;
    }

    match io::stdin().is_terminal() {
        true => run(book, ReedlineReader::new(), io::stdout()),
        false => run(book, StdinReader::new(io::stdin().lock()), io::stdout()),
    }
}
