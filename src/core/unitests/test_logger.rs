use std::fs;
use log::{info, debug, warn};
use serial_test::serial;

use crate::core::logger;
use super::{
    working_path,
    remove_working_path,
};

#[test]
#[serial]
fn test_logger() {
    logger::setup(log::LevelFilter::Info, None).unwrap();
    info!("info: testing....");
    warn!("warn: testing...");
    assert!(true);
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_disable() {
    logger::setup(log::LevelFilter::Info, None).unwrap();
    logger::revert_console_output();
    info!("info: testing....");
    debug!("debug: testing...");
    assert!(true);
    logger::teardown();
}

#[test]
#[serial]
fn test_logger_file() {
    let dir = working_path("logger_file");
    let file = format!("{}/contacts.log", dir);

    logger::setup(log::LevelFilter::Info, Some(&file)).unwrap();
    info!("stored in file");
    debug!("filtered out");
    logger::teardown();
    info!("after teardown");

    let data = fs::read_to_string(&file).unwrap();
    assert!(data.contains("[INFO] stored in file"));
    assert!(!data.contains("filtered out"));
    assert!(!data.contains("after teardown"));

    remove_working_path(&dir);
}

#[test]
#[serial]
fn test_logger_bad_file() {
    let rc = logger::setup(log::LevelFilter::Info, Some("/nonexistent-dir/contacts.log"));
    assert!(rc.is_err());
}
