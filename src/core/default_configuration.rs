use std::fmt;
use std::fs;
use serde::{Serialize, Deserialize};
use log::LevelFilter;

use crate::core::{
    config::Config,
    Error,
    Result,
};

pub(crate) const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Warn;

#[derive(Clone, Serialize, Deserialize)]
struct LogCfg {
    #[serde(rename = "level")]
    level   : Option<String>,
    #[serde(rename = "logFile")]
    file    : Option<String>,

    #[serde(skip)]
    deserde_level: Option<LevelFilter>,
}

#[derive(Clone, Serialize, Deserialize)]
struct Configuration {
    #[serde(rename = "dataFile")]
    data_file   : Option<String>,

    #[serde(rename = "logger")]
    logger      : Option<LogCfg>,
}

pub struct Builder<'a> {
    data_file   : Option<&'a str>,

    log_level   : Option<LevelFilter>,
    log_file    : Option<&'a str>,

    cfg         : Option<Configuration>,
}

impl<'a> Builder<'a> {
    pub fn new() -> Builder<'a> {
        Self {
            data_file   : None,
            log_level   : None,
            log_file    : None,
            cfg         : None,
        }
    }

    pub fn with_data_file(&mut self, path: &'a str) -> &mut Self {
        self.data_file = Some(path);
        self
    }

    pub fn with_log_level(&mut self, level: LevelFilter) -> &mut Self {
        self.log_level = Some(level);
        self
    }

    pub fn with_logger(&mut self, level: LevelFilter, file: Option<&'a str>) -> &mut Self {
        self.log_level = Some(level);
        self.log_file = file;
        self
    }

    pub fn load(&mut self, input: &str) -> Result<&mut Self> {
        let data = fs::read_to_string(input).map_err(|e| {
            Error::Io(format!("Reading config error: {}", e))
        })?;

        let cfg = serde_json::from_str::<Configuration>(&data).map_err(|e| {
            Error::Argument(format!("bad config, error: {}", e))
        })?;

        self.cfg = Some(cfg);
        Ok(self)
    }

    pub fn build(&mut self) -> Result<Box<dyn Config>> {
        Ok(Box::new(Configuration::new(self)))
    }
}

impl<'a> Default for Builder<'a> {
    fn default() -> Self {
        Self::new()
    }
}

impl Configuration {
    fn new(b: &Builder) -> Self {
        let mut cfg = match b.cfg.as_ref() {
            Some(cfg) => cfg.clone(),
            None => Self {
                data_file   : None,
                logger      : None,
            }
        };

        if let Some(path) = b.data_file {
            cfg.data_file = Some(path.to_string());
        }

        let mut logger = cfg.logger.take().unwrap_or(LogCfg {
            level: None,
            file: None,
            deserde_level: None,
        });

        logger.deserde_level = Some(match b.log_level {
            Some(level) => level,
            None => logger.level.as_deref()
                .and_then(|v| v.parse::<LevelFilter>().ok())
                .unwrap_or(DEFAULT_LOG_LEVEL)
        });
        if let Some(file) = b.log_file {
            logger.file = Some(file.to_string());
        }

        cfg.logger = Some(logger);
        cfg
    }
}

impl Config for Configuration {
    fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    fn log_level(&self) -> LevelFilter {
        self.logger.as_ref()
            .and_then(|v| v.deserde_level)
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    fn log_file(&self) -> Option<&str> {
        self.logger.as_ref().and_then(|v| v.file.as_deref())
    }

    fn dump(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Configuration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dataFile:{}, logLevel:{}, logFile:{}",
            self.data_file().unwrap_or("N/A"),
            self.log_level(),
            self.log_file().unwrap_or("N/A")
        )
    }
}
