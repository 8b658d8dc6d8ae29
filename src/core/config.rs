use log::LevelFilter;

pub trait Config: Send + Sync {
    /// Snapshot file backing the phone book, if persistence is enabled.
    fn data_file(&self) -> Option<&str>;

    fn log_level(&self) -> LevelFilter;
    fn log_file(&self) -> Option<&str>;

    fn dump(&self) -> String;
}
