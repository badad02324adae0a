use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("frame rate must be between 1 and {max}, got {fps}")]
    FrameRate { fps: u32, max: u32 },
    #[error("world width {width} is too narrow, need at least {min}")]
    WorldTooNarrow { width: u32, min: u32 },
    #[error("world height {height} is too short, need at least {min}")]
    WorldTooShort { height: u32, min: u32 },
    #[error("world size {width}x{height} exceeds the {max}-unit limit")]
    WorldTooLarge { width: u32, height: u32, max: u32 },
}

#[derive(Debug, Error)]
pub enum GameError {
    #[error("terminal I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("terminal is {cols}x{rows}, need at least {min_cols}x{min_rows}")]
    TerminalTooSmall {
        cols: u16,
        rows: u16,
        min_cols: u16,
        min_rows: u16,
    },
    #[error("could not open log file {path}: {source}")]
    Logger {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
