mod loader;
mod model;

pub use loader::{FileConfigLoader, FileSystem, RealFileSystem};
pub use model::{
    Config, ConnectionConfig, DEFAULT_DELIMITER, DEFAULT_NAMESPACE, DEFAULT_WMIC, OutputConfig,
};
