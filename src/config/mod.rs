pub mod settings;

pub use settings::{ApiConfig, GeneralConfig, Settings, StorageConfig};
