pub mod settings;

pub use settings::{AppConfig, DerivationSettings, DerivationSource, StoreSettings};
