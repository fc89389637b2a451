pub mod config;
pub mod error;
pub mod menu;
pub mod registry;
pub mod session;
pub mod utils;

pub use config::AppConfig;
pub use registry::{CredentialRecord, Registry, StrengthVerdict, classify};
pub use session::run_session;
