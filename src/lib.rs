pub mod browser;
pub mod config;
pub mod element;
pub mod error;
pub mod page;
pub mod verifier;

pub use browser::Browser;
pub use config::{VerifyConfig, VerifyConfigBuilder};
pub use error::{Error, Result};
pub use page::Page;
