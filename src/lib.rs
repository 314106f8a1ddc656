pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub mod config;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use crate::core::api::HttpFormApi;
pub use crate::core::session::{SessionManager, UserAgentPolicy, LOGOUT_PROMPT, SESSION_COOKIE};
pub use crate::domain::model::{Cookie, FormParams};
pub use crate::domain::ports::{BrowserEnv, ConfirmPolicy, FormApi};
pub use crate::utils::error::{ClientError, Result};
