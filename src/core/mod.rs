pub mod api;
pub mod form;
pub mod session;
pub mod validators;

pub use crate::domain::model::{Cookie, FormParams};
pub use crate::domain::ports::{BrowserEnv, ConfirmPolicy, FormApi};
pub use crate::utils::error::Result;
