use crate::domain::model::FormParams;
use crate::utils::error::{ClientError, Result};
use crate::utils::validation::{validate_url, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "urvip-client")]
#[command(about = "Posts form-encoded parameters to an API endpoint and prints the JSON reply")]
pub struct CliConfig {
    #[arg(long)]
    pub endpoint: String,

    /// Form parameters as name=value, repeatable. Order is preserved on
    /// the wire.
    #[arg(long = "param")]
    pub params: Vec<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    pub fn form_params(&self) -> Result<FormParams> {
        let mut params = FormParams::new();
        for raw in &self.params {
            let (name, value) =
                raw.split_once('=')
                    .ok_or_else(|| ClientError::InvalidConfigValueError {
                        field: "param".to_string(),
                        value: raw.clone(),
                        reason: "Expected name=value".to_string(),
                    })?;
            params.insert(name, value);
        }
        Ok(params)
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("endpoint", &self.endpoint)?;
        self.form_params()?;
        Ok(())
    }
}
