//! Inbound wash requests.
//!
//! External front-ends (control panel, companion app) send a
//! [`WashRequest`] whose fields may be missing.  It only reaches the
//! core after passing the [`ProgramConfiguration`] builder.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::program::{FillLevel, ProgramConfiguration, WashingProgram};

/// A wash request as received on the wire.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WashRequest {
    #[serde(default)]
    pub program: Option<WashingProgram>,
    #[serde(default)]
    pub fill_level: Option<FillLevel>,
    #[serde(default)]
    pub tablets_used: Option<bool>,
}

impl WashRequest {
    /// Decode a JSON request body.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(|e| {
            warn!("Malformed wash request: {e}");
            Error::InvalidArgument("wash request")
        })
    }

    /// Validate into a configuration.  Missing program or fill level fail
    /// with [`Error::InvalidArgument`].
    pub fn into_configuration(self) -> Result<ProgramConfiguration> {
        let mut builder = ProgramConfiguration::builder()
            .tablets_used(self.tablets_used.unwrap_or(false));
        if let Some(program) = self.program {
            builder = builder.program(program);
        }
        if let Some(fill_level) = self.fill_level {
            builder = builder.fill_level(fill_level);
        }
        builder.build()
    }
}

impl From<ProgramConfiguration> for WashRequest {
    fn from(config: ProgramConfiguration) -> Self {
        Self {
            program: Some(config.program()),
            fill_level: Some(config.fill_level()),
            tablets_used: Some(config.tablets_used()),
        }
    }
}
