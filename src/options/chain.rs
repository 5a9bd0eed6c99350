use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::chain::{ChainParams, DEFAULT_BOND_LENGTH};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, JsonSchema)]
#[schemars(title = "Chain", inline)]
#[serde(default)]
/// Parameters fed to the chain builder on every regeneration.
pub struct ChainOptions {
    /// Number of residues to generate.
    #[schemars(title = "Residue Count", range(min = 1, max = 1000), extend("step" = 1))]
    pub residue_count: usize,
    /// Number of quantized steps per angle.
    #[schemars(title = "Angle Resolution", range(min = 4, max = 300), extend("step" = 1))]
    pub angle_resolution: u32,
    /// Distance between consecutive residues.
    #[schemars(skip)]
    pub bond_length: f64,
}

impl Default for ChainOptions {
    fn default() -> Self {
        Self {
            residue_count: 20,
            angle_resolution: 20,
            bond_length: DEFAULT_BOND_LENGTH,
        }
    }
}

impl ChainOptions {
    /// Builder parameters for the current settings.
    #[must_use]
    pub fn params(&self) -> ChainParams {
        ChainParams::new(self.residue_count, f64::from(self.angle_resolution))
    }
}
