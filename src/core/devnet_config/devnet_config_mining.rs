// src/core/devnet_config/devnet_config_mining.rs

use serde::{Serialize, Deserialize};
use std::time::Duration;
use crate::core::error::DevnetError;

/// Blockintervall: feste Millisekunden oder Bereich `[min, max]`.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(untagged)]
pub enum BlockInterval {
    Fixed(u64),
    Range([u64; 2]),
}

impl BlockInterval {
    /// `0` bedeutet beim Konsumenten "kein Intervall-Mining".
    #[inline]
    pub fn is_disabled(&self) -> bool {
        matches!(self, BlockInterval::Fixed(0))
    }

    #[inline]
    pub fn bounds_ms(&self) -> (u64, u64) {
        match *self {
            BlockInterval::Fixed(ms) => (ms, ms),
            BlockInterval::Range([min, max]) => (min, max),
        }
    }

    pub fn validate(&self) -> Result<(), DevnetError> {
        match *self {
            BlockInterval::Fixed(_) => Ok(()),
            BlockInterval::Range([min, max]) => {
                if min == 0 {
                    return Err(DevnetError::Validation("mining.interval range minimum must be positive".into()));
                }
                if min > max {
                    return Err(DevnetError::Validation(format!(
                        "mining.interval range [{}, {}] has min > max",
                        min, max
                    )));
                }
                Ok(())
            }
        }
    }

    #[inline]
    pub fn min_duration(&self) -> Duration {
        Duration::from_millis(self.bounds_ms().0)
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MempoolOrder {
    #[default]
    Priority,
    Fifo,
}

#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
#[serde(deny_unknown_fields)]
pub struct MempoolConfig {
    #[serde(default)]
    pub order: MempoolOrder,
}

fn default_auto() -> bool {
    true
}

/// Mining-Verhalten: Block pro Transaktion (`auto`) und/oder festes Intervall.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct MiningConfig {
    #[serde(default = "default_auto")]
    pub auto: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub interval: Option<BlockInterval>,
    #[serde(default)]
    pub mempool: MempoolConfig,
}

impl Default for MiningConfig {
    fn default() -> Self {
        MiningConfig {
            auto: true,
            interval: None,
            mempool: MempoolConfig::default(),
        }
    }
}

impl MiningConfig {
    #[inline]
    pub fn automine() -> Self {
        MiningConfig::default()
    }

    #[inline]
    pub fn fixed_interval(ms: u64) -> Self {
        MiningConfig {
            auto: false,
            interval: Some(BlockInterval::Fixed(ms)),
            mempool: MempoolConfig::default(),
        }
    }

    /// Intervall ohne den deaktivierten Wert `0`.
    #[inline]
    pub fn effective_interval(&self) -> Option<BlockInterval> {
        self.interval.filter(|i| !i.is_disabled())
    }

    pub fn validate(&self) -> Result<(), DevnetError> {
        if let Some(interval) = &self.interval {
            interval.validate()?;
        }
        if !self.auto && self.effective_interval().is_none() {
            return Err(DevnetError::Validation(
                "mining.auto is false but no positive mining.interval is set; no block would ever be produced".into(),
            ));
        }
        Ok(())
    }
}
