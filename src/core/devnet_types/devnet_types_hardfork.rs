// src/core/devnet_types/devnet_types_hardfork.rs

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use crate::core::error::DevnetError;

/// Protokoll-Regelwerk, das eine Devnet-Chain durchsetzt.
/// Die Reihenfolge der Varianten entspricht der Aktivierungsreihenfolge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Hardfork {
    Chainstart,
    Homestead,
    Dao,
    TangerineWhistle,
    SpuriousDragon,
    Byzantium,
    Constantinople,
    Petersburg,
    Istanbul,
    MuirGlacier,
    Berlin,
    London,
    ArrowGlacier,
    GrayGlacier,
    Merge,
    Shanghai,
    Cancun,
}

impl Hardfork {
    pub const ALL: [Hardfork; 17] = [
        Hardfork::Chainstart,
        Hardfork::Homestead,
        Hardfork::Dao,
        Hardfork::TangerineWhistle,
        Hardfork::SpuriousDragon,
        Hardfork::Byzantium,
        Hardfork::Constantinople,
        Hardfork::Petersburg,
        Hardfork::Istanbul,
        Hardfork::MuirGlacier,
        Hardfork::Berlin,
        Hardfork::London,
        Hardfork::ArrowGlacier,
        Hardfork::GrayGlacier,
        Hardfork::Merge,
        Hardfork::Shanghai,
        Hardfork::Cancun,
    ];

    #[inline]
    pub fn latest() -> Self {
        Hardfork::Cancun
    }

    #[inline]
    pub fn label(&self) -> &'static str {
        match self {
            Hardfork::Chainstart => "chainstart",
            Hardfork::Homestead => "homestead",
            Hardfork::Dao => "dao",
            Hardfork::TangerineWhistle => "tangerineWhistle",
            Hardfork::SpuriousDragon => "spuriousDragon",
            Hardfork::Byzantium => "byzantium",
            Hardfork::Constantinople => "constantinople",
            Hardfork::Petersburg => "petersburg",
            Hardfork::Istanbul => "istanbul",
            Hardfork::MuirGlacier => "muirGlacier",
            Hardfork::Berlin => "berlin",
            Hardfork::London => "london",
            Hardfork::ArrowGlacier => "arrowGlacier",
            Hardfork::GrayGlacier => "grayGlacier",
            Hardfork::Merge => "merge",
            Hardfork::Shanghai => "shanghai",
            Hardfork::Cancun => "cancun",
        }
    }

    /// EIP-2930 Access Lists (ab Berlin).
    #[inline]
    pub fn supports_access_lists(&self) -> bool {
        *self >= Hardfork::Berlin
    }

    /// EIP-1559 Base Fee (ab London).
    #[inline]
    pub fn supports_eip1559(&self) -> bool {
        *self >= Hardfork::London
    }

    #[inline]
    pub fn is_post_merge(&self) -> bool {
        *self >= Hardfork::Merge
    }
}

impl FromStr for Hardfork {
    type Err = DevnetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("frontier") {
            return Ok(Hardfork::Chainstart);
        }
        if trimmed.eq_ignore_ascii_case("paris") {
            return Ok(Hardfork::Merge);
        }
        Hardfork::ALL
            .iter()
            .copied()
            .find(|fork| fork.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| DevnetError::Validation(format!("Unrecognised hardfork label '{}'", s)))
    }
}

impl fmt::Display for Hardfork {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl Serialize for Hardfork {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

impl<'de> Deserialize<'de> for Hardfork {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
