// src/core/devnet_types/devnet_types_chain.rs

use std::fmt;

/// Bekannte Chain-IDs, die Clients und Signer typischerweise erwarten.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KnownChain {
    Mainnet,
    Goerli,
    Sepolia,
    Holesky,
    LocalGeth,
    Hardhat,
}

impl KnownChain {
    #[inline]
    pub fn from_chain_id(chain_id: u64) -> Option<Self> {
        match chain_id {
            1 => Some(KnownChain::Mainnet),
            5 => Some(KnownChain::Goerli),
            11_155_111 => Some(KnownChain::Sepolia),
            17_000 => Some(KnownChain::Holesky),
            1337 => Some(KnownChain::LocalGeth),
            31_337 => Some(KnownChain::Hardhat),
            _ => None,
        }
    }

    #[inline]
    pub fn chain_id(&self) -> u64 {
        match self {
            KnownChain::Mainnet => 1,
            KnownChain::Goerli => 5,
            KnownChain::Sepolia => 11_155_111,
            KnownChain::Holesky => 17_000,
            KnownChain::LocalGeth => 1337,
            KnownChain::Hardhat => 31_337,
        }
    }

    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            KnownChain::Mainnet => "mainnet",
            KnownChain::Goerli => "goerli",
            KnownChain::Sepolia => "sepolia",
            KnownChain::Holesky => "holesky",
            KnownChain::LocalGeth => "localgeth",
            KnownChain::Hardhat => "hardhat",
        }
    }

    /// Mainnet ist die einzige Chain mit echtem Wert.
    #[inline]
    pub fn is_testnet(&self) -> bool {
        !matches!(self, KnownChain::Mainnet)
    }
}

impl fmt::Display for KnownChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name(), self.chain_id())
    }
}
