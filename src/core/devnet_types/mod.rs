// src/core/devnet_types/mod.rs
pub mod devnet_types_hardfork;
pub mod devnet_types_chain;
pub mod devnet_types_solc;
pub mod devnet_types_address;

pub use devnet_types_hardfork::Hardfork;
pub use devnet_types_chain::KnownChain;
pub use devnet_types_solc::SolcVersion;
pub use devnet_types_address::{keccak256, Address};
