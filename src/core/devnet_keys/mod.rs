// src/core/devnet_keys/mod.rs
pub mod devnet_keys_path;
pub mod devnet_keys_hd;
pub mod devnet_keys_accounts;

pub use devnet_keys_path::{ChildIndex, DerivationPath, DEFAULT_DERIVATION_PATH, HARDENED_OFFSET};
pub use devnet_keys_hd::ExtendedPrivateKey;
pub use devnet_keys_accounts::{derive_accounts, env_lines, DevAccount};
