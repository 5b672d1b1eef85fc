// src/lib.rs
pub mod core;

pub use crate::core::{
    initialize_core,
    ActiveNetwork,
    DevnetConfig,
    NetworkProfile,
    DevnetError,
    Hardfork,
    derive_accounts,
    env_lines,
    DevAccount,
    BlockCadence,
};

use std::path::Path;

/// Lädt und validiert das aktive Profil und leitet dessen Konten ab.
pub fn start_devnet<P: AsRef<Path>>(path: P, network: Option<&str>) -> Result<(ActiveNetwork, Vec<DevAccount>), DevnetError> {
    let active = initialize_core(path, network)?;
    let accounts = active.derive_accounts()?;
    log::info!(
        "Devnet {} ready: chainId={}, {} accounts, first {}",
        active.name(),
        active.profile().chain_id,
        accounts.len(),
        accounts.first().map(|a| a.address.to_string()).unwrap_or_default()
    );
    Ok((active, accounts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::testutils::GOERLI_CONFIG_JSON;

    #[test]
    fn test_library_start() {
        let _ = env_logger::builder().is_test(true).try_init();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("devnet.json");
        std::fs::write(&path, GOERLI_CONFIG_JSON).unwrap();
        let (active, accounts) = start_devnet(&path, Some("hardhat")).expect("Failed to start devnet library");
        assert_eq!(active.profile().chain_id, 5);
        assert_eq!(accounts.len(), 105);
    }
}
