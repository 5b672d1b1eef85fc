// src/core/devnet_keys/devnet_keys_hd.rs

use hmac::{Hmac, Mac};
use k256::elliptic_curve::sec1::ToEncodedPoint;
use k256::elliptic_curve::PrimeField;
use k256::{FieldBytes, Scalar, SecretKey};
use log::debug;
use sha2::Sha512;
use crate::core::devnet_keys::devnet_keys_path::{ChildIndex, DerivationPath};
use crate::core::devnet_types::Address;
use crate::core::error::DevnetError;

type HmacSha512 = Hmac<Sha512>;

const MASTER_KEY_SALT: &[u8] = b"Bitcoin seed";

/// BIP-32 erweiterter privater Schlüssel (secp256k1).
#[derive(Clone)]
pub struct ExtendedPrivateKey {
    secret: SecretKey,
    chain_code: [u8; 32],
    depth: u8,
}

impl std::fmt::Debug for ExtendedPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Kein Schlüsselmaterial in Logs
        f.debug_struct("ExtendedPrivateKey")
            .field("address", &self.address())
            .field("depth", &self.depth)
            .finish()
    }
}

fn hmac_sha512(key: &[u8], parts: &[&[u8]]) -> Result<[u8; 64], DevnetError> {
    let mut mac = HmacSha512::new_from_slice(key)
        .map_err(|e| DevnetError::Crypto(format!("HMAC key: {}", e)))?;
    for part in parts {
        mac.update(part);
    }
    let mut out = [0u8; 64];
    out.copy_from_slice(&mac.finalize().into_bytes());
    Ok(out)
}

impl ExtendedPrivateKey {
    pub fn master(seed: &[u8]) -> Result<Self, DevnetError> {
        if seed.len() < 16 || seed.len() > 64 {
            return Err(DevnetError::Crypto(format!("Seed length {} outside 16..=64 bytes", seed.len())));
        }
        let i = hmac_sha512(MASTER_KEY_SALT, &[seed])?;
        let secret = SecretKey::from_slice(&i[..32])
            .map_err(|_| DevnetError::Crypto("Seed yields an invalid master key".into()))?;
        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        Ok(Self { secret, chain_code, depth: 0 })
    }

    pub fn derive_child(&self, index: ChildIndex) -> Result<Self, DevnetError> {
        let index_bytes = index.raw().to_be_bytes();
        let i = if index.is_hardened() {
            let secret_bytes = self.secret.to_bytes();
            hmac_sha512(&self.chain_code, &[&[0u8][..], secret_bytes.as_slice(), &index_bytes[..]])?
        } else {
            let public = self.secret.public_key().to_encoded_point(true);
            hmac_sha512(&self.chain_code, &[public.as_bytes(), &index_bytes[..]])?
        };

        // IL muss kleiner als die Gruppenordnung sein, das Ergebnis ungleich null
        let tweak = Option::<Scalar>::from(Scalar::from_repr(FieldBytes::clone_from_slice(&i[..32])))
            .ok_or_else(|| DevnetError::Crypto(format!("Child {} tweak out of range", index)))?;
        let parent: Scalar = *self.secret.to_nonzero_scalar();
        let child = tweak + parent;
        let secret = SecretKey::from_bytes(&child.to_bytes())
            .map_err(|_| DevnetError::Crypto(format!("Child {} yields the zero key", index)))?;

        let mut chain_code = [0u8; 32];
        chain_code.copy_from_slice(&i[32..]);
        Ok(Self { secret, chain_code, depth: self.depth.saturating_add(1) })
    }

    pub fn derive_path(&self, path: &DerivationPath) -> Result<Self, DevnetError> {
        let mut key = self.clone();
        for component in path.components() {
            key = key.derive_child(*component)?;
        }
        debug!("Derived key at {} (depth {})", path, key.depth);
        Ok(key)
    }

    #[inline]
    pub fn secret_key(&self) -> &SecretKey {
        &self.secret
    }

    #[inline]
    pub fn private_key_hex(&self) -> String {
        format!("0x{}", hex::encode(self.secret.to_bytes()))
    }

    #[inline]
    pub fn chain_code(&self) -> &[u8; 32] {
        &self.chain_code
    }

    #[inline]
    pub fn depth(&self) -> u8 {
        self.depth
    }

    #[inline]
    pub fn address(&self) -> Address {
        Address::from_public_key(&self.secret.public_key())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // BIP-32 Testvektor 1
    const SEED: &str = "000102030405060708090a0b0c0d0e0f";

    #[test]
    fn test_master_key_vector() {
        let master = ExtendedPrivateKey::master(&hex::decode(SEED).unwrap()).unwrap();
        assert_eq!(
            master.private_key_hex(),
            "0xe8f32e723decf4051aefac8e2c93c9c5b214313817cdb01a1494b917c8436b35"
        );
        assert_eq!(
            hex::encode(master.chain_code()),
            "873dff81c02f525623fd1fe5167eac3a55a049de3d314bb42ee227ffed37d508"
        );
    }

    #[test]
    fn test_child_derivation_vector() {
        let master = ExtendedPrivateKey::master(&hex::decode(SEED).unwrap()).unwrap();
        let hardened = master.derive_path(&"m/0'".parse().unwrap()).unwrap();
        assert_eq!(
            hardened.private_key_hex(),
            "0xedb2e14f9ee77d26dd93b4ecede8d16ed408ce149b6cd80b0715a2d911a0afea"
        );
        let normal = master.derive_path(&"m/0'/1".parse().unwrap()).unwrap();
        assert_eq!(
            normal.private_key_hex(),
            "0x3c6cb8d0f6a264c91ea8b5030fadaa8e538b020f0a387421a12de9319dc93368"
        );
        assert_eq!(normal.depth(), 2);
    }

    #[test]
    fn test_seed_length_rejected() {
        assert!(ExtendedPrivateKey::master(&[0u8; 8]).is_err());
    }
}
