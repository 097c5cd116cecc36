//! MasterSeed — identity of one generation attempt
//!
//! A seed composes four entropy sources (brand name, algorithm tag,
//! timestamp, random salt) into a canonical digest, then derives the full
//! parameter record from it. Seeds are immutable once returned and their
//! digests are collision-checked against the registry before issue.

use super::extract::{extract, normalize_brand};
use super::params::SeedParameters;
use super::registry::{CollisionRegistry, InMemoryRegistry};
use crate::algorithm::Algorithm;
use chrono::{DateTime, Utc};
use log::warn;
use rand::RngCore;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard};

/// Version byte leading the canonical entropy serialization. Bumping it
/// changes every digest, so it only moves when the serialization does.
pub const ENTROPY_VERSION: u8 = 1;

/// Collision retries before a draw is accepted regardless.
pub const DEFAULT_MAX_RETRIES: u32 = 10;

/// Identity of one generation attempt. Immutable once returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MasterSeed {
    /// SHA-256 over the canonical entropy serialization, hex-encoded
    pub digest: String,
    /// 256-bit random salt, hex-encoded; regenerated on collision retry
    pub salt: String,
    /// Creation time; hash input only, never used for ordering
    pub created_at: DateTime<Utc>,
    /// Normalized brand name
    pub brand_name: String,
    /// Generation strategy this seed was minted for
    pub algorithm: Algorithm,
    /// Derived parameter record
    pub parameters: SeedParameters,
}

impl MasterSeed {
    /// Raw digest bytes. Empty only if the hex field was hand-corrupted.
    pub fn digest_bytes(&self) -> Vec<u8> {
        hex::decode(&self.digest).unwrap_or_default()
    }

    pub fn summary(&self) -> String {
        format!(
            "seed {} | '{}' via {} | {} elements, {:?} symmetry",
            &self.digest[..12],
            self.brand_name,
            self.algorithm.name(),
            self.parameters.shape.element_count,
            self.parameters.shape.symmetry,
        )
    }
}

/// Canonical, versioned digest over the four entropy sources.
///
/// Fields are length-prefixed (little-endian u32) so no two logical inputs
/// share a byte stream. The layout is the portable hash contract: version
/// byte, then brand name, algorithm tag, LE i64 microsecond timestamp, and
/// raw salt bytes, each prefixed.
pub fn compose_digest(
    brand_name: &str,
    algorithm: Algorithm,
    timestamp_micros: i64,
    salt: &[u8],
) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update([ENTROPY_VERSION]);
    for field in [
        brand_name.as_bytes(),
        algorithm.name().as_bytes(),
        &timestamp_micros.to_le_bytes()[..],
        salt,
    ] {
        hasher.update((field.len() as u32).to_le_bytes());
        hasher.update(field);
    }
    hasher.finalize().into()
}

/// Mints collision-checked seeds against an injected registry.
pub struct SeedFactory {
    registry: Mutex<Box<dyn CollisionRegistry>>,
    max_retries: u32,
    collision_retries: AtomicU64,
}

impl Default for SeedFactory {
    fn default() -> Self {
        Self::new()
    }
}

impl SeedFactory {
    /// Factory over a fresh process-lifetime in-memory registry.
    pub fn new() -> Self {
        Self::with_registry(Box::new(InMemoryRegistry::new()), DEFAULT_MAX_RETRIES)
    }

    /// Factory over an injected registry (e.g. one shared across processes).
    pub fn with_registry(registry: Box<dyn CollisionRegistry>, max_retries: u32) -> Self {
        Self {
            registry: Mutex::new(registry),
            max_retries,
            collision_retries: AtomicU64::new(0),
        }
    }

    fn registry(&self) -> MutexGuard<'_, Box<dyn CollisionRegistry>> {
        self.registry.lock().expect("collision registry lock poisoned")
    }

    /// Number of digests issued through this factory's registry.
    pub fn issued(&self) -> usize {
        self.registry().len()
    }

    /// Lifetime count of collision retries across all mints.
    pub fn collision_retries(&self) -> u64 {
        self.collision_retries.load(Ordering::Relaxed)
    }

    /// Mint a seed whose digest has never been issued by this registry.
    ///
    /// On collision the salt and timestamp are redrawn, up to `max_retries`
    /// times; after that the latest draw is accepted anyway rather than
    /// failing the mint. Check-then-insert holds the registry lock once, so
    /// the guarantee survives concurrent minting.
    pub fn generate_unique(&self, brand_name: &str, algorithm: Algorithm) -> MasterSeed {
        let brand = normalize_brand(brand_name);
        let mut attempt = 0u32;

        loop {
            let mut salt = [0u8; 32];
            rand::thread_rng().fill_bytes(&mut salt);
            let created_at = Utc::now();
            let digest = compose_digest(&brand, algorithm, created_at.timestamp_micros(), &salt);
            let digest_hex = hex::encode(digest);

            {
                let mut registry = self.registry();
                if !registry.has(&digest_hex) || attempt >= self.max_retries {
                    if attempt >= self.max_retries && registry.has(&digest_hex) {
                        warn!(
                            "collision retries exhausted for '{}', accepting digest {}",
                            brand,
                            &digest_hex[..12]
                        );
                    }
                    registry.put(&digest_hex);
                    let parameters = extract(&digest, &brand);
                    return MasterSeed {
                        digest: digest_hex,
                        salt: hex::encode(salt),
                        created_at,
                        brand_name: brand,
                        algorithm,
                        parameters,
                    };
                }
            }

            self.collision_retries.fetch_add(1, Ordering::Relaxed);
            warn!(
                "digest collision for '{}' on attempt {}, re-salting",
                brand, attempt
            );
            attempt += 1;
        }
    }
}
