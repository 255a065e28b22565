//! Custom species identifier minting

use once_cell::sync::Lazy;
use rand::Rng;
use std::sync::atomic::{AtomicU64, Ordering};

/// Random per-process tag; the sequence restarts with the process, the tag
/// keeps ids minted in different editing sessions apart.
static PROCESS_TAG: Lazy<u32> = Lazy::new(|| rand::thread_rng().gen());

/// Monotonic sequence for ids minted by this process
static SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Mint a fresh identifier for a custom species.
///
/// Keeps the `custom_` prefix the backend relies on to distinguish
/// user-authored species from catalog ids. Successive mints never collide,
/// no matter how quickly entries are added.
pub fn mint_custom_id() -> String {
    let seq = SEQUENCE.fetch_add(1, Ordering::Relaxed);
    format!("custom_{:08x}{:06x}", *PROCESS_TAG, seq)
}

/// Whether an identifier denotes a user-authored species
#[inline]
pub fn is_custom_id(id: &str) -> bool {
    id.starts_with("custom_")
}
