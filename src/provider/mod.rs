//! Provider capability classification for multi-thread tuning.
//!
//! Backends differ sharply in how well they tolerate parallel ranged reads of
//! a single object. Object-storage APIs are built for it; consumer drives
//! throttle it; everything else gets a single stream. See
//! [`capability_for_provider`] for the main API.

use log::debug;

use crate::utils::config::StreamCaps;

pub mod registry;

pub use registry::{FamilyPolicy, ProviderRegistry};

/// How well a backend tolerates parallel multi-threaded transfers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Object-storage class: parallel ranged reads are the intended use.
    Full,
    /// Consumer drive class: a few streams help, more get rate-limited.
    Limited,
    /// No known multi-stream support.
    Unsupported,
}

impl Capability {
    /// Max multi-thread streams worth requesting from this backend.
    pub const fn max_recommended_streams(self) -> u32 {
        match self {
            Capability::Full => StreamCaps::FULL,
            Capability::Limited => StreamCaps::LIMITED,
            Capability::Unsupported => StreamCaps::UNSUPPORTED,
        }
    }

    pub const fn supports_multi_thread(self) -> bool {
        !matches!(self, Capability::Unsupported)
    }
}

/// Object-storage class ids (full capability).
const FULL_MATCHES: &[&str] = &[
    "s3",
    "b2",
    "backblaze",
    "wasabi",
    "digitalocean",
    "r2",
    "storj",
    "minio",
    "gcs",
    "azureblob",
];

/// Consumer cloud-drive ids (limited capability).
const LIMITED_MATCHES: &[&str] = &[
    "gdrive",
    "googledrive",
    "gphotos",
    "onedrive",
    "sharepoint",
    "dropbox",
    "box",
    "mega",
    "pcloud",
];

/// Classify a provider id by case-insensitive substring match against the
/// capability allow-lists. Anything unmatched is [`Capability::Unsupported`];
/// unknown backends never get speculative parallelism.
pub fn capability_for_provider(provider: &str) -> Capability {
    let id = provider.to_lowercase();
    let capability = if FULL_MATCHES.iter().any(|m| id.contains(m)) {
        Capability::Full
    } else if LIMITED_MATCHES.iter().any(|m| id.contains(m)) {
        Capability::Limited
    } else {
        Capability::Unsupported
    };
    debug!("Provider {:?}: capability {:?}", provider, capability);
    capability
}
