//! Provider policy registry: per-family clamps, chunk sizes, and fast-list
//! support. Data, not behavior; the built-in table can be extended from a
//! TOML file without code changes.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::Path;

/// Policy row for one provider family. A provider id belongs to the first
/// family whose `matches` list has a case-insensitive substring hit.
#[derive(Clone, Debug, Deserialize)]
pub struct FamilyPolicy {
    /// Family label, for diagnostics only.
    pub name: String,
    /// Substrings that place a provider id in this family.
    pub matches: Vec<String>,
    /// Transfer clamp. `None` = unclamped.
    #[serde(default)]
    pub max_transfers: Option<u32>,
    /// Checker clamp. `None` = unclamped.
    #[serde(default)]
    pub max_checkers: Option<u32>,
    /// Preferred multipart chunk size (e.g. `"64M"`).
    #[serde(default)]
    pub chunk_size: Option<String>,
    /// Backend-native chunk flag (e.g. `--drive-chunk-size`), used when
    /// rendering an argument vector.
    #[serde(default)]
    pub chunk_flag: Option<String>,
    /// Whether the backend supports recursive fast listing.
    #[serde(default)]
    pub fast_list: bool,
}

impl FamilyPolicy {
    fn matches_id(&self, id: &str) -> bool {
        self.matches.iter().any(|m| id.contains(&m.to_lowercase()))
    }
}

/// Shape of a registry override file.
#[derive(Debug, Deserialize)]
struct RegistryToml {
    #[serde(default, rename = "family")]
    families: Vec<FamilyPolicy>,
}

/// Ordered family table. Lookup walks rows first to last; override files
/// prepend their rows so they win over the built-ins.
#[derive(Clone, Debug)]
pub struct ProviderRegistry {
    families: Vec<FamilyPolicy>,
}

impl Default for ProviderRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Shorthand for the built-in rows.
fn family(
    name: &str,
    matches: &[&str],
    caps: Option<(u32, u32)>,
    chunk: Option<(&str, &str)>,
    fast_list: bool,
) -> FamilyPolicy {
    FamilyPolicy {
        name: name.to_string(),
        matches: matches.iter().map(|m| m.to_string()).collect(),
        max_transfers: caps.map(|(t, _)| t),
        max_checkers: caps.map(|(_, c)| c),
        chunk_size: chunk.map(|(size, _)| size.to_string()),
        chunk_flag: chunk.map(|(_, flag)| flag.to_string()),
        fast_list,
    }
}

impl ProviderRegistry {
    /// Built-in policy table, rclone-flavored. Chunk sizes follow each
    /// backend's sweet spot; clamps keep consumer-drive APIs out of their
    /// rate limiters.
    pub fn builtin() -> Self {
        let families = vec![
            family(
                "drive",
                &["gdrive", "googledrive", "gphotos"],
                Some((12, 24)),
                Some(("32M", "--drive-chunk-size")),
                true,
            ),
            family(
                "dropbox",
                &["dropbox"],
                Some((8, 16)),
                Some(("48M", "--dropbox-chunk-size")),
                true,
            ),
            family(
                "onedrive",
                &["onedrive", "sharepoint"],
                Some((10, 20)),
                Some(("10M", "--onedrive-chunk-size")),
                true,
            ),
            family(
                "s3",
                &["s3", "minio", "wasabi", "digitalocean", "r2", "storj"],
                None,
                Some(("64M", "--s3-chunk-size")),
                true,
            ),
            family(
                "b2",
                &["b2", "backblaze"],
                None,
                Some(("96M", "--b2-chunk-size")),
                true,
            ),
            family("gcs", &["gcs"], None, Some(("64M", "--gcs-chunk-size")), true),
            family(
                "azureblob",
                &["azureblob"],
                None,
                Some(("64M", "--azureblob-chunk-size")),
                true,
            ),
        ];
        Self { families }
    }

    /// Registry from explicit rows only (no built-ins). Mostly for tests and
    /// embedders with a fully custom policy.
    pub fn from_families(families: Vec<FamilyPolicy>) -> Self {
        Self { families }
    }

    /// Parse an override file and prepend its rows to the built-in table.
    pub fn from_toml_str(s: &str) -> Result<Self> {
        let parsed: RegistryToml = toml::from_str(s).context("parse registry TOML")?;
        let mut families = parsed.families;
        log::debug!("Registry overrides: {} families", families.len());
        families.extend(Self::builtin().families);
        Ok(Self { families })
    }

    /// Load an override file from disk. See [`Self::from_toml_str`].
    pub fn load(path: &Path) -> Result<Self> {
        let s = std::fs::read_to_string(path)
            .with_context(|| format!("read registry file {}", path.display()))?;
        Self::from_toml_str(&s)
    }

    /// First family matching the provider id, or `None` for unrecognized
    /// providers (which then get the conservative defaults everywhere).
    pub fn family_for(&self, provider: &str) -> Option<&FamilyPolicy> {
        let id = provider.to_lowercase();
        self.families.iter().find(|f| f.matches_id(&id))
    }

    /// Preferred chunk size for the provider, if any. No default: absence
    /// means the executor keeps its own.
    pub fn chunk_size_for(&self, provider: &str) -> Option<&str> {
        self.family_for(provider)?.chunk_size.as_deref()
    }

    /// Backend-native chunk flag for the provider, if any.
    pub fn chunk_flag_for(&self, provider: &str) -> Option<&str> {
        self.family_for(provider)?.chunk_flag.as_deref()
    }

    /// Whether the provider supports recursive fast listing. Unrecognized
    /// providers report false.
    pub fn fast_list(&self, provider: &str) -> bool {
        self.family_for(provider).is_some_and(|f| f.fast_list)
    }
}
