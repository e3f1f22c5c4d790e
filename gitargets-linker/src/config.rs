use std::fs::read_to_string;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::{LinkerError, LinkerResult};

pub const DEFAULT_UPSTREAM: u32 = 2500;
pub const DEFAULT_DOWNSTREAM: u32 = 2500;

///
/// Run configuration for linking and annotation. Every field has a default,
/// so an empty TOML file is a valid config.
///
/// ```toml
/// max_dist = 0
///
/// [promoters]
/// upstream = 2500
/// downstream = 2500
/// convert_ensembl_ucsc = true
///
/// [interactions]
/// lenient = false
/// ```
///
#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct LinkerConfig {
    /// `<= 0`: anchors must overlap a promoter by at least `|max_dist|` bases (one base at 0).
    /// `> 0`: the nearest promoter counts when it is at most `max_dist` bases away.
    pub max_dist: i64,
    pub promoters: PromoterConfig,
    pub interactions: InteractionConfig,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone)]
#[serde(default)]
pub struct PromoterConfig {
    /// bases upstream of the TSS, used for GTF annotations only
    pub upstream: u32,
    /// bases downstream of the TSS, used for GTF annotations only
    pub downstream: u32,
    /// prefix Ensembl-style GTF chromosome names with `chr`
    pub convert_ensembl_ucsc: bool,
}

#[derive(Deserialize, Serialize, Debug, PartialEq, Clone, Default)]
#[serde(default)]
pub struct InteractionConfig {
    /// skip and count malformed interaction records instead of failing
    pub lenient: bool,
}

impl Default for LinkerConfig {
    fn default() -> Self {
        LinkerConfig {
            max_dist: 0,
            promoters: PromoterConfig::default(),
            interactions: InteractionConfig::default(),
        }
    }
}

impl Default for PromoterConfig {
    fn default() -> Self {
        PromoterConfig {
            upstream: DEFAULT_UPSTREAM,
            downstream: DEFAULT_DOWNSTREAM,
            convert_ensembl_ucsc: true,
        }
    }
}

impl TryFrom<&Path> for LinkerConfig {
    type Error = LinkerError;

    fn try_from(path: &Path) -> LinkerResult<Self> {
        let toml_str = read_to_string(path)?;
        let config = toml::from_str(&toml_str)?;
        Ok(config)
    }
}
