//! AWS partition lookup.
//!
//! A partition groups regions that share a DNS suffix and signing
//! conventions. Lookup follows the rules-engine `aws.partition` function:
//! an exact region match wins, then the first partition whose region regex
//! matches, and anything else falls back to the `aws` partition so that
//! future regions still resolve.

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex::Regex;
use serde::de::IgnoredAny;
use serde::{Deserialize, Serialize};

/// Partition metadata bundled with the crate.
const DEFAULT_PARTITIONS_JSON: &str = include_str!("partitions.json");

/// Partition used when no region pattern matches.
const DEFAULT_PARTITION_ID: &str = "aws";

static DEFAULT_RESOLVER: LazyLock<PartitionResolver> = LazyLock::new(|| {
    PartitionResolver::from_json(DEFAULT_PARTITIONS_JSON)
        .expect("bundled partitions.json is valid")
});

/// Partition attributes exposed to endpoint rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Partition {
    /// Partition name, e.g. `aws-cn`.
    pub name: String,
    /// DNS suffix for standard endpoints.
    pub dns_suffix: String,
    /// DNS suffix for dual-stack endpoints.
    pub dual_stack_dns_suffix: String,
    /// Whether FIPS endpoints exist in this partition.
    #[serde(rename = "supportsFIPS")]
    pub supports_fips: bool,
    /// Whether dual-stack endpoints exist in this partition.
    pub supports_dual_stack: bool,
    /// Region used for global services.
    pub implicit_global_region: String,
}

/// Errors raised while loading partition metadata.
#[derive(Debug, thiserror::Error)]
pub enum PartitionError {
    /// The metadata is not valid JSON or does not match the schema.
    #[error("invalid partition metadata: {0}")]
    Json(#[from] serde_json::Error),

    /// A partition's region regex does not compile.
    #[error("invalid region regex for partition `{partition}`: {source}")]
    Regex {
        /// Partition id.
        partition: String,
        /// Underlying regex error.
        source: regex::Error,
    },

    /// The metadata lists no partitions.
    #[error("partition metadata contains no partitions")]
    Empty,
}

/// On-disk partition metadata document.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartitionsDocument {
    partitions: Vec<PartitionEntry>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PartitionEntry {
    id: String,
    outputs: Partition,
    region_regex: String,
    #[serde(default)]
    regions: BTreeMap<String, IgnoredAny>,
}

#[derive(Debug)]
struct CompiledPartition {
    id: String,
    outputs: Partition,
    region_regex: Regex,
    regions: BTreeMap<String, IgnoredAny>,
}

/// Resolves region names to partitions.
///
/// # Examples
///
/// ```
/// use rustack_s3_endpoint::functions::PartitionResolver;
///
/// let resolver = PartitionResolver::bundled();
/// assert_eq!(resolver.resolve("cn-north-1").dns_suffix, "amazonaws.com.cn");
/// assert_eq!(resolver.resolve("us-future-9").name, "aws");
/// ```
#[derive(Debug)]
pub struct PartitionResolver {
    partitions: Vec<CompiledPartition>,
    default_index: usize,
}

impl PartitionResolver {
    /// The resolver built from the bundled partition metadata.
    #[must_use]
    pub fn bundled() -> &'static Self {
        &DEFAULT_RESOLVER
    }

    /// Build a resolver from a `partitions.json` document.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError`] if the document does not parse, a region
    /// regex is invalid, or no partitions are listed.
    pub fn from_json(json: &str) -> Result<Self, PartitionError> {
        let document: PartitionsDocument = serde_json::from_str(json)?;
        if document.partitions.is_empty() {
            return Err(PartitionError::Empty);
        }

        let partitions = document
            .partitions
            .into_iter()
            .map(|entry| {
                let region_regex =
                    Regex::new(&entry.region_regex).map_err(|source| PartitionError::Regex {
                        partition: entry.id.clone(),
                        source,
                    })?;
                Ok(CompiledPartition {
                    id: entry.id,
                    outputs: entry.outputs,
                    region_regex,
                    regions: entry.regions,
                })
            })
            .collect::<Result<Vec<_>, PartitionError>>()?;

        let default_index = partitions
            .iter()
            .position(|p| p.id == DEFAULT_PARTITION_ID)
            .unwrap_or(0);

        Ok(Self {
            partitions,
            default_index,
        })
    }

    /// Find the partition serving `region`.
    #[must_use]
    pub fn resolve(&self, region: &str) -> &Partition {
        if let Some(p) = self.partitions.iter().find(|p| p.regions.contains_key(region)) {
            return &p.outputs;
        }
        if let Some(p) = self
            .partitions
            .iter()
            .find(|p| p.region_regex.is_match(region))
        {
            return &p.outputs;
        }
        &self.partitions[self.default_index].outputs
    }
}
