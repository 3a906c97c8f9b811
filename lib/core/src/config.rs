use serde::{Deserialize, Serialize};

use crate::{Error, Result};

pub const DEFAULT_MAX_LEVEL: usize = 4;
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1024;
/// Highest accepted `max_level`
pub const MAX_LEVEL_LIMIT: usize = 64;

/// Which layers a node takes part in once its level has been drawn
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayerPolicy {
    /// Every node joins every layer from `max_level` down to 0.
    /// The drawn level is kept on the node for reporting only.
    #[default]
    Nominal,
    /// A node joins layers `0..=level` only. The entry node is promoted to
    /// `max_level` so each layer stays reachable from it.
    Bounded,
}

/// Built-in neighbor selection policies
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NeighborSelection {
    /// Link to the single most similar node at each layer
    #[default]
    BestMatch,
    /// Link to up to `m` of the most similar nodes at each layer
    TopK { m: usize },
}

/// Configuration for an [`HnswIndex`](crate::HnswIndex)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HnswConfig {
    /// Global ceiling on layer numbers; layers are `0..=max_level`
    pub max_level: usize,
    /// Fixed dimensionality. When absent the first inserted vector sets it.
    pub dimension: Option<usize>,
    /// Seed for level draws; entropy-seeded when absent
    pub seed: Option<u64>,
    pub layer_policy: LayerPolicy,
    pub neighbor_selection: NeighborSelection,
    /// Per-layer bound on search moves. Defaults to the node count.
    pub max_search_steps: Option<usize>,
    /// Node count (whole arena, every layer) at or above which insertion
    /// scores candidates in parallel
    pub parallel_threshold: usize,
}

impl Default for HnswConfig {
    fn default() -> Self {
        Self {
            max_level: DEFAULT_MAX_LEVEL,
            dimension: None,
            seed: None,
            layer_policy: LayerPolicy::Nominal,
            neighbor_selection: NeighborSelection::BestMatch,
            max_search_steps: None,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl HnswConfig {
    #[inline]
    #[must_use]
    pub fn with_max_level(max_level: usize) -> Self {
        Self {
            max_level,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    #[must_use]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn layer_policy(mut self, policy: LayerPolicy) -> Self {
        self.layer_policy = policy;
        self
    }

    #[must_use]
    pub fn neighbor_selection(mut self, selection: NeighborSelection) -> Self {
        self.neighbor_selection = selection;
        self
    }

    #[must_use]
    pub fn max_search_steps(mut self, steps: usize) -> Self {
        self.max_search_steps = Some(steps);
        self
    }

    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_level > MAX_LEVEL_LIMIT {
            return Err(Error::InvalidConfig(format!(
                "max_level {} exceeds the limit of {MAX_LEVEL_LIMIT}",
                self.max_level
            )));
        }
        if self.dimension == Some(0) {
            return Err(Error::InvalidConfig(
                "dimension must be greater than zero".to_string(),
            ));
        }
        if let NeighborSelection::TopK { m: 0 } = self.neighbor_selection {
            return Err(Error::InvalidConfig(
                "top_k selection needs m greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = HnswConfig::default();
        assert_eq!(config.max_level, 4);
        assert_eq!(config.dimension, None);
        assert_eq!(config.layer_policy, LayerPolicy::Nominal);
        assert_eq!(config.neighbor_selection, NeighborSelection::BestMatch);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_json_partial() {
        let config = HnswConfig::from_json(r#"{"max_level": 2, "seed": 7}"#).unwrap();
        assert_eq!(config.max_level, 2);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.parallel_threshold, DEFAULT_PARALLEL_THRESHOLD);
    }

    #[test]
    fn test_from_json_policies() {
        let config = HnswConfig::from_json(
            r#"{"layer_policy": "bounded", "neighbor_selection": {"top_k": {"m": 3}}}"#,
        )
        .unwrap();
        assert_eq!(config.layer_policy, LayerPolicy::Bounded);
        assert_eq!(config.neighbor_selection, NeighborSelection::TopK { m: 3 });
    }

    #[test]
    fn test_invalid_config() {
        assert!(matches!(
            HnswConfig::from_json(r#"{"dimension": 0}"#),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            HnswConfig::default()
                .neighbor_selection(NeighborSelection::TopK { m: 0 })
                .validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            HnswConfig::from_json("{not json"),
            Err(Error::Serialization(_))
        ));
    }

    #[test]
    fn test_max_level_limit() {
        assert!(HnswConfig::with_max_level(MAX_LEVEL_LIMIT).validate().is_ok());
        assert!(matches!(
            HnswConfig::with_max_level(MAX_LEVEL_LIMIT + 1).validate(),
            Err(Error::InvalidConfig(_))
        ));
        assert!(matches!(
            HnswConfig::from_json(r#"{"max_level": 18446744073709551615}"#),
            Err(Error::InvalidConfig(_))
        ));
    }
}
