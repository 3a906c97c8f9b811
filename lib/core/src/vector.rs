use serde::{Deserialize, Serialize};
use strata_similarity::{cosine_similarity, dot_product, magnitude};

use crate::Result;

/// A dense vector of `f64` components
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(transparent)]
pub struct Vector {
    data: Vec<f64>,
}

impl Vector {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f64>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f64]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.data
    }

    #[inline]
    #[must_use]
    pub fn into_inner(self) -> Vec<f64> {
        self.data
    }

    #[inline]
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        magnitude(&self.data)
    }

    #[inline]
    pub fn dot(&self, other: &[f64]) -> Result<f64> {
        Ok(dot_product(&self.data, other)?)
    }

    /// Cosine similarity with another vector
    /// Fails on length mismatch or when either side has zero magnitude
    #[inline]
    pub fn cosine_similarity(&self, other: &[f64]) -> Result<f64> {
        Ok(cosine_similarity(&self.data, other)?)
    }
}

impl From<Vec<f64>> for Vector {
    fn from(data: Vec<f64>) -> Self {
        Self::new(data)
    }
}

impl From<&[f64]> for Vector {
    fn from(data: &[f64]) -> Self {
        Self::from_slice(data)
    }
}

impl<const N: usize> From<[f64; N]> for Vector {
    fn from(data: [f64; N]) -> Self {
        Self::new(data.to_vec())
    }
}

impl AsRef<[f64]> for Vector {
    fn as_ref(&self) -> &[f64] {
        &self.data
    }
}
