//! RefKey value object - structural position of a node in the tree
//!
//! A ref key encodes the child ordinal at every depth, prefixed by the root
//! sentinel `0`: the second child of the first root is `0-0-1`.
//!
//! The derived ordering compares paths lexicographically, which is exactly
//! depth-first pre-order. Ordered maps keyed by `RefKey` therefore iterate in
//! the same order the tree was walked.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::CheckTreeError;

/// Sentinel prefixed to every ref key
pub const ROOT_SENTINEL: usize = 0;

/// Synthetic key addressing one node by structural position
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RefKey {
    /// Ordinals below the sentinel, one per depth
    path: Vec<usize>,
}

impl RefKey {
    /// Key for the `ordinal`-th root node
    pub fn root(ordinal: usize) -> Self {
        Self {
            path: vec![ordinal],
        }
    }

    /// Key for the `ordinal`-th child of this node
    pub fn child(&self, ordinal: usize) -> Self {
        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(ordinal);
        Self { path }
    }

    /// Key of the enclosing node, `None` for roots
    pub fn parent(&self) -> Option<Self> {
        if self.path.len() <= 1 {
            return None;
        }
        Some(Self {
            path: self.path[..self.path.len() - 1].to_vec(),
        })
    }

    /// Depth of the node ("layer"); roots are layer 0
    pub fn layer(&self) -> usize {
        self.path.len().saturating_sub(1)
    }

    /// Ordinals from the root down to this node
    pub fn path(&self) -> &[usize] {
        &self.path
    }

    /// Whether `self` lies strictly below `other`
    pub fn is_descendant_of(&self, other: &RefKey) -> bool {
        self.path.len() > other.path.len() && self.path.starts_with(&other.path)
    }
}

impl fmt::Display for RefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ROOT_SENTINEL)?;
        for ordinal in &self.path {
            write!(f, "-{}", ordinal)?;
        }
        Ok(())
    }
}

impl FromStr for RefKey {
    type Err = CheckTreeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || CheckTreeError::InvalidRefKey {
            input: s.to_string(),
        };

        let mut parts = s.split('-');
        match parts.next().map(str::parse::<usize>) {
            Some(Ok(ROOT_SENTINEL)) => {}
            _ => return Err(invalid()),
        }

        let path = parts
            .map(|p| p.parse::<usize>().map_err(|_| invalid()))
            .collect::<Result<Vec<_>, _>>()?;

        if path.is_empty() {
            return Err(invalid());
        }
        Ok(Self { path })
    }
}

impl Serialize for RefKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for RefKey {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}
