//! Path addressing for action tree nodes.
//!
//! A path is a `/`-joined sequence of zero-based sibling indices ("2/0/1").
//! It is the sole addressing mechanism once a tree has been shipped to the
//! remote editor: the serialized tree never carries live references, and the
//! path comes back over the transport boundary on execution. Inside the
//! process a path is only ever *appended to* during construction; arbitrary
//! strings enter through [`ActionPath::parse`], which validates strictly.

use thiserror::Error;

/// Errors produced when validating a path received over the transport
/// boundary.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PathError {
    #[error("action path is empty")]
    Empty,

    #[error("action path segment {segment:?} is not a decimal index")]
    InvalidSegment { segment: String },
}

/// Validated address of one node within one initialize generation.
///
/// Paths are stable only within the generation that produced them; after the
/// tree is rebuilt they address nothing and resolve to no entry.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionPath(String);

impl ActionPath {
    /// Path of a top-level child by sibling index.
    pub fn root(index: usize) -> Self {
        Self(index.to_string())
    }

    /// Path of this node's child by sibling index.
    pub fn child(&self, index: usize) -> Self {
        Self(format!("{}/{}", self.0, index))
    }

    /// Strictly validates a path string received from the outside.
    ///
    /// Accepts exactly the `^\d+(/\d+)*$` shape: ASCII digits and `/` only,
    /// no empty segments, no leading or trailing separator.
    pub fn parse(path: &str) -> Result<Self, PathError> {
        if path.is_empty() {
            return Err(PathError::Empty);
        }
        for segment in path.split('/') {
            if segment.is_empty()
                || !segment.bytes().all(|b| b.is_ascii_digit())
                || segment.parse::<u32>().is_err()
            {
                return Err(PathError::InvalidSegment {
                    segment: segment.to_string(),
                });
            }
        }
        Ok(Self(path.to_string()))
    }

    /// Sibling indices from root to node.
    pub fn segments(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.split('/').filter_map(|s| s.parse().ok())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for ActionPath {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<ActionPath> for String {
    fn from(path: ActionPath) -> Self {
        path.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_builds_slash_joined_indices() {
        let path = ActionPath::root(2).child(0).child(1);
        assert_eq!(path.as_str(), "2/0/1");
        assert_eq!(path.segments().collect::<Vec<_>>(), vec![2, 0, 1]);
    }

    #[test]
    fn parse_accepts_well_formed_paths() {
        assert_eq!(ActionPath::parse("0").unwrap().as_str(), "0");
        assert_eq!(ActionPath::parse("99/99").unwrap().as_str(), "99/99");
    }

    #[test]
    fn parse_rejects_malformed_paths() {
        assert_eq!(ActionPath::parse(""), Err(PathError::Empty));
        for bad in ["/0", "0/", "1//2", "a/1", "0x1", "-1", " 1"] {
            assert!(
                matches!(ActionPath::parse(bad), Err(PathError::InvalidSegment { .. })),
                "{bad:?} should be rejected"
            );
        }
    }
}
