//! The supported circuit arrangements.

use crate::error::TopologyError;
use core::fmt;
use core::str::FromStr;

/// Supported arrangements of the passive elements.
///
/// Series: one shared current path through every element.
/// Parallel: one shared voltage across every element (each is its own branch).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Topology {
    Series,
    Parallel,
}

impl Topology {
    pub fn tag(self) -> &'static str {
        match self {
            Topology::Series => "series",
            Topology::Parallel => "parallel",
        }
    }
}

impl fmt::Display for Topology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Topology {
    type Err = TopologyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "series" => Ok(Topology::Series),
            "parallel" => Ok(Topology::Parallel),
            other => Err(TopologyError::UnsupportedTopology {
                tag: other.to_string(),
            }),
        }
    }
}
