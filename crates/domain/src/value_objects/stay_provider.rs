//! Accommodation provider tag

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which accommodation provider a stay came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StayProvider {
    /// Short-term rental listing
    Rental,
    /// Hotel
    Hotel,
}

impl StayProvider {
    /// Stable lowercase name
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Rental => "rental",
            Self::Hotel => "hotel",
        }
    }
}

impl fmt::Display for StayProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
