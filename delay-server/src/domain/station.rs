//! Station identifier types.

use std::fmt;

use serde::Serialize;

/// Error returned when a station name has no known identifier.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("no station mapping exists for {0:?}")]
pub struct UnknownStation(pub String);

/// A provider station identifier (e.g. `8505000` for Luzern).
///
/// Opaque to this crate: it is only ever passed back to the provider.
///
/// # Examples
///
/// ```
/// use delay_server::domain::StationId;
///
/// let bern = StationId::resolve("Bern").unwrap();
/// assert_eq!(bern.as_str(), "8507000");
///
/// // Matching ignores case
/// assert_eq!(StationId::resolve("ZÜRICH").unwrap().as_str(), "8503000");
///
/// // Only the known stations resolve
/// assert!(StationId::resolve("Geneva").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap an identifier that has already been resolved by the caller.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Look up the identifier for a station name.
    ///
    /// The name must match one of the known stations exactly, ignoring case.
    pub fn resolve(name: &str) -> Result<Self, UnknownStation> {
        let id = match name.to_lowercase().as_str() {
            "luzern" => "8505000",
            "zürich" => "8503000",
            "bern" => "8507000",
            "basel" => "8500010",
            _ => return Err(UnknownStation(name.to_string())),
        };
        Ok(Self(id.to_string()))
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
