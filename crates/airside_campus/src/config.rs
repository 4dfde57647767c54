//! Configuration for hierarchy derivation.

use airside_foundation::RecordId;

/// SFO Terminal Complex (1954~ to 1963~), the first complex on record.
pub const FIRST_COMPLEX_ID: RecordId = 1_159_396_329;

/// Alternate id assigned to every complex.
pub const COMPLEX_ALT_ID: &str = "SFO";

/// Configuration for hierarchy derivation.
///
/// Controls currency warnings and where root resolution starts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeriveOptions {
    /// Warn when a non-deprecated record is not flagged current but has no
    /// cessation date.
    pub warn_is_current: bool,

    /// Record from which root resolution follows supersession forward.
    pub seed_id: RecordId,

    /// Alternate id given to the complex node.
    pub complex_alt_id: String,

    /// Longest supersession chain followed before giving up.
    pub max_supersession_depth: usize,
}

impl Default for DeriveOptions {
    fn default() -> Self {
        Self {
            warn_is_current: true,
            seed_id: FIRST_COMPLEX_ID,
            complex_alt_id: COMPLEX_ALT_ID.to_string(),
            max_supersession_depth: 1024,
        }
    }
}

impl DeriveOptions {
    /// Creates a configuration with currency warnings turned off.
    ///
    /// Historic complexes carry non-current flags by nature, so deriving one
    /// explicitly would otherwise warn for most of its descendants.
    #[must_use]
    pub fn quiet() -> Self {
        Self {
            warn_is_current: false,
            ..Self::default()
        }
    }

    /// Builder method to enable/disable currency warnings.
    #[must_use]
    pub fn with_warn_is_current(mut self, warn: bool) -> Self {
        self.warn_is_current = warn;
        self
    }

    /// Builder method to set the root resolution seed.
    #[must_use]
    pub fn with_seed_id(mut self, id: RecordId) -> Self {
        self.seed_id = id;
        self
    }

    /// Builder method to set the complex alternate id.
    #[must_use]
    pub fn with_complex_alt_id(mut self, alt_id: impl Into<String>) -> Self {
        self.complex_alt_id = alt_id.into();
        self
    }

    /// Builder method to set the supersession depth bound.
    #[must_use]
    pub fn with_max_supersession_depth(mut self, depth: usize) -> Self {
        self.max_supersession_depth = depth;
        self
    }
}
