use thiserror::Error;

/// Default O-H covalent bonding cutoff, squared ((1.05 A)^2). Calibrated for
/// water clusters; the bare cutoff should stay in 1.0..1.2 A, the closer to
/// 1.0 the better.
pub const DEFAULT_OH_CUTOFF_SQ: f64 = 1.1025;

/// Default N-H covalent bonding cutoff, squared ((1.15 A)^2). Slightly wider
/// than O-H to match the longer equilibrium N-H bond.
pub const DEFAULT_NH_CUTOFF_SQ: f64 = 1.3225;

/// Default acceptor candidate search radius around the donor, squared
/// ((4.0 A)^2).
pub const DEFAULT_ACCEPTOR_RADIUS_SQ: f64 = 16.0;

#[derive(Debug, Error, PartialEq, Clone)]
pub enum ConfigError {
    #[error("Threshold '{name}' must be positive (got {value})")]
    NonPositiveThreshold { name: &'static str, value: f64 },
}

/// Read-only bonding-geometry thresholds shared by the classifier, donor
/// locator, and indicator calculator.
///
/// All values are squared distances in squared Angstroms, fixed for the whole
/// run. They encode empirically calibrated bonding geometry and are meant to
/// be set once from configuration, never adjusted per call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorConfig {
    /// Squared O-H distance below which a hydrogen counts as covalently
    /// bonded to an oxygen.
    pub oh_cutoff_sq: f64,
    /// Squared N-H distance below which a hydrogen counts as covalently
    /// bonded to a nitrogen.
    pub nh_cutoff_sq: f64,
    /// Squared radius around the donor searched for acceptor candidates.
    pub acceptor_radius_sq: f64,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            oh_cutoff_sq: DEFAULT_OH_CUTOFF_SQ,
            nh_cutoff_sq: DEFAULT_NH_CUTOFF_SQ,
            acceptor_radius_sq: DEFAULT_ACCEPTOR_RADIUS_SQ,
        }
    }
}

impl IndicatorConfig {
    pub fn builder() -> IndicatorConfigBuilder {
        IndicatorConfigBuilder::default()
    }
}

/// Builder merging explicit overrides onto the calibrated defaults.
#[derive(Debug, Default, Clone)]
pub struct IndicatorConfigBuilder {
    oh_cutoff_sq: Option<f64>,
    nh_cutoff_sq: Option<f64>,
    acceptor_radius_sq: Option<f64>,
}

impl IndicatorConfigBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn oh_cutoff_sq(mut self, value: f64) -> Self {
        self.oh_cutoff_sq = Some(value);
        self
    }

    pub fn nh_cutoff_sq(mut self, value: f64) -> Self {
        self.nh_cutoff_sq = Some(value);
        self
    }

    pub fn acceptor_radius_sq(mut self, value: f64) -> Self {
        self.acceptor_radius_sq = Some(value);
        self
    }

    /// Applies an override only when present; keeps builder chains simple
    /// when merging optional file-level and flag-level settings.
    pub fn maybe_oh_cutoff_sq(self, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.oh_cutoff_sq(v),
            None => self,
        }
    }

    pub fn maybe_nh_cutoff_sq(self, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.nh_cutoff_sq(v),
            None => self,
        }
    }

    pub fn maybe_acceptor_radius_sq(self, value: Option<f64>) -> Self {
        match value {
            Some(v) => self.acceptor_radius_sq(v),
            None => self,
        }
    }

    /// Finalizes the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::NonPositiveThreshold`] if any threshold is zero,
    /// negative, or non-finite.
    pub fn build(self) -> Result<IndicatorConfig, ConfigError> {
        let defaults = IndicatorConfig::default();
        let config = IndicatorConfig {
            oh_cutoff_sq: self.oh_cutoff_sq.unwrap_or(defaults.oh_cutoff_sq),
            nh_cutoff_sq: self.nh_cutoff_sq.unwrap_or(defaults.nh_cutoff_sq),
            acceptor_radius_sq: self
                .acceptor_radius_sq
                .unwrap_or(defaults.acceptor_radius_sq),
        };

        for (name, value) in [
            ("oh-cutoff-sq", config.oh_cutoff_sq),
            ("nh-cutoff-sq", config.nh_cutoff_sq),
            ("acceptor-radius-sq", config.acceptor_radius_sq),
        ] {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::NonPositiveThreshold { name, value });
            }
        }

        Ok(config)
    }
}
