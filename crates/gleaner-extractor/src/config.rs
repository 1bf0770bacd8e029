//! Orchestration run configuration

/// Configuration for one orchestration run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunConfig {
    /// Whether extracted points are verified and regenerated on
    /// inaccuracies. When false the first successful extraction is accepted
    /// as-is with an empty verification report.
    pub auto_check: bool,

    /// Total extraction attempts allowed, counting the first (must be at
    /// least 1). Only consulted when `auto_check` is true.
    pub max_attempts: u32,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            auto_check: false,
            max_attempts: 2,
        }
    }
}

impl RunConfig {
    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_attempts < 1 {
            return Err("max_attempts must be at least 1".to_string());
        }
        Ok(())
    }
}
