use std::fmt;

/// Fixed system-generation parameters the simulator is constructed with.
#[derive(Clone, Debug)]
pub(crate) struct SystemConfig {
    pub printer_count: usize,
    pub disk_count: usize,
    pub flash_drive_count: usize,
    /// Cylinder count per disk; one entry per disk.
    pub cylinder_counts: Vec<u32>,
    /// History weight for the burst prediction, 0 <= alpha <= 1.
    pub alpha: f64,
    /// Initial burst estimate (tau) for new processes, in milliseconds.
    pub tau_initial: f64,
    /// Total memory, in words.
    pub memory_size: u32,
    /// Largest admissible process size, in words.
    pub max_process_size: u32,
    /// Page/frame size in words; must be a power of two.
    pub page_size: u32,
}

#[derive(Debug, PartialEq, Eq)]
pub(crate) enum ConfigError {
    AlphaOutOfRange,
    PageSizeNotPowerOfTwo,
    PageSizeExceedsMemory,
    CylinderCountMismatch,
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::AlphaOutOfRange => {
                write!(f, "history parameter alpha must be within [0, 1]")
            }
            ConfigError::PageSizeNotPowerOfTwo => {
                write!(f, "page size must be a nonzero power of two")
            }
            ConfigError::PageSizeExceedsMemory => {
                write!(f, "page size cannot exceed memory size")
            }
            ConfigError::CylinderCountMismatch => {
                write!(f, "expected one cylinder count per disk")
            }
        }
    }
}

impl SystemConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(0.0..=1.0).contains(&self.alpha) {
            return Err(ConfigError::AlphaOutOfRange);
        }
        if self.page_size == 0 || !self.page_size.is_power_of_two() {
            return Err(ConfigError::PageSizeNotPowerOfTwo);
        }
        if self.page_size > self.memory_size {
            return Err(ConfigError::PageSizeExceedsMemory);
        }
        if self.cylinder_counts.len() != self.disk_count {
            return Err(ConfigError::CylinderCountMismatch);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> SystemConfig {
        SystemConfig {
            printer_count: 1,
            disk_count: 1,
            flash_drive_count: 1,
            cylinder_counts: vec![100],
            alpha: 0.5,
            tau_initial: 10.0,
            memory_size: 64,
            max_process_size: 64,
            page_size: 16,
        }
    }

    #[test]
    fn test_config_valid() {
        assert_eq!(small_config().validate(), Ok(()));
    }

    #[test]
    fn test_config_rejects_bad_alpha() {
        let mut config = small_config();
        config.alpha = 1.5;
        assert_eq!(config.validate(), Err(ConfigError::AlphaOutOfRange));
    }

    #[test]
    fn test_config_rejects_non_power_of_two_page_size() {
        let mut config = small_config();
        config.page_size = 12;
        assert_eq!(config.validate(), Err(ConfigError::PageSizeNotPowerOfTwo));
    }

    #[test]
    fn test_config_rejects_missing_cylinder_counts() {
        let mut config = small_config();
        config.cylinder_counts.clear();
        assert_eq!(config.validate(), Err(ConfigError::CylinderCountMismatch));
    }
}
