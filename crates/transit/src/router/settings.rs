//! Routing configuration.

use crate::models::types::{CatalogueError, Result};

/// Boarding delay and average bus speed used to weight graph edges
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RoutingSettings {
    /// Minutes spent waiting at a stop before each boarding
    pub bus_wait_time: u32,

    /// Average bus speed in km/h
    pub bus_velocity: u32,
}

impl RoutingSettings {
    pub fn new(bus_wait_time: u32, bus_velocity: u32) -> Result<Self> {
        let settings = Self {
            bus_wait_time,
            bus_velocity,
        };
        settings.validate()?;
        Ok(settings)
    }

    pub fn validate(&self) -> Result<()> {
        if self.bus_wait_time == 0 {
            return Err(CatalogueError::InvalidData(
                "bus_wait_time must be a positive number of minutes".into(),
            ));
        }
        if self.bus_velocity == 0 {
            return Err(CatalogueError::InvalidData(
                "bus_velocity must be a positive speed in km/h".into(),
            ));
        }
        Ok(())
    }

    pub fn wait_minutes(&self) -> f64 {
        f64::from(self.bus_wait_time)
    }

    /// Bus speed in meters per minute
    pub fn meters_per_minute(&self) -> f64 {
        f64::from(self.bus_velocity) * 1000.0 / 60.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_unit_conversion() {
        let settings = RoutingSettings::new(6, 40).unwrap();
        assert_relative_eq!(settings.wait_minutes(), 6.0);
        assert_relative_eq!(settings.meters_per_minute(), 666.666_666_666, epsilon = 1e-6);
    }

    #[test]
    fn test_zero_values_rejected() {
        assert!(RoutingSettings::new(0, 40).is_err());
        assert!(RoutingSettings::new(6, 0).is_err());
    }
}
