use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DriveStatus {
    Running,
    Stopped,
}

impl DriveStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DriveStatus::Running => "Running",
            DriveStatus::Stopped => "Stopped",
        }
    }
}

/// Electrical snapshot of one conveyor drive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DriveReading {
    pub number: u32,
    pub current_amps: f64,
    pub voltage_volts: f64,
    pub frequency_hz: f64,
    pub status: DriveStatus,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DriveSummary {
    pub total: u32,
    pub online: u32,
    pub offline: u32,
}

impl DriveSummary {
    /// `total` is the installed drive count; readings only exist for the
    /// drives that reported, so unreported drives count as offline.
    pub fn from_readings(total: u32, readings: &[DriveReading]) -> Self {
        let online = readings
            .iter()
            .filter(|r| r.status == DriveStatus::Running)
            .count() as u32;
        let online = online.min(total);
        Self {
            total,
            online,
            offline: total - online,
        }
    }
}
