use config::{Config, File, FileFormat};
use serde::{Deserialize, Serialize};

use colormath::adapt::AdaptationLimits;

use crate::calibration::CalibrationRecord;
use crate::error::ColorResult;

/// Tuning for the white point solver
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Upper bound on fixed-point iterations
    pub max_passes: u32,

    /// Convergence threshold, as L1 distance between successive xy estimates
    pub eps: f64,

    /// Limits for the Bradford adaptation into the profile connection space
    pub adaptation: AdaptationLimits,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_passes: 30,
            eps: 1e-6,
            adaptation: AdaptationLimits::default(),
        }
    }
}

/// A camera calibration together with the solver settings to use with it
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraProfile {
    pub calibration: CalibrationRecord,
    pub solver: SolverConfig,
}

fn parse<T: for<'de> Deserialize<'de>>(yaml: &str) -> ColorResult<T> {
    let settings = Config::builder()
        .add_source(File::from_str(yaml, FileFormat::Yaml))
        .build()?;

    Ok(settings.try_deserialize()?)
}

/// Parse solver settings from yaml. Missing keys take their default values.
pub fn parse_solver_config(yaml: &str) -> ColorResult<SolverConfig> {
    parse(yaml)
}

/// Parse a full camera profile from yaml. Missing keys take their default values.
pub fn parse_profile(yaml: &str) -> ColorResult<CameraProfile> {
    parse(yaml)
}
