use thiserror::Error;

#[derive(Error, Debug)]
pub enum ColorError {
    /* mapped errors */
    #[error(transparent)]
    ConfigError(#[from] config::ConfigError),

    #[error("Matrix {0} is singular")]
    SingularMatrix(&'static str),

    #[error("Degenerate calibration: D50 maps to camera space with max coefficient {max_coeff}")]
    DegenerateCalibration { max_coeff: f64 },
}

pub type ColorResult<T> = Result<T, ColorError>;
