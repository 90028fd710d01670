use camcolor::calibration::CalibrationRecord;
use camcolor::colormath::matrix::Matrix3;
use camcolor::colormath::xy::XY;
use camcolor::error::ColorResult;
use camcolor::solver::ColorSolver;

fn init_logging() {
    /* Try to provide reasonable default filters, when RUST_LOG is not specified */
    const DEFAULT_LOG_FILTERS: &[&str] = &["debug"];

    let log_filters = std::env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTERS.join(","));

    pretty_env_logger::formatted_timed_builder()
        .parse_filters(&log_filters)
        .init();
}

fn main() -> ColorResult<()> {
    init_logging();

    let record = CalibrationRecord::new(
        Matrix3::from_rows([
            [0.7858, -0.2151, -0.091],
            [-0.5955, 1.431, 0.1737],
            [-0.2399, 0.3391, 0.579],
        ]),
        Matrix3::from_rows([
            [1.0753, -0.3149, -0.2765],
            [-0.553, 1.6283, -0.1152],
            [-0.0538, 0.192, 0.5914],
        ]),
        XY::D65,
        XY::STANDARD_A,
    );

    // white balance recorded by the camera at capture time
    let as_shot_neutral = [0.472_441, 1.0, 0.629_921];

    let solver = ColorSolver::new(&record);

    let estimate = solver.solve_white_point(as_shot_neutral)?;
    log::info!(
        "White point ({:.4}, {:.4}) after {} passes (converged: {})",
        estimate.xy.x,
        estimate.xy.y,
        estimate.passes,
        estimate.converged
    );

    let linear_srgb_from_camera = solver.linear_srgb_from_camera(as_shot_neutral)?;
    for row in linear_srgb_from_camera.rows() {
        log::info!("[{:>9.5} {:>9.5} {:>9.5}]", row[0], row[1], row[2]);
    }

    Ok(())
}
