use std::process::ExitCode;

use tracing::error;

mod app;

fn main() -> ExitCode {
    let wiring = app::bootstrap::build_app();
    match engine::run_app(wiring.config, wiring.scene_a, wiring.scene_b) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!(error = %err, "app_failed");
            eprintln!("fatal: {err}");
            ExitCode::FAILURE
        }
    }
}
