//! MatCalc-rs — exact matrix-product calculator.

use matcalc_core::constants::exit_codes;
use matcalc_core::product::MatError;
use matcalc_lib::{app, config, errors};

fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .init();

    // Parse CLI args and run
    let config = config::AppConfig::parse();
    if let Err(err) = app::run(&config) {
        if let Some(mat_err) = err.downcast_ref::<MatError>() {
            eprintln!("Error: {mat_err}");
            std::process::exit(errors::handle_error(mat_err));
        }
        eprintln!("Error: {err:#}");
        std::process::exit(exit_codes::ERROR_GENERIC);
    }
}
