//! Application entry point and dispatch.

use std::fs::File;
use std::io::{self, BufReader};

use anyhow::Result;

use matcalc_cli::output::{write_to_file, JsonProduct};
use matcalc_cli::presenter::CLIResultPresenter;
use matcalc_cli::reader;
use matcalc_core::matrix::Matrix;
use matcalc_core::memory_budget::{self, MemoryEstimate};
use matcalc_core::observer::ProgressObserver;
use matcalc_core::observers::{LoggingObserver, NoOpObserver};
use matcalc_core::options::Options;
use matcalc_core::progress::CancellationToken;
use matcalc_core::registry::DefaultFactory;
use matcalc_orchestration::interfaces::{ProductResult, ResultPresenter};
use matcalc_orchestration::orchestrator::{
    analyze_comparison_results, execute_products_with_observer,
};
use matcalc_orchestration::selection::get_multipliers_to_run;

use crate::config::AppConfig;

/// Run the application.
pub fn run(config: &AppConfig) -> Result<()> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        matcalc_cli::completion::generate_completion(&mut cmd, shell, &mut io::stdout());
        return Ok(());
    }

    run_cli(config)
}

fn run_cli(config: &AppConfig) -> Result<()> {
    let opts = Options {
        base_threshold: config.base_threshold,
        parallel_threshold: config.parallel_threshold,
        memory_limit: memory_budget::parse_memory_limit(&config.memory_limit).unwrap_or(0),
        verbose: config.verbose,
        details: config.details,
    }
    .normalize();

    let (a, b) = read_input(config)?;

    // Reject incompatible shapes before any computation
    a.dims().check_compatible(b.dims())?;

    // Memory budget check
    let estimate = MemoryEstimate::estimate(a.dims(), b.dims());
    if !estimate.fits_in(opts.memory_limit) {
        anyhow::bail!(
            "Estimated memory ({} MB) exceeds limit ({} MB)",
            estimate.total_bytes / (1024 * 1024),
            opts.memory_limit / (1024 * 1024)
        );
    }

    let factory = DefaultFactory::new();
    let multipliers = get_multipliers_to_run(&config.algo, &factory)?;
    let cancel = CancellationToken::new();

    // Set up Ctrl+C handler
    ctrlc_handler(cancel.clone());

    let observer: Box<dyn ProgressObserver> = if config.verbose {
        Box::new(LoggingObserver::new())
    } else {
        Box::new(NoOpObserver::new())
    };

    let timeout = Some(config.timeout_duration());
    let results = execute_products_with_observer(
        &multipliers,
        &a,
        &b,
        &opts,
        &cancel,
        timeout,
        observer.as_ref(),
    );

    // Cross-validate when several algorithms ran
    if results.len() > 1 {
        if let Err(e) = analyze_comparison_results(&results) {
            if matches!(e, matcalc_core::product::MatError::Mismatch) {
                return Err(e.into());
            }
            eprintln!("Warning: {e}");
        }
    }

    // Present results
    let presenter = CLIResultPresenter::new(config.verbose, config.quiet);
    let any_success = results.iter().any(|r| r.value().is_some());
    for result in &results {
        match &result.outcome {
            Ok(value) => {
                if config.json {
                    let envelope = JsonProduct::new(&result.algorithm, value, result.duration);
                    println!("{}", envelope.to_json()?);
                } else {
                    presenter.present_result(
                        &result.algorithm,
                        value,
                        result.duration,
                        config.details,
                    );
                }
            }
            Err(error) if any_success => {
                presenter.present_error(&format!("{}: {error}", result.algorithm));
            }
            Err(_) => {} // propagated below with a proper exit code
        }
    }

    // Present comparison if multiple
    if results.len() > 1 {
        presenter.present_comparison(&results);
    }

    // Write to file if requested
    if let Some(ref path) = config.output {
        if let Some(value) = results.iter().find_map(ProductResult::value) {
            write_to_file(path, value)?;
        }
    }

    // When every run failed, surface the first failure as the process result
    if !any_success {
        if let Some(err) = results.iter().find_map(|r| r.outcome.as_ref().err()) {
            return Err(err.clone().into());
        }
    }

    Ok(())
}

fn read_input(config: &AppConfig) -> Result<(Matrix, Matrix)> {
    let operands = match &config.input {
        Some(path) => reader::read_operands(BufReader::new(File::open(path)?))?,
        None => reader::read_operands(io::stdin().lock())?,
    };
    Ok(operands)
}

fn ctrlc_handler(cancel: CancellationToken) {
    ctrlc::set_handler(move || {
        cancel.cancel();
    })
    .expect("Error setting Ctrl+C handler");
}
