use clap::Parser;
use matcalc::utils::logger;
use matcalc::{CalcOptions, Session};
use std::io;
use std::process::ExitCode;

fn main() -> ExitCode {
    let options = CalcOptions::parse();
    logger::init_cli_logger(options.verbose);
    tracing::debug!("options: {:?}", options);

    if let Err(e) = options.validate() {
        tracing::error!("configuration validation failed: {}", e);
        eprintln!("{e}");
        return ExitCode::from(2);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new(stdin.lock(), stdout.lock(), &options);

    match session.run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("session failed: {}", e);
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
