use std::process::ExitCode;

use clap::Parser;
use visitroute::app::VisitRouteApp;

fn main() -> ExitCode {
    env_logger::init();

    log::debug!("cwd: {:?}", std::env::current_dir());
    let args = VisitRouteApp::parse();
    match args.run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
