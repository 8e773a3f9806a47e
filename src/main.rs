use std::process::ExitCode;

use clap::{CommandFactory, Parser};

use graphql_query_validator::cli;
use graphql_query_validator::config::{Args, Config};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    env_logger::init();

    let args = Args::parse();
    let Some(config) = Config::from_args(args) else {
        // Missing schema or query glob is not an error; show usage and leave.
        let _ = Args::command().print_help();
        return ExitCode::SUCCESS;
    };

    match cli::run(&config).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(err) => {
            eprintln!("{err:#}");
            ExitCode::FAILURE
        }
    }
}
