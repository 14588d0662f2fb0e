use std::process::ExitCode;
use std::sync::Arc;

use path_builder::{init_logging, BlockingTransport, EnvConfig, PathSession};

const ROOT_PATH: &str = "C:\\";
const FOLDERS: [&str; 4] = ["Users", "golde", "Documents", "Project Files"];
const FILE_NAME: &str = "document.txt";
const REMOVE_INDEX: usize = 2;

fn main() -> ExitCode {
    let env_config = EnvConfig::from_env();
    init_logging(env_config.debug);

    match run(&env_config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            eprintln!("Error: {error}");
            ExitCode::FAILURE
        }
    }
}

fn run(env_config: &EnvConfig) -> Result<(), Box<dyn std::error::Error>> {
    let service = env_config.service();
    let api_config = env_config.api_config();
    tracing::info!(base_url = %api_config.base_url, %service, "starting path builder walkthrough");

    let transport = Arc::new(BlockingTransport::new(api_config)?);
    let mut session = PathSession::new(transport, service.clone(), ROOT_PATH, false, false);

    println!("Path builder walkthrough ({service})");
    println!("{}", "=".repeat(40));
    println!("Initial path: {}", session.current_path());

    for (step, part) in FOLDERS.iter().enumerate() {
        println!("\nAdding part {}: '{part}'", step + 1);
        let new_errors = session.add_part(*part)?;
        report_add(&session, new_errors.len());
    }

    println!("\nAdding file: '{FILE_NAME}'");
    session.set_file_added(true);
    let new_errors = session.add_part(FILE_NAME)?;
    report_add(&session, new_errors.len());

    println!("\nRemoving part at index {REMOVE_INDEX}");
    let remaining = session.remove_part(REMOVE_INDEX)?;
    println!("Path after removal: {}", session.current_path());
    println!("Parts: {:?}", session.current_parts());
    println!("Remaining errors: {}", remaining.len());

    println!("\nFinal path: {}", session.current_path());
    println!("Total errors: {}", session.current_errors().len());
    Ok(())
}

fn report_add(session: &PathSession, new_errors: usize) {
    println!("Current path: {}", session.current_path());
    if new_errors > 0 {
        println!("New errors: {new_errors}");
    } else {
        println!("No new errors");
    }
}
