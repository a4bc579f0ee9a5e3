//! credstore - Entry Point
//!
//! Admin tool for the JSON credential store: seeds the default accounts on
//! first run and adds or rotates accounts from the command line.

use std::env;
use std::process;

use log::{error, info};

use credstore::CredentialStore;
use credstore::config::StoreConfig;

fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match StoreConfig::load() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            process::exit(1);
        }
    };

    let store = CredentialStore::new(config.credentials_path());
    let users = store.load_users();
    info!(
        "Credential store {} ready with {} account(s)",
        store.path().display(),
        users.len()
    );

    let args: Vec<String> = env::args().skip(1).collect();
    match args.as_slice() {
        [] => {}
        [cmd, username, password] if cmd == "add" => {
            store.add_user(username, password);
            info!("Stored account '{}'", username);
        }
        _ => {
            eprintln!("Usage: credstore [add <username> <password>]");
            process::exit(2);
        }
    }
}
