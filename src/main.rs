use std::process;

use plane_label_cli::cli::build_cli;
use plane_label_cli::commands::auth::{handle_auth, handle_configure};
use plane_label_cli::commands::labels::{
    handle_add, handle_create, handle_list_labels, handle_remove, handle_set, handle_show,
};
use plane_label_cli::logging::{init_logging, log_error, log_panic_info};
use plane_label_cli::LabelError;

#[tokio::main]
async fn main() {
    if let Err(e) = init_logging() {
        eprintln!("Warning: logging disabled: {}", e);
    }
    std::panic::set_hook(Box::new(|info| log_panic_info(info)));

    let matches = build_cli().get_matches();

    let result = match matches.subcommand() {
        Some(("auth", sub_matches)) => handle_auth(sub_matches).await,
        Some(("configure", sub_matches)) => handle_configure(sub_matches).await,
        Some(("show", sub_matches)) => handle_show(sub_matches).await,
        Some(("set", sub_matches)) => handle_set(sub_matches).await,
        Some(("add", sub_matches)) => handle_add(sub_matches).await,
        Some(("remove", sub_matches)) => handle_remove(sub_matches).await,
        Some(("create", sub_matches)) => handle_create(sub_matches).await,
        Some(("list-labels", sub_matches)) => handle_list_labels(sub_matches).await,
        _ => {
            eprintln!("Unknown command. Use 'plane-labels --help' for available commands.");
            process::exit(1);
        }
    };

    if let Err(e) = result {
        log_error(&e.to_string());
        let reported = e
            .downcast_ref::<LabelError>()
            .is_some_and(LabelError::is_reported);
        if !reported {
            eprintln!("Error: {}", e);
        }
        process::exit(1);
    }
}
