use std::{env, error::Error};

use argmap::{global, Flags};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod utils;

fn main() -> Result<(), Box<dyn Error>> {
    let args: Vec<String> = env::args().collect();

    // No subscriber yet, so this first pass is silent.
    init_tracing(Flags::parse(&args)?.get_bool("-debug", false));
    global::parse_parameters(&args)?;

    let flags = global::snapshot();
    info!(count = flags.len(), "parsed flags");
    print_flags(&flags);

    Ok(())
}

fn init_tracing(debug: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if debug { "argmap=debug" } else { "argmap=info" })
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_flags(flags: &Flags) {
    for line in utils::format_flags(flags, utils::term_width()) {
        println!("{line}");
    }
}
