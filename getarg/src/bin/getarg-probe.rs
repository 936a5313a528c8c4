// Diagnostic runner: show how an argument list is understood.

use getarg::{config, ArgStore, Result};
use tracing_subscriber::EnvFilter;

fn init_logging(debug: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(if debug { "debug" } else { "warn" }));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run() -> Result<()> {
    let mut args = ArgStore::from_env()?;
    if args.is_empty() {
        println!("usage: getarg-probe [-conf=FILE [-strictconf]] [-query=NAME]... [-debug] OPTION...");
        println!("each -query=NAME prints has/bool/string/int for NAME with defaults false, \"\", 0");
        std::process::exit(1);
    }
    init_logging(args.flag("-debug"));

    if args.has("-conf") {
        let path = args.get_string("-conf", "");
        let entries = if args.flag("-strictconf") {
            config::read_config_file_strict(&path)?
        } else {
            config::read_config_file(&path)?
        };
        args = args.with_config(entries);
    }

    for entry in args.entries() {
        println!("{}", entry);
    }

    for name in args.get_all("-query") {
        println!(
            "{} has={} bool={} string={} int={}",
            name,
            args.has(name),
            args.get_bool(name, false),
            args.get_string(name, ""),
            args.get_int(name, 0)
        );
    }

    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("getarg-probe: {}", e);
        std::process::exit(1);
    }
}
