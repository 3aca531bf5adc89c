//! coastal-catalog - headless catalogue query and playback runner
//!
//! Usage: `coastal-catalog [site=A] [year=2019] [parameter=HTL] [search=crz] [--play N]`
//!
//! Prints the matching layer metadata as JSON. With `--play N` it then enters
//! temporal mode over the matching layers and prints the active layers for
//! N playback ticks.

use std::process::ExitCode;
use std::thread;

use coastal_catalog::application::dto::QueryRequest;
use coastal_catalog::application::services::CatalogCommand;
use coastal_catalog::infrastructure::CompositionRoot;
use coastal_catalog::log;
use coastal_catalog::shared::Config;

/// Parsed command line
struct Args {
    pairs: Vec<(String, String)>,
    play_ticks: usize,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        pairs: Vec::new(),
        play_ticks: 0,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        if arg == "--play" {
            let value = iter.next().ok_or("--play needs a tick count")?;
            args.play_ticks = value
                .parse()
                .map_err(|_| format!("invalid tick count {:?}", value))?;
        } else if let Some((key, value)) = arg.split_once('=') {
            args.pairs.push((key.to_string(), value.to_string()));
        } else {
            return Err(format!("expected key=value, got {:?}", arg));
        }
    }
    Ok(args)
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let args = parse_args()?;
    let config = Config::load();

    if config.logging.enabled {
        let path = config
            .logging
            .file
            .clone()
            .unwrap_or_else(log::default_log_path);
        if let Err(e) = log::init(&path) {
            eprintln!("warning: cannot open log file {:?}: {}", path, e);
        }
    }
    coastal_catalog::log!("main() starting");

    let mut root = CompositionRoot::new(&config)?;

    let request = QueryRequest::from_pairs(
        args.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())),
    );
    let results = root.query_layers.execute(&request);
    println!("{}", serde_json::to_string_pretty(&results)?);

    if args.play_ticks == 0 {
        return Ok(());
    }

    root.dispatch(CatalogCommand::SetFilters(request.to_criteria()))?;
    root.dispatch(CatalogCommand::ToggleTemporalMode)?;
    print_frame(&root);

    let mut ticks = 0;
    while ticks < args.play_ticks {
        let Some(wait) = root.session.playback().scheduler().time_until_next() else {
            break;
        };
        thread::sleep(wait);
        root.poll();
        ticks += 1;
        print_frame(&root);
    }

    root.dispatch(CatalogCommand::ExitTemporalMode)?;
    coastal_catalog::log!("main() finished after {} ticks", ticks);
    Ok(())
}

fn print_frame(root: &CompositionRoot) {
    let Some(view) = root.timeline_presenter.view() else {
        return;
    };
    let active = root.session.active_layers();
    let names: Vec<&str> = active.iter().map(String::as_str).collect();
    let marker = if active.is_fallback() { " (guessed)" } else { "" };
    println!("{}: {}{}", view.year_label, names.join(", "), marker);
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            coastal_catalog::log!("fatal: {}", e);
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
