use tracing_subscriber::prelude::__tracing_subscriber_SubscriberExt;

/// Summarise the kills, deaths and creep statistics of a decoded Dota 2 replay
#[derive(Debug, clap::Parser)]
struct CliArgs {
    /// The decoded event stream of the replay, one JSON event per line
    events: std::path::PathBuf,

    /// How verbose the summary is [1-5]
    #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(u8).range(1..=5))]
    verbosity: u8,

    /// Maximum number of events to consume
    #[arg(long)]
    frames: Option<usize>,

    /// Print the summary as JSON instead of indented text
    #[arg(long)]
    json: bool,

    /// Dump every event without a handler into this folder
    #[arg(long)]
    dump_dir: Option<std::path::PathBuf>,
}

fn main() -> std::process::ExitCode {
    use clap::Parser;

    let args = CliArgs::parse();

    let max_level = if args.verbosity >= 5 {
        tracing::Level::DEBUG
    } else {
        tracing::Level::INFO
    };
    let registry = tracing_subscriber::Registry::default()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(tracing_subscriber::filter::filter_fn(move |meta| {
            (meta.target().contains("analysis") || meta.target().contains("dota_summary"))
                && *meta.level() <= max_level
        }));
    if let Err(e) = tracing::subscriber::set_global_default(registry) {
        eprintln!("Failed to install logging: {}", e);
    }

    match summarise(&args) {
        Ok(output) => {
            print!("{}", output);
            std::process::ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("{}", e);
            std::process::ExitCode::FAILURE
        }
    }
}

fn summarise(args: &CliArgs) -> Result<String, Box<dyn std::error::Error>> {
    tracing::info!(path = ?args.events, "Parsing demo for game information");

    let file = std::fs::File::open(&args.events)?;
    let events = analysis::source::EventReader::new(std::io::BufReader::new(file))
        .with_frame_limit(args.frames);

    let mut dump = match args.dump_dir.as_ref() {
        Some(dir) => Some(analysis::sink::DumpDirectory::create(dir, "dump")?),
        None => None,
    };

    let mut summary = analysis::DemoSummary::new();
    let stats = analysis::source::run(
        events,
        &mut summary,
        dump.as_mut().map(|d| d as &mut dyn analysis::sink::DebugSink),
    )?;

    if stats.truncated {
        tracing::info!(events = stats.events, "Stopped at frame limit");
    }

    let result = summary.summary(args.verbosity);
    let output = if args.json {
        let mut json = serde_json::to_string_pretty(&result)?;
        json.push('\n');
        json
    } else {
        analysis::render::render(&result)?
    };

    Ok(output)
}
