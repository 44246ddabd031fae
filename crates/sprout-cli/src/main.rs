use serde::Serialize;
use sprout::color::branch_colors;
use sprout::outline::{from_outline_text, outline_text, parse, serialize};
use sprout::{MindMapDocument, SproutConfig, UuidIds, Viewport};
use std::io::Read;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer, fmt};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Sprout(sprout::Error),
    Json(serde_json::Error),
    Invalid(sprout::graph::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Sprout(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
            CliError::Invalid(err) => write!(f, "invalid mind map: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<sprout::Error> for CliError {
    fn from(value: sprout::Error) -> Self {
        match value {
            sprout::Error::Graph(err) => Self::Invalid(err),
            other => Self::Sprout(other),
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Clone, Copy, Default)]
enum Command {
    #[default]
    Layout,
    Normalize,
    Outline,
    Colors,
    Check,
}

#[derive(Debug, Default)]
struct Args {
    command: Command,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    center_x: Option<f64>,
    center_y: Option<f64>,
    width: Option<f64>,
    title: Option<String>,
}

fn usage() -> &'static str {
    "sprout-cli\n\
\n\
USAGE:\n\
  sprout-cli [layout] [--pretty] [--config <path>] [--center-x <x>] [--center-y <y>] [--width <w>] [--title <title>] [<path>|-]\n\
  sprout-cli normalize [<path>|-]\n\
  sprout-cli outline [<path>|-]\n\
  sprout-cli colors [--pretty] [--config <path>] [<path>|-]\n\
  sprout-cli check [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - layout and normalize read outline text; outline, colors and check read document JSON.\n\
  - The default canvas is 1200x800 centered at (600, 400).\n\
  - Set SPROUT_LOG (e.g. SPROUT_LOG=debug) to log to stderr.\n\
"
}

fn parse_number(value: Option<&String>) -> Result<f64, CliError> {
    let Some(value) = value else {
        return Err(CliError::Usage(usage()));
    };
    match value.parse::<f64>() {
        Ok(v) if v.is_finite() => Ok(v),
        _ => Err(CliError::Usage(usage())),
    }
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "layout" => args.command = Command::Layout,
            "normalize" => args.command = Command::Normalize,
            "outline" => args.command = Command::Outline,
            "colors" => args.command = Command::Colors,
            "check" => args.command = Command::Check,
            "--pretty" => args.pretty = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--center-x" => args.center_x = Some(parse_number(it.next())?),
            "--center-y" => args.center_y = Some(parse_number(it.next())?),
            "--width" => {
                let width = parse_number(it.next())?;
                if width <= 0.0 {
                    return Err(CliError::Usage(usage()));
                }
                args.width = Some(width);
            }
            "--title" => {
                let Some(title) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.title = Some(title.clone());
            }
            "--" => {
                if let Some(rest) = it.next() {
                    if args.input.is_some() {
                        return Err(CliError::Usage(usage()));
                    }
                    args.input = Some(rest.clone());
                }
                if it.next().is_some() {
                    return Err(CliError::Usage(usage()));
                }
            }
            "-" => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some("-".to_string());
            }
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    Ok(args)
}

fn read_input(input: Option<&str>) -> Result<String, CliError> {
    match input {
        None | Some("-") => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            Ok(buf)
        }
        Some(path) => Ok(std::fs::read_to_string(path)?),
    }
}

fn write_json(value: &impl Serialize, pretty: bool) -> Result<(), CliError> {
    if pretty {
        serde_json::to_writer_pretty(std::io::stdout().lock(), value)?;
    } else {
        serde_json::to_writer(std::io::stdout().lock(), value)?;
    }
    println!();
    Ok(())
}

fn load_config(path: Option<&str>) -> Result<SproutConfig, CliError> {
    match path {
        None => Ok(SproutConfig::default()),
        Some(path) => Ok(SproutConfig::from_json_str(&std::fs::read_to_string(path)?)?),
    }
}

fn viewport(args: &Args) -> Viewport {
    let base = Viewport::default();
    Viewport::new(
        args.center_x.unwrap_or(base.center_x),
        args.center_y.unwrap_or(base.center_y),
        args.width.unwrap_or(base.width),
    )
}

fn run(args: Args) -> Result<(), CliError> {
    let input = read_input(args.input.as_deref())?;

    match args.command {
        Command::Normalize => {
            println!("{}", serialize(&parse(&input)));
        }
        Command::Layout => {
            let config = load_config(args.config.as_deref())?;
            let viewport = viewport(&args);
            let map = from_outline_text(&input, viewport, &config, &mut UuidIds);
            let title = match &args.title {
                Some(title) => title.clone(),
                None => map
                    .root_id()
                    .and_then(|id| map.node(id))
                    .map(|n| n.label.clone())
                    .unwrap_or_else(|| config.labels.root.clone()),
            };
            tracing::debug!(
                nodes = map.node_count(),
                edges = map.edge_count(),
                "outline converted"
            );
            write_json(&MindMapDocument::new(title, map), args.pretty)?;
        }
        Command::Outline => {
            let doc = MindMapDocument::from_json(&input)?;
            println!("{}", outline_text(&doc.into_map()));
        }
        Command::Colors => {
            let config = load_config(args.config.as_deref())?;
            let doc = MindMapDocument::from_json(&input)?;
            let colors = branch_colors(&doc.into_map(), &config.palette);
            write_json(&colors, args.pretty)?;
        }
        Command::Check => {
            let doc = MindMapDocument::from_json_strict(&input)?;
            println!("ok: {} nodes, {} edges", doc.nodes.len(), doc.edges.len());
        }
    }

    Ok(())
}

fn init_logging() {
    let filter = EnvFilter::try_from_env("SPROUT_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);
    let _ = tracing_subscriber::registry().with(layer).try_init();
}

fn main() {
    init_logging();

    let args = match parse_args(&std::env::args().collect::<Vec<_>>()) {
        Ok(v) => v,
        Err(CliError::Usage(msg)) => {
            eprintln!("{msg}");
            std::process::exit(2);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    };

    match run(args) {
        Ok(()) => {}
        Err(err @ CliError::Invalid(_)) => {
            eprintln!("{err}");
            std::process::exit(3);
        }
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
