use futures::executor::block_on;
use std::io::Read;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use vislink::render::{LayoutOptions, layout_json};
use vislink::{DiagramKind, VislinkConfig};

#[derive(Debug)]
enum CliError {
    Usage(&'static str),
    Io(std::io::Error),
    Render(vislink::render::HeadlessError),
    Json(serde_json::Error),
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CliError::Usage(msg) => write!(f, "{msg}"),
            CliError::Io(err) => write!(f, "I/O error: {err}"),
            CliError::Render(err) => write!(f, "{err}"),
            CliError::Json(err) => write!(f, "JSON error: {err}"),
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<vislink::render::HeadlessError> for CliError {
    fn from(value: vislink::render::HeadlessError) -> Self {
        Self::Render(value)
    }
}

impl From<vislink_render::Error> for CliError {
    fn from(value: vislink_render::Error) -> Self {
        Self::Render(value.into())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(value: serde_json::Error) -> Self {
        Self::Json(value)
    }
}

#[derive(Debug, Default)]
struct Args {
    kind: Option<DiagramKind>,
    input: Option<String>,
    pretty: bool,
    config: Option<String>,
    width: Option<f64>,
    height: Option<f64>,
    seed: Option<u64>,
}

fn usage() -> &'static str {
    "vislink-cli\n\
\n\
USAGE:\n\
  vislink-cli <chord|network|radar> [--pretty] [--config <path>] [--width <w>] [--height <h>] [--seed <n>] [<path>|-]\n\
\n\
NOTES:\n\
  - If <path> is omitted or '-', input is read from stdin.\n\
  - Input is a JSON series payload: {\"meta\": {...}, \"series\": [{\"values\": [{\"x\", \"label\", \"y\"}]}]}.\n\
  - --config reads a JSON object deep-merged over the built-in defaults.\n\
  - --width/--height override the frame of the selected diagram; --seed seeds network placement.\n\
  - 'relation' and 'spider' are accepted as aliases for network and radar.\n\
  - Set VISLINK_LOG (e.g. VISLINK_LOG=debug) to log to stderr.\n\
"
}

fn parse_f64(value: Option<&String>) -> Result<f64, CliError> {
    let v = value
        .and_then(|v| v.parse::<f64>().ok())
        .ok_or(CliError::Usage(usage()))?;
    if !(v.is_finite() && v > 0.0) {
        return Err(CliError::Usage(usage()));
    }
    Ok(v)
}

fn parse_args(argv: &[String]) -> Result<Args, CliError> {
    let mut args = Args::default();

    let mut it = argv.iter().skip(1);
    while let Some(a) = it.next() {
        match a.as_str() {
            "--help" | "-h" => return Err(CliError::Usage(usage())),
            "--pretty" => args.pretty = true,
            "--config" => {
                let Some(path) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.config = Some(path.clone());
            }
            "--width" => args.width = Some(parse_f64(it.next())?),
            "--height" => args.height = Some(parse_f64(it.next())?),
            "--seed" => {
                let Some(seed) = it.next() else {
                    return Err(CliError::Usage(usage()));
                };
                args.seed = Some(seed.parse::<u64>().map_err(|_| CliError::Usage(usage()))?);
            }
            "-" if args.kind.is_some() && args.input.is_none() => args.input = Some("-".into()),
            other if other.starts_with('-') => return Err(CliError::Usage(usage())),
            word if args.kind.is_none() => {
                args.kind = Some(
                    word.parse::<DiagramKind>()
                        .map_err(|_| CliError::Usage(usage()))?,
                );
            }
            path => {
                if args.input.is_some() {
                    return Err(CliError::Usage(usage()));
                }
                args.input = Some(path.to_string());
            }
        }
    }

    if args.kind.is_none() {
        return Err(CliError::Usage(usage()));
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

fn build_config(args: &Args, kind: DiagramKind) -> Result<VislinkConfig, CliError> {
    let mut cfg = VislinkConfig::defaults();
    if let Some(path) = args.config.as_deref() {
        let text = std::fs::read_to_string(path)?;
        let overrides: serde_json::Value = serde_json::from_str(&text)?;
        cfg.deep_merge(&overrides);
    }
    let section = kind.as_str();
    if let Some(w) = args.width {
        cfg.set_value(&format!("{section}.width"), serde_json::json!(w));
    }
    if let Some(h) = args.height {
        cfg.set_value(&format!("{section}.height"), serde_json::json!(h));
    }
    if let Some(seed) = args.seed {
        cfg.set_value("network.seed", serde_json::json!(seed));
    }
    Ok(cfg)
}

fn run(args: Args) -> Result<(), CliError> {
    let Some(kind) = args.kind else {
        return Err(CliError::Usage(usage()));
    };
    let text = read_input(args.input.as_deref())?;
    let config = build_config(&args, kind)?;
    let options = LayoutOptions::with_config(config);

    let diagram = block_on(layout_json(kind, &text, &options))?;
    tracing::debug!(kind = kind.as_str(), "layout complete");

    println!("{}", vislink_render::to_json(&diagram, args.pretty)?);
    Ok(())
}

fn init_tracing() {
    let _ = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_env("VISLINK_LOG")
                .unwrap_or_else(|_| "warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn main() {
    init_tracing();

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

    if let Err(err) = run(args) {
        eprintln!("{err}");
        std::process::exit(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(parts: &[&str]) -> Vec<String> {
        std::iter::once("vislink-cli")
            .chain(parts.iter().copied())
            .map(String::from)
            .collect()
    }

    #[test]
    fn parses_kind_flags_and_path() {
        let args = parse_args(&argv(&[
            "relation", "--pretty", "--width", "300", "--seed", "9", "in.json",
        ]))
        .unwrap();
        assert_eq!(args.kind, Some(DiagramKind::Network));
        assert!(args.pretty);
        assert_eq!(args.width, Some(300.0));
        assert_eq!(args.seed, Some(9));
        assert_eq!(args.input.as_deref(), Some("in.json"));
    }

    #[test]
    fn dash_means_stdin() {
        let args = parse_args(&argv(&["radar", "-"])).unwrap();
        assert_eq!(args.input.as_deref(), Some("-"));
    }

    #[test]
    fn rejects_missing_kind_and_bad_numbers() {
        assert!(matches!(parse_args(&argv(&[])), Err(CliError::Usage(_))));
        assert!(matches!(
            parse_args(&argv(&["pie"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&argv(&["chord", "--width", "-5"])),
            Err(CliError::Usage(_))
        ));
        assert!(matches!(
            parse_args(&argv(&["chord", "a.json", "b.json"])),
            Err(CliError::Usage(_))
        ));
    }

    #[test]
    fn size_overrides_target_the_selected_diagram() {
        let args = Args {
            kind: Some(DiagramKind::Chord),
            width: Some(320.0),
            ..Args::default()
        };
        let cfg = build_config(&args, DiagramKind::Chord).unwrap();
        assert_eq!(cfg.chord().width, 320.0);
        assert_eq!(cfg.network().width, 960.0);
    }
}
