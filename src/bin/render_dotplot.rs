use std::fs;
use std::path::PathBuf;

use dotplot_rs::api::{ChartConfig, DotPlotChart, LoadOutcome};
use dotplot_rs::render::{SvgOutputMode, SvgRenderer};
use dotplot_rs::telemetry::init_default_tracing;

const USAGE: &str =
    "usage: render_dotplot --input <csv> --output <path> [--config <json>] [--svg]";

#[derive(Debug)]
struct CliArgs {
    input: PathBuf,
    output: PathBuf,
    config: Option<PathBuf>,
    mode: SvgOutputMode,
}

fn main() {
    let _ = init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;

    let config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ChartConfig::default(),
    };

    let renderer = SvgRenderer::new(args.mode).with_page_title(config.title.text.clone());
    let mut chart = DotPlotChart::new(renderer, config).map_err(|err| err.to_string())?;

    match chart.run_path(&args.input).map_err(|err| err.to_string())? {
        LoadOutcome::Rendered { .. } => {}
        LoadOutcome::Failed => {
            let reason = chart.diagnostics().join("; ");
            return Err(format!(
                "failed to load `{}`: {reason}",
                args.input.display()
            ));
        }
    }

    chart.render().map_err(|err| err.to_string())?;
    fs::write(&args.output, chart.renderer().output())
        .map_err(|err| format!("failed to write `{}`: {err}", args.output.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;
    let mut config = None::<PathBuf>;
    let mut mode = SvgOutputMode::HtmlPage;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--svg" => mode = SvgOutputMode::Svg,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    Ok(CliArgs {
        input: input.ok_or_else(|| format!("missing --input\n{USAGE}"))?,
        output: output.ok_or_else(|| format!("missing --output\n{USAGE}"))?,
        config,
        mode,
    })
}
