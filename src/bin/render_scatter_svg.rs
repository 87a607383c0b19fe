use std::fs;
use std::path::PathBuf;

use scatter_rs::api::{ChartRenderer, RenderOutcome, ScatterChartConfig};
use scatter_rs::core::FileDatasetSource;
use scatter_rs::render::{Document, Renderer, SvgRenderer};
use scatter_rs::telemetry::init_default_tracing;

const USAGE: &str =
    "usage: render_scatter_svg [--input <csv>] [--output <svg>] [--config <json>]";

#[derive(Debug, Default)]
struct CliArgs {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    config: Option<PathBuf>,
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
    let mut config = match &args.config {
        Some(path) => {
            let raw = fs::read_to_string(path)
                .map_err(|err| format!("failed to read `{}`: {err}", path.display()))?;
            ScatterChartConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => ScatterChartConfig::default(),
    };
    if let Some(input) = args.input {
        config = config.with_dataset_path(input);
    }

    let source = FileDatasetSource::new(config.dataset_path.clone());
    let container_id = config.container_id.clone();
    let mut document = Document::with_container(&container_id);
    let mut chart = ChartRenderer::new(config, source);

    match chart.render(&mut document) {
        RenderOutcome::Drawn { marks } => eprintln!("drew {marks} marks"),
        RenderOutcome::LoadFailed => eprintln!("dataset unavailable; writing empty canvas"),
        RenderOutcome::Superseded | RenderOutcome::CanvasUnavailable => {
            return Err("chart canvas could not be created".to_owned());
        }
    }

    let mut renderer = SvgRenderer::new(container_id);
    renderer
        .render(&document)
        .map_err(|err| format!("failed to serialize chart: {err}"))?;
    let markup = renderer.into_markup().unwrap_or_default();

    match args.output {
        Some(path) => fs::write(&path, markup)
            .map_err(|err| format!("failed to write `{}`: {err}", path.display())),
        None => {
            print!("{markup}");
            Ok(())
        }
    }
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let mut parsed = CliArgs::default();

    while let Some(flag) = args.next() {
        let slot = match flag.as_str() {
            "--input" => &mut parsed.input,
            "--output" => &mut parsed.output,
            "--config" => &mut parsed.config,
            "--help" | "-h" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        };
        let value = args
            .next()
            .ok_or_else(|| format!("missing value for {flag}"))?;
        *slot = Some(PathBuf::from(value));
    }

    Ok(parsed)
}
