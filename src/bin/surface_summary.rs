use std::fs::{self, File};
use std::path::PathBuf;

use yield_surface::api::{SurfaceConfig, SurfaceProfile, VisualizationAssembler};
use yield_surface::io::load_dataset;
use yield_surface::render::NullRenderer;
use yield_surface::telemetry::init_default_tracing;

const USAGE: &str = "usage: surface_summary --csv <path> [--start YYYY-MM-DD --end YYYY-MM-DD] [--config <path>] [--profile quantile_palette|linear_gradient] [--frame]";

#[derive(Debug)]
struct CliArgs {
    csv: PathBuf,
    range: Option<(String, String)>,
    config: Option<PathBuf>,
    profile: Option<SurfaceProfile>,
    emit_frame: bool,
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
            SurfaceConfig::from_json_str(&raw).map_err(|err| err.to_string())?
        }
        None => SurfaceConfig::default(),
    };
    if let Some(profile) = args.profile {
        config = config.with_profile(profile);
    }

    let file = File::open(&args.csv)
        .map_err(|err| format!("failed to open `{}`: {err}", args.csv.display()))?;
    let dataset = load_dataset(file, &config).map_err(|err| err.to_string())?;
    let mut assembler =
        VisualizationAssembler::new(dataset, config).map_err(|err| err.to_string())?;

    let built = match &args.range {
        Some((start, end)) => assembler.rebuild_from_input(start, end).map(|_| ()),
        None => assembler.build_full().map(|_| ()),
    };
    if let Err(err) = built {
        if err.is_user_correctable() {
            let (start, end) = assembler.full_range().to_iso();
            return Err(format!("{err} (data covers {start} to {end})"));
        }
        return Err(err.to_string());
    }
    let build = assembler
        .last_build()
        .ok_or_else(|| "build produced no result".to_owned())?;

    let output = if args.emit_frame {
        build.to_json_pretty()
    } else {
        build.summary().to_json_contract_v1_pretty()
    }
    .map_err(|err| err.to_string())?;

    let mut renderer = NullRenderer::default();
    assembler
        .render_last(&mut renderer)
        .map_err(|err| err.to_string())?;

    println!("{output}");
    Ok(())
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);

    let mut csv = None::<PathBuf>;
    let mut start = None::<String>;
    let mut end = None::<String>;
    let mut config = None::<PathBuf>;
    let mut profile = None::<SurfaceProfile>;
    let mut emit_frame = false;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--csv" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --csv".to_owned())?;
                csv = Some(PathBuf::from(value));
            }
            "--start" => {
                start = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --start".to_owned())?,
                );
            }
            "--end" => {
                end = Some(
                    args.next()
                        .ok_or_else(|| "missing value for --end".to_owned())?,
                );
            }
            "--config" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --config".to_owned())?;
                config = Some(PathBuf::from(value));
            }
            "--profile" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --profile".to_owned())?;
                profile = Some(
                    SurfaceProfile::from_name(&value)
                        .ok_or_else(|| format!("unknown profile `{value}`"))?,
                );
            }
            "--frame" => emit_frame = true,
            "-h" | "--help" => return Err(USAGE.to_owned()),
            other => return Err(format!("unknown argument `{other}`\n{USAGE}")),
        }
    }

    let range = match (start, end) {
        (Some(start), Some(end)) => Some((start, end)),
        (None, None) => None,
        _ => return Err("--start and --end must be given together".to_owned()),
    };

    Ok(CliArgs {
        csv: csv.ok_or_else(|| USAGE.to_owned())?,
        range,
        config,
        profile,
        emit_frame,
    })
}
