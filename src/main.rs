use anyhow::{Context, Result};
use clap::{Arg, ArgAction, Command};
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use sgf_regions::output::{ImageResponse, RegionImages, save_region_images};
use sgf_regions::{SgfError, all_region_images, prepare_sgf, region_image};

/// Directory used when neither `--out-dir` nor `--json` is given.
const DEFAULT_OUT_DIR: &str = "output";

struct Options {
    sgf_file: PathBuf,
    region: Option<String>,
    out_dir: Option<PathBuf>,
    json: bool,
}

fn cli() -> Command {
    Command::new("sgf-regions")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Renders board regions of an SGF Go position to PNG images")
        .arg(
            Arg::new("sgf_file")
                .value_name("SGF_FILE")
                .help("SGF record to read setup stones (AB/AW) from")
                .required(true)
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("region")
                .long("region")
                .short('r')
                .value_name("NAME")
                .help("Region to render (region1..region4, any case). Renders all regions if omitted"),
        )
        .arg(
            Arg::new("out_dir")
                .long("out-dir")
                .short('o')
                .value_name("DIR")
                .help("Directory for goboard_<region>.png files (default: ./output unless --json)")
                .value_parser(clap::value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Print a JSON response with base64-encoded images to stdout")
                .action(ArgAction::SetTrue),
        )
}

#[tokio::main]
async fn main() -> ExitCode {
    let matches = cli().get_matches();
    let options = Options {
        sgf_file: matches
            .get_one::<PathBuf>("sgf_file")
            .cloned()
            .unwrap_or_default(), // Required by clap
        region: matches.get_one::<String>("region").cloned(),
        out_dir: matches.get_one::<PathBuf>("out_dir").cloned(),
        json: matches.get_flag("json"),
    };

    match run(&options).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report_failure(&err, options.json),
    }
}

async fn run(options: &Options) -> Result<()> {
    let start = Instant::now();

    // Step 1: Read and normalize the SGF record
    let raw = fs::read_to_string(&options.sgf_file)
        .with_context(|| format!("Failed to read SGF file {}", options.sgf_file.display()))?;
    let sgf = prepare_sgf(&raw)?;

    // Step 2: Render the requested region, or all of them
    let images = match &options.region {
        Some(name) => vec![region_image(&sgf, name)?],
        None => all_region_images(&sgf).await?,
    };
    eprintln!("Rendered {} region image(s) in {:?}", images.len(), start.elapsed());

    // Step 3: Output
    let out_dir = match (&options.out_dir, options.json) {
        (Some(dir), _) => Some(dir.clone()),
        (None, false) => Some(PathBuf::from(DEFAULT_OUT_DIR)),
        (None, true) => None,
    };
    if let Some(dir) = out_dir {
        for path in save_region_images(&dir, &images)? {
            eprintln!("Saved {}", path.display());
        }
    }

    if options.json {
        let json = match (&options.region, images.as_slice()) {
            (Some(_), [image]) => serde_json::to_string_pretty(&ImageResponse::success(image)),
            _ => serde_json::to_string_pretty(&RegionImages(&images)),
        }
        .context("Failed to serialize JSON response")?;
        println!("{}", json);
    }

    Ok(())
}

/// Logs the failure and maps it to an exit code: 2 for caller errors, 1 otherwise.
fn report_failure(err: &anyhow::Error, json: bool) -> ExitCode {
    let caller_error = err
        .downcast_ref::<SgfError>()
        .is_some_and(SgfError::is_caller_error);

    if caller_error {
        eprintln!("⚠ Invalid request: {}", err);
    } else {
        eprintln!("Error processing SGF file: {:#}", err);
    }

    if json {
        let message = if caller_error {
            err.to_string()
        } else {
            "Internal server error".to_string()
        };
        if let Ok(body) = serde_json::to_string_pretty(&ImageResponse::failure(message)) {
            println!("{}", body);
        }
    }

    if caller_error { ExitCode::from(2) } else { ExitCode::FAILURE }
}
