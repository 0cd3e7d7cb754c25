//! Sculpt script runner
//!
//! Builds a voxel model from a JSON sculpt script and writes it as an OFF mesh.
//!
//! Usage:
//!     sculpt [OPTIONS] <SCRIPT>
//!
//! Options:
//!     -o, --output <PATH>     Mesh output path (default: script "output", else sculpture.off)
//!     -h, --help              Show this help message

use std::env;
use std::path::PathBuf;
use std::time::Instant;

use voxsculpt::core::logging;
use voxsculpt::script::SculptScript;

const DEFAULT_OUTPUT: &str = "sculpture.off";

fn print_help() {
    eprintln!("sculpt - Voxel sculpt script runner");
    eprintln!();
    eprintln!("Usage: sculpt [OPTIONS] <SCRIPT>");
    eprintln!();
    eprintln!("Options:");
    eprintln!("    -o, --output <PATH>     Mesh output path (default: script \"output\", else {})", DEFAULT_OUTPUT);
    eprintln!("    -h, --help              Show this help message");
    eprintln!();
    eprintln!("Example:");
    eprintln!("    sculpt assets/scripts/rocket.json");
    eprintln!("    sculpt -o /tmp/rocket.off assets/scripts/rocket.json");
}

#[derive(Debug)]
struct Args {
    script: PathBuf,
    output: Option<PathBuf>,
}

fn parse_args() -> Result<Args, String> {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        return Err("Missing script path".to_string());
    }

    let mut script: Option<PathBuf> = None;
    let mut output: Option<PathBuf> = None;

    let mut i = 0;
    while i < args.len() {
        match args[i].as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-o" | "--output" => {
                i += 1;
                if i >= args.len() {
                    return Err("Missing value for --output".to_string());
                }
                output = Some(PathBuf::from(&args[i]));
            }
            arg if arg.starts_with('-') => {
                return Err(format!("Unknown option: {}", arg));
            }
            path => {
                if script.is_some() {
                    return Err("Multiple scripts specified".to_string());
                }
                script = Some(PathBuf::from(path));
            }
        }
        i += 1;
    }

    let script = script.ok_or("Missing script path")?;

    Ok(Args { script, output })
}

fn run(args: Args) -> voxsculpt::core::Result<()> {
    let start = Instant::now();

    let script = SculptScript::load(&args.script)?;
    let output = match args.output.or_else(|| script.output.clone()) {
        Some(path) => path,
        None => {
            log::warn!("No output path given, writing {}", DEFAULT_OUTPUT);
            PathBuf::from(DEFAULT_OUTPUT)
        }
    };

    let sculptor = script.build()?;
    let stats = sculptor.write_off(&output)?;

    let [nx, ny, nz] = script.dimensions;
    println!("Grid:     {} x {} x {}", nx, ny, nz);
    println!("Voxels:   {}", stats.voxels);
    println!("Mesh:     {} vertices, {} faces", stats.vertices, stats.faces);
    println!("Saved {} in {:.2}s", output.display(), start.elapsed().as_secs_f64());

    Ok(())
}

fn main() {
    logging::init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("Error: {}", e);
            eprintln!();
            print_help();
            std::process::exit(1);
        }
    };

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
