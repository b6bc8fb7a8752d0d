use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use rayon::prelude::*;
use serde_json::json;

use leaf_doctor_lib::config::Config;
use leaf_doctor_lib::errors::LeafDoctorError;
use leaf_doctor_lib::image_io::get_image_files_in_dir;
use leaf_doctor_lib::output::{
    error_object, print_json_object, print_report, write_batch_csv, BatchRow,
};
use leaf_doctor_lib::pipeline::analyze_image;

/// Command-line arguments
#[derive(Parser, Debug)]
#[clap(author, version, about = "LeafDoctor - Plant Leaf Diagnosis")]
struct Args {
    /// Path to an image file, or a directory of images for batch mode
    image: Option<String>,

    /// Path to configuration file
    #[clap(short, long)]
    config: Option<String>,

    /// Pretty-print the JSON report
    #[clap(long)]
    pretty: bool,

    /// Output path for the batch summary CSV (directory input only)
    #[clap(short, long)]
    output: Option<String>,

    /// Suppress progress output on stderr
    #[clap(short, long)]
    quiet: bool,
}

fn main() {
    let args = Args::parse();
    std::process::exit(run(&args));
}

fn run(args: &Args) -> i32 {
    // Load configuration, then let flags override it
    let mut config = match &args.config {
        Some(path) => match Config::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                print_json_object(&error_object(&e));
                return 1;
            }
        },
        None => Config::default(),
    };

    if args.pretty {
        config.pretty_output = true;
    }
    if let Some(output) = &args.output {
        config.batch_output_path = output.clone();
    }

    if let Err(e) = config.validate() {
        print_json_object(&error_object(&e));
        return 1;
    }

    // Missing positional argument is an error object, not a usage blurb
    let Some(input) = &args.image else {
        print_json_object(&json!({ "error": "No image path provided" }));
        return 1;
    };

    let input_path = PathBuf::from(input);
    if input_path.is_dir() {
        run_batch(&input_path, &config, args.quiet)
    } else {
        run_single(&input_path, &config)
    }
}

/// Analyze one image and print its JSON report to stdout.
fn run_single(path: &Path, config: &Config) -> i32 {
    match analyze_image(path, config) {
        Ok(report) => {
            if print_report(&report, config.pretty_output).is_err() {
                return 1;
            }
            0
        }
        Err(err @ LeafDoctorError::UnsupportedFormat(_)) => {
            // Fallback signal for the caller, not a hard failure
            print_json_object(&error_object(&err));
            0
        }
        Err(err) => {
            print_json_object(&error_object(&err));
            1
        }
    }
}

/// Analyze every image under a directory and write a CSV summary.
fn run_batch(dir: &Path, config: &Config, quiet: bool) -> i32 {
    let files = match get_image_files_in_dir(dir) {
        Ok(files) => files,
        Err(e) => {
            print_json_object(&error_object(&e));
            return 1;
        }
    };

    if files.is_empty() {
        print_json_object(&json!({ "error": "No image files found in directory" }));
        return 1;
    }

    if !quiet {
        eprintln!("Found {} image files", files.len());
    }

    let start_time = Instant::now();

    let analyze_one = |path: &PathBuf| -> BatchRow {
        if !quiet {
            eprintln!("Processing: {}", path.display());
        }
        let filename = path.display().to_string();
        match analyze_image(path, config) {
            Ok(report) => BatchRow::from_report(filename, &report),
            Err(e) => BatchRow::from_error(filename, &e),
        }
    };

    let rows: Vec<BatchRow> = if config.use_parallel {
        files.par_iter().map(analyze_one).collect()
    } else {
        files.iter().map(analyze_one).collect()
    };

    if let Err(e) = write_batch_csv(&rows, &config.batch_output_path) {
        print_json_object(&error_object(&e));
        return 1;
    }

    if !quiet {
        let diagnosed = rows.iter().filter(|r| r.status != "error").count();
        eprintln!(
            "Diagnosed {}/{} images in {:.2} seconds -> {}",
            diagnosed,
            rows.len(),
            start_time.elapsed().as_secs_f64(),
            config.batch_output_path
        );
    }

    0
}
