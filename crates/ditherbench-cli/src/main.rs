use anyhow::Result;
use clap::{Arg, ArgAction, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use ditherbench_report::error::LoadError;
use ditherbench_report::io::read_benchmark_csv;
use ditherbench_report::report::plots::plot_execution_time;
use ditherbench_report::report::write_report;

/// Results file the benchmark harness writes into the working directory.
const DEFAULT_INPUT: &str = "dithering_performance.csv";
const DEFAULT_OUTPUT: &str = "dithering_performance.html";
const PLOT_TITLE: &str = "Multithreaded Dithering: Execution Time Analysis";

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(
            env_logger::Env::default()
                .filter_or("DITHERBENCH_LOG", "error,ditherbench=info,ditherbench_report=info"),
        )
        .init();

    let matches = Command::new("ditherbench")
        .version(clap::crate_version!())
        .about("Render dithering benchmark results as an annotated bar chart")
        .arg(
            Arg::new("input")
                .help(
                    "Path to the benchmark results CSV. Defaults to the file \
                     the benchmark harness writes into the working directory.",
                )
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("output_file")
                .short('o')
                .long("output")
                .help("Path to write the HTML report to.")
                .value_parser(clap::value_parser!(PathBuf))
                .value_hint(ValueHint::FilePath),
        )
        .arg(
            Arg::new("show")
                .long("show")
                .help("Open the chart in a browser instead of writing the report file.")
                .action(ArgAction::SetTrue),
        )
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    let input = matches
        .get_one::<PathBuf>("input")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));
    let output = matches
        .get_one::<PathBuf>("output_file")
        .cloned()
        .unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));

    let dataset = match read_benchmark_csv(&input) {
        Ok(dataset) => dataset,
        Err(LoadError::FileNotFound(path)) => {
            log::error!("Benchmark results file not found: {}", path.display());
            log::error!(
                "Run the benchmark harness first; it writes {} into the working directory.",
                DEFAULT_INPUT
            );
            std::process::exit(1)
        }
        Err(err @ LoadError::Parse(_)) => {
            log::error!("{}", err);
            std::process::exit(1)
        }
    };

    log::info!(
        "Loaded {} benchmark records from {}",
        dataset.len(),
        input.display()
    );

    let plot = plot_execution_time(&dataset, PLOT_TITLE);

    if matches.get_flag("show") {
        plot.show();
    } else {
        write_report(&plot, &output)?;
        log::info!("Wrote report to {}", output.display());
    }

    Ok(())
}
