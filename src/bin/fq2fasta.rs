use clap::Parser;
use log::info;

use fq2fasta::{convert, ConvertError};

/// Parses consensus FASTQ files into a FASTA file annotated with the number of
/// low quality positions of each sequence
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory of consensus fastqs
    #[arg(short = 'd', value_name = "DIR")]
    directory: String,

    /// Output file
    #[arg(short = 'o', value_name = "FILE")]
    output: String,
}

fn main() -> Result<(), ConvertError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    info!("Converting {} into {}", cli.directory, cli.output);
    convert(&cli.directory, &cli.output)?;
    Ok(())
}
