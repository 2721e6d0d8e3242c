use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

use clap::Parser;
use vowel_corpus::{
    corpus::transcription::DEFAULT_VOWEL_DURATION_MS, engines::mbrola::MbrolaSynthesizer,
    CorpusError, CorpusGenerator, CorpusMetadata, CorpusOptionsBuilder,
};

/// Create the isolated vowels corpus with MBROLA
#[derive(Parser, Debug)]
#[command(name = "vowel-corpus")]
#[command(version)]
struct Cli {
    /// Path to the MBROLA executable
    #[arg(long = "mbrola_path")]
    mbrola_path: PathBuf,

    /// Directory holding the MBROLA voices
    #[arg(long = "mbrola_voices_path")]
    mbrola_voices_path: PathBuf,

    /// Output directory of the corpus (pho/, wav/ and corpus_info.csv)
    #[arg(long = "output_corpus_path")]
    output_corpus_path: PathBuf,

    /// Output path of the binary metadata snapshot
    #[arg(long = "output_info")]
    output_info: PathBuf,

    /// Comma-separated language codes to generate (default: all)
    #[arg(long, value_delimiter = ',')]
    languages: Vec<String>,

    /// Vowel duration in milliseconds
    #[arg(long = "vowel_duration", default_value_t = DEFAULT_VOWEL_DURATION_MS)]
    vowel_duration: u32,

    /// Check that metadata and generated files match after writing
    #[arg(long)]
    verify: bool,
}

fn run(cli: Cli) -> Result<CorpusMetadata, CorpusError> {
    let options = CorpusOptionsBuilder::default()
        .output_corpus_path(cli.output_corpus_path)
        .output_info(cli.output_info)
        .languages(cli.languages)
        .vowel_duration_ms(cli.vowel_duration)
        .verify(cli.verify)
        .build()?;
    let synthesizer = MbrolaSynthesizer::new(cli.mbrola_path, cli.mbrola_voices_path);

    CorpusGenerator::new(options, synthesizer).run()
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let start = Instant::now();
    match run(cli) {
        Ok(metadata) => {
            if metadata.is_empty() {
                log::warn!("No items were generated");
            }
            log::info!(
                "Generated {} items in {:.2?}",
                metadata.len(),
                start.elapsed()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
