use clap::Parser;
use std::fs;
use std::path::PathBuf;
use tracing::{info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use rankx_core::{Candidate, Source};
use rankx_engine::{clean_text, duplicates_to_csv, extract_candidate_info, ranked_to_csv, Pipeline};
use rankx_similarity::{HashEmbedder, TemplateSummarizer, DEFAULT_EMBEDDING_DIM};

/// Rank candidate resumes against a job description
#[derive(Parser, Debug)]
#[command(name = "rankx")]
#[command(about = "Rank candidate resumes against a job description", long_about = None)]
struct Args {
    /// Path to a file containing the job description
    #[arg(short, long)]
    job: PathBuf,

    /// Plain-text resume files, one candidate each
    #[arg(required = false)]
    resumes: Vec<PathBuf>,

    /// Manually entered resume text (repeatable)
    #[arg(long = "text")]
    manual_texts: Vec<String>,

    /// Write the ranked table CSV here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write the duplicate report CSV here
    #[arg(long)]
    duplicates: Option<PathBuf>,

    /// Embedding dimension for the built-in hash embedder
    #[arg(long, default_value_t = DEFAULT_EMBEDDING_DIM)]
    embedding_dim: usize,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting rankx v{}", env!("CARGO_PKG_VERSION"));

    let job_description = fs::read_to_string(&args.job)?;
    let candidates = collect_candidates(&args.resumes, &args.manual_texts);
    info!(candidates = candidates.len(), "collected candidate batch");

    let embedder = HashEmbedder::new(args.embedding_dim);
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let report = pipeline.rank(&job_description, &candidates)?;
    info!(
        ranked = report.ranked.len(),
        duplicates = report.duplicates.len(),
        "ranking complete"
    );

    let ranked_csv = ranked_to_csv(&report.ranked);
    match &args.output {
        Some(path) => {
            fs::write(path, ranked_csv)?;
            info!(path = %path.display(), "wrote ranked table");
        }
        None => print!("{ranked_csv}"),
    }

    if let Some(path) = &args.duplicates {
        fs::write(path, duplicates_to_csv(&report.duplicates))?;
        info!(path = %path.display(), "wrote duplicate report");
    } else {
        for record in &report.duplicates {
            info!(
                id = %record.candidate_id,
                kind = %record.kind,
                reason = %record.reason,
                "duplicate removed"
            );
        }
    }

    Ok(())
}

/// Build the candidate batch: one entry per readable resume file, then one
/// per manual text. Unreadable or empty inputs are skipped, never fatal.
fn collect_candidates(resumes: &[PathBuf], manual_texts: &[String]) -> Vec<Candidate> {
    let mut candidates = Vec::new();

    for (i, path) in resumes.iter().enumerate() {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) => {
                warn!(path = %path.display(), error = %err, "skipping unreadable resume");
                continue;
            }
        };
        if let Some(candidate) = build_candidate(format!("File_{}", i + 1), &raw, Source::File) {
            candidates.push(candidate);
        } else {
            warn!(path = %path.display(), "skipping empty resume");
        }
    }

    for (i, raw) in manual_texts.iter().enumerate() {
        if let Some(candidate) = build_candidate(format!("Text_{}", i + 1), raw, Source::Manual) {
            candidates.push(candidate);
        } else {
            warn!(index = i + 1, "skipping empty manual text");
        }
    }

    candidates
}

fn build_candidate(id: String, raw: &str, source: Source) -> Option<Candidate> {
    let text = clean_text(raw);
    if text.is_empty() {
        return None;
    }
    let info = extract_candidate_info(raw);
    Some(Candidate::new(
        id, info.name, info.email, info.phone, text, source,
    ))
}
