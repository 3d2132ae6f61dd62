// Integration tests for rankx
use rankx_core::{Candidate, DuplicateKind, MatchStatus, Source, Vector};
use rankx_engine::{ranked_to_csv, Pipeline, SUMMARY_TOP_K};
use rankx_similarity::{
    fallback_summary, EmbeddingError, EmbeddingProvider, HashEmbedder, SummaryError, Summarizer,
    TemplateSummarizer,
};

/// Embedder whose candidate scores are dialed in through the resume text:
/// a text that parses as a float f becomes a unit vector at cosine f from
/// the job vector; anything else (the job description) maps to [1, 0].
struct DialedEmbedder;

impl EmbeddingProvider for DialedEmbedder {
    fn embed(&self, texts: &[&str]) -> Result<Vec<Vector>, EmbeddingError> {
        Ok(texts
            .iter()
            .map(|text| match text.trim().parse::<f32>() {
                Ok(s) => Vector::new(vec![s, (1.0 - s * s).max(0.0).sqrt()]),
                Err(_) => Vector::new(vec![1.0, 0.0]),
            })
            .collect())
    }
}

struct OfflineEmbedder;

impl EmbeddingProvider for OfflineEmbedder {
    fn embed(&self, _texts: &[&str]) -> Result<Vec<Vector>, EmbeddingError> {
        Err(EmbeddingError::Provider("model offline".to_string()))
    }
}

struct BrokenSummarizer;

impl Summarizer for BrokenSummarizer {
    fn summarize(
        &self,
        _job_description: &str,
        _candidate_text: &str,
        _score: f32,
    ) -> Result<String, SummaryError> {
        Err(SummaryError::Backend("llm unavailable".to_string()))
    }
}

fn candidate(id: &str, email: &str, text: &str) -> Candidate {
    Candidate::new(id, format!("Name {id}"), email, "555-0100", text, Source::File)
}

#[test]
fn test_full_pipeline_ranks_by_similarity() {
    let embedder = HashEmbedder::default();
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let candidates = vec![
        candidate("File_1", "a@example.com", "pastry chef, croissants and laminated dough"),
        candidate("File_2", "b@example.com", "senior rust engineer building async network services"),
        candidate("File_3", "c@example.com", "rust developer with tokio and distributed systems work"),
    ];

    let report = pipeline
        .rank("rust engineer for async distributed services", &candidates)
        .unwrap();

    assert_eq!(report.ranked.len(), 3);
    assert!(report.duplicates.is_empty());

    // dense 1-based ranks, scores non-increasing
    for (i, row) in report.ranked.iter().enumerate() {
        assert_eq!(row.rank, i + 1);
        assert!((0.0..=1.0).contains(&row.similarity));
        if i > 0 {
            assert!(report.ranked[i - 1].similarity >= row.similarity);
        }
    }

    // the pastry chef should not win
    assert_ne!(report.ranked[0].id, "File_1");
}

#[test]
fn test_top_k_summaries_only() {
    let embedder = DialedEmbedder;
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let candidates: Vec<Candidate> = (0..6)
        .map(|i| {
            candidate(
                &format!("C{i}"),
                &format!("c{i}@example.com"),
                &format!("0.{}", 9 - i),
            )
        })
        .collect();

    let report = pipeline.rank("job description", &candidates).unwrap();

    assert_eq!(report.ranked.len(), 6);
    for row in &report.ranked[..SUMMARY_TOP_K] {
        assert!(!row.summary.is_empty(), "rank {} missing summary", row.rank);
    }
    let last = &report.ranked[5];
    assert_eq!(last.rank, 6);
    assert!(last.summary.is_empty());
    assert_eq!(last.id, "C5");
}

#[test]
fn test_email_duplicates_pruned_before_scoring() {
    let embedder = DialedEmbedder;
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let candidates = vec![
        candidate("A", "x@y.com", "0.4"),
        candidate("B", "x@y.com", "0.9"),
    ];

    let report = pipeline.rank("job", &candidates).unwrap();

    // B shares A's email, so only A is ranked even though B scores higher
    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.ranked[0].id, "A");
    assert_eq!(report.duplicates.len(), 1);
    assert_eq!(report.duplicates[0].kind, DuplicateKind::EmailDuplicate);
    assert_eq!(report.duplicates[0].candidate_id, "B");
    assert!(report.duplicates[0].reason.contains('A'));
}

#[test]
fn test_identical_submissions_collapse_to_single_row() {
    let embedder = HashEmbedder::default();
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let batch: Vec<Candidate> = (0..4)
        .map(|i| candidate(&format!("C{i}"), &format!("c{i}@y.com"), "identical resume"))
        .collect();

    let report = pipeline.rank("job", &batch).unwrap();
    assert_eq!(report.ranked.len(), 1);
    assert_eq!(report.ranked[0].id, "C0");
    assert_eq!(report.duplicates.len(), 3);
    assert!(report
        .duplicates
        .iter()
        .all(|d| d.kind == DuplicateKind::ContentDuplicate));
}

#[test]
fn test_empty_input_is_empty_result() {
    let embedder = HashEmbedder::default();
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let report = pipeline.rank("job", &[]).unwrap();
    assert!(report.is_empty());
    assert!(report.duplicates.is_empty());
}

#[test]
fn test_embedding_outage_is_a_hard_failure() {
    let embedder = OfflineEmbedder;
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let result = pipeline.rank("job", &[candidate("A", "a@y.com", "resume")]);
    assert!(result.is_err());
}

#[test]
fn test_summarizer_outage_degrades_to_template() {
    let embedder = DialedEmbedder;
    let summarizer = BrokenSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let report = pipeline
        .rank("job", &[candidate("A", "a@y.com", "0.7")])
        .unwrap();

    let row = &report.ranked[0];
    assert_eq!(row.summary, fallback_summary(row.similarity));
    assert_eq!(row.status, MatchStatus::Good);
}

#[test]
fn test_ranking_is_idempotent() {
    let embedder = HashEmbedder::default();
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let candidates = vec![
        candidate("A", "a@y.com", "rust engineer with async experience"),
        candidate("B", "b@y.com", "database administrator, postgres"),
        candidate("C", "c@y.com", "embedded rust firmware developer"),
    ];

    let first = pipeline.rank("rust services engineer", &candidates).unwrap();
    let second = pipeline.rank("rust services engineer", &candidates).unwrap();

    let order_a: Vec<&str> = first.ranked.iter().map(|r| r.id.as_str()).collect();
    let order_b: Vec<&str> = second.ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(order_a, order_b);
}

#[test]
fn test_tied_scores_keep_input_order() {
    let embedder = DialedEmbedder;
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    // all three parse to the same dialed score but hash differently
    let candidates = vec![
        candidate("A", "a@y.com", "0.50"),
        candidate("B", "b@y.com", "0.5"),
        candidate("C", "c@y.com", "0.500"),
    ];

    let report = pipeline.rank("job", &candidates).unwrap();
    let ids: Vec<&str> = report.ranked.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, ["A", "B", "C"]);
}

#[test]
fn test_csv_export_of_pipeline_output() {
    let embedder = HashEmbedder::default();
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let candidates = vec![
        candidate("File_1", "a@y.com", "rust engineer"),
        candidate("File_2", "b@y.com", "haskell researcher"),
    ];

    let report = pipeline.rank("rust engineer", &candidates).unwrap();
    let csv = ranked_to_csv(&report.ranked);

    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Rank,Candidate ID,Name,"));
    assert!(lines[1].starts_with("1,"));
    assert!(lines[2].starts_with("2,"));
}

#[test]
fn test_rank_resumes_read_from_disk() {
    use rankx_engine::{clean_text, extract_candidate_info};

    let dir = tempfile::tempdir().unwrap();
    let resumes = [
        "Jane Doe\njane@example.com\nSenior Rust engineer, async network services.",
        "Kim Park\nkim@example.com\nPastry chef, croissants and laminated dough.",
    ];

    let mut candidates = Vec::new();
    for (i, resume) in resumes.iter().enumerate() {
        let path = dir.path().join(format!("resume_{i}.txt"));
        std::fs::write(&path, resume).unwrap();

        let raw = std::fs::read_to_string(&path).unwrap();
        let info = extract_candidate_info(&raw);
        candidates.push(Candidate::new(
            format!("File_{}", i + 1),
            info.name,
            info.email,
            info.phone,
            clean_text(&raw),
            Source::File,
        ));
    }

    assert_eq!(candidates[0].name, "Jane Doe");
    assert_eq!(candidates[1].email, "kim@example.com");

    let embedder = HashEmbedder::default();
    let summarizer = TemplateSummarizer;
    let pipeline = Pipeline::new(&embedder, &summarizer);

    let report = pipeline
        .rank("rust engineer for async services", &candidates)
        .unwrap();
    assert_eq!(report.ranked.len(), 2);
    assert_eq!(report.ranked[0].id, "File_1");
}
