//! Local alignment engine: seed generation, exhaustive hit scanning,
//! X-drop extension, and candidate consolidation.

pub mod consolidate;
pub mod error;
pub mod evaluate;
pub mod extend;
pub mod prob;
pub mod scoring;
pub mod seed;

pub use consolidate::CandidateSet;
pub use error::AlignError;
pub use evaluate::{evaluate_correctness, Correctness};
pub use extend::{extend_hit, Candidate};
pub use prob::ProbTable;
pub use scoring::{ScoreParams, Scoring};
pub use seed::{generate_seeds, scan_for_hits, Hit, Seed};

/// Knobs of the composed pipeline.
#[derive(Debug, Clone, Copy)]
pub struct SearchParams {
    /// Seed (k-mer) length
    pub k: usize,
    pub match_score: f64,
    pub mismatch_score: f64,
    /// Minimum window score for a seed occurrence to become a hit
    pub threshold: f64,
    /// X-drop cutoff, negative
    pub cutoff: f64,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            k: 11,
            match_score: 5.0,
            mismatch_score: -4.0,
            threshold: 45.0,
            cutoff: -15.0,
        }
    }
}

/// Ranked candidates plus the raw hit count, which is only surfaced for
/// instrumentation.
#[derive(Debug, Clone)]
pub struct SearchResult {
    pub candidates: Vec<Candidate>,
    pub hit_count: usize,
}

/// The composed pipeline: cut seeds from the query, scan each across the
/// reference, extend every hit, then deduplicate and rank the spans.
///
/// With `table`, scoring switches to the confidence-weighted mode; the
/// table must cover the reference position for position. The engine
/// holds no state across calls, so queries can fan out in parallel over
/// a shared reference and table.
pub fn find_local_alignments(
    query: &[u8],
    reference: &[u8],
    params: &SearchParams,
    table: Option<&ProbTable>,
) -> Result<SearchResult, AlignError> {
    if params.k == 0 {
        return Err(AlignError::Config("seed length must be positive".to_string()));
    }
    if query.is_empty() || reference.is_empty() {
        return Err(AlignError::InvalidInput("empty sequence".to_string()));
    }
    if params.k > query.len() {
        return Err(AlignError::InvalidInput(format!(
            "seed length {} exceeds query length {}",
            params.k,
            query.len()
        )));
    }
    if params.k > reference.len() {
        return Err(AlignError::InvalidInput(format!(
            "seed length {} exceeds reference length {}",
            params.k,
            reference.len()
        )));
    }
    if let Some(tbl) = table {
        if tbl.len() != reference.len() {
            return Err(AlignError::Config(format!(
                "confidence table covers {} positions but the reference has {}",
                tbl.len(),
                reference.len()
            )));
        }
    }

    let score_params = ScoreParams {
        match_score: params.match_score,
        mismatch_score: params.mismatch_score,
    };
    let scoring = match table {
        Some(tbl) => Scoring::Weighted {
            params: score_params,
            table: tbl,
        },
        None => Scoring::Literal(score_params),
    };

    let mut set = CandidateSet::new();
    let mut hit_count = 0;

    for seed in generate_seeds(query, params.k) {
        let hits = scan_for_hits(&seed, reference, &scoring, params.threshold);
        hit_count += hits.len();

        for hit in &hits {
            let cand = extend_hit(
                query,
                reference,
                seed.offset,
                params.k,
                hit,
                params.cutoff,
                &scoring,
            );
            set.insert_max(cand.start, cand.end, cand.score);
        }
    }

    Ok(SearchResult {
        candidates: set.into_ranked(),
        hit_count,
    })
}
