use crate::libs::align::scoring::Scoring;

/// A fixed-length word of the query, used as a search anchor. Borrows
/// the query it was cut from.
#[derive(Debug, Clone, Copy)]
pub struct Seed<'a> {
    pub offset: usize,
    pub word: &'a [u8],
}

/// All stride-1 seeds of length `k`, offsets `0..=len-k`.
/// `k == 0` or `k > query.len()` yields none.
pub fn generate_seeds(query: &[u8], k: usize) -> Vec<Seed<'_>> {
    if k == 0 || k > query.len() {
        return Vec::new();
    }

    query
        .windows(k)
        .enumerate()
        .map(|(offset, word)| Seed { offset, word })
        .collect()
}

/// A reference offset where a seed's window score clears the detection
/// threshold.
#[derive(Debug, Clone, Copy)]
pub struct Hit {
    pub pos: usize,
    pub score: f64,
}

/// Slide `seed` across every valid reference offset and keep the ones
/// scoring at least `threshold`.
///
/// This is an exhaustive linear scan, not a hash lookup, so weighted
/// scoring gets the same treatment as literal scoring. Ties are all
/// retained; the caller decides what to do with multiple hits.
pub fn scan_for_hits(
    seed: &Seed,
    reference: &[u8],
    scoring: &Scoring,
    threshold: f64,
) -> Vec<Hit> {
    let k = seed.word.len();
    if k == 0 || k > reference.len() {
        return Vec::new();
    }

    let mut hits = Vec::new();
    for pos in 0..=reference.len() - k {
        let score = scoring.window(seed.word, reference, pos);
        if score >= threshold {
            hits.push(Hit { pos, score });
        }
    }

    hits
}
