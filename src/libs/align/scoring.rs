use crate::libs::align::prob::ProbTable;

/// Flat match/mismatch score pair.
#[derive(Debug, Clone, Copy)]
pub struct ScoreParams {
    pub match_score: f64,
    pub mismatch_score: f64,
}

impl Default for ScoreParams {
    fn default() -> Self {
        Self {
            match_score: 5.0,
            mismatch_score: -4.0,
        }
    }
}

/// The two scoring modes of the engine.
///
/// `Literal` compares query symbols against the reference text.
/// `Weighted` ignores the reference text and scores against the
/// per-position confidence distribution instead: the match score weighted
/// by the probability that the call truly equals the query symbol, plus
/// the mismatch score weighted by the complement. The weighted form does
/// not distinguish among possible wrong-symbol identities, only "matches
/// the call" vs. "does not".
#[derive(Debug, Clone, Copy)]
pub enum Scoring<'a> {
    Literal(ScoreParams),
    Weighted {
        params: ScoreParams,
        table: &'a ProbTable,
    },
}

impl Scoring<'_> {
    /// Score one query symbol against reference position `pos`.
    pub fn positional(&self, symbol: u8, reference: &[u8], pos: usize) -> f64 {
        match self {
            Scoring::Literal(p) => {
                if symbol == reference[pos] {
                    p.match_score
                } else {
                    p.mismatch_score
                }
            }
            Scoring::Weighted { params, table } => {
                let pr = table.prob(pos, symbol);
                pr * params.match_score + (1.0 - pr) * params.mismatch_score
            }
        }
    }

    /// Sum of positional scores for `window` laid over the reference
    /// starting at `start`. The window must fit the reference there.
    pub fn window(&self, window: &[u8], reference: &[u8], start: usize) -> f64 {
        window
            .iter()
            .enumerate()
            .map(|(i, &b)| self.positional(b, reference, start + i))
            .sum()
    }
}
