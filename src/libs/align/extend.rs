use crate::libs::align::scoring::Scoring;
use crate::libs::align::seed::Hit;

/// One maximal locally-extended match: inclusive reference bounds and
/// the best score reached during extension.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    pub start: usize,
    pub end: usize,
    pub score: f64,
}

/// Grow a seed occurrence outward from `hit` under the X-drop rule: a
/// pass halts once the running score has fallen more than `|cutoff|`
/// below the best score seen in that direction (`cutoff` is negative; 0
/// stops the moment the score fails to strictly improve).
///
/// Both passes share one running score, so the candidate is scored as a
/// single contiguous extension. Boundaries only move on strict
/// improvement, and a seed flush against a sequence edge simply keeps
/// its boundary there.
pub fn extend_hit(
    query: &[u8],
    reference: &[u8],
    seed_offset: usize,
    k: usize,
    hit: &Hit,
    cutoff: f64,
    scoring: &Scoring,
) -> Candidate {
    let mut current = hit.score;

    //----------------------------
    // Left pass
    //----------------------------
    let mut best = current;
    let mut best_left = hit.pos;
    let mut qi = seed_offset;
    let mut ri = hit.pos;

    while ri > 0 && qi > 0 && current - best >= cutoff {
        ri -= 1;
        qi -= 1;
        current += scoring.positional(query[qi], reference, ri);
        if current > best {
            best = current;
            best_left = ri;
        }
    }

    //----------------------------
    // Right pass
    //----------------------------
    // continues the running score from wherever the left pass ended
    let mut best_right_score = current;
    let mut best_right = hit.pos + k - 1;
    let mut qj = seed_offset + k - 1;
    let mut rj = hit.pos + k - 1;

    while rj < reference.len() - 1 && qj < query.len() - 1 && current - best_right_score >= cutoff
    {
        rj += 1;
        qj += 1;
        current += scoring.positional(query[qj], reference, rj);
        if current > best_right_score {
            best_right_score = current;
            best_right = rj;
        }
    }

    Candidate {
        start: best_left,
        end: best_right,
        score: best_right_score,
    }
}
