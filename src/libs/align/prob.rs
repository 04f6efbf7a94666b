use rand::Rng;

use crate::libs::align::error::AlignError;

/// Per-position probability distribution over the alphabet, derived from
/// a called sequence and its stated per-base confidences.
///
/// Row `p` assigns the stated confidence to the called base and spreads
/// the remainder uniformly over the other symbols. Rows are stored in one
/// flat vector with a 256-entry symbol lookup, so a probe is two array
/// indexings; no hashing.
///
/// Built once per reference and shared read-only across queries.
#[derive(Debug, Clone)]
pub struct ProbTable {
    alphabet: Vec<u8>,
    col: [usize; 256],
    probs: Vec<f64>,
}

impl ProbTable {
    pub fn build(
        called: &[u8],
        confidences: &[f64],
        alphabet: &[u8],
    ) -> Result<Self, AlignError> {
        if called.len() != confidences.len() {
            return Err(AlignError::InvalidInput(format!(
                "confidence array length {} does not match sequence length {}",
                confidences.len(),
                called.len()
            )));
        }
        if alphabet.len() < 2 {
            return Err(AlignError::InvalidInput(
                "alphabet must contain at least two symbols".to_string(),
            ));
        }

        let mut col = [usize::MAX; 256];
        for (i, &b) in alphabet.iter().enumerate() {
            col[b as usize] = i;
        }

        let width = alphabet.len();
        let mut probs = vec![0.0; called.len() * width];

        for (pos, (&b, &f)) in called.iter().zip(confidences.iter()).enumerate() {
            if !(f > 0.0 && f <= 1.0) {
                return Err(AlignError::InvalidInput(format!(
                    "confidence {} at position {} is outside (0,1]",
                    f, pos
                )));
            }
            let called_col = col[b as usize];
            if called_col == usize::MAX {
                return Err(AlignError::InvalidInput(format!(
                    "called symbol {:?} at position {} is not in the alphabet",
                    b as char, pos
                )));
            }

            let other = (1.0 - f) / (width - 1) as f64;
            let row = &mut probs[pos * width..(pos + 1) * width];
            for p in row.iter_mut() {
                *p = other;
            }
            row[called_col] = f;
        }

        Ok(ProbTable {
            alphabet: alphabet.to_vec(),
            col,
            probs,
        })
    }

    /// Number of reference positions covered.
    pub fn len(&self) -> usize {
        self.probs.len() / self.alphabet.len()
    }

    pub fn is_empty(&self) -> bool {
        self.probs.is_empty()
    }

    pub fn alphabet(&self) -> &[u8] {
        &self.alphabet
    }

    /// Probability that the call at `pos` truly equals `symbol`.
    /// Symbols outside the alphabet have probability 0.
    pub fn prob(&self, pos: usize, symbol: u8) -> f64 {
        let c = self.col[symbol as usize];
        if c == usize::MAX {
            0.0
        } else {
            self.probs[pos * self.alphabet.len() + c]
        }
    }

    /// The full distribution at `pos`, in alphabet order.
    pub fn row(&self, pos: usize) -> &[f64] {
        let width = self.alphabet.len();
        &self.probs[pos * width..(pos + 1) * width]
    }

    /// Draw one symbol from the distribution at `pos` by inverse CDF.
    pub fn sample<R: Rng>(&self, pos: usize, rng: &mut R) -> u8 {
        let mut r: f64 = rng.gen();
        let row = self.row(pos);
        for (i, &p) in row.iter().enumerate() {
            if r < p {
                return self.alphabet[i];
            }
            r -= p;
        }

        // rounding pushed r past the tail
        self.alphabet[self.alphabet.len() - 1]
    }
}
