//! Threshold and tie-break policy over similarity scores.

/// Outcome of picking the best score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BestMatch {
    /// Position of the winning document, if it cleared the threshold.
    pub position: Option<usize>,
    /// Highest observed score, reported even when below threshold.
    pub score: f32,
}

impl BestMatch {
    pub fn is_match(&self) -> bool {
        self.position.is_some()
    }
}

/// Stable argmax with an inclusive threshold.
///
/// The first position holding the maximum wins. A best score equal to
/// `threshold` counts as a match. Empty input yields no match with score 0.
pub fn best_match(scores: &[f32], threshold: f32) -> BestMatch {
    let mut best: Option<(usize, f32)> = None;
    for (pos, &score) in scores.iter().enumerate() {
        match best {
            Some((_, top)) if score <= top => {}
            _ => best = Some((pos, score)),
        }
    }

    match best {
        Some((pos, score)) if score >= threshold => BestMatch {
            position: Some(pos),
            score,
        },
        Some((_, score)) => BestMatch {
            position: None,
            score,
        },
        None => BestMatch {
            position: None,
            score: 0.0,
        },
    }
}
