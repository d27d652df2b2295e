use crate::symbol::Symbol;

/// Completing a sequence is worth nine times its per-step weight.
const COMPLETION_MULTIPLIER: u32 = 9;

/// A target sequence of symbols to be matched against selected cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sequence {
    values: Vec<Symbol>,
}

impl Sequence {
    pub fn new<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Symbol>,
    {
        Sequence {
            values: values.into_iter().map(Into::into).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn values(&self) -> &[Symbol] {
        &self.values
    }

    /// Step the match forward by one observed value.
    ///
    /// `matched` is how many leading values have already matched. Returns the
    /// new match length and the points gained. A completed sequence is inert:
    /// extra observations neither score nor disturb it. A mismatch while
    /// partway through resets to zero outright, even when the observed value
    /// could begin a fresh match.
    fn advance(&self, matched: usize, value: Symbol, weight: u32) -> (usize, u32) {
        if matched >= self.values.len() {
            return (matched, 0);
        }
        if self.values[matched] == value {
            let matched = matched + 1;
            let gained = if matched == self.values.len() {
                weight * COMPLETION_MULTIPLIER
            } else {
                weight
            };
            (matched, gained)
        } else {
            (0, 0)
        }
    }
}

/// How far along each target sequence a selection trail has matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchProgress {
    matched: Vec<usize>,
}

impl MatchProgress {
    pub fn new(sequence_count: usize) -> Self {
        MatchProgress {
            matched: vec![0; sequence_count],
        }
    }

    /// Feed one cell to every sequence and return the total points gained.
    ///
    /// `None` marks a cell already consumed from the active line; it scores
    /// nothing and resets every in-progress match, leaving completed ones
    /// untouched. A sequence's per-step weight is its index plus one.
    pub fn observe(&mut self, sequences: &[Sequence], cell: Option<Symbol>) -> u32 {
        let mut gained = 0;
        for (index, sequence) in sequences.iter().enumerate() {
            match cell {
                Some(value) => {
                    let weight = index as u32 + 1;
                    let (matched, points) = sequence.advance(self.matched[index], value, weight);
                    self.matched[index] = matched;
                    gained += points;
                }
                None => {
                    if self.matched[index] < sequence.len() {
                        self.matched[index] = 0;
                    }
                }
            }
        }
        gained
    }

    #[cfg(test)]
    pub(crate) fn matched(&self) -> &[usize] {
        &self.matched
    }
}
