use rand::rng;
use rand::seq::SliceRandom;
use rand::Rng;

/// Questions shown per exercise or quiz page.
pub const PRACTICE_SET_SIZE: usize = 10;

/// Picks a bounded, random subset of a bank.
///
/// When the bank holds more items than the limit, a uniformly random subset
/// of `limit` distinct items is returned in random order. Otherwise every
/// item is returned, in bank order unless shuffling is enabled.
#[derive(Debug, Clone, Copy)]
pub struct QuestionSampler {
    limit: usize,
    shuffle: bool,
}

impl QuestionSampler {
    #[must_use]
    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            shuffle: false,
        }
    }

    /// Shuffle small banks too, instead of keeping their stored order.
    #[must_use]
    pub fn with_shuffle(mut self, shuffle: bool) -> Self {
        self.shuffle = shuffle;
        self
    }

    #[must_use]
    pub fn sample<T>(&self, items: Vec<T>) -> Vec<T> {
        self.sample_with(items, &mut rng())
    }

    /// Same as [`QuestionSampler::sample`] with a caller-supplied generator.
    pub fn sample_with<T, R>(&self, mut items: Vec<T>, rng: &mut R) -> Vec<T>
    where
        R: Rng + ?Sized,
    {
        if items.len() > self.limit {
            items.shuffle(rng);
            items.truncate(self.limit);
        } else if self.shuffle {
            items.shuffle(rng);
        }
        items
    }
}

impl Default for QuestionSampler {
    fn default() -> Self {
        Self::new(PRACTICE_SET_SIZE)
    }
}
