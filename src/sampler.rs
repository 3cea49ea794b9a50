use rand::Rng;

use crate::grid::Direction;
use crate::history::DirectionHistory;

/// Softmax-style direction picker that down-weights recently used directions:
/// `weight(d) = exp(-beta * count(d))`.
#[derive(Clone, Copy, Debug)]
pub struct AntiPersistenceSampler {
    beta: f64,
}

impl AntiPersistenceSampler {
    pub fn new(beta: f64) -> Self {
        Self { beta }
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn weight(&self, dir: Direction, history: &DirectionHistory) -> f64 {
        (-self.beta * f64::from(history.count(dir))).exp()
    }

    /// Picks one of `candidates`. A single candidate is returned without
    /// consuming a draw; an empty slice yields `None`.
    pub fn sample<R: Rng + ?Sized>(
        &self,
        candidates: &[Direction],
        history: &DirectionHistory,
        rng: &mut R,
    ) -> Option<Direction> {
        match candidates {
            [] => None,
            [only] => Some(*only),
            _ => {
                let mut weights = [0.0f64; 4];
                let mut total = 0.0;
                for (slot, &dir) in weights.iter_mut().zip(candidates) {
                    *slot = self.weight(dir, history);
                    total += *slot;
                }

                let r = rng.gen::<f64>() * total;
                let mut accumulated = 0.0;
                for (&weight, &dir) in weights.iter().zip(candidates) {
                    accumulated += weight;
                    if r <= accumulated {
                        return Some(dir);
                    }
                }
                // Rounding can leave r just above the final sum.
                candidates.last().copied()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use Direction::*;

    #[test]
    fn test_empty_and_single_candidate() {
        let sampler = AntiPersistenceSampler::new(0.8);
        let history = DirectionHistory::new(4);
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(sampler.sample(&[], &history, &mut rng), None);

        // No draw is consumed for a lone candidate.
        let mut untouched = StdRng::seed_from_u64(1);
        assert_eq!(sampler.sample(&[Left], &history, &mut rng), Some(Left));
        assert_eq!(rng.gen::<u64>(), untouched.gen::<u64>());
    }

    #[test]
    fn test_zero_beta_is_uniform() {
        let sampler = AntiPersistenceSampler::new(0.0);
        let mut history = DirectionHistory::new(10);
        for _ in 0..10 {
            history.record(Up);
        }
        assert_eq!(sampler.weight(Up, &history), 1.0);

        let candidates = [Up, Down, Right];
        let mut rng = StdRng::seed_from_u64(7);
        let mut hits = [0usize; 4];
        let draws = 30_000;
        for _ in 0..draws {
            let dir = sampler.sample(&candidates, &history, &mut rng).unwrap();
            hits[dir.index()] += 1;
        }
        assert_eq!(hits[Left.index()], 0);
        for dir in candidates {
            let share = hits[dir.index()] as f64 / draws as f64;
            assert!((share - 1.0 / 3.0).abs() < 0.03, "{dir:?} share {share}");
        }
    }

    #[test]
    fn test_recent_directions_are_avoided() {
        let sampler = AntiPersistenceSampler::new(10.0);
        let mut history = DirectionHistory::new(8);
        for _ in 0..5 {
            history.record(Up);
        }
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..1_000 {
            assert_eq!(sampler.sample(&[Up, Down], &history, &mut rng), Some(Down));
        }
    }

    #[test]
    fn test_weights_follow_counts() {
        let sampler = AntiPersistenceSampler::new(0.5);
        let mut history = DirectionHistory::new(8);
        history.record(Left);
        history.record(Left);
        let expected = (-1.0f64).exp();
        assert!((sampler.weight(Left, &history) - expected).abs() < 1e-12);
        assert_eq!(sampler.weight(Right, &history), 1.0);
    }
}
