//! Delay policy between requests and pairs.
//!
//! Sleeping is isolated behind [`Pacer`] so the run loop's ordering and
//! timing can be tested without real wall-clock delays, and the jitter is
//! sampled from a caller-supplied [`rand::Rng`] so it is reproducible
//! under test.

use std::time::Duration;

use rand::Rng;

/// The injectable sleep seam.
pub trait Pacer {
    /// Pause for the given duration.
    fn pause(&self, duration: Duration) -> impl Future<Output = ()> + Send;
}

/// Real pacer backed by the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioPacer;

impl Pacer for TokioPacer {
    async fn pause(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Sample a uniformly jittered delay from `[min, max]`.
///
/// Degenerate bounds (max ≤ min) collapse to `min`.
pub fn jittered(min: Duration, max: Duration, rng: &mut impl Rng) -> Duration {
    if max <= min {
        return min;
    }
    let millis = rng.gen_range(min.as_millis() as u64..=max.as_millis() as u64);
    Duration::from_millis(millis)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn jitter_stays_within_bounds() {
        let min = Duration::from_secs(60);
        let max = Duration::from_secs(240);
        let mut rng = StdRng::seed_from_u64(7);

        for _ in 0..1000 {
            let d = jittered(min, max, &mut rng);
            assert!(d >= min, "{d:?} below lower bound");
            assert!(d <= max, "{d:?} above upper bound");
        }
    }

    #[test]
    fn jitter_is_reproducible_per_seed() {
        let min = Duration::from_secs(1);
        let max = Duration::from_secs(10);

        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..10 {
            assert_eq!(jittered(min, max, &mut a), jittered(min, max, &mut b));
        }
    }

    #[test]
    fn degenerate_bounds_collapse_to_min() {
        let mut rng = StdRng::seed_from_u64(0);
        let d = Duration::from_secs(5);
        assert_eq!(jittered(d, d, &mut rng), d);
        assert_eq!(jittered(d, Duration::from_secs(1), &mut rng), d);
    }
}
