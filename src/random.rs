use rand::Rng;

/// The randomness a maze generator consumes, passed in explicitly so a maze can be reproduced.
///
/// Every `rand::Rng` is a `RandomSource`: production code hands over `rand::thread_rng()`,
/// tests use a seeded rng or a scripted sequence of draws.
pub trait RandomSource {
    /// A uniformly distributed value in `0..bound`. `bound` must be greater than zero.
    fn below(&mut self, bound: usize) -> usize;
}

impl<R: Rng + ?Sized> RandomSource for R {
    #[inline]
    fn below(&mut self, bound: usize) -> usize {
        self.gen_range(0..bound)
    }
}

/// Fair in-place shuffle (Fisher-Yates).
///
/// Walks from the last position toward the first, swapping each position with a uniformly
/// chosen position among itself and all the earlier ones. Every permutation is equally likely
/// given a uniform `RandomSource`.
///
/// Exactly one draw per position, the first position included (its draw is always 0), so a
/// recorded sequence of draws replays to the same order.
pub fn shuffle<T, R>(items: &mut [T], rng: &mut R)
    where R: RandomSource + ?Sized
{
    for i in (0..items.len()).rev() {
        let j = rng.below(i + 1);
        items.swap(i, j);
    }
}


#[cfg(test)]
mod tests {

    use super::*;
    use super::testing::ScriptedDraws;
    use fnv::FnvHashMap;
    use itertools::Itertools;
    use quickcheck::quickcheck;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn below_stays_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        for bound in 1..50 {
            for _ in 0..100 {
                assert!(rng.below(bound) < bound);
            }
        }
    }

    #[test]
    fn shuffle_of_empty_and_single_is_a_no_op() {
        let mut rng = ScriptedDraws::new(&[], &[0]);
        let mut empty: [u8; 0] = [];
        shuffle(&mut empty, &mut rng);
        let mut single = [42];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, [42]);
    }

    #[test]
    fn shuffle_swaps_from_the_end() {
        // i = 3 stays, i = 2 swaps with 0, i = 1 stays, i = 0 stays
        let mut rng = ScriptedDraws::new(&[3, 0, 1, 0], &[0]);
        let mut items = ['a', 'b', 'c', 'd'];
        shuffle(&mut items, &mut rng);
        assert_eq!(items, ['c', 'b', 'a', 'd']);
    }

    #[test]
    fn shuffle_draws_once_per_position() {
        struct CountingDraws(usize);
        impl RandomSource for CountingDraws {
            fn below(&mut self, bound: usize) -> usize {
                assert!(bound > 0);
                self.0 += 1;
                0
            }
        }

        let mut rng = CountingDraws(0);
        shuffle(&mut [0u8; 0], &mut rng);
        assert_eq!(rng.0, 0);
        shuffle(&mut [7u8], &mut rng);
        assert_eq!(rng.0, 1);
        shuffle(&mut [0u8, 1, 2, 3], &mut rng);
        assert_eq!(rng.0, 5);
    }

    #[test]
    fn shuffle_is_fair_over_four_elements() {
        const RUNS: usize = 24_000;
        let mut rng = StdRng::seed_from_u64(0x5eed);
        let mut counts = FnvHashMap::<[u8; 4], usize>::default();

        for _ in 0..RUNS {
            let mut items = [0u8, 1, 2, 3];
            shuffle(&mut items, &mut rng);
            *counts.entry(items).or_insert(0) += 1;
        }

        assert_eq!(counts.len(), 24);
        let expected = RUNS / 24;
        for (permutation, count) in &counts {
            assert!(*count > expected * 8 / 10 && *count < expected * 12 / 10,
                    "permutation {:?} seen {} times, expected about {}",
                    permutation,
                    count,
                    expected);
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        fn p(items: Vec<u32>, seed: u64) -> bool {
            let mut rng = StdRng::seed_from_u64(seed);
            let mut shuffled = items.clone();
            shuffle(&mut shuffled, &mut rng);
            shuffled.into_iter().sorted().collect::<Vec<_>>() ==
            items.into_iter().sorted().collect::<Vec<_>>()
        }
        quickcheck(p as fn(Vec<u32>, u64) -> bool);
    }
}
