use getrandom::getrandom;
use oorandom::Rand64;

pub fn preseeded_rng64() -> Rand64 {
    Rand64::new(os_random_seed())
}

pub fn rng64(seed: u128) -> Rand64 {
    Rand64::new(seed)
}

pub fn os_random_seed() -> u128 {
    let mut buf = [0; 16];
    let _res = getrandom(&mut buf);
    u128::from_le_bytes(buf)
}

/// Draws a fresh 128 bit seed from an existing generator.
/// Used to hand out independent, but reproducible generators.
pub fn derive_seed(rng: &mut Rand64) -> u128 {
    rng.rand_u64() as u128 + ((rng.rand_u64() as u128) << 64)
}

/// Shuffles the slice in place (Fisher-Yates).
pub fn shuffle<T>(rng: &mut Rand64, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.rand_range(0..(i as u64 + 1)) as usize;
        items.swap(i, j);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_sequence() {
        let mut a = rng64(42);
        let mut b = rng64(42);

        for _ in 0..10 {
            assert_eq!(a.rand_u64(), b.rand_u64());
        }
    }

    #[test]
    fn shuffle_keeps_elements() {
        let mut rng = rng64(7);
        let mut items: Vec<usize> = (1..=20).collect();
        shuffle(&mut rng, &mut items);
        let mut sorted = items.clone();
        sorted.sort_unstable();

        assert_eq!(sorted, (1..=20).collect::<Vec<_>>());
    }

    #[test]
    fn shuffle_is_reproducible() {
        let mut first: Vec<usize> = (0..50).collect();
        let mut second = first.clone();
        shuffle(&mut rng64(3), &mut first);
        shuffle(&mut rng64(3), &mut second);

        assert_eq!(first, second);
    }

    #[test]
    fn shuffle_handles_tiny_slices() {
        let mut rng = preseeded_rng64();
        let mut empty: Vec<usize> = Vec::new();
        let mut single = vec![1];
        shuffle(&mut rng, &mut empty);
        shuffle(&mut rng, &mut single);

        assert!(empty.is_empty());
        assert_eq!(single, vec![1]);
    }

    #[test]
    fn derived_seeds_differ() {
        let mut rng = rng64(11);

        assert_ne!(derive_seed(&mut rng), derive_seed(&mut rng));
    }
}
