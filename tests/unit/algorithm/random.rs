//! Tests for the seeded random source

#[cfg(test)]
mod tests {

    use cavetown::algorithm::random::RandomSource;

    // Tests identical seeds produce identical sequences
    // Verified by seeding from entropy instead of the seed
    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = RandomSource::new(7);
        let mut b = RandomSource::new(7);

        for _ in 0..100 {
            assert_eq!(a.next_unit().to_bits(), b.next_unit().to_bits());
            assert_eq!(a.next_in_range(5, 45), b.next_in_range(5, 45));
        }
    }

    // Tests unit draws stay in [0, 1)
    // Verified by scaling draws by two
    #[test]
    fn test_next_unit_range() {
        let mut rng = RandomSource::new(1);
        for _ in 0..1000 {
            let value = rng.next_unit();
            assert!((0.0..1.0).contains(&value), "{value} outside [0, 1)");
        }
    }

    // Tests closed ranges reach both endpoints and nothing outside
    // Verified by using a half-open range
    #[test]
    fn test_next_in_range_is_inclusive() {
        let mut rng = RandomSource::new(3);
        let mut seen = [false; 3];

        for _ in 0..1000 {
            let value = rng.next_in_range(1, 3);
            assert!((1..=3).contains(&value));
            if let Some(slot) = seen.get_mut(value - 1) {
                *slot = true;
            }
        }

        assert_eq!(seen, [true, true, true]);
    }

    // Tests degenerate ranges return the lower bound
    // Verified by removing the empty range guard
    #[test]
    fn test_next_in_range_degenerate() {
        let mut rng = RandomSource::new(9);
        assert_eq!(rng.next_in_range(5, 5), 5);
        assert_eq!(rng.next_in_range(6, 2), 6);
    }
}
