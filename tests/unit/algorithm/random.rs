//! Tests for chunk seed derivation and the seeded selector

#[cfg(test)]
mod tests {
    use edgetile::algorithm::random::{RandomSelector, derive_chunk_seed};

    // Tests derivation is a pure function of seed and coordinates
    // Verified by mixing in a process-random hasher state
    #[test]
    fn test_chunk_seed_is_stable() {
        assert_eq!(derive_chunk_seed("123", 0, 0), derive_chunk_seed("123", 0, 0));
        assert_ne!(derive_chunk_seed("123", 0, 0), derive_chunk_seed("123", 1, 0));
        assert_ne!(derive_chunk_seed("123", 1, 0), derive_chunk_seed("123", 0, 1));
        assert_ne!(derive_chunk_seed("123", 0, 0), derive_chunk_seed("124", 0, 0));
        assert_ne!(derive_chunk_seed("1", 23, 0), derive_chunk_seed("12", 3, 0));
    }

    // Tests the FNV-1a offset basis is used for empty input
    // Verified by starting the fold from zero
    #[test]
    fn test_fnv_known_value() {
        // FNV-1a of ":0:0"
        let expected = ":0:0"
            .bytes()
            .fold(0xcbf2_9ce4_8422_2325_u64, |hash, byte| {
                (hash ^ u64::from(byte)).wrapping_mul(0x0000_0100_0000_01b3)
            });
        assert_eq!(derive_chunk_seed("", 0, 0), expected);
    }

    // Tests equal seeds produce equal choice sequences
    // Verified by seeding from the system clock
    #[test]
    fn test_selector_determinism() {
        let mut a = RandomSelector::for_chunk("world", 3, -2);
        let mut b = RandomSelector::for_chunk("world", 3, -2);

        let seq_a: Vec<_> = (0..32).map(|_| a.choose_index(17)).collect();
        let seq_b: Vec<_> = (0..32).map(|_| b.choose_index(17)).collect();
        assert_eq!(seq_a, seq_b);
        assert!(seq_a.iter().all(|choice| choice.is_some_and(|c| c < 17)));
    }

    // Tests trivial choices consume no draws
    // Verified by drawing for single-option choices
    #[test]
    fn test_choose_index_draw_counting() {
        let mut selector = RandomSelector::new(99);

        assert_eq!(selector.choose_index(0), None);
        assert_eq!(selector.choose_index(1), Some(0));
        assert_eq!(selector.draws(), 0);

        selector.choose_index(2);
        selector.choose_index(5);
        assert_eq!(selector.draws(), 2);
    }
}
