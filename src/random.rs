use rand::SeedableRng;
use rand::rngs::SmallRng;

/// Generator for stream `stream` of a render seeded with `seed`
///
/// Streams are independent of each other and of the order they are created
/// in, so work split over threads draws the same numbers on every run.
#[inline(always)]
pub fn seeded_rng(seed: u64, stream: u64) -> SmallRng {
    // splitmix64 step to decorrelate neighbouring streams
    let mut z = seed ^ stream.wrapping_add(1).wrapping_mul(0x9E37_79B9_7F4A_7C15);
    z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
    z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);

    SmallRng::seed_from_u64(z ^ (z >> 31))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::distributions::Standard;

    #[test]
    fn same_stream_repeats() {
        let a: Vec<u32> = seeded_rng(7, 3).sample_iter(Standard).take(8).collect();
        let b: Vec<u32> = seeded_rng(7, 3).sample_iter(Standard).take(8).collect();

        assert_eq!(a, b);
    }

    #[test]
    fn streams_differ() {
        let a: u64 = seeded_rng(7, 3).gen_range(0..u64::MAX);
        let b: u64 = seeded_rng(7, 4).gen_range(0..u64::MAX);
        let c: u64 = seeded_rng(8, 3).gen_range(0..u64::MAX);

        assert_ne!(a, b);
        assert_ne!(a, c);
    }
}
