//! Random index generation backed by the operating system's secure source.

/// Largest pool `next_index` can address: indices are reduced from single
/// random bytes.
pub const MAX_POOL: usize = 256;

#[inline]
fn random_byte() -> u8 {
    let mut buf = [0u8; 1];
    getrandom::fill(&mut buf).expect("failed to read OS entropy source");
    buf[0]
}

/// Uniform random index in `[0, max)`, for `max` in `[1, 256]`.
///
/// Draws one byte per attempt and rejects bytes past the largest multiple
/// of `max`, so no value is over-represented by the reduction.
pub fn next_index(max: usize) -> usize {
    debug_assert!(max >= 1 && max <= MAX_POOL);

    let zone = 256 - (256 % max);
    loop {
        let byte = random_byte() as usize;
        if byte < zone {
            return byte % max;
        }
    }
}
