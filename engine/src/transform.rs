//! The reversible digit-pair transform applied to entered codes.
//!
//! The transform swaps each digit in the first half of the code with its
//! counterpart in the second half while incrementing both, wrapping 9 back
//! to 0. For odd lengths the middle digit belongs to neither half and is
//! never touched. Applying [`inverse`] to the output of [`forward`]
//! reproduces the original code exactly.

use pinlock_types::Code;

/// Apply the forward ("encrypt") transform.
///
/// With `n = ceil(LEN / 2)`, position `i` of the result holds the
/// incremented digit from position `i + n` of the input and vice versa, for
/// `i` in `0..floor(LEN / 2)`. Both sides of each pair are computed from
/// the input, so the swap always reads original values.
#[must_use]
pub fn forward<const LEN: usize>(code: &Code<LEN>) -> Code<LEN> {
    let old = code.digits();
    let mut new = *old;
    let n = LEN.div_ceil(2);
    for i in 0..LEN / 2 {
        new[i] = (old[i + n] + 1) % 10;
        new[i + n] = (old[i] + 1) % 10;
    }
    Code::from_digits(new)
}

/// Apply the inverse ("decrypt") transform, the exact inverse of [`forward`].
///
/// Decrements instead of increments (wrapping 0 back to 9) on the same
/// index pairs, so `inverse(forward(c)) == c` for every valid code.
#[must_use]
pub fn inverse<const LEN: usize>(code: &Code<LEN>) -> Code<LEN> {
    let old = code.digits();
    let mut new = *old;
    let n = LEN.div_ceil(2);
    for i in 0..LEN / 2 {
        new[i] = (old[i + n] + 9) % 10;
        new[i + n] = (old[i] + 9) % 10;
    }
    Code::from_digits(new)
}
