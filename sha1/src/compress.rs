//! The SHA-1 round function, pure Rust (no assembly fast path).

use bitutil::rotl32;
use byte_tools::read_u32_be;
use generic_array::typenum::U64;
use generic_array::GenericArray;

use crate::consts::K;

fn f(t: usize, b: u32, c: u32, d: u32) -> u32 {
    match t {
        0..=19 => (b & c) | ((!b) & d),
        20..=39 => b ^ c ^ d,
        40..=59 => (b & c) | (b & d) | (c & d),
        _ => b ^ c ^ d,
    }
}

/// Expands one 64-byte block into the 80-word message schedule and folds
/// it into `state` via the 80-step round function.
pub(crate) fn compress(state: &mut [u32; 5], block: &GenericArray<u8, U64>) {
    let mut w = [0u32; 80];
    for (i, word) in w.iter_mut().take(16).enumerate() {
        *word = read_u32_be(&block[4 * i..4 * i + 4]);
    }
    for t in 16..80 {
        w[t] = rotl32(w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16], 1);
    }

    let [mut a, mut b, mut c, mut d, mut e] = *state;

    for t in 0..80 {
        let k = K[t / 20];
        let temp = rotl32(a, 5)
            .wrapping_add(f(t, b, c, d))
            .wrapping_add(e)
            .wrapping_add(k)
            .wrapping_add(w[t]);
        e = d;
        d = c;
        c = rotl32(b, 30);
        b = a;
        a = temp;
    }

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}
