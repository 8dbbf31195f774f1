//! ECHO-512
//!
//! AES-based wide-pipe design: a 4x4 matrix of 128-bit words (eight chaining
//! words, eight message words), transformed by ten rounds of big-state
//! SubWords / ShiftRows / MixColumns, with the round keys derived from a
//! running counter of processed message bits.

use super::aes::{aes_round, gf_mul2, gf_mul3};

const BLOCK: usize = 128;
const ROUNDS: usize = 10;

type Word = [u8; 16];

/// Two AES rounds per word: the first keyed with the running counter, the
/// second with the (zero) salt.
#[inline]
fn sub_words(state: &mut [Word; 16], counter: &mut u64) {
    for word in state.iter_mut() {
        let mut key = [0u8; 16];
        key[..8].copy_from_slice(&counter.to_le_bytes());
        *word = aes_round(word, &key);
        *word = aes_round(word, &[0u8; 16]);
        *counter = counter.wrapping_add(1);
    }
}

/// Rotate row `r` of the 4x4 word matrix left by `r` positions
/// (column-major storage: `state[col * 4 + row]`).
#[inline]
fn big_shift_rows(state: &mut [Word; 16]) {
    let old = *state;
    for row in 0..4 {
        for col in 0..4 {
            state[col * 4 + row] = old[((col + row) % 4) * 4 + row];
        }
    }
}

/// AES MixColumns applied byte-wise across each column of four words.
#[inline]
fn big_mix_columns(state: &mut [Word; 16]) {
    for col in 0..4 {
        let base = col * 4;
        for b in 0..16 {
            let a0 = state[base][b];
            let a1 = state[base + 1][b];
            let a2 = state[base + 2][b];
            let a3 = state[base + 3][b];
            state[base][b] = gf_mul2(a0) ^ gf_mul3(a1) ^ a2 ^ a3;
            state[base + 1][b] = a0 ^ gf_mul2(a1) ^ gf_mul3(a2) ^ a3;
            state[base + 2][b] = a0 ^ a1 ^ gf_mul2(a2) ^ gf_mul3(a3);
            state[base + 3][b] = gf_mul3(a0) ^ a1 ^ a2 ^ gf_mul2(a3);
        }
    }
}

fn compress(chaining: &mut [Word; 8], block: &[u8; BLOCK], counter_bits: u64) {
    let mut state = [[0u8; 16]; 16];
    state[..8].copy_from_slice(chaining);
    for (i, word) in state[8..].iter_mut().enumerate() {
        word.copy_from_slice(&block[i * 16..(i + 1) * 16]);
    }

    let mut counter = counter_bits;
    for _ in 0..ROUNDS {
        sub_words(&mut state, &mut counter);
        big_shift_rows(&mut state);
        big_mix_columns(&mut state);
    }

    // Feed-forward: fold the wide state back onto the chaining half.
    for j in 0..8 {
        let mut word = chaining[j];
        for b in 0..16 {
            word[b] ^= block[j * 16 + b] ^ state[j][b] ^ state[j + 8][b];
        }
        chaining[j] = word;
    }
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    // Chaining IV: every word carries the output size in bits.
    let mut chaining = [[0u8; 16]; 8];
    for word in chaining.iter_mut() {
        word[..2].copy_from_slice(&512u16.to_le_bytes());
    }

    let total_bits = (input.len() as u128).wrapping_mul(8);
    let mut absorbed_bits: u64 = 0;

    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        absorbed_bits = absorbed_bits.wrapping_add(8 * BLOCK as u64);
        compress(
            &mut chaining,
            chunk.try_into().expect("exact 128-byte chunk"),
            absorbed_bits,
        );
    }

    // Padding: 0x80, zeros, 16-bit output size, 128-bit message length.
    let rem = chunks.remainder();
    let mut tail = [0u8; 2 * BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    let blocks = if rem.len() + 1 + 18 > BLOCK { 2 } else { 1 };
    let end = blocks * BLOCK;
    tail[end - 18..end - 16].copy_from_slice(&512u16.to_le_bytes());
    tail[end - 16..end].copy_from_slice(&total_bits.to_le_bytes());

    for i in 0..blocks {
        // Pad-only data does not advance the bit counter.
        let data_bits = 8 * rem.len().saturating_sub(i * BLOCK).min(BLOCK) as u64;
        let counter = if data_bits == 0 {
            0
        } else {
            absorbed_bits.wrapping_add(data_bits)
        };
        compress(
            &mut chaining,
            tail[i * BLOCK..(i + 1) * BLOCK].try_into().expect("block"),
            counter,
        );
    }

    let mut out = [0u8; 64];
    for i in 0..4 {
        out[i * 16..(i + 1) * 16].copy_from_slice(&chaining[i]);
    }
    out
}
