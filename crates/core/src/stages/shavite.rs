//! SHAvite-512
//!
//! AES-round Feistel over a 512-bit chaining value, 128-byte message blocks.
//! The key schedule expands each block into 448 words, alternating AES-round
//! nonlinear steps (with bit-counter injection) and linear taps; compression
//! is fourteen rounds of two four-round AES branches with a Davies-Meyer
//! feed-forward.

use super::aes::aes_round_nokey;

const BLOCK: usize = 128;
const ROUNDS: usize = 14;
const SCHEDULE: usize = ROUNDS * 8 * 4; // 448 words, 8 AES keys per round

#[rustfmt::skip]
const IV: [u32; 16] = [
    0x72fccdd8, 0x79ca4727, 0x128a077b, 0x40d55aec, 0xd1901a06, 0x430ae307, 0xb29f5cd1, 0xdf07fbfc,
    0x8e45d73d, 0x681ab538, 0xbde86578, 0xdd577e47, 0xe275eade, 0x502d9fcd, 0xb9357178, 0x022a4b9a,
];

/// Expand one message block into the full round-key schedule.
fn key_schedule(block: &[u8; BLOCK], counter: u128) -> [u32; SCHEDULE] {
    let mut w = [0u32; SCHEDULE];
    for i in 0..32 {
        w[i] = u32::from_le_bytes(block[i * 4..i * 4 + 4].try_into().expect("4-byte word"));
    }

    let cnt = [
        counter as u32,
        (counter >> 32) as u32,
        (counter >> 64) as u32,
        (counter >> 96) as u32,
    ];

    let mut j = 32;
    while j < SCHEDULE {
        if j % 32 == 0 {
            // Nonlinear step: one AES round over the previous four words,
            // bit counter injected alternately plain and complemented.
            let mut buf = [0u8; 16];
            for t in 0..4 {
                buf[t * 4..t * 4 + 4].copy_from_slice(&w[j - 4 + t].to_le_bytes());
            }
            let enc = aes_round_nokey(&buf);
            let span = j / 32;
            for t in 0..4 {
                let mut v = u32::from_le_bytes(enc[t * 4..t * 4 + 4].try_into().expect("word"))
                    ^ w[j + t - 32];
                if span % 2 == 1 {
                    v ^= cnt[(span / 2 + t) % 4];
                } else {
                    v ^= !cnt[(span / 2 + t) % 4];
                }
                w[j + t] = v;
            }
            j += 4;
        } else {
            w[j] = w[j - 32] ^ w[j - 7] ^ w[j - 3].rotate_left(2);
            j += 1;
        }
    }
    w
}

/// Four AES rounds keyed from consecutive schedule words.
#[inline]
fn f4(input: &[u8; 16], keys: &[u32]) -> [u8; 16] {
    let mut state = *input;
    for r in 0..4 {
        let mut key = [0u8; 16];
        for t in 0..4 {
            key[t * 4..t * 4 + 4].copy_from_slice(&keys[r * 4 + t].to_le_bytes());
        }
        for b in 0..16 {
            state[b] ^= key[b];
        }
        state = aes_round_nokey(&state);
    }
    state
}

fn compress(chaining: &mut [u8; 64], block: &[u8; BLOCK], counter: u128) {
    let w = key_schedule(block, counter);

    let mut p: [[u8; 16]; 4] = [
        chaining[0..16].try_into().expect("quarter"),
        chaining[16..32].try_into().expect("quarter"),
        chaining[32..48].try_into().expect("quarter"),
        chaining[48..64].try_into().expect("quarter"),
    ];

    for r in 0..ROUNDS {
        let base = r * 32;
        let x = f4(&p[1], &w[base..base + 16]);
        for b in 0..16 {
            p[0][b] ^= x[b];
        }
        let y = f4(&p[3], &w[base + 16..base + 32]);
        for b in 0..16 {
            p[2][b] ^= y[b];
        }
        p.rotate_right(1);
    }

    for (i, quarter) in p.iter().enumerate() {
        for b in 0..16 {
            chaining[i * 16 + b] ^= quarter[b];
        }
    }
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    let mut chaining = [0u8; 64];
    for (i, word) in IV.iter().enumerate() {
        chaining[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }

    let total_bits = (input.len() as u128).wrapping_mul(8);
    let mut absorbed: u128 = 0;

    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        absorbed += 8 * BLOCK as u128;
        compress(
            &mut chaining,
            chunk.try_into().expect("exact 128-byte chunk"),
            absorbed,
        );
    }

    // Padding: 0x80, zeros, 128-bit bit count, 16-bit digest size.
    let rem = chunks.remainder();
    let mut tail = [0u8; 2 * BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    let blocks = if rem.len() + 1 + 18 > BLOCK { 2 } else { 1 };
    let end = blocks * BLOCK;
    tail[end - 18..end - 2].copy_from_slice(&total_bits.to_le_bytes());
    tail[end - 2..end].copy_from_slice(&512u16.to_le_bytes());

    for i in 0..blocks {
        let data_bits = 8 * rem.len().saturating_sub(i * BLOCK).min(BLOCK) as u128;
        let counter = if data_bits == 0 { 0 } else { absorbed + data_bits };
        compress(
            &mut chaining,
            tail[i * BLOCK..(i + 1) * BLOCK].try_into().expect("block"),
            counter,
        );
    }

    chaining
}
