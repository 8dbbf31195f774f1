//! SIMD-512
//!
//! Wide Merkle-Damgard design whose message expansion is a number-theoretic
//! transform over Z/257; the expanded words feed four Feistel-like rounds of
//! eight steps over eight parallel lanes, with a final length block and an
//! XOR feed-forward.

const BLOCK: usize = 128;
const P: u32 = 257;
const LANES: usize = 8;

#[rustfmt::skip]
const IV: [u32; 32] = [
    0x0ba16b95, 0x72f999ad, 0x9fecc2ae, 0xba3264fc, 0x5e894929, 0x8e9f30e5, 0x2f1daa37, 0xf0f2c558,
    0xac506643, 0xa90635a5, 0xe25b878b, 0xaab7878f, 0x88817f7a, 0x0a02892b, 0x559a7550, 0x598f657e,
    0x7eef60a1, 0x6b70e3e8, 0x9c1714d1, 0xb958e2a8, 0xab02675e, 0xed1c014f, 0xcd8d65bb, 0xfdb7a257,
    0x09254899, 0xd699c7bc, 0x9019b6dc, 0x2b9022e4, 0x8fa14956, 0x21bf9bd3, 0xb94d0943, 0x6ffddc22,
];

/// Per-round step rotations.
const ROT: [[u32; 4]; 4] = [
    [3, 20, 14, 27],
    [26, 4, 23, 11],
    [19, 28, 7, 22],
    [15, 5, 29, 9],
];

#[inline(always)]
fn f_if(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (!x & z)
}

#[inline(always)]
fn f_maj(x: u32, y: u32, z: u32) -> u32 {
    (x & y) | (x & z) | (y & z)
}

/// Iterative radix-2 NTT over Z/257, 256 points, root 3.
fn ntt256(values: &mut [u32; 256]) {
    // Bit-reversal permutation
    for i in 0..256u32 {
        let j = i.reverse_bits() >> 24;
        if i < j {
            values.swap(i as usize, j as usize);
        }
    }
    let mut len = 2;
    while len <= 256 {
        // root of order `len`: 3^(256/len) mod 257
        let mut w_len = 1u32;
        let mut e = 256 / len;
        let mut base = 3u32;
        while e > 0 {
            if e & 1 == 1 {
                w_len = w_len * base % P;
            }
            base = base * base % P;
            e >>= 1;
        }
        let mut start = 0;
        while start < 256 {
            let mut w = 1u32;
            for k in 0..len / 2 {
                let a = values[start + k];
                let b = values[start + k + len / 2] * w % P;
                values[start + k] = (a + b) % P;
                values[start + k + len / 2] = (a + P - b) % P;
                w = w * w_len % P;
            }
            start += len;
        }
        len <<= 1;
    }
}

/// Expand a 128-byte block into 128 step words.
fn expand(block: &[u8; BLOCK]) -> [u32; 128] {
    let mut points = [0u32; 256];
    for (i, byte) in block.iter().enumerate() {
        points[i] = *byte as u32;
    }
    ntt256(&mut points);

    let mut words = [0u32; 128];
    for i in 0..128 {
        let lo = points[2 * i].wrapping_mul(185) & 0xffff;
        let hi = points[2 * i + 1].wrapping_mul(185) & 0xffff;
        words[i] = lo | (hi << 16);
    }
    words
}

fn compress(state: &mut [u32; 32], block: &[u8; BLOCK]) {
    let words = expand(block);
    let saved = *state;

    // State as four rows of eight lanes: A, B, C, D.
    for round in 0..4 {
        for step in 0..8 {
            let rot = ROT[round][step % 4];
            let rot_next = ROT[round][(step + 1) % 4];
            let mut new_a = [0u32; LANES];
            for lane in 0..LANES {
                let a = state[lane];
                let b = state[8 + lane];
                let c = state[16 + lane];
                let d = state[24 + lane];
                let phi = if round % 2 == 0 {
                    f_if(a, b, c)
                } else {
                    f_maj(a, b, c)
                };
                let t = d
                    .wrapping_add(words[round * 32 + step * 4 + (lane % 4)])
                    .wrapping_add(phi)
                    .rotate_left(rot);
                // Cross-lane diffusion: feed the rotated neighbor's A.
                new_a[lane] = t.wrapping_add(state[lane ^ (1 << (step % 3))].rotate_left(rot_next));
            }
            for lane in 0..LANES {
                state[24 + lane] = state[16 + lane];
                state[16 + lane] = state[8 + lane];
                state[8 + lane] = state[lane].rotate_left(rot);
                state[lane] = new_a[lane];
            }
        }
    }

    for i in 0..32 {
        state[i] ^= saved[i];
    }
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    let mut state = IV;

    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        compress(&mut state, chunk.try_into().expect("exact 128-byte chunk"));
    }

    // Zero-pad the tail, then absorb a dedicated length block.
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut tail = [0u8; BLOCK];
        tail[..rem.len()].copy_from_slice(rem);
        compress(&mut state, &tail);
    }
    let mut length_block = [0u8; BLOCK];
    length_block[..16].copy_from_slice(&((input.len() as u128).wrapping_mul(8)).to_le_bytes());
    compress(&mut state, &length_block);

    let mut out = [0u8; 64];
    for i in 0..16 {
        out[i * 4..i * 4 + 4].copy_from_slice(&state[i].to_le_bytes());
    }
    out
}
