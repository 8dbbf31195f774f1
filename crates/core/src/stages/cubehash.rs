//! CubeHash16/32-512
//!
//! State is 32 little-endian u32 words. Parameters: 16 rounds per 32-byte
//! block, 10x16 initialization and finalization rounds. The initial state is
//! produced by running the initialization rounds over the parameter block,
//! which is equivalent to the published IV.

const ROUNDS: usize = 16;
const BLOCK: usize = 32;
const OUT: usize = 64;

#[inline(always)]
fn round(x: &mut [u32; 32]) {
    for i in 0..16 {
        x[16 + i] = x[16 + i].wrapping_add(x[i]);
    }
    for i in 0..16 {
        x[i] = x[i].rotate_left(7);
    }
    for i in 0..8 {
        x.swap(i, i + 8);
    }
    for i in 0..16 {
        x[i] ^= x[16 + i];
    }
    for i in (16..32).step_by(4) {
        x.swap(i, i + 2);
        x.swap(i + 1, i + 3);
    }
    for i in 0..16 {
        x[16 + i] = x[16 + i].wrapping_add(x[i]);
    }
    for i in 0..16 {
        x[i] = x[i].rotate_left(11);
    }
    for i in 0..4 {
        x.swap(i, i + 4);
        x.swap(i + 8, i + 12);
    }
    for i in 0..16 {
        x[i] ^= x[16 + i];
    }
    for i in (16..32).step_by(2) {
        x.swap(i, i + 1);
    }
}

fn init_state() -> [u32; 32] {
    let mut x = [0u32; 32];
    x[0] = OUT as u32; // h/8
    x[1] = BLOCK as u32;
    x[2] = ROUNDS as u32;
    for _ in 0..10 * ROUNDS {
        round(&mut x);
    }
    x
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    let mut x = init_state();

    // Absorb full blocks, then the padded tail (0x80, zero-filled).
    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        absorb(&mut x, chunk.try_into().expect("exact 32-byte chunk"));
    }
    let rem = chunks.remainder();
    let mut tail = [0u8; BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    absorb(&mut x, &tail);

    // Finalize
    x[31] ^= 1;
    for _ in 0..10 * ROUNDS {
        round(&mut x);
    }

    let mut out = [0u8; 64];
    for (i, word) in x.iter().take(16).enumerate() {
        out[i * 4..i * 4 + 4].copy_from_slice(&word.to_le_bytes());
    }
    out
}

#[inline]
fn absorb(x: &mut [u32; 32], block: &[u8; BLOCK]) {
    for i in 0..BLOCK / 4 {
        x[i] ^= u32::from_le_bytes(block[i * 4..i * 4 + 4].try_into().expect("4-byte word"));
    }
    for _ in 0..ROUNDS {
        round(x);
    }
}
