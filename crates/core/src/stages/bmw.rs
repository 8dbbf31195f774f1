//! BMW-512 (Blue Midnight Wish)
//!
//! 128-byte little-endian blocks, 16-word chaining value. The final block is
//! followed by the constant-keyed output transform; the digest is the last
//! eight words of that transform.

const BLOCK: usize = 128;

#[inline(always)]
fn s0(x: u64) -> u64 {
    (x >> 1) ^ (x << 3) ^ x.rotate_left(4) ^ x.rotate_left(37)
}

#[inline(always)]
fn s1(x: u64) -> u64 {
    (x >> 1) ^ (x << 2) ^ x.rotate_left(13) ^ x.rotate_left(43)
}

#[inline(always)]
fn s2(x: u64) -> u64 {
    (x >> 2) ^ (x << 1) ^ x.rotate_left(19) ^ x.rotate_left(53)
}

#[inline(always)]
fn s3(x: u64) -> u64 {
    (x >> 2) ^ (x << 2) ^ x.rotate_left(28) ^ x.rotate_left(59)
}

#[inline(always)]
fn s4(x: u64) -> u64 {
    (x >> 1) ^ x
}

#[inline(always)]
fn s5(x: u64) -> u64 {
    (x >> 2) ^ x
}

const R: [u32; 7] = [5, 11, 27, 32, 37, 43, 53];

#[inline(always)]
fn r(x: u64, i: usize) -> u64 {
    x.rotate_left(R[i - 1])
}

#[inline(always)]
fn k(j: u64) -> u64 {
    j.wrapping_mul(0x0555555555555555)
}

/// First-pass quadruple words: signed sums over five (m ^ h) terms, one
/// fixed sign pattern per output word.
fn f0(m: &[u64; 16], h: &[u64; 16]) -> [u64; 16] {
    let g = |i: usize| m[i] ^ h[i];
    let w = [
        g(5).wrapping_sub(g(7))
            .wrapping_add(g(10))
            .wrapping_add(g(13))
            .wrapping_add(g(14)),
        g(6).wrapping_sub(g(8))
            .wrapping_add(g(11))
            .wrapping_add(g(14))
            .wrapping_sub(g(15)),
        g(0).wrapping_add(g(7))
            .wrapping_add(g(9))
            .wrapping_sub(g(12))
            .wrapping_add(g(15)),
        g(0).wrapping_sub(g(1))
            .wrapping_add(g(8))
            .wrapping_sub(g(10))
            .wrapping_add(g(13)),
        g(1).wrapping_add(g(2))
            .wrapping_add(g(9))
            .wrapping_sub(g(11))
            .wrapping_sub(g(14)),
        g(3).wrapping_sub(g(2))
            .wrapping_add(g(10))
            .wrapping_sub(g(12))
            .wrapping_add(g(15)),
        g(4).wrapping_sub(g(0))
            .wrapping_sub(g(3))
            .wrapping_sub(g(11))
            .wrapping_add(g(13)),
        g(1).wrapping_sub(g(4))
            .wrapping_sub(g(5))
            .wrapping_sub(g(12))
            .wrapping_sub(g(14)),
        g(2).wrapping_sub(g(5))
            .wrapping_sub(g(6))
            .wrapping_add(g(13))
            .wrapping_sub(g(15)),
        g(0).wrapping_sub(g(3))
            .wrapping_add(g(6))
            .wrapping_sub(g(7))
            .wrapping_add(g(14)),
        g(8).wrapping_sub(g(1))
            .wrapping_sub(g(4))
            .wrapping_sub(g(7))
            .wrapping_add(g(15)),
        g(8).wrapping_sub(g(0))
            .wrapping_sub(g(2))
            .wrapping_sub(g(5))
            .wrapping_add(g(9)),
        g(1).wrapping_add(g(3))
            .wrapping_sub(g(6))
            .wrapping_sub(g(9))
            .wrapping_add(g(10)),
        g(2).wrapping_add(g(4))
            .wrapping_add(g(7))
            .wrapping_add(g(10))
            .wrapping_add(g(11)),
        g(3).wrapping_sub(g(5))
            .wrapping_add(g(8))
            .wrapping_sub(g(11))
            .wrapping_sub(g(12)),
        g(12).wrapping_sub(g(4))
            .wrapping_sub(g(6))
            .wrapping_sub(g(9))
            .wrapping_add(g(13)),
    ];

    let mut q = [0u64; 16];
    for i in 0..16 {
        let s = match i % 5 {
            0 => s0(w[i]),
            1 => s1(w[i]),
            2 => s2(w[i]),
            3 => s3(w[i]),
            _ => s4(w[i]),
        };
        q[i] = s.wrapping_add(h[(i + 1) % 16]);
    }
    q
}

#[inline]
fn add_element(m: &[u64; 16], h: &[u64; 16], j: usize) -> u64 {
    let a = m[j % 16].rotate_left((j % 16) as u32 + 1);
    let b = m[(j + 3) % 16].rotate_left(((j + 3) % 16) as u32 + 1);
    let c = m[(j + 10) % 16].rotate_left(((j + 10) % 16) as u32 + 1);
    a.wrapping_add(b)
        .wrapping_sub(c)
        .wrapping_add(k(j as u64 + 16))
        ^ h[(j + 7) % 16]
}

fn expand1(q: &[u64; 32], m: &[u64; 16], h: &[u64; 16], i: usize) -> u64 {
    let mut acc = 0u64;
    for t in 0..16 {
        let x = q[i - 16 + t];
        acc = acc.wrapping_add(match t % 4 {
            0 => s1(x),
            1 => s2(x),
            2 => s3(x),
            _ => s0(x),
        });
    }
    acc.wrapping_add(add_element(m, h, i - 16))
}

fn expand2(q: &[u64; 32], m: &[u64; 16], h: &[u64; 16], i: usize) -> u64 {
    let mut acc = q[i - 16];
    acc = acc.wrapping_add(r(q[i - 15], 1));
    acc = acc.wrapping_add(q[i - 14]);
    acc = acc.wrapping_add(r(q[i - 13], 2));
    acc = acc.wrapping_add(q[i - 12]);
    acc = acc.wrapping_add(r(q[i - 11], 3));
    acc = acc.wrapping_add(q[i - 10]);
    acc = acc.wrapping_add(r(q[i - 9], 4));
    acc = acc.wrapping_add(q[i - 8]);
    acc = acc.wrapping_add(r(q[i - 7], 5));
    acc = acc.wrapping_add(q[i - 6]);
    acc = acc.wrapping_add(r(q[i - 5], 6));
    acc = acc.wrapping_add(q[i - 4]);
    acc = acc.wrapping_add(r(q[i - 3], 7));
    acc = acc.wrapping_add(s4(q[i - 2]));
    acc = acc.wrapping_add(s5(q[i - 1]));
    acc.wrapping_add(add_element(m, h, i - 16))
}

fn compress(m: &[u64; 16], h: &[u64; 16]) -> [u64; 16] {
    let mut q = [0u64; 32];
    q[..16].copy_from_slice(&f0(m, h));
    for i in 16..18 {
        q[i] = expand1(&q, m, h, i);
    }
    for i in 18..32 {
        q[i] = expand2(&q, m, h, i);
    }

    let xl = q[16] ^ q[17] ^ q[18] ^ q[19] ^ q[20] ^ q[21] ^ q[22] ^ q[23];
    let xh = xl ^ q[24] ^ q[25] ^ q[26] ^ q[27] ^ q[28] ^ q[29] ^ q[30] ^ q[31];

    let mut out = [0u64; 16];
    out[0] = ((xh << 5) ^ (q[16] >> 5) ^ m[0]).wrapping_add(xl ^ q[24] ^ q[0]);
    out[1] = ((xh >> 7) ^ (q[17] << 8) ^ m[1]).wrapping_add(xl ^ q[25] ^ q[1]);
    out[2] = ((xh >> 5) ^ (q[18] << 5) ^ m[2]).wrapping_add(xl ^ q[26] ^ q[2]);
    out[3] = ((xh >> 1) ^ (q[19] << 5) ^ m[3]).wrapping_add(xl ^ q[27] ^ q[3]);
    out[4] = ((xh >> 3) ^ q[20] ^ m[4]).wrapping_add(xl ^ q[28] ^ q[4]);
    out[5] = ((xh << 6) ^ (q[21] >> 6) ^ m[5]).wrapping_add(xl ^ q[29] ^ q[5]);
    out[6] = ((xh >> 4) ^ (q[22] << 6) ^ m[6]).wrapping_add(xl ^ q[30] ^ q[6]);
    out[7] = ((xh >> 11) ^ (q[23] << 2) ^ m[7]).wrapping_add(xl ^ q[31] ^ q[7]);
    out[8] = out[4]
        .rotate_left(9)
        .wrapping_add(xh ^ q[24] ^ m[8])
        .wrapping_add((xl << 8) ^ q[23] ^ q[8]);
    out[9] = out[5]
        .rotate_left(10)
        .wrapping_add(xh ^ q[25] ^ m[9])
        .wrapping_add((xl >> 6) ^ q[16] ^ q[9]);
    out[10] = out[6]
        .rotate_left(11)
        .wrapping_add(xh ^ q[26] ^ m[10])
        .wrapping_add((xl << 6) ^ q[17] ^ q[10]);
    out[11] = out[7]
        .rotate_left(12)
        .wrapping_add(xh ^ q[27] ^ m[11])
        .wrapping_add((xl << 4) ^ q[18] ^ q[11]);
    out[12] = out[0]
        .rotate_left(13)
        .wrapping_add(xh ^ q[28] ^ m[12])
        .wrapping_add((xl >> 3) ^ q[19] ^ q[12]);
    out[13] = out[1]
        .rotate_left(14)
        .wrapping_add(xh ^ q[29] ^ m[13])
        .wrapping_add((xl >> 4) ^ q[20] ^ q[13]);
    out[14] = out[2]
        .rotate_left(15)
        .wrapping_add(xh ^ q[30] ^ m[14])
        .wrapping_add((xl >> 7) ^ q[21] ^ q[14]);
    out[15] = out[3]
        .rotate_left(16)
        .wrapping_add(xh ^ q[31] ^ m[15])
        .wrapping_add((xl >> 2) ^ q[22] ^ q[15]);
    out
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    // IV words are built from consecutive byte values 0x80..0xFF.
    let mut h = [0u64; 16];
    for (i, word) in h.iter_mut().enumerate() {
        let base = 0x80 + (i as u64) * 8;
        let mut v = 0u64;
        for b in 0..8 {
            v = (v << 8) | (base + b);
        }
        *word = v;
    }

    let bit_len = (input.len() as u64).wrapping_mul(8);

    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        h = compress(&load(chunk.try_into().expect("exact 128-byte chunk")), &h);
    }

    // Padding: 0x80, zeros, 64-bit bit length little-endian.
    let rem = chunks.remainder();
    let mut tail = [0u8; 2 * BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    let blocks = if rem.len() + 9 > BLOCK { 2 } else { 1 };
    tail[blocks * BLOCK - 8..blocks * BLOCK].copy_from_slice(&bit_len.to_le_bytes());
    for i in 0..blocks {
        h = compress(
            &load(tail[i * BLOCK..(i + 1) * BLOCK].try_into().expect("block")),
            &h,
        );
    }

    // Output transform: compress the chaining value under the constant key.
    let mut cst = [0u64; 16];
    for (i, word) in cst.iter_mut().enumerate() {
        *word = 0xaaaaaaaaaaaaaaa0 + i as u64;
    }
    let fin = compress(&h, &cst);

    let mut out = [0u8; 64];
    for i in 0..8 {
        out[i * 8..i * 8 + 8].copy_from_slice(&fin[8 + i].to_le_bytes());
    }
    out
}

#[inline]
fn load(block: &[u8; BLOCK]) -> [u64; 16] {
    let mut m = [0u64; 16];
    for i in 0..16 {
        m[i] = u64::from_le_bytes(block[i * 8..i * 8 + 8].try_into().expect("8-byte word"));
    }
    m
}
