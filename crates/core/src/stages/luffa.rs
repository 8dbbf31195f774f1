//! Luffa-512
//!
//! Five-lane sponge over 256-bit lanes. Every 32-byte block is injected into
//! all lanes through the ring multiplication `M2`, then each lane runs its
//! own eight-step permutation. Output is two 32-byte squeezes separated by a
//! blank round.

const BLOCK: usize = 32;
const LANES: usize = 5;
const STEPS: usize = 8;

#[rustfmt::skip]
const IV: [[u32; 8]; LANES] = [
    [0x6d251e69, 0x44b051e0, 0x4eaa6fb4, 0xdbf78465, 0x6e292011, 0x90152df4, 0xee058139, 0xdef610bb],
    [0xc3b44b95, 0xd9d2f256, 0x70eee9a0, 0xde099fa3, 0x5d9b0557, 0x8fc944b3, 0xcf1ccf0e, 0x746cd581],
    [0xf7efc89d, 0x5dba5781, 0x04016ce5, 0xad659c05, 0x0306194f, 0x666d1836, 0x24aa230a, 0x8b264ae7],
    [0x858075d5, 0x36d79cce, 0xe571f7d7, 0x204b1f67, 0x35870c6a, 0x57e9e923, 0x14bcb808, 0x7cde72ce],
    [0x6c68e9be, 0x5ec41e22, 0xc825b7c7, 0xaffb4363, 0xf5df3999, 0x0fc688f1, 0xb07224cc, 0x03e86cea],
];

/// Step constants, two per step per lane, injected into words 0 and 4.
#[rustfmt::skip]
const RC: [[[u32; 2]; STEPS]; LANES] = [
    [[0x303994a6, 0xe0337818], [0xc0e65299, 0x441ba90d], [0x6cc33a12, 0x7f34d442],
     [0xdc56983e, 0x9389217f], [0x1e00108f, 0xe5a8bce6], [0x7800423d, 0x5274baf4],
     [0x8f5b7882, 0x26889ba7], [0x96e1db12, 0x9a226e9d]],
    [[0xb6de10ed, 0x01685f3d], [0x70f47aae, 0x05a17cf4], [0x0707a3d4, 0xbd09caca],
     [0x1c1e8f51, 0xf4272b28], [0x707a3d45, 0x144ae5cc], [0xaeb28562, 0xfaa7ae2b],
     [0xbaca1589, 0x2e48f1c1], [0x40a46f3e, 0xb923c704]],
    [[0xfc20d9d2, 0xe25e72c1], [0x34552e25, 0xe623bb72], [0x7ad8818f, 0x5c58a4a4],
     [0x8438764a, 0x1e38e2e7], [0xbb6de032, 0x78e38b9d], [0xedb780c8, 0x27586719],
     [0xd9847356, 0x36eda57f], [0xa2c78434, 0x703aace7]],
    [[0xb213afa5, 0xe028c9bf], [0xc84ebe95, 0x44756f91], [0x4e608a22, 0x7e8fce32],
     [0x56d858fe, 0x956548be], [0x343b138f, 0xfe191be2], [0xd0ec4e3d, 0x3cb226e5],
     [0x2ceb4882, 0x5944a28e], [0xb3ad2208, 0xa1c4c355]],
    [[0xf0d2e9e3, 0x5090d577], [0xac11d7fa, 0x2d1925ab], [0x1bcb66f2, 0xb46496ac],
     [0x6f2d9bc9, 0xd1925ab0], [0x78602649, 0x29131ab6], [0x8edae952, 0x0fc053c3],
     [0x3b6ba548, 0x3f014f0c], [0xedae9520, 0xfc053c31]],
];

const SBOX: [u32; 16] = [13, 14, 0, 1, 5, 10, 7, 6, 11, 3, 9, 12, 15, 8, 2, 4];

/// Multiply a 256-bit lane by `x` in the message ring.
#[inline]
fn m2(a: &[u32; 8]) -> [u32; 8] {
    let t = a[7];
    [t, a[0] ^ t, a[1], a[2] ^ t, a[3] ^ t, a[4], a[5], a[6]]
}

/// Bitsliced 4-bit S-box over four words.
#[inline]
fn sub_crumb(w: &mut [u32; 8], idx: [usize; 4]) {
    let mut out = [0u32; 4];
    for bit in 0..32 {
        let nibble = ((w[idx[0]] >> bit) & 1)
            | (((w[idx[1]] >> bit) & 1) << 1)
            | (((w[idx[2]] >> bit) & 1) << 2)
            | (((w[idx[3]] >> bit) & 1) << 3);
        let s = SBOX[nibble as usize];
        for (j, o) in out.iter_mut().enumerate() {
            *o |= ((s >> j) & 1) << bit;
        }
    }
    for (j, &i) in idx.iter().enumerate() {
        w[i] = out[j];
    }
}

#[inline]
fn mix_word(w: &mut [u32; 8], x: usize, y: usize) {
    w[y] ^= w[x];
    w[x] = w[x].rotate_left(2) ^ w[y];
    w[y] = w[y].rotate_left(14) ^ w[x];
    w[x] = w[x].rotate_left(10) ^ w[y];
    w[y] = w[y].rotate_left(1);
}

/// Per-lane permutation: tweak, then eight S-box/mix/constant steps.
fn permute(lane: &mut [u32; 8], index: usize) {
    for word in lane.iter_mut().skip(4) {
        *word = word.rotate_left(index as u32);
    }
    for step in 0..STEPS {
        sub_crumb(lane, [0, 1, 2, 3]);
        sub_crumb(lane, [5, 6, 7, 4]);
        for pair in 0..4 {
            mix_word(lane, pair, pair + 4);
        }
        lane[0] ^= RC[index][step][0];
        lane[4] ^= RC[index][step][1];
    }
}

/// Inject one message block into all lanes, then permute each lane.
fn round(state: &mut [[u32; 8]; LANES], block: &[u32; 8]) {
    let mut feed = [0u32; 8];
    for lane in state.iter() {
        for i in 0..8 {
            feed[i] ^= lane[i];
        }
    }
    feed = m2(&feed);
    for lane in state.iter_mut() {
        for i in 0..8 {
            lane[i] ^= feed[i];
        }
    }

    let mut msg = *block;
    for lane in state.iter_mut() {
        for i in 0..8 {
            lane[i] ^= msg[i];
        }
        msg = m2(&msg);
    }

    for (index, lane) in state.iter_mut().enumerate() {
        permute(lane, index);
    }
}

#[inline]
fn squeeze(state: &[[u32; 8]; LANES], out: &mut [u8]) {
    for i in 0..8 {
        let mut word = 0u32;
        for lane in state.iter() {
            word ^= lane[i];
        }
        out[i * 4..i * 4 + 4].copy_from_slice(&word.to_be_bytes());
    }
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    let mut state = IV;

    let mut chunks = input.chunks_exact(BLOCK);
    for chunk in &mut chunks {
        round(&mut state, &load(chunk.try_into().expect("exact 32-byte chunk")));
    }

    // Padding block: 0x80 then zeros. Always absorbed, even for aligned input.
    let rem = chunks.remainder();
    let mut tail = [0u8; BLOCK];
    tail[..rem.len()].copy_from_slice(rem);
    tail[rem.len()] = 0x80;
    round(&mut state, &load(&tail));

    // Two squeezes separated by a blank round.
    let mut out = [0u8; 64];
    squeeze(&state, &mut out[..32]);
    round(&mut state, &[0u32; 8]);
    squeeze(&state, &mut out[32..]);
    out
}

#[inline]
fn load(block: &[u8; BLOCK]) -> [u32; 8] {
    let mut words = [0u32; 8];
    for i in 0..8 {
        words[i] = u32::from_be_bytes(block[i * 4..i * 4 + 4].try_into().expect("4-byte word"));
    }
    words
}
