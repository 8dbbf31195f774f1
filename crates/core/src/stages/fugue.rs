//! Fugue-512
//!
//! A 36-word shift-register hash absorbing one 32-bit word at a time. Each
//! word triggers an injection (TIX) followed by four ring-rotate / column-mix
//! / S-box-and-supermix (SMIX) groups; finalization runs extra unkeyed
//! groups before slicing the digest out of the register.

use super::aes::SBOX;

#[rustfmt::skip]
const IV: [u32; 16] = [
    0x8807a57e, 0xe616af75, 0xc5d3e4db, 0xac9ab027, 0xd915f117, 0xb6eecc54, 0x06e8020b, 0x4a92efd1,
    0xaac6e2c9, 0xddb21398, 0xcae65838, 0x437f203f, 0x25ea78e7, 0x951fddd6, 0xda6ed11d, 0xe13e3567,
];

/// Coefficients of the circulant supermix matrix.
const COEF: [u8; 16] = [4, 1, 1, 1, 7, 1, 1, 1, 6, 1, 1, 1, 5, 1, 1, 1];

const FINAL_GROUPS: usize = 18;

#[inline(always)]
fn gf_mul(mut a: u8, mut b: u8) -> u8 {
    let mut acc = 0u8;
    while b != 0 {
        if b & 1 != 0 {
            acc ^= a;
        }
        let hi = a >> 7;
        a = (a << 1) ^ (hi * 0x1b);
        b >>= 1;
    }
    acc
}

struct State {
    s: [u32; 36],
}

impl State {
    fn new() -> Self {
        let mut s = [0u32; 36];
        s[20..36].copy_from_slice(&IV);
        Self { s }
    }

    /// Rotate the register right by `n` words.
    #[inline]
    fn ror(&mut self, n: usize) {
        self.s.rotate_right(n);
    }

    /// Column mix: fold the head of the register into two distant columns.
    #[inline]
    fn cmix(&mut self) {
        self.s[0] ^= self.s[4];
        self.s[1] ^= self.s[5];
        self.s[2] ^= self.s[6];
        self.s[18] ^= self.s[4];
        self.s[19] ^= self.s[5];
        self.s[20] ^= self.s[6];
    }

    /// Word injection for the 512-bit variant.
    #[inline]
    fn tix(&mut self, m: u32) {
        self.s[10] ^= self.s[0];
        self.s[0] = m;
        self.s[8] ^= m;
        self.s[1] ^= self.s[24];
        self.s[4] ^= self.s[27];
        self.s[7] ^= self.s[30];
    }

    /// S-box the first four words bytewise, then apply the supermix matrix.
    fn smix(&mut self) {
        let mut bytes = [0u8; 16];
        for i in 0..4 {
            bytes[i * 4..i * 4 + 4].copy_from_slice(&self.s[i].to_be_bytes());
        }
        for byte in bytes.iter_mut() {
            *byte = SBOX[*byte as usize];
        }
        let mut mixed = [0u8; 16];
        for (row, out) in mixed.iter_mut().enumerate() {
            let mut acc = 0u8;
            for (col, byte) in bytes.iter().enumerate() {
                acc ^= gf_mul(COEF[(col + 16 - row) % 16], *byte);
            }
            *out = acc;
        }
        for i in 0..4 {
            self.s[i] = u32::from_be_bytes(mixed[i * 4..i * 4 + 4].try_into().expect("word"));
        }
    }

    fn absorb_word(&mut self, m: u32) {
        self.tix(m);
        for _ in 0..4 {
            self.ror(3);
            self.cmix();
            self.smix();
        }
    }
}

pub fn digest(input: &[u8]) -> [u8; 64] {
    let mut state = State::new();

    let mut chunks = input.chunks_exact(4);
    for chunk in &mut chunks {
        state.absorb_word(u32::from_be_bytes(chunk.try_into().expect("4-byte word")));
    }

    // Zero-pad the tail word, then absorb the 64-bit bit length as two
    // closing words. Fugue carries no 0x80 marker; the length words
    // disambiguate.
    let rem = chunks.remainder();
    if !rem.is_empty() {
        let mut word = [0u8; 4];
        word[..rem.len()].copy_from_slice(rem);
        state.absorb_word(u32::from_be_bytes(word));
    }
    let bit_len = (input.len() as u64).wrapping_mul(8);
    state.absorb_word((bit_len >> 32) as u32);
    state.absorb_word(bit_len as u32);

    for _ in 0..FINAL_GROUPS {
        state.ror(3);
        state.cmix();
        state.smix();
    }

    let mut out = [0u8; 64];
    for (i, &slot) in [
        1usize, 2, 3, 4, 9, 10, 11, 12, 18, 19, 20, 21, 27, 28, 29, 30,
    ]
    .iter()
    .enumerate()
    {
        out[i * 4..i * 4 + 4].copy_from_slice(&state.s[slot].to_be_bytes());
    }
    out
}
