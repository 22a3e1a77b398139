use super::constants::{RCON, SBOX};
use super::util::{add_round_key, xtime};
use crate::tinygcm::{BLOCK_SIZE, KEY_SIZE, ROUND_KEY_BYTES, ROUNDS};

const NK: usize = KEY_SIZE / 4; // key size in 4-byte words, FIPS-197 naming

/// AES-128 key schedule (FIPS-197 section 5.2). Expands the 16-byte key
/// into 11 round keys written contiguously into `schedule`; the first round
/// key is the key itself.
pub(crate) fn expand_key(key: &[u8; KEY_SIZE], schedule: &mut [u8; ROUND_KEY_BYTES]) {
    schedule[..KEY_SIZE].copy_from_slice(key);

    // w[i] = w[i - Nk] ^ temp, where temp is the previous word and, at each
    // Nk boundary, RotWord and SubWord apply with the round constant folded
    // into the first byte
    for i in NK..4 * (ROUNDS + 1) {
        let mut word = [
            schedule[4 * i - 4],
            schedule[4 * i - 3],
            schedule[4 * i - 2],
            schedule[4 * i - 1],
        ];

        if i % NK == 0 {
            word = [
                SBOX[word[1] as usize] ^ RCON[i / NK],
                SBOX[word[2] as usize],
                SBOX[word[3] as usize],
                SBOX[word[0] as usize],
            ];
        }

        for (j, w) in word.iter().enumerate() {
            schedule[4 * i + j] = w ^ schedule[4 * (i - NK) + j];
        }
    }
}

/// Encrypts one 16-byte block in place under the expanded schedule:
/// an initial AddRoundKey, nine full rounds, and a final round without
/// MixColumns (FIPS-197 section 5.1).
#[inline(always)]
pub(crate) fn encrypt_in_place(state: &mut [u8; BLOCK_SIZE], schedule: &[u8; ROUND_KEY_BYTES]) {
    add_round_key(state, &schedule[..BLOCK_SIZE]);

    for round in 1..=ROUNDS {
        sub_bytes(state);
        shift_rows(state);
        if round < ROUNDS {
            mix_columns(state);
        }
        add_round_key(state, &schedule[round * BLOCK_SIZE..(round + 1) * BLOCK_SIZE]);
    }
}

/// SubBytes: S-box lookup on every state byte (FIPS-197 section 5.1.1).
#[inline(always)]
pub(crate) fn sub_bytes(state: &mut [u8; 16]) {
    for i in 0..16 {
        state[i] = SBOX[state[i] as usize];
    }
}

/// ShiftRows (FIPS-197 section 5.1.2). The state is column-major, so byte
/// (row r, column c) sits at index 4c + r; row r rotates left by r columns.
#[inline(always)]
pub(crate) fn shift_rows(state: &mut [u8; 16]) {
    for r in 1..4 {
        let row = [state[r], state[4 + r], state[8 + r], state[12 + r]];
        for c in 0..4 {
            state[4 * c + r] = row[(c + r) % 4];
        }
    }
}

/// MixColumns (FIPS-197 section 5.1.3). With t the xor of the whole column,
/// each byte becomes a_i ^ t ^ xtime(a_i ^ a_(i+1)): the {02}/{03} matrix
/// row collapsed to one doubling per byte.
#[inline(always)]
pub(crate) fn mix_columns(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let a0 = col[0];
        let t = col[0] ^ col[1] ^ col[2] ^ col[3];
        col[0] ^= t ^ xtime(col[0] ^ col[1]);
        col[1] ^= t ^ xtime(col[1] ^ col[2]);
        col[2] ^= t ^ xtime(col[2] ^ col[3]);
        col[3] ^= t ^ xtime(col[3] ^ a0);
    }
}
