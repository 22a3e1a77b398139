use super::constants::SBOX_INV;
use super::encryption::mix_columns;
use super::util::{add_round_key, xtime};
use crate::tinygcm::{BLOCK_SIZE, ROUND_KEY_BYTES, ROUNDS};

/// Decrypts one 16-byte block in place, running the inverse round
/// transforms with the round keys in reverse order (FIPS-197 section 5.3).
/// GCM never calls this; it exists for the decrypt-capable cipher.
#[inline(always)]
pub(crate) fn decrypt_in_place(state: &mut [u8; BLOCK_SIZE], schedule: &[u8; ROUND_KEY_BYTES]) {
    add_round_key(state, &schedule[ROUNDS * BLOCK_SIZE..]);

    for round in (0..ROUNDS).rev() {
        shift_rows_inv(state);
        sub_bytes_inv(state);
        add_round_key(state, &schedule[round * BLOCK_SIZE..(round + 1) * BLOCK_SIZE]);
        if round > 0 {
            mix_columns_inv(state);
        }
    }
}

/// InvSubBytes: inverse S-box lookup on every state byte (FIPS-197
/// section 5.3.2).
#[inline(always)]
pub(crate) fn sub_bytes_inv(state: &mut [u8; 16]) {
    for i in 0..16 {
        state[i] = SBOX_INV[state[i] as usize];
    }
}

/// InvShiftRows: row r of the column-major state rotates right by r
/// columns (FIPS-197 section 5.3.1), undoing the cipher's left rotation.
#[inline(always)]
pub(crate) fn shift_rows_inv(state: &mut [u8; 16]) {
    for r in 1..4 {
        let row = [state[r], state[4 + r], state[8 + r], state[12 + r]];
        for c in 0..4 {
            state[4 * c + r] = row[(c + 4 - r) % 4];
        }
    }
}

/// InvMixColumns (FIPS-197 section 5.3.3). The inverse matrix is the
/// forward one times a {04}/{05} correction, so each column picks up two
/// xtime-squared terms and then goes through the cipher's own MixColumns.
#[inline(always)]
pub(crate) fn mix_columns_inv(state: &mut [u8; 16]) {
    for col in state.chunks_exact_mut(4) {
        let even = xtime(xtime(col[0] ^ col[2]));
        let odd = xtime(xtime(col[1] ^ col[3]));
        col[0] ^= even;
        col[1] ^= odd;
        col[2] ^= even;
        col[3] ^= odd;
    }
    mix_columns(state);
}
