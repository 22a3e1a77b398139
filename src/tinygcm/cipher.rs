//! The block-cipher capability the GCM composition is built against, and the
//! AES-128 implementations of it. Round-key storage is borrowed from the
//! caller's workspace rather than owned, so the workspace guard wipes it
//! together with the rest of the scratch.

use zeroize::Zeroize;

#[cfg(feature = "block-decrypt")]
use crate::tinygcm::core::decrypt_in_place;
use crate::tinygcm::core::{encrypt_in_place, expand_key};
use crate::tinygcm::{BLOCK_SIZE, KEY_SIZE, ROUND_KEY_BYTES};

/// Single-block encryption capability. GCM only ever encrypts blocks, so
/// this one method is the whole contract between the mode and the cipher.
pub trait BlockEncrypt {
    /// Encrypts the 16-byte `input` under `key` into `output`. Private state
    /// touched along the way (the expanded key schedule) is zeroed again
    /// before this returns.
    fn block_encrypt(
        &mut self,
        input: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
        output: &mut [u8; BLOCK_SIZE],
    );
}

/// Single-block decryption capability, separate from [`BlockEncrypt`]
/// because the GCM path never needs it.
#[cfg(feature = "block-decrypt")]
pub trait BlockDecrypt {
    /// Decrypts the 16-byte `input` under `key` into `output`, with the same
    /// zeroing contract as [`BlockEncrypt::block_encrypt`].
    fn block_decrypt(
        &mut self,
        input: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
        output: &mut [u8; BLOCK_SIZE],
    );
}

/// AES-128 block encryption over a borrowed round-key region.
pub struct Aes128Enc<'ws> {
    schedule: &'ws mut [u8; ROUND_KEY_BYTES],
}

impl<'ws> Aes128Enc<'ws> {
    /// Claims the leading [`ROUND_KEY_BYTES`] of `workspace` for round-key
    /// storage. Returns `None` when the offered region is too small to
    /// operate on.
    pub fn new(workspace: &'ws mut [u8]) -> Option<Self> {
        let (schedule, _) = workspace.split_first_chunk_mut::<ROUND_KEY_BYTES>()?;
        Some(Self { schedule })
    }

    pub(crate) fn from_schedule(schedule: &'ws mut [u8; ROUND_KEY_BYTES]) -> Self {
        Self { schedule }
    }
}

impl BlockEncrypt for Aes128Enc<'_> {
    fn block_encrypt(
        &mut self,
        input: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
        output: &mut [u8; BLOCK_SIZE],
    ) {
        expand_key(key, self.schedule);
        *output = *input;
        encrypt_in_place(output, self.schedule);
        self.schedule.zeroize();
    }
}

/// Decrypt-capable AES-128: composes the encrypt-only cipher and adds the
/// inverse transforms on the same schedule region.
#[cfg(feature = "block-decrypt")]
pub struct Aes128EncDec<'ws> {
    enc: Aes128Enc<'ws>,
}

#[cfg(feature = "block-decrypt")]
impl<'ws> Aes128EncDec<'ws> {
    /// Same workspace contract as [`Aes128Enc::new`].
    pub fn new(workspace: &'ws mut [u8]) -> Option<Self> {
        Aes128Enc::new(workspace).map(|enc| Self { enc })
    }
}

#[cfg(feature = "block-decrypt")]
impl BlockEncrypt for Aes128EncDec<'_> {
    fn block_encrypt(
        &mut self,
        input: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
        output: &mut [u8; BLOCK_SIZE],
    ) {
        self.enc.block_encrypt(input, key, output);
    }
}

#[cfg(feature = "block-decrypt")]
impl BlockDecrypt for Aes128EncDec<'_> {
    fn block_decrypt(
        &mut self,
        input: &[u8; BLOCK_SIZE],
        key: &[u8; KEY_SIZE],
        output: &mut [u8; BLOCK_SIZE],
    ) {
        expand_key(key, self.enc.schedule);
        *output = *input;
        decrypt_in_place(output, self.enc.schedule);
        self.enc.schedule.zeroize();
    }
}
