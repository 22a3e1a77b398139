//! Workspace sizing and the zero-on-drop scratch guard.
//!
//! Each operation's scratch requirement is a compile-time constant assembled
//! from the same union-of-phases layout the operations carve at run time:
//! the AES round-key share first, then the GCM share, where the ciphertext
//! phase and the tag phase reuse one region.

use zeroize::Zeroize;

use crate::tinygcm::error::{Error, Result};
use crate::tinygcm::{BLOCK_SIZE, ROUND_KEY_BYTES};

const fn max(a: usize, b: usize) -> usize {
    if a > b { a } else { b }
}

// GCTR scratch: a counter block plus the keystream block for a partial tail.
// The full-blocks-only variant keeps just the counter.
pub(crate) const GCTR_SCRATCH: usize = 2 * BLOCK_SIZE;
pub(crate) const GCTR_PADDED_SCRATCH: usize = BLOCK_SIZE;

// Ciphertext generation: its own counter copy ahead of the GCTR scratch.
const CDATA_SCRATCH: usize = BLOCK_SIZE + GCTR_SCRATCH;
const CDATA_PADDED_SCRATCH: usize = BLOCK_SIZE + GCTR_PADDED_SCRATCH;

// GHASH: the folded-block/product tmp and the field-multiply shift register.
const GHASH_SCRATCH: usize = 2 * BLOCK_SIZE;

// Tag generation: accumulator S, GHASH scratch, then one block shared by the
// length frame and the final GCTR counter (the frame is consumed first).
const TAG_SCRATCH: usize = BLOCK_SIZE + GHASH_SCRATCH + max(BLOCK_SIZE, GCTR_PADDED_SCRATCH);

// GCM share per operation: auth key and ICB (decrypt adds the calculated
// tag), then the larger of the ciphertext and tag phases.
const ENC_SCRATCH: usize = 2 * BLOCK_SIZE + max(CDATA_SCRATCH, TAG_SCRATCH);
const ENC_PADDED_SCRATCH: usize = 2 * BLOCK_SIZE + max(CDATA_PADDED_SCRATCH, TAG_SCRATCH);
const DEC_SCRATCH: usize = 3 * BLOCK_SIZE + max(CDATA_PADDED_SCRATCH, TAG_SCRATCH);

/// Workspace bytes required by [`gcm_encrypt_with_workspace`](crate::gcm_encrypt_with_workspace).
pub const WORKSPACE_ENC: usize = ROUND_KEY_BYTES + ENC_SCRATCH;
/// Workspace bytes required by [`gcm_encrypt_padded_with_workspace`](crate::gcm_encrypt_padded_with_workspace).
pub const WORKSPACE_ENC_PADDED: usize = ROUND_KEY_BYTES + ENC_PADDED_SCRATCH;
/// Workspace bytes required by [`gcm_decrypt_with_workspace`](crate::gcm_decrypt_with_workspace).
pub const WORKSPACE_DEC: usize = ROUND_KEY_BYTES + DEC_SCRATCH;
/// Largest of the three; a buffer this size fits every operation.
pub const WORKSPACE_MAX: usize = max(WORKSPACE_ENC, max(WORKSPACE_ENC_PADDED, WORKSPACE_DEC));

/// Identifies the top-level operation a workspace will be used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GcmOp {
    Encrypt,
    EncryptPadded,
    Decrypt,
}

impl GcmOp {
    /// Minimum workspace size for this operation.
    pub const fn workspace_required(self) -> usize {
        match self {
            GcmOp::Encrypt => WORKSPACE_ENC,
            GcmOp::EncryptPadded => WORKSPACE_ENC_PADDED,
            GcmOp::Decrypt => WORKSPACE_DEC,
        }
    }
}

/// True when `workspace` can hold the scratch for `op`. The
/// `_with_workspace` entry points apply the same check and fail with
/// [`Error::WorkspaceTooSmall`] instead of operating.
pub fn is_workspace_sufficient(workspace: &[u8], op: GcmOp) -> bool {
    workspace.len() >= op.workspace_required()
}

/// Borrows a caller's scratch buffer for the duration of one operation and
/// zeroes every byte of it on the way out, error paths included.
pub(crate) struct Workspace<'a> {
    bytes: &'a mut [u8],
}

impl<'a> Workspace<'a> {
    pub(crate) fn enter(bytes: &'a mut [u8], op: GcmOp) -> Result<Self> {
        if bytes.len() < op.workspace_required() {
            let len = bytes.len();
            bytes.zeroize();
            return Err(Error::WorkspaceTooSmall {
                len,
                required: op.workspace_required(),
            });
        }
        Ok(Self { bytes })
    }

    pub(crate) fn bytes_mut(&mut self) -> &mut [u8] {
        &mut *self.bytes
    }
}

impl Drop for Workspace<'_> {
    fn drop(&mut self) {
        self.bytes.zeroize();
    }
}

/// Splits one 16-byte scratch block off the front of a validated region.
pub(crate) fn take_block(scratch: &mut [u8]) -> (&mut [u8; BLOCK_SIZE], &mut [u8]) {
    scratch
        .split_first_chunk_mut::<BLOCK_SIZE>()
        .expect("scratch regions are size-checked at the operation boundary")
}

/// Splits the AES round-key region off the front of a validated workspace.
pub(crate) fn take_schedule(workspace: &mut [u8]) -> (&mut [u8; ROUND_KEY_BYTES], &mut [u8]) {
    workspace
        .split_first_chunk_mut::<ROUND_KEY_BYTES>()
        .expect("workspace is size-checked at the operation boundary")
}
