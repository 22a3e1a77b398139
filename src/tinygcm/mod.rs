mod cipher;
mod core;
mod error;
pub mod fixed;
mod gcm;
mod gf128;
mod workspace;

#[cfg(feature = "block-decrypt")]
pub use cipher::{Aes128EncDec, BlockDecrypt};
pub use cipher::{Aes128Enc, BlockEncrypt};
pub use error::{Error, Result};
pub use gcm::{
    gcm_decrypt, gcm_decrypt_with_workspace, gcm_encrypt, gcm_encrypt_padded,
    gcm_encrypt_padded_with_workspace, gcm_encrypt_with_workspace, padded_ciphertext_len,
};
pub use workspace::{
    GcmOp, WORKSPACE_DEC, WORKSPACE_ENC, WORKSPACE_ENC_PADDED, WORKSPACE_MAX,
    is_workspace_sufficient,
};

/// Cipher block size in bytes. GCM inherits this from AES.
pub const BLOCK_SIZE: usize = 16;
/// AES-128 key size in bytes.
pub const KEY_SIZE: usize = 16;
/// Nonce (IV) size in bytes. Only 96-bit nonces are supported.
pub const NONCE_SIZE: usize = 12;
/// Authentication tag size in bytes.
pub const TAG_SIZE: usize = 16;

/// AES-128 round count.
pub(crate) const ROUNDS: usize = 10;
/// Bytes of expanded round-key storage: (rounds + 1) x block.
pub const ROUND_KEY_BYTES: usize = (ROUNDS + 1) * BLOCK_SIZE;
