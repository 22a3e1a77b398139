//! MCU-friendly one-shot AES-128-GCM.
//!
//! Each call performs one complete authenticated encryption or decryption:
//! the caller supplies the 16-byte key, the 12-byte nonce, the plaintext or
//! ciphertext, any additional authenticated data (AAD), and the output
//! buffers. The crate is `no_std` and never allocates; scratch space is
//! either a small internal stack array ([`gcm_encrypt`]) or a caller-supplied
//! byte buffer ([`gcm_encrypt_with_workspace`]), which matters on targets
//! without a heap and with tightly bounded stacks.
//!
//! Every byte of scratch, including the expanded round-key schedule, is
//! zeroed before each call returns, on success and failure paths alike, and
//! the authentication tag comparison runs in constant time.
//!
//! ## Examples
//! ```
//! use tinygcm::{gcm_decrypt, gcm_encrypt, padded_ciphertext_len};
//!
//! # fn main() -> tinygcm::Result<()> {
//! let key = [0x4b; 16];
//! let nonce = [0x99; 12]; // must be unique per message under one key
//! let aad = b"frame 7";
//! let plaintext = b"interior temperature 21.5C";
//!
//! // ciphertext is produced rounded up to whole 16-byte blocks
//! let mut ciphertext = [0u8; padded_ciphertext_len(26)];
//! let mut tag = [0u8; 16];
//! gcm_encrypt(&key, &nonce, plaintext, aad, &mut ciphertext, &mut tag)?;
//!
//! // decryption recovers the plaintext only if the tag authenticates
//! let mut recovered = [0u8; 32];
//! gcm_decrypt(&key, &nonce, &ciphertext, aad, &tag, &mut recovered)?;
//! assert_eq!(&recovered[..plaintext.len()], plaintext);
//! # Ok(())
//! # }
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

mod tinygcm;

pub use tinygcm::fixed;
#[cfg(feature = "block-decrypt")]
pub use tinygcm::{Aes128EncDec, BlockDecrypt};
pub use tinygcm::{
    Aes128Enc, BLOCK_SIZE, BlockEncrypt, Error, GcmOp, KEY_SIZE, NONCE_SIZE, ROUND_KEY_BYTES,
    Result, TAG_SIZE, WORKSPACE_DEC, WORKSPACE_ENC, WORKSPACE_ENC_PADDED, WORKSPACE_MAX,
    gcm_decrypt, gcm_decrypt_with_workspace, gcm_encrypt, gcm_encrypt_padded,
    gcm_encrypt_padded_with_workspace, gcm_encrypt_with_workspace, is_workspace_sufficient,
    padded_ciphertext_len,
};
