use std::fmt::{Debug, Formatter};

use aws_lc_rs::cipher::{
    AES_128, AES_192, AES_256, Algorithm, DecryptingKey, DecryptionContext, EncryptingKey,
    EncryptionContext, PaddedBlockDecryptingKey, PaddedBlockEncryptingKey, UnboundCipherKey,
};
use aws_lc_rs::iv::FixedLength;
use zeroize::ZeroizeOnDrop;

use crate::{CryptoError, random_bytes};

pub const AES_KEY_SIZES: [usize; 3] = [16, 24, 32];
pub const AES_BLOCK_SIZE: usize = 16;

/// Key bytes and IV shared by both AES modes. A fresh `aws-lc-rs` key is bound for every
/// operation.
#[derive(ZeroizeOnDrop)]
struct KeyMaterial {
    key: Vec<u8>,
    iv: [u8; AES_BLOCK_SIZE],
}

impl KeyMaterial {
    fn new(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        if !AES_KEY_SIZES.contains(&key.len()) {
            return Err(CryptoError::InvalidKeyLength(key.len()));
        }
        let iv: [u8; AES_BLOCK_SIZE] = iv
            .try_into()
            .map_err(|_| CryptoError::InvalidIvLength(iv.len()))?;

        Ok(Self {
            key: key.to_vec(),
            iv,
        })
    }

    fn algorithm(&self) -> &'static Algorithm {
        match self.key.len() {
            16 => &AES_128,
            24 => &AES_192,
            _ => &AES_256,
        }
    }

    fn unbound(&self) -> Result<UnboundCipherKey, CryptoError> {
        Ok(UnboundCipherKey::new(self.algorithm(), &self.key)?)
    }

    fn encryption_context(&self) -> EncryptionContext {
        EncryptionContext::Iv128(FixedLength::from(self.iv))
    }

    fn decryption_context(&self) -> DecryptionContext {
        DecryptionContext::Iv128(FixedLength::from(self.iv))
    }
}

fn generate_key(key_size: usize) -> Result<Vec<u8>, CryptoError> {
    if !AES_KEY_SIZES.contains(&key_size) {
        return Err(CryptoError::InvalidKeyLength(key_size));
    }
    random_bytes(key_size)
}

fn generate_block() -> Result<[u8; AES_BLOCK_SIZE], CryptoError> {
    let mut block = [0u8; AES_BLOCK_SIZE];
    aws_lc_rs::rand::fill(&mut block)?;
    Ok(block)
}

/// AES in CBC mode with PKCS#7 padding.
pub struct Aes {
    material: KeyMaterial,
}

impl Aes {
    /// `key` must be 16, 24 or 32 bytes (AES-128/192/256), `iv` 16 bytes.
    pub fn new(key: &[u8], iv: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            material: KeyMaterial::new(key, iv)?,
        })
    }

    pub fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = PaddedBlockEncryptingKey::cbc_pkcs7(self.material.unbound()?)?;

        let mut in_out = msg.to_vec();
        key.less_safe_encrypt(&mut in_out, self.material.encryption_context())?;
        Ok(in_out)
    }

    /// Fails when `msg` is not a whole number of blocks or its padding is invalid.
    pub fn decrypt(&self, msg: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = PaddedBlockDecryptingKey::cbc_pkcs7(self.material.unbound()?)?;

        let mut in_out = msg.to_vec();
        let len = key
            .decrypt(&mut in_out, self.material.decryption_context())?
            .len();
        in_out.truncate(len);
        Ok(in_out)
    }

    pub fn generate_key(key_size: usize) -> Result<Vec<u8>, CryptoError> {
        generate_key(key_size)
    }

    pub fn generate_iv() -> Result<[u8; AES_BLOCK_SIZE], CryptoError> {
        generate_block()
    }
}

impl Debug for Aes {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Aes(key_len={})", self.material.key.len())
    }
}

/// AES in CTR mode; the 16-byte nonce is the initial counter block.
pub struct AesCtr {
    material: KeyMaterial,
}

impl AesCtr {
    pub fn new(key: &[u8], nonce: &[u8]) -> Result<Self, CryptoError> {
        Ok(Self {
            material: KeyMaterial::new(key, nonce)?,
        })
    }

    pub fn encrypt(&self, msg: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = EncryptingKey::ctr(self.material.unbound()?)?;

        let mut in_out = msg.to_vec();
        key.less_safe_encrypt(&mut in_out, self.material.encryption_context())?;
        Ok(in_out)
    }

    pub fn decrypt(&self, msg: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let key = DecryptingKey::ctr(self.material.unbound()?)?;

        let mut in_out = msg.to_vec();
        key.decrypt(&mut in_out, self.material.decryption_context())?;
        Ok(in_out)
    }

    pub fn generate_key(key_size: usize) -> Result<Vec<u8>, CryptoError> {
        generate_key(key_size)
    }

    pub fn generate_nonce() -> Result<[u8; AES_BLOCK_SIZE], CryptoError> {
        generate_block()
    }
}

impl Debug for AesCtr {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "AesCtr(key_len={})", self.material.key.len())
    }
}
