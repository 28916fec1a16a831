use crate::error::CipherError;

pub trait Encryptor: Send + Sync {
    fn encrypt(&self, message: &str) -> Result<String, CipherError>;
}

pub trait Decryptor: Send + Sync {
    fn decrypt(&self, message: &str) -> Result<String, CipherError>;
}
