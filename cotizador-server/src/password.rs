//! Password hashing
//!
//! Thin wrappers over bcrypt so handlers never touch cost parameters
//! directly. Hashes are salted, so equal inputs produce distinct hashes
//! and comparison must go through `verify_password`.

use bcrypt::{hash, verify, BcryptError, DEFAULT_COST};

pub fn hash_password(plain: &str) -> Result<String, BcryptError> {
    hash(plain, DEFAULT_COST)
}

pub fn verify_password(plain: &str, hashed: &str) -> Result<bool, BcryptError> {
    verify(plain, hashed)
}
