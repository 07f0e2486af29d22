use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use rand::rngs::OsRng;
use tracing::error;

/// Hash a plaintext password into an argon2 PHC string with a fresh salt.
pub fn hash_password(plain: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(plain.as_bytes(), &salt)
        .map_err(|e| {
            error!(error = %e, "argon2 hash_password error");
            anyhow::anyhow!(e.to_string())
        })?
        .to_string();
    Ok(hash)
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    fn verifies(plain: &str, hash: &str) -> bool {
        let parsed = PasswordHash::new(hash).expect("hash should be a valid PHC string");
        Argon2::default()
            .verify_password(plain.as_bytes(), &parsed)
            .is_ok()
    }

    #[test]
    fn hash_verifies_against_the_original_password() {
        let password = "secret";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(verifies(password, &hash));
        assert!(!verifies("wrong-password", &hash));
    }

    #[test]
    fn hash_is_not_the_plaintext_and_not_empty() {
        let password = "secret";
        let hash = hash_password(password).expect("hashing should succeed");
        assert!(!hash.is_empty());
        assert_ne!(hash, password);
        assert!(hash.starts_with("$argon2"));
    }

    #[test]
    fn same_password_hashes_differently() {
        let a = hash_password("secret").unwrap();
        let b = hash_password("secret").unwrap();
        assert_ne!(a, b, "salts must differ");
    }
}
