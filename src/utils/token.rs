use argon2::{
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString},
    Argon2,
};
use base64::{engine::general_purpose::URL_SAFE_NO_PAD, prelude::BASE64_STANDARD, Engine as _};
use rand_core::{OsRng, RngCore};
use uuid::Uuid;

pub fn new_id() -> Uuid {
    Uuid::new_v4()
}

pub fn new_token() -> String {
    let mut buf = [0u8; 32];
    let mut rng = OsRng;
    rng.fill_bytes(&mut buf);
    format!("tok_{}", URL_SAFE_NO_PAD.encode(buf))
}

pub fn encrypt(token: &str) -> Result<String, argon2::password_hash::Error> {
    let mut rng = OsRng;
    let salt = SaltString::generate(&mut rng);
    let hash = Argon2::default().hash_password(token.as_bytes(), &salt)?;
    Ok(hash.to_string())
}

pub fn verify(token: &str, hash: &str) -> Result<bool, argon2::password_hash::Error> {
    let parsed = PasswordHash::new(hash)?;
    Ok(Argon2::default().verify_password(token.as_bytes(), &parsed).is_ok())
}

/// Access token handed to clients: base64 of "<user id>.<raw token>".
pub fn construct_token(user_id: &Uuid, api_key: &str) -> String {
    BASE64_STANDARD.encode(format!("{user_id}.{api_key}"))
}

pub fn extract_token_parts(access_token: &str) -> Option<(Uuid, String)> {
    let decoded = BASE64_STANDARD.decode(access_token).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (id, key) = decoded.split_once('.')?;
    let user_id = Uuid::parse_str(id).ok()?;
    if key.is_empty() {
        return None;
    }
    Some((user_id, key.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_roundtrips_through_access_token() {
        let id = new_id();
        let token = new_token();
        let access = construct_token(&id, &token);
        let (parsed_id, parsed_token) = extract_token_parts(&access).unwrap();
        assert_eq!(parsed_id, id);
        assert_eq!(parsed_token, token);
    }

    #[test]
    fn garbage_access_tokens_are_rejected() {
        assert!(extract_token_parts("not base64 at all!!").is_none());
        assert!(extract_token_parts(&BASE64_STANDARD.encode("no-separator")).is_none());
        assert!(extract_token_parts(&BASE64_STANDARD.encode("not-a-uuid.tok_x")).is_none());
    }

    #[test]
    fn verify_accepts_only_the_hashed_token() {
        let token = new_token();
        let hash = encrypt(&token).unwrap();
        assert!(verify(&token, &hash).unwrap());
        assert!(!verify("tok_other", &hash).unwrap());
    }
}
