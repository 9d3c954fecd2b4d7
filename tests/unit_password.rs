use classtrack::utils::password::PasswordHasher;

fn hasher() -> PasswordHasher {
    // bcrypt minimum cost keeps the suite fast
    PasswordHasher::with_cost(4)
}

#[test]
fn test_hash_password_success() {
    let password = "testpassword123";
    let result = hasher().hash(password);

    assert!(result.is_ok());
    let hash = result.unwrap();
    assert!(!hash.is_empty());
    assert_ne!(hash, password);
}

#[test]
fn test_verify_password_correct() {
    let h = hasher();
    let password = "correctpassword";
    let hash = h.hash(password).unwrap();

    let result = h.verify(password, &hash);

    assert!(result.is_ok());
    assert!(result.unwrap());
}

#[test]
fn test_verify_password_incorrect() {
    let h = hasher();
    let hash = h.hash("correctpassword").unwrap();

    let result = h.verify("wrongpassword", &hash);

    assert!(result.is_ok());
    assert!(!result.unwrap());
}

#[test]
fn test_verify_password_invalid_hash() {
    let result = hasher().verify("testpassword", "not_a_valid_bcrypt_hash");

    assert!(result.is_err());
}

#[test]
fn test_hash_generates_unique_hashes() {
    let h = hasher();
    let password = "samepassword";
    let hash1 = h.hash(password).unwrap();
    let hash2 = h.hash(password).unwrap();

    assert_ne!(hash1, hash2);
    assert!(h.verify(password, &hash1).unwrap());
    assert!(h.verify(password, &hash2).unwrap());
}

#[test]
fn test_verify_case_sensitive() {
    let h = hasher();
    let hash = h.hash("Password123").unwrap();

    assert!(!h.verify("password123", &hash).unwrap());
    assert!(!h.verify("PASSWORD123", &hash).unwrap());
}

#[test]
fn test_default_uses_library_cost() {
    let h = PasswordHasher::default();
    let hash = h.hash("pw").unwrap();

    assert!(h.verify("pw", &hash).unwrap());
}
