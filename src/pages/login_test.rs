use super::*;

#[test]
fn validate_credentials_trims_email() {
    assert_eq!(
        validate_credentials("  u@example.com  ", "pw"),
        Ok(("u@example.com".to_owned(), "pw".to_owned()))
    );
}

#[test]
fn validate_credentials_requires_email() {
    assert_eq!(validate_credentials("   ", "pw"), Err("Enter both email and password."));
}

#[test]
fn validate_credentials_requires_password() {
    assert_eq!(
        validate_credentials("u@example.com", ""),
        Err("Enter both email and password.")
    );
}

#[test]
fn validate_credentials_keeps_password_verbatim() {
    // Passwords are never trimmed; leading/trailing spaces are significant.
    assert_eq!(
        validate_credentials("u@example.com", " pw "),
        Ok(("u@example.com".to_owned(), " pw ".to_owned()))
    );
}
