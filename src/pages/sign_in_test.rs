use super::*;

#[test]
fn validate_credentials_input_trims_email() {
    assert_eq!(
        validate_credentials_input("  a@b.com  ", "secret"),
        Ok(("a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_credentials_input_requires_email() {
    assert_eq!(validate_credentials_input("   ", "secret"), Err("Enter your e-mail."));
}

#[test]
fn validate_credentials_input_requires_password() {
    assert_eq!(validate_credentials_input("a@b.com", ""), Err("Enter your password."));
}
