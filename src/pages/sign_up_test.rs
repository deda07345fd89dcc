use super::*;

#[test]
fn validate_sign_up_input_trims_name_and_email() {
    assert_eq!(
        validate_sign_up_input(" Ana ", " a@b.com ", "secret", "secret"),
        Ok(("Ana".to_owned(), "a@b.com".to_owned(), "secret".to_owned()))
    );
}

#[test]
fn validate_sign_up_input_requires_name() {
    assert_eq!(
        validate_sign_up_input("  ", "a@b.com", "secret", "secret"),
        Err("Enter your name.")
    );
}

#[test]
fn validate_sign_up_input_rejects_malformed_email() {
    assert_eq!(
        validate_sign_up_input("Ana", "not-an-email", "secret", "secret"),
        Err("Enter a valid e-mail.")
    );
}

#[test]
fn validate_sign_up_input_rejects_short_password() {
    assert_eq!(
        validate_sign_up_input("Ana", "a@b.com", "12345", "12345"),
        Err("The password must have at least 6 characters.")
    );
}

#[test]
fn validate_sign_up_input_rejects_mismatched_confirmation() {
    assert_eq!(
        validate_sign_up_input("Ana", "a@b.com", "secret", "secret2"),
        Err("The password confirmation does not match.")
    );
}
