use super::*;

fn filled() -> SignUpFields {
    SignUpFields {
        username: " ada ".to_owned(),
        firstname: "Ada".to_owned(),
        lastname: "Lovelace".to_owned(),
        email: "ada@example.com".to_owned(),
        password: "analytical".to_owned(),
    }
}

// =============================================================
// validate_sign_in
// =============================================================

#[test]
fn validate_sign_in_trims_email_and_keeps_password() {
    let request = validate_sign_in("  ada@example.com ", " secret ").unwrap();
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, " secret ");
}

#[test]
fn validate_sign_in_requires_both_fields() {
    assert_eq!(validate_sign_in("   ", "secret"), Err("Email is required"));
    assert_eq!(validate_sign_in("ada@example.com", ""), Err("Password is required"));
}

#[test]
fn validate_sign_in_rejects_malformed_email() {
    assert_eq!(validate_sign_in("ada", "secret"), Err("Enter a valid email address"));
    assert_eq!(validate_sign_in("@example.com", "secret"), Err("Enter a valid email address"));
    assert_eq!(validate_sign_in("ada@localhost", "secret"), Err("Enter a valid email address"));
}

// =============================================================
// validate_sign_up
// =============================================================

#[test]
fn validate_sign_up_builds_trimmed_request() {
    let request = validate_sign_up(&filled()).unwrap();
    assert_eq!(request.username, "ada");
    assert_eq!(request.firstname, "Ada");
    assert_eq!(request.lastname, "Lovelace");
    assert_eq!(request.email, "ada@example.com");
    assert_eq!(request.password, "analytical");
}

#[test]
fn validate_sign_up_reports_first_missing_field() {
    let fields = SignUpFields { username: String::new(), firstname: String::new(), ..filled() };
    assert_eq!(validate_sign_up(&fields), Err("Username is required"));

    let fields = SignUpFields { lastname: "  ".to_owned(), ..filled() };
    assert_eq!(validate_sign_up(&fields), Err("Last name is required"));
}

#[test]
fn validate_sign_up_enforces_password_length() {
    let fields = SignUpFields { password: "short".to_owned(), ..filled() };
    assert_eq!(validate_sign_up(&fields), Err("Password must be at least 8 characters"));

    let fields = SignUpFields { password: "x".repeat(MIN_PASSWORD_LEN), ..filled() };
    assert!(validate_sign_up(&fields).is_ok());
}
