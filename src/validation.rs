use crate::error::ValidationError;
use crate::models::auth::SignupRequest;
use crate::models::candidate::CandidateRequest;

pub const AADHAAR_LEN: usize = 12;
pub const MOBILE_LEN: usize = 10;
pub const MIN_AGE: u32 = 18;
pub const MIN_PASSWORD_LEN: usize = 6;
pub const MAX_LOGIN_PASSWORD_LEN: usize = 23;

pub fn validate_login(aadhar: &str, password: &str) -> Result<(), ValidationError> {
    if aadhar.len() != AADHAAR_LEN || !aadhar.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ValidationError::LoginAadhaar);
    }
    let len = password.chars().count();
    if !(MIN_PASSWORD_LEN..=MAX_LOGIN_PASSWORD_LEN).contains(&len) {
        return Err(ValidationError::LoginPassword);
    }
    Ok(())
}

/// Raw signup form input, as typed.
#[derive(Debug, Default, Clone)]
pub struct SignupForm {
    pub name: String,
    pub age: String,
    pub aadhar: String,
    pub mobile: String,
    pub address: String,
    pub password: String,
    pub email: String,
}

/// Checks run in the same order the form shows its errors; the first failure
/// wins.
pub fn validate_signup(form: &SignupForm) -> Result<SignupRequest, ValidationError> {
    if form.aadhar.chars().count() != AADHAAR_LEN {
        return Err(ValidationError::SignupAadhaar);
    }
    if !form.mobile.is_empty() && form.mobile.chars().count() != MOBILE_LEN {
        return Err(ValidationError::Mobile);
    }
    let age = parse_age(&form.age)?;
    if age < MIN_AGE {
        return Err(ValidationError::Underage);
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::SignupPassword);
    }
    let name = required("Name", &form.name)?;
    let address = required("Address", &form.address)?;

    Ok(SignupRequest {
        name,
        age,
        address,
        password: form.password.clone(),
        aadhar: form.aadhar.clone(),
        mobile: optional(&form.mobile),
        email: optional(&form.email),
    })
}

/// Candidate form shared by the admin create and update actions.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct CandidateForm {
    pub name: String,
    pub age: String,
    pub party: String,
}

pub fn validate_candidate(form: &CandidateForm) -> Result<CandidateRequest, ValidationError> {
    let name = required("Name", &form.name)?;
    let age = parse_age(&form.age)?;
    let party = required("Party", &form.party)?;
    Ok(CandidateRequest { name, age, party })
}

pub fn validate_password_change(old: &str, new: &str) -> Result<(), ValidationError> {
    required("Old password", old)?;
    required("New password", new)?;
    Ok(())
}

fn parse_age(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::AgeNotNumber)
}

fn required(field: &'static str, value: &str) -> Result<String, ValidationError> {
    let value = value.trim();
    if value.is_empty() {
        Err(ValidationError::Required(field))
    } else {
        Ok(value.to_owned())
    }
}

fn optional(value: &str) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_form() -> SignupForm {
        SignupForm {
            name: "Asha".to_owned(),
            age: "30".to_owned(),
            aadhar: "123456789012".to_owned(),
            mobile: String::new(),
            address: "Pune".to_owned(),
            password: "secret1".to_owned(),
            email: String::new(),
        }
    }

    #[test]
    fn login_requires_twelve_digits() {
        for bad in ["", "12345678901", "1234567890123", "12345678901a", "１23456789012"] {
            assert_eq!(
                validate_login(bad, "secret1"),
                Err(ValidationError::LoginAadhaar),
                "{bad:?}"
            );
        }
        assert_eq!(validate_login("123456789012", "secret1"), Ok(()));
    }

    #[test]
    fn login_password_bounds() {
        let aadhar = "123456789012";
        assert_eq!(validate_login(aadhar, "12345"), Err(ValidationError::LoginPassword));
        assert_eq!(validate_login(aadhar, "123456"), Ok(()));
        assert_eq!(validate_login(aadhar, &"x".repeat(23)), Ok(()));
        assert_eq!(
            validate_login(aadhar, &"x".repeat(24)),
            Err(ValidationError::LoginPassword)
        );
    }

    #[test]
    fn signup_checks_in_order() {
        let mut form = signup_form();
        form.aadhar = "123".to_owned();
        form.age = "12".to_owned();
        assert_eq!(validate_signup(&form), Err(ValidationError::SignupAadhaar));

        let mut form = signup_form();
        form.mobile = "98765".to_owned();
        assert_eq!(validate_signup(&form), Err(ValidationError::Mobile));

        let mut form = signup_form();
        form.age = "17".to_owned();
        assert_eq!(validate_signup(&form), Err(ValidationError::Underage));

        let mut form = signup_form();
        form.age = "old".to_owned();
        assert_eq!(validate_signup(&form), Err(ValidationError::AgeNotNumber));

        let mut form = signup_form();
        form.password = "short".to_owned();
        assert_eq!(validate_signup(&form), Err(ValidationError::SignupPassword));

        let mut form = signup_form();
        form.address = "  ".to_owned();
        assert_eq!(validate_signup(&form), Err(ValidationError::Required("Address")));
    }

    #[test]
    fn signup_builds_request() {
        let mut form = signup_form();
        form.age = "18".to_owned();
        form.mobile = "9876543210".to_owned();
        let req = validate_signup(&form).unwrap();
        assert_eq!(req.age, 18);
        assert_eq!(req.mobile.as_deref(), Some("9876543210"));
        assert_eq!(req.email, None);
    }

    #[test]
    fn candidate_form_needs_numeric_age() {
        let form = CandidateForm {
            name: "Ravi".to_owned(),
            age: "forty".to_owned(),
            party: "Green".to_owned(),
        };
        assert_eq!(validate_candidate(&form), Err(ValidationError::AgeNotNumber));

        let form = CandidateForm {
            age: "40".to_owned(),
            ..form
        };
        assert_eq!(
            validate_candidate(&form),
            Ok(CandidateRequest {
                name: "Ravi".to_owned(),
                age: 40,
                party: "Green".to_owned(),
            })
        );
    }

    #[test]
    fn password_change_fields_required() {
        assert_eq!(
            validate_password_change("", "newpass"),
            Err(ValidationError::Required("Old password"))
        );
        assert_eq!(
            validate_password_change("old", ""),
            Err(ValidationError::Required("New password"))
        );
        assert_eq!(validate_password_change("old", "newpass"), Ok(()));
    }
}
