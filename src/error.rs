use thiserror::Error;

/// Rejections raised before any request leaves the client.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Aadhaar number must be exactly 12 digits.")]
    LoginAadhaar,
    #[error("Password must be between 6 and 23 characters.")]
    LoginPassword,
    #[error("Aadhar number must be 12 digits.")]
    SignupAadhaar,
    #[error("Mobile number must be 10 digits.")]
    Mobile,
    #[error("Age must be a number.")]
    AgeNotNumber,
    #[error("Age must be greater than 18.")]
    Underage,
    #[error("Password must be at least 6 characters long.")]
    SignupPassword,
    #[error("{0} is required.")]
    Required(&'static str),
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    /// Any transport failure or non-2xx response, collapsed to the
    /// operation's message.
    #[error("{0}")]
    Request(&'static str),
    #[error("Failed to save session")]
    Storage,
}
