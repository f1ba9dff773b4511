use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize)]
pub struct SendOtpRequest {
    pub phone: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct VerifyOtpRequest {
    pub phone: String,
    pub otp: String,
}

/// Successful OTP verification: a bearer token plus the owner profile.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthSessionDto {
    pub token: String,
    pub user: Option<OwnerProfileDto>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OwnerProfileDto {
    pub id: i64,
    pub name: Option<String>,
    pub phone: Option<String>,
}
