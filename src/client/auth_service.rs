use std::sync::Arc;

use crate::api::auth_dto::{AuthSessionDto, OwnerProfileDto, SendOtpRequest, VerifyOtpRequest};
use crate::api::envelope::ItemEnvelope;
use crate::client::api_client::ApiClient;
use crate::client::endpoint::Endpoint;
use crate::error::{Error, Result};

/// OTP login delegated entirely to the backend. The only client-side checks
/// are the shallow length rules the login form applies before sending.
#[derive(Debug, Clone)]
pub struct AuthService {
    api: Arc<ApiClient>,
}

pub fn is_valid_phone(phone: &str) -> bool {
    phone.len() == 10 && phone.chars().all(|c| c.is_ascii_digit())
}

pub fn is_valid_otp(otp: &str) -> bool {
    otp.len() == 6 && otp.chars().all(|c| c.is_ascii_digit())
}

impl AuthService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        AuthService { api }
    }

    pub async fn send_otp(&self, phone: &str) -> Result<()> {
        if !is_valid_phone(phone) {
            return Err(Error::InvalidInput("Please enter valid 10-digit phone number".to_string()));
        }

        let body = SendOtpRequest { phone: phone.to_string() };
        let _: serde_json::Value = self.api.post_json(Endpoint::SendOtp, &body).await?;
        log::info!("OTP requested for phone ending in {}.", &phone[phone.len() - 2..]);
        Ok(())
    }

    pub async fn verify_otp(&self, phone: &str, otp: &str) -> Result<AuthSessionDto> {
        if !is_valid_phone(phone) {
            return Err(Error::InvalidInput("Please enter valid 10-digit phone number".to_string()));
        }
        if !is_valid_otp(otp) {
            return Err(Error::InvalidInput("Please enter valid 6-digit OTP".to_string()));
        }

        let body = VerifyOtpRequest {
            phone: phone.to_string(),
            otp: otp.to_string(),
        };
        let envelope: ItemEnvelope<AuthSessionDto> = self.api.post_json(Endpoint::VerifyOtp, &body).await?;
        Ok(envelope.into_item())
    }

    pub async fn logout(&self) -> Result<()> {
        let _: serde_json::Value = self.api.post_json(Endpoint::Logout, &serde_json::json!({})).await?;
        Ok(())
    }

    pub async fn profile(&self) -> Result<OwnerProfileDto> {
        let envelope: ItemEnvelope<OwnerProfileDto> = self.api.get_json(Endpoint::Profile, &[]).await?;
        Ok(envelope.into_item())
    }

    pub async fn update_profile(&self, updates: &serde_json::Value) -> Result<OwnerProfileDto> {
        let envelope: ItemEnvelope<OwnerProfileDto> = self.api.put_json(Endpoint::UpdateProfile, updates).await?;
        Ok(envelope.into_item())
    }
}
