/// Every backend route the owner app talks to, in one place.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Endpoint {
    SendOtp,
    VerifyOtp,
    Logout,
    Profile,
    UpdateProfile,

    DashboardStats,
    RecentBookings,

    Turfs,
    TurfDetail(i64),
    TurfRequestUpdate(i64),

    GenerateSlots,
    Slots,

    Bookings,
    OfflineBooking,
    BookingStats,

    Payouts,
    PayoutDetail(i64),
}

impl Endpoint {
    pub fn path(&self) -> String {
        match self {
            Self::SendOtp => "/auth/send-otp".to_string(),
            Self::VerifyOtp => "/auth/verify-otp".to_string(),
            Self::Logout => "/auth/logout".to_string(),
            Self::Profile => "/me".to_string(),
            Self::UpdateProfile => "/auth/profile".to_string(),

            Self::DashboardStats => "/dashboard/stats".to_string(),
            Self::RecentBookings => "/dashboard/recent-bookings".to_string(),

            Self::Turfs => "/turfs".to_string(),
            Self::TurfDetail(id) => format!("/turfs/{}", id),
            Self::TurfRequestUpdate(id) => format!("/turfs/{}/request-update", id),

            Self::GenerateSlots => "/slots/generate".to_string(),
            Self::Slots => "/slots".to_string(),

            Self::Bookings => "/bookings".to_string(),
            Self::OfflineBooking => "/bookings/offline".to_string(),
            Self::BookingStats => "/bookings/stats".to_string(),

            Self::Payouts => "/payouts".to_string(),
            Self::PayoutDetail(id) => format!("/payouts/{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parameterized_paths() {
        assert_eq!(Endpoint::TurfDetail(12).path(), "/turfs/12");
        assert_eq!(Endpoint::TurfRequestUpdate(12).path(), "/turfs/12/request-update");
        assert_eq!(Endpoint::PayoutDetail(3).path(), "/payouts/3");
        assert_eq!(Endpoint::OfflineBooking.path(), "/bookings/offline");
    }
}
