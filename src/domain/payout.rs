use crate::api::payout_dto::PayoutDto;

/// One settlement period. All amounts are server-computed; the client never
/// re-derives commission.
#[derive(Debug, Clone)]
pub struct Payout {
    pub id: i64,
    pub status: String,
    pub period_start: Option<String>,
    pub period_end: Option<String>,
    pub total_bookings_amount: f64,
    pub platform_fee: f64,
    pub net_amount: f64,
    pub paid_at: Option<String>,
}

impl Payout {
    pub fn from_dto(dto: PayoutDto) -> Self {
        Payout {
            id: dto.id,
            status: dto.status.unwrap_or_else(|| "pending".to_string()),
            period_start: dto.period_start,
            period_end: dto.period_end,
            total_bookings_amount: dto.total_bookings_amount.unwrap_or(0.0),
            platform_fee: dto.platform_fee.unwrap_or(0.0),
            net_amount: dto.net_amount.unwrap_or(0.0),
            paid_at: dto.paid_at,
        }
    }

    pub fn is_paid(&self) -> bool {
        self.paid_at.is_some()
    }
}
