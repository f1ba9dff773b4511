use crate::api::turf_dto::TurfDto;

const STATUS_SUSPENDED: &str = "suspended";

/// A bookable sports facility owned by the signed-in user.
#[derive(Debug, Clone)]
pub struct Turf {
    pub id: i64,
    pub name: String,
    pub city: Option<String>,
    pub state: Option<String>,
    pub sport_type: Option<String>,
    pub size: Option<String>,
    pub status: String,

    /// Uniform hourly price; the fallback price for slots without one.
    pub uniform_price: Option<f64>,
}

impl Turf {
    pub fn from_dto(dto: TurfDto) -> Self {
        Turf {
            id: dto.id,
            name: dto.name,
            city: dto.city,
            state: dto.state,
            sport_type: dto.sport_type,
            size: dto.size,
            status: dto.status,
            uniform_price: dto.uniform_price,
        }
    }

    /// Suspended turfs stay visible in listings but cannot take bookings.
    pub fn is_active(&self) -> bool {
        self.status != STATUS_SUSPENDED
    }
}

/// Keeps only turfs eligible for offline booking.
pub fn active_turfs(turfs: Vec<Turf>) -> Vec<Turf> {
    turfs.into_iter().filter(|turf| turf.is_active()).collect()
}
