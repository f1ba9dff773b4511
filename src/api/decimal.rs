use serde::{Deserialize, Deserializer};

/// Deserializes an optional decimal field that the backend emits either as a
/// JSON number or as a quoted string ("500.00"). Unparseable strings map to
/// `None`.
pub(crate) fn opt_decimal<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDecimal {
        Number(f64),
        Text(String),
    }

    let raw: Option<RawDecimal> = Option::deserialize(deserializer)?;

    Ok(match raw {
        Some(RawDecimal::Number(n)) => Some(n),
        Some(RawDecimal::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    })
}
