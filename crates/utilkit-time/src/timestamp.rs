use jiff::{SignedDuration, Timestamp};

use crate::TimeError;

/// Seconds since 1970-01-01T00:00:00Z, with sub-second precision.
pub fn utc_timestamp() -> f64 {
    Timestamp::now()
        .duration_since(Timestamp::UNIX_EPOCH)
        .as_secs_f64()
}

/// Inverse of [`utc_timestamp`].
pub fn from_utc_timestamp(secs: f64) -> Result<Timestamp, TimeError> {
    if !secs.is_finite() {
        return Err(TimeError::NonFinite(secs));
    }

    let since_epoch = SignedDuration::try_from_secs_f64(secs)?;
    Ok(Timestamp::from_duration(since_epoch)?)
}
