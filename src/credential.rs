use md5::{Digest, Md5};
use time::{OffsetDateTime, UtcOffset};

use crate::constants::AUTH_PREFIX;

/// Derives the daily `X-Auth` value: MD5 of `Valantis_YYYYMMDD` (UTC date),
/// as lowercase hex.
pub fn derive_credential(now: OffsetDateTime) -> String {
    let date = now.to_offset(UtcOffset::UTC).date();
    let stamp = format!(
        "{:04}{:02}{:02}",
        date.year(),
        u8::from(date.month()),
        date.day()
    );

    let digest = Md5::digest(format!("{}{}", AUTH_PREFIX, stamp).as_bytes());
    format!("{:x}", digest)
}

pub fn current_credential() -> String {
    derive_credential(OffsetDateTime::now_utc())
}

/// Where the client takes the `X-Auth` value from on each request.
#[derive(Debug, Clone, Default)]
pub enum CredentialSource {
    /// Recomputed from the wall clock for every call.
    #[default]
    Daily,
    /// Supplied by the caller and sent unchanged.
    Fixed(String),
}

impl CredentialSource {
    pub fn credential(&self) -> String {
        match self {
            CredentialSource::Daily => current_credential(),
            CredentialSource::Fixed(value) => value.clone(),
        }
    }
}
