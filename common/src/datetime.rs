//! Date and time utilities.

use time::{
    format_description::BorrowedFormatItem, macros::format_description,
    OffsetDateTime, UtcOffset,
};

/// `dd/mm/yyyy`, as stamped on Brazilian documents.
const BRAZILIAN_DATE: &[BorrowedFormatItem<'static>] =
    format_description!("[day]/[month]/[year]");

/// UTC date and time.
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct DateTime(OffsetDateTime);

impl DateTime {
    /// Creates a new [`DateTime`] representing the current date and time.
    #[must_use]
    pub fn now() -> Self {
        Self(OffsetDateTime::now_utc().to_offset(UtcOffset::UTC))
    }

    /// Creates a new [`DateTime`] from the provided Unix timestamp.
    ///
    /// [`None`] is returned if the timestamp is invalid.
    #[must_use]
    pub fn from_unix_timestamp(timestamp: i64) -> Option<Self> {
        Some(Self(OffsetDateTime::from_unix_timestamp(timestamp).ok()?))
    }

    /// Returns the Unix timestamp of this [`DateTime`].
    #[must_use]
    pub fn unix_timestamp(&self) -> i64 {
        self.0.unix_timestamp()
    }

    /// Returns the date part of this [`DateTime`] as `dd/mm/yyyy`.
    #[expect(clippy::missing_panics_doc, reason = "infallible")]
    #[must_use]
    pub fn to_brazilian_date(&self) -> String {
        self.0.format(BRAZILIAN_DATE).unwrap_or_else(|e| {
            panic!("cannot format `DateTime` as a Brazilian date: {e}")
        })
    }
}

#[cfg(feature = "serde")]
pub mod serde {
    //! Module providing integration with [`serde`] crate.

    use super::DateTime;

    pub mod unix_timestamp {
        //! Module providing serialization and deserialization of
        //! [`DateTime`] as a Unix timestamp.

        use serde::{de::Error, Deserialize, Deserializer, Serializer};

        use super::DateTime;

        /// Serializes the [`DateTime`] as a Unix timestamp.
        ///
        /// # Errors
        ///
        /// Returns an error if the timestamp is invalid.
        pub fn serialize<S>(
            dt: &DateTime,
            serializer: S,
        ) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            serializer.serialize_i64(dt.unix_timestamp())
        }

        /// Deserializes the Unix timestamp into a [`DateTime`].
        ///
        /// # Errors
        ///
        /// Returns an error if the timestamp is invalid.
        pub fn deserialize<'de, D>(deserializer: D) -> Result<DateTime, D::Error>
        where
            D: Deserializer<'de>,
        {
            DateTime::from_unix_timestamp(i64::deserialize(deserializer)?)
                .ok_or_else(|| Error::custom("invalid timestamp"))
        }
    }
}

#[cfg(test)]
mod spec {
    use super::DateTime;

    #[test]
    fn formats_brazilian_date() {
        // 2020-06-15T12:00:00Z
        let dt = DateTime::from_unix_timestamp(1_592_222_400).unwrap();

        assert_eq!(dt.to_brazilian_date(), "15/06/2020");
    }

    #[test]
    fn roundtrips_unix_timestamp() {
        let dt = DateTime::from_unix_timestamp(1_592_222_400).unwrap();

        assert_eq!(
            DateTime::from_unix_timestamp(dt.unix_timestamp()),
            Some(dt),
        );
    }
}
