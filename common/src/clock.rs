//! Wall-clock time utilities.

use std::{fmt, ops, str::FromStr, time::Duration};

/// Wall-clock time of day on a 24-hour clock, with minute precision.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Deserialize, serde::Serialize),
    serde(try_from = "String", into = "String")
)]
pub struct ClockTime {
    /// Hour of the day (`0..24`).
    hour: u8,

    /// Minute of the hour (`0..60`).
    minute: u8,
}

impl ClockTime {
    /// Creates a new [`ClockTime`] by checking the provided components are
    /// in range.
    #[must_use]
    pub fn new(hour: u8, minute: u8) -> Option<Self> {
        (hour < 24 && minute < 60).then_some(Self { hour, minute })
    }

    /// Returns the hour of this [`ClockTime`].
    #[must_use]
    pub fn hour(self) -> u8 {
        self.hour
    }

    /// Returns the minute of this [`ClockTime`].
    #[must_use]
    pub fn minute(self) -> u8 {
        self.minute
    }
}

impl fmt::Display for ClockTime {
    /// Formats this [`ClockTime`] as zero-padded `HH:MM`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self { hour, minute } = self;
        write!(f, "{hour:02}:{minute:02}")
    }
}

impl FromStr for ClockTime {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (hour, minute) =
            s.split_once(':').ok_or("missing `:` separator")?;

        let hour = hour.parse().map_err(|_| "invalid hour")?;
        let minute = minute.parse().map_err(|_| "invalid minute")?;

        Self::new(hour, minute).ok_or("out of range")
    }
}

impl TryFrom<String> for ClockTime {
    type Error = &'static str;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ClockTime> for String {
    fn from(time: ClockTime) -> Self {
        time.to_string()
    }
}

impl ops::Add<Duration> for ClockTime {
    type Output = Self;

    /// Advances this [`ClockTime`] by the provided [`Duration`], wrapping
    /// past midnight. Sub-minute precision is discarded.
    fn add(self, rhs: Duration) -> Self::Output {
        let minutes = (u64::from(self.hour) * 60
            + u64::from(self.minute)
            + rhs.as_secs() / 60)
            % (24 * 60);

        #[expect(
            clippy::allow_attributes,
            reason = "TODO: Remove once clippy is fixed"
        )]
        #[allow(
            clippy::cast_possible_truncation,
            reason = "modulo keeps components in range"
        )]
        Self {
            hour: (minutes / 60) as u8,
            minute: (minutes % 60) as u8,
        }
    }
}
