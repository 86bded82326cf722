use std::fmt;

use uom::si::{
    f64::Time,
    time::{minute, second},
};

use crate::models::mechanical::rotor_loss::core::ParseError;

/// How a time entry should be read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum TimeFormat {
    /// Decimal seconds, e.g. `"4.2"`.
    #[default]
    Seconds,

    /// Decimal minutes, e.g. `"1.5"` for ninety seconds.
    Minutes,

    /// Stopwatch reading `"MM:SS"`, e.g. `"1:30"`.
    ///
    /// The seconds part may carry a fraction (`"0:04.25"`).
    MinutesSeconds,
}

impl fmt::Display for TimeFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Seconds => "seconds",
            Self::Minutes => "minutes",
            Self::MinutesSeconds => "MM:SS",
        })
    }
}

/// A time measurement as entered by the user.
#[derive(Debug, Clone, PartialEq)]
pub enum TimeEntry {
    /// A numeric value in seconds.
    Seconds(f64),

    /// A numeric value in minutes.
    Minutes(f64),

    /// Text to be read in the given format.
    Text { text: String, format: TimeFormat },
}

impl TimeEntry {
    /// Creates a text entry read with `format`.
    pub fn text(text: impl Into<String>, format: TimeFormat) -> Self {
        Self::Text {
            text: text.into(),
            format,
        }
    }

    /// Resolves the entry to a time.
    ///
    /// Numeric entries always resolve; their sign and magnitude are checked
    /// later by the calculation that uses them.
    ///
    /// # Errors
    ///
    /// Returns a [`ParseError`] if a text entry is malformed.
    pub fn to_time(&self) -> Result<Time, ParseError> {
        match self {
            Self::Seconds(value) => Ok(Time::new::<second>(*value)),
            Self::Minutes(value) => Ok(Time::new::<minute>(*value)),
            Self::Text { text, format } => parse_time(text, *format),
        }
    }
}

impl From<f64> for TimeEntry {
    fn from(seconds: f64) -> Self {
        Self::Seconds(seconds)
    }
}

/// Reads a time from text in the given format.
///
/// Surrounding whitespace is ignored. Nothing malformed is ever read as zero.
///
/// # Errors
///
/// Returns a [`ParseError`] if the text is empty, is not a number in the
/// expected layout, or holds a negative or non-finite component.
pub fn parse_time(text: &str, format: TimeFormat) -> Result<Time, ParseError> {
    let trimmed = text.trim();
    let number = |part: &str| parse_component(text, part, format);

    match format {
        TimeFormat::Seconds => number(trimmed).map(Time::new::<second>),
        TimeFormat::Minutes => number(trimmed).map(Time::new::<minute>),
        TimeFormat::MinutesSeconds => {
            let mut parts = trimmed.split(':');
            let (Some(minutes), Some(seconds), None) = (parts.next(), parts.next(), parts.next())
            else {
                return Err(ParseError::new(text, format, "expected exactly one ':'"));
            };
            Ok(Time::new::<minute>(number(minutes)?) + Time::new::<second>(number(seconds)?))
        }
    }
}

fn parse_component(input: &str, part: &str, format: TimeFormat) -> Result<f64, ParseError> {
    let part = part.trim();
    if part.is_empty() {
        return Err(ParseError::new(input, format, "missing number"));
    }

    let value: f64 = part
        .parse()
        .map_err(|_| ParseError::new(input, format, "not a number"))?;

    if !value.is_finite() {
        return Err(ParseError::new(input, format, "not a finite number"));
    }
    if value < 0.0 {
        return Err(ParseError::new(input, format, "negative time"));
    }
    Ok(value)
}
