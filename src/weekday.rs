use serde::{Deserialize, Serialize};
use std::fmt;

/// Day of the week, indexed from Sunday = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Weekday {
    Sunday = 0,
    Monday = 1,
    Tuesday = 2,
    Wednesday = 3,
    Thursday = 4,
    Friday = 5,
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in index order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Returns the weekday index (0..=6, Sunday = 0)
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Returns the weekday for an index in `0..=6`
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < Self::ALL.len() as u8 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Returns the English display name
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }

    /// Maps any integer onto a weekday using a Euclidean remainder, so
    /// negative values wrap backwards from Sunday.
    pub(crate) const fn wrapping(value: i128) -> Self {
        Self::ALL[value.rem_euclid(Self::ALL.len() as i128) as usize]
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_position() {
        for (position, weekday) in Weekday::ALL.iter().enumerate() {
            assert_eq!(usize::from(weekday.index()), position);
        }
        assert_eq!(Weekday::Sunday.index(), 0);
        assert_eq!(Weekday::Saturday.index(), 6);
    }

    #[test]
    fn test_from_index() {
        assert_eq!(Weekday::from_index(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_index(1), Some(Weekday::Monday));
        assert_eq!(Weekday::from_index(6), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_index(7), None);
        assert_eq!(Weekday::from_index(u8::MAX), None);
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(Weekday::wrapping(0), Weekday::Sunday);
        assert_eq!(Weekday::wrapping(8), Weekday::Monday);
        assert_eq!(Weekday::wrapping(-1), Weekday::Saturday);
        assert_eq!(Weekday::wrapping(-7), Weekday::Sunday);
        assert_eq!(Weekday::wrapping(-15), Weekday::Saturday);
    }

    #[test]
    fn test_display() {
        let names: Vec<String> = Weekday::ALL.iter().map(ToString::to_string).collect();
        assert_eq!(
            names,
            ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"]
        );
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Weekday::Thursday).unwrap();
        assert_eq!(json, r#""Thursday""#);

        let parsed: Weekday = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, Weekday::Thursday);

        let result: Result<Weekday, _> = serde_json::from_str(r#""Caturday""#);
        assert!(result.is_err());
    }
}
