use crate::utils::error::VehicleError;
use regex::Regex;
use std::fmt;
use std::str::FromStr;

/// Composite vehicle identifier: a two-letter series plus a numeric part.
///
/// The identifier is the vehicle's identity and never changes after the
/// vehicle is created. Parsing accepts exactly two uppercase letters
/// followed by exactly six digits, with one optional hyphen between the
/// two groups. Display renders `"{series}-{number}"` with the number in
/// plain decimal.
///
/// Parsing and display are deliberately not inverses for numbers below
/// 100000: `AB-7` is a valid display form but is rejected by the parser,
/// which requires six digits. Callers must not "fix" this by re-padding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ChassisId {
    pub series: String,
    pub number: u32,
}

impl ChassisId {
    /// No range check here: the entry form rejects non-positive numbers
    /// before they ever reach the domain, and the parser below accepts
    /// `000000` as number 0.
    pub fn new(series: impl Into<String>, number: u32) -> Self {
        Self {
            series: series.into(),
            number,
        }
    }
}

impl FromStr for ChassisId {
    type Err = VehicleError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        // One optional hyphen between the letters and the digits.
        let compact = match input.get(..2).zip(input.get(2..3)) {
            Some((head, "-")) => format!("{}{}", head, &input[3..]),
            _ => input.to_string(),
        };

        let re = Regex::new(r"^([A-Z]{2})([0-9]{6})$").unwrap();
        let caps = re
            .captures(&compact)
            .ok_or_else(|| VehicleError::InvalidChassisId {
                input: input.to_string(),
            })?;

        let number = caps[2]
            .parse::<u32>()
            .map_err(|_| VehicleError::InvalidChassisId {
                input: input.to_string(),
            })?;

        Ok(ChassisId {
            series: caps[1].to_string(),
            number,
        })
    }
}

impl fmt::Display for ChassisId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.series, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_compact_form() {
        let id: ChassisId = "TO123456".parse().unwrap();
        assert_eq!(id.series, "TO");
        assert_eq!(id.number, 123456);
    }

    #[test]
    fn test_parse_hyphenated_form() {
        let id: ChassisId = "TO-123456".parse().unwrap();
        assert_eq!(id, ChassisId::new("TO", 123456));
    }

    #[test]
    fn test_format() {
        assert_eq!(ChassisId::new("TO", 123456).to_string(), "TO-123456");
        assert_eq!("TO123456".parse::<ChassisId>().unwrap().to_string(), "TO-123456");
    }

    #[test]
    fn test_hyphenated_round_trip() {
        let input = "AB-654321";
        let id: ChassisId = input.parse().unwrap();
        assert_eq!(id.to_string(), input);
    }

    #[test]
    fn test_digit_in_series_rejected() {
        // Digit zero where the letter O is expected.
        assert!("T0123456".parse::<ChassisId>().is_err());
    }

    #[test]
    fn test_lowercase_rejected() {
        assert!("to123456".parse::<ChassisId>().is_err());
        assert!("To123456".parse::<ChassisId>().is_err());
    }

    #[test]
    fn test_wrong_lengths_rejected() {
        assert!("A123456".parse::<ChassisId>().is_err());
        assert!("ABC123456".parse::<ChassisId>().is_err());
        assert!("AB12345".parse::<ChassisId>().is_err());
        assert!("AB1234567".parse::<ChassisId>().is_err());
        assert!("".parse::<ChassisId>().is_err());
    }

    #[test]
    fn test_misplaced_characters_rejected() {
        assert!("AB12-3456".parse::<ChassisId>().is_err());
        assert!("AB 123456".parse::<ChassisId>().is_err());
        assert!("AB123456 ".parse::<ChassisId>().is_err());
        assert!("AB--123456".parse::<ChassisId>().is_err());
    }

    #[test]
    fn test_all_zero_number_parses() {
        // The parser checks the six-digit shape only, not the range.
        let id: ChassisId = "AB000000".parse().unwrap();
        assert_eq!(id.number, 0);
    }

    #[test]
    fn test_leading_zeros_do_not_round_trip() {
        let id: ChassisId = "AB-000007".parse().unwrap();
        assert_eq!(id.number, 7);
        assert_eq!(id.to_string(), "AB-7");
        assert!("AB-7".parse::<ChassisId>().is_err());
    }
}
