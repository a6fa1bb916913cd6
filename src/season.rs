use chrono::Datelike;
use std::fmt;
use std::str::FromStr;

/// September, 0-indexed. The regular season opens in autumn.
const SEASON_START_MONTH0: u32 = 8;

/// League season spanning two calendar years, printed as e.g. `20242025`
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SeasonId {
    start_year: i32,
}

impl SeasonId {
    pub fn starting(start_year: i32) -> Self {
        Self { start_year }
    }

    pub fn start_year(&self) -> i32 {
        self.start_year
    }

    pub fn end_year(&self) -> i32 {
        self.start_year + 1
    }

    pub fn previous(&self) -> Self {
        Self::starting(self.start_year - 1)
    }
}

impl fmt::Display for SeasonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.start_year, self.end_year())
    }
}

impl FromStr for SeasonId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.len() != 8 || !s.chars().all(|c| c.is_ascii_digit()) {
            return Err(format!("Invalid season '{}'. Use e.g. 20242025", s));
        }
        let start: i32 = s[..4].parse().map_err(|_| format!("Invalid season '{}'", s))?;
        let end: i32 = s[4..].parse().map_err(|_| format!("Invalid season '{}'", s))?;
        if end != start + 1 {
            return Err(format!(
                "Invalid season '{}': years must be consecutive",
                s
            ));
        }
        Ok(Self::starting(start))
    }
}

/// Season in progress (or about to start) on the given date
pub fn current_season<D: Datelike>(reference: &D) -> SeasonId {
    if reference.month0() >= SEASON_START_MONTH0 {
        SeasonId::starting(reference.year())
    } else {
        SeasonId::starting(reference.year() - 1)
    }
}
