use serde::{Deserialize, Serialize};

/// Quote currency suffix every accepted symbol carries.
pub const QUOTE_SUFFIX: &str = "-USD";

/// Maximum length of the base asset code.
pub const MAX_BASE_LEN: usize = 5;

/// A validated cryptocurrency ticker such as `BTC-USD`.
///
/// The base asset is 1 to 5 uppercase ASCII letters followed by the
/// literal `-USD` suffix.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Ticker(String);

impl Ticker {
    /// Parse a ticker, returning `None` when it does not match the pattern.
    pub fn parse(s: &str) -> Option<Self> {
        let base = s.strip_suffix(QUOTE_SUFFIX)?;
        let valid = !base.is_empty()
            && base.len() <= MAX_BASE_LEN
            && base.chars().all(|c| c.is_ascii_uppercase());

        valid.then(|| Self(s.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

}

impl std::fmt::Display for Ticker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for Ticker {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Ticker::parse(&value).ok_or_else(|| format!("invalid ticker: {}", value))
    }
}

impl From<Ticker> for String {
    fn from(ticker: Ticker) -> Self {
        ticker.0
    }
}

/// Result of splitting a comma-separated ticker list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickerList {
    /// Accepted tickers in input order, without duplicates.
    pub valid: Vec<Ticker>,
    /// Entries that failed validation, as given.
    pub rejected: Vec<String>,
    entries: Vec<String>,
}

impl TickerList {
    /// Split `raw` on commas and validate each entry.
    ///
    /// Surrounding whitespace is ignored and empty entries are dropped.
    pub fn parse(raw: &str) -> Self {
        let mut list = TickerList::default();

        for entry in raw.split(',').map(str::trim).filter(|e| !e.is_empty()) {
            list.entries.push(entry.to_string());
            match Ticker::parse(entry) {
                Some(ticker) if !list.valid.contains(&ticker) => list.valid.push(ticker),
                Some(_) => {}
                None => list.rejected.push(entry.to_string()),
            }
        }

        list
    }

    /// Every non-empty entry as requested, including rejects and repeats.
    pub fn requested(&self) -> &[String] {
        &self.entries
    }
}
