use std::fmt;
use std::str::FromStr;
use thiserror::Error;

const TOTAL_LABEL: &str = "Total Posts";
const USERS_LABEL: &str = "Unique Users";
const AVERAGE_LABEL: &str = "Average Words per Post";

/// Aggregate statistics for one dataset. `Summary::default()` is the zero
/// summary reported when analysis fails.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Summary {
    pub total_posts: usize,
    pub unique_users: usize,
    pub average_words_per_post: f64,
}

impl Summary {
    pub fn new(total_posts: usize, unique_users: usize, average_words_per_post: f64) -> Self {
        Self { total_posts, unique_users, average_words_per_post }
    }

    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// Renders the three-line report, trailing newline included.
impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{TOTAL_LABEL}: {}", self.total_posts)?;
        writeln!(f, "{USERS_LABEL}: {}", self.unique_users)?;
        writeln!(f, "{AVERAGE_LABEL}: {:.2}", self.average_words_per_post)
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid summary: {0}")]
pub struct ParseSummaryError(pub String);

impl FromStr for Summary {
    type Err = ParseSummaryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut lines = s.lines();
        let mut field = |label: &str| -> Result<String, ParseSummaryError> {
            let line = lines.next().ok_or_else(|| ParseSummaryError(format!("missing '{label}' line")))?;
            let (key, value) = line
                .split_once(':')
                .ok_or_else(|| ParseSummaryError(format!("no ':' in line {line:?}")))?;
            if key.trim() != label {
                return Err(ParseSummaryError(format!("expected '{label}', found '{}'", key.trim())));
            }
            Ok(value.trim().to_string())
        };

        let total = field(TOTAL_LABEL)?;
        let users = field(USERS_LABEL)?;
        let avg = field(AVERAGE_LABEL)?;
        Ok(Summary {
            total_posts: total.parse::<usize>().map_err(|e| ParseSummaryError(format!("{TOTAL_LABEL}: {e}")))?,
            unique_users: users.parse::<usize>().map_err(|e| ParseSummaryError(format!("{USERS_LABEL}: {e}")))?,
            average_words_per_post: avg
                .parse::<f64>()
                .map_err(|e| ParseSummaryError(format!("{AVERAGE_LABEL}: {e}")))?,
        })
    }
}
