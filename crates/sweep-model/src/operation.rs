use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The dataset cleaning operations. Each mutates the session's working
/// dataset in place; application order is caller-chosen and significant
/// (filling means before dropping null rows keeps rows the reverse order
/// would discard).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CleaningOp {
    /// Remove rows whose values are equal across all columns, keeping the
    /// first occurrence and the relative order of kept rows.
    RemoveDuplicates,
    /// Fill missing entries of numeric columns with the column mean computed
    /// over the non-missing values. Columns with no non-missing values are
    /// left untouched.
    FillMissingNumericWithMean,
    /// Remove every row containing at least one missing value in any column.
    DropRowsWithAnyNull,
}

impl CleaningOp {
    /// All operations in their canonical listing order.
    pub const ALL: [CleaningOp; 3] = [
        CleaningOp::RemoveDuplicates,
        CleaningOp::FillMissingNumericWithMean,
        CleaningOp::DropRowsWithAnyNull,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CleaningOp::RemoveDuplicates => "remove-duplicates",
            CleaningOp::FillMissingNumericWithMean => "fill-missing-numeric-with-mean",
            CleaningOp::DropRowsWithAnyNull => "drop-rows-with-any-null",
        }
    }

    /// One-line description for operation listings.
    pub fn description(&self) -> &'static str {
        match self {
            CleaningOp::RemoveDuplicates => {
                "Remove duplicate rows, keeping the first occurrence"
            }
            CleaningOp::FillMissingNumericWithMean => {
                "Fill missing values in numeric columns with the column mean"
            }
            CleaningOp::DropRowsWithAnyNull => {
                "Drop every row that contains at least one missing value"
            }
        }
    }
}

impl fmt::Display for CleaningOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CleaningOp {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remove-duplicates" => Ok(CleaningOp::RemoveDuplicates),
            "fill-missing-numeric-with-mean" | "fill-mean" => {
                Ok(CleaningOp::FillMissingNumericWithMean)
            }
            "drop-rows-with-any-null" | "drop-nulls" => Ok(CleaningOp::DropRowsWithAnyNull),
            _ => Err(format!("unknown cleaning operation: {}", s)),
        }
    }
}

/// Audit record appended to the session log for each cleaning application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedOperation {
    pub op: CleaningOp,
    pub rows_before: usize,
    pub rows_after: usize,
    /// Cells rewritten by the operation; only mean fill reports a non-zero
    /// count.
    pub cells_changed: usize,
}

impl AppliedOperation {
    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// Soft warnings surfaced to the caller. Warnings never abort processing;
/// the affected step degrades to a no-op or a documented default instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionWarning {
    /// No columns were chosen; the full column set remains in effect.
    EmptySelection,
    /// No numeric columns are available for the attempted operation.
    NoNumericData,
}

impl SessionWarning {
    pub fn message(&self) -> &'static str {
        match self {
            SessionWarning::EmptySelection => {
                "no columns selected; the full column set remains in effect"
            }
            SessionWarning::NoNumericData => "no numeric columns available",
        }
    }
}

impl fmt::Display for SessionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn op_round_trips_through_str() {
        for op in CleaningOp::ALL {
            assert_eq!(op.as_str().parse::<CleaningOp>(), Ok(op));
        }
    }

    #[test]
    fn op_parse_accepts_short_aliases() {
        assert_eq!(
            "fill-mean".parse::<CleaningOp>(),
            Ok(CleaningOp::FillMissingNumericWithMean)
        );
        assert_eq!(
            "drop-nulls".parse::<CleaningOp>(),
            Ok(CleaningOp::DropRowsWithAnyNull)
        );
        assert!("shuffle".parse::<CleaningOp>().is_err());
    }

    #[test]
    fn rows_removed_never_underflows() {
        let record = AppliedOperation {
            op: CleaningOp::FillMissingNumericWithMean,
            rows_before: 3,
            rows_after: 3,
            cells_changed: 2,
        };
        assert_eq!(record.rows_removed(), 0);
    }
}
