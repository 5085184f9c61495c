pub mod column;
pub mod format;
pub mod operation;

pub use column::{ColumnKind, ColumnProfile};
pub use format::{ExportFormat, SourceFormat};
pub use operation::{AppliedOperation, CleaningOp, SessionWarning};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applied_operation_serializes() {
        let record = AppliedOperation {
            op: CleaningOp::RemoveDuplicates,
            rows_before: 10,
            rows_after: 7,
            cells_changed: 0,
        };
        let json = serde_json::to_string(&record).expect("serialize record");
        assert!(json.contains("remove-duplicates"));
        let round: AppliedOperation = serde_json::from_str(&json).expect("deserialize record");
        assert_eq!(round, record);
        assert_eq!(round.rows_removed(), 3);
    }

    #[test]
    fn profile_serializes() {
        let profile = ColumnProfile::new("age", ColumnKind::Numeric, 2);
        let json = serde_json::to_string(&profile).expect("serialize profile");
        let round: ColumnProfile = serde_json::from_str(&json).expect("deserialize profile");
        assert_eq!(round, profile);
    }

    #[test]
    fn warning_messages_are_stable() {
        assert_eq!(
            SessionWarning::EmptySelection.to_string(),
            "no columns selected; the full column set remains in effect"
        );
        assert_eq!(
            SessionWarning::NoNumericData.to_string(),
            "no numeric columns available"
        );
    }
}
