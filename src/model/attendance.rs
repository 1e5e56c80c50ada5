use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};
use utoipa::ToSchema;

#[derive(
    Debug,
    Default,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    ToSchema,
    AsRefStr,
    Display,
    EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum AttendanceStatus {
    #[default]
    Present,
    Absent,
}

impl TryFrom<String> for AttendanceStatus {
    type Error = strum::ParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceRecord {
    #[schema(example = 1)]
    pub id: i64,

    #[schema(example = "EMP001")]
    pub employee_id: String,

    #[schema(example = "2026-01-05", format = "date", value_type = String)]
    pub date: NaiveDate,

    #[sqlx(try_from = "String")]
    pub status: AttendanceStatus,

    #[schema(example = "2026-01-05T09:00:00Z", format = "date-time", value_type = String)]
    pub created_at: DateTime<Utc>,
}

/// Attendance row joined with the owning employee, used by the admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, ToSchema)]
pub struct AttendanceEntry {
    #[sqlx(flatten)]
    #[serde(flatten)]
    pub record: AttendanceRecord,

    #[schema(example = "John Doe")]
    pub full_name: String,

    #[schema(example = "Engineering")]
    pub department: String,
}

/// Whether `mark` inserted a new row or changed an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkOutcome {
    Created,
    Updated,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MarkedAttendance {
    pub record: AttendanceRecord,
    pub outcome: MarkOutcome,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MarkAttendance {
    #[schema(example = "EMP001")]
    pub employee_id: Option<String>,
    #[schema(example = "2026-01-05", format = "date")]
    pub date: Option<String>,
    /// `Present` or `Absent`; defaults to `Present`
    #[schema(example = "Present")]
    pub status: Option<String>,
}

#[derive(Debug, Default, Clone, Deserialize, Serialize, ToSchema)]
pub struct UpdateAttendance {
    #[schema(example = "Absent")]
    pub status: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_parses_case_insensitively() {
        assert_eq!("absent".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Absent);
        assert_eq!("PRESENT".parse::<AttendanceStatus>().unwrap(), AttendanceStatus::Present);
        assert!("Late".parse::<AttendanceStatus>().is_err());
    }

    #[test]
    fn status_is_stored_under_its_variant_name() {
        assert_eq!(AttendanceStatus::Absent.as_ref(), "Absent");
        assert_eq!(AttendanceStatus::default(), AttendanceStatus::Present);
    }

    #[test]
    fn joined_entry_serializes_flat() {
        let entry = AttendanceEntry {
            record: AttendanceRecord {
                id: 7,
                employee_id: "EMP001".into(),
                date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
                status: AttendanceStatus::Absent,
                created_at: Utc::now(),
            },
            full_name: "John Doe".into(),
            department: "Engineering".into(),
        };

        let value = serde_json::to_value(&entry).unwrap();
        assert_eq!(value["id"], 7);
        assert_eq!(value["date"], "2026-01-05");
        assert_eq!(value["status"], "Absent");
        assert_eq!(value["full_name"], "John Doe");
    }
}
