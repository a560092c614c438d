use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Employee row, doubling as the wire representation (camelCase field names,
/// salary as a JSON number, dateHired as an ISO `YYYY-MM-DD` string).
#[derive(sqlx::FromRow, Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub salary: Decimal,
    pub date_hired: NaiveDate,
    pub status: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Column list shared by every employee query so SELECT and RETURNING clauses
/// stay in sync with the struct above.
pub const EMPLOYEE_COLUMNS: &str =
    "id, name, email, phone, department, position, salary, date_hired, status, created_at, updated_at";

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample() -> Employee {
        Employee {
            id: 42,
            name: "John Doe".to_string(),
            email: "john.doe@example.com".to_string(),
            phone: "+1 (555) 123-4567".to_string(),
            department: "IT".to_string(),
            position: "Software Engineer".to_string(),
            salary: Decimal::new(7500050, 2), // 75000.50
            date_hired: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
            status: "Active".to_string(),
            created_at: Utc.with_ymd_and_hms(2023, 1, 15, 10, 30, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 2, 1, 8, 0, 5).unwrap(),
        }
    }

    #[test]
    fn wire_field_names_are_camel_case() {
        let value = serde_json::to_value(sample()).unwrap();
        assert_eq!(value["dateHired"], serde_json::json!("2023-01-15"));
        assert_eq!(value["createdAt"].as_str().unwrap(), "2023-01-15T10:30:00Z");
        assert_eq!(value["updatedAt"].as_str().unwrap(), "2023-02-01T08:00:05Z");
        assert!(value["salary"].is_number());
        assert_eq!(value["salary"].as_f64().unwrap(), 75000.5);
    }

    #[test]
    fn wire_round_trip_preserves_all_fields() {
        let original = sample();
        let json = serde_json::to_string(&original).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, original.id);
        assert_eq!(back.name, original.name);
        assert_eq!(back.email, original.email);
        assert_eq!(back.phone, original.phone);
        assert_eq!(back.department, original.department);
        assert_eq!(back.position, original.position);
        assert_eq!(back.salary, original.salary);
        assert_eq!(back.date_hired, original.date_hired);
        assert_eq!(back.status, original.status);
        // timestamp precision to the second survives the round trip
        assert_eq!(back.created_at, original.created_at);
        assert_eq!(back.updated_at, original.updated_at);
    }
}
