use chrono::NaiveDate;
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::Deserialize;
use validator::Validate;

use crate::error::ApiError;

/// Salary arrives as either a JSON number or a numeric string; both the
/// create and update paths parse it to a `Decimal` rounded to 2 places.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum SalaryInput {
    Number(f64),
    Text(String),
}

impl SalaryInput {
    pub fn parse(&self) -> Result<Decimal, ApiError> {
        let parsed = match self {
            SalaryInput::Number(n) => Decimal::from_f64(*n),
            SalaryInput::Text(s) => s.trim().parse::<Decimal>().ok(),
        };
        parsed
            .map(|d| d.round_dp(2))
            .ok_or_else(|| ApiError::Validation("Invalid data: salary must be a number".to_string()))
    }
}

pub fn parse_date_hired(raw: &str) -> Result<NaiveDate, ApiError> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        ApiError::Validation(
            "Invalid data: dateHired must be a valid date in YYYY-MM-DD format".to_string(),
        )
    })
}

/// Body for `POST /api/employees`. Every field is declared optional so the
/// handler can report `Missing required field: <name>` with the exact wire
/// field name instead of a deserializer error.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeStoreSchema {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "email must be at most 100 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 50, message = "department must be at most 50 characters"))]
    pub department: Option<String>,

    #[validate(length(max = 100, message = "position must be at most 100 characters"))]
    pub position: Option<String>,

    pub salary: Option<SalaryInput>,

    pub date_hired: Option<String>,

    #[validate(length(max = 20, message = "status must be at most 20 characters"))]
    pub status: Option<String>,
}

/// Fully validated and normalized create payload, ready to insert.
#[derive(Debug)]
pub struct NewEmployee {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub department: String,
    pub position: String,
    pub salary: Decimal,
    pub date_hired: NaiveDate,
    pub status: String,
}

impl EmployeeStoreSchema {
    /// Check presence of all required fields (in contract order, first gap
    /// wins), enforce length caps, then normalize: trim name/email/phone/
    /// position and lowercase email. Department and status are stored as sent.
    pub fn into_validated(self) -> Result<NewEmployee, ApiError> {
        let required = [
            ("name", self.name.as_deref()),
            ("email", self.email.as_deref()),
            ("phone", self.phone.as_deref()),
            ("department", self.department.as_deref()),
            ("position", self.position.as_deref()),
        ];
        for (field, value) in required {
            if value.map_or(true, |v| v.trim().is_empty()) {
                return Err(missing_field(field));
            }
        }
        if self.salary.is_none() {
            return Err(missing_field("salary"));
        }
        if self.date_hired.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(missing_field("dateHired"));
        }
        if self.status.as_deref().map_or(true, |v| v.trim().is_empty()) {
            return Err(missing_field("status"));
        }

        validate_lengths(&self)?;

        let salary = self.salary.as_ref().unwrap().parse()?;
        let date_hired = parse_date_hired(self.date_hired.as_deref().unwrap())?;

        Ok(NewEmployee {
            name: self.name.unwrap().trim().to_string(),
            email: self.email.unwrap().trim().to_lowercase(),
            phone: self.phone.unwrap().trim().to_string(),
            department: self.department.unwrap(),
            position: self.position.unwrap().trim().to_string(),
            salary,
            date_hired,
            status: self.status.unwrap(),
        })
    }
}

/// Body for `PUT /api/employees/{id}`. Only supplied fields are applied;
/// `null` counts as absent.
#[derive(Debug, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeUpdateSchema {
    #[validate(length(max = 100, message = "name must be at most 100 characters"))]
    pub name: Option<String>,

    #[validate(length(max = 100, message = "email must be at most 100 characters"))]
    pub email: Option<String>,

    #[validate(length(max = 20, message = "phone must be at most 20 characters"))]
    pub phone: Option<String>,

    #[validate(length(max = 50, message = "department must be at most 50 characters"))]
    pub department: Option<String>,

    #[validate(length(max = 100, message = "position must be at most 100 characters"))]
    pub position: Option<String>,

    pub salary: Option<SalaryInput>,

    pub date_hired: Option<String>,

    #[validate(length(max = 20, message = "status must be at most 20 characters"))]
    pub status: Option<String>,
}

/// Optional query-string filters for `GET /api/employees`.
#[derive(Debug, Default, Deserialize)]
pub struct EmployeeListQuery {
    pub search: Option<String>,
    pub department: Option<String>,
    pub status: Option<String>,
}

fn missing_field(field: &str) -> ApiError {
    ApiError::Validation(format!("Missing required field: {}", field))
}

/// Run the derive-based length checks and fold any failures into a single
/// validation message.
pub fn validate_lengths<T: Validate>(payload: &T) -> Result<(), ApiError> {
    if let Err(errors) = payload.validate() {
        let mut parts: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| {
                errs.iter().map(|e| {
                    e.message
                        .clone()
                        .unwrap_or_else(|| "Invalid input".into())
                        .to_string()
                })
            })
            .collect();
        parts.sort();
        return Err(ApiError::Validation(format!(
            "Invalid data: {}",
            parts.join("; ")
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_store_body() -> EmployeeStoreSchema {
        serde_json::from_value(serde_json::json!({
            "name": "  John Doe  ",
            "email": " John.Doe@Example.COM ",
            "phone": " +1 (555) 123-4567 ",
            "department": "IT",
            "position": " Software Engineer ",
            "salary": 75000.50,
            "dateHired": "2023-01-15",
            "status": "Active"
        }))
        .unwrap()
    }

    #[test]
    fn create_normalizes_fields() {
        let emp = full_store_body().into_validated().unwrap();
        assert_eq!(emp.name, "John Doe");
        assert_eq!(emp.email, "john.doe@example.com");
        assert_eq!(emp.phone, "+1 (555) 123-4567");
        assert_eq!(emp.position, "Software Engineer");
        assert_eq!(emp.department, "IT");
        assert_eq!(emp.salary, Decimal::new(7500050, 2));
        assert_eq!(emp.date_hired, NaiveDate::from_ymd_opt(2023, 1, 15).unwrap());
        assert_eq!(emp.status, "Active");
    }

    #[test]
    fn missing_field_reported_with_wire_name() {
        let mut body = full_store_body();
        body.date_hired = None;
        let err = body.into_validated().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ref m) if m == "Missing required field: dateHired"
        ));
    }

    #[test]
    fn empty_string_counts_as_missing() {
        let mut body = full_store_body();
        body.name = Some("   ".to_string());
        let err = body.into_validated().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ref m) if m == "Missing required field: name"
        ));
    }

    #[test]
    fn first_missing_field_wins() {
        let mut body = full_store_body();
        body.email = None;
        body.status = None;
        let err = body.into_validated().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ref m) if m == "Missing required field: email"
        ));
    }

    #[test]
    fn salary_accepts_numeric_string() {
        assert_eq!(
            SalaryInput::Text(" 68000.5 ".to_string()).parse().unwrap(),
            Decimal::new(680005, 1)
        );
    }

    #[test]
    fn salary_rejects_non_numeric_text() {
        let err = SalaryInput::Text("lots".to_string()).parse().unwrap_err();
        assert!(matches!(
            err,
            ApiError::Validation(ref m) if m == "Invalid data: salary must be a number"
        ));
    }

    #[test]
    fn salary_rounds_to_two_places() {
        assert_eq!(
            SalaryInput::Number(1234.567).parse().unwrap(),
            Decimal::new(123457, 2)
        );
    }

    #[test]
    fn date_hired_must_be_iso() {
        assert!(parse_date_hired("2023-01-15").is_ok());
        assert!(parse_date_hired("15/01/2023").is_err());
        assert!(parse_date_hired("2023-13-40").is_err());
    }

    #[test]
    fn over_long_name_rejected() {
        let mut body = full_store_body();
        body.name = Some("x".repeat(101));
        let err = body.into_validated().unwrap_err();
        assert!(matches!(err, ApiError::Validation(ref m) if m.contains("100 characters")));
    }
}
