use axum::{
    extract::{Path, Query},
    http::StatusCode,
    Extension, Json,
};
use serde_json::json;
use sqlx::PgPool;

use crate::error::{map_unique_violation, ApiError};
use crate::models::employee::{Employee, EMPLOYEE_COLUMNS};
use crate::schemas::employee_schema::{
    validate_lengths, EmployeeListQuery, EmployeeStoreSchema, EmployeeUpdateSchema,
};
use crate::utils::handler::HandlerResult;
use crate::utils::response::ApiResponse;

const DUPLICATE_EMAIL: &str = "Employee with this email already exists";
const NOT_FOUND: &str = "Employee not found";

/// GET /api/employees — list with optional search/department/status filters.
///
/// `search` does a case-insensitive substring match across name, email,
/// department and position (OR); department and status filter by exact match.
/// All supplied filters AND together. Newest rows (highest id) come first.
pub async fn index(
    Extension(db): Extension<PgPool>,
    Query(params): Query<EmployeeListQuery>,
) -> HandlerResult {
    let search = params.search.as_deref().unwrap_or("").trim().to_string();
    let department = params.department.as_deref().unwrap_or("").trim().to_string();
    let status = params.status.as_deref().unwrap_or("").trim().to_string();

    let sql = format!(
        r#"
        SELECT {EMPLOYEE_COLUMNS}
        FROM employees
        WHERE ($1 = ''
               OR name ILIKE '%' || $1 || '%'
               OR email ILIKE '%' || $1 || '%'
               OR department ILIKE '%' || $1 || '%'
               OR position ILIKE '%' || $1 || '%')
          AND ($2 = '' OR department = $2)
          AND ($3 = '' OR status = $3)
        ORDER BY id DESC
        "#
    );
    let employees = sqlx::query_as::<_, Employee>(&sql)
        .bind(&search)
        .bind(&department)
        .bind(&status)
        .fetch_all(&db)
        .await?;

    let response = ApiResponse::success_with_data(json!({ "employees": employees }));
    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/employees/{id}
pub async fn show(Extension(db): Extension<PgPool>, Path(id): Path<i64>) -> HandlerResult {
    let sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(id)
        .fetch_optional(&db)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;

    let response = ApiResponse::success_with_data(json!({ "employee": employee }));
    Ok((StatusCode::OK, Json(response)))
}

/// POST /api/employees
pub async fn store(
    Extension(db): Extension<PgPool>,
    Json(payload): Json<EmployeeStoreSchema>,
) -> HandlerResult {
    let new_employee = payload.into_validated()?;

    // Returning early drops the transaction, which rolls it back.
    let mut tx = db.begin().await?;

    let existing: i64 = sqlx::query_scalar("SELECT COUNT(1) FROM employees WHERE email = $1")
        .bind(&new_employee.email)
        .fetch_one(&mut *tx)
        .await?;
    if existing > 0 {
        return Err(ApiError::Validation(DUPLICATE_EMAIL.to_string()));
    }

    let sql = format!(
        r#"
        INSERT INTO employees (name, email, phone, department, position, salary, date_hired, status)
        VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
        RETURNING {EMPLOYEE_COLUMNS}
        "#
    );
    let employee = sqlx::query_as::<_, Employee>(&sql)
        .bind(&new_employee.name)
        .bind(&new_employee.email)
        .bind(&new_employee.phone)
        .bind(&new_employee.department)
        .bind(&new_employee.position)
        .bind(new_employee.salary)
        .bind(new_employee.date_hired)
        .bind(&new_employee.status)
        .fetch_one(&mut *tx)
        .await
        // The unique index catches inserts that raced past the COUNT check
        .map_err(|e| map_unique_violation(e, DUPLICATE_EMAIL))?;

    tx.commit().await?;

    let response = ApiResponse::success_with_message(
        "Employee created successfully",
        json!({ "employee": employee }),
    );
    Ok((StatusCode::CREATED, Json(response)))
}

/// PUT /api/employees/{id} — partial update; only supplied fields change.
pub async fn update(
    Extension(db): Extension<PgPool>,
    Path(id): Path<i64>,
    Json(payload): Json<EmployeeUpdateSchema>,
) -> HandlerResult {
    let mut tx = db.begin().await?;

    let select_sql = format!("SELECT {EMPLOYEE_COLUMNS} FROM employees WHERE id = $1");
    let mut employee = sqlx::query_as::<_, Employee>(&select_sql)
        .bind(id)
        .fetch_optional(&mut *tx)
        .await?
        .ok_or_else(|| ApiError::NotFound(NOT_FOUND.to_string()))?;

    validate_lengths(&payload)?;

    if let Some(name) = &payload.name {
        employee.name = name.trim().to_string();
    }
    if let Some(email) = &payload.email {
        let new_email = email.trim().to_lowercase();
        if new_email != employee.email {
            // Uniqueness only re-checked when the address actually changes
            let taken: i64 =
                sqlx::query_scalar("SELECT COUNT(1) FROM employees WHERE email = $1")
                    .bind(&new_email)
                    .fetch_one(&mut *tx)
                    .await?;
            if taken > 0 {
                return Err(ApiError::Validation(DUPLICATE_EMAIL.to_string()));
            }
        }
        employee.email = new_email;
    }
    if let Some(phone) = &payload.phone {
        employee.phone = phone.trim().to_string();
    }
    if let Some(department) = &payload.department {
        employee.department = department.clone();
    }
    if let Some(position) = &payload.position {
        employee.position = position.trim().to_string();
    }
    if let Some(salary) = &payload.salary {
        employee.salary = salary.parse()?;
    }
    if let Some(date_hired) = &payload.date_hired {
        employee.date_hired = crate::schemas::employee_schema::parse_date_hired(date_hired)?;
    }
    if let Some(status) = &payload.status {
        employee.status = status.clone();
    }

    let update_sql = format!(
        r#"
        UPDATE employees
        SET name = $1, email = $2, phone = $3, department = $4, position = $5,
            salary = $6, date_hired = $7, status = $8, updated_at = NOW()
        WHERE id = $9
        RETURNING {EMPLOYEE_COLUMNS}
        "#
    );
    let employee = sqlx::query_as::<_, Employee>(&update_sql)
        .bind(&employee.name)
        .bind(&employee.email)
        .bind(&employee.phone)
        .bind(&employee.department)
        .bind(&employee.position)
        .bind(employee.salary)
        .bind(employee.date_hired)
        .bind(&employee.status)
        .bind(id)
        .fetch_one(&mut *tx)
        .await
        .map_err(|e| map_unique_violation(e, DUPLICATE_EMAIL))?;

    tx.commit().await?;

    let response = ApiResponse::success_with_message(
        "Employee updated successfully",
        json!({ "employee": employee }),
    );
    Ok((StatusCode::OK, Json(response)))
}

/// DELETE /api/employees/{id} — hard delete.
pub async fn destroy(Extension(db): Extension<PgPool>, Path(id): Path<i64>) -> HandlerResult {
    let mut tx = db.begin().await?;

    let result = sqlx::query("DELETE FROM employees WHERE id = $1")
        .bind(id)
        .execute(&mut *tx)
        .await?;
    if result.rows_affected() == 0 {
        return Err(ApiError::NotFound(NOT_FOUND.to_string()));
    }

    tx.commit().await?;

    let response = ApiResponse::message_only("Employee deleted successfully");
    Ok((StatusCode::OK, Json(response)))
}

/// GET /api/employees/stats — total head count and how many are Active.
pub async fn stats(Extension(db): Extension<PgPool>) -> HandlerResult {
    let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
        .fetch_one(&db)
        .await?;
    let active: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees WHERE status = 'Active'")
        .fetch_one(&db)
        .await?;

    let response =
        ApiResponse::success_with_data(json!({ "stats": { "total": total, "active": active } }));
    Ok((StatusCode::OK, Json(response)))
}
