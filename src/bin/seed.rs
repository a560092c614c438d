//! Seeds the employees table with a small sample data set.
//!
//! Usage: `cargo run --bin seed`. Safe to run repeatedly; rows are keyed on
//! email and existing ones are left untouched.

use dotenvy::dotenv;

use employee_records_api::config::{database, Settings};

struct SampleEmployee {
    name: &'static str,
    email: &'static str,
    phone: &'static str,
    department: &'static str,
    position: &'static str,
    salary: &'static str,
    date_hired: &'static str,
    status: &'static str,
}

const SAMPLE_EMPLOYEES: &[SampleEmployee] = &[
    SampleEmployee {
        name: "John Doe",
        email: "john.doe@example.com",
        phone: "+1 (555) 123-4567",
        department: "IT",
        position: "Software Engineer",
        salary: "75000.00",
        date_hired: "2023-01-15",
        status: "Active",
    },
    SampleEmployee {
        name: "Jane Smith",
        email: "jane.smith@example.com",
        phone: "+1 (555) 234-5678",
        department: "HR",
        position: "HR Manager",
        salary: "85000.00",
        date_hired: "2022-06-20",
        status: "Active",
    },
    SampleEmployee {
        name: "Mike Johnson",
        email: "mike.johnson@example.com",
        phone: "+1 (555) 345-6789",
        department: "Finance",
        position: "Financial Analyst",
        salary: "68000.00",
        date_hired: "2023-03-10",
        status: "Active",
    },
    SampleEmployee {
        name: "Sarah Williams",
        email: "sarah.williams@example.com",
        phone: "+1 (555) 456-7890",
        department: "Marketing",
        position: "Marketing Specialist",
        salary: "62000.00",
        date_hired: "2023-05-05",
        status: "Active",
    },
    SampleEmployee {
        name: "Robert Brown",
        email: "robert.brown@example.com",
        phone: "+1 (555) 567-8901",
        department: "Sales",
        position: "Sales Representative",
        salary: "55000.00",
        date_hired: "2022-11-12",
        status: "On Leave",
    },
];

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    dotenv().ok();
    tracing_subscriber::fmt::init();

    let settings = Settings::from_env();
    let pool = database::establish_connection(&settings.database_url()).await?;

    let mut inserted = 0u32;
    for sample in SAMPLE_EMPLOYEES {
        let salary: rust_decimal::Decimal = sample.salary.parse()?;
        let date_hired = chrono::NaiveDate::parse_from_str(sample.date_hired, "%Y-%m-%d")?;

        let result = sqlx::query(
            r#"
            INSERT INTO employees (name, email, phone, department, position, salary, date_hired, status)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            ON CONFLICT (email) DO NOTHING
            "#,
        )
        .bind(sample.name)
        .bind(sample.email)
        .bind(sample.phone)
        .bind(sample.department)
        .bind(sample.position)
        .bind(salary)
        .bind(date_hired)
        .bind(sample.status)
        .execute(&pool)
        .await?;

        inserted += result.rows_affected() as u32;
    }

    tracing::info!(
        inserted,
        skipped = SAMPLE_EMPLOYEES.len() as u32 - inserted,
        "Sample data seeding complete"
    );
    Ok(())
}
