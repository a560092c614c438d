pub mod employee_schema;

pub use employee_schema::{
    EmployeeListQuery, EmployeeStoreSchema, EmployeeUpdateSchema, NewEmployee, SalaryInput,
};
