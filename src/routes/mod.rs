pub mod employee_routes;
pub mod health_routes;
