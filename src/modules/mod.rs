pub mod auth;
pub mod courses;
pub mod dashboards;
pub mod health;
