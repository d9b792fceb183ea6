//! HTTP request handlers.

pub mod course_handler;
pub mod enrollment_handler;
pub mod health_handler;
pub mod root_handler;
pub mod user_handler;

pub use course_handler::course_routes;
pub use enrollment_handler::enrollment_routes;
pub use health_handler::health_routes;
pub use root_handler::root;
pub use user_handler::user_routes;
