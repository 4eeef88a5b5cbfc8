//! API layer - HTTP endpoints and middleware

pub mod courses;
pub mod health;
pub mod middleware;
pub mod router;
pub mod state;
pub mod types;

pub use middleware::RequireApiKey;
pub use router::{create_course_router, create_router_with_state};
pub use state::AppState;
