pub mod handlers;
pub mod responses;
pub mod routes;

pub use handlers::*;
pub use responses::*;
pub use routes::*;
