pub mod user;
pub mod repository;
pub mod contribution;
pub mod organization;
pub mod resume;

pub use user::*;
pub use repository::*;
pub use contribution::*;
pub use organization::*;
pub use resume::*;
