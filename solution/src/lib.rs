pub mod assignment;
mod dispatch;
pub mod json_serialisation;
mod route;
pub mod test_utilities;

pub use assignment::Assignment;
pub use dispatch::Dispatch;
pub use route::Route;
