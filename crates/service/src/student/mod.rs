pub mod repository;
pub mod service;

pub use repository::{SeaOrmStudentRepository, StudentRepository};
pub use service::StudentService;
