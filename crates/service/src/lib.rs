//! Service layer providing CRUD operations on top of models.
//! - One repository trait per entity, with a SeaORM and an in-memory implementation.
//! - Services log every call and pass store errors through unchanged.

pub mod errors;
pub mod storage;
pub mod department;
pub mod student;
pub mod course;
pub mod enrollment;
