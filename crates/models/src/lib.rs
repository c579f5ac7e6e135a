//! SeaORM entities for the student-management schema.
//!
//! Each entity module carries its table `Model`, the JSON input accepted by
//! create/update endpoints, and a store-level `save` (insert or upsert by id).

pub mod db;
pub mod department;
pub mod student;
pub mod course;
pub mod enrollment;

#[cfg(test)]
mod tests;
