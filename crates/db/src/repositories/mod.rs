//! Repository layer: one repo per collection.

pub mod category_repo;
pub mod movie_repo;

pub use category_repo::CategoryRepo;
pub use movie_repo::MovieRepo;
