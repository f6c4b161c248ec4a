mod memory_paste_repository;
mod pg_paste_repository;

pub use memory_paste_repository::InMemoryPasteRepository;
pub use pg_paste_repository::PgPasteRepository;
