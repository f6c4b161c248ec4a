pub mod paste_repository;
