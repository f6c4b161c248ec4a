pub mod paste_dto;
