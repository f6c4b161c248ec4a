pub mod paste_dto;
mod paste_row;
