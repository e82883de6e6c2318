pub mod article;
pub mod editorial_number;
pub mod language;
pub mod researcher;
pub mod thematic_line;
pub mod user;
