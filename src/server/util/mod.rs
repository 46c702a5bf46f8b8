pub mod multipart;
pub mod parse;
