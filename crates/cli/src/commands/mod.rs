pub mod entities;
pub mod media;
pub mod status;
pub mod tag;
