pub mod component;
pub mod media;
pub mod review;
pub mod user;
