// src/infrastructure/storage/mod.rs
pub mod cloudinary;
pub mod uploadcare;

pub use cloudinary::CloudinaryStore;
pub use uploadcare::UploadcareStore;
