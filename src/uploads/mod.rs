//! Uploads Module
//!
//! Local-disk storage for uploaded images. Files are served back under
//! `/uploads/*` by the router's static file service.

pub mod storage;

pub use storage::save_upload;
