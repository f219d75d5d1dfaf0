//! Domain layer for the zgallery plugin.
//!
//! Core types shared by the gallery session logic and the UI, independent of
//! Zellij APIs.
//!
//! # Organization
//!
//! - [`category`]: Category token and page number newtypes
//! - [`error`]: Error types and result aliases
//! - [`image`]: Image record decoded from the API
//! - [`sort`]: Sort criteria
//!
//! # Examples
//!
//! ```
//! use zgallery::domain::{Category, Page, Result};
//!
//! fn first_page(raw: &str) -> Result<(Category, Page)> {
//!     Ok((Category::new(raw)?, Page::FIRST))
//! }
//! assert!(first_page("sport").is_ok());
//! ```

pub mod category;
pub mod error;
pub mod image;
pub mod sort;

pub use category::{Category, Page, DEFAULT_CATEGORY};
pub use error::{FetchError, GalleryError, MissingDetailRecord, Result};
pub use image::{FieldValue, ImageId, ImageRecord};
pub use sort::SortCriterion;
