//! Application services for category management.

mod catalog;

pub use catalog::{
    CategoryCatalogError, CategoryCatalogResult, CategoryCatalogService, CreateCategoryRequest,
    UpdateCategoryRequest,
};
