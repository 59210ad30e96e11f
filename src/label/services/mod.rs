//! Application services for the label catalog.

mod catalog;

pub use catalog::{
    CreateLabelRequest, LabelCatalogError, LabelCatalogResult, LabelCatalogService, LabelPatch,
    LabelUsage,
};
