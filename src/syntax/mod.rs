//! Gherkin line classification on top of the keyword catalog.

mod classifier;
mod directive;

pub use classifier::{
    ClassifiedDocument,
    ClassifiedLine,
    LineClassifier,
    classify_document,
};
pub use directive::{
    detect_language,
    resolve_language,
};
