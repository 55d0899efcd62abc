//! Document model consumed by the matching engine.
//!
//! The AAS document tree is treated as an opaque nested record: only
//! `modelType`, `idShort`, `semanticId`, `submodelElements` and `value` are
//! interpreted.

mod element;
mod referable;

pub use element::{
    Element, ElementValue, HasSemanticId, Key, ModelType, Reference, get_semantic_id_value,
};
pub use referable::check_id_short;
