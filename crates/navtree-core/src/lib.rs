//! Navtree Core Types and Definitions
//!
//! This crate provides the foundational types for working with Doxygen
//! navigation-tree data files. It includes:
//!
//! - **Identifiers**: Efficient string-interned entry names ([`identifier::Id`])
//! - **Spans**: Byte-range source locations ([`span`] module)
//! - **Entries**: The index entry tree ([`entry`] module)
//! - **Documents**: A named sequence of entries ([`document`] module)
//! - **Ordering**: The generator's case-folded member ordering ([`order`] module)
//! - **Sections**: Derived grouping of a flat entry list ([`section`] module)

pub mod document;
pub mod entry;
pub mod identifier;
pub mod order;
pub mod section;
pub mod span;
