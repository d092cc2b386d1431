//! Infrastructure layer for data sources.
//!
//! This layer implements interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`static_data`] - Literal tables copied from the CVMA and OMVQ reports

pub mod static_data;
