//! Request-parameter catalog for the platform's run-reports resource.
//!
//! The run-reports endpoint accepts a family of optional query parameters:
//! control parameters (`exportCSV`, `output-type`, ...) plus open-ended
//! `R_`-prefixed report filters that are forwarded to the report definition.
//! This crate centralizes the parameter-name strings and the OpenAPI metadata
//! that documents them, so the service's handlers and its Swagger UI share a
//! single source of truth.
//!
//! Report execution, output rendering, and the HTTP layer live in the
//! consuming service. Nothing here validates or parses request values.

pub mod constants;
pub mod descriptor;
pub mod openapi;

pub use constants::FULL_DESCRIPTION;
pub use descriptor::{
    ReportParameterDescriptor, MINIMAL_REPORT_RUN_PARAMETERS, REPORT_RUN_PARAMETERS,
};
pub use openapi::{MinimalReportRunParams, ReportRunParams};
