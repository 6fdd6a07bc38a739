//! Core library components.
//!
//! Parameter declarations, ARN resolution, grants and the stack they are
//! declared into.

pub mod arn;
pub mod config;
pub mod constants;
pub mod context;
pub mod iam;
pub mod identity;
pub mod kms;
pub mod parameter;
pub mod project;
pub mod stack;
pub mod template;
pub mod token;
pub mod validation;
