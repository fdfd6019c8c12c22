//! Database library providing a MongoDB connector and shared utilities
//!
//! # Features
//!
//! - `mongodb` - MongoDB support
//! - `config` - Configuration support with `core_config::FromEnv`
//!
//! # Example
//!
//! ```ignore
//! use database::mongodb;
//!
//! let client = mongodb::connect("mongodb://localhost:27017").await?;
//! let db = client.database("mydb");
//! let collection = db.collection::<Document>("items");
//! ```

pub mod common;

#[cfg(feature = "mongodb")]
pub mod mongodb;
