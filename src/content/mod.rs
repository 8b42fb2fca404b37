//! Content storage for the portfolio document.
//!
//! The whole site content lives in one JSON file. [`ContentStore`] handles
//! loading (with defaults filled in for missing fields) and atomic saves;
//! [`PortfolioPatch`] describes partial updates from the admin panel.

pub mod model;
pub mod patch;
pub mod store;

pub use model::{About, Contact, Experience, Hero, PortfolioDocument, Project, Skill};
pub use patch::{AboutPatch, ContactPatch, HeroPatch, PortfolioPatch};
pub use store::{ContentStore, StoreError};
