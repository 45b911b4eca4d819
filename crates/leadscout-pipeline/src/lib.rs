//! Lead discovery pipeline: text search, bounded detail fan-out, heuristic
//! filtering and scoring, ranked output.
//!
//! Two flows share one control flow and differ only in their inclusion test
//! and scoring: [`LeadFlow::NoWebsite`] finds businesses with no website at
//! all; [`LeadFlow::NoEcommerce`] finds stores whose site (if any) shows no
//! commerce indicators.

mod catalog;
mod detect;
mod error;
mod flow;
mod score;
mod types;

pub use catalog::{primary_category, search_phrase, suggest_platform};
pub use detect::EcommerceDetector;
pub use error::PipelineError;
pub use flow::{LeadFlow, LeadPipeline, PipelineSettings};
pub use score::{ecom_potential, opportunity_score, EcomPotential};
pub use types::{Lead, LeadReport, LeadRequest};
