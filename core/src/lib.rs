//! crmforge-core: deterministic synthetic CRM dataset generation.
//!
//! The pipeline runs four stages in order, each with its own seeded RNG
//! stream so a stage can be re-run or extended without disturbing the
//! others:
//!
//!   accounts -> contacts -> deals -> activities
//!
//! A [`profile::Profile`] supplies all business-type data (pipelines,
//! segments, naming pools, activity mix); the generators hold only the
//! distribution logic. Given the same master seed, profile, account
//! count, and date window, a run reproduces byte-identical CSV output.

pub mod account_gen;
pub mod activity_gen;
pub mod contact_gen;
pub mod csv_io;
pub mod dates;
pub mod deal_gen;
pub mod error;
pub mod names;
pub mod profile;
pub mod rng;
pub mod types;

pub use account_gen::{Account, AccountGenerator};
pub use activity_gen::{Activity, ActivityGenerator};
pub use contact_gen::{Contact, ContactGenerator};
pub use dates::DateWindow;
pub use deal_gen::{Deal, DealGenerator};
pub use error::{GenError, GenResult};
pub use profile::{Profile, ProfileKind};
pub use rng::{GeneratorRng, RngBank, StageSlot};
