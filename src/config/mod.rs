//! Configuration loading and management for the Leave Entitlement Engine.
//!
//! This module provides functionality to load the leave policy from YAML
//! files, including policy metadata, the leave type catalog, and yearly
//! credit allocations.
//!
//! # Example
//!
//! ```no_run
//! use leave_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/leave_policy").unwrap();
//! println!("Loaded policy: {}", config.policy().name);
//! ```

mod loader;
mod types;

pub use loader::{ConfigLoader, MAX_NOTICE_DAYS};
pub use types::{
    CreditAllocation, CreditAllocationConfig, LeaveTypeDefinition, LeaveTypesConfig, PolicyConfig,
    PolicyMetadata,
};
