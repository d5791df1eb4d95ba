//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the leave
//! policy from YAML files.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{Gender, LeaveType};

use super::types::{
    CreditAllocation, CreditAllocationConfig, LeaveTypeDefinition, LeaveTypesConfig,
    PolicyConfig, PolicyMetadata,
};

/// Longest notice a leave type may require.
pub const MAX_NOTICE_DAYS: u32 = 365;

/// Loads and provides access to the leave policy configuration.
///
/// The statutory maternity and paternity constants are compiled in; the
/// configuration covers the leave type catalog and yearly credit defaults.
///
/// # Directory Structure
///
/// ```text
/// config/leave_policy/
/// ├── policy.yaml        # Policy metadata
/// ├── leave_types.yaml   # Leave type catalog
/// └── credits/
///     └── 2025.yaml      # Yearly credits effective from this year
/// ```
///
/// # Example
///
/// ```no_run
/// use leave_engine::config::ConfigLoader;
/// use leave_engine::models::{Gender, LeaveType};
///
/// let loader = ConfigLoader::load("./config/leave_policy").unwrap();
/// println!("Loaded policy: {}", loader.policy().name);
///
/// assert!(!loader.is_available_to(LeaveType::Maternity, Some(Gender::Male)).unwrap());
/// println!("Vacation credits: {}", loader.default_credits(LeaveType::Vacation, 2025));
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: PolicyConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` instance on success, or an error if:
    /// - Any required file is missing
    /// - Any file contains invalid YAML
    /// - A leave type code is not recognised
    /// - A leave type has no catalog entry
    /// - A credit pool is not credit-tracked, or a notice exceeds [`MAX_NOTICE_DAYS`]
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let metadata = Self::load_yaml::<PolicyMetadata>(&path.join("policy.yaml"))?;

        let leave_types_config = Self::load_yaml::<LeaveTypesConfig>(&path.join("leave_types.yaml"))?;
        let leave_types = Self::resolve_leave_types(leave_types_config)?;

        let credit_allocations = Self::load_credits(&path.join("credits"))?;

        debug!(
            policy = %metadata.code,
            leave_types = leave_types.len(),
            credit_years = credit_allocations.len(),
            "Leave policy loaded"
        );

        Ok(Self {
            config: PolicyConfig::new(metadata, leave_types, credit_allocations),
        })
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    fn resolve_leave_types(
        config: LeaveTypesConfig,
    ) -> EngineResult<HashMap<LeaveType, LeaveTypeDefinition>> {
        let mut leave_types = HashMap::new();
        for (code, definition) in config.leave_types {
            leave_types.insert(LeaveType::from_code(&code)?, definition);
        }

        if let Some(missing) = LeaveType::ALL
            .into_iter()
            .find(|t| !leave_types.contains_key(t))
        {
            return Err(EngineError::LeaveTypeNotFound {
                code: missing.code().to_string(),
            });
        }

        for (leave_type, definition) in &leave_types {
            if definition.notice_days > MAX_NOTICE_DAYS {
                return Err(Self::catalog_error(format!(
                    "{}: notice_days must be at most {}",
                    leave_type.code(),
                    MAX_NOTICE_DAYS
                )));
            }
            if let Some(pool) = definition.draws_from {
                let pool_tracked = leave_types.get(&pool).is_some_and(|d| d.credit_tracked);
                if !pool_tracked {
                    return Err(Self::catalog_error(format!(
                        "{}: draws_from {} which is not credit-tracked",
                        leave_type.code(),
                        pool.code()
                    )));
                }
            }
        }

        Ok(leave_types)
    }

    fn catalog_error(message: String) -> EngineError {
        EngineError::ConfigParseError {
            path: "leave_types.yaml".to_string(),
            message,
        }
    }

    /// Loads all credit allocation files from the credits directory.
    ///
    /// An absent directory means every credit-tracked type is unlimited.
    fn load_credits(credits_dir: &Path) -> EngineResult<Vec<CreditAllocation>> {
        if !credits_dir.exists() {
            return Ok(Vec::new());
        }

        let credits_dir_str = credits_dir.display().to_string();
        let entries = fs::read_dir(credits_dir).map_err(|_| EngineError::ConfigNotFound {
            path: credits_dir_str.clone(),
        })?;

        let mut allocations = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|_| EngineError::ConfigNotFound {
                path: credits_dir_str.clone(),
            })?;

            let path = entry.path();
            if path.extension().is_some_and(|ext| ext == "yaml") {
                let raw = Self::load_yaml::<CreditAllocationConfig>(&path)?;
                let mut credits = HashMap::new();
                for (code, total) in raw.credits {
                    credits.insert(LeaveType::from_code(&code)?, total);
                }
                allocations.push(CreditAllocation {
                    year: raw.year,
                    credits,
                });
            }
        }

        Ok(allocations)
    }

    /// Returns the underlying policy configuration.
    pub fn config(&self) -> &PolicyConfig {
        &self.config
    }

    /// Returns the policy metadata.
    pub fn policy(&self) -> &PolicyMetadata {
        self.config.policy()
    }

    /// Gets the catalog entry for a leave type.
    pub fn get_leave_type(&self, leave_type: LeaveType) -> EngineResult<&LeaveTypeDefinition> {
        self.config
            .leave_types()
            .get(&leave_type)
            .ok_or_else(|| EngineError::LeaveTypeNotFound {
                code: leave_type.code().to_string(),
            })
    }

    /// Checks whether a leave type is offered to an applicant.
    ///
    /// Gender-restricted types are withheld when the applicant's gender is
    /// unknown.
    pub fn is_available_to(
        &self,
        leave_type: LeaveType,
        gender: Option<Gender>,
    ) -> EngineResult<bool> {
        let definition = self.get_leave_type(leave_type)?;
        Ok(match definition.eligible_gender {
            None => true,
            Some(required) => gender == Some(required),
        })
    }

    /// Days of notice required before a leave of this type may start.
    pub fn notice_days(&self, leave_type: LeaveType) -> EngineResult<u32> {
        Ok(self.get_leave_type(leave_type)?.notice_days)
    }

    /// The credit-tracked leave type a request of this type is charged to.
    ///
    /// Returns `None` for types that use no credits at all.
    pub fn credit_pool(&self, leave_type: LeaveType) -> EngineResult<Option<LeaveType>> {
        let definition = self.get_leave_type(leave_type)?;
        Ok(match definition.draws_from {
            Some(pool) => Some(pool),
            None if definition.credit_tracked => Some(leave_type),
            None => None,
        })
    }

    /// Returns the leave types offered to an applicant, in form order.
    pub fn available_leave_types(&self, gender: Option<Gender>) -> EngineResult<Vec<LeaveType>> {
        let mut available = Vec::new();
        for leave_type in LeaveType::ALL {
            if self.is_available_to(leave_type, gender)? {
                available.push(leave_type);
            }
        }
        Ok(available)
    }

    /// Default yearly credits for a leave type in a given year.
    ///
    /// Uses the most recent allocation effective on or before `year`;
    /// returns 0 (unlimited) when none applies.
    pub fn default_credits(&self, leave_type: LeaveType, year: i32) -> u32 {
        self.config
            .credit_allocations()
            .iter()
            .rev()
            .find(|allocation| allocation.year <= year)
            .and_then(|allocation| allocation.credits.get(&leave_type).copied())
            .unwrap_or(0)
    }
}
