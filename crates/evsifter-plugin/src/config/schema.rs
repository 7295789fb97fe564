use std::sync::Arc;
use std::time::Duration;

use evsifter_core::error::{Result, SiftError};
use evsifter_core::filter::{Filter, Filters};
use serde::Deserialize;

use crate::sifters::{self, Clock, Mode, RelativeTimeRange, SifterUnit};

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PluginConfig {
    pub version: u32,
    pub sifter: SifterConfig,
}

impl PluginConfig {
    pub fn validate(&self) -> Result<()> {
        if self.version != 1 {
            return Err(SiftError::UnsupportedVersion);
        }

        self.sifter.validate()?;   // Verify the rule data

        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SifterConfig {
    pub mode: Mode,

    /// Overrides the default rejection message for either mode.
    #[serde(default)]
    pub reject_msg: Option<String>,

    /// Report rejections as `shadowReject`.
    #[serde(default)]
    pub shadow: bool,

    pub rule: RuleConfig,
}

impl SifterConfig {
    pub fn validate(&self) -> Result<()> {
        if matches!(&self.reject_msg, Some(m) if m.trim().is_empty()) {
            return Err(SiftError::BadRequest("sifter.reject_msg must not be blank".into()));
        }
        self.rule.validate()
    }

    /// Build the configured unit. `clock` is only read by time-based rules.
    pub fn build(&self, clock: Arc<dyn Clock>) -> Result<SifterUnit> {
        self.validate()?;

        let mut unit = self.rule.build(self.mode, clock);
        if let Some(msg) = &self.reject_msg {
            unit = unit.with_reject_msg(msg.clone());
        }
        if self.shadow {
            unit = unit.shadow_reject();
        }
        Ok(unit)
    }
}

#[derive(Debug, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case", deny_unknown_fields)]
pub enum RuleConfig {
    Filters {
        filters: Vec<Filter>,
    },
    AuthorList {
        authors: Vec<String>,
    },
    KindList {
        kinds: Vec<u32>,
    },
    KindClass {
        class: KindClass,
    },
    CreatedAtRange {
        #[serde(default)]
        max_past_secs: u64,
        #[serde(default)]
        max_future_secs: u64,
    },
}

impl RuleConfig {
    pub fn validate(&self) -> Result<()> {
        match self {
            RuleConfig::Filters { filters } => {
                if filters.is_empty() {
                    return Err(SiftError::BadRequest("sifter.rule.filters must not be empty".into()));
                }
                filters.iter().try_for_each(Filter::validate)
            }
            RuleConfig::AuthorList { authors } => {
                if authors.is_empty() {
                    return Err(SiftError::BadRequest("sifter.rule.authors must not be empty".into()));
                }
                Ok(())
            }
            RuleConfig::KindList { kinds } => {
                if kinds.is_empty() {
                    return Err(SiftError::BadRequest("sifter.rule.kinds must not be empty".into()));
                }
                Ok(())
            }
            RuleConfig::KindClass { .. } => Ok(()),
            RuleConfig::CreatedAtRange { max_past_secs, max_future_secs } => {
                if *max_past_secs == 0 && *max_future_secs == 0 {
                    return Err(SiftError::BadRequest(
                        "sifter.rule must bound at least one of max_past_secs / max_future_secs".into(),
                    ));
                }
                Ok(())
            }
        }
    }

    fn build(&self, mode: Mode, clock: Arc<dyn Clock>) -> SifterUnit {
        match self {
            RuleConfig::Filters { filters } => sifters::matches_filters(Filters::new(filters.clone()), mode),
            RuleConfig::AuthorList { authors } => sifters::author_list(authors.iter().cloned(), mode),
            RuleConfig::KindList { kinds } => sifters::kind_list(kinds.iter().copied(), mode),
            RuleConfig::KindClass { class } => sifters::kind_matcher(class.predicate(), mode),
            RuleConfig::CreatedAtRange { max_past_secs, max_future_secs } => {
                let range = RelativeTimeRange::new(
                    Duration::from_secs(*max_past_secs),
                    Duration::from_secs(*max_future_secs),
                );
                sifters::created_at_range(range, mode, clock)
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindClass {
    Regular,
    Replaceable,
    Ephemeral,
    ParameterizedReplaceable,
}

impl KindClass {
    pub fn predicate(self) -> fn(u32) -> bool {
        match self {
            KindClass::Regular => sifters::kinds::regular,
            KindClass::Replaceable => sifters::kinds::replaceable,
            KindClass::Ephemeral => sifters::kinds::ephemeral,
            KindClass::ParameterizedReplaceable => sifters::kinds::parameterized_replaceable,
        }
    }
}
