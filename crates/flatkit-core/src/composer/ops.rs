//! Operations queued on a composer and applied after flattening

use std::collections::HashSet;

use super::job::FragmentJob;
use crate::error::FlatkitError;
use crate::fragment::ConfigFragment;
use crate::result::Result;

#[derive(Debug)]
pub(crate) enum Operation {
    InsertAfter { name: String, job: FragmentJob },
    InsertBefore { name: String, job: FragmentJob },
    Override { name: String, patch: ConfigFragment },
    Remove { name: String },
    RemoveRules { rules: Vec<String> },
}

impl Operation {
    pub(crate) async fn apply(self, configs: &mut Vec<ConfigFragment>) -> Result<()> {
        match self {
            Operation::InsertAfter { name, job } => {
                let index = index_of(configs, &name)?;
                let inserted = job.into_future().await?;
                configs.splice(index + 1..index + 1, inserted);
            }
            Operation::InsertBefore { name, job } => {
                let index = index_of(configs, &name)?;
                let inserted = job.into_future().await?;
                configs.splice(index..index, inserted);
            }
            Operation::Override { name, patch } => {
                let index = index_of(configs, &name)?;
                configs[index].merge_with(patch);
            }
            Operation::Remove { name } => {
                let index = index_of(configs, &name)?;
                configs.remove(index);
            }
            Operation::RemoveRules { rules } => {
                let rules: HashSet<&str> = rules.iter().map(String::as_str).collect();
                for config in configs.iter_mut() {
                    if let Some(record) = config.rules.as_mut() {
                        record.retain(|rule, _| !rules.contains(rule.as_str()));
                    }
                }
            }
        }
        Ok(())
    }
}

fn index_of(configs: &[ConfigFragment], name: &str) -> Result<usize> {
    configs
        .iter()
        .position(|config| config.name.as_deref() == Some(name))
        .ok_or_else(|| FlatkitError::config_not_found(name))
}
