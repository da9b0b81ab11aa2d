use serde::{Deserialize, Serialize};

use crate::platform::{Environment, OsIdentifier};

/// A single allow/disallow rule over the current environment, in the shape
/// version manifests declare them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsRule {
    pub action: RuleAction,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub os: Option<OsFilter>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleAction {
    Allow,
    Disallow,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OsFilter {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub name: Option<OsIdentifier>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub arch: Option<String>,
}

impl OsFilter {
    fn matches(&self, environment: &Environment) -> bool {
        if self.name.is_some_and(|name| name != environment.os) {
            return false;
        }
        if self
            .arch
            .as_ref()
            .is_some_and(|arch| arch != &environment.arch)
        {
            return false;
        }
        true
    }
}

/// No rules means "always applicable". With rules present the verdict starts
/// at disallow and every rule whose filter matches the environment overwrites
/// it, so the last matching rule wins.
pub fn evaluate(rules: &[OsRule], environment: &Environment) -> bool {
    if rules.is_empty() {
        return true;
    }
    let mut allowed = false;
    for rule in rules {
        let matches = match &rule.os {
            None => true,
            Some(filter) => filter.matches(environment),
        };
        if matches {
            allowed = rule.action == RuleAction::Allow;
        }
    }
    allowed
}
