//! Flat-config fragment types
//!
//! A [`ConfigFragment`] is one named unit of lint configuration. The composer
//! never unions fragments on its own; the host's flat-config loader merges
//! them in list order, so later fragments win.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::de::{self, Deserializer, Visitor};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::FlatkitError;
use crate::result::Result;

/// Ordered rule-name to rule-setting map
pub type RulesRecord = IndexMap<String, RuleEntry>;

/// Ordered plugin-namespace to plugin-reference map
pub type PluginMap = IndexMap<String, Value>;

/// Rule severity levels
///
/// Accepts the names `"off"`/`"warn"`/`"error"` or the numeric levels
/// `0`/`1`/`2`; always serializes as the lowercase name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleSeverity {
    /// Disable the rule
    Off,
    /// Warning (doesn't fail the run)
    Warn,
    /// Error (fails the run)
    Error,
}

impl RuleSeverity {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "off" => Some(RuleSeverity::Off),
            "warn" => Some(RuleSeverity::Warn),
            "error" => Some(RuleSeverity::Error),
            _ => None,
        }
    }

    pub fn from_level(level: u64) -> Option<Self> {
        match level {
            0 => Some(RuleSeverity::Off),
            1 => Some(RuleSeverity::Warn),
            2 => Some(RuleSeverity::Error),
            _ => None,
        }
    }

    /// Read a severity from a raw JSON value, by name or by level
    pub fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::String(name) => Self::from_name(name),
            Value::Number(level) => level.as_u64().and_then(Self::from_level),
            _ => None,
        }
    }
}

struct SeverityVisitor;

impl<'de> Visitor<'de> for SeverityVisitor {
    type Value = RuleSeverity;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("\"off\", \"warn\", \"error\" or a level 0-2")
    }

    fn visit_str<E: de::Error>(self, v: &str) -> std::result::Result<RuleSeverity, E> {
        RuleSeverity::from_name(v)
            .ok_or_else(|| E::unknown_variant(v, &["off", "warn", "error"]))
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> std::result::Result<RuleSeverity, E> {
        RuleSeverity::from_level(v)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Unsigned(v), &self))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> std::result::Result<RuleSeverity, E> {
        u64::try_from(v)
            .ok()
            .and_then(RuleSeverity::from_level)
            .ok_or_else(|| E::invalid_value(de::Unexpected::Signed(v), &self))
    }
}

impl<'de> Deserialize<'de> for RuleSeverity {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        deserializer.deserialize_any(SeverityVisitor)
    }
}

impl JsonSchema for RuleSeverity {
    fn schema_name() -> Cow<'static, str> {
        "RuleSeverity".into()
    }

    fn json_schema(_: &mut SchemaGenerator) -> Schema {
        json_schema!({
            "anyOf": [
                { "type": "string", "enum": ["off", "warn", "error"] },
                { "type": "integer", "enum": [0, 1, 2] }
            ]
        })
    }
}

/// A single rule setting: a bare severity or `[severity, ...options]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(untagged)]
pub enum RuleEntry {
    Severity(RuleSeverity),
    Configured(Vec<Value>),
}

impl RuleEntry {
    pub fn off() -> Self {
        Self::Severity(RuleSeverity::Off)
    }

    pub fn warn() -> Self {
        Self::Severity(RuleSeverity::Warn)
    }

    pub fn error() -> Self {
        Self::Severity(RuleSeverity::Error)
    }

    /// Build a `[severity, ...options]` entry
    pub fn with_options(severity: RuleSeverity, options: impl IntoIterator<Item = Value>) -> Self {
        let mut entry = vec![serde_json::to_value(severity).unwrap_or(Value::Null)];
        entry.extend(options);
        Self::Configured(entry)
    }

    /// Severity of this entry, if it can be determined
    pub fn severity(&self) -> Option<RuleSeverity> {
        match self {
            RuleEntry::Severity(severity) => Some(*severity),
            RuleEntry::Configured(values) => values.first().and_then(RuleSeverity::from_value),
        }
    }
}

impl From<RuleSeverity> for RuleEntry {
    fn from(severity: RuleSeverity) -> Self {
        Self::Severity(severity)
    }
}

/// Parse a JSON object literal into a [`RulesRecord`]
///
/// Producers describe their rule tables as `json!` literals; this keeps the
/// tables readable while still landing in the typed representation.
pub fn rules_from_json(value: Value) -> Result<RulesRecord> {
    serde_json::from_value(value)
        .map_err(|e| FlatkitError::config_error(format!("Invalid rules table: {e}")))
}

/// One named unit of flat configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ConfigFragment {
    /// Stable diagnostic name (e.g. `flatkit/javascript/rules`)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Glob patterns this fragment applies to
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Glob patterns this fragment ignores (global when alone)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ignores: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub linter_options: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub processor: Option<Value>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub plugins: Option<PluginMap>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesRecord>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,
}

impl ConfigFragment {
    /// Create an empty fragment with a name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Default::default()
        }
    }

    pub fn with_files<I, S>(mut self, files: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.files = Some(files.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_ignores<I, S>(mut self, ignores: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ignores = Some(ignores.into_iter().map(Into::into).collect());
        self
    }

    /// Register a plugin under a namespace, keeping insertion order
    pub fn with_plugin(mut self, namespace: impl Into<String>, plugin: impl Into<Value>) -> Self {
        self.plugins
            .get_or_insert_with(PluginMap::new)
            .insert(namespace.into(), plugin.into());
        self
    }

    pub fn with_rules(mut self, rules: RulesRecord) -> Self {
        self.rules = Some(rules);
        self
    }

    pub fn with_language_options(mut self, options: Value) -> Self {
        self.language_options = Some(options);
        self
    }

    pub fn with_linter_options(mut self, options: Value) -> Self {
        self.linter_options = Some(options);
        self
    }

    pub fn with_processor(mut self, processor: impl Into<Value>) -> Self {
        self.processor = Some(processor.into());
        self
    }

    pub fn with_settings(mut self, settings: Value) -> Self {
        self.settings = Some(settings);
        self
    }

    /// Name of this fragment, or the empty string
    pub fn name_or_default(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }

    /// Look up a rule by its full name
    pub fn rule(&self, name: &str) -> Option<&RuleEntry> {
        self.rules.as_ref().and_then(|rules| rules.get(name))
    }

    /// Merge a patch into this fragment
    ///
    /// `files` and `ignores` are concatenated, `plugins` and `rules` merged
    /// key-wise with the patch winning, object-valued options shallow-merged.
    /// Everything else is replaced when the patch carries it.
    pub fn merge_with(&mut self, patch: ConfigFragment) {
        if patch.name.is_some() {
            self.name = patch.name;
        }

        Self::concat_patterns(&mut self.files, patch.files);
        Self::concat_patterns(&mut self.ignores, patch.ignores);

        if let Some(other_plugins) = patch.plugins {
            self.plugins
                .get_or_insert_with(PluginMap::new)
                .extend(other_plugins);
        }

        if let Some(other_rules) = patch.rules {
            self.rules
                .get_or_insert_with(RulesRecord::new)
                .extend(other_rules);
        }

        Self::merge_object(&mut self.language_options, patch.language_options);
        Self::merge_object(&mut self.linter_options, patch.linter_options);
        Self::merge_object(&mut self.settings, patch.settings);

        if patch.processor.is_some() {
            self.processor = patch.processor;
        }
    }

    fn concat_patterns(target: &mut Option<Vec<String>>, source: Option<Vec<String>>) {
        if let Some(source) = source {
            target.get_or_insert_with(Vec::new).extend(source);
        }
    }

    fn merge_object(target: &mut Option<Value>, source: Option<Value>) {
        match (target.as_mut(), source) {
            (Some(Value::Object(existing)), Some(Value::Object(incoming))) => {
                existing.extend(incoming);
            }
            (_, Some(incoming)) => *target = Some(incoming),
            (_, None) => {}
        }
    }
}
