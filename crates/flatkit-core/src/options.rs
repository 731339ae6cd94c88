//! Root options for the config factory
//!
//! Every integration switch is a [`Toggle`]: absent (use the default),
//! `false`, `true`, or an object of sub-options. An explicit `false` always
//! wins over computed defaults; an object both enables the integration and
//! supplies its sub-options.

use indexmap::IndexMap;
use schemars::{JsonSchema, Schema, SchemaGenerator, json_schema};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::borrow::Cow;
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

use crate::fragment::{PluginMap, RulesRecord};

/// Boolean-or-object integration switch
#[derive(Debug, Clone, PartialEq)]
pub enum Toggle<T> {
    /// `false`
    Disabled,
    /// `true`: enabled with default sub-options
    Enabled,
    /// An object: enabled with these sub-options
    Custom(T),
}

impl<T> Toggle<T> {
    pub fn is_enabled(&self) -> bool {
        !matches!(self, Toggle::Disabled)
    }

    /// Sub-options supplied with the switch, if it was an object
    pub fn custom(&self) -> Option<&T> {
        match self {
            Toggle::Custom(options) => Some(options),
            _ => None,
        }
    }
}

impl<T> From<bool> for Toggle<T> {
    fn from(enabled: bool) -> Self {
        if enabled {
            Toggle::Enabled
        } else {
            Toggle::Disabled
        }
    }
}

impl<T: Serialize> Serialize for Toggle<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Toggle::Disabled => serializer.serialize_bool(false),
            Toggle::Enabled => serializer.serialize_bool(true),
            Toggle::Custom(options) => options.serialize(serializer),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Toggle<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw<T> {
            Flag(bool),
            Options(T),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Flag(enabled) => Toggle::from(enabled),
            Raw::Options(options) => Toggle::Custom(options),
        })
    }
}

impl<T: JsonSchema> JsonSchema for Toggle<T> {
    fn schema_name() -> Cow<'static, str> {
        format!("Toggle_{}", T::schema_name()).into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        let options = generator.subschema_for::<T>();
        json_schema!({
            "anyOf": [
                { "type": "boolean" },
                options
            ]
        })
    }
}

/// Sub-options shared by every integration that accepts rule overrides
pub trait SubOptions: Clone + Default {
    fn overrides(&self) -> Option<&RulesRecord>;
    fn set_overrides(&mut self, overrides: RulesRecord);
}

macro_rules! impl_sub_options {
    ($($ty:ty),* $(,)?) => {
        $(
            impl SubOptions for $ty {
                fn overrides(&self) -> Option<&RulesRecord> {
                    self.overrides.as_ref()
                }

                fn set_overrides(&mut self, overrides: RulesRecord) {
                    self.overrides = Some(overrides);
                }
            }
        )*
    };
}

/// Integration options that only carry rule overrides
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsOverrides {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<RulesRecord>,
}

/// Options for the stylistic (unicorn) rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsUnicorn {
    /// Include every recommended rule instead of the curated subset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub all_recommended: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<RulesRecord>,
}

/// Severity applied to every regular-expression rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum RegExpLevel {
    Error,
    Warn,
}

/// Options for the regular-expression rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsRegExp {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<RegExpLevel>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<RulesRecord>,
}

/// Options for the typed-language rules
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsTypescript {
    /// Enables type-aware rules when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tsconfig_path: Option<String>,

    /// Overrides for the type-aware rules only
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides_type_aware: Option<RulesRecord>,

    /// Extra parser options
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parser_options: Option<Value>,

    /// Globs that should be type aware (default `**/*.{ts,tsx}`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_type_aware: Option<Vec<String>>,

    /// Globs that should never be type aware
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ignores_type_aware: Option<Vec<String>>,

    /// Only allow erasable syntax
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub erasable_only: Option<bool>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub overrides: Option<RulesRecord>,
}

impl_sub_options!(OptionsOverrides, OptionsUnicorn, OptionsRegExp, OptionsTypescript);

/// Options for the gitignore-derived ignores
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GitignoreOptions {
    /// Name of the emitted fragment
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Ignore files to read (default `.gitignore`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<String>>,

    /// Fail when an ignore file is missing (default true for object form)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strict: Option<bool>,

    /// Directory the ignore files are resolved against
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<PathBuf>,

    /// Only read ignore files from `cwd`, never from its ancestors
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub root: Option<bool>,
}

/// Project flavour
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    #[default]
    App,
    /// Stricter rules for published libraries
    Lib,
}

/// Function that rewrites the built-in ignore globs
pub type IgnoresFn = Arc<dyn Fn(Vec<String>) -> Vec<String> + Send + Sync>;

/// Caller-supplied global ignores
#[derive(Clone)]
pub enum UserIgnores {
    /// Appended to the built-in exclusion globs
    Extend(Vec<String>),
    /// Replaces the built-in exclusion globs with whatever it returns
    Custom(IgnoresFn),
}

impl UserIgnores {
    /// Apply these ignores to the built-in list
    pub fn apply(&self, originals: Vec<String>) -> Vec<String> {
        match self {
            UserIgnores::Extend(extra) => {
                let mut ignores = originals;
                ignores.extend(extra.iter().cloned());
                ignores
            }
            UserIgnores::Custom(rewrite) => rewrite(originals),
        }
    }
}

impl fmt::Debug for UserIgnores {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UserIgnores::Extend(globs) => f.debug_tuple("Extend").field(globs).finish(),
            UserIgnores::Custom(_) => f.write_str("Custom(<fn>)"),
        }
    }
}

impl PartialEq for UserIgnores {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UserIgnores::Extend(a), UserIgnores::Extend(b)) => a == b,
            (UserIgnores::Custom(a), UserIgnores::Custom(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Serialize for UserIgnores {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            UserIgnores::Extend(globs) => globs.serialize(serializer),
            UserIgnores::Custom(_) => Err(serde::ser::Error::custom(
                "function-valued ignores cannot be serialized",
            )),
        }
    }
}

impl<'de> Deserialize<'de> for UserIgnores {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Vec::<String>::deserialize(deserializer).map(UserIgnores::Extend)
    }
}

impl JsonSchema for UserIgnores {
    fn schema_name() -> Cow<'static, str> {
        "UserIgnores".into()
    }

    fn json_schema(generator: &mut SchemaGenerator) -> Schema {
        generator.subschema_for::<Vec<String>>()
    }
}

/// Flat-config keys that may appear directly on the root options
///
/// These are fused into one extra fragment. `files` is only captured so the
/// factory can reject it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct GlobalConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_options: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linter_options: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub processor: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub plugins: Option<PluginMap>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rules: Option<RulesRecord>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub settings: Option<Value>,

    /// Present-even-if-null marker for a `files` key
    #[schemars(skip)]
    #[serde(
        default,
        deserialize_with = "deserialize_present",
        skip_serializing_if = "Option::is_none"
    )]
    pub files: Option<Value>,
}

fn deserialize_present<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}

/// Root options object
#[derive(Debug, Clone, Default, PartialEq, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct OptionsConfig {
    /// Rewrite plugin namespaces with the renaming table (default true)
    #[serde(default)]
    pub auto_rename_plugins: Option<bool>,

    /// Additional component extensions, e.g. `["vue"]`
    #[serde(default)]
    pub component_exts: Vec<String>,

    /// Gitignore support (default true, non-strict)
    #[serde(default)]
    pub gitignore: Option<Toggle<GitignoreOptions>>,

    /// Extend or rewrite the global ignores
    #[serde(default)]
    pub ignores: Option<UserIgnores>,

    /// Import hygiene rules (default true)
    #[serde(default)]
    pub imports: Option<Toggle<OptionsOverrides>>,

    /// Core rules; cannot be disabled
    #[serde(default)]
    pub javascript: Option<OptionsOverrides>,

    /// JSON and config-file rules plus the manifest sorters (default true)
    #[serde(default)]
    pub jsonc: Option<Toggle<OptionsOverrides>>,

    /// JSX rules (default true)
    #[serde(default)]
    pub jsx: Option<bool>,

    /// Regular-expression rules (default true)
    #[serde(default)]
    pub regexp: Option<Toggle<OptionsRegExp>>,

    /// Component-framework rules (default false)
    #[serde(default)]
    pub svelte: Option<Toggle<OptionsOverrides>>,

    /// Typed-language rules (default: detect whether `typescript` is installed)
    #[serde(default)]
    pub typescript: Option<Toggle<OptionsTypescript>>,

    /// Stylistic rules (default true)
    #[serde(default)]
    pub unicorn: Option<Toggle<OptionsUnicorn>>,

    /// `lib` enables stricter rules for libraries (default `app`)
    #[serde(default, rename = "type")]
    pub project_type: Option<ProjectType>,

    /// Deprecated per-integration overrides; prefer `<integration>.overrides`
    #[serde(default)]
    pub overrides: Option<IndexMap<String, RulesRecord>>,

    /// Flat-config keys fused into one extra fragment
    #[serde(flatten)]
    pub global: GlobalConfig,
}
