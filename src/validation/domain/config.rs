//! Per-call validation configuration.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::TypeLabel;

/// Visual style used by the error tag.
pub const ERROR_STYLE: &str = "background-color: #ffe500; background-image: linear-gradient(80deg, #ffe500 0%, #ffb44e 100%); color: #0062FF; padding: 6px; border-radius: 1px; font-weight: 700; font-size: 1.15em; line-height: 1.9em; border-left: 8px solid #FF2525;";

/// Visual style used by the warning tag.
pub const WARNING_STYLE: &str = "background-color: #ffffff; background-image: linear-gradient(60deg, #ffffff 0%, #beecff 100%); color: #0062FF; padding: 6px; border-radius: 1px; font-weight: 700; font-size: 1.15em; line-height: 1.9em; border-left: 8px solid #FFBE25";

/// Visual style used when no style was requested.
pub const NEUTRAL_STYLE: &str = "color: blue";

/// Styling hint attached to a diagnostic.
///
/// Parses from a string: `"error"` and `"warning"` select the named styles,
/// an empty string selects the neutral style, and anything else is kept as
/// a literal style description.
///
/// # Examples
///
/// ```
/// use prop_validator::validation::domain::{StyleSpec, NEUTRAL_STYLE};
///
/// assert_eq!(StyleSpec::from("warning"), StyleSpec::Warning);
/// assert_eq!(StyleSpec::from("").css(), NEUTRAL_STYLE);
/// assert_eq!(StyleSpec::from("color: red").css(), "color: red");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum StyleSpec {
    /// The named error style.
    #[default]
    Error,
    /// The named warning style.
    Warning,
    /// A caller-supplied style description used verbatim.
    Custom(String),
    /// No styling requested.
    Neutral,
}

impl StyleSpec {
    /// Resolves the style to the description handed to the sink.
    #[must_use]
    pub fn css(&self) -> &str {
        match self {
            Self::Error => ERROR_STYLE,
            Self::Warning => WARNING_STYLE,
            Self::Custom(style) => style,
            Self::Neutral => NEUTRAL_STYLE,
        }
    }

    /// Returns the tag name, or the literal description for custom styles.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Custom(style) => style,
            Self::Neutral => "",
        }
    }
}

impl From<&str> for StyleSpec {
    fn from(value: &str) -> Self {
        match value {
            "error" => Self::Error,
            "warning" => Self::Warning,
            "" => Self::Neutral,
            other => Self::Custom(other.to_owned()),
        }
    }
}

impl From<String> for StyleSpec {
    fn from(value: String) -> Self {
        Self::from(value.as_str())
    }
}

impl From<StyleSpec> for String {
    fn from(value: StyleSpec) -> Self {
        value.as_str().to_owned()
    }
}

/// Contract for one property check.
///
/// Immutable for the duration of a rule call; rules that need a different
/// expectation derive a copy through [`ValidationConfig::with_expected_types`].
///
/// Deserialises from JSON with every field optional. The short keys `cName`,
/// `pName` and `overrideErrorMessage` are accepted as aliases.
///
/// # Examples
///
/// ```
/// use prop_validator::validation::domain::{TypeLabel, ValidationConfig};
///
/// let config = ValidationConfig::new("App", "vBool").with_expected_types([TypeLabel::Boolean]);
/// assert!(config.required);
/// assert!(config.expected_types.contains(&TypeLabel::Boolean));
///
/// let loaded: ValidationConfig =
///     serde_json::from_str(r#"{"cName": "App", "pName": "vString"}"#).expect("valid config");
/// assert_eq!(loaded.property_name, "vString");
/// assert!(loaded.expected_types.contains(&TypeLabel::String));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValidationConfig {
    /// Label of the component owning the property.
    #[serde(alias = "cName")]
    pub component_name: String,
    /// Label of the property under check.
    #[serde(alias = "pName")]
    pub property_name: String,
    /// Optional qualifying context appended to diagnostics.
    pub section: Option<String>,
    /// Styling hint for emitted diagnostics.
    pub style: StyleSpec,
    /// Replaces the generated message text when non-empty.
    #[serde(alias = "overrideErrorMessage")]
    pub override_message: Option<String>,
    /// Selects "must" wording when set and "should" wording otherwise.
    pub required: bool,
    /// Labels accepted by the type check. Diagnostics list them in
    /// [`TypeLabel`] declaration order.
    pub expected_types: BTreeSet<TypeLabel>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            component_name: String::new(),
            property_name: String::new(),
            section: None,
            style: StyleSpec::Error,
            override_message: None,
            required: true,
            expected_types: BTreeSet::from([TypeLabel::String]),
        }
    }
}

impl ValidationConfig {
    /// Creates a configuration for a component property with defaults for
    /// every other field.
    #[must_use]
    pub fn new(component_name: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            component_name: component_name.into(),
            property_name: property_name.into(),
            ..Self::default()
        }
    }

    /// Sets the qualifying section.
    #[must_use]
    pub fn with_section(mut self, section: impl Into<String>) -> Self {
        self.section = Some(section.into());
        self
    }

    /// Sets the styling hint.
    #[must_use]
    pub fn with_style(mut self, style: impl Into<StyleSpec>) -> Self {
        self.style = style.into();
        self
    }

    /// Sets a message that replaces the generated text.
    #[must_use]
    pub fn with_override_message(mut self, message: impl Into<String>) -> Self {
        self.override_message = Some(message.into());
        self
    }

    /// Marks the property as optional, softening diagnostic wording.
    #[must_use]
    pub const fn optional(mut self) -> Self {
        self.required = false;
        self
    }

    /// Returns a copy accepting exactly the given labels.
    #[must_use]
    pub fn with_expected_types(&self, labels: impl IntoIterator<Item = TypeLabel>) -> Self {
        Self {
            expected_types: labels.into_iter().collect(),
            ..self.clone()
        }
    }

    /// Returns the section when it is present and non-empty.
    #[must_use]
    pub fn section(&self) -> Option<&str> {
        self.section.as_deref().filter(|section| !section.is_empty())
    }

    /// Returns the override message when it is present and non-empty.
    #[must_use]
    pub fn override_message(&self) -> Option<&str> {
        self.override_message
            .as_deref()
            .filter(|message| !message.is_empty())
    }
}
