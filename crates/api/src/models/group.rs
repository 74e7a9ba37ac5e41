use serde::{Deserialize, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Name of a registered namespace group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GroupName(Cow<'static, str>);

impl GroupName {
    /// The richly cross-referenced document-markup group. Always constructed
    /// first: its context seeds the post-construction engine check.
    pub const PRIMARY: GroupName = GroupName(Cow::Borrowed("primary"));
    pub const CORE_PROPERTIES: GroupName = GroupName(Cow::Borrowed("core-properties"));
    pub const EXTENDED_PROPERTIES: GroupName = GroupName(Cow::Borrowed("extended-properties"));
    pub const CUSTOM_PROPERTIES: GroupName = GroupName(Cow::Borrowed("custom-properties"));
    pub const RELATIONSHIPS: GroupName = GroupName(Cow::Borrowed("relationships"));
    pub const CUSTOM_XML_PROPERTIES: GroupName = GroupName(Cow::Borrowed("custom-xml-properties"));
    pub const CONTENT_TYPES: GroupName = GroupName(Cow::Borrowed("content-types"));
    pub const XML_PACKAGE: GroupName = GroupName(Cow::Borrowed("xml-package"));
    pub const SECTION_MODEL: GroupName = GroupName(Cow::Borrowed("section-model"));
    /// Optional in some deployments; see the registry's tolerance rules.
    pub const ENCRYPTION: GroupName = GroupName(Cow::Borrowed("encryption"));
    pub const MARKUP_COMPATIBILITY: GroupName = GroupName(Cow::Borrowed("markup-compatibility"));
    /// Output-format group, built lazily on first request.
    pub const XSL_FO: GroupName = GroupName(Cow::Borrowed("xsl-fo"));

    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A fixed set of interdependent schema namespaces compiled together into one
/// shared binding context. Declared at build time; immutable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NamespaceGroup {
    name: GroupName,
    namespaces: Vec<Cow<'static, str>>,
}

impl NamespaceGroup {
    pub fn new<I, S>(name: GroupName, namespaces: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Cow<'static, str>>,
    {
        Self {
            name,
            namespaces: namespaces.into_iter().map(Into::into).collect(),
        }
    }

    pub fn name(&self) -> &GroupName {
        &self.name
    }

    /// Namespace URIs in declaration order.
    pub fn namespaces(&self) -> &[Cow<'static, str>] {
        &self.namespaces
    }
}
