//! Build-time namespace group declarations.
//!
//! Declaration order matters: the primary group's construction seeds the
//! post-construction engine check, so it always comes first. Everything else
//! follows as smaller, independent groups.

use oxbind_api::models::{GroupName, NamespaceGroup};

const WML_MAIN: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
const DML_MAIN: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const DML_PICTURE: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";
const DML_CHART: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
const DML_WP_DRAWING: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const VML: &str = "urn:schemas-microsoft-com:vml";
const VML_OFFICE: &str = "urn:schemas-microsoft-com:office:office";
const MATH: &str = "http://schemas.openxmlformats.org/officeDocument/2006/math";
const SHARED_TYPES: &str = "http://schemas.openxmlformats.org/officeDocument/2006/sharedTypes";

const CORE_PROPS: &str =
    "http://schemas.openxmlformats.org/package/2006/metadata/core-properties";
const DC_ELEMENTS: &str = "http://purl.org/dc/elements/1.1/";
const DC_TERMS: &str = "http://purl.org/dc/terms/";
const EXTENDED_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/extended-properties";
const CUSTOM_PROPS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/custom-properties";
const VARIANT_TYPES: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/docPropsVTypes";
const RELATIONSHIPS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";
const CUSTOM_XML: &str = "http://schemas.openxmlformats.org/officeDocument/2006/customXml";
const CONTENT_TYPES: &str = "http://schemas.openxmlformats.org/package/2006/content-types";
const XML_PACKAGE: &str = "http://schemas.microsoft.com/office/2006/xmlPackage";
const SECTION_MODEL: &str = "urn:oxbind:section-model";
const ENC_MAIN: &str = "http://schemas.microsoft.com/office/2006/encryption";
const ENC_CERTIFICATE: &str =
    "http://schemas.microsoft.com/office/2006/keyEncryptor/certificate";
const ENC_PASSWORD: &str = "http://schemas.microsoft.com/office/2006/keyEncryptor/password";
const MCE: &str = "http://schemas.openxmlformats.org/markup-compatibility/2006";

const XSL_FO: &str = "http://www.w3.org/1999/XSL/Format";

/// Groups constructed eagerly at bootstrap, in construction order.
pub fn eager_groups() -> Vec<NamespaceGroup> {
    vec![
        NamespaceGroup::new(
            GroupName::PRIMARY,
            [
                WML_MAIN,
                DML_MAIN,
                DML_PICTURE,
                DML_CHART,
                DML_WP_DRAWING,
                VML,
                VML_OFFICE,
                MATH,
                SHARED_TYPES,
            ],
        ),
        NamespaceGroup::new(
            GroupName::CORE_PROPERTIES,
            [CORE_PROPS, DC_ELEMENTS, DC_TERMS],
        ),
        NamespaceGroup::new(GroupName::EXTENDED_PROPERTIES, [EXTENDED_PROPS]),
        NamespaceGroup::new(GroupName::CUSTOM_PROPERTIES, [CUSTOM_PROPS, VARIANT_TYPES]),
        NamespaceGroup::new(GroupName::XML_PACKAGE, [XML_PACKAGE]),
        NamespaceGroup::new(GroupName::RELATIONSHIPS, [RELATIONSHIPS]),
        NamespaceGroup::new(GroupName::CUSTOM_XML_PROPERTIES, [CUSTOM_XML]),
        NamespaceGroup::new(GroupName::CONTENT_TYPES, [CONTENT_TYPES]),
        NamespaceGroup::new(GroupName::SECTION_MODEL, [SECTION_MODEL]),
        NamespaceGroup::new(
            GroupName::ENCRYPTION,
            [ENC_MAIN, ENC_CERTIFICATE, ENC_PASSWORD],
        ),
        NamespaceGroup::new(GroupName::MARKUP_COMPATIBILITY, [MCE]),
    ]
}

/// Groups constructed on first request only.
pub fn lazy_groups() -> Vec<NamespaceGroup> {
    vec![NamespaceGroup::new(GroupName::XSL_FO, [XSL_FO])]
}

/// Whether a group's construction failure is tolerated as a configuration
/// problem. Encryption schemas are not shipped in every deployment; no other
/// group gets this treatment.
pub fn is_optional(name: &GroupName) -> bool {
    *name == GroupName::ENCRYPTION
}
