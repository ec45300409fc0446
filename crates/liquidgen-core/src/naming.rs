//! Naming convention utilities for code generation.
//!
//! Schema identifiers are written in `snake_case`. Each syntactic role in the
//! generated header wants its own casing:
//!
//! | Role | Function | Input | Output |
//! |------|----------|-------|--------|
//! | [`NameRole::Type`] | [`to_pascal_case`] | `field_registration` | `FieldRegistration` |
//! | [`NameRole::EnumMember`] | [`to_pascal_case`] | `float32` | `Float32` |
//! | [`NameRole::StructMember`] | [`to_camel_case`] | `field_id` | `fieldId` |
//! | [`NameRole::Verbatim`] | identity | `0x10` | `0x10` |

/// The syntactic role an identifier plays in generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameRole {
    /// Enum and struct type names
    Type,
    /// Members of an enum
    EnumMember,
    /// Fields of a struct
    StructMember,
    /// Tokens that are already valid in the target language
    Verbatim,
}

/// Normalize an identifier for the given role.
///
/// # Examples
///
/// ```
/// use liquidgen_core::{NameRole, change_case};
///
/// assert_eq!(change_case("node_info_res", NameRole::Type), "NodeInfoRes");
/// assert_eq!(change_case("tel_cnt", NameRole::StructMember), "telCnt");
/// assert_eq!(change_case("keep_me", NameRole::Verbatim), "keep_me");
/// ```
pub fn change_case(value: &str, role: NameRole) -> String {
    match role {
        NameRole::Type | NameRole::EnumMember => to_pascal_case(value),
        NameRole::StructMember => to_camel_case(value),
        NameRole::Verbatim => value.to_string(),
    }
}

/// Convert snake_case to PascalCase.
///
/// Every underscore-separated word is title-cased and the words are joined
/// without a separator. Doubled underscores contribute nothing.
///
/// # Examples
///
/// ```
/// use liquidgen_core::naming::to_pascal_case;
///
/// assert_eq!(to_pascal_case("hello_world"), "HelloWorld");
/// assert_eq!(to_pascal_case("uint8"), "Uint8");
/// assert_eq!(to_pascal_case(""), "");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split('_').map(title_case).collect()
}

/// Convert snake_case to camelCase.
///
/// Like [`to_pascal_case`], except the first word is lowercased in full.
///
/// # Examples
///
/// ```
/// use liquidgen_core::naming::to_camel_case;
///
/// assert_eq!(to_camel_case("firmware_hash"), "firmwareHash");
/// assert_eq!(to_camel_case("Device_NAME"), "deviceName");
/// ```
pub fn to_camel_case(s: &str) -> String {
    let mut words = s.split('_');
    let mut result = words.next().map(str::to_lowercase).unwrap_or_default();
    for word in words {
        result.push_str(&title_case(word));
    }
    result
}

/// Title-case a single word.
///
/// A letter is uppercased when it starts the word or follows a non-letter,
/// and lowercased otherwise, so `int8x` becomes `Int8X`.
pub fn title_case(word: &str) -> String {
    let mut result = String::with_capacity(word.len());
    let mut after_letter = false;

    for c in word.chars() {
        if after_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }

    result
}
