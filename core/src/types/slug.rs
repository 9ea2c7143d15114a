use nutype::nutype;

pub const MAX_SLUG_LENGTH: usize = 256;

/// Identifier of an entry within its collection. Also its URL path segment.
#[nutype(
    sanitize(trim),
    validate(not_empty, len_char_max = MAX_SLUG_LENGTH),
    derive(
        Debug,
        Clone,
        PartialEq,
        Eq,
        PartialOrd,
        Ord,
        AsRef,
        Deref,
        TryFrom,
        Into,
        Hash,
        Borrow,
        Display,
        Serialize,
        Deserialize,
    )
)]
pub struct Slug(String);
