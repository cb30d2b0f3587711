//! Type-tag mappings.
//!
//! Both functions are total: unknown tags, including sub-document names,
//! fall back to the catch-all type of the target.

/// TypeScript type for a field type tag.
pub fn typescript_type(tag: &str) -> &'static str {
    match tag {
        "string" => "string",
        "number" => "number",
        "boolean" => "boolean",
        "date" => "Date",
        "objectId" => "ObjectId",
        _ => "any",
    }
}

/// Zod validator expression for a field type tag.
pub fn zod_validator(tag: &str) -> &'static str {
    match tag {
        "string" => "z.string()",
        "number" => "z.number()",
        "boolean" => "z.boolean()",
        "date" => "z.date()",
        "objectId" => "ObjectIdSchema",
        _ => "z.any()",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags() {
        assert_eq!(typescript_type("date"), "Date");
        assert_eq!(typescript_type("objectId"), "ObjectId");
        assert_eq!(zod_validator("boolean"), "z.boolean()");
        assert_eq!(zod_validator("objectId"), "ObjectIdSchema");
    }

    #[test]
    fn test_unknown_tags_fall_back() {
        for tag in ["", "any", "Address", "String", "object"] {
            assert_eq!(typescript_type(tag), "any");
            assert_eq!(zod_validator(tag), "z.any()");
        }
    }
}
