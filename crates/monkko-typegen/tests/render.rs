//! Snapshot tests for rendered artifacts.
//!
//! Schemas are extracted from TypeScript sources so the tests cover the
//! path a real project takes. Run `cargo insta review` to update snapshots
//! after intentional changes.

use monkko_typegen::{OBJECT_ID_SUPPORT, Schema, TemplateSet, render};
use std::path::Path;

const USER_WITH_TIMESTAMPS: &str = r#"
import { defineSchema, fields } from "@monkko/orm/schemas";

export const User = defineSchema({
  name: "User",
  fields: {
    name: fields.string({ required: true }),
    email: fields.string({ required: true, unique: true }),
    age: fields.number(),
  },
  options: { timestamps: true },
});
"#;

const USER_WITH_ADDRESS: &str = r#"
import { defineSchema, fields } from "@monkko/orm/schemas";
import { Address } from "./address.monkko";

export const User = defineSchema({
  name: "User",
  db: "app",
  fields: {
    name: fields.string({ required: true }),
    email: fields.string({ required: true, unique: true }),
    address: Address({ optional: true }),
  },
});
"#;

const POST: &str = r#"
import { defineSchema, fields } from "@monkko/orm/schemas";

export const Post = defineSchema({
  db: "blog",
  fields: {
    title: fields.string({ required: true }),
    body: fields.string(),
    author: fields.objectId({ required: true }),
    publishedAt: fields.date(),
  },
  options: { timestamps: true },
});
"#;

fn schemas(source: &str) -> Vec<Schema> {
    monkko_extract::extract_source(Path::new("test.monkko.ts"), source).expect("extraction failed")
}

fn rendered(source: &str, file: &str) -> String {
    let files = render(&schemas(source), &TemplateSet::standard()).expect("render failed");
    files
        .get(file)
        .unwrap_or_else(|| panic!("{file} not rendered"))
        .clone()
}

#[test]
fn types_user() {
    insta::assert_snapshot!("types_user", rendered(USER_WITH_TIMESTAMPS, "User.types.ts"));
}

#[test]
fn zod_user() {
    insta::assert_snapshot!("zod_user", rendered(USER_WITH_ADDRESS, "User.schema.ts"));
}

#[test]
fn types_post() {
    insta::assert_snapshot!("types_post", rendered(POST, "Post.types.ts"));
}

#[test]
fn zod_post() {
    insta::assert_snapshot!("zod_post", rendered(POST, "Post.schema.ts"));
}

#[test]
fn support_file_written_once() {
    let mut all = schemas(USER_WITH_ADDRESS);
    all.extend(schemas(POST));
    let files = render(&all, &TemplateSet::standard()).unwrap();

    assert_eq!(files.len(), 5);
    let (name, content) = files.last().unwrap();
    assert_eq!(name, "utils.ts");
    assert_eq!(content, OBJECT_ID_SUPPORT.content);
}

#[test]
fn rendering_is_deterministic() {
    let schemas = schemas(POST);
    let first = render(&schemas, &TemplateSet::standard()).unwrap();
    let second = render(&schemas, &TemplateSet::standard()).unwrap();
    assert_eq!(first, second);
}
