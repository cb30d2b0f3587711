//! End-to-end tests for the `monkko` binary.

use assert_cmd::Command;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const USER: &str = r#"
import { defineSchema, fields } from "@monkko/orm/schemas";

export const User = defineSchema({
  db: "app",
  fields: {
    email: fields.string({ required: true, unique: true }),
    age: fields.number(),
  },
  options: { timestamps: true },
});
"#;

fn monkko(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("monkko").unwrap();
    cmd.current_dir(dir).env_remove("RUST_LOG");
    cmd
}

fn stdout(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

fn stderr(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stderr).to_string()
}

#[test]
fn test_init_then_generate() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::create_dir_all(root.join("src/schemas")).unwrap();
    fs::write(root.join("src/schemas/user.monkko.ts"), USER).unwrap();

    let output = monkko(root).arg("init").output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(root.join("monkko.config.json").exists());

    let output = monkko(root).arg("generate").output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(stdout(&output).contains("Generated 3 file(s) for 1 schema(s)"));

    let types = fs::read_to_string(root.join("generated/User.types.ts")).unwrap();
    assert!(types.contains("  age?: number;\n  email: string;\n  createdAt: Date;\n"));
    let zod = fs::read_to_string(root.join("generated/User.schema.ts")).unwrap();
    assert!(zod.contains("  email: z.string(),\n"));
    assert!(root.join("generated/utils.ts").exists());
}

#[test]
fn test_extract_prints_json() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("monkko.config.json"), "{}").unwrap();
    fs::write(root.join("user.monkko.ts"), USER).unwrap();

    let output = monkko(root).arg("extract").output().unwrap();
    assert!(output.status.success(), "{}", stderr(&output));

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["files"], serde_json::json!(["user.monkko.ts"]));
    let user = &report["schemas"][0];
    assert_eq!(user["name"], "User");
    assert_eq!(user["db"], "app");
    assert_eq!(user["collection"], "user");
    assert_eq!(user["fields"]["email"]["unique"], true);
    assert_eq!(user["options"]["timestamps"], true);
}

#[test]
fn test_config_flag_sets_project_root() {
    let tmp = tempdir().unwrap();
    let project = tmp.path().join("app");
    fs::create_dir_all(&project).unwrap();
    fs::write(project.join("monkko.config.json"), r#"{ "outputDir": "types" }"#).unwrap();
    fs::write(project.join("user.monkko.ts"), USER).unwrap();

    let output = monkko(tmp.path())
        .args(["generate", "--config", "app/monkko.config.json"])
        .output()
        .unwrap();
    assert!(output.status.success(), "{}", stderr(&output));
    assert!(project.join("types/User.types.ts").exists());
}

#[test]
fn test_malformed_schema_fails() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    fs::write(root.join("monkko.config.json"), "{}").unwrap();
    fs::write(root.join("user.monkko.ts"), USER).unwrap();
    fs::write(
        root.join("post.monkko.ts"),
        "export const Post = defineSchema({ db: process.env.DB });",
    )
    .unwrap();

    let output = monkko(root).arg("generate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.contains("post.monkko.ts (Post)"), "{err}");
    assert!(err.contains("non-evaluable expression"), "{err}");
    assert!(!root.join("generated").exists());
}

#[test]
fn test_missing_config_fails() {
    let tmp = tempdir().unwrap();
    let output = monkko(tmp.path()).arg("generate").output().unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("monkko init"));
}

#[test]
fn test_no_schema_files() {
    let tmp = tempdir().unwrap();
    fs::write(tmp.path().join("monkko.config.json"), "{}").unwrap();
    let output = monkko(tmp.path()).arg("generate").output().unwrap();
    assert!(output.status.success());
    assert!(stdout(&output).contains("No *.monkko.ts files found"));
}
