// tests/cli.rs

//! Command-line behavior of the placeholder-apk binary.

mod common;

use assert_cmd::Command;
use common::BuildEnv;
use placeholder_apk::InspectedApk;
use predicates::str::contains;
use std::fs;

fn cmd(env: &BuildEnv) -> Command {
    let mut cmd = Command::cargo_bin("placeholder-apk").unwrap();
    cmd.current_dir(env.temp_dir.path());
    cmd
}

#[test]
fn test_no_args_builds_default_path() {
    let env = BuildEnv::new();

    let output = cmd(&env).assert().success().get_output().stdout.clone();
    let stdout = String::from_utf8(output).unwrap();

    assert_eq!(stdout.lines().count(), 2);
    assert!(stdout.contains("apk/report-system-app.apk"));
    assert!(stdout.contains("这不是真正的APK文件"));
    assert!(InspectedApk::from_file(&env.output_path()).unwrap().is_complete());
    assert!(!env.workspace_dir().exists());
}

#[test]
fn test_runs_twice() {
    let env = BuildEnv::new();

    cmd(&env).assert().success();
    cmd(&env).assert().success();
    assert!(env.output_path().is_file());
}

#[test]
fn test_missing_output_dir_exits_nonzero() {
    let env = BuildEnv::without_output_dir();

    cmd(&env)
        .assert()
        .failure()
        .stderr(contains("output directory does not exist"));
    assert!(!env.output_path().exists());
}

#[test]
fn test_build_custom_paths() {
    let env = BuildEnv::new();
    fs::create_dir_all(env.temp_dir.path().join("dist")).unwrap();

    cmd(&env)
        .args(["build", "--output", "dist/demo.apk", "--workdir", "staging", "--store"])
        .assert()
        .success()
        .stdout(contains("dist/demo.apk"));

    assert!(env.temp_dir.path().join("dist/demo.apk").is_file());
    assert!(!env.temp_dir.path().join("staging").exists());
}

#[test]
fn test_workdir_with_foreign_files_is_refused() {
    let env = BuildEnv::new();
    let docs = env.temp_dir.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    fs::write(docs.join("important.txt"), b"keep me").unwrap();

    cmd(&env)
        .args(["build", "--workdir", "docs"])
        .assert()
        .failure()
        .stderr(contains("contains files not written by this tool"));

    assert_eq!(fs::read(docs.join("important.txt")).unwrap(), b"keep me");
    assert!(!env.output_path().exists());
}

#[test]
fn test_output_inside_workdir_is_refused() {
    let env = BuildEnv::new();

    cmd(&env)
        .args(["build", "--output", "temp_demo_apk/app.apk"])
        .assert()
        .failure()
        .stderr(contains("is inside the workspace"));

    assert!(!env.workspace_dir().exists());
}

#[test]
fn test_inspect_built_archive() {
    let env = BuildEnv::new();
    cmd(&env).assert().success();

    cmd(&env)
        .args(["inspect", "apk/report-system-app.apk"])
        .assert()
        .success()
        .stdout(contains("META-INF/MANIFEST.MF"))
        .stdout(contains("Icon: valid PNG (1x1)"))
        .stdout(contains("Layout: complete"));
}

#[test]
fn test_inspect_json() {
    let env = BuildEnv::new();
    cmd(&env).assert().success();

    let out = cmd(&env)
        .args(["inspect", "--json", "apk/report-system-app.apk"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(value["entries"].as_array().unwrap().len(), 4);
    assert_eq!(value["icon"]["status"], "valid");
}

#[test]
fn test_inspect_rejects_foreign_zip() {
    let env = BuildEnv::new();
    let path = env.temp_dir.path().join("other.zip");
    let mut writer = zip::ZipWriter::new(fs::File::create(&path).unwrap());
    writer
        .start_file("readme.txt", zip::write::SimpleFileOptions::default())
        .unwrap();
    std::io::Write::write_all(&mut writer, b"hello").unwrap();
    writer.finish().unwrap();

    cmd(&env)
        .args(["inspect", "other.zip"])
        .assert()
        .failure()
        .stdout(contains("Unexpected: readme.txt"));
}
