// tests/shell_commands.rs
//
// These tests execute real commands through `/bin/sh` inside temporary
// directories.

use std::error::Error;
use std::fs;

use kiln::config::Manifest;
use kiln::dag::Resolver;
use kiln::errors::{CommandError, KilnError};
use kiln::exec::{Runner, ShellExecutor};
use kiln_test_utils::builders::{ManifestBuilder, TargetConfigBuilder};
use kiln_test_utils::init_tracing;
use tempfile::TempDir;

type TestResult = Result<(), Box<dyn Error>>;

fn run_targets(manifest: &Manifest, requested: &[&str]) -> kiln::errors::Result<()> {
    let requested: Vec<String> = requested.iter().map(|s| s.to_string()).collect();
    let chain = Resolver::new().resolve(manifest, &requested)?;
    Runner::new().run(&chain)
}

#[test]
fn commands_run_in_declaration_order() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("order.txt");

    let manifest = ManifestBuilder::new()
        .with_target(
            "log",
            TargetConfigBuilder::new()
                .command(&format!("printf 'one\\n' >> \"{}\"", out.display()))
                .command(&format!("printf 'two\\n' >> \"{}\"", out.display()))
                .build(),
        )
        .build();

    run_targets(&manifest, &["log"])?;

    assert_eq!(fs::read_to_string(&out)?, "one\ntwo\n");
    Ok(())
}

#[test]
fn dependency_commands_run_before_dependent_commands() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("order.txt");

    let manifest = ManifestBuilder::new()
        .with_target(
            "first",
            TargetConfigBuilder::new()
                .command(&format!("printf 'first\\n' >> \"{}\"", out.display()))
                .build(),
        )
        .with_target(
            "second",
            TargetConfigBuilder::new()
                .depends_on("first")
                .command(&format!("printf 'second\\n' >> \"{}\"", out.display()))
                .build(),
        )
        .build();

    run_targets(&manifest, &["second"])?;

    assert_eq!(fs::read_to_string(&out)?, "first\nsecond\n");
    Ok(())
}

#[test]
fn failing_command_aborts_the_remaining_commands_of_its_target() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let before = tmp.path().join("before");
    let marked = tmp.path().join("marked");
    let after = tmp.path().join("after");

    let manifest = ManifestBuilder::new()
        .with_target(
            "broken",
            TargetConfigBuilder::new()
                .command(&format!("touch \"{}\"", before.display()))
                .command("false")
                .command(&format!("?touch \"{}\"", marked.display()))
                .command(&format!("touch \"{}\"", after.display()))
                .build(),
        )
        .build();

    let err = run_targets(&manifest, &["broken"]).unwrap_err();

    match err {
        KilnError::CommandFailed {
            target,
            index,
            source: CommandError::Exit { status },
        } => {
            assert_eq!(target, "broken");
            assert_eq!(index, 1);
            assert_eq!(status.code(), Some(1));
        }
        other => panic!("expected a command exit failure, got: {other}"),
    }

    assert!(before.exists());
    // The abort skips everything after the failing command, marked or not.
    assert!(!marked.exists());
    assert!(!after.exists());
    Ok(())
}

#[test]
fn later_targets_do_not_run_after_a_failure() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let a_ran = tmp.path().join("a_ran");
    let c_ran = tmp.path().join("c_ran");

    let manifest = ManifestBuilder::new()
        .with_target(
            "a",
            TargetConfigBuilder::new()
                .command(&format!("touch \"{}\"", a_ran.display()))
                .build(),
        )
        .with_target(
            "b",
            TargetConfigBuilder::new()
                .depends_on("a")
                .command("false")
                .build(),
        )
        .with_target(
            "c",
            TargetConfigBuilder::new()
                .depends_on("b")
                .command(&format!("touch \"{}\"", c_ran.display()))
                .build(),
        )
        .build();

    let err = run_targets(&manifest, &["c"]).unwrap_err();

    assert!(matches!(&err, KilnError::CommandFailed { target, .. } if target == "b"));
    assert!(a_ran.exists());
    assert!(!c_ran.exists());
    Ok(())
}

#[test]
fn ignored_failure_continues_with_the_next_command() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let done = tmp.path().join("done");

    let manifest = ManifestBuilder::new()
        .with_target(
            "tolerant",
            TargetConfigBuilder::new()
                .command("?false")
                .command(&format!("touch \"{}\"", done.display()))
                .build(),
        )
        .build();

    run_targets(&manifest, &["tolerant"])?;

    assert!(done.exists());
    Ok(())
}

#[test]
fn ignore_marker_is_stripped_before_execution() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("out");

    let manifest = ManifestBuilder::new()
        .with_target(
            "marked",
            TargetConfigBuilder::new()
                .command(&format!("?printf 'ok' > \"{}\"", out.display()))
                .build(),
        )
        .build();

    run_targets(&manifest, &["marked"])?;

    // Had the marker reached the shell, this file would not exist.
    assert_eq!(fs::read_to_string(&out)?, "ok");
    Ok(())
}

#[test]
fn spawn_failures_are_not_ignorable() -> TestResult {
    init_tracing();

    let manifest = ManifestBuilder::new()
        .with_target(
            "any",
            TargetConfigBuilder::new().command("?true").build(),
        )
        .build();
    let chain = Resolver::new().resolve(&manifest, &["any".to_string()])?;

    let err = Runner::new()
        .with_executor(Box::new(
            ShellExecutor::new().with_shell("/nonexistent/kiln-test-shell"),
        ))
        .run(&chain)
        .unwrap_err();

    assert!(matches!(
        &err,
        KilnError::CommandFailed {
            source: CommandError::Spawn(_),
            ..
        }
    ));
    Ok(())
}

#[test]
fn declared_environment_is_visible_to_commands() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("out");

    let manifest = ManifestBuilder::new()
        .with_target(
            "greet",
            TargetConfigBuilder::new()
                .env("KILN_TEST_GREETING", "hello")
                .command(&format!(
                    "printf '%s' \"$KILN_TEST_GREETING\" > \"{}\"",
                    out.display()
                ))
                .build(),
        )
        .build();

    run_targets(&manifest, &["greet"])?;

    assert_eq!(fs::read_to_string(&out)?, "hello");
    Ok(())
}

#[test]
fn declared_environment_overrides_inherited_variables() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("out");

    // HOME is inherited from the test process; the declared value wins.
    let manifest = ManifestBuilder::new()
        .with_target(
            "home",
            TargetConfigBuilder::new()
                .env("HOME", "/kiln-test-home")
                .command(&format!("printf '%s' \"$HOME\" > \"{}\"", out.display()))
                .build(),
        )
        .build();

    run_targets(&manifest, &["home"])?;

    assert_eq!(fs::read_to_string(&out)?, "/kiln-test-home");
    Ok(())
}

#[test]
fn declared_environment_does_not_leak_into_other_targets() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let with_env = tmp.path().join("with_env");
    let without_env = tmp.path().join("without_env");

    let manifest = ManifestBuilder::new()
        .with_target(
            "scoped",
            TargetConfigBuilder::new()
                .env("KILN_TEST_SCOPED", "set")
                .command(&format!(
                    "printf '%s' \"${{KILN_TEST_SCOPED:-unset}}\" > \"{}\"",
                    with_env.display()
                ))
                .build(),
        )
        .with_target(
            "other",
            TargetConfigBuilder::new()
                .depends_on("scoped")
                .command(&format!(
                    "printf '%s' \"${{KILN_TEST_SCOPED:-unset}}\" > \"{}\"",
                    without_env.display()
                ))
                .build(),
        )
        .build();

    run_targets(&manifest, &["other"])?;

    assert_eq!(fs::read_to_string(&with_env)?, "set");
    assert_eq!(fs::read_to_string(&without_env)?, "unset");
    Ok(())
}

#[test]
fn each_command_runs_in_a_fresh_shell() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("out");

    let manifest = ManifestBuilder::new()
        .with_target(
            "stateless",
            TargetConfigBuilder::new()
                .command("KILN_TEST_LOCAL=bar")
                .command(&format!(
                    "printf '%s' \"${{KILN_TEST_LOCAL:-unset}}\" > \"{}\"",
                    out.display()
                ))
                .build(),
        )
        .build();

    run_targets(&manifest, &["stateless"])?;

    assert_eq!(fs::read_to_string(&out)?, "unset");
    Ok(())
}

#[test]
fn commands_read_stdin_from_the_null_device() -> TestResult {
    init_tracing();

    let tmp = TempDir::new()?;
    let out = tmp.path().join("out");

    // `cat` sees immediate EOF instead of blocking on kiln's own stdin.
    let manifest = ManifestBuilder::new()
        .with_target(
            "drain",
            TargetConfigBuilder::new()
                .command(&format!("cat > \"{}\"", out.display()))
                .build(),
        )
        .build();

    run_targets(&manifest, &["drain"])?;

    assert_eq!(fs::read_to_string(&out)?, "");
    Ok(())
}

#[test]
fn target_with_no_commands_succeeds() -> TestResult {
    init_tracing();

    let manifest = ManifestBuilder::new()
        .with_target("noop", TargetConfigBuilder::new().build())
        .build();

    run_targets(&manifest, &["noop"])?;
    Ok(())
}
