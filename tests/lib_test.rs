//! Library integration tests.

use actkit::ActkitError;

#[test]
fn error_types_are_public() {
    let err = ActkitError::InvalidInput {
        key: "foo".into(),
        value: "BAR".into(),
    };
    assert!(err.to_string().contains("foo"));
}

#[test]
fn result_type_alias_is_public() {
    fn test_fn() -> actkit::Result<()> {
        Ok(())
    }
    assert!(test_fn().is_ok());
}

#[test]
fn cli_types_are_public() {
    use actkit::cli::{CheckCommands, Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from([
        "actkit",
        "check",
        "--repo",
        "octo/widgets",
        "create",
        "--name",
        "build",
        "--status",
        "queued",
    ]);

    if let Commands::Check(args) = cli.command {
        assert_eq!(args.repo.as_deref(), Some("octo/widgets"));
        match args.action {
            CheckCommands::Create(create) => {
                assert_eq!(create.name, "build");
                assert_eq!(create.bundle.status.as_deref(), Some("queued"));
            }
            other => panic!("Expected create, got {:?}", other),
        }
    } else {
        panic!("Expected Check command");
    }
}

#[test]
fn exec_collects_trailing_words() {
    use actkit::cli::{Cli, Commands};
    use clap::Parser;

    let cli = Cli::parse_from(["actkit", "exec", "--quiet", "brew", "install", "--force", "x"]);
    if let Commands::Exec(args) = cli.command {
        assert!(args.quiet);
        assert_eq!(args.command_line(), "brew install --force x");
    } else {
        panic!("Expected Exec command");
    }
}

#[cfg(unix)]
#[test]
fn shell_execute_is_public() {
    use actkit::shell::{execute, ExecOptions};

    let out = execute("echo public", &ExecOptions::quiet()).unwrap();
    assert_eq!(out, "public");

    let err = execute("exit 7", &ExecOptions::quiet()).unwrap_err();
    assert_eq!(err.to_string(), "7");
}
