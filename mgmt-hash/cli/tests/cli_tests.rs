use assert_cmd::Command;
use predicates::prelude::*;

/// Helper to get the mgmt-hash binary command
fn hash_cmd() -> Command {
    Command::cargo_bin("mgmt-hash").unwrap()
}

/// Command with both passwords supplied as flags
fn with_passwords(web: &str, admin: &str) -> Command {
    let mut cmd = hash_cmd();
    cmd.args(["--web-password", web, "--admin-password", admin]);
    cmd
}

mod text_output {
    use super::*;

    #[test]
    fn prints_both_hashes_with_headings() {
        with_passwords("abcd", "wxyz")
            .assert()
            .success()
            .stdout(predicate::str::contains("=== Generated Password Hashes ==="))
            .stdout(predicate::str::contains(
                "Web Interface Password Hash (Django-style):\n$pbkdf2-sha256$36000$",
            ))
            .stdout(predicate::str::contains(
                "OS Admin Password Hash (Linux-style):\n$6$rounds=656000$",
            ))
            .stdout(predicate::str::contains("Store these passwords securely!"));
    }

    #[test]
    fn banner_not_printed_in_flag_mode() {
        with_passwords("abcd", "wxyz")
            .assert()
            .success()
            .stderr(predicate::str::contains("Password Generator").not());
    }
}

mod json_output {
    use super::*;

    #[test]
    fn json_has_both_keys() {
        with_passwords("abcd", "wxyz")
            .arg("--json")
            .assert()
            .success()
            .stdout(predicate::str::is_match(
                r#"^\{\n  "web_hash": "\$pbkdf2-sha256\$36000\$[A-Za-z0-9./]{22}\$[A-Za-z0-9./]{43}",\n  "admin_hash": "\$6\$rounds=656000\$[A-Za-z0-9./]{16}\$[A-Za-z0-9./]{86}"\n\}\n$"#,
            )
            .unwrap());
    }

    #[test]
    fn same_passwords_produce_different_output() {
        let output1 = with_passwords("same", "same")
            .arg("--json")
            .output()
            .expect("Failed to execute");
        let output2 = with_passwords("same", "same")
            .arg("--json")
            .output()
            .expect("Failed to execute");

        // Fresh salts on every run
        assert_ne!(output1.stdout, output2.stdout);
    }
}

mod tfvars_output {
    use super::*;

    #[test]
    fn tfvars_assigns_both_variables() {
        with_passwords("abcd", "wxyz")
            .arg("--tfvars")
            .assert()
            .success()
            .stdout(predicate::str::is_match(
                r#"^mgmt_node_admin_password_hash = "\$6\$rounds=656000\$[^"]+"\nmgmt_node_web_password_hash   = "\$pbkdf2-sha256\$36000\$[^"]+"\n$"#,
            )
            .unwrap());
    }

    #[test]
    fn json_and_tfvars_mutually_exclusive() {
        with_passwords("abcd", "wxyz")
            .args(["--json", "--tfvars"])
            .assert()
            .failure()
            .stderr(predicate::str::contains("cannot be used with"));
    }
}

mod validation {
    use super::*;

    #[test]
    fn short_web_password_fails() {
        with_passwords("ab", "validpass")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains(
                "Error: invalid web interface password: password must be at least 4 characters long",
            ));
    }

    #[test]
    fn short_admin_password_fails() {
        with_passwords("validpass", "xy")
            .assert()
            .failure()
            .code(1)
            .stdout(predicate::str::is_empty())
            .stderr(predicate::str::contains("invalid OS admin password"));
    }
}

mod non_interactive {
    use super::*;

    #[test]
    fn missing_admin_password_without_terminal() {
        hash_cmd()
            .args(["--web-password", "abcd"])
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains(
                "--admin-password is required when stdin is not a terminal",
            ));
    }

    #[test]
    fn missing_both_passwords_reports_web_first() {
        hash_cmd()
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--web-password is required"));
    }
}

mod logging {
    use super::*;

    #[test]
    fn verbose_logs_go_to_stderr() {
        with_passwords("abcd", "wxyz")
            .args(["-vv", "--json"])
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stdout(predicate::str::starts_with("{"))
            .stderr(predicate::str::contains("generated web and admin password hashes"));
    }

    #[test]
    fn passwords_never_logged() {
        with_passwords("s3cr3t-web", "s3cr3t-admin")
            .arg("-vvv")
            .env_remove("RUST_LOG")
            .assert()
            .success()
            .stderr(predicate::str::contains("s3cr3t").not());
    }
}

mod shell_completions {
    use super::*;

    #[test]
    fn bash_completions() {
        hash_cmd()
            .env("COMPLETE", "bash")
            .assert()
            .success()
            .stdout(predicate::str::contains("COMPREPLY"))
            .stdout(predicate::str::contains("mgmt-hash"));
    }

    #[test]
    fn fish_completions() {
        hash_cmd()
            .env("COMPLETE", "fish")
            .assert()
            .success()
            .stdout(predicate::str::contains("complete -c mgmt-hash"));
    }

    #[test]
    fn invalid_shell_error() {
        hash_cmd()
            .env("COMPLETE", "invalid")
            .assert()
            .failure()
            .stderr(predicate::str::contains("Unknown shell"));
    }
}

mod help_and_version {
    use super::*;

    #[test]
    fn help_flag() {
        hash_cmd()
            .arg("--help")
            .assert()
            .success()
            .stdout(predicate::str::contains(
                "Generate Pexip management node password hashes",
            ))
            .stdout(predicate::str::contains("--web-password"))
            .stdout(predicate::str::contains("--tfvars"));
    }

    #[test]
    fn version_flag() {
        hash_cmd()
            .arg("--version")
            .assert()
            .success()
            .stdout(predicate::str::contains("mgmt-hash"));
    }
}
