use std::io::Write;
use std::process::{Command, Output};

fn probe(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_getarg-probe"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run getarg-probe")
}

fn stdout_lines(out: &Output) -> Vec<String> {
    String::from_utf8_lossy(&out.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn prints_canonical_entries() {
    let out = probe(&["--a=1", "pos", "-b", "--noc=0"]);
    assert!(out.status.success());
    assert_eq!(stdout_lines(&out), vec!["-a=1", "-b", "-noc=0"]);
}

#[test]
fn answers_queries() {
    let out = probe(&["-x=12abc", "-noy", "-query=-x", "-query=-y"]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert!(lines.contains(&"-x has=true bool=true string=12abc int=12".to_string()));
    assert!(lines.contains(&"-y has=false bool=false string= int=0".to_string()));
}

#[test]
fn command_line_beats_config() {
    let mut conf = tempfile::NamedTempFile::new().unwrap();
    write!(conf, "# test\nport=1\nname=conf\nlisten\n").unwrap();
    let conf_arg = format!("-conf={}", conf.path().display());

    let out = probe(&[
        conf_arg.as_str(),
        "-port=2",
        "-nolisten",
        "-query=-port",
        "-query=-name",
        "-query=-listen",
    ]);
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert!(lines.contains(&"-port has=true bool=true string=2 int=2".to_string()));
    assert!(lines.contains(&"-name has=true bool=true string=conf int=0".to_string()));
    assert!(lines.contains(&"-listen has=false bool=false string= int=0".to_string()));
}

#[test]
fn missing_config_fails() {
    let dir = tempfile::tempdir().unwrap();
    let conf_arg = format!("-conf={}", dir.path().join("nope.conf").display());
    let out = probe(&[conf_arg.as_str()]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("nope.conf"));
}

#[test]
fn strict_config_rejects_bad_line() {
    let mut conf = tempfile::NamedTempFile::new().unwrap();
    write!(conf, "ok=1\nnot ok\n").unwrap();
    let conf_arg = format!("-conf={}", conf.path().display());

    let out = probe(&[conf_arg.as_str()]);
    assert!(out.status.success());

    let out = probe(&[conf_arg.as_str(), "-strictconf"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("config line 2"));
}

#[cfg(unix)]
#[test]
fn non_unicode_program_path_and_positional_tolerated() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use std::os::unix::process::CommandExt;

    let out = Command::new(env!("CARGO_BIN_EXE_getarg-probe"))
        .arg0(OsStr::from_bytes(b"/opt/b\xffin/prog"))
        .arg("-a")
        .arg(OsStr::from_bytes(b"file\xff.txt"))
        .arg("-query=-a")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run getarg-probe");
    assert!(out.status.success());
    let lines = stdout_lines(&out);
    assert_eq!(lines[0], "-a");
    assert!(lines.contains(&"-a has=true bool=true string= int=0".to_string()));
}

#[cfg(unix)]
#[test]
fn non_unicode_option_fails() {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;

    let out = Command::new(env!("CARGO_BIN_EXE_getarg-probe"))
        .arg("-a")
        .arg(OsStr::from_bytes(b"-b=\xff"))
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run getarg-probe");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("argument 2 is not valid UTF-8"));
}

#[test]
fn no_options_prints_usage() {
    let out = probe(&["positional"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).starts_with("usage: getarg-probe"));
}
