//! End-to-end tests of the `find-angular` binary.


use std::process::{Command, Output};

fn find_angular(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_find-angular"))
        .args(args)
        .output()
        .expect("Failed to run find-angular")
}

#[test]
fn test_sequential_report() {
    let path = test_data::write_catalog_file("cli_triangle.txt", "1 0.0 0.0\n2 90.0 0.0\n3 0.0 90.0\n");
    let out = find_angular(&["--catalog", path.to_str().unwrap()]);
    assert!(out.status.success());

    let stdout = String::from_utf8_lossy(&out.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines[0], "3 records read");
    assert_eq!(lines[1], "Average distance found is 90.000000");
    assert_eq!(lines[2], "Minimum distance found is 90.000000");
    assert_eq!(lines[3], "Maximum distance found is 90.000000");
    assert!(lines[4].starts_with("Program took "));
    assert!(lines[4].ends_with(" seconds"));
}

#[test]
fn test_threaded_report() {
    let path = test_data::write_catalog_file("cli_triangle_t.txt", "1 0.0 0.0\n2 90.0 0.0\n3 0.0 90.0\n");
    let out = find_angular(&["-t", "2", "-c", path.to_str().unwrap(), "--cover-remainder"]);
    assert!(out.status.success());
    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("Minimum distance found is 90.000000"));
}

#[test]
fn test_malformed_line_prints_no_statistics() {
    let path = test_data::write_catalog_file("cli_bad.txt", "1 0.0 0.0\n2 1.0 1.0 1.0 1.0\n");
    let out = find_angular(&["--catalog", path.to_str().unwrap()]);
    assert_eq!(out.status.code(), Some(1));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(!stdout.contains("distance found"));
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("more than 3 columns"));
}

#[test]
fn test_missing_file_exits_with_one() {
    let out = find_angular(&["--catalog", "no/such/catalog.txt"]);
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stdout).is_empty());
}

#[test]
fn test_legacy_help() {
    let out = find_angular(&["-help"]);
    assert!(out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).contains("--threads"));
}

#[test]
fn test_invalid_thread_count() {
    let out = find_angular(&["-t", "0"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stdout).is_empty());
}
