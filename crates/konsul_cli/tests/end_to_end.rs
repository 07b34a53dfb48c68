// Full lifecycle against a live Postgres:
//   rebuild -> seed -> list/search -> set-status -> export -> delete
//
// Needs DATABASE_URL pointing at a disposable database, so it is ignored
// by default:
//   DATABASE_URL=postgres://... cargo test -p konsul_cli -- --ignored

use std::env;
use std::path::Path;
use std::process::Command;

fn run_cli(database_url: &str, args: &[&str]) -> (bool, String, String) {
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let workspace_root = Path::new(manifest_dir)
        .parent()
        .expect("No parent")
        .parent()
        .expect("No grandparent");

    let output = Command::new("cargo")
        .args(["run", "-p", "konsul_cli", "--quiet", "--"])
        .args(args)
        .current_dir(workspace_root)
        .env("DATABASE_URL", database_url)
        .output()
        .expect("Failed to run konsul_cli");

    (
        output.status.success(),
        String::from_utf8_lossy(&output.stdout).into_owned(),
        String::from_utf8_lossy(&output.stderr).into_owned(),
    )
}

#[test]
#[ignore = "requires a running Postgres (set DATABASE_URL)"]
fn test_full_lifecycle() {
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set for this test");

    // 1. Rebuild the schema (destructive; use a throwaway database)
    let (ok, _, stderr) = run_cli(&database_url, &["rebuild", "--yes"]);
    assert!(ok, "rebuild failed: {}", stderr);

    // 2. Seed one record through the intake path
    let (ok, stdout, stderr) = run_cli(&database_url, &["seed", "--nama", "Budi"]);
    assert!(ok, "seed failed: {}", stderr);
    let uuid_line = stdout
        .lines()
        .find(|l| l.contains("Primary Key (UUID):"))
        .expect("UUID not found in seed output");
    let uuid = uuid_line.split(": ").nth(1).unwrap().trim().to_string();
    assert!(stdout.contains("SUBMITTED"), "seed should land as SUBMITTED");

    // 3. Search finds it by name; a non-matching search does not
    let (ok, stdout, _) = run_cli(&database_url, &["list", "--search", "Budi"]);
    assert!(ok);
    assert!(stdout.contains(&uuid), "search by name should find the record");

    let (ok, stdout, _) = run_cli(&database_url, &["list", "--search", "Nobody"]);
    assert!(ok);
    assert!(!stdout.contains(&uuid));

    // 4. Status filter: COMPLETED excludes a freshly submitted record
    let (ok, stdout, _) = run_cli(
        &database_url,
        &["list", "--search", "Budi", "--status", "COMPLETED"],
    );
    assert!(ok);
    assert!(!stdout.contains(&uuid));

    // 5. A legal transition works, an illegal one is refused
    let (ok, _, stderr) = run_cli(
        &database_url,
        &["set-status", "--id", &uuid, "--status", "IN_REVIEW"],
    );
    assert!(ok, "SUBMITTED -> IN_REVIEW should be allowed: {}", stderr);

    let (ok, _, stderr) = run_cli(
        &database_url,
        &["set-status", "--id", &uuid, "--status", "DRAFT"],
    );
    assert!(!ok, "IN_REVIEW -> DRAFT must be refused");
    assert!(stderr.contains("status may not move"), "stderr was: {}", stderr);

    // 6. Export produces the document and the manifest
    let manifest_dir = env!("CARGO_MANIFEST_DIR");
    let workspace_root = Path::new(manifest_dir).parent().unwrap().parent().unwrap();
    let export_dir = workspace_root.join("target/test_export");
    let _ = std::fs::remove_dir_all(&export_dir);

    let (ok, _, stderr) = run_cli(
        &database_url,
        &["export", "--id", &uuid, "--output", export_dir.to_str().unwrap()],
    );
    assert!(ok, "export failed: {}", stderr);
    assert!(export_dir.join("formulir.xhtml").exists(), "document missing");
    assert!(export_dir.join("tanda_tangan.svg").exists(), "signature missing");
    assert!(export_dir.join("sha256.txt").exists(), "manifest missing");

    // 7. Delete removes it; a later search comes back empty
    let (ok, _, stderr) = run_cli(&database_url, &["delete", "--id", &uuid, "--yes"]);
    assert!(ok, "delete failed: {}", stderr);

    let (ok, stdout, _) = run_cli(&database_url, &["list", "--search", "Budi"]);
    assert!(ok);
    assert!(!stdout.contains(&uuid), "deleted record still listed");
}
