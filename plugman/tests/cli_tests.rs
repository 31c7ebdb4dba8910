use std::fs;
use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

struct Fixture {
    _temp_dir: TempDir,
    config_file: PathBuf,
    plugins_source: PathBuf,
    host_root: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let temp_dir = TempDir::new().expect("temp dir");
        let plugins_source = temp_dir.path().join("Plugins");
        let host_root = temp_dir.path().join("host").join("bin");

        let config_file = temp_dir.path().join("config.yaml");
        fs::write(
            &config_file,
            format!(
                "host_root: \"{}\"\nplugins_source: \"{}\"\n",
                host_root.display(),
                plugins_source.display()
            ),
        )
        .expect("write config");

        Self {
            _temp_dir: temp_dir,
            config_file,
            plugins_source,
            host_root,
        }
    }

    fn add_plugin(&self, name: &str, files: &[(&str, &str)]) {
        for (relative, contents) in files {
            let path = self.plugins_source.join(name).join(relative);
            fs::create_dir_all(path.parent().expect("parent")).expect("create plugin dirs");
            fs::write(path, contents).expect("write plugin file");
        }
    }

    fn plugman(&self) -> Command {
        let mut cmd = Command::cargo_bin("plugman").expect("binary exists");
        cmd.arg("--config").arg(&self.config_file);
        cmd
    }

    fn manifest_path(&self) -> PathBuf {
        self.host_root.join("plugins.xml")
    }
}

#[test]
fn list_reports_a_missing_plugins_folder_and_still_succeeds() {
    let fixture = Fixture::new();

    fixture
        .plugman()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No plugins found."))
        .stderr(predicate::str::contains("Plugins folder not found"));
}

#[test]
fn list_shows_discovered_plugins() {
    let fixture = Fixture::new();
    fixture.add_plugin("alpha", &[("alpha.dll", "a")]);
    fixture.add_plugin("beta", &[("beta.dll", "b")]);

    fixture
        .plugman()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("alpha"))
        .stdout(predicate::str::contains("beta"));
}

#[test]
fn config_prints_the_resolved_paths() {
    let fixture = Fixture::new();

    fixture
        .plugman()
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("Plugin sources:"))
        .stdout(predicate::str::contains("plugins.xml"));
}

#[test]
fn scripted_install_copies_and_registers_the_plugin() {
    let fixture = Fixture::new();
    fixture.add_plugin("alpha", &[("alpha.dll", "a"), ("docs/readme.txt", "r")]);

    fixture
        .plugman()
        .args(["install", "alpha", "--entry", "alpha=alpha.dll"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Plugins installed successfully!"))
        .stdout(predicate::str::contains("alpha (installed)"));

    let installed = fixture.host_root.join("Plugins").join("alpha");
    assert_eq!(
        fs::read_to_string(installed.join("alpha.dll")).expect("copied entry"),
        "a"
    );
    assert_eq!(
        fs::read_to_string(installed.join("docs").join("readme.txt")).expect("copied doc"),
        "r"
    );

    let manifest = fs::read_to_string(fixture.manifest_path()).expect("manifest written");
    assert!(manifest.contains(r#"logFolder="Library3D""#));
    assert!(manifest.contains("alpha.dll"));
}

#[test]
fn installing_an_unknown_plugin_fails_with_its_name() {
    let fixture = Fixture::new();
    fixture.add_plugin("alpha", &[("alpha.dll", "a")]);

    fixture
        .plugman()
        .args(["install", "ghost", "--entry", "ghost=ghost.dll"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'ghost' was not found"));
}

#[test]
fn a_selected_plugin_without_an_entry_aborts_the_pass() {
    let fixture = Fixture::new();
    fixture.add_plugin("alpha", &[("alpha.dll", "a")]);

    fixture
        .plugman()
        .args(["install", "alpha"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry file chosen for plugin 'alpha'"));

    assert!(!fixture.host_root.join("Plugins").exists());
    assert!(!fixture.manifest_path().exists());
}

#[test]
fn an_entry_outside_the_plugin_folder_is_rejected() {
    let fixture = Fixture::new();
    fixture.add_plugin("alpha", &[("alpha.dll", "a")]);
    fixture.add_plugin("beta", &[("beta.dll", "b")]);

    let outside = fixture.plugins_source.join("beta").join("beta.dll");

    fixture
        .plugman()
        .args(["install", "alpha"])
        .args(["--entry", &format!("alpha={}", outside.display())])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inside the 'alpha' plugin folder"));
}

#[test]
fn install_is_idempotent_for_the_manifest() {
    let fixture = Fixture::new();
    fixture.add_plugin("alpha", &[("alpha.dll", "a")]);

    for _ in 0..2 {
        fixture
            .plugman()
            .args(["install", "alpha", "--entry", "alpha=alpha.dll"])
            .assert()
            .success();
    }

    let manifest = fs::read_to_string(fixture.manifest_path()).expect("manifest written");
    assert_eq!(manifest.matches("<Plugin ").count(), 1);
}
