//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::process::{Command, Output};

use ert_manager::snapshot::{ErtType, RemoteSnapshot, RequestMessage};
use tempfile::TempDir;

/// Builder for remote snapshots
#[derive(Default)]
pub struct SnapshotBuilder {
    snapshot: RemoteSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn security_level(mut self, level: &str, color: &str) -> Self {
        self.snapshot.security_level = level.to_string();
        self.snapshot.security_level_color = color.to_string();
        self
    }

    pub fn answered(mut self, answered: bool) -> Self {
        self.snapshot.ert_request_answered = answered;
        self
    }

    pub fn ert_type(mut self, ert_type: ErtType) -> Self {
        self.snapshot.ert_type = Some(ert_type);
        self
    }

    pub fn admin(mut self, on: bool) -> Self {
        self.snapshot.admin_slots = on;
        self
    }

    pub fn commander(mut self, on: bool) -> Self {
        self.snapshot.commander_slots = on;
        self
    }

    /// Set every editable role to the same count
    pub fn all_slots(mut self, count: i64) -> Self {
        self.snapshot.security_slots = Some(count);
        self.snapshot.medical_slots = Some(count);
        self.snapshot.engineering_slots = Some(count);
        self.snapshot.inquisitor_slots = Some(count);
        self.snapshot.janitor_slots = Some(count);
        self
    }

    pub fn totals(mut self, total: i64, spawnpoints: i64) -> Self {
        self.snapshot.total_slots = total;
        self.snapshot.ert_spawnpoints = spawnpoints;
        self
    }

    pub fn request(mut self, time: &str, sender: &str, uid: &str, message: &str) -> Self {
        self.snapshot.ert_request_messages.push(RequestMessage {
            time: time.to_string(),
            sender_real_name: sender.to_string(),
            sender_uid: uid.to_string(),
            message: message.to_string(),
        });
        self
    }

    pub fn build(self) -> RemoteSnapshot {
        self.snapshot
    }
}

/// A typical mid-round snapshot
pub fn sample_snapshot() -> RemoteSnapshot {
    SnapshotBuilder::new()
        .security_level("Red", "#ff0000")
        .ert_type(ErtType::Amber)
        .admin(true)
        .all_slots(1)
        .totals(6, 5)
        .request("12:03 &amp; 4s", "Jane Doe", "uid-1", "We need help!")
        .build()
}

/// Write a snapshot as JSON into `dir` and return its path
pub fn write_snapshot(dir: &Path, name: &str, snapshot: &RemoteSnapshot) -> std::path::PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, serde_json::to_string(snapshot).unwrap()).unwrap();
    path
}

/// Runs the `ert-manager` binary inside an isolated temp directory
pub struct ErtTest {
    pub temp_dir: TempDir,
}

impl ErtTest {
    pub fn new() -> Self {
        ErtTest {
            temp_dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    pub fn write_file(&self, name: &str, contents: &str) -> std::path::PathBuf {
        let path = self.temp_dir.path().join(name);
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    pub fn run(&self, args: &[&str]) -> Output {
        Command::new(env!("CARGO_BIN_EXE_ert-manager"))
            .args(args)
            .current_dir(self.temp_dir.path())
            .env_remove("ERT_MANAGER_CONFIG")
            .env_remove("ERT_MANAGER_LOG")
            .output()
            .expect("Failed to execute ert-manager")
    }

    pub fn run_success(&self, args: &[&str]) -> String {
        let output = self.run(args);
        if !output.status.success() {
            panic!(
                "Command {:?} failed with status {:?}\nstdout: {}\nstderr: {}",
                args,
                output.status,
                String::from_utf8_lossy(&output.stdout),
                String::from_utf8_lossy(&output.stderr)
            );
        }
        String::from_utf8_lossy(&output.stdout).into_owned()
    }

    pub fn run_failure(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            !output.status.success(),
            "Command {:?} unexpectedly succeeded",
            args
        );
        String::from_utf8_lossy(&output.stderr).into_owned()
    }
}
