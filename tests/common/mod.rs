use std::path::PathBuf;

use tempfile::TempDir;

/// Disposable on-disk fixture: a storage file and a seed file inside a
/// temporary directory that lives as long as the test.
pub struct TestEnv {
    _dir: TempDir,
    pub storage_path: PathBuf,
    pub leads_path: PathBuf,
}

impl TestEnv {
    pub fn new(seed_json: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let storage_path = dir.path().join("storage.json");
        let leads_path = dir.path().join("leads.json");
        std::fs::write(&leads_path, seed_json).expect("write seed file");

        Self {
            _dir: dir,
            storage_path,
            leads_path,
        }
    }

    pub fn app_config(&self) -> seller_console::config::AppConfig {
        seller_console::config::AppConfig {
            storage_path: self.storage_path.clone(),
            leads_path: self.leads_path.clone(),
            fetch_delay_ms: 0,
        }
    }
}

pub const SEED: &str = r#"[
    {"id":"l1","name":"Acme Co","company":"Acme","email":"sales@acme.test","source":"webinar","score":85,"status":"new"},
    {"id":"l2","name":"Globex","company":"Globex Corp","email":"info@globex.test","source":"referral","score":70,"status":"contacted"},
    {"id":"l3","name":"Initech","company":"Initech LLC","email":"hello@initech.test","source":"cold_call","score":70,"status":"converted"}
]"#;
