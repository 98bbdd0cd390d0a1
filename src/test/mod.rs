use std::fs::remove_dir_all;
use std::path::Path;

use rocket::local::blocking::Client;

use crate::build_rocket;
use crate::config::IntakeConfig;
use crate::upload::filter::RejectionPolicy;
use crate::upload::UploadStore;


pub static BOUNDARY: &str = "BOUNDARY";
pub static MULTIPART_CONTENT_TYPE: &str = "multipart/form-data; boundary=BOUNDARY";

pub fn current_thread_name() -> String {
    let current_thread = std::thread::current();
    current_thread.name().unwrap().to_string()
}

/// each test thread gets its own upload directory so tests can run in parallel
pub fn upload_dir() -> String {
    format!("./{}_uploads", current_thread_name().replace("::", "_"))
}

pub fn cleanup() {
    let dir = upload_dir();
    let path = Path::new(dir.as_str());
    if path.exists() {
        remove_dir_all(path).unwrap_or(());
    }
}

pub fn test_config(policy: RejectionPolicy) -> IntakeConfig {
    let mut config = IntakeConfig::default();
    config.upload.directory = upload_dir();
    config.upload.rejection_policy = policy;
    config
}

/// creates a client pointed at a fresh upload directory for the current test
pub fn client_with(config: IntakeConfig) -> Client {
    cleanup();
    let store = UploadStore::prepare(&config.upload.directory).unwrap();
    Client::tracked(build_rocket(&config, store)).expect("Valid Rocket Instance")
}

pub fn client() -> Client {
    client_with(test_config(RejectionPolicy::SilentDrop))
}

/// builds a multipart/form-data body separated by [`BOUNDARY`]
#[derive(Default)]
pub struct MultipartBody {
    body: String,
}

impl MultipartBody {
    pub fn new() -> MultipartBody {
        MultipartBody::default()
    }

    pub fn text(mut self, name: &str, value: &str) -> MultipartBody {
        self.body.push_str(&format!(
            "--{BOUNDARY}\r\n\
Content-Disposition: form-data; name=\"{name}\"\r\n\
\r\n\
{value}\r\n"
        ));
        self
    }

    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, contents: &str) -> MultipartBody {
        self.body.push_str(&format!(
            "--{BOUNDARY}\r\n\
Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n\
Content-Type: {content_type}\r\n\
\r\n\
{contents}\r\n"
        ));
        self
    }

    pub fn build(mut self) -> String {
        self.body.push_str(&format!("--{BOUNDARY}--\r\n"));
        self.body
    }
}
