use std::path::PathBuf;

/// Where the server listens and where the data files live.
///
/// There is no external configuration surface; tests build this directly.
#[derive(Clone, Debug)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Directory the per-source relative paths resolve against.
    pub data_root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".to_string(),
            data_root: PathBuf::from(".."),
        }
    }
}
