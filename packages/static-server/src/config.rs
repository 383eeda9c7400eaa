use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Directory the front-end build is served from
    #[serde(default = "default_static_dir")]
    pub static_dir: String,

    // Entry document, also the SPA fallback for unmatched paths
    #[serde(default = "default_index_file")]
    pub index_file: String,
}

impl Config {
    pub fn from_env() -> Result<Self, envy::Error> {
        envy::from_env::<Config>()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: default_port(),
            static_dir: default_static_dir(),
            index_file: default_index_file(),
        }
    }
}

fn default_port() -> u16 {
    3000
}

fn default_static_dir() -> String {
    "static".to_string()
}

fn default_index_file() -> String {
    "index.html".to_string()
}
