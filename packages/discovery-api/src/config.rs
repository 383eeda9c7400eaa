use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default = "default_port")]
    pub port: u16,

    // Upstream discovery API key; empty means upstream rejects the call
    #[serde(default)]
    pub tm_api_key: String,

    // Client-side tokens exposed through /api/config
    #[serde(default)]
    pub ipinfo_token: String,

    #[serde(default)]
    pub google_geocoding_api_key: String,

    #[serde(default = "default_base_url")]
    pub ticketmaster_base_url: String,
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
            tm_api_key: String::new(),
            ipinfo_token: String::new(),
            google_geocoding_api_key: String::new(),
            ticketmaster_base_url: default_base_url(),
        }
    }
}

fn default_port() -> u16 {
    3001
}

fn default_base_url() -> String {
    "https://app.ticketmaster.com/discovery/v2".to_string()
}
