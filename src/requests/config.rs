pub struct Config {
    pub base_requests_key: String,
    pub stat_requests_key: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_requests_key: "base_requests".into(),
            stat_requests_key: "stat_requests".into(),
        }
    }
}
