pub struct DefaultsConfig {
    pub pae_cutoff: f64,
    pub dist_cutoff: f64,
    pub output_prefix: String,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            pae_cutoff: 15.0,
            dist_cutoff: 15.0,
            output_prefix: "ipsae_results".to_string(),
        }
    }
}
