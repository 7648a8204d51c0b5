// ============================================================================
// CONFIG - Configuración en tiempo de compilación (.env via build.rs)
// ============================================================================

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub enable_logging: bool,
    /// Latencia simulada de la API de demo, en milisegundos.
    pub api_latency_ms: u32,
    pub app_title: String,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self {
            environment: option_env!("ENVIRONMENT").unwrap_or("development").to_string(),
            enable_logging: option_env!("ENABLE_LOGGING")
                .unwrap_or("true")
                .parse()
                .unwrap_or(true),
            api_latency_ms: option_env!("API_LATENCY_MS")
                .unwrap_or("450")
                .parse()
                .unwrap_or(450),
            app_title: option_env!("APP_TITLE").unwrap_or("SynapseAI").to_string(),
        }
    }

    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = AppConfig::from_env();
        assert!(!config.app_title.is_empty());
        assert!(config.api_latency_ms > 0);
    }
}
