use crate::config::*;
use clap::Parser;
use std::time::Duration;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://192.168.0.201:8080/v1");
        assert_eq!(config.model, "local");
        assert_eq!(config.api_key, "sk-no-key");
        assert_eq!(config.timeout, Duration::from_secs(120));
        assert_eq!(config.question, "What time is it in Tokyo right now?");
    }

    #[test]
    fn test_completions_url() {
        let mut config = Config::default();
        assert_eq!(
            config.completions_url(),
            "http://192.168.0.201:8080/v1/chat/completions"
        );

        config.base_url = "http://localhost:8080/v1/".to_string();
        assert_eq!(config.completions_url(), "http://localhost:8080/v1/chat/completions");
    }

    #[test]
    fn test_cli_flags_override() {
        let cli = Cli::try_parse_from([
            "toolcall-smoke",
            "--base-url",
            "http://localhost:9000/v1",
            "--model",
            "qwen",
            "--api-key",
            "secret",
            "--timeout-secs",
            "5",
            "What time is it in Paris?",
        ])
        .unwrap();
        let config = Config::from(&cli);

        assert_eq!(config.base_url, "http://localhost:9000/v1");
        assert_eq!(config.model, "qwen");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.question, "What time is it in Paris?");
        assert!(!cli.verbose);
    }

    #[test]
    fn test_cli_rejects_bad_timeout() {
        let result = Cli::try_parse_from(["toolcall-smoke", "--timeout-secs", "soon"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_cli_verbose_flag() {
        let cli = Cli::try_parse_from(["toolcall-smoke", "-v", "--model", "m"]).unwrap();
        assert!(cli.verbose);
        assert_eq!(Config::from(&cli).question, DEFAULT_QUESTION);
    }
}
