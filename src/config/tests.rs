// SPDX-License-Identifier: MIT
// Copyright (c) 2025 Jesof

//! Unit tests for configuration module

#[cfg(test)]
mod test {
    use super::super::*;

    fn parse(args: &[&str]) -> Cli {
        let mut argv = vec!["arris-exporter"];
        argv.extend_from_slice(args);
        Cli::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.modem_host, "192.168.100.1");
        assert_eq!(config.server_addr.port(), 9300);
        assert_eq!(config.scrape_interval, Duration::from_secs(10));
        assert_eq!(config.request_timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_from_cli_with_flags() {
        let cli = parse(&[
            "--host",
            "10.0.0.1",
            "-i",
            "30",
            "--port",
            "9400",
            "--listen-address",
            "127.0.0.1",
            "--timeout",
            "5",
        ]);
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.modem_host, "10.0.0.1");
        assert_eq!(config.scrape_interval, Duration::from_secs(30));
        assert_eq!(config.request_timeout, Duration::from_secs(5));
        assert_eq!(config.server_addr.to_string(), "127.0.0.1:9400");
    }

    #[test]
    fn test_host_is_trimmed() {
        let cli = parse(&["--host", "  modem.lan "]);
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.modem_host, "modem.lan");
    }

    #[test]
    fn test_rejects_host_with_scheme() {
        let cli = parse(&["--host", "http://192.168.100.1"]);
        let err = Config::from_cli(cli).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_rejects_empty_host() {
        let cli = parse(&["--host", " "]);
        assert!(Config::from_cli(cli).is_err());
    }

    #[test]
    fn test_rejects_zero_interval() {
        let cli = parse(&["--interval", "0"]);
        let err = Config::from_cli(cli).unwrap_err();
        assert!(err.to_string().contains("scrape interval"));
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let cli = parse(&["--timeout", "0"]);
        let err = Config::from_cli(cli).unwrap_err();
        assert!(err.to_string().contains("request timeout"));
    }

    #[test]
    fn test_rejects_bad_listen_address() {
        let cli = parse(&["--listen-address", "not-an-ip"]);
        let err = Config::from_cli(cli).unwrap_err();
        assert!(matches!(err, AppError::Config(_)));
    }

    #[test]
    fn test_accepts_ipv6_listen_address() {
        let cli = parse(&["--listen-address", "::", "--port", "9300"]);
        let config = Config::from_cli(cli).unwrap();
        assert_eq!(config.server_addr.to_string(), "[::]:9300");
    }

    #[test]
    fn test_rejects_non_numeric_port() {
        let result = Cli::try_parse_from(["arris-exporter", "--port", "metrics"]);
        assert!(result.is_err());
    }
}
