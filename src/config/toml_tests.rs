//! Tests for TOML configuration parsing.

use super::toml::{TomlConfig, default_config_template};

mod parsing {
    use super::*;

    #[test]
    fn parse_minimal_config() {
        let toml = r#"
            [dingtalk]
            webhook_url = "https://oapi.dingtalk.com/robot/send?access_token=abc"
        "#;

        let config = TomlConfig::parse(toml).unwrap();
        assert_eq!(
            config.dingtalk.webhook_url.as_deref(),
            Some("https://oapi.dingtalk.com/robot/send?access_token=abc")
        );
        assert!(config.dingtalk.title.is_none());
        assert!(config.receiver.name.is_none());
        assert!(config.http.timeout.is_none());
    }

    #[test]
    fn parse_full_config() {
        let toml = r#"
            [dingtalk]
            webhook_url = "https://oapi.dingtalk.com/robot/send?access_token=abc"
            title = "{{status}}"
            text = '''
            {{#each alerts}}- {{labels.instance}}
            {{/each}}'''

            [receiver]
            name = "ops"
            external_url = "http://am:9093"

            [http]
            timeout = 5
            proxy_url = "http://proxy:3128"
            user_agent = "custom/1.0"
            insecure_skip_verify = true
        "#;

        let config = TomlConfig::parse(toml).unwrap();

        assert_eq!(config.dingtalk.title.as_deref(), Some("{{status}}"));
        assert!(config.dingtalk.text.unwrap().contains("{{#each alerts}}"));
        assert_eq!(config.receiver.name.as_deref(), Some("ops"));
        assert_eq!(
            config.receiver.external_url.as_deref(),
            Some("http://am:9093")
        );
        assert_eq!(config.http.timeout, Some(5));
        assert_eq!(config.http.proxy_url.as_deref(), Some("http://proxy:3128"));
        assert_eq!(config.http.user_agent.as_deref(), Some("custom/1.0"));
        assert!(config.http.insecure_skip_verify);
    }

    #[test]
    fn empty_config_is_valid() {
        let config = TomlConfig::parse("").unwrap();

        assert!(config.dingtalk.webhook_url.is_none());
        assert!(!config.http.insecure_skip_verify);
    }
}

mod errors {
    use super::*;

    #[test]
    fn unknown_section_is_rejected() {
        let result = TomlConfig::parse("[webhook]\nurl = \"x\"");

        assert!(result.is_err());
    }

    #[test]
    fn unknown_field_is_rejected() {
        let result = TomlConfig::parse("[dingtalk]\nsecret = \"x\"");

        assert!(result.is_err());
    }

    #[test]
    fn wrong_type_is_rejected() {
        let result = TomlConfig::parse("[http]\ntimeout = \"ten\"");

        assert!(result.is_err());
    }
}

mod template {
    use super::*;

    #[test]
    fn default_template_parses() {
        let config = TomlConfig::parse(&default_config_template()).unwrap();

        assert!(config.dingtalk.webhook_url.is_none());
        assert_eq!(config.http.timeout, Some(10));
    }

    #[test]
    fn default_template_documents_every_section() {
        let template = default_config_template();

        for section in ["[dingtalk]", "[receiver]", "[http]"] {
            assert!(template.contains(section), "missing {section}");
        }
        assert!(template.contains("webhook_url"));
    }
}
