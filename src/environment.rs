use std::fmt::{Debug, Display, Formatter};
use std::str::FromStr;

/// Represents the backends the dashboard can poll.
#[derive(Clone, Default, PartialEq, Eq)]
pub enum Environment {
    /// Backend running on this machine.
    Local,
    /// Backend on the branch office LAN.
    #[default]
    Lan,
    /// Any other backend, addressed by its base URL.
    Custom { base_url: String },
}

impl Environment {
    /// Returns the base URL of the loan-management backend.
    pub fn base_url(&self) -> String {
        match self {
            Environment::Local => "http://localhost:5000".to_string(),
            Environment::Lan => "http://192.168.100.2:5000".to_string(),
            Environment::Custom { base_url } => base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Resolve the environment from an optional URL override, falling back to `self`.
    pub fn with_override(self, base_url: Option<String>) -> Self {
        match base_url {
            Some(base_url) if !base_url.trim().is_empty() => Environment::Custom { base_url },
            _ => self,
        }
    }
}

impl FromStr for Environment {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "local" => Ok(Environment::Local),
            "lan" => Ok(Environment::Lan),
            other if other.starts_with("http://") || other.starts_with("https://") => {
                Ok(Environment::Custom {
                    base_url: s.to_string(),
                })
            }
            _ => Err(()),
        }
    }
}

impl Display for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Local => write!(f, "Local"),
            Environment::Lan => write!(f, "LAN"),
            Environment::Custom { .. } => write!(f, "Custom"),
        }
    }
}

impl Debug for Environment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Environment::{}, URL: {}", self, self.base_url())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_environments() {
        assert_eq!("local".parse::<Environment>(), Ok(Environment::Local));
        assert_eq!("LAN".parse::<Environment>(), Ok(Environment::Lan));
        assert!("staging".parse::<Environment>().is_err());
    }

    #[test]
    fn test_parse_url_as_custom() {
        let env: Environment = "http://10.0.0.5:5000/".parse().unwrap();
        assert_eq!(env.base_url(), "http://10.0.0.5:5000");
    }

    #[test]
    fn test_override_ignores_blank_url() {
        let env = Environment::Local.with_override(Some("  ".to_string()));
        assert_eq!(env, Environment::Local);

        let env = Environment::Local.with_override(Some("http://example.test".to_string()));
        assert_eq!(env.base_url(), "http://example.test");
    }
}
