use std::fmt::{self, Debug, Formatter};

/// A password that never shows up in debug output.
///
/// `None` and the empty password are the same: the pixel order falls back to
/// the fixed default and the content is stored unencrypted.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Password(Option<String>);

impl Password {
    pub fn as_str(&self) -> &str {
        self.0.as_deref().unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.as_str().is_empty()
    }
}

impl Debug for Password {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if let Some(password) = &self.0 {
            write!(f, "Password({})", "*".repeat(password.len()))
        } else {
            write!(f, "Password(None)")
        }
    }
}

impl From<Option<String>> for Password {
    fn from(password: Option<String>) -> Self {
        Self(password)
    }
}

impl From<String> for Password {
    fn from(password: String) -> Self {
        Self(Some(password))
    }
}

impl From<&str> for Password {
    fn from(password: &str) -> Self {
        Self(Some(password.to_string()))
    }
}

impl AsRef<Option<String>> for Password {
    fn as_ref(&self) -> &Option<String> {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_and_as_ref() {
        let password: Password = None.into();
        assert_eq!(password.as_ref(), &None);

        let password: Password = "password".into();
        assert_eq!(password.as_ref(), &Some("password".to_string()));
    }

    #[test]
    fn test_none_is_the_empty_password() {
        let password: Password = None.into();
        assert_eq!(password.as_str(), "");
        assert!(password.is_empty());
        assert!(Password::from("").is_empty());
        assert!(!Password::from(String::from("x")).is_empty());
    }

    #[test]
    fn test_debug() {
        let password: Password = None.into();
        assert_eq!(format!("{:?}", password), "Password(None)");

        let password: Password = "password".into();
        assert_eq!(format!("{:?}", password), "Password(********)");
    }
}
