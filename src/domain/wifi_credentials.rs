use std::fmt;

/// Characters the SSID form forbids; they would also break the markup
/// the credentials are echoed into on the device.
const FORBIDDEN_CHARS: [char; 5] = ['>', '<', '"', '\'', '&'];

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct WifiCredentials {
    ssid: Ssid,
    password: Passphrase,
}

impl WifiCredentials {
    pub fn new(
        ssid: impl Into<String>,
        password: impl Into<String>,
    ) -> Result<Self, CredentialsError> {
        Ok(Self {
            ssid: Ssid::new(ssid)?,
            password: Passphrase::new(password)?,
        })
    }

    pub fn ssid(&self) -> &str {
        self.ssid.as_str()
    }

    pub fn passphrase(&self) -> &str {
        self.password.as_str()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CredentialsError {
    #[error("SSID must not be empty")]
    EmptySsid,

    #[error("SSID must be at most 32 characters, got {0}")]
    SsidTooLong(usize),

    #[error("WPA2 passphrase must be 8 to 63 characters, got {0}")]
    BadPassphraseLength(usize),

    #[error(">, <, \", ' and & are not allowed")]
    ForbiddenCharacter,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ssid(String);

impl Ssid {
    pub fn new(ssid: impl Into<String>) -> Result<Self, CredentialsError> {
        let ssid = ssid.into();
        if ssid.is_empty() {
            return Err(CredentialsError::EmptySsid);
        }
        if ssid.chars().count() > 32 {
            return Err(CredentialsError::SsidTooLong(ssid.chars().count()));
        }
        if ssid.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) {
            return Err(CredentialsError::ForbiddenCharacter);
        }
        Ok(Self(ssid))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Ssid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// WPA2 passphrase. An empty passphrase selects an open network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Passphrase(String);

impl Passphrase {
    pub fn new(passphrase: impl Into<String>) -> Result<Self, CredentialsError> {
        let passphrase = passphrase.into();
        let len = passphrase.chars().count();
        if len != 0 && !(8..=63).contains(&len) {
            return Err(CredentialsError::BadPassphraseLength(len));
        }
        if passphrase.chars().any(|c| FORBIDDEN_CHARS.contains(&c)) {
            return Err(CredentialsError::ForbiddenCharacter);
        }
        Ok(Self(passphrase))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl serde::Serialize for Ssid {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Ssid {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ssid::new(s).map_err(serde::de::Error::custom)
    }
}

impl serde::Serialize for Passphrase {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> serde::Deserialize<'de> for Passphrase {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Passphrase::new(s).map_err(serde::de::Error::custom)
    }
}
