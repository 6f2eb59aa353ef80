use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A user's complete preference set.
///
/// Every value read from storage or handed to another user goes through
/// [`Settings::resolve`], so a `Settings` always carries all three keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub disable_notification_email: bool,
    pub match_strangers: bool,
    pub match_friends: bool,
}

impl Settings {
    pub const DEFAULT: Settings = Settings {
        disable_notification_email: false,
        match_strangers: true,
        match_friends: true,
    };

    /// Complete a possibly sparse settings record against the defaults.
    ///
    /// Pure and total: `None` yields the defaults, and resolving an already
    /// resolved value returns it unchanged.
    pub fn resolve(raw: Option<&PartialSettings>) -> Self {
        let Some(raw) = raw else {
            return Self::DEFAULT;
        };

        Self {
            disable_notification_email: raw
                .disable_notification_email
                .unwrap_or(Self::DEFAULT.disable_notification_email),
            match_strangers: raw
                .match_strangers
                .unwrap_or(Self::DEFAULT.match_strangers),
            match_friends: raw.match_friends.unwrap_or(Self::DEFAULT.match_friends),
        }
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Settings as stored: any of the three keys may be unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartialSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub disable_notification_email: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_strangers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub match_friends: Option<bool>,
}

impl PartialSettings {
    /// Read the recognized keys out of arbitrary JSON.
    ///
    /// Non-object input, unknown keys and non-boolean values are ignored.
    pub fn from_json(value: &Value) -> Self {
        Self {
            disable_notification_email: value
                .get("disableNotificationEmail")
                .and_then(Value::as_bool),
            match_strangers: value.get("matchStrangers").and_then(Value::as_bool),
            match_friends: value.get("matchFriends").and_then(Value::as_bool),
        }
    }

    /// Overlay `patch` on top of `self`; keys unset in the patch keep their value.
    pub fn merge(self, patch: PartialSettings) -> Self {
        Self {
            disable_notification_email: patch
                .disable_notification_email
                .or(self.disable_notification_email),
            match_strangers: patch.match_strangers.or(self.match_strangers),
            match_friends: patch.match_friends.or(self.match_friends),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.disable_notification_email.is_none()
            && self.match_strangers.is_none()
            && self.match_friends.is_none()
    }
}

impl From<Settings> for PartialSettings {
    fn from(settings: Settings) -> Self {
        Self {
            disable_notification_email: Some(settings.disable_notification_email),
            match_strangers: Some(settings.match_strangers),
            match_friends: Some(settings.match_friends),
        }
    }
}
