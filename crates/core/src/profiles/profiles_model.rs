//! User profile domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Domain model for a user profile. The id is the auth provider's user
/// id; profiles are created at registration and never deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: Option<u8>,
    pub gender: Option<String>,
    pub monthly_income: Option<Decimal>,
    /// Key of a built-in avatar drawing.
    pub avatar_key: Option<String>,
    /// Base64 photo. When present it overrides the avatar in the UI,
    /// though both may be stored.
    pub profile_photo: Option<String>,
}

impl UserProfile {
    /// The photo shown for this user, if any; callers fall back to
    /// `avatar_key` when this is `None`.
    pub fn display_photo(&self) -> Option<&str> {
        self.profile_photo.as_deref().filter(|p| !p.is_empty())
    }
}

/// Input model for profile creation at registration time.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewProfile {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
}

/// Raw edit-screen input for a profile update; numeric fields arrive as
/// the strings the user typed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub name: String,
    pub surname: String,
    pub age: String,
    pub gender: Option<String>,
    /// May carry grouping separators ("1.500.000"); stripped on parse.
    pub monthly_income: String,
    pub avatar_key: Option<String>,
    /// `Some` keeps/replaces the photo; `None` clears it (picking an
    /// avatar discards any stored photo).
    pub profile_photo: Option<String>,
}
