//! Database models for user profiles.

use diesel::prelude::*;
use serde::{Deserialize, Serialize};

use plata_core::money::{parse_stored_amount, to_stored_amount};
use plata_core::profiles::{NewProfile, UserProfile};

/// Database model for user profiles. The id is the auth provider's
/// user id, so no uuid is generated on insert.
#[derive(
    Queryable, Identifiable, AsChangeset, Insertable, Selectable, PartialEq, Serialize, Deserialize, Debug, Clone,
)]
#[diesel(table_name = crate::schema::users)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
#[diesel(treat_none_as_null = true)]
#[serde(rename_all = "camelCase")]
pub struct UserDB {
    pub id: String,
    pub name: String,
    pub surname: String,
    pub email: String,
    pub age: Option<i32>,
    pub gender: Option<String>,
    pub monthly_income: Option<String>,
    pub avatar_key: Option<String>,
    pub profile_photo: Option<String>,
}

impl From<UserDB> for UserProfile {
    fn from(db: UserDB) -> Self {
        Self {
            id: db.id,
            name: db.name,
            surname: db.surname,
            email: db.email,
            age: db.age.and_then(|a| u8::try_from(a).ok()),
            gender: db.gender,
            monthly_income: db.monthly_income.as_deref().map(parse_stored_amount),
            avatar_key: db.avatar_key,
            profile_photo: db.profile_photo,
        }
    }
}

impl From<UserProfile> for UserDB {
    fn from(profile: UserProfile) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            surname: profile.surname,
            email: profile.email,
            age: profile.age.map(i32::from),
            gender: profile.gender,
            monthly_income: profile.monthly_income.map(to_stored_amount),
            avatar_key: profile.avatar_key,
            profile_photo: profile.profile_photo,
        }
    }
}

impl From<NewProfile> for UserDB {
    fn from(new_profile: NewProfile) -> Self {
        Self {
            id: new_profile.id,
            name: new_profile.name,
            surname: new_profile.surname,
            email: new_profile.email,
            age: None,
            gender: None,
            monthly_income: None,
            avatar_key: None,
            profile_photo: None,
        }
    }
}
