use std::sync::Arc;

use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;

use super::profiles_model::{NewProfile, ProfileUpdate, UserProfile};
use super::profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
use crate::auth::AuthContext;
use crate::errors::{Result, ValidationError};
use crate::money::parse_formatted_amount;

/// Service for user profiles.
pub struct ProfileService {
    repository: Arc<dyn ProfileRepositoryTrait>,
    auth: Arc<dyn AuthContext>,
}

impl ProfileService {
    pub fn new(repository: Arc<dyn ProfileRepositoryTrait>, auth: Arc<dyn AuthContext>) -> Self {
        Self { repository, auth }
    }
}

fn validate_person_name(value: &str, field: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_alphabetic() || c == ' ') {
        return Err(ValidationError::InvalidInput(format!(
            "{}: solo letras y espacios",
            field
        ))
        .into());
    }
    Ok(trimmed.to_string())
}

fn validate_age(value: &str) -> Result<u8> {
    value
        .trim()
        .parse::<u8>()
        .ok()
        .filter(|age| (18..=99).contains(age))
        .ok_or_else(|| ValidationError::InvalidInput("edad mínima 18, máxima 99".to_string()).into())
}

fn parse_monthly_income(value: &str) -> Result<Option<Decimal>> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    // The edit screen lets grouped values through ("1.500.000"), but
    // non-numeric input is rejected, never coerced to zero.
    let income = parse_formatted_amount(trimmed)?;
    if income < Decimal::ZERO {
        return Err(ValidationError::InvalidAmount(value.to_string()).into());
    }
    Ok(Some(income))
}

#[async_trait]
impl ProfileServiceTrait for ProfileService {
    async fn register_profile(&self, new_profile: NewProfile) -> Result<UserProfile> {
        if new_profile.name.trim().is_empty() || new_profile.surname.trim().is_empty() {
            return Err(ValidationError::MissingField("nombre y apellidos".to_string()).into());
        }
        if new_profile.email.trim().is_empty() {
            return Err(ValidationError::MissingField("correo".to_string()).into());
        }
        debug!("registering profile for user {}", new_profile.id);
        self.repository.insert(new_profile).await
    }

    fn get_profile(&self) -> Result<UserProfile> {
        let user_id = self.auth.current_user_id()?;
        self.repository.get(&user_id)
    }

    async fn update_profile(&self, update: ProfileUpdate) -> Result<UserProfile> {
        let user_id = self.auth.current_user_id()?;
        let current = self.repository.get(&user_id)?;

        let name = validate_person_name(&update.name, "nombre")?;
        let surname = validate_person_name(&update.surname, "apellidos")?;
        let age = validate_age(&update.age)?;
        let monthly_income = parse_monthly_income(&update.monthly_income)?;

        // Email is read-only on the edit screen; it never changes here.
        let updated = UserProfile {
            id: current.id,
            name,
            surname,
            email: current.email,
            age: Some(age),
            gender: update.gender.or(current.gender),
            monthly_income: monthly_income.or(current.monthly_income),
            avatar_key: update.avatar_key.or(current.avatar_key),
            profile_photo: update.profile_photo,
        };

        self.repository.update(updated).await
    }
}
