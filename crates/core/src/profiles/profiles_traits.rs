use crate::errors::Result;
use crate::profiles::profiles_model::{NewProfile, UserProfile};
use async_trait::async_trait;

/// Trait for profile repository operations.
#[async_trait]
pub trait ProfileRepositoryTrait: Send + Sync {
    fn get(&self, user_id: &str) -> Result<UserProfile>;
    async fn insert(&self, new_profile: NewProfile) -> Result<UserProfile>;
    async fn update(&self, profile: UserProfile) -> Result<UserProfile>;
}

/// Trait for profile service operations.
#[async_trait]
pub trait ProfileServiceTrait: Send + Sync {
    /// Creates the profile row at registration.
    async fn register_profile(&self, new_profile: NewProfile) -> Result<UserProfile>;
    fn get_profile(&self) -> Result<UserProfile>;
    async fn update_profile(&self, update: crate::profiles::ProfileUpdate) -> Result<UserProfile>;
}
