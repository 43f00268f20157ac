//! Profiles module - user profile models, service, and traits.

mod profiles_model;
mod profiles_service;
mod profiles_traits;

pub use profiles_model::{NewProfile, ProfileUpdate, UserProfile};
pub use profiles_service::ProfileService;
pub use profiles_traits::{ProfileRepositoryTrait, ProfileServiceTrait};
