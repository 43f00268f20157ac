use plata_core::profiles::{NewProfile, ProfileRepositoryTrait, UserProfile};
use plata_core::Result;

use super::model::UserDB;
use crate::db::{get_connection, DbPool, WriteHandle};
use crate::errors::StorageError;
use crate::schema::users;
use async_trait::async_trait;
use diesel::prelude::*;

use std::sync::Arc;

pub struct ProfileRepository {
    pool: Arc<DbPool>,
    writer: WriteHandle,
}

impl ProfileRepository {
    pub fn new(pool: Arc<DbPool>, writer: WriteHandle) -> Self {
        ProfileRepository { pool, writer }
    }
}

#[async_trait]
impl ProfileRepositoryTrait for ProfileRepository {
    fn get(&self, user_id: &str) -> Result<UserProfile> {
        let mut conn = get_connection(&self.pool)?;
        let row = users::table
            .find(user_id)
            .first::<UserDB>(&mut conn)
            .map_err(StorageError::from)?;
        Ok(UserProfile::from(row))
    }

    async fn insert(&self, new_profile: NewProfile) -> Result<UserProfile> {
        let row = UserDB::from(new_profile);
        self.writer
            .exec(move |conn| -> Result<UserProfile> {
                let inserted = diesel::insert_into(users::table)
                    .values(&row)
                    .returning(UserDB::as_returning())
                    .get_result(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(inserted))
            })
            .await
    }

    async fn update(&self, profile: UserProfile) -> Result<UserProfile> {
        let row = UserDB::from(profile);
        let profile_id = row.id.clone();
        self.writer
            .exec(move |conn| -> Result<UserProfile> {
                diesel::update(users::table.find(&profile_id))
                    .set(&row)
                    .execute(conn)
                    .map_err(StorageError::from)?;
                let updated = users::table
                    .find(&profile_id)
                    .first::<UserDB>(conn)
                    .map_err(StorageError::from)?;
                Ok(UserProfile::from(updated))
            })
            .await
    }
}
