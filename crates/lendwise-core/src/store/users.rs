use chrono::Utc;

use super::OriginationStore;
use crate::model::{User, UserPatch};
use crate::{LendWiseError, LendWiseResult};

impl OriginationStore {
    pub fn users(&self) -> Vec<User> {
        self.simulate_latency();
        self.lock().users.clone()
    }

    pub fn user(&self, id: &str) -> LendWiseResult<User> {
        self.simulate_latency();
        self.lock()
            .users
            .iter()
            .find(|u| u.id == id)
            .cloned()
            .ok_or_else(|| LendWiseError::NotFound {
                entity: "User",
                id: id.into(),
            })
    }

    pub fn update_user(&self, id: &str, patch: UserPatch) -> LendWiseResult<User> {
        self.simulate_latency();
        let mut state = self.lock();
        let user = state
            .users
            .iter_mut()
            .find(|u| u.id == id)
            .ok_or_else(|| LendWiseError::NotFound {
                entity: "User",
                id: id.into(),
            })?;

        if let Some(email) = patch.email {
            user.email = email;
        }
        if let Some(full_name) = patch.full_name {
            user.full_name = full_name;
        }
        if let Some(phone_number) = patch.phone_number {
            user.phone_number = phone_number;
        }
        if let Some(address) = patch.address {
            user.address = address;
        }
        if let Some(date_of_birth) = patch.date_of_birth {
            user.date_of_birth = date_of_birth;
        }
        if let Some(role) = patch.role {
            user.role = role;
        }
        user.updated_at = Utc::now();

        Ok(user.clone())
    }

    pub fn delete_user(&self, id: &str) -> LendWiseResult<()> {
        self.simulate_latency();
        let mut state = self.lock();
        let before = state.users.len();
        state.users.retain(|u| u.id != id);
        if state.users.len() == before {
            return Err(LendWiseError::NotFound {
                entity: "User",
                id: id.into(),
            });
        }
        Ok(())
    }
}
