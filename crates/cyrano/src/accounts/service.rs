use std::sync::Arc;

use chrono::{Duration, Utc};
use tracing::info;

use super::domain::{
    AdminStats, ArchetypeCount, Pagination, PlanCount, Role, User, UserDetail, UserFilter, UserId,
    UserPage, UserProfile, UserQuery, UserSummary, UserUpdate,
};
use super::repository::{AnalysisRepository, RepositoryError, UserRepository};
use crate::config::AccountsConfig;

/// Analyses shown on the admin user detail view.
pub const RECENT_ANALYSES_LIMIT: usize = 10;
/// Newest accounts shown on the admin dashboard.
pub const RECENT_USERS_LIMIT: usize = 5;

/// Account provisioning and the admin surface over users and their analyses.
pub struct AccountService<U, A> {
    users: Arc<U>,
    analyses: Arc<A>,
    config: AccountsConfig,
}

impl<U, A> AccountService<U, A>
where
    U: UserRepository + 'static,
    A: AnalysisRepository + 'static,
{
    pub fn new(users: Arc<U>, analyses: Arc<A>, config: AccountsConfig) -> Self {
        Self {
            users,
            analyses,
            config,
        }
    }

    /// Create the account on first sight, otherwise refresh the forwarded claims.
    pub async fn sign_in(&self, profile: UserProfile) -> Result<User, AdminError> {
        if let Some(mut user) = self.users.find(&profile.id).await? {
            let mut changed = false;
            for (current, incoming) in [
                (&mut user.name, profile.name),
                (&mut user.email, profile.email),
                (&mut user.image, profile.image),
            ] {
                if incoming.is_some() && *current != incoming {
                    *current = incoming;
                    changed = true;
                }
            }
            if changed {
                self.users.update(user.clone()).await?;
            }
            return Ok(user);
        }

        let role = if self.config.admin_ids.iter().any(|id| *id == profile.id.0) {
            Role::Admin
        } else {
            Role::User
        };
        let user = User::new(profile, self.config.free_credits, role, Utc::now());
        let stored = self.users.insert(user).await?;
        info!(user = %stored.id, credits = stored.credits, "account created");
        Ok(stored)
    }

    pub async fn me(&self, id: &UserId) -> Result<User, AdminError> {
        self.users.find(id).await?.ok_or(AdminError::UserNotFound)
    }

    async fn require_admin(&self, actor: &UserId) -> Result<User, AdminError> {
        match self.users.find(actor).await? {
            Some(user) if user.is_admin() => Ok(user),
            _ => Err(AdminError::Forbidden),
        }
    }

    pub async fn list_users(
        &self,
        actor: &UserId,
        query: &UserQuery,
    ) -> Result<UserPage, AdminError> {
        self.require_admin(actor).await?;

        let filter = query.filter();
        let total = self.users.count(&filter).await?;
        let users = self
            .users
            .list(&filter, query.offset(), query.limit() as usize)
            .await?;

        let mut rows = Vec::with_capacity(users.len());
        for user in users {
            let analyses_count = self.analyses.count_for_user(&user.id).await?;
            rows.push(UserSummary {
                user,
                analyses_count,
            });
        }

        Ok(UserPage {
            users: rows,
            pagination: Pagination::new(query.page(), query.limit(), total),
        })
    }

    pub async fn user_detail(&self, actor: &UserId, id: &UserId) -> Result<UserDetail, AdminError> {
        self.require_admin(actor).await?;

        let user = self.users.find(id).await?.ok_or(AdminError::UserNotFound)?;
        let analyses = self
            .analyses
            .recent_for_user(id, RECENT_ANALYSES_LIMIT)
            .await?;
        Ok(UserDetail { user, analyses })
    }

    /// Apply an admin patch restricted to credits, plan, and role.
    pub async fn update_user(
        &self,
        actor: &UserId,
        id: &UserId,
        update: UserUpdate,
    ) -> Result<User, AdminError> {
        self.require_admin(actor).await?;

        if update.is_empty() {
            return Err(AdminError::EmptyUpdate);
        }

        let mut user = self.users.find(id).await?.ok_or(AdminError::UserNotFound)?;
        update.apply(&mut user);
        self.users.update(user.clone()).await?;

        info!(
            admin = %actor,
            user = %id,
            credits = user.credits,
            plan = user.plan.label(),
            "user updated by admin"
        );
        Ok(user)
    }

    pub async fn delete_user(&self, actor: &UserId, id: &UserId) -> Result<(), AdminError> {
        self.require_admin(actor).await?;

        if actor == id {
            return Err(AdminError::SelfDeletion);
        }

        self.users.delete(id).await.map_err(|error| match error {
            RepositoryError::NotFound => AdminError::UserNotFound,
            other => AdminError::Repository(other),
        })?;

        info!(admin = %actor, user = %id, "user deleted by admin");
        Ok(())
    }

    pub async fn stats(&self, actor: &UserId) -> Result<AdminStats, AdminError> {
        self.require_admin(actor).await?;

        let now = Utc::now();
        let week_ago = now - Duration::days(7);
        let month_ago = now - Duration::days(30);
        let everyone = UserFilter::default();

        let total_users = self.users.count(&everyone).await?;
        let users_last_7_days = self.users.count_created_since(week_ago).await?;
        let users_last_30_days = self.users.count_created_since(month_ago).await?;
        let total_analyses = self.analyses.count(None).await?;
        let analyses_last_7_days = self.analyses.count(Some(week_ago)).await?;

        let users_by_plan = self
            .users
            .plan_counts()
            .await?
            .into_iter()
            .map(|(plan, count)| PlanCount { plan, count })
            .collect();

        let mut users_by_archetype: Vec<ArchetypeCount> = self
            .users
            .archetype_counts()
            .await?
            .into_iter()
            .map(|(archetype, count)| ArchetypeCount { archetype, count })
            .collect();
        users_by_archetype.sort_by(|left, right| right.count.cmp(&left.count));

        let recent_users = self.users.list(&everyone, 0, RECENT_USERS_LIMIT).await?;

        Ok(AdminStats {
            total_users,
            users_last_7_days,
            users_last_30_days,
            total_analyses,
            analyses_last_7_days,
            avg_analyses_per_user: average_per_user(total_analyses, total_users),
            users_by_plan,
            users_by_archetype,
            recent_users,
        })
    }
}

/// Mean rounded to one decimal; zero when there are no users.
fn average_per_user(analyses: u64, users: u64) -> f64 {
    if users == 0 {
        return 0.0;
    }
    let mean = analyses as f64 / users as f64;
    (mean * 10.0).round() / 10.0
}

#[derive(Debug, thiserror::Error)]
pub enum AdminError {
    #[error("admin role required")]
    Forbidden,
    #[error("user not found")]
    UserNotFound,
    #[error("admins cannot delete their own account")]
    SelfDeletion,
    #[error("no updatable fields supplied; expected credits, plan, or role")]
    EmptyUpdate,
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}
