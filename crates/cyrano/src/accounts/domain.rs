use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::quiz::{ArchetypeId, BehaviorDimension, ScoreVector};

/// Outcome of charging one analysis credit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CreditCharge {
    /// Metered account debited; carries the new balance.
    Charged(i32),
    /// Plan is not metered, nothing was debited.
    Unmetered,
    /// Metered account with no credit left, nothing was debited.
    Exhausted,
}

/// Identifier issued by the upstream identity provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub String);

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Plan {
    #[default]
    Free,
    Pro,
}

impl Plan {
    /// Paid plans are not metered.
    pub fn is_metered(self) -> bool {
        matches!(self, Plan::Free)
    }

    pub fn label(self) -> &'static str {
        match self {
            Plan::Free => "FREE",
            Plan::Pro => "PRO",
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Role {
    #[default]
    User,
    Admin,
}

/// Identity claims forwarded with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserProfile {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct User {
    pub id: UserId,
    pub name: Option<String>,
    pub email: Option<String>,
    pub image: Option<String>,
    pub credits: i32,
    pub plan: Plan,
    pub role: Role,
    pub archetype: Option<ArchetypeId>,
    pub archetype_scores: Option<ScoreVector<BehaviorDimension>>,
    pub quiz_completed_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(profile: UserProfile, credits: i32, role: Role, created_at: DateTime<Utc>) -> Self {
        Self {
            id: profile.id,
            name: profile.name,
            email: profile.email,
            image: profile.image,
            credits,
            plan: Plan::Free,
            role,
            archetype: None,
            archetype_scores: None,
            quiz_completed_at: None,
            created_at,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }

    /// Whether the user may run another metered analysis.
    pub fn has_credit(&self) -> bool {
        !self.plan.is_metered() || self.credits > 0
    }

    /// Debit one credit if the plan is metered and the balance allows it.
    pub fn charge_credit(&mut self) -> CreditCharge {
        if !self.plan.is_metered() {
            return CreditCharge::Unmetered;
        }
        if self.credits <= 0 {
            return CreditCharge::Exhausted;
        }
        self.credits -= 1;
        CreditCharge::Charged(self.credits)
    }

    /// Case-insensitive substring match on email or name.
    pub fn matches_search(&self, needle: &str) -> bool {
        let needle = needle.to_lowercase();
        [self.email.as_deref(), self.name.as_deref()]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(&needle))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AnalysisId(pub String);

/// A stored conversation diagnosis.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalysisRecord {
    pub id: AnalysisId,
    pub user_id: UserId,
    pub input_text: String,
    pub mbti_profile: Option<String>,
    pub disc_vector: Option<String>,
    pub archetype: Option<String>,
    pub diagnosis: Option<String>,
    pub corrections: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Admin patch. Only these fields are writable; anything else in the payload is ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserUpdate {
    #[serde(default)]
    pub credits: Option<i32>,
    #[serde(default)]
    pub plan: Option<Plan>,
    #[serde(default)]
    pub role: Option<Role>,
}

impl UserUpdate {
    pub fn is_empty(&self) -> bool {
        self.credits.is_none() && self.plan.is_none() && self.role.is_none()
    }

    pub fn apply(&self, user: &mut User) {
        if let Some(credits) = self.credits {
            user.credits = credits;
        }
        if let Some(plan) = self.plan {
            user.plan = plan;
        }
        if let Some(role) = self.role {
            user.role = role;
        }
    }
}

/// Filter shared by the listing and count queries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFilter {
    pub search: Option<String>,
}

impl UserFilter {
    pub fn matches(&self, user: &User) -> bool {
        match self.search.as_deref() {
            Some(needle) if !needle.is_empty() => user.matches_search(needle),
            _ => true,
        }
    }
}

pub const DEFAULT_PAGE_SIZE: u32 = 20;
pub const MAX_PAGE_SIZE: u32 = 100;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct UserQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
    pub search: Option<String>,
}

impl UserQuery {
    pub fn page(&self) -> u32 {
        self.page.unwrap_or(1).max(1)
    }

    pub fn limit(&self) -> u32 {
        self.limit
            .unwrap_or(DEFAULT_PAGE_SIZE)
            .clamp(1, MAX_PAGE_SIZE)
    }

    pub fn offset(&self) -> usize {
        ((self.page() - 1) as usize) * self.limit() as usize
    }

    pub fn filter(&self) -> UserFilter {
        UserFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|needle| !needle.is_empty())
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub pages: u64,
}

impl Pagination {
    pub fn new(page: u32, limit: u32, total: u64) -> Self {
        Self {
            page,
            limit,
            total,
            pages: total.div_ceil(u64::from(limit.max(1))),
        }
    }
}

/// Listing row: the user plus how many analyses they have run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserSummary {
    #[serde(flatten)]
    pub user: User,
    pub analyses_count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserPage {
    pub users: Vec<UserSummary>,
    pub pagination: Pagination,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct UserDetail {
    #[serde(flatten)]
    pub user: User,
    pub analyses: Vec<AnalysisRecord>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlanCount {
    pub plan: Plan,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArchetypeCount {
    pub archetype: ArchetypeId,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdminStats {
    pub total_users: u64,
    pub users_last_7_days: u64,
    pub users_last_30_days: u64,
    pub total_analyses: u64,
    pub analyses_last_7_days: u64,
    pub avg_analyses_per_user: f64,
    pub users_by_plan: Vec<PlanCount>,
    pub users_by_archetype: Vec<ArchetypeCount>,
    pub recent_users: Vec<User>,
}
