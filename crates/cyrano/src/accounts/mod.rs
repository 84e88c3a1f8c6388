//! User accounts, credits, and the admin console.

pub mod domain;
pub mod repository;
pub mod router;
pub mod service;

#[cfg(test)]
mod tests;

pub use domain::{
    AdminStats, AnalysisId, AnalysisRecord, ArchetypeCount, CreditCharge, Pagination, Plan,
    PlanCount, Role, User, UserDetail, UserFilter, UserId, UserPage, UserProfile, UserQuery,
    UserSummary, UserUpdate,
};
pub use repository::{AnalysisRepository, RepositoryError, UserRepository};
pub use router::accounts_router;
pub use service::{AccountService, AdminError, RECENT_ANALYSES_LIMIT, RECENT_USERS_LIMIT};
