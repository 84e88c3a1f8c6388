use std::sync::Arc;

use chrono::{Duration, Utc};

use crate::accounts::{AccountService, AnalysisId, AnalysisRecord, Plan, User, UserId};
use crate::config::AccountsConfig;
use crate::quiz::ArchetypeId;
use crate::test_support::MemoryStore;

pub(super) use crate::test_support::{admin, caller_headers, read_json_body, user, UnavailableStore};

pub(super) type MemoryAccounts = AccountService<MemoryStore, MemoryStore>;

pub(super) fn config() -> AccountsConfig {
    AccountsConfig {
        free_credits: 3,
        admin_ids: vec!["root".to_string()],
    }
}

pub(super) fn build_service(store: &MemoryStore) -> Arc<MemoryAccounts> {
    Arc::new(AccountService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        config(),
    ))
}

pub(super) fn aged_user(id: &str, days_old: i64, archetype: Option<ArchetypeId>) -> User {
    let mut user = user(id, Plan::Free, 3);
    user.created_at = Utc::now() - Duration::days(days_old);
    user.archetype = archetype;
    user
}

pub(super) fn record(id: &str, owner: &str, days_old: i64) -> AnalysisRecord {
    AnalysisRecord {
        id: AnalysisId(id.to_string()),
        user_id: UserId(owner.to_string()),
        input_text: "Yo: hola\nElla: hola".to_string(),
        mbti_profile: Some("INTJ".to_string()),
        disc_vector: Some("C".to_string()),
        archetype: Some("LOGICIAN".to_string()),
        diagnosis: Some("Respuesta demasiado técnica".to_string()),
        corrections: None,
        created_at: Utc::now() - Duration::days(days_old),
    }
}

/// An admin, three members of various ages, and a few analyses.
pub(super) fn seeded_store() -> MemoryStore {
    let mut boss = admin("boss");
    boss.created_at = Utc::now() - Duration::days(90);
    let mut pro = aged_user("bruno", 20, Some(ArchetypeId::Ghost));
    pro.plan = Plan::Pro;
    pro.email = Some("bruno@pm.me".to_string());

    let store = MemoryStore::with_users([
        boss,
        aged_user("ana", 1, Some(ArchetypeId::Ghost)),
        pro,
        aged_user("carla", 45, Some(ArchetypeId::Clown)),
    ]);
    store.analyses.lock().expect("lock").extend([
        record("a-1", "ana", 0),
        record("a-2", "ana", 2),
        record("a-3", "bruno", 10),
    ]);
    store
}
