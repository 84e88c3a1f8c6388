use std::sync::Arc;

use crate::accounts::Plan;
use crate::analysis::AnalysisService;
use crate::quiz::ArchetypeId;
use crate::test_support::{user, MemoryStore, ScriptedProvider};

pub(super) use crate::test_support::{caller_headers, read_json_body, UnavailableStore};

pub(super) type MemoryAnalysis = AnalysisService<MemoryStore, MemoryStore, ScriptedProvider>;

pub(super) const CONVERSATION: &str = "Yo: Hola! Cómo estás?\nElla: Bien, y vos?\nYo: Bien. Qué hacés?";

pub(super) const DIAGNOSIS_REPLY: &str = r#"```json
{
  "perfil": { "mbti": "INTP", "nombre": "El Arquitecto", "disc": "C" },
  "arquetipo": { "codigo": "LOGICIAN", "nombre": "El Lógico", "modalidad": "Exceso de análisis" },
  "fallo": {
    "explicacion": "Preguntas de formulario sin energía",
    "momento_critico": "Qué hacés?",
    "porque": "No aporta nada propio"
  },
  "correcciones": {
    "calibrada": "Bien, recién salgo de escalar. Vos sos más de planes tranquis?",
    "edge": "Bien, aunque sospecho que vos estás mejor",
    "suave": "Bien! Contame algo que te haya sacado una sonrisa hoy"
  },
  "patron_vigilar": "Entrevistas en lugar de charlas"
}
```"#;

pub(super) const HEALTHY_REPLY: &str =
    r#"{"estado":"ok","mensaje":"Dale, vas bien","sugerencia_menor":"Proponé verse pronto"}"#;

/// Ana is on the free plan with the given balance and a stored archetype;
/// Bruno is on the paid plan with no credits at all.
pub(super) fn store(free_credits: i32) -> MemoryStore {
    let mut ana = user("ana", Plan::Free, free_credits);
    ana.archetype = Some(ArchetypeId::Logician);
    let bruno = user("bruno", Plan::Pro, 0);
    MemoryStore::with_users([ana, bruno])
}

pub(super) fn build_service(
    store: &MemoryStore,
    provider: ScriptedProvider,
) -> (Arc<MemoryAnalysis>, Arc<ScriptedProvider>) {
    let provider = Arc::new(provider);
    let service = Arc::new(AnalysisService::new(
        Arc::new(store.clone()),
        Arc::new(store.clone()),
        provider.clone(),
    ));
    (service, provider)
}
