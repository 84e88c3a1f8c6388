//! Reference content for the six dating archetypes and the sixteen MBTI codes.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ArchetypeId {
    Interrogator,
    Pleaser,
    Logician,
    Clown,
    Anxious,
    Ghost,
}

impl ArchetypeId {
    /// Declaration order; ranking ties resolve in this order.
    pub const ALL: [ArchetypeId; 6] = [
        ArchetypeId::Interrogator,
        ArchetypeId::Pleaser,
        ArchetypeId::Logician,
        ArchetypeId::Clown,
        ArchetypeId::Anxious,
        ArchetypeId::Ghost,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ArchetypeId::Interrogator => "INTERROGATOR",
            ArchetypeId::Pleaser => "PLEASER",
            ArchetypeId::Logician => "LOGICIAN",
            ArchetypeId::Clown => "CLOWN",
            ArchetypeId::Anxious => "ANXIOUS",
            ArchetypeId::Ghost => "GHOST",
        }
    }

    pub fn profile(self) -> &'static ArchetypeProfile {
        let index = match self {
            ArchetypeId::Interrogator => 0,
            ArchetypeId::Pleaser => 1,
            ArchetypeId::Logician => 2,
            ArchetypeId::Clown => 3,
            ArchetypeId::Anxious => 4,
            ArchetypeId::Ghost => 5,
        };
        &PROFILES[index]
    }
}

impl fmt::Display for ArchetypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown archetype '{0}'")]
pub struct UnknownArchetype(pub String);

impl FromStr for ArchetypeId {
    type Err = UnknownArchetype;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_ascii_uppercase();
        ArchetypeId::ALL
            .into_iter()
            .find(|id| id.as_str() == normalized)
            .ok_or_else(|| UnknownArchetype(value.trim().to_string()))
    }
}

/// Coaching content shown on the result page for an archetype.
#[derive(Debug, Serialize)]
pub struct ArchetypeProfile {
    pub id: ArchetypeId,
    pub name: &'static str,
    pub emoji: &'static str,
    pub tagline: &'static str,
    pub color: &'static str,
    pub description: &'static str,
    pub weakness: &'static str,
    pub blind_spot: &'static str,
    pub root_cause: &'static str,
    pub patterns: Patterns,
    pub advice: &'static str,
    pub exercises: &'static [&'static str],
    pub mantras: &'static [&'static str],
    pub mbti_connection: MbtiConnection,
    pub disc_connection: DiscConnection,
}

#[derive(Debug, Serialize)]
pub struct Patterns {
    pub in_chat: &'static [&'static str],
    pub in_dates: &'static [&'static str],
    pub red_flags: &'static [&'static str],
}

#[derive(Debug, Serialize)]
pub struct MbtiConnection {
    pub types: &'static [&'static str],
    pub dominant_function: &'static str,
}

#[derive(Debug, Serialize)]
pub struct DiscConnection {
    pub primary: &'static str,
    pub secondary: &'static str,
    pub profile: &'static str,
}

pub fn all_profiles() -> &'static [ArchetypeProfile] {
    &PROFILES
}

static PROFILES: [ArchetypeProfile; 6] = [
    ArchetypeProfile {
        id: ArchetypeId::Interrogator,
        name: "El Interrogador",
        emoji: "🔍",
        tagline: "El que convierte citas en entrevistas de trabajo",
        color: "#ef4444",
        description: "Hacés preguntas en ráfaga, querés tener todo bajo control. Tratás el dating como un proceso de selección donde vos sos el reclutador.",
        weakness: "Generás presión en vez de conexión. La otra persona siente que está rindiendo un examen, no teniendo una cita.",
        blind_spot: "Creés que estás siendo eficiente y directo, pero la otra persona te percibe como intenso, controlador, o simplemente agotador.",
        root_cause: "Miedo a perder el tiempo o a ser lastimado. Si podés evaluar rápido, podés descartar rápido.",
        patterns: Patterns {
            in_chat: &[
                "Preguntas cerradas en ráfaga (¿De dónde sos? ¿A qué te dedicás? ¿Tenés hermanos?)",
                "Poca reciprocidad: preguntás más de lo que compartís",
                "Saltar a logística muy rápido (¿Cuándo nos vemos? ¿Qué día te queda bien?)",
            ],
            in_dates: &[
                "Llevar una lista mental de temas a cubrir",
                "Incomodidad con los silencios: los llenás con más preguntas",
                "Planear todo: lugar, hora, duración, siguiente paso",
            ],
            red_flags: &[
                "La otra persona da respuestas cada vez más cortas",
                "Te dicen \"me siento en una entrevista\"",
                "La conversación se siente como ping-pong, no como baile",
            ],
        },
        advice: "Aflojá el control. No necesitás saber todo antes de decidir si te gusta alguien. Dejá que la conversación fluya y tolerá la incertidumbre.",
        exercises: &[
            "En tu próximo chat, por cada pregunta que hagas, compartí algo de vos primero",
            "Practicá hacer preguntas abiertas que no se respondan con un dato",
            "Dejá que haya silencios. No los llenes con preguntas",
        ],
        mantras: &[
            "No estoy evaluando, estoy conociendo",
            "La incertidumbre es parte del romance",
            "Menos preguntas, más presencia",
        ],
        mbti_connection: MbtiConnection {
            types: &["ESTJ", "ENTJ", "ISTJ", "INTJ"],
            dominant_function: "Te (Pensamiento Extravertido) o Te auxiliar",
        },
        disc_connection: DiscConnection {
            primary: "D",
            secondary: "C",
            profile: "Alto D, Alto C",
        },
    },
    ArchetypeProfile {
        id: ArchetypeId::Pleaser,
        name: "El Complaciente",
        emoji: "🙇",
        tagline: "El que dice que sí a todo y no desafía nunca",
        color: "#3b82f6",
        description: "Estás tan enfocado en caer bien que perdés tu personalidad. Validás todo, nunca desafiás, sos demasiado disponible.",
        weakness: "Sin fricción no hay atracción. Te ven como \"buena persona\" pero no como potencial pareja.",
        blind_spot: "Creés que ser complaciente es ser buena pareja, pero estás evitando el rechazo a costa de tu autenticidad.",
        root_cause: "Creencia de que tu valor depende de que otros te aprueben.",
        patterns: Patterns {
            in_chat: &[
                "Responder siempre al toque (aunque estés ocupado)",
                "Estar de acuerdo con todas las opiniones de la otra persona",
                "Preguntar \"¿vos qué preferís?\" antes de dar tu opinión",
            ],
            in_dates: &[
                "Dejar que la otra persona elija todo: lugar, comida, actividad",
                "No mencionar cosas que te molestan o incomodan",
                "Evitar hablar de vos para no \"aburrir\" a la otra persona",
            ],
            red_flags: &[
                "La otra persona empieza a tomarte por sentado",
                "Te cancelan planes y no pasa nada",
                "Sentís que das más de lo que recibís",
            ],
        },
        advice: "Tener opiniones propias es atractivo. Está bien no estar de acuerdo. No respondas al instante. Tu valor no depende de que todos te aprueben.",
        exercises: &[
            "Esperá al menos 30 minutos antes de responder un mensaje",
            "Expresá una opinión contraria a la de la otra persona, aunque sea sobre algo menor",
            "Decí que no a un plan y proponé una alternativa que vos prefieras",
        ],
        mantras: &[
            "Mi opinión importa tanto como la suya",
            "Si no les gusta quién soy, no son para mí",
            "La mejor manera de caer bien es ser auténtico, no complaciente",
        ],
        mbti_connection: MbtiConnection {
            types: &["ISFJ", "ESFJ", "INFP", "ENFP"],
            dominant_function: "Fe (Sentimiento Extravertido) o Fi con baja asertividad",
        },
        disc_connection: DiscConnection {
            primary: "S",
            secondary: "I",
            profile: "Alto S, Alto I, Bajo D",
        },
    },
    ArchetypeProfile {
        id: ArchetypeId::Logician,
        name: "El Lógico",
        emoji: "🧠",
        tagline: "El que explica todo y no siente nada",
        color: "#8b5cf6",
        description: "Convertís cada conversación en un debate o una clase. Analizás en vez de sentir. Explicás chistes en vez de reírte.",
        weakness: "El dating es emocional, no racional. Nadie quiere un profesor, quieren una conexión.",
        blind_spot: "Creés que ser inteligente es atractivo. Y lo es, pero solo si viene acompañado de calidez emocional.",
        root_cause: "Miedo a la vulnerabilidad emocional. El intelecto es tu zona segura porque ahí no te pueden lastimar.",
        patterns: Patterns {
            in_chat: &[
                "Mensajes largos que parecen ensayos",
                "Explicar chistes o referencias en vez de simplemente disfrutarlos",
                "Responder a una anécdota emocional con un análisis de por qué pasó",
            ],
            in_dates: &[
                "Dar una clase sobre un tema que la otra persona mencionó casualmente",
                "Analizar la dinámica de la cita EN la cita",
                "Necesidad de tener razón incluso en discusiones triviales",
            ],
            red_flags: &[
                "La otra persona dice \"no todo tiene que ser tan profundo\"",
                "Te evitan para temas emocionales",
                "La conversación se siente como un podcast, no como una cita",
            ],
        },
        advice: "Menos cabeza, más corazón. Cuando alguien te cuenta algo, conectá con cómo se sintió antes de analizar qué pasó.",
        exercises: &[
            "Cuando alguien te cuente algo, tu primera respuesta tiene que ser sobre cómo se sintió",
            "Limitá tus mensajes a 3 oraciones máximo",
            "En tu próxima cita, no expliques nada a menos que te lo pidan",
        ],
        mantras: &[
            "No necesito tener razón para conectar",
            "Escuchar es más que esperar mi turno para hablar",
            "Las emociones no son problemas a resolver",
        ],
        mbti_connection: MbtiConnection {
            types: &["INTP", "ENTP", "INTJ", "ISTP"],
            dominant_function: "Ti (Pensamiento Introvertido) o Ni con Ti auxiliar",
        },
        disc_connection: DiscConnection {
            primary: "C",
            secondary: "D",
            profile: "Alto C, variable D, Bajo I, Bajo S",
        },
    },
    ArchetypeProfile {
        id: ArchetypeId::Clown,
        name: "El Payaso",
        emoji: "🎭",
        tagline: "El que hace reír pero nunca conecta",
        color: "#f59e0b",
        description: "Usás el humor como escudo. Todo es un chiste, nunca mostrás vulnerabilidad. Entretenés pero no conectás.",
        weakness: "Te ven como divertido pero no como pareja seria. Sos el amigo gracioso, no el candidato romántico.",
        blind_spot: "Creés que si dejás de ser gracioso van a perder interés, pero sin mostrar quién sos no hay nada a qué aferrarse.",
        root_cause: "El humor es tu armadura contra el rechazo. El costo es que el verdadero vos nunca es visto.",
        patterns: Patterns {
            in_chat: &[
                "Responder con memes, GIFs, o chistes a todo",
                "Cambiar de tema con humor cuando algo se pone serio",
                "Deflectar cumplidos con humor",
            ],
            in_dates: &[
                "Ser \"el divertido\" pero no memorable por nada más",
                "Usar historias graciosas para evitar preguntas personales",
                "Transformar momentos románticos potenciales en momentos cómicos",
            ],
            red_flags: &[
                "La otra persona dice \"sos muy gracioso pero no sé nada de vos\"",
                "Te buscan para pasarla bien pero no para momentos difíciles",
                "Relaciones que empiezan divertidas pero se estancan rápido",
            ],
        },
        advice: "El humor es genial, pero la vulnerabilidad crea conexión. Mostrá quién sos de verdad, aunque dé miedo.",
        exercises: &[
            "Contá algo que te importe de verdad, sin hacer un chiste al respecto",
            "Practicá aceptar cumplidos con un simple \"gracias\"",
            "Cuando te pregunten cómo estás, respondé honestamente",
        ],
        mantras: &[
            "Puedo ser interesante sin ser gracioso",
            "Mi vulnerabilidad es atractiva",
            "El humor es herramienta, no escudo",
        ],
        mbti_connection: MbtiConnection {
            types: &["ENTP", "ENFP", "ESTP", "ESFP"],
            dominant_function: "Ne o Se con Fe/Te en posición media",
        },
        disc_connection: DiscConnection {
            primary: "I",
            secondary: "D",
            profile: "Alto I, Bajo C, variable D/S",
        },
    },
    ArchetypeProfile {
        id: ArchetypeId::Anxious,
        name: "El Ansioso",
        emoji: "😰",
        tagline: "El que necesita respuesta YA",
        color: "#ec4899",
        description: "Cada minuto sin respuesta es una tortura. Mandás doble texto, interpretás silencios como rechazo, necesitás validación constante.",
        weakness: "Tu ansiedad se transmite y genera presión. La otra persona siente que tiene que \"cuidarte\" emocionalmente.",
        blind_spot: "Creés que si preguntás suficiente vas a obtener seguridad, pero las preguntas constantes demuestran inseguridad y alejan.",
        root_cause: "Estilo de apego ansioso: un modelo mental donde el amor es inestable y hay que vigilarlo constantemente.",
        patterns: Patterns {
            in_chat: &[
                "Doble o triple mensaje cuando no responden rápido",
                "Preguntar \"¿todo bien?\" o \"¿pasó algo?\" sin motivo",
                "Checkear constantemente si están online",
            ],
            in_dates: &[
                "Necesitar confirmación verbal de que la cita va bien",
                "Preguntar sobre el estado de la relación demasiado pronto",
                "Dificultad para disfrutar el momento porque estás anticipando el siguiente",
            ],
            red_flags: &[
                "La otra persona tarda cada vez más en responder",
                "Te dicen que sos \"mucho\" o \"intenso\"",
                "Relaciones que empiezan intensas y mueren rápido",
            ],
        },
        advice: "El silencio no es rechazo. Tené tu propia vida que te distraiga de la espera. La seguridad se construye con tiempo, no se exige con preguntas.",
        exercises: &[
            "Silenciá las notificaciones por períodos de 2 horas",
            "Escribí tus miedos en un papel en vez de mandarlos por mensaje",
            "Antes de interpretar un silencio, listá 5 razones normales por las que alguien podría tardar",
        ],
        mantras: &[
            "El silencio no significa rechazo",
            "Mi valor no depende de una respuesta",
            "Puedo tolerar la incertidumbre",
        ],
        mbti_connection: MbtiConnection {
            types: &["INFJ", "INFP", "ENFJ", "ISFJ"],
            dominant_function: "Fe o Fi dominante/auxiliar con loop ansioso",
        },
        disc_connection: DiscConnection {
            primary: "S",
            secondary: "C",
            profile: "Alto S, Alto C, Bajo D",
        },
    },
    ArchetypeProfile {
        id: ArchetypeId::Ghost,
        name: "El Fantasma",
        emoji: "👻",
        tagline: "El que está pero no está",
        color: "#6b7280",
        description: "Respondés poco, tardás horas o días, parecés desinteresado. El resultado es que la otra persona no sabe si le gustás.",
        weakness: "La otra persona no sabe si te interesa. Se cansa de adivinar y eventualmente se va.",
        blind_spot: "Creés que si le gustás se va a quedar aunque no demuestres nada. Tu silencio no es misterioso, es frustrante.",
        root_cause: "Introversión extrema, miedo a mostrar interés, o evitación: si no invertís, no te puede doler.",
        patterns: Patterns {
            in_chat: &[
                "Respuestas de una palabra: \"sí\", \"no\", \"jaja\"",
                "Tardar horas o días en responder",
                "Nunca iniciar conversaciones",
            ],
            in_dates: &[
                "Esperar que la otra persona proponga siempre",
                "Dar pocas señales de interés",
                "No mencionar planes futuros ni próxima cita",
            ],
            red_flags: &[
                "La otra persona te pregunta directamente si te interesa",
                "Se quejan de que \"sos difícil de leer\"",
                "Dejan de escribirte y no te das cuenta por días",
            ],
        },
        advice: "Si te interesa, demostralo. Iniciá conversaciones, proponé planes, respondé en un tiempo razonable.",
        exercises: &[
            "Respondé cada mensaje dentro de las próximas 4 horas",
            "Iniciá vos la conversación al menos la mitad de las veces",
            "Proponé vos el próximo plan en vez de esperar",
        ],
        mantras: &[
            "Mostrar interés no es debilidad",
            "Si me gusta, tengo que demostrarlo",
            "Tomar iniciativa es atractivo",
        ],
        mbti_connection: MbtiConnection {
            types: &["ISTP", "INTP", "INTJ", "ISTJ"],
            dominant_function: "Ti o Ni dominante con Fe/Se inferior",
        },
        disc_connection: DiscConnection {
            primary: "C",
            secondary: "S",
            profile: "Bajo I, Bajo D, variable C/S",
        },
    },
];

/// Dating-oriented nickname and weakness for a four-letter MBTI code.
#[derive(Debug, PartialEq, Eq, Serialize)]
pub struct MbtiDescription {
    pub code: &'static str,
    pub name: &'static str,
    pub weakness: &'static str,
}

pub fn mbti_description(code: &str) -> Option<&'static MbtiDescription> {
    MBTI_DESCRIPTIONS
        .iter()
        .find(|description| description.code.eq_ignore_ascii_case(code))
}

static MBTI_DESCRIPTIONS: [MbtiDescription; 16] = [
    MbtiDescription { code: "INTJ", name: "El Estratega", weakness: "Planificás demasiado, no fluís" },
    MbtiDescription { code: "INTP", name: "El Arquitecto", weakness: "Sobre-analizás todo, explicás de más" },
    MbtiDescription { code: "ENTJ", name: "El Comandante", weakness: "Convertís el chat en negociación" },
    MbtiDescription { code: "ENTP", name: "El Debatidor", weakness: "Discutís todo, no mostrás vulnerabilidad" },
    MbtiDescription { code: "INFJ", name: "El Consejero", weakness: "Psicoanálisis no solicitado, muy intenso" },
    MbtiDescription { code: "INFP", name: "El Mediador", weakness: "Ponés en pedestal, textos muy largos" },
    MbtiDescription { code: "ENFJ", name: "El Protagonista", weakness: "Querés \"arreglar\" al otro" },
    MbtiDescription { code: "ENFP", name: "El Activista", weakness: "Caótico, love bombing y ghosting" },
    MbtiDescription { code: "ISTJ", name: "El Logístico", weakness: "Solo hechos y horarios, cero coqueteo" },
    MbtiDescription { code: "ISFJ", name: "El Defensor", weakness: "Servilismo extremo, pedís perdón por todo" },
    MbtiDescription { code: "ESTJ", name: "El Ejecutivo", weakness: "Micro-management, exigís planes" },
    MbtiDescription { code: "ESFJ", name: "El Cónsul", weakness: "Necesitás validación constante" },
    MbtiDescription { code: "ISTP", name: "El Virtuoso", weakness: "Monosílabos, parecés que odiás al match" },
    MbtiDescription { code: "ISFP", name: "El Aventurero", weakness: "Pasivo-agresivo, te cerrás" },
    MbtiDescription { code: "ESTP", name: "El Emprendedor", weakness: "Muy sexual muy rápido" },
    MbtiDescription { code: "ESFP", name: "El Animador", weakness: "Attention seeking, conversación vacía" },
];
