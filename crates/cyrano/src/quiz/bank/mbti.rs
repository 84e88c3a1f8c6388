use crate::quiz::domain::MbtiLetter::{E, F, I, J, N, P, S, T};
use crate::quiz::domain::{AnswerOption, MbtiLetter, Question, QuestionId};

/// Two questions per axis.
pub(super) static QUICK_IDS: [QuestionId; 8] = [
    QuestionId(1),
    QuestionId(3),
    QuestionId(5),
    QuestionId(7),
    QuestionId(9),
    QuestionId(11),
    QuestionId(13),
    QuestionId(15),
];

pub(super) static QUESTIONS: [Question<MbtiLetter>; 16] = [
    // energy
    Question {
        id: QuestionId(1),
        text: "Después de una primera cita que salió bien, vos:",
        option_a: AnswerOption {
            text: "Le contás a tus amigos inmediatamente y querés salir de nuevo pronto",
            weights: &[(E, 1)],
        },
        option_b: AnswerOption {
            text: "Necesitás tiempo a solas para procesar cómo te sentís antes de hablar",
            weights: &[(I, 1)],
        },
    },
    Question {
        id: QuestionId(2),
        text: "En una fiesta donde podrías conocer gente nueva:",
        option_a: AnswerOption {
            text: "Te energiza hablar con muchas personas diferentes",
            weights: &[(E, 1)],
        },
        option_b: AnswerOption {
            text: "Preferís una conversación profunda con una o dos personas",
            weights: &[(I, 1)],
        },
    },
    Question {
        id: QuestionId(3),
        text: "Cuando te gusta alguien:",
        option_a: AnswerOption {
            text: "Se lo hacés saber bastante rápido, sos directo/a",
            weights: &[(E, 1)],
        },
        option_b: AnswerOption {
            text: "Observás y esperás señales antes de mostrar interés",
            weights: &[(I, 1)],
        },
    },
    Question {
        id: QuestionId(4),
        text: "Tu forma ideal de conocer a alguien nuevo es:",
        option_a: AnswerOption {
            text: "En un evento social, bar, o a través de amigos en común",
            weights: &[(E, 1)],
        },
        option_b: AnswerOption {
            text: "Por una app donde podés chatear primero y conocerlo/a gradualmente",
            weights: &[(I, 1)],
        },
    },
    // information
    Question {
        id: QuestionId(5),
        text: "Cuando conocés a alguien, te fijás más en:",
        option_a: AnswerOption {
            text: "Detalles concretos: cómo viste, qué hace, dónde vive",
            weights: &[(S, 1)],
        },
        option_b: AnswerOption {
            text: "La vibra general: si hay química, si es interesante, el potencial",
            weights: &[(N, 1)],
        },
    },
    Question {
        id: QuestionId(6),
        text: "En una conversación de dating, preferís hablar de:",
        option_a: AnswerOption {
            text: "Experiencias reales: viajes, trabajo, hobbies, anécdotas",
            weights: &[(S, 1)],
        },
        option_b: AnswerOption {
            text: "Ideas y posibilidades: sueños, teorías, 'qué pasaría si...'",
            weights: &[(N, 1)],
        },
    },
    Question {
        id: QuestionId(7),
        text: "Al planear una cita, vos:",
        option_a: AnswerOption {
            text: "Buscás un lugar probado que sabés que funciona",
            weights: &[(S, 1)],
        },
        option_b: AnswerOption {
            text: "Te gusta improvisar o probar algo nuevo y diferente",
            weights: &[(N, 1)],
        },
    },
    Question {
        id: QuestionId(8),
        text: "Cuando alguien te cuenta algo, tendés a:",
        option_a: AnswerOption {
            text: "Escuchar los hechos y detalles específicos",
            weights: &[(S, 1)],
        },
        option_b: AnswerOption {
            text: "Leer entre líneas y buscar el significado más profundo",
            weights: &[(N, 1)],
        },
    },
    // decisions
    Question {
        id: QuestionId(9),
        text: "Si una cita no funcionó, pensás:",
        option_a: AnswerOption {
            text: "Analizás objetivamente qué salió mal para no repetirlo",
            weights: &[(T, 1)],
        },
        option_b: AnswerOption {
            text: "Te enfocás en cómo te hizo sentir y si hubo conexión real",
            weights: &[(F, 1)],
        },
    },
    Question {
        id: QuestionId(10),
        text: "Al elegir con quién salir, priorizás:",
        option_a: AnswerOption {
            text: "Compatibilidad práctica: valores, metas, estilo de vida",
            weights: &[(T, 1)],
        },
        option_b: AnswerOption {
            text: "La conexión emocional y cómo te hace sentir",
            weights: &[(F, 1)],
        },
    },
    Question {
        id: QuestionId(11),
        text: "Cuando tu pareja tiene un problema, vos:",
        option_a: AnswerOption {
            text: "Ofrecés soluciones y formas de arreglarlo",
            weights: &[(T, 1)],
        },
        option_b: AnswerOption {
            text: "Escuchás y validás sus sentimientos primero",
            weights: &[(F, 1)],
        },
    },
    Question {
        id: QuestionId(12),
        text: "En una discusión de pareja, es más importante:",
        option_a: AnswerOption {
            text: "Tener razón y resolver el problema lógicamente",
            weights: &[(T, 1)],
        },
        option_b: AnswerOption {
            text: "Mantener la armonía y que ambos se sientan bien",
            weights: &[(F, 1)],
        },
    },
    // lifestyle
    Question {
        id: QuestionId(13),
        text: "Con respecto a las citas, vos:",
        option_a: AnswerOption {
            text: "Preferís planear con anticipación: día, hora, lugar definidos",
            weights: &[(J, 1)],
        },
        option_b: AnswerOption {
            text: "Te gusta dejar las cosas abiertas y ver qué surge",
            weights: &[(P, 1)],
        },
    },
    Question {
        id: QuestionId(14),
        text: "Cuando estás conociendo a alguien:",
        option_a: AnswerOption {
            text: "Querés saber pronto hacia dónde va la relación",
            weights: &[(J, 1)],
        },
        option_b: AnswerOption {
            text: "Preferís dejar que las cosas fluyan naturalmente",
            weights: &[(P, 1)],
        },
    },
    Question {
        id: QuestionId(15),
        text: "Los mensajes sin respuesta te generan:",
        option_a: AnswerOption {
            text: "Ansiedad, preferís respuestas claras y rápidas",
            weights: &[(J, 1)],
        },
        option_b: AnswerOption {
            text: "No te estresás mucho, cada uno tiene sus tiempos",
            weights: &[(P, 1)],
        },
    },
    Question {
        id: QuestionId(16),
        text: "Tu estilo de textear es:",
        option_a: AnswerOption {
            text: "Respondés rápido y esperás lo mismo",
            weights: &[(J, 1)],
        },
        option_b: AnswerOption {
            text: "A veces tardás, te distraés con otras cosas",
            weights: &[(P, 1)],
        },
    },
];
