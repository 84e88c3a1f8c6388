use crate::quiz::domain::BehaviorDimension::{
    Control, Emotion, Initiative, Patience, Validation, Vulnerability,
};
use crate::quiz::domain::{AnswerOption, BehaviorDimension, Question, QuestionId};

pub(super) static QUICK_IDS: [QuestionId; 10] = [
    QuestionId(1),
    QuestionId(4),
    QuestionId(7),
    QuestionId(10),
    QuestionId(13),
    QuestionId(16),
    QuestionId(17),
    QuestionId(18),
    QuestionId(19),
    QuestionId(20),
];

pub(super) static QUESTIONS: [Question<BehaviorDimension>; 20] = [
    // control
    Question {
        id: QuestionId(1),
        text: "Vas a tener una primera cita. ¿Cómo la encarás?",
        option_a: AnswerOption {
            text: "Planeo todo: lugar, hora, temas de conversación de backup",
            weights: &[(Control, 2)],
        },
        option_b: AnswerOption {
            text: "Elijo un lugar copado y dejo que fluya",
            weights: &[(Control, -1)],
        },
    },
    Question {
        id: QuestionId(2),
        text: "En el chat, la conversación se desvía del tema. Vos:",
        option_a: AnswerOption {
            text: "La vuelvo a encarrilar, me gusta ir al punto",
            weights: &[(Control, 2)],
        },
        option_b: AnswerOption {
            text: "Sigo el nuevo tema, a veces lo random es más divertido",
            weights: &[(Control, -1)],
        },
    },
    Question {
        id: QuestionId(3),
        text: "Querés saber algo sobre la otra persona. ¿Cómo lo hacés?",
        option_a: AnswerOption {
            text: "Pregunto directo, no me gusta dar vueltas",
            weights: &[(Control, 2), (Vulnerability, -1)],
        },
        option_b: AnswerOption {
            text: "Tiro un comentario relacionado y veo si surge naturalmente",
            weights: &[(Control, -1), (Vulnerability, 1)],
        },
    },
    // validation
    Question {
        id: QuestionId(4),
        text: "Mandaste un mensaje y pasaron 3 horas sin respuesta. Pensás:",
        option_a: AnswerOption {
            text: "Estará ocupado/a, ya va a responder",
            weights: &[(Validation, -1), (Patience, 2)],
        },
        option_b: AnswerOption {
            text: "¿Habré dicho algo mal? Releo el mensaje 5 veces",
            weights: &[(Validation, 2), (Patience, -2)],
        },
    },
    Question {
        id: QuestionId(5),
        text: "La cita salió bien pero no te escribió al día siguiente. Vos:",
        option_a: AnswerOption {
            text: "Le escribo yo, si me gustó no veo por qué esperar",
            weights: &[(Initiative, 2), (Validation, -1)],
        },
        option_b: AnswerOption {
            text: "Espero que escriba primero para confirmar que le interesó",
            weights: &[(Initiative, -1), (Validation, 2)],
        },
    },
    Question {
        id: QuestionId(6),
        text: "Te hacen un cumplido. Tu reacción interna es:",
        option_a: AnswerOption {
            text: "Qué bueno, le gusto",
            weights: &[(Validation, -1)],
        },
        option_b: AnswerOption {
            text: "¿Lo dirá en serio o es solo por ser amable?",
            weights: &[(Validation, 2)],
        },
    },
    // emotion
    Question {
        id: QuestionId(7),
        text: "Te cuentan un problema que tuvieron en el trabajo. Vos:",
        option_a: AnswerOption {
            text: "Escucho y pregunto cómo se sintió con eso",
            weights: &[(Emotion, 2), (Vulnerability, 1)],
        },
        option_b: AnswerOption {
            text: "Analizo la situación y sugiero posibles soluciones",
            weights: &[(Emotion, -2)],
        },
    },
    Question {
        id: QuestionId(8),
        text: "Hay un tema donde no están de acuerdo. ¿Qué hacés?",
        option_a: AnswerOption {
            text: "Explico mi punto de vista con argumentos claros",
            weights: &[(Emotion, -2), (Control, 1)],
        },
        option_b: AnswerOption {
            text: "Escucho su perspectiva y busco el punto medio",
            weights: &[(Emotion, 1), (Vulnerability, 1)],
        },
    },
    Question {
        id: QuestionId(9),
        text: "Te preguntan '¿qué sentís por mí?'. Respondés:",
        option_a: AnswerOption {
            text: "Me resulta fácil expresar lo que siento",
            weights: &[(Emotion, 2), (Vulnerability, 2)],
        },
        option_b: AnswerOption {
            text: "Me cuesta, prefiero demostrarlo con acciones",
            weights: &[(Emotion, -1), (Vulnerability, -1)],
        },
    },
    // vulnerability
    Question {
        id: QuestionId(10),
        text: "Algo te puso mal. En el chat con alguien que te gusta:",
        option_a: AnswerOption {
            text: "Le cuento lo que me pasa, me hace bien hablarlo",
            weights: &[(Vulnerability, 2), (Emotion, 1)],
        },
        option_b: AnswerOption {
            text: "Hago como si nada, no quiero parecer negativo/a",
            weights: &[(Vulnerability, -2)],
        },
    },
    Question {
        id: QuestionId(11),
        text: "Cuando alguien te conoce, tiende a pensar que sos:",
        option_a: AnswerOption {
            text: "Divertido/a y fácil de llevar",
            weights: &[(Vulnerability, -1)],
        },
        option_b: AnswerOption {
            text: "Profundo/a e interesante",
            weights: &[(Vulnerability, 1), (Emotion, 1)],
        },
    },
    Question {
        id: QuestionId(12),
        text: "El humor en tus conversaciones es:",
        option_a: AnswerOption {
            text: "Constante, me gusta mantener el tono liviano",
            weights: &[(Vulnerability, -2), (Emotion, -1)],
        },
        option_b: AnswerOption {
            text: "Natural, pero también hay lugar para charlas serias",
            weights: &[(Vulnerability, 1), (Emotion, 1)],
        },
    },
    // initiative
    Question {
        id: QuestionId(13),
        text: "Te gusta alguien que conociste. ¿Quién manda el primer mensaje?",
        option_a: AnswerOption {
            text: "Yo, si espero capaz no pasa nada",
            weights: &[(Initiative, 2)],
        },
        option_b: AnswerOption {
            text: "Prefiero esperar alguna señal de su parte",
            weights: &[(Initiative, -2)],
        },
    },
    Question {
        id: QuestionId(14),
        text: "En general, las citas las proponés:",
        option_a: AnswerOption {
            text: "Yo la mayoría de las veces",
            weights: &[(Initiative, 2), (Control, 1)],
        },
        option_b: AnswerOption {
            text: "Espero que surja de los dos, no quiero parecer intenso/a",
            weights: &[(Initiative, -1), (Validation, 1)],
        },
    },
    Question {
        id: QuestionId(15),
        text: "La conversación por chat se murió. Vos:",
        option_a: AnswerOption {
            text: "Mando algo para revivirla, un meme o un tema nuevo",
            weights: &[(Initiative, 2)],
        },
        option_b: AnswerOption {
            text: "Si no me escribe, no voy a ser yo quien insista",
            weights: &[(Initiative, -2), (Patience, 1)],
        },
    },
    // patience
    Question {
        id: QuestionId(16),
        text: "Están saliendo hace unas semanas. Querés saber '¿qué somos?':",
        option_a: AnswerOption {
            text: "Se lo pregunto, prefiero tener las cosas claras",
            weights: &[(Patience, -2), (Control, 2)],
        },
        option_b: AnswerOption {
            text: "Dejo que se defina solo, no hay apuro",
            weights: &[(Patience, 2)],
        },
    },
    Question {
        id: QuestionId(17),
        text: "Después de escribir un mensaje, vos:",
        option_a: AnswerOption {
            text: "Lo mando y sigo con mi vida",
            weights: &[(Patience, 2), (Validation, -1)],
        },
        option_b: AnswerOption {
            text: "Quedo pendiente del celular esperando respuesta",
            weights: &[(Patience, -2), (Validation, 2)],
        },
    },
    Question {
        id: QuestionId(18),
        text: "La persona que te gusta está online pero no te respondió. Pensás:",
        option_a: AnswerOption {
            text: "Tendrá sus cosas, ya responderá",
            weights: &[(Patience, 2), (Validation, -1)],
        },
        option_b: AnswerOption {
            text: "Si está online y no responde, algo pasa",
            weights: &[(Patience, -2), (Validation, 2)],
        },
    },
    // tie-breakers
    Question {
        id: QuestionId(19),
        text: "Si tuvieras que elegir un defecto en el dating, sería:",
        option_a: AnswerOption {
            text: "A veces soy muy intenso/a o insistente",
            weights: &[(Patience, -1), (Validation, 1)],
        },
        option_b: AnswerOption {
            text: "A veces parezco frío/a o desinteresado/a",
            weights: &[(Initiative, -1), (Vulnerability, -1)],
        },
    },
    Question {
        id: QuestionId(20),
        text: "La gente que te conoce diría que tu problema en el amor es:",
        option_a: AnswerOption {
            text: "Me enfoco demasiado en la otra persona",
            weights: &[(Validation, 2), (Control, 1)],
        },
        option_b: AnswerOption {
            text: "Me cuesta abrirme y mostrar interés",
            weights: &[(Vulnerability, -2), (Initiative, -1)],
        },
    },
];
