//! Risk-tolerance questionnaire: static question bank, responses and scoring.
//!
//! The questionnaire is a fixed instrument of 67 statements across 7
//! sections, each answered on a 1-4 agreement scale. The question texts are
//! carried verbatim (in Spanish, as administered to clients); scoring only
//! depends on the numeric answers.

use crate::category::RiskScore;
use crate::error::{ProfileError, Result};
use std::collections::HashMap;

/// One section of the questionnaire.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    /// Section id (1-based).
    pub id: u8,
    /// Statements in this section, in presentation order.
    pub questions: &'static [&'static str],
}

static SECTIONS: [Section; 7] = [
    Section {
        id: 1,
        questions: &[
            "Conozco mis bienes/derechos (activos) y asumo mis deudas/obligaciones (pasivos).",
            "Me enorgullezco del trabajo que realizo y busco aprovechar al máximo los frutos que obtengo de él.",
            "Soy auténtico sin necesidad de quedar bien.",
            "Mi trabajo destaca en mayor medida que el de los demás.",
            "Busco ayuda de los expertos en el tema.",
            "Tomo en cuenta la opinión de los especialistas, sin sesgarme únicamente por esta.",
            "Conozco mis cualidades y me comprometo con mis objetivos.",
            "Sé cuál es mi lugar y evito ser siempre el primero en todo.",
            "Acepto que la especulación puede evidenciar que no estaba en lo correcto.",
            "Cuido mi apariencia sin dedicarle todo el tiempo a ella.",
        ],
    },
    Section {
        id: 2,
        questions: &[
            "Soy adverso a tomar pérdidas, que en mantener las ganancias.",
            "Si asumo más riesgo y llegara a causar pérdidas, mantengo mi posición a largo plazo.",
            "Soy consciente de los ciclos económicos y que a largo plazo el capital tiene una tendencia a crecer.",
            "Compro lo que entiendo y no me importa la opinión ajena.",
            "Mantengo mi posición.",
            "Mantengo mi portafolio a pesar de un VaR (pérdidas máximas en $ esperadas en un portafolio de el 5% de las veces) alto.",
            "Tolero una desviación considerable de mis rendimientos en proporción a la media.",
            "Busco romper el status quo y terminar los plazos de mis portafolios.",
            "Prefiero posponer decisiones de compra/venta esperando un mejor escenario.",
            "Dependo de un margin call o de un piso/techo para tomar una decisión.",
        ],
    },
    Section {
        id: 3,
        questions: &[
            "Soy consciente del riesgo sistémico y actúo de tal manera que puedo conservar por lo menos mi capital a través del tiempo.",
            "Enfrento mi aversión al riesgo sin perder mis metas financieras.",
            "He invertido en un activo a pesar del riesgo relacionado con él.",
            "Tengo experiencias de inversión realizadas por mi cuenta o he acudido con algún intermediario financiero.",
            "Tomas la decisión de una inversión en corto en búsqueda de potencializar tu posible utilidad.",
            "Soy más afecto a tomar pérdidas o a esperar utilidades.",
            "Concuerdo con Peter Lynch: “Solo invierto en lo que entiendo.”",
            "Reconozco mis expectativas, sin perder de vista el costo de oportunidad al que incurro.",
            "Postergó mi decisión de tomar pérdidas o utilidades ante la ansiedad de esperar un mejor escenario.",
            "Reconozco mi aversión al riesgo.",
        ],
    },
    Section {
        id: 4,
        questions: &[
            "Soy ambicioso pero persistente, en lugar de buscar rendimientos cortoplacistas y de riesgo cero.",
            "Me siento cómodo en mi estatus quo y me quedo así.",
            "Soy optimista.",
            "Construyo una imagen de valor, para que un inversionista (compañía o individuo) solicite mi atención.",
            "Tengo impedimentos (familiares, personales, profesionales, de salud, etc.) que me impiden persistir frente a algún pasivo.",
            "Tengo metas altas.",
            "He presentado mis habilidades y aptitudes hacia colegas, para evitar problemas complejos (como la euforia colectiva).",
            "Busco la mayor eficiencia en mis retornos requeridos.",
            "Soy perfeccionista.",
            "Busco la retención de capital a largo plazo en una inversión y cuento con una tasa de rotación de objetivos baja (siendo firme y enfocado en mis compromisos).",
        ],
    },
    Section {
        id: 5,
        questions: &[
            "Mi capital está trabajando en congruencia con mis necesidades.",
            "Cuento con metas financieras y procuro su cumplimiento en tiempo y forma.",
            "Soy coherente.",
            "Hablo mal a espaldas de las personas.",
            "Cuido la confidencialidad de la información que se me comparte.",
            "A pesar del costo de oportunidad inferido, cumplo mis metas.",
            "Mi riesgo crediticio es alto.",
            "Tengo un código de conducta.",
            "Respeto las reglas y normas establecidas para mi actuación financiera.",
            "¿Me mantengo firme a pesar de la incertidumbre?",
        ],
    },
    Section {
        id: 6,
        questions: &[
            "Me identifico junto con Warren Buffett al decir: “Tengo miedo cuando los demás son codiciosos.”",
            "Uso la razón para atender mis prioridades y no dejarme llevar por la emoción de los agentes económicos.",
            "Me mantengo ecuánime y flexible ante el riesgo no diversificable.",
            "En presencia de una tendencia determinista y con un nivel de riesgo seleccionado, me alarmo ante una evolución no previsible en la misma desviación estándar (riesgo).",
            "En una posición larga, me agobio ante las obligaciones del corto plazo.",
            "Evito las molestias y agobios ante imprevistos.",
            "Ante un escenario de pérdidas tengo un magical thinking de que mis enemigos son causa del resultado.",
            "Me quejo mucho.",
            "Ante un cambio en el nivel de la media predicho, busco alguna manera de volver a ajustar mi asset allocation model.",
            "Agradezco con facilidad.",
        ],
    },
    Section {
        id: 7,
        questions: &[
            "Llevo registro de las tendencias de mis inversiones para no olvidar su comportamiento histórico.",
            "Amplío mis horizontes de información y trato de evitar el sesgo de anchoring.",
            "Solo invierto en lo que conozco y me encamino a preguntar para ampliar mis horizontes.",
            "Confío en el adagio “Buy the rumor, sell the news.”",
            "No cambio con facilidad de opinión.",
            "No me justifico.",
            "Soy comprometido a pesar de la aleatoriedad de las variables económicas y que, en algunos casos, estas no te generen beneficio.",
        ],
    },
];

/// The full question bank, in section order.
pub fn sections() -> &'static [Section] {
    &SECTIONS
}

/// Total number of questions across all sections.
pub fn question_count() -> usize {
    SECTIONS.iter().map(|s| s.questions.len()).sum()
}

/// Lowest answer on the agreement scale.
pub const ANSWER_MIN: u8 = 1;

/// Highest answer on the agreement scale.
pub const ANSWER_MAX: u8 = 4;

/// A client's answers, keyed by section id and question text.
///
/// Recording is incremental (one section at a time in the original flow);
/// scoring requires every question of every section to be answered.
#[derive(Debug, Clone, Default)]
pub struct QuestionnaireResponse {
    answers: HashMap<(u8, String), u8>,
}

impl QuestionnaireResponse {
    /// Create an empty response set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an answer for one question.
    ///
    /// Re-recording a question overwrites the previous answer. Fails when
    /// the answer is outside the 1-4 scale or the question is not part of
    /// the bank.
    pub fn record(&mut self, section: u8, question: &str, answer: u8) -> Result<()> {
        if !(ANSWER_MIN..=ANSWER_MAX).contains(&answer) {
            return Err(ProfileError::InvalidAnswer { answer });
        }

        let bank_section = SECTIONS
            .iter()
            .find(|s| s.id == section)
            .ok_or(ProfileError::UnknownSection { section })?;

        if !bank_section.questions.contains(&question) {
            return Err(ProfileError::UnknownQuestion {
                section,
                question: question.to_string(),
            });
        }

        self.answers.insert((section, question.to_string()), answer);
        Ok(())
    }

    /// Look up the recorded answer for one question.
    pub fn answer(&self, section: u8, question: &str) -> Option<u8> {
        self.answers.get(&(section, question.to_string())).copied()
    }

    /// Number of questions answered so far.
    pub fn answered(&self) -> usize {
        self.answers.len()
    }

    /// Whether every question of every section has an answer.
    pub fn is_complete(&self) -> bool {
        SECTIONS.iter().all(|s| self.missing_in(s) == 0)
    }

    /// Sum every answer into a total risk score.
    ///
    /// Fails with [`ProfileError::IncompleteResponse`] (reporting the first
    /// incomplete section) unless the response set covers the full bank.
    pub fn score(&self) -> Result<RiskScore> {
        for section in &SECTIONS {
            let missing = self.missing_in(section);
            if missing > 0 {
                return Err(ProfileError::IncompleteResponse {
                    section: section.id,
                    missing,
                });
            }
        }

        let total: u16 = SECTIONS
            .iter()
            .flat_map(|s| {
                s.questions
                    .iter()
                    .filter_map(|q| self.answer(s.id, q).map(u16::from))
            })
            .sum();

        Ok(RiskScore::from(total))
    }

    fn missing_in(&self, section: &Section) -> usize {
        section
            .questions
            .iter()
            .filter(|q| !self.answers.contains_key(&(section.id, (**q).to_string())))
            .count()
    }
}
