//! # Classes Gramaticais e Etiquetador
//!
//! O estágio WSD depende de tokens já etiquetados com uma classe gramatical
//! **grossa** (o conjunto Universal POS: `NOUN`, `VERB`, `ADJ`, ...). Este
//! módulo define esse conjunto, o mapeamento total para o código de POS do
//! WordNet e um etiquetador heurístico mínimo.
//!
//! ## Mapeamento para o WordNet
//!
//! | Universal POS | WordNet |
//! |---------------|---------|
//! | NOUN          | `n`     |
//! | VERB          | `v`     |
//! | ADJ           | `a`     |
//! | ADV           | `r`     |
//! | (demais)      | —       |
//!
//! O [`LexiconTagger`] existe para que o workspace rode sem dependências
//! externas; a qualidade da etiquetagem não é objetivo. Hosts com um tagger
//! de verdade implementam [`PosTagger`] e o injetam no
//! [`Pipeline`](crate::pipeline::Pipeline).

use std::collections::HashSet;
use std::sync::Arc;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::tokenizer::Token;
use crate::wordnet::{SenseInventory, WordNetPos};

/// Classe gramatical grossa (Universal Dependencies POS).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum CoarsePos {
    Adj,
    Adp,
    Adv,
    Aux,
    Cconj,
    Det,
    Intj,
    Noun,
    Num,
    Part,
    Pron,
    Propn,
    Punct,
    Sconj,
    Sym,
    Verb,
    X,
}

impl CoarsePos {
    /// Todas as classes em ordem alfabética da tag.
    pub const ALL: [CoarsePos; 17] = [
        CoarsePos::Adj,
        CoarsePos::Adp,
        CoarsePos::Adv,
        CoarsePos::Aux,
        CoarsePos::Cconj,
        CoarsePos::Det,
        CoarsePos::Intj,
        CoarsePos::Noun,
        CoarsePos::Num,
        CoarsePos::Part,
        CoarsePos::Pron,
        CoarsePos::Propn,
        CoarsePos::Punct,
        CoarsePos::Sconj,
        CoarsePos::Sym,
        CoarsePos::Verb,
        CoarsePos::X,
    ];

    /// Tag textual (ex: "NOUN").
    pub fn name(&self) -> &'static str {
        match self {
            CoarsePos::Adj => "ADJ",
            CoarsePos::Adp => "ADP",
            CoarsePos::Adv => "ADV",
            CoarsePos::Aux => "AUX",
            CoarsePos::Cconj => "CCONJ",
            CoarsePos::Det => "DET",
            CoarsePos::Intj => "INTJ",
            CoarsePos::Noun => "NOUN",
            CoarsePos::Num => "NUM",
            CoarsePos::Part => "PART",
            CoarsePos::Pron => "PRON",
            CoarsePos::Propn => "PROPN",
            CoarsePos::Punct => "PUNCT",
            CoarsePos::Sconj => "SCONJ",
            CoarsePos::Sym => "SYM",
            CoarsePos::Verb => "VERB",
            CoarsePos::X => "X",
        }
    }

    /// Parseia a tag textual (ex: "VERB" → Some(Verb)). Sensível a maiúsculas,
    /// como as tags emitidas pelos taggers.
    pub fn from_tag(s: &str) -> Option<Self> {
        CoarsePos::ALL.iter().copied().find(|pos| pos.name() == s)
    }

    /// Código de POS do WordNet correspondente, ou `None` para classes que o
    /// WordNet não cobre.
    pub fn wordnet_pos(&self) -> Option<WordNetPos> {
        match self {
            CoarsePos::Noun => Some(WordNetPos::Noun),
            CoarsePos::Verb => Some(WordNetPos::Verb),
            CoarsePos::Adj => Some(WordNetPos::Adj),
            CoarsePos::Adv => Some(WordNetPos::Adv),
            CoarsePos::Adp
            | CoarsePos::Aux
            | CoarsePos::Cconj
            | CoarsePos::Det
            | CoarsePos::Intj
            | CoarsePos::Num
            | CoarsePos::Part
            | CoarsePos::Pron
            | CoarsePos::Propn
            | CoarsePos::Punct
            | CoarsePos::Sconj
            | CoarsePos::Sym
            | CoarsePos::X => None,
        }
    }
}

impl std::fmt::Display for CoarsePos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Contrato do etiquetador upstream: preenche `token.pos` em ordem.
pub trait PosTagger: Send + Sync {
    fn tag(&self, tokens: &mut [Token]);
}

const DETERMINERS: &[&str] = &[
    "the", "a", "an", "this", "that", "these", "those", "his", "her", "its", "their", "my",
    "your", "our", "some", "any", "every", "each", "no", "all", "both",
];
const PRONOUNS: &[&str] = &[
    "i", "you", "he", "she", "it", "we", "they", "me", "him", "us", "them", "who", "whom",
    "what", "which", "myself", "himself", "herself", "themselves", "itself", "someone",
];
const ADPOSITIONS: &[&str] = &[
    "in", "on", "at", "for", "of", "to", "from", "with", "by", "about", "after", "before",
    "into", "over", "under", "near", "across", "through", "during", "without", "beside",
];
const AUXILIARIES: &[&str] = &[
    "is", "am", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "may", "might", "must", "shall",
];
const COORDINATORS: &[&str] = &["and", "or", "but", "nor", "yet", "so"];
const SUBORDINATORS: &[&str] = &[
    "while", "because", "if", "although", "though", "when", "since", "unless", "whereas", "until",
];
const PARTICLES: &[&str] = &["not", "n't", "'s"];

/// Etiquetador heurístico: listas de palavras fechadas, sufixos e consulta
/// ao inventário de sentidos para as classes abertas.
///
/// # Ordem das regras
/// 1. Pontuação, números e palavras de classe fechada.
/// 2. Palavras capitalizadas fora do início da sentença → `PROPN`.
/// 3. Sufixos (`-ly` → ADV; `-ing`/`-ed` fora de posição nominal → VERB).
/// 4. Contexto anterior (`to`/pronome/auxiliar → VERB; determinante → NOUN/ADJ).
/// 5. O que o inventário conhecer; `NOUN` por padrão.
pub struct LexiconTagger {
    inventory: Arc<dyn SenseInventory>,
    closed: Vec<(CoarsePos, HashSet<&'static str>)>,
    adverb_suffix: Regex,
    verb_suffix: Regex,
}

impl LexiconTagger {
    pub fn new(inventory: Arc<dyn SenseInventory>) -> Self {
        let closed = [
            (CoarsePos::Det, DETERMINERS),
            (CoarsePos::Pron, PRONOUNS),
            (CoarsePos::Adp, ADPOSITIONS),
            (CoarsePos::Aux, AUXILIARIES),
            (CoarsePos::Cconj, COORDINATORS),
            (CoarsePos::Sconj, SUBORDINATORS),
            (CoarsePos::Part, PARTICLES),
        ]
        .into_iter()
        .map(|(pos, words)| (pos, words.iter().copied().collect()))
        .collect();

        Self {
            inventory,
            closed,
            adverb_suffix: Regex::new(r"^[a-z]{3,}ly$").expect("regex de advérbio válida"),
            verb_suffix: Regex::new(r"^[a-z]{2,}(?:ing|ed)$").expect("regex de verbo válida"),
        }
    }

    fn closed_class(&self, lower: &str) -> Option<CoarsePos> {
        self.closed
            .iter()
            .find(|(_, words)| words.contains(lower))
            .map(|(pos, _)| *pos)
    }

    fn knows(&self, lower: &str, pos: WordNetPos) -> bool {
        !self.inventory.lookup(lower, pos).is_empty()
    }

    fn tag_one(&self, token: &Token, prev: Option<(&Token, CoarsePos)>, sentence_start: bool) -> CoarsePos {
        let text = token.text.as_str();
        if text.chars().all(|c| !c.is_alphanumeric()) {
            return CoarsePos::Punct;
        }
        if text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
            return CoarsePos::Num;
        }

        let lower = token.lookup_form();
        if let Some(pos) = self.closed_class(&lower) {
            return pos;
        }
        if !sentence_start && text.chars().next().is_some_and(char::is_uppercase) {
            return CoarsePos::Propn;
        }

        let prev_pos = prev.map(|(_, pos)| pos);
        let after_to = prev.is_some_and(|(t, _)| t.text.eq_ignore_ascii_case("to"));
        let nominal_slot = matches!(prev_pos, Some(CoarsePos::Det | CoarsePos::Adj));

        if self.adverb_suffix.is_match(&lower) && self.knows(&lower, WordNetPos::Adv) {
            return CoarsePos::Adv;
        }
        if self.verb_suffix.is_match(&lower) && !nominal_slot && self.knows(&lower, WordNetPos::Verb) {
            return CoarsePos::Verb;
        }
        if (after_to || matches!(prev_pos, Some(CoarsePos::Pron | CoarsePos::Aux)))
            && self.knows(&lower, WordNetPos::Verb)
        {
            return CoarsePos::Verb;
        }
        if nominal_slot || matches!(prev_pos, Some(CoarsePos::Adp)) {
            // Determinante seguido de adjetivo conhecido que não é substantivo
            if self.knows(&lower, WordNetPos::Adj) && !self.knows(&lower, WordNetPos::Noun) {
                return CoarsePos::Adj;
            }
            return CoarsePos::Noun;
        }

        if self.knows(&lower, WordNetPos::Noun) {
            CoarsePos::Noun
        } else if self.knows(&lower, WordNetPos::Verb) {
            CoarsePos::Verb
        } else if self.knows(&lower, WordNetPos::Adj) {
            CoarsePos::Adj
        } else if self.knows(&lower, WordNetPos::Adv) {
            CoarsePos::Adv
        } else {
            CoarsePos::Noun
        }
    }
}

impl PosTagger for LexiconTagger {
    fn tag(&self, tokens: &mut [Token]) {
        let mut sentence_start = true;
        for i in 0..tokens.len() {
            let (before, rest) = tokens.split_at_mut(i);
            let token = &mut rest[0];
            let prev = before.last().map(|t| (t, t.pos));
            token.pos = self.tag_one(token, prev, sentence_start);
            sentence_start = matches!(token.text.as_str(), "." | "!" | "?");
        }
    }
}
