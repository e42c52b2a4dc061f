//! # Pontuador de Glosas
//!
//! O único ponto do sistema onde há "julgamento": dado o contexto de uma
//! palavra e as glosas dos sentidos candidatos, qual glosa combina melhor?
//!
//! ## Algoritmo
//!
//! Para cada candidato monta-se um **par de sequências**, no formato usado
//! pelos modelos do tipo GlossBERT:
//!
//! ```text
//! contexto: The "bass" player adjusted the bass on his amplifier.
//! glosa:    bass : the member with the lowest range of a family of musical instruments
//! ```
//!
//! Todos os pares vão em um único lote para o [`PairClassifier`], que devolve
//! uma pontuação de compatibilidade (probabilidade da classe positiva) por
//! par. Vence o maior escore; empates ficam com o candidato que aparece
//! primeiro no inventário.
//!
//! ## Modelos
//!
//! O classificador é um colaborador externo, injetado como trait object. O
//! [`ModelRegistry`] resolve `model_name` para um classificador; o único
//! modelo embutido é o [`OverlapClassifier`] (`gloss-overlap`), uma variante
//! de Lesk que conta palavras em comum entre a vizinhança do alvo e a glosa.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{Result, WsdError};
use crate::wordnet::SenseCandidate;

/// Nome do modelo embutido.
pub const OVERLAP_MODEL: &str = "gloss-overlap";

/// Uma entrada do classificador: (sentença com alvo marcado, glosa).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SequencePair {
    pub context: String,
    pub gloss: String,
}

/// Opções repassadas ao classificador a cada lote.
///
/// `supervision` não tem semântica definida aqui: é um ajuste de calibração
/// do modelo, entregue intacto para quem o implementa.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierOptions {
    pub supervision: bool,
}

/// Contrato do classificador de pares de sequências (ex: GlossBERT).
///
/// Deve devolver exatamente um escore por par, na mesma ordem.
pub trait PairClassifier: Send + Sync {
    fn classify(&self, pairs: &[SequencePair], options: &ClassifierOptions) -> Result<Vec<f32>>;
}

impl<F> PairClassifier for F
where
    F: Fn(&[SequencePair], &ClassifierOptions) -> Result<Vec<f32>> + Send + Sync,
{
    fn classify(&self, pairs: &[SequencePair], options: &ClassifierOptions) -> Result<Vec<f32>> {
        self(pairs, options)
    }
}

/// Um candidato com sua pontuação.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredSense {
    pub candidate: SenseCandidate,
    pub score: f32,
}

/// Pontua glosas contra um contexto usando um [`PairClassifier`].
#[derive(Clone)]
pub struct GlossScorer {
    classifier: Arc<dyn PairClassifier>,
    options: ClassifierOptions,
}

impl GlossScorer {
    pub fn new(classifier: Arc<dyn PairClassifier>, supervision: bool) -> Self {
        Self {
            classifier,
            options: ClassifierOptions { supervision },
        }
    }

    pub fn options(&self) -> ClassifierOptions {
        self.options
    }

    /// Monta um par por candidato. `target` é o intervalo em bytes da palavra
    /// dentro de `context`.
    pub fn build_pairs(
        context: &str,
        target: (usize, usize),
        candidates: &[SenseCandidate],
    ) -> Result<Vec<SequencePair>> {
        let (start, end) = target;
        if start > end || end > context.len() || !context.is_char_boundary(start) || !context.is_char_boundary(end) {
            return Err(WsdError::Inference(format!(
                "alvo {start}..{end} fora do contexto de {} bytes",
                context.len()
            )));
        }

        let word = &context[start..end];
        let marked = format!("{}\"{}\"{}", &context[..start], word, &context[end..]);
        Ok(candidates
            .iter()
            .map(|c| SequencePair {
                context: marked.clone(),
                gloss: format!("{} : {}", word, c.gloss),
            })
            .collect())
    }

    /// Pontua todos os candidatos e devolve-os do mais para o menos compatível.
    /// Empates preservam a ordem do inventário; escores não finitos (NaN, ±∞)
    /// abortam com `Inference`.
    ///
    /// Lista vazia não chega a consultar o modelo.
    pub fn score(
        &self,
        context: &str,
        target: (usize, usize),
        candidates: &[SenseCandidate],
    ) -> Result<Vec<ScoredSense>> {
        if candidates.is_empty() {
            return Ok(vec![]);
        }

        let pairs = Self::build_pairs(context, target, candidates)?;
        let scores = self.classifier.classify(&pairs, &self.options)?;
        if scores.len() != candidates.len() {
            return Err(WsdError::Inference(format!(
                "o classificador devolveu {} escores para {} pares",
                scores.len(),
                candidates.len()
            )));
        }
        if let Some(bad) = scores.iter().find(|s| !s.is_finite()) {
            return Err(WsdError::Inference(format!("o classificador devolveu um escore inválido ({bad})")));
        }

        let mut ranked: Vec<ScoredSense> = candidates
            .iter()
            .cloned()
            .zip(scores)
            .map(|(candidate, score)| ScoredSense { candidate, score })
            .collect();
        // sort_by é estável: empates mantêm a ordem do inventário
        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(ranked)
    }

    /// Escolhe o melhor candidato (argmax, primeiro visto vence empates).
    ///
    /// - Sem candidatos → `None`, sem consultar o modelo.
    /// - Um único candidato → ele mesmo, com escore 1.0, sem consultar o modelo.
    pub fn select_best(
        &self,
        context: &str,
        target: (usize, usize),
        candidates: &[SenseCandidate],
    ) -> Result<Option<ScoredSense>> {
        match candidates {
            [] => Ok(None),
            [only] => Ok(Some(ScoredSense {
                candidate: only.clone(),
                score: 1.0,
            })),
            _ => Ok(self.score(context, target, candidates)?.into_iter().next()),
        }
    }
}

const STOPWORDS: &[&str] = &[
    "a", "an", "the", "of", "in", "on", "at", "to", "for", "by", "with", "from", "and", "or",
    "as", "is", "are", "was", "were", "be", "been", "it", "its", "his", "her", "their", "he",
    "she", "they", "we", "i", "you", "that", "this", "which", "who", "some", "any",
    "not", "no", "so", "than", "into", "about", "while", "after", "before", "usually",
    "especially", "such", "used", "one", "someone", "something",
];

/// Lesk simplificado: conta palavras de conteúdo em comum entre a janela ao
/// redor do alvo e a glosa, com um pequeno viés para os primeiros sentidos.
///
/// O escore é `sigmoid(overlap_weight * sobreposição + prior / (1 + posição) + bias)`,
/// em que `posição` é o índice do par no lote (a ordem do inventário).
#[derive(Debug, Clone)]
pub struct OverlapClassifier {
    /// Palavras de cada lado do alvo consideradas contexto.
    pub window: usize,
    pub overlap_weight: f32,
    pub prior: f32,
    pub bias: f32,
    stopwords: HashSet<&'static str>,
}

impl Default for OverlapClassifier {
    fn default() -> Self {
        Self {
            window: 4,
            overlap_weight: 1.5,
            prior: 0.5,
            bias: -1.0,
            stopwords: STOPWORDS.iter().copied().collect(),
        }
    }
}

impl OverlapClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normaliza uma palavra para comparação: minúsculas e sufixos flexionais
    /// mais comuns removidos ("fishes", "fishing" → "fish").
    fn stem(word: &str) -> String {
        let lower = word.to_lowercase();
        for suffix in ["ing", "es", "ed", "s"] {
            if let Some(stem) = lower.strip_suffix(suffix) {
                if stem.chars().count() >= 3 {
                    return stem.to_string();
                }
            }
        }
        lower
    }

    fn content_words<'a>(&'a self, text: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        text.split(|c: char| !c.is_alphanumeric() && c != '"' && c != '\'')
            .filter(|w| !w.is_empty())
            .filter(move |w| !self.stopwords.contains(w.trim_matches('"').to_lowercase().as_str()))
    }

    /// Palavras de conteúdo (já normalizadas) na janela ao redor do alvo marcado com aspas.
    fn context_window(&self, marked: &str) -> HashSet<String> {
        let words: Vec<&str> = self.content_words(marked).collect();
        let target = words.iter().position(|w| w.starts_with('"') && w.ends_with('"') && w.len() > 1);
        let (lo, hi) = match target {
            Some(i) => (i.saturating_sub(self.window), (i + self.window + 1).min(words.len())),
            None => (0, words.len()),
        };
        words[lo..hi]
            .iter()
            .enumerate()
            .filter(|(offset, _)| Some(lo + offset) != target)
            .map(|(_, w)| Self::stem(w.trim_matches('"')))
            .collect()
    }

    fn gloss_words(&self, gloss: &str) -> HashSet<String> {
        let definition = gloss.split_once(" : ").map_or(gloss, |(_, def)| def);
        self.content_words(definition)
            .map(|w| Self::stem(w.trim_matches('"')))
            .collect()
    }
}

impl PairClassifier for OverlapClassifier {
    fn classify(&self, pairs: &[SequencePair], _options: &ClassifierOptions) -> Result<Vec<f32>> {
        let mut windows: HashMap<&str, HashSet<String>> = HashMap::new();
        Ok(pairs
            .iter()
            .enumerate()
            .map(|(position, pair)| {
                let context = windows
                    .entry(pair.context.as_str())
                    .or_insert_with(|| self.context_window(&pair.context));
                let overlap = self.gloss_words(&pair.gloss).intersection(context).count() as f32;
                let logit = self.overlap_weight * overlap + self.prior / (1.0 + position as f32) + self.bias;
                1.0 / (1.0 + (-logit).exp())
            })
            .collect())
    }
}

/// Resolve `model_name` para um classificador carregado.
pub trait ModelLoader: Send + Sync {
    fn load(&self, model_name: &str) -> Result<Arc<dyn PairClassifier>>;
}

pub type ModelFactory = Box<dyn Fn() -> Result<Arc<dyn PairClassifier>> + Send + Sync>;

/// Registro explícito de modelos: o host registra fábricas por nome e injeta
/// o registro na construção do estágio.
pub struct ModelRegistry {
    factories: HashMap<String, ModelFactory>,
}

impl ModelRegistry {
    /// Registro vazio, sem nem o modelo embutido.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registro com o modelo embutido (`gloss-overlap`).
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register(OVERLAP_MODEL, || Ok(Arc::new(OverlapClassifier::new()) as Arc<dyn PairClassifier>));
        registry
    }

    pub fn register<F>(&mut self, name: impl Into<String>, factory: F) -> &mut Self
    where
        F: Fn() -> Result<Arc<dyn PairClassifier>> + Send + Sync + 'static,
    {
        self.factories.insert(name.into(), Box::new(factory));
        self
    }

    /// Nomes registrados, em ordem alfabética.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for ModelRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelLoader for ModelRegistry {
    fn load(&self, model_name: &str) -> Result<Arc<dyn PairClassifier>> {
        let factory = self
            .factories
            .get(model_name)
            .ok_or_else(|| WsdError::ModelLoad(model_name.to_string()))?;
        let classifier = factory()?;
        info!(model = model_name, "classificador carregado");
        Ok(classifier)
    }
}
