//! # Estágio de Desambiguação — Orquestrador com Eventos Observáveis
//!
//! O [`WsdStage`] percorre os tokens de um documento e, para cada token cuja
//! classe gramatical está no filtro configurado:
//!
//! 1. mapeia a classe grossa para o código do WordNet (`NOUN` → `n`, ...);
//! 2. busca os candidatos no [`SenseInventory`], mantendo só os da mesma letra;
//! 3. pede ao [`GlossScorer`] o melhor candidato;
//! 4. grava o resultado no [`AnnotatedDoc`].
//!
//! Tokens são independentes entre si: nenhum estado passa de um para outro.
//! Uma falha do classificador aborta o documento inteiro.
//!
//! Como no restante do pipeline, cada passo pode ser observado por um canal
//! `mpsc` de [`WsdEvent`]s ([`WsdStage::process_streaming`]), o que permite ao
//! servidor WebSocket transmitir o progresso em tempo real.

use std::collections::HashSet;
use std::sync::mpsc;
use std::sync::Arc;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::document::{AnnotatedDoc, Document, SenseAssignment};
use crate::error::{Result, WsdError};
use crate::pipeline::{ComponentMeta, PipelineStage};
use crate::scorer::{GlossScorer, ModelLoader, PairClassifier, ScoredSense};
use crate::tagger::CoarsePos;
use crate::tokenizer::Token;
use crate::wordnet::{SenseCandidate, SenseInventory};

/// Nome sob o qual o estágio se apresenta ao host.
pub const COMPONENT_NAME: &str = "glossbert_wsd";

/// Configuração do estágio.
///
/// Chaves desconhecidas são rejeitadas. Ausentes assumem o padrão.
///
/// ```rust
/// use wsd_core::stage::WsdConfig;
///
/// let config = WsdConfig::from_json(r#"{"pos_filter": ["NOUN", "ADJ"], "debug": true}"#).unwrap();
/// assert!(!config.supervision);
/// assert!(WsdConfig::from_json(r#"{"threshold": 0.5}"#).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WsdConfig {
    /// Classes gramaticais consideradas. Padrão: `["NOUN", "VERB"]`.
    pub pos_filter: Vec<CoarsePos>,
    /// Ajuste de calibração repassado ao classificador.
    pub supervision: bool,
    /// Identificador do classificador a carregar.
    pub model_name: String,
    /// Log detalhado por token; não altera a saída.
    pub debug: bool,
}

impl Default for WsdConfig {
    fn default() -> Self {
        Self {
            pos_filter: vec![CoarsePos::Noun, CoarsePos::Verb],
            supervision: false,
            model_name: "kanishka/GlossBERT".to_string(),
            debug: false,
        }
    }
}

impl WsdConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json).map_err(|e| WsdError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Aplica um objeto JSON de sobrescrita (ex: vindo do host).
    pub fn from_value(value: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(value).map_err(|e| WsdError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.model_name.trim().is_empty() {
            return Err(WsdError::Config("model_name não pode ser vazio".into()));
        }
        Ok(())
    }
}

/// Por que um token ficou sem sentido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Classe gramatical fora do filtro.
    PosNotTracked,
    /// Classe no filtro, mas sem código no WordNet (ex: PROPN).
    PosUnmapped,
    /// O inventário não tem sentidos dessa classe para a palavra.
    NoCandidates,
}

/// Eventos emitidos durante o processamento de um documento.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum WsdEvent {
    /// **Início**: os tokens recebidos do tagger.
    TokensReceived {
        tokens: Vec<Token>,
        total: usize,
    },
    /// Token ignorado, com o motivo.
    TokenSkipped {
        token_index: usize,
        token_text: String,
        reason: SkipReason,
    },
    /// Candidatos encontrados no inventário.
    CandidatesFound {
        token_index: usize,
        token_text: String,
        candidates: Vec<SenseCandidate>,
    },
    /// Escores do classificador, do melhor para o pior.
    GlossesScored {
        token_index: usize,
        token_text: String,
        ranked: Vec<ScoredSense>,
    },
    /// Sentido definitivo do token.
    SenseAssigned {
        token_index: usize,
        token_text: String,
        sense_id: String,
        gloss: String,
        score: f32,
    },
    /// **Conclusão**: documento anotado e tempo gasto.
    Done {
        document: AnnotatedDoc,
        annotated: usize,
        processing_ms: u64,
    },
    /// **Falha**: erro irrecuperável; o documento fica sem resultado.
    Error {
        message: String,
    },
}

/// Todos os sentidos possíveis de um token elegível, e o escolhido.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseAnalysis {
    pub token_index: usize,
    pub word: String,
    pub pos: CoarsePos,
    pub disambiguated: Option<String>,
    pub potential_senses: Vec<SenseCandidate>,
}

/// O estágio de desambiguação.
///
/// Sem estado entre chamadas além da configuração e do classificador
/// carregado (somente leitura); pode ser compartilhado entre threads.
pub struct WsdStage {
    config: WsdConfig,
    pos_filter: HashSet<CoarsePos>,
    inventory: Arc<dyn SenseInventory>,
    scorer: GlossScorer,
}

impl WsdStage {
    /// Constrói o estágio com dependências explícitas.
    pub fn new(
        config: WsdConfig,
        inventory: Arc<dyn SenseInventory>,
        classifier: Arc<dyn PairClassifier>,
    ) -> Result<Self> {
        config.validate()?;
        let pos_filter = config.pos_filter.iter().copied().collect();
        let scorer = GlossScorer::new(classifier, config.supervision);
        info!(
            model = %config.model_name,
            pos_filter = ?config.pos_filter,
            supervision = config.supervision,
            "estágio WSD pronto"
        );
        Ok(Self {
            config,
            pos_filter,
            inventory,
            scorer,
        })
    }

    /// Constrói o estágio carregando `config.model_name` pelo `loader`.
    pub fn from_config(
        config: WsdConfig,
        inventory: Arc<dyn SenseInventory>,
        loader: &dyn ModelLoader,
    ) -> Result<Self> {
        config.validate()?;
        let classifier = loader.load(&config.model_name)?;
        Self::new(config, inventory, classifier)
    }

    pub fn config(&self) -> &WsdConfig {
        &self.config
    }

    pub fn inventory(&self) -> &Arc<dyn SenseInventory> {
        &self.inventory
    }

    /// O token entra no filtro configurado?
    pub fn tracks(&self, pos: CoarsePos) -> bool {
        self.pos_filter.contains(&pos)
    }

    /// Candidatos do token, já restritos à letra de POS exata. `Err` traz o
    /// motivo quando o token não é elegível.
    pub fn candidates_for(&self, token: &Token) -> std::result::Result<Vec<SenseCandidate>, SkipReason> {
        if !self.tracks(token.pos) {
            return Err(SkipReason::PosNotTracked);
        }
        let Some(wn_pos) = token.pos.wordnet_pos() else {
            return Err(SkipReason::PosUnmapped);
        };
        let candidates: Vec<SenseCandidate> = self
            .inventory
            .lookup(&token.lookup_form(), wn_pos)
            .into_iter()
            .filter(|c| c.pos == wn_pos)
            .collect();
        if candidates.is_empty() {
            return Err(SkipReason::NoCandidates);
        }
        Ok(candidates)
    }

    /// Processa um documento recém-etiquetado.
    pub fn process(&self, doc: Document) -> Result<AnnotatedDoc> {
        self.annotate(AnnotatedDoc::new(doc), &mut |_| {})
    }

    /// Processa vários documentos em paralelo. Cada documento é independente,
    /// então o resultado é o mesmo do processamento sequencial.
    pub fn process_batch(&self, docs: Vec<Document>) -> Vec<Result<AnnotatedDoc>> {
        docs.into_par_iter().map(|doc| self.process(doc)).collect()
    }

    /// Executa o estágio enviando eventos de progresso pelo canal `tx`.
    ///
    /// # Fluxo de Eventos
    /// 1. `TokensReceived`
    /// 2. Por token: `TokenSkipped`, ou `CandidatesFound` → (`GlossesScored`) → `SenseAssigned`
    /// 3. `Done` (ou `Error`, se o classificador falhar)
    pub fn process_streaming(&self, doc: Document, tx: mpsc::Sender<WsdEvent>) {
        let start = std::time::Instant::now();
        let mut emit = |event: WsdEvent| {
            let _ = tx.send(event);
        };

        match self.annotate(AnnotatedDoc::new(doc), &mut emit) {
            Ok(document) => {
                let annotated = document.annotated_count();
                emit(WsdEvent::Done {
                    document,
                    annotated,
                    processing_ms: start.elapsed().as_millis() as u64,
                });
            }
            Err(e) => emit(WsdEvent::Error {
                message: e.to_string(),
            }),
        }
    }

    /// Para cada token elegível, todos os sentidos possíveis e o escolhido.
    pub fn analyze_senses(&self, doc: Document) -> Result<Vec<SenseAnalysis>> {
        let annotated = self.process(doc)?;
        Ok(annotated
            .tokens()
            .iter()
            .filter_map(|token| {
                let candidates = self.candidates_for(token).ok()?;
                Some(SenseAnalysis {
                    token_index: token.index,
                    word: token.text.clone(),
                    pos: token.pos,
                    disambiguated: annotated.sense_id(token.index).map(str::to_string),
                    potential_senses: candidates,
                })
            })
            .collect())
    }

    fn annotate(&self, mut annotated: AnnotatedDoc, emit: &mut dyn FnMut(WsdEvent)) -> Result<AnnotatedDoc> {
        annotated.clear();
        emit(WsdEvent::TokensReceived {
            tokens: annotated.tokens().to_vec(),
            total: annotated.tokens().len(),
        });

        for i in 0..annotated.tokens().len() {
            let assignment = self.disambiguate_token(&annotated.doc, i, emit)?;
            annotated.set_sense(i, assignment);
        }
        Ok(annotated)
    }

    fn disambiguate_token(
        &self,
        doc: &Document,
        index: usize,
        emit: &mut dyn FnMut(WsdEvent),
    ) -> Result<Option<SenseAssignment>> {
        let token = &doc.tokens[index];

        let candidates = match self.candidates_for(token) {
            Ok(candidates) => candidates,
            Err(reason) => {
                if self.config.debug {
                    debug!(index, token = %token.text, pos = %token.pos, ?reason, "token ignorado");
                }
                emit(WsdEvent::TokenSkipped {
                    token_index: index,
                    token_text: token.text.clone(),
                    reason,
                });
                return Ok(None);
            }
        };

        emit(WsdEvent::CandidatesFound {
            token_index: index,
            token_text: token.text.clone(),
            candidates: candidates.clone(),
        });

        // Contexto = sentença do token; o alvo é relativo a ela
        let sentence = doc.sentence_range(index);
        let context = &doc.text[sentence.clone()];
        let target = (token.start - sentence.start, token.end - sentence.start);

        let best = if candidates.len() > 1 {
            let ranked = self.scorer.score(context, target, &candidates)?;
            emit(WsdEvent::GlossesScored {
                token_index: index,
                token_text: token.text.clone(),
                ranked: ranked.clone(),
            });
            ranked.into_iter().next()
        } else {
            self.scorer.select_best(context, target, &candidates)?
        };

        let Some(best) = best else {
            return Ok(None);
        };

        if self.config.debug {
            debug!(
                index,
                token = %token.text,
                sense = %best.candidate.id,
                score = best.score,
                candidates = candidates.len(),
                "sentido atribuído"
            );
        }
        emit(WsdEvent::SenseAssigned {
            token_index: index,
            token_text: token.text.clone(),
            sense_id: best.candidate.id.clone(),
            gloss: best.candidate.gloss.clone(),
            score: best.score,
        });

        Ok(Some(SenseAssignment {
            token_index: index,
            sense: best.candidate,
            score: best.score,
            candidates: candidates.len(),
        }))
    }
}

impl PipelineStage for WsdStage {
    fn meta(&self) -> ComponentMeta {
        ComponentMeta {
            name: COMPONENT_NAME,
            requires: &["token.tag"],
            assigns: &["token._.glossbert_synset"],
        }
    }

    fn apply(&self, doc: AnnotatedDoc) -> Result<AnnotatedDoc> {
        self.annotate(doc, &mut |_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scorer::{ClassifierOptions, ModelRegistry, SequencePair, OVERLAP_MODEL};
    use crate::tokenizer::tokenize;
    use crate::wordnet::{WordNet, WordNetPos};
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Documento etiquetado a partir de pares (palavra, POS) separados por espaço.
    fn tagged_doc(text: &str, tags: &[CoarsePos]) -> Document {
        let mut tokens = tokenize(text);
        assert_eq!(tokens.len(), tags.len(), "tags não batem com tokens");
        for (token, pos) in tokens.iter_mut().zip(tags) {
            token.pos = *pos;
        }
        Document::new(text, tokens)
    }

    fn constant_classifier() -> Arc<dyn PairClassifier> {
        Arc::new(|pairs: &[SequencePair], _: &ClassifierOptions| -> Result<Vec<f32>> {
            Ok(vec![0.5; pairs.len()])
        })
    }

    fn stage_with(config: WsdConfig, classifier: Arc<dyn PairClassifier>) -> WsdStage {
        WsdStage::new(config, Arc::new(WordNet::builtin()), classifier).unwrap()
    }

    fn nouns_only() -> WsdConfig {
        WsdConfig {
            pos_filter: vec![CoarsePos::Noun],
            ..WsdConfig::default()
        }
    }

    use CoarsePos::*;

    #[test]
    fn test_default_config() {
        let config = WsdConfig::default();
        assert_eq!(config.pos_filter, vec![Noun, Verb]);
        assert!(!config.supervision);
        assert_eq!(config.model_name, "kanishka/GlossBERT");
        assert!(!config.debug);
    }

    #[test]
    fn test_config_rejects_unknown_keys_and_tags() {
        assert!(matches!(WsdConfig::from_json(r#"{"threshold": 0.3}"#), Err(WsdError::Config(_))));
        assert!(matches!(WsdConfig::from_json(r#"{"pos_filter": ["NOUNZ"]}"#), Err(WsdError::Config(_))));
        assert!(matches!(WsdConfig::from_json(r#"{"model_name": "  "}"#), Err(WsdError::Config(_))));
        let config = WsdConfig::from_value(serde_json::json!({
            "pos_filter": ["NOUN", "VERB", "ADJ"],
            "supervision": true,
            "model_name": "gloss-overlap",
        }))
        .unwrap();
        assert_eq!(config.pos_filter, vec![Noun, Verb, Adj]);
        assert!(config.supervision);
    }

    #[test]
    fn test_from_config_unknown_model() {
        let result = WsdStage::from_config(
            WsdConfig::default(),
            Arc::new(WordNet::builtin()),
            &ModelRegistry::new(),
        );
        assert!(matches!(result, Err(WsdError::ModelLoad(_))));
    }

    #[test]
    fn test_pos_outside_filter_stays_empty() {
        let stage = stage_with(nouns_only(), constant_classifier());
        let doc = tagged_doc("He went to the bank", &[Pron, Verb, Adp, Det, Noun]);
        let annotated = stage.process(doc).unwrap();
        assert!(annotated.sense(1).is_none(), "verbo fora do filtro");
        assert!(annotated.sense(4).is_some());
        assert_eq!(annotated.annotated_count(), 1);
    }

    #[test]
    fn test_pos_in_filter_but_unmapped_stays_empty() {
        let config = WsdConfig {
            pos_filter: vec![Noun, Propn, Det],
            ..WsdConfig::default()
        };
        let stage = stage_with(config, constant_classifier());
        // "Bank" como nome próprio: está no filtro, mas PROPN não tem código WordNet
        let doc = tagged_doc("the Bank bank", &[Det, Propn, Noun]);
        let annotated = stage.process(doc).unwrap();
        assert!(annotated.sense(0).is_none());
        assert!(annotated.sense(1).is_none());
        assert!(annotated.sense(2).is_some());
    }

    #[test]
    fn test_no_candidates_stays_empty() {
        let stage = stage_with(nouns_only(), constant_classifier());
        let doc = tagged_doc("the zorblax", &[Det, Noun]);
        let annotated = stage.process(doc).unwrap();
        assert_eq!(annotated.annotated_count(), 0);
    }

    #[test]
    fn test_adjective_satellites_filtered_out() {
        let config = WsdConfig {
            pos_filter: vec![Adj],
            ..WsdConfig::default()
        };
        let stage = stage_with(config, constant_classifier());
        let low = tagged_doc("low", &[Adj]);
        let candidates = stage.candidates_for(&low.tokens[0]).unwrap();
        assert!(candidates.iter().all(|c| c.pos == WordNetPos::Adj));
        // "green" só existe como satélite
        let green = tagged_doc("green", &[Adj]);
        assert_eq!(stage.candidates_for(&green.tokens[0]), Err(SkipReason::NoCandidates));
    }

    #[test]
    fn test_bank_argmax_with_stub_model() {
        // Classificador que prefere glosas que falam de dinheiro
        let classifier = Arc::new(|pairs: &[SequencePair], _: &ClassifierOptions| -> Result<Vec<f32>> {
            Ok(pairs.iter().map(|p| if p.gloss.contains("money") { 0.9 } else { 0.1 }).collect())
        });
        let stage = stage_with(nouns_only(), classifier);
        let doc = tagged_doc("I put money in the bank", &[Pron, Verb, Noun, Adp, Det, Noun]);

        let candidates = stage.candidates_for(&doc.tokens[5]).unwrap();
        assert!(candidates.len() >= 2);

        let annotated = stage.process(doc).unwrap();
        assert_eq!(annotated.sense_id(5), Some("depository_financial_institution.n.01"));
        let assignment = annotated.sense(5).unwrap();
        assert_eq!(assignment.candidates, candidates.len());
        assert_eq!(assignment.score, 0.9);
    }

    #[test]
    fn test_bass_tokens_scored_independently() {
        // Classificador "correto": olha a vizinhança do alvo marcado
        let classifier = Arc::new(|pairs: &[SequencePair], _: &ClassifierOptions| -> Result<Vec<f32>> {
            Ok(pairs
                .iter()
                .map(|p| {
                    let after = p.context.split("\"bass\"").nth(1).unwrap_or("");
                    let cue = if after.starts_with(" player") {
                        "musical instruments"
                    } else if after.starts_with(" on") {
                        "musical range"
                    } else {
                        "spiny-finned fishes"
                    };
                    if p.gloss.contains(cue) { 1.0 } else { 0.0 }
                })
                .collect())
        });
        let stage = stage_with(nouns_only(), classifier);
        let text = "The bass player adjusted the bass on his amplifier while fishing for bass.";
        let doc = tagged_doc(
            text,
            &[Det, Noun, Noun, Verb, Det, Noun, Adp, Det, Noun, Sconj, Verb, Adp, Noun, Punct],
        );
        let annotated = stage.process(doc).unwrap();

        let ids = [1, 5, 12].map(|i| annotated.sense_id(i).unwrap().to_string());
        assert_eq!(ids, ["bass.n.07".to_string(), "bass.n.01".to_string(), "bass.n.08".to_string()]);
        assert!(annotated.sense(3).is_none(), "verbos fora do filtro");
    }

    #[test]
    fn test_single_candidate_skips_model() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let classifier = Arc::new(move |pairs: &[SequencePair], _: &ClassifierOptions| -> Result<Vec<f32>> {
            counter.fetch_add(1, Ordering::SeqCst);
            Ok(vec![0.5; pairs.len()])
        });
        let stage = stage_with(nouns_only(), classifier);
        let annotated = stage.process(tagged_doc("the amplifier", &[Det, Noun])).unwrap();
        assert_eq!(annotated.sense_id(1), Some("amplifier.n.01"));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_inference_failure_aborts_document() {
        let classifier = Arc::new(|_: &[SequencePair], _: &ClassifierOptions| -> Result<Vec<f32>> {
            Err(WsdError::Inference("tensor malformado".into()))
        });
        let stage = stage_with(nouns_only(), classifier);
        let result = stage.process(tagged_doc("the bank", &[Det, Noun]));
        assert!(matches!(result, Err(WsdError::Inference(_))));
    }

    #[test]
    fn test_assigned_ids_resolve_back() {
        let inventory = Arc::new(WordNet::builtin());
        let stage = WsdStage::new(
            WsdConfig::default(),
            inventory.clone(),
            ModelRegistry::new().load(OVERLAP_MODEL).unwrap(),
        )
        .unwrap();
        let doc = tagged_doc(
            "He went to the bank to deposit money",
            &[Pron, Verb, Adp, Det, Noun, Part, Verb, Noun],
        );
        let annotated = stage.process(doc).unwrap();
        assert!(annotated.annotated_count() >= 3);
        for (_, assignment) in annotated.annotated() {
            let resolved = inventory.resolve(&assignment.sense.id).unwrap();
            assert_eq!(resolved.id, assignment.sense.id);
        }
    }

    #[test]
    fn test_empty_document() {
        let stage = stage_with(WsdConfig::default(), constant_classifier());
        let annotated = stage.process(Document::default()).unwrap();
        assert_eq!(annotated.annotated_count(), 0);
    }

    #[test]
    fn test_reprocessing_recomputes() {
        let stage = stage_with(nouns_only(), constant_classifier());
        let first = stage.process(tagged_doc("the bank", &[Det, Noun])).unwrap();
        let verbs = stage_with(
            WsdConfig {
                pos_filter: vec![Verb],
                ..WsdConfig::default()
            },
            constant_classifier(),
        );
        let second = verbs.apply(first).unwrap();
        assert_eq!(second.annotated_count(), 0);
    }

    #[test]
    fn test_batch_matches_sequential() {
        let stage = stage_with(WsdConfig::default(), Arc::new(crate::scorer::OverlapClassifier::new()));
        let docs = vec![
            tagged_doc("the bank", &[Det, Noun]),
            tagged_doc("fishing for bass", &[Verb, Adp, Noun]),
            tagged_doc("love", &[Noun]),
        ];
        let sequential: Vec<AnnotatedDoc> = docs.iter().cloned().map(|d| stage.process(d).unwrap()).collect();
        let parallel: Vec<AnnotatedDoc> = stage
            .process_batch(docs)
            .into_iter()
            .collect::<Result<Vec<_>>>()
            .unwrap();
        assert_eq!(sequential, parallel);
    }

    #[test]
    fn test_streaming_events() {
        let stage = stage_with(nouns_only(), constant_classifier());
        let (tx, rx) = mpsc::channel();
        stage.process_streaming(tagged_doc("He went to the bank", &[Pron, Verb, Adp, Det, Noun]), tx);

        let events: Vec<WsdEvent> = rx.try_iter().collect();
        assert!(matches!(&events[0], WsdEvent::TokensReceived { total: 5, .. }));
        assert!(matches!(events.last().unwrap(), WsdEvent::Done { annotated: 1, .. }));
        assert!(events.iter().any(|e| matches!(
            e,
            WsdEvent::TokenSkipped { token_index: 1, reason: SkipReason::PosNotTracked, .. }
        )));
        assert!(events.iter().any(|e| matches!(e, WsdEvent::GlossesScored { token_index: 4, .. })));
        assert!(events.iter().any(|e| matches!(e, WsdEvent::SenseAssigned { token_index: 4, .. })));
    }

    #[test]
    fn test_streaming_error_event() {
        let classifier = Arc::new(|_: &[SequencePair], _: &ClassifierOptions| -> Result<Vec<f32>> {
            Err(WsdError::Inference("falhou".into()))
        });
        let stage = stage_with(nouns_only(), classifier);
        let (tx, rx) = mpsc::channel();
        stage.process_streaming(tagged_doc("the bank", &[Det, Noun]), tx);
        let events: Vec<WsdEvent> = rx.try_iter().collect();
        assert!(matches!(events.last().unwrap(), WsdEvent::Error { .. }));
        assert!(!events.iter().any(|e| matches!(e, WsdEvent::Done { .. })));
    }

    #[test]
    fn test_analyze_senses_lists_all_candidates() {
        let stage = stage_with(nouns_only(), constant_classifier());
        let analysis = stage
            .analyze_senses(tagged_doc("the bank and the zorblax", &[Det, Noun, Cconj, Det, Noun]))
            .unwrap();
        assert_eq!(analysis.len(), 1);
        let bank = &analysis[0];
        assert_eq!(bank.word, "bank");
        assert_eq!(bank.potential_senses.len(), 10);
        // escores iguais: vence o primeiro sentido
        assert_eq!(bank.disambiguated.as_deref(), Some("bank.n.01"));
    }

    #[test]
    fn test_component_meta() {
        let stage = stage_with(WsdConfig::default(), constant_classifier());
        let meta = stage.meta();
        assert_eq!(meta.name, "glossbert_wsd");
        assert_eq!(meta.requires, &["token.tag"]);
        assert_eq!(meta.assigns, &["token._.glossbert_synset"]);
    }
}
