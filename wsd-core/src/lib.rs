//! # wsd-core — Desambiguação de Sentido de Palavras (WSD) por Glosas
//!
//! Este crate decide, para cada palavra relevante de um texto em inglês, qual
//! dos seus significados do WordNet está em uso. "bank" em *"He went to the
//! bank to deposit money"* é a instituição financeira; em *"They sat on the
//! bank of the river"*, a margem do rio.
//!
//! ## Arquitetura do Sistema
//!
//! O dado flui em linha reta, de texto bruto até tokens anotados:
//!
//! 1.  **Tokenização** ([`tokenizer`]): segmentação com offsets em bytes.
//! 2.  **Etiquetagem** ([`tagger`]): cada token recebe uma classe gramatical (`NOUN`, `VERB`, ...).
//! 3.  **Inventário** ([`wordnet`], [`lexicon`]): busca dos sentidos candidatos de cada lema.
//! 4.  **Pontuação** ([`scorer`]): um classificador de pares (contexto, glosa) escolhe o melhor candidato.
//! 5.  **Estágio** ([`stage`]): orquestra os passos acima, token a token, emitindo eventos.
//! 6.  **Saída** ([`display`]): registros e dados de highlight para visualização.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use std::sync::Arc;
//! use wsd_core::{Document, LexiconTagger, ModelRegistry, WordNet, WsdConfig, WsdStage};
//!
//! // 1. Banco léxico e etiquetador
//! let wordnet = Arc::new(WordNet::builtin());
//! let tagger = LexiconTagger::new(wordnet.clone());
//!
//! // 2. Estágio com o classificador embutido
//! let config = WsdConfig { model_name: "gloss-overlap".into(), ..WsdConfig::default() };
//! let stage = WsdStage::from_config(config, wordnet, &ModelRegistry::new()).unwrap();
//!
//! // 3. Processa um documento
//! let doc = Document::from_text("They sat on the bank of the river.", &tagger);
//! let annotated = stage.process(doc).unwrap();
//!
//! for record in wsd_core::display::extract_records(&annotated) {
//!     println!("{} ({}) → {}: {}", record.text, record.pos, record.synset, record.definition);
//! }
//! ```
//!
//! ## Módulos Principais
//!
//! - [`stage`]: o estágio de desambiguação e sua configuração.
//! - [`pipeline`]: host mínimo que encadeia etiquetador e estágios.
//! - [`scorer`]: contrato do classificador e o modelo embutido.
//! - [`wordnet`]: leitura do banco WordNet (arquivos WNDB ou JSON).

pub mod display;
pub mod document;
pub mod error;
pub mod lexicon;
pub mod pipeline;
pub mod scorer;
pub mod stage;
pub mod tagger;
pub mod tokenizer;
pub mod wordnet;

pub use document::{AnnotatedDoc, Document, SenseAssignment};
pub use error::{Result, WsdError};
pub use pipeline::{ComponentMeta, Pipeline, PipelineStage};
pub use scorer::{GlossScorer, ModelLoader, ModelRegistry, OverlapClassifier, PairClassifier, SequencePair};
pub use stage::{WsdConfig, WsdEvent, WsdStage};
pub use tagger::{CoarsePos, LexiconTagger, PosTagger};
pub use tokenizer::Token;
pub use wordnet::{SenseCandidate, SenseInventory, WordNet, WordNetPos};
