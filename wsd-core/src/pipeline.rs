//! # Pipeline — Host de Estágios
//!
//! Um host mínimo no estilo dos pipelines de NLP: um etiquetador (que
//! preenche `token.tag`/`token.pos`) seguido de uma lista ordenada de
//! estágios. Cada estágio declara o que **requer** e o que **atribui**; o
//! host recusa montar uma sequência em que algum requisito não é atendido
//! por quem vem antes.
//!
//! ```rust
//! use std::sync::Arc;
//! use wsd_core::{LexiconTagger, ModelRegistry, Pipeline, WordNet, WsdConfig, WsdStage};
//!
//! let wordnet = Arc::new(WordNet::builtin());
//! let config = WsdConfig { model_name: "gloss-overlap".into(), ..WsdConfig::default() };
//! let stage = WsdStage::from_config(config, wordnet.clone(), &ModelRegistry::new()).unwrap();
//!
//! let mut pipeline = Pipeline::new(Box::new(LexiconTagger::new(wordnet)));
//! pipeline.add_stage(Box::new(stage)).unwrap();
//! assert_eq!(pipeline.pipe_names(), vec!["tagger", "glossbert_wsd"]);
//!
//! let doc = pipeline.run("I deposited money in the bank.").unwrap();
//! assert!(doc.annotated_count() > 0);
//! ```

use std::sync::Arc;

use serde::Serialize;
use tracing::{debug, info};

use crate::document::{AnnotatedDoc, Document};
use crate::error::{Result, WsdError};
use crate::tagger::PosTagger;

/// Atributos que o etiquetador sempre fornece.
const TAGGER_ASSIGNS: &[&str] = &["token.tag", "token.pos"];

/// Metadados com que um estágio se registra no host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComponentMeta {
    pub name: &'static str,
    pub requires: &'static [&'static str],
    pub assigns: &'static [&'static str],
}

/// Um estágio do pipeline: recebe um documento anotado e devolve outro.
pub trait PipelineStage: Send + Sync {
    fn meta(&self) -> ComponentMeta;
    fn apply(&self, doc: AnnotatedDoc) -> Result<AnnotatedDoc>;
}

impl<T: PipelineStage + ?Sized> PipelineStage for Arc<T> {
    fn meta(&self) -> ComponentMeta {
        (**self).meta()
    }

    fn apply(&self, doc: AnnotatedDoc) -> Result<AnnotatedDoc> {
        (**self).apply(doc)
    }
}

/// Etiquetador + estágios, executados em ordem.
pub struct Pipeline {
    tagger: Box<dyn PosTagger>,
    stages: Vec<Box<dyn PipelineStage>>,
}

impl Pipeline {
    pub fn new(tagger: Box<dyn PosTagger>) -> Self {
        Self {
            tagger,
            stages: Vec::new(),
        }
    }

    /// Anexa um estágio ao final, se seus requisitos estiverem satisfeitos.
    pub fn add_stage(&mut self, stage: Box<dyn PipelineStage>) -> Result<&mut Self> {
        let meta = stage.meta();
        if self.pipe_names().contains(&meta.name) {
            return Err(WsdError::Config(format!("estágio '{}' já registrado", meta.name)));
        }
        if let Some(missing) = meta.requires.iter().find(|attr| !self.provides(attr)) {
            return Err(WsdError::Config(format!(
                "estágio '{}' requer '{}', que nenhum estágio anterior atribui",
                meta.name, missing
            )));
        }
        info!(stage = meta.name, "estágio adicionado ao pipeline");
        self.stages.push(stage);
        Ok(self)
    }

    fn provides(&self, attr: &str) -> bool {
        TAGGER_ASSIGNS.iter().any(|a| *a == attr)
            || self.stages.iter().any(|s| s.meta().assigns.iter().any(|a| *a == attr))
    }

    /// Nomes dos componentes, em ordem de execução.
    pub fn pipe_names(&self) -> Vec<&'static str> {
        std::iter::once("tagger")
            .chain(self.stages.iter().map(|s| s.meta().name))
            .collect()
    }

    /// Tokeniza e etiqueta, sem rodar os estágios.
    pub fn make_doc(&self, text: &str) -> Document {
        Document::from_text(text, self.tagger.as_ref())
    }

    /// Texto → documento anotado por todos os estágios.
    pub fn run(&self, text: &str) -> Result<AnnotatedDoc> {
        self.run_doc(self.make_doc(text))
    }

    /// Roda os estágios sobre um documento já etiquetado.
    pub fn run_doc(&self, doc: Document) -> Result<AnnotatedDoc> {
        let mut annotated = AnnotatedDoc::new(doc);
        for stage in &self.stages {
            debug!(stage = stage.meta().name, tokens = annotated.tokens().len(), "executando estágio");
            annotated = stage.apply(annotated)?;
        }
        Ok(annotated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tagger::LexiconTagger;
    use crate::wordnet::WordNet;

    struct Recorder {
        meta: ComponentMeta,
    }

    impl PipelineStage for Recorder {
        fn meta(&self) -> ComponentMeta {
            self.meta
        }

        fn apply(&self, doc: AnnotatedDoc) -> Result<AnnotatedDoc> {
            Ok(doc)
        }
    }

    fn recorder(name: &'static str, requires: &'static [&'static str], assigns: &'static [&'static str]) -> Box<dyn PipelineStage> {
        Box::new(Recorder {
            meta: ComponentMeta { name, requires, assigns },
        })
    }

    fn pipeline() -> Pipeline {
        Pipeline::new(Box::new(LexiconTagger::new(Arc::new(WordNet::builtin()))))
    }

    #[test]
    fn test_requires_satisfied_by_tagger() {
        let mut p = pipeline();
        assert!(p.add_stage(recorder("a", &["token.tag"], &[])).is_ok());
        assert_eq!(p.pipe_names(), vec!["tagger", "a"]);
    }

    #[test]
    fn test_requires_chain_between_stages() {
        let mut p = pipeline();
        assert!(matches!(p.add_stage(recorder("b", &["doc.ents"], &[])), Err(WsdError::Config(_))));
        p.add_stage(recorder("ner", &[], &["doc.ents"])).unwrap();
        p.add_stage(recorder("b", &["doc.ents"], &[])).unwrap();
        assert_eq!(p.pipe_names(), vec!["tagger", "ner", "b"]);
    }

    #[test]
    fn test_duplicate_names_rejected() {
        let mut p = pipeline();
        p.add_stage(recorder("a", &[], &[])).unwrap();
        assert!(p.add_stage(recorder("a", &[], &[])).is_err());
    }

    #[test]
    fn test_run_without_stages_leaves_doc_unannotated() {
        let doc = pipeline().run("The bank is closed.").unwrap();
        assert_eq!(doc.tokens().len(), 5);
        assert_eq!(doc.annotated_count(), 0);
    }

    #[test]
    fn test_arc_stage_is_a_stage() {
        let shared: Arc<dyn PipelineStage> = Arc::from(recorder("shared", &[], &[]));
        let mut p = pipeline();
        p.add_stage(Box::new(Arc::clone(&shared))).unwrap();
        assert_eq!(p.pipe_names(), vec!["tagger", "shared"]);
    }
}
