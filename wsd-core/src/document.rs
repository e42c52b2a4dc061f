//! # Documento e Anotações
//!
//! O [`Document`] é o texto com seus tokens etiquetados. O [`AnnotatedDoc`] é
//! o resultado do estágio WSD: o mesmo documento acompanhado de um mapa
//! auxiliar `índice do token → sentido escolhido (ou nenhum)`.
//!
//! As anotações vivem fora dos tokens: quem processa um documento recebe um
//! valor novo, e reprocessar recalcula tudo do zero.

use std::ops::Range;

use serde::{Deserialize, Serialize};

use crate::tagger::PosTagger;
use crate::tokenizer::{tokenize, Token};
use crate::wordnet::SenseCandidate;

/// Texto + tokens etiquetados.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    pub text: String,
    pub tokens: Vec<Token>,
}

impl Document {
    pub fn new(text: impl Into<String>, tokens: Vec<Token>) -> Self {
        Self {
            text: text.into(),
            tokens,
        }
    }

    /// Tokeniza e etiqueta `text`.
    pub fn from_text(text: impl Into<String>, tagger: &dyn PosTagger) -> Self {
        let text = text.into();
        let mut tokens = tokenize(&text);
        tagger.tag(&mut tokens);
        Self { text, tokens }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Intervalo em bytes da sentença que contém o token `index`.
    ///
    /// Sentenças terminam em `.`, `!` ou `?`. O intervalo vai do primeiro ao
    /// último token da sentença (sem espaços nas bordas).
    pub fn sentence_range(&self, index: usize) -> Range<usize> {
        let Some(token) = self.tokens.get(index) else {
            return 0..0;
        };
        let is_boundary = |t: &Token| matches!(t.text.as_str(), "." | "!" | "?");

        let first = self.tokens[..index]
            .iter()
            .rposition(is_boundary)
            .map_or(0, |i| i + 1);
        let last = self.tokens[index..]
            .iter()
            .position(is_boundary)
            .map_or(self.tokens.len() - 1, |i| index + i);

        let start = self.tokens.get(first).map_or(token.start, |t| t.start);
        let end = self.tokens.get(last).map_or(token.end, |t| t.end);
        start..end
    }

    /// Converte um offset em bytes para offset em caracteres (o que os
    /// renderizadores de highlight esperam).
    pub fn char_offset(&self, byte: usize) -> usize {
        let byte = byte.min(self.text.len());
        self.text
            .char_indices()
            .take_while(|(i, _)| *i < byte)
            .count()
    }
}

/// O sentido escolhido para um token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseAssignment {
    pub token_index: usize,
    pub sense: SenseCandidate,
    /// Escore do classificador (1.0 quando havia um único candidato).
    pub score: f32,
    /// Quantos candidatos disputaram.
    pub candidates: usize,
}

/// Documento processado pelo estágio WSD.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedDoc {
    pub doc: Document,
    senses: Vec<Option<SenseAssignment>>,
}

impl AnnotatedDoc {
    /// Documento sem nenhuma anotação.
    pub fn new(doc: Document) -> Self {
        let senses = vec![None; doc.tokens.len()];
        Self { doc, senses }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.doc.tokens
    }

    pub fn text(&self) -> &str {
        &self.doc.text
    }

    pub fn sense(&self, index: usize) -> Option<&SenseAssignment> {
        self.senses.get(index).and_then(Option::as_ref)
    }

    /// O identificador do sentido do token (ex: "bank.n.01"), se houver.
    pub fn sense_id(&self, index: usize) -> Option<&str> {
        self.sense(index).map(|s| s.sense.id.as_str())
    }

    /// Substitui a anotação de um token. Índices fora do documento são ignorados.
    pub fn set_sense(&mut self, index: usize, assignment: Option<SenseAssignment>) {
        if let Some(slot) = self.senses.get_mut(index) {
            *slot = assignment;
        }
    }

    /// Remove todas as anotações.
    pub fn clear(&mut self) {
        self.senses.iter_mut().for_each(|slot| *slot = None);
    }

    /// Tokens anotados, em ordem do documento.
    pub fn annotated(&self) -> impl Iterator<Item = (&Token, &SenseAssignment)> {
        self.doc
            .tokens
            .iter()
            .zip(&self.senses)
            .filter_map(|(token, sense)| sense.as_ref().map(|s| (token, s)))
    }

    pub fn annotated_count(&self) -> usize {
        self.senses.iter().filter(|s| s.is_some()).count()
    }

    pub fn into_document(self) -> Document {
        self.doc
    }
}
