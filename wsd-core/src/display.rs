//! # Extração e Visualização
//!
//! Funções puras sobre um [`AnnotatedDoc`]: listam os sentidos atribuídos e
//! montam os dados de highlight que um renderizador manual (estilo displaCy)
//! consome.
//!
//! Dois estilos de highlight:
//! - `ent`: offsets de **caractere** no texto (`{start, end, label, kb_id}`);
//! - `span`: índices de **token**, fim exclusivo (`{start_token, end_token, label, kb_id}`).
//!
//! O rótulo é o id do sentido e `kb_id` a sua definição.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{json, Map, Value};

use crate::document::AnnotatedDoc;
use crate::error::{Result, WsdError};
use crate::tagger::CoarsePos;
use crate::wordnet::{SenseCandidate, SenseInventory};

/// Um token com sentido atribuído, pronto para exibição.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseRecord {
    pub text: String,
    pub pos: CoarsePos,
    pub synset: String,
    pub definition: String,
}

/// Todos os tokens anotados, em ordem do documento.
pub fn extract_records(doc: &AnnotatedDoc) -> Vec<SenseRecord> {
    doc.annotated()
        .map(|(token, assignment)| SenseRecord {
            text: token.text.clone(),
            pos: token.pos,
            synset: assignment.sense.id.clone(),
            definition: assignment.sense.gloss.clone(),
        })
        .collect()
}

/// O sentido do token `index`, se houver.
pub fn token_sense(doc: &AnnotatedDoc, index: usize) -> Option<&SenseCandidate> {
    doc.sense(index).map(|a| &a.sense)
}

/// Resolve um nome opcional (`lema.pos.NN`, sem distinguir maiúsculas).
/// `None` entra, `None` sai; nome desconhecido é erro.
pub fn resolve_sense(inventory: &dyn SenseInventory, id: Option<&str>) -> Result<Option<SenseCandidate>> {
    id.map(|id| inventory.resolve(id)).transpose()
}

/// Estilo de highlight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HighlightStyle {
    #[default]
    Ent,
    Span,
}

impl HighlightStyle {
    pub fn as_str(&self) -> &'static str {
        match self {
            HighlightStyle::Ent => "ent",
            HighlightStyle::Span => "span",
        }
    }
}

impl FromStr for HighlightStyle {
    type Err = WsdError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "ent" => Ok(HighlightStyle::Ent),
            "span" => Ok(HighlightStyle::Span),
            other => Err(WsdError::InvalidStyle(other.to_string())),
        }
    }
}

impl fmt::Display for HighlightStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Um trecho destacado; `label` é o id do sentido e `kb_id` a definição.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighlightSpan {
    Char {
        start: usize,
        end: usize,
        label: String,
        kb_id: String,
    },
    Token {
        start_token: usize,
        end_token: usize,
        label: String,
        kb_id: String,
    },
}

impl HighlightSpan {
    pub fn label(&self) -> &str {
        match self {
            HighlightSpan::Char { label, .. } | HighlightSpan::Token { label, .. } => label,
        }
    }
}

/// Um trecho por token anotado, no estilo pedido (`"ent"` ou `"span"`).
pub fn build_highlight_spans(doc: &AnnotatedDoc, style: &str) -> Result<Vec<HighlightSpan>> {
    Ok(highlight_spans(doc, style.parse()?))
}

fn highlight_spans(doc: &AnnotatedDoc, style: HighlightStyle) -> Vec<HighlightSpan> {
    doc.annotated()
        .map(|(token, assignment)| {
            let label = assignment.sense.id.clone();
            let kb_id = assignment.sense.gloss.clone();
            match style {
                HighlightStyle::Ent => HighlightSpan::Char {
                    start: doc.doc.char_offset(token.start),
                    end: doc.doc.char_offset(token.end),
                    label,
                    kb_id,
                },
                HighlightStyle::Span => HighlightSpan::Token {
                    start_token: token.index,
                    end_token: token.index + 1,
                    label,
                    kb_id,
                },
            }
        })
        .collect()
}

/// Payload completo para um renderizador manual.
///
/// - `ent`: `{text, ents}`;
/// - `span`: `{text, spans, tokens}`.
///
/// Mais `title` (se dado) e `options`: `ents` lista os rótulos na ordem em
/// que aparecem e `colors` mapeia rótulo → cor pela classe do sentido
/// (substantivo vermelho, verbo verde, adjetivo azul, demais cinza).
pub fn visualization_payload(doc: &AnnotatedDoc, style: &str, title: Option<&str>) -> Result<Value> {
    let style: HighlightStyle = style.parse()?;
    let spans = highlight_spans(doc, style);

    let mut payload = Map::new();
    payload.insert("text".into(), json!(doc.text()));
    match style {
        HighlightStyle::Ent => {
            payload.insert("ents".into(), serde_json::to_value(&spans)?);
        }
        HighlightStyle::Span => {
            payload.insert("spans".into(), serde_json::to_value(&spans)?);
            let tokens: Vec<&str> = doc.tokens().iter().map(|t| t.text.as_str()).collect();
            payload.insert("tokens".into(), json!(tokens));
        }
    }
    if let Some(title) = title {
        payload.insert("title".into(), json!(title));
    }

    let mut labels: Vec<&str> = Vec::new();
    let mut colors = Map::new();
    for (_, assignment) in doc.annotated() {
        let label = assignment.sense.id.as_str();
        if !colors.contains_key(label) {
            labels.push(label);
            colors.insert(label.to_string(), json!(assignment.sense.pos.color()));
        }
    }
    payload.insert("options".into(), json!({ "ents": labels, "colors": colors }));

    Ok(Value::Object(payload))
}
