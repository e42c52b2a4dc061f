//! # Tokenizador
//!
//! Divide o texto bruto em tokens preservando a posição original (offsets em
//! bytes). O tokenizador não é o foco do crate: hosts com um tokenizador
//! próprio podem montar os [`Token`]s diretamente e pular este módulo.
//!
//! A segmentação usa as fronteiras de palavra do Unicode (UAX #29), que já
//! tratam contrações ("don't") e números decimais ("3.5") como uma unidade.
//!
//! ## Exemplo de Uso
//!
//! ```rust
//! use wsd_core::tokenizer::tokenize;
//!
//! let tokens = tokenize("He went to the bank.");
//! assert_eq!(tokens.len(), 6);
//! assert_eq!(tokens[4].text, "bank");
//! ```

use serde::{Deserialize, Serialize};
use unicode_segmentation::UnicodeSegmentation;

use crate::tagger::CoarsePos;

/// Um token extraído do texto original.
///
/// Os offsets `start`/`end` apontam para o texto do [`Document`](crate::document::Document)
/// de origem, o que permite marcar a palavra-alvo dentro da sentença e
/// destacar o sentido escolhido na interface sem alterar a formatação.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Token {
    /// O texto do token (ex: "bass", ",", "fishing").
    pub text: String,
    /// Índice de byte inicial no texto original (inclusive).
    pub start: usize,
    /// Índice de byte final no texto original (exclusivo).
    pub end: usize,
    /// Índice sequencial do token no documento (0, 1, 2...).
    pub index: usize,
    /// Classe gramatical grossa atribuída pelo tagger (`X` até ser etiquetado).
    pub pos: CoarsePos,
}

impl Token {
    /// Cria um token já etiquetado; `end` é derivado do tamanho do texto.
    pub fn new(text: impl Into<String>, start: usize, index: usize, pos: CoarsePos) -> Self {
        let text = text.into();
        let end = start + text.len();
        Self {
            text,
            start,
            end,
            index,
            pos,
        }
    }

    /// Forma usada na consulta ao inventário de sentidos.
    pub fn lookup_form(&self) -> String {
        self.text.to_lowercase()
    }
}

/// Tokeniza um texto. Os tokens saem com `pos = X`; a etiquetagem fica a
/// cargo de um [`PosTagger`](crate::tagger::PosTagger).
pub fn tokenize(text: &str) -> Vec<Token> {
    text.split_word_bound_indices()
        .filter(|(_, segment)| !segment.trim().is_empty())
        .enumerate()
        .map(|(index, (start, segment))| Token::new(segment, start, index, CoarsePos::X))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tokenize_basic() {
        let tokens = tokenize("The bass player adjusted the bass.");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, vec!["The", "bass", "player", "adjusted", "the", "bass", "."]);
    }

    #[test]
    fn test_tokenize_offsets_and_indices() {
        let text = "He went to the bank.";
        let tokens = tokenize(text);
        for (i, token) in tokens.iter().enumerate() {
            assert_eq!(token.index, i);
            assert_eq!(&text[token.start..token.end], token.text);
        }
    }

    #[test]
    fn test_tokenize_contraction_and_unicode() {
        let tokens = tokenize("Don't touch the café's bass");
        let texts: Vec<&str> = tokens.iter().map(|t| t.text.as_str()).collect();
        assert!(texts.contains(&"Don't"));
        assert!(texts.contains(&"café's"));
    }

    #[test]
    fn test_tokenize_empty() {
        assert!(tokenize("").is_empty());
        assert!(tokenize("   \n\t").is_empty());
    }

    #[test]
    fn test_lookup_form_lowercases() {
        let token = Token::new("Bank", 0, 0, CoarsePos::Noun);
        assert_eq!(token.lookup_form(), "bank");
        assert_eq!(token.end, 4);
    }
}
