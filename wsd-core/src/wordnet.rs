//! # Inventário de Sentidos (WordNet)
//!
//! O inventário responde a duas perguntas:
//!
//! 1. **Quais sentidos uma palavra pode ter?** `lookup("bass", Noun)` devolve
//!    os synsets candidatos na ordem do banco (sentido mais frequente primeiro).
//! 2. **O que é este sentido?** `resolve("bass.n.07")` devolve o candidato
//!    com sua glosa e classe gramatical.
//!
//! `resolve` segue o endereçamento do próprio WordNet: `bank.n.02` é o
//! segundo sentido substantivo de "bank", seja qual for o nome canônico desse
//! synset (aqui, `depository_financial_institution.n.01`). O nome é comparado
//! em minúsculas.
//!
//! ## Identificadores
//!
//! Os sentidos usam o nome canônico `lema.pos.NN`: o primeiro lema do synset,
//! a letra de POS e a posição (1-based) do synset na lista de sentidos desse
//! lema. Ex: `bass.n.07` — "the member with the lowest range of a family of
//! musical instruments".
//!
//! ## Formas flexionadas
//!
//! Como o próprio WordNet, o banco resolve formas flexionadas antes da
//! consulta. As listas de exceção (`went` → `go`) e as regras de remoção de
//! sufixo (`fishing` → `fish`) vêm do [`wordnet_morphy::Morphy`]; o léxico
//! embutido e os snapshots JSON trazem as próprias exceções.
//!
//! ## Fontes
//!
//! - [`WordNet::from_dict_dir`]: arquivos WNDB do Princeton WordNet
//!   (`index.*`, `data.*`, `*.exc`), lidos pelo `wordnet-db`.
//! - [`WordNet::from_json`]: snapshot serializado com serde.
//! - [`WordNet::builtin`]: léxico embutido com as palavras das frases de demonstração.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use wordnet_db::LoadMode;
use wordnet_morphy::Morphy;
use wordnet_types::{Pos, Synset, SynsetId, SynsetType};

use crate::error::{Result, WsdError};

/// Código de classe gramatical do WordNet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum WordNetPos {
    #[serde(rename = "n")]
    Noun,
    #[serde(rename = "v")]
    Verb,
    #[serde(rename = "a")]
    Adj,
    /// Adjetivo satélite: listado no índice de adjetivos, mas com letra própria.
    #[serde(rename = "s")]
    AdjSatellite,
    #[serde(rename = "r")]
    Adv,
}

impl WordNetPos {
    pub fn letter(&self) -> char {
        match self {
            WordNetPos::Noun => 'n',
            WordNetPos::Verb => 'v',
            WordNetPos::Adj => 'a',
            WordNetPos::AdjSatellite => 's',
            WordNetPos::Adv => 'r',
        }
    }

    pub fn from_letter(c: char) -> Option<Self> {
        match c {
            'n' => Some(WordNetPos::Noun),
            'v' => Some(WordNetPos::Verb),
            'a' => Some(WordNetPos::Adj),
            's' => Some(WordNetPos::AdjSatellite),
            'r' => Some(WordNetPos::Adv),
            _ => None,
        }
    }

    /// Classe sob a qual a palavra aparece nos índices (satélites → `a`).
    pub fn index_pos(&self) -> WordNetPos {
        match self {
            WordNetPos::AdjSatellite => WordNetPos::Adj,
            other => *other,
        }
    }

    /// Nome legível (ex: "NOUN"), usado como legenda na visualização.
    pub fn name(&self) -> &'static str {
        match self.index_pos() {
            WordNetPos::Noun => "NOUN",
            WordNetPos::Verb => "VERB",
            WordNetPos::Adv => "ADV",
            _ => "ADJ",
        }
    }

    /// Cor CSS para highlight na UI
    pub fn color(&self) -> &'static str {
        match self.index_pos() {
            WordNetPos::Noun => "#ff6666", // vermelho
            WordNetPos::Verb => "#66ff66", // verde
            WordNetPos::Adj => "#6666ff",  // azul
            _ => "#999999",                // cinza
        }
    }

    fn db_pos(&self) -> Pos {
        match self.index_pos() {
            WordNetPos::Noun => Pos::Noun,
            WordNetPos::Verb => Pos::Verb,
            WordNetPos::Adv => Pos::Adv,
            _ => Pos::Adj,
        }
    }

    fn from_db(pos: Pos) -> Self {
        match pos {
            Pos::Noun => WordNetPos::Noun,
            Pos::Verb => WordNetPos::Verb,
            Pos::Adv => WordNetPos::Adv,
            _ => WordNetPos::Adj,
        }
    }
}

impl std::fmt::Display for WordNetPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.letter())
    }
}

/// Um sentido candidato (synset): identificador estável, classe e glosa.
///
/// Imutável do ponto de vista do pipeline: o estágio só escolhe entre
/// candidatos, nunca os cria.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SenseCandidate {
    /// Nome canônico (ex: "bank.n.01").
    pub id: String,
    pub pos: WordNetPos,
    /// Definição textual, sem os exemplos de uso.
    pub gloss: String,
    /// Sinônimos do synset (com `_` no lugar de espaços).
    #[serde(default)]
    pub lemmas: Vec<String>,
    /// Frases de exemplo que acompanham a glosa no WordNet.
    #[serde(default)]
    pub examples: Vec<String>,
}

/// Contrato do banco léxico consumido pelo estágio e pelos helpers.
pub trait SenseInventory: Send + Sync {
    /// Candidatos para `lemma` sob `pos`, na ordem do banco. Lema desconhecido
    /// resulta em lista vazia, nunca em erro.
    fn lookup(&self, lemma: &str, pos: WordNetPos) -> Vec<SenseCandidate>;

    /// Resolve um nome `lema.pos.NN` para o candidato. Lema desconhecido ou
    /// número fora da lista de sentidos resultam em `UnknownSense`.
    fn resolve(&self, id: &str) -> Result<SenseCandidate>;
}

/// Diretório sem `*.exc`: o `Morphy` carregado daqui só aplica as regras de sufixo.
const NO_EXCEPTIONS_DIR: &str = "/nonexistent";

fn suffix_rules() -> Option<Arc<Morphy>> {
    Morphy::load(NO_EXCEPTIONS_DIR).ok().map(Arc::new)
}

/// Banco WordNet em memória.
#[derive(Clone, Serialize, Deserialize)]
pub struct WordNet {
    /// id → synset
    synsets: HashMap<String, SenseCandidate>,
    /// POS do índice → lema → ids, na ordem de frequência
    index: HashMap<WordNetPos, HashMap<String, Vec<String>>>,
    /// POS → forma flexionada → formas base
    #[serde(default)]
    exceptions: HashMap<WordNetPos, HashMap<String, Vec<String>>>,
    /// Regras de sufixo e, se carregado de um `dict/`, as listas `*.exc`
    #[serde(skip, default = "suffix_rules")]
    morph: Option<Arc<Morphy>>,
}

impl Default for WordNet {
    fn default() -> Self {
        Self {
            synsets: HashMap::new(),
            index: HashMap::new(),
            exceptions: HashMap::new(),
            morph: suffix_rules(),
        }
    }
}

impl std::fmt::Debug for WordNet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("WordNet")
            .field("synsets", &self.synsets.len())
            .field("exceptions", &self.exceptions.values().map(HashMap::len).sum::<usize>())
            .finish_non_exhaustive()
    }
}

impl WordNet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adiciona um synset e o registra no índice de cada um dos seus lemas,
    /// ao final da lista de sentidos já conhecida.
    pub fn insert(&mut self, candidate: SenseCandidate) {
        let index_pos = candidate.pos.index_pos();
        for lemma in &candidate.lemmas {
            let ids = self
                .index
                .entry(index_pos)
                .or_default()
                .entry(lemma.to_lowercase())
                .or_default();
            if !ids.contains(&candidate.id) {
                ids.push(candidate.id.clone());
            }
        }
        self.synsets.insert(candidate.id.clone(), candidate);
    }

    /// Registra uma forma flexionada irregular (ex: "went" → "go").
    pub fn insert_exception(&mut self, pos: WordNetPos, inflected: &str, base: &str) {
        let bases = self
            .exceptions
            .entry(pos.index_pos())
            .or_default()
            .entry(inflected.to_lowercase())
            .or_default();
        if !bases.iter().any(|b| b == base) {
            bases.push(base.to_string());
        }
    }

    /// Número de synsets carregados.
    pub fn len(&self) -> usize {
        self.synsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.synsets.is_empty()
    }

    fn has_lemma(&self, pos: WordNetPos, lemma: &str) -> bool {
        self.index
            .get(&pos.index_pos())
            .is_some_and(|lemmas| lemmas.contains_key(lemma))
    }

    /// Formas base presentes no índice para `form`: a própria forma, se
    /// indexada, depois as exceções e as regras de sufixo.
    pub fn morphy(&self, form: &str, pos: WordNetPos) -> Vec<String> {
        let pos = pos.index_pos();
        let form = form.to_lowercase();

        let mut forms = Vec::new();
        if self.has_lemma(pos, &form) {
            forms.push(form.clone());
        }
        if let Some(bases) = self.exceptions.get(&pos).and_then(|exc| exc.get(&form)) {
            forms.extend(bases.iter().filter(|b| self.has_lemma(pos, b)).cloned());
        }
        if let Some(morph) = &self.morph {
            let exists = |p: Pos, lemma: &str| self.has_lemma(WordNetPos::from_db(p), lemma);
            forms.extend(
                morph
                    .lemmas_for(pos.db_pos(), &form, exists)
                    .into_iter()
                    .map(|candidate| candidate.lemma.into_owned()),
            );
        }

        let mut seen = HashSet::new();
        forms.retain(|f| seen.insert(f.clone()));
        forms
    }

    /// Carrega um snapshot JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Serializa synsets, índice e exceções registradas com
    /// [`insert_exception`](Self::insert_exception). As listas `*.exc` de um
    /// `dict/` ficam de fora.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Carrega os arquivos WNDB de um diretório `dict/` do WordNet.
    ///
    /// `index.*` e `data.*` são lidos pelo `wordnet-db` (todos obrigatórios);
    /// as listas `*.exc`, opcionais, pelo `wordnet-morphy`. Cada synset recebe
    /// o nome `lema.pos.NN` do seu primeiro lema.
    pub fn from_dict_dir(dir: impl AsRef<Path>) -> Result<Self> {
        let dir = dir.as_ref();
        let db = wordnet_db::WordNet::load_with_mode(dir, LoadMode::Owned)
            .map_err(|e| WsdError::WordNet(format!("{e:#}")))?;
        let morph = Morphy::load(dir).map_err(|e| WsdError::WordNet(format!("{e:#}")))?;

        let mut ids: HashMap<SynsetId, String> = HashMap::with_capacity(db.synset_count());
        for synset in db.iter_synsets() {
            let Some(first) = synset.words.first() else { continue };
            let first = clean_lemma(first.text).to_lowercase();
            let Some(position) = db
                .synsets_for_lemma(synset.id.pos, &first)
                .iter()
                .position(|id| *id == synset.id)
            else {
                warn!(offset = synset.id.offset, lemma = %first, "synset ausente do índice do próprio lema");
                continue;
            };
            let pos = synset_pos(&synset);
            ids.insert(synset.id, format!("{first}.{}.{:02}", pos.letter(), position + 1));
        }

        let mut wordnet = WordNet {
            morph: Some(Arc::new(morph)),
            ..WordNet::default()
        };
        for synset in db.iter_synsets() {
            let Some(id) = ids.get(&synset.id) else { continue };
            let pos = synset_pos(&synset);
            let lemmas: Vec<String> = synset.words.iter().map(|w| clean_lemma(w.text).to_string()).collect();

            let index = wordnet.index.entry(pos.index_pos()).or_default();
            for lemma in &lemmas {
                let lemma = lemma.to_lowercase();
                if index.contains_key(&lemma) {
                    continue;
                }
                let senses: Vec<String> = db
                    .synsets_for_lemma(synset.id.pos, &lemma)
                    .iter()
                    .filter_map(|sid| ids.get(sid).cloned())
                    .collect();
                index.insert(lemma, senses);
            }

            wordnet.synsets.insert(
                id.clone(),
                SenseCandidate {
                    id: id.clone(),
                    pos,
                    gloss: synset.gloss.definition.to_string(),
                    lemmas,
                    examples: synset.gloss.examples.iter().map(|e| e.to_string()).collect(),
                },
            );
        }

        info!(synsets = wordnet.len(), dir = %dir.display(), "WordNet carregado");
        Ok(wordnet)
    }
}

impl SenseInventory for WordNet {
    fn lookup(&self, lemma: &str, pos: WordNetPos) -> Vec<SenseCandidate> {
        let index_pos = pos.index_pos();
        let Some(lemmas) = self.index.get(&index_pos) else {
            return vec![];
        };

        let mut seen = HashSet::new();
        self.morphy(lemma, index_pos)
            .iter()
            .filter_map(|form| lemmas.get(form))
            .flatten()
            .filter(|id| seen.insert(id.as_str()))
            .filter_map(|id| self.synsets.get(id))
            .cloned()
            .collect()
    }

    fn resolve(&self, id: &str) -> Result<SenseCandidate> {
        let name = id.to_lowercase();
        let Some((lemma, pos, number)) = split_sense_name(&name) else {
            return Err(WsdError::UnknownSense(format!("{id} (formato esperado: lema.pos.NN)")));
        };

        let addressed = self
            .index
            .get(&pos.index_pos())
            .and_then(|lemmas| lemmas.get(lemma))
            .and_then(|ids| ids.get(number.checked_sub(1)?))
            .and_then(|id| self.synsets.get(id))
            // `lema.s.NN` só aceita satélites
            .filter(|c| pos != WordNetPos::AdjSatellite || c.pos == WordNetPos::AdjSatellite);

        // nomes canônicos do banco sempre resolvem, mesmo num léxico parcial
        addressed
            .or_else(|| self.synsets.get(&name))
            .cloned()
            .ok_or_else(|| WsdError::UnknownSense(id.to_string()))
    }
}

/// Decompõe `lema.pos.NN`, com `pos` em {n, v, a, s, r} e `NN` numérico.
fn split_sense_name(name: &str) -> Option<(&str, WordNetPos, usize)> {
    let mut parts = name.rsplitn(3, '.');
    let (number, pos, lemma) = (parts.next()?, parts.next()?, parts.next()?);
    if lemma.is_empty() || number.is_empty() || !number.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    let mut letters = pos.chars();
    let pos = match (letters.next(), letters.next()) {
        (Some(c), None) => WordNetPos::from_letter(c)?,
        _ => return None,
    };
    Some((lemma, pos, number.parse().ok()?))
}

/// Classe do synset, distinguindo satélites dos adjetivos comuns.
fn synset_pos(synset: &Synset<'_>) -> WordNetPos {
    if SynsetType::from_char('s').as_ref() == Some(&synset.synset_type) {
        WordNetPos::AdjSatellite
    } else {
        WordNetPos::from_db(synset.id.pos)
    }
}

/// Remove marcadores sintáticos de adjetivos ("galore(ip)" → "galore").
fn clean_lemma(word: &str) -> &str {
    match word.find('(') {
        Some(i) => &word[..i],
        None => word,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn candidate(id: &str, pos: WordNetPos, lemmas: &[&str], gloss: &str) -> SenseCandidate {
        SenseCandidate {
            id: id.to_string(),
            pos,
            gloss: gloss.to_string(),
            lemmas: lemmas.iter().map(|l| l.to_string()).collect(),
            examples: vec![],
        }
    }

    /// Diretório WNDB mínimo: bank (2 sentidos), go (+ `verb.exc`), low (a + s).
    fn write_dict(dir: &Path) {
        let license = "  1 This software and database is being provided to you, the LICENSEE\n";

        fs::write(
            dir.join("index.noun"),
            format!("{license}bank n 2 1 @ 2 1 00000100 00000200  \ndepository_financial_institution n 1 1 @ 1 0 00000200  \n"),
        )
        .unwrap();
        fs::write(
            dir.join("data.noun"),
            format!(
                "{license}00000100 17 n 01 bank 0 000 | sloping land (especially the slope beside a body of water); \"they pulled the canoe up on the bank\"  \n\
                 00000200 14 n 02 depository_financial_institution 0 bank 0 000 | a financial institution that accepts deposits  \n"
            ),
        )
        .unwrap();
        fs::write(dir.join("index.verb"), "go v 1 0 1 0 00000300  \n").unwrap();
        fs::write(dir.join("data.verb"), "00000300 38 v 01 go 0 000 00 | follow a procedure or take a course  \n").unwrap();
        fs::write(dir.join("verb.exc"), "went go\n").unwrap();
        fs::write(dir.join("index.adj"), "low a 2 0 2 0 00000400 00000500  \n").unwrap();
        fs::write(
            dir.join("data.adj"),
            "00000400 00 a 01 low 0 000 | less than normal in degree or intensity or amount  \n\
             00000500 00 s 01 low(p) 0 000 | very low in volume  \n",
        )
        .unwrap();
        fs::write(dir.join("index.adv"), "").unwrap();
        fs::write(dir.join("data.adv"), "").unwrap();
    }

    #[test]
    fn test_lookup_preserves_inventory_order() {
        let mut wn = WordNet::new();
        wn.insert(candidate("bank.n.01", WordNetPos::Noun, &["bank"], "sloping land"));
        wn.insert(candidate("depository_financial_institution.n.01", WordNetPos::Noun, &["depository_financial_institution", "bank"], "a financial institution"));
        let ids: Vec<String> = wn.lookup("bank", WordNetPos::Noun).into_iter().map(|c| c.id).collect();
        assert_eq!(ids, vec!["bank.n.01", "depository_financial_institution.n.01"]);
    }

    #[test]
    fn test_lookup_unknown_is_empty() {
        let wn = WordNet::builtin();
        assert!(wn.lookup("flibbertigibbet", WordNetPos::Noun).is_empty());
        assert!(wn.lookup("bank", WordNetPos::Adv).is_empty());
    }

    #[test]
    fn test_bank_has_multiple_noun_senses() {
        let wn = WordNet::builtin();
        let senses = wn.lookup("bank", WordNetPos::Noun);
        assert!(senses.len() >= 2);
        assert!(senses.iter().all(|s| s.pos == WordNetPos::Noun));
        assert!(senses.iter().any(|s| s.gloss.contains("financial institution")));
        assert!(senses.iter().any(|s| s.gloss.contains("sloping land")));
    }

    #[test]
    fn test_morphy_rules_and_exceptions() {
        let wn = WordNet::builtin();
        assert_eq!(wn.morphy("fishing", WordNetPos::Verb), vec!["fish"]);
        assert_eq!(wn.morphy("adjusted", WordNetPos::Verb), vec!["adjust"]);
        assert_eq!(wn.morphy("went", WordNetPos::Verb), vec!["go"]);
        assert_eq!(wn.morphy("leaves", WordNetPos::Noun), vec!["leaf"]);
        assert_eq!(wn.morphy("falling", WordNetPos::Verb), vec!["fall"]);
        // "fishing" também é substantivo por si só
        assert_eq!(wn.morphy("fishing", WordNetPos::Noun), vec!["fishing"]);
        assert!(wn.morphy("xyz", WordNetPos::Noun).is_empty());
    }

    #[test]
    fn test_morphy_strips_doubled_consonant() {
        let mut wn = WordNet::new();
        wn.insert(candidate("run.v.01", WordNetPos::Verb, &["run"], "move fast by using one's feet"));
        assert_eq!(wn.morphy("running", WordNetPos::Verb), vec!["run"]);
        assert_eq!(wn.morphy("Runs", WordNetPos::Verb), vec!["run"]);
    }

    #[test]
    fn test_resolve_roundtrip() {
        let wn = WordNet::builtin();
        for candidate in wn.lookup("bass", WordNetPos::Noun) {
            let resolved = wn.resolve(&candidate.id).unwrap();
            assert_eq!(resolved.id, candidate.id);
            assert_eq!(resolved, candidate);
        }
    }

    #[test]
    fn test_resolve_addresses_lemma_sense_list() {
        let wn = WordNet::builtin();
        assert_eq!(
            wn.resolve("bank.n.02").unwrap().id,
            "depository_financial_institution.n.01"
        );
        assert_eq!(wn.resolve("bank.n.08").unwrap().id, "savings_bank.n.02");
        assert_eq!(wn.resolve("h2o.n.01").unwrap().id, "water.n.01");
    }

    #[test]
    fn test_resolve_ignores_case() {
        let wn = WordNet::builtin();
        assert_eq!(wn.resolve("Bank.N.01").unwrap().id, "bank.n.01");
        assert_eq!(wn.resolve("BASS.n.07").unwrap().id, "bass.n.07");
    }

    #[test]
    fn test_resolve_unknown_and_malformed() {
        let wn = WordNet::builtin();
        assert!(matches!(wn.resolve("bank.n.99"), Err(WsdError::UnknownSense(_))));
        assert!(matches!(wn.resolve("bank.n.00"), Err(WsdError::UnknownSense(_))));
        assert!(matches!(wn.resolve("zorblax.n.01"), Err(WsdError::UnknownSense(_))));
        assert!(matches!(wn.resolve("bank"), Err(WsdError::UnknownSense(_))));
        assert!(matches!(wn.resolve("bank.q.01"), Err(WsdError::UnknownSense(_))));
        assert!(matches!(wn.resolve("bank.n.x1"), Err(WsdError::UnknownSense(_))));
    }

    #[test]
    fn test_resolve_satellite_name_rejects_head_adjective() {
        let wn = WordNet::builtin();
        assert_eq!(wn.resolve("low.s.03").unwrap().pos, WordNetPos::AdjSatellite);
        // o primeiro sentido de "low" é um adjetivo comum
        assert_eq!(wn.resolve("low.a.01").unwrap().pos, WordNetPos::Adj);
        assert!(matches!(wn.resolve("low.s.01"), Err(WsdError::UnknownSense(_))));
    }

    #[test]
    fn test_adjective_lookup_includes_satellites_from_index() {
        let wn = WordNet::builtin();
        let low = wn.lookup("low", WordNetPos::Adj);
        assert!(low.iter().any(|s| s.pos == WordNetPos::Adj));
        assert!(low.iter().any(|s| s.pos == WordNetPos::AdjSatellite));
    }

    #[test]
    fn test_json_snapshot_roundtrip() {
        let wn = WordNet::builtin();
        let restored = WordNet::from_json(&wn.to_json().unwrap()).unwrap();
        assert_eq!(restored.len(), wn.len());
        assert_eq!(
            restored.lookup("went", WordNetPos::Verb),
            wn.lookup("went", WordNetPos::Verb)
        );
        // as regras de sufixo não fazem parte do snapshot, mas continuam valendo
        assert_eq!(restored.morphy("fishing", WordNetPos::Verb), vec!["fish"]);
    }

    #[test]
    fn test_from_dict_dir() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path());

        let wn = WordNet::from_dict_dir(dir.path()).unwrap();
        assert_eq!(wn.len(), 5);

        let bank: Vec<SenseCandidate> = wn.lookup("bank", WordNetPos::Noun);
        let ids: Vec<&str> = bank.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["bank.n.01", "depository_financial_institution.n.01"]);
        assert_eq!(bank[0].gloss, "sloping land (especially the slope beside a body of water)");
        assert_eq!(bank[0].examples, vec!["they pulled the canoe up on the bank"]);
        assert_eq!(bank[1].lemmas, vec!["depository_financial_institution", "bank"]);
        assert_eq!(wn.resolve("bank.n.02").unwrap(), bank[1]);

        let went = wn.lookup("went", WordNetPos::Verb);
        assert_eq!(went.len(), 1);
        assert_eq!(went[0].id, "go.v.01");

        let low = wn.lookup("low", WordNetPos::Adj);
        assert_eq!(low[1].id, "low.s.02");
        assert_eq!(low[1].lemmas, vec!["low"]);
        assert_eq!(wn.resolve("low.s.02").unwrap().gloss, "very low in volume");
    }

    #[test]
    fn test_from_dict_dir_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(WordNet::from_dict_dir(dir.path()), Err(WsdError::WordNet(_))));
    }

    #[test]
    fn test_from_dict_dir_malformed_index() {
        let dir = tempfile::tempdir().unwrap();
        write_dict(dir.path());
        fs::write(dir.path().join("index.noun"), "bank n x 1\n").unwrap();
        match WordNet::from_dict_dir(dir.path()) {
            Err(WsdError::WordNet(message)) => assert!(message.contains(":1"), "{message}"),
            other => panic!("resultado inesperado: {other:?}"),
        }
    }
}
