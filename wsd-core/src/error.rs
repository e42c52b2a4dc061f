//! # Erros do Pipeline WSD
//!
//! Todas as falhas da biblioteca convergem para [`WsdError`]. Nenhuma delas é
//! engolida: a única situação "vazia" que não é erro é um lema sem sentidos
//! no inventário, que simplesmente deixa o token sem anotação.

use thiserror::Error;

/// Taxonomia de erros do sistema.
#[derive(Debug, Error)]
pub enum WsdError {
    /// Identificador de sentido inexistente (ou malformado) no banco léxico.
    /// Nunca deveria ocorrer para ids produzidos pelo próprio estágio.
    #[error("sentido desconhecido: `{0}`")]
    UnknownSense(String),

    /// Estilo de visualização fora de `ent` / `span`.
    #[error("estilo de visualização inválido: `{0}` (use `ent` ou `span`)")]
    InvalidStyle(String),

    /// Configuração rejeitada na construção do estágio.
    #[error("configuração inválida: {0}")]
    Config(String),

    /// O classificador falhou ou devolveu uma resposta inconsistente.
    #[error("falha na inferência do modelo: {0}")]
    Inference(String),

    /// Nenhum carregador conhece o `model_name` pedido.
    #[error("modelo não disponível: `{0}`")]
    ModelLoad(String),

    #[error("erro de E/S: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON inválido: {0}")]
    Json(#[from] serde_json::Error),

    /// Diretório do WordNet ausente, incompleto ou malformado.
    #[error("falha ao carregar o WordNet: {0}")]
    WordNet(String),
}

pub type Result<T> = std::result::Result<T, WsdError>;
