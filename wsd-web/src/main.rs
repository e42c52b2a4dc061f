//! Servidor web Axum com WebSocket para visualização da desambiguação em tempo real

use axum::{
    extract::{
        ws::{Message, WebSocket, WebSocketUpgrade},
        State,
    },
    http::StatusCode,
    response::{Html, IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;
use tower_http::cors::{Any, CorsLayer};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;
use wsd_core::{
    display::{extract_records, visualization_payload, SenseRecord},
    lexicon::demo_texts,
    scorer::OVERLAP_MODEL,
    stage::SenseAnalysis,
    LexiconTagger, ModelRegistry, Pipeline, SenseInventory, Token, WordNet, WsdConfig, WsdError, WsdEvent,
    WsdStage,
};

/// Estado compartilhado da aplicação
struct AppState {
    pipeline: Pipeline,
    stage: Arc<WsdStage>,
}

#[derive(Deserialize)]
struct AnalyzeRequest {
    text: String,
}

#[derive(Deserialize)]
struct VisualizeRequest {
    text: String,
    #[serde(default)]
    style: Option<String>,
    #[serde(default)]
    title: Option<String>,
}

#[derive(Serialize)]
struct AnalyzeResponse {
    records: Vec<SenseRecord>,
    tokens: Vec<Token>,
    processing_ms: u64,
    total_tokens: usize,
    annotated: usize,
}

#[derive(Serialize)]
struct SensesResponse {
    words: Vec<SenseAnalysis>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let state = Arc::new(build_state()?);

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let app = Router::new()
        .route("/", get(index_handler))
        .route("/analyze", post(analyze_handler))
        .route("/visualize", post(visualize_handler))
        .route("/senses", post(senses_handler))
        .route("/ws", get(ws_handler))
        .route("/demo-texts", get(demo_texts_handler))
        .layer(cors)
        .with_state(state);

    let addr = std::env::var("WSD_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("🚀 Servidor WSD iniciado em http://{addr}");
    axum::serve(listener, app).await?;
    Ok(())
}

/// Monta banco léxico, estágio e pipeline a partir das variáveis de ambiente.
///
/// - `WSD_WORDNET_DIR`: diretório `dict/` do WordNet (senão, léxico embutido);
/// - `WSD_CONFIG`: arquivo JSON com a configuração do estágio;
/// - `WSD_MODEL`: sobrescreve `model_name` (padrão `gloss-overlap`).
fn build_state() -> Result<AppState, WsdError> {
    let wordnet = match std::env::var("WSD_WORDNET_DIR") {
        Ok(dir) => WordNet::from_dict_dir(&dir)?,
        Err(_) => {
            info!("WSD_WORDNET_DIR não definido, usando o léxico embutido");
            WordNet::builtin()
        }
    };
    let inventory: Arc<dyn SenseInventory> = Arc::new(wordnet);

    let mut config = match std::env::var("WSD_CONFIG") {
        Ok(path) => WsdConfig::from_json(&std::fs::read_to_string(path)?)?,
        Err(_) => WsdConfig {
            model_name: OVERLAP_MODEL.to_string(),
            ..WsdConfig::default()
        },
    };
    if let Ok(model) = std::env::var("WSD_MODEL") {
        config.model_name = model;
    }

    let registry = ModelRegistry::new();
    let stage = Arc::new(WsdStage::from_config(config, inventory.clone(), &registry)?);

    let mut pipeline = Pipeline::new(Box::new(LexiconTagger::new(inventory)));
    pipeline.add_stage(Box::new(Arc::clone(&stage)))?;
    info!(pipes = ?pipeline.pipe_names(), "pipeline montado");

    Ok(AppState { pipeline, stage })
}

/// Converte um erro da biblioteca em resposta HTTP
fn error_response(e: WsdError) -> Response {
    let status = match e {
        WsdError::InvalidStyle(_) | WsdError::Config(_) => StatusCode::BAD_REQUEST,
        WsdError::UnknownSense(_) => StatusCode::NOT_FOUND,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    if status.is_server_error() {
        error!("falha na análise: {e}");
    }
    (status, Json(serde_json::json!({"error": e.to_string()}))).into_response()
}

fn empty_text() -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(serde_json::json!({"error": "Texto vazio"})),
    )
        .into_response()
}

/// Retorna a página principal HTML
async fn index_handler() -> impl IntoResponse {
    Html(include_str!("templates/index.html"))
}

/// Desambiguação via HTTP POST (sem streaming)
async fn analyze_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return empty_text();
    }

    let start = Instant::now();
    match state.pipeline.run(&req.text) {
        Ok(doc) => Json(AnalyzeResponse {
            records: extract_records(&doc),
            total_tokens: doc.tokens().len(),
            annotated: doc.annotated_count(),
            tokens: doc.into_document().tokens,
            processing_ms: start.elapsed().as_millis() as u64,
        })
        .into_response(),
        Err(e) => error_response(e),
    }
}

/// Payload pronto para o renderizador de highlight (`ent` ou `span`)
async fn visualize_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<VisualizeRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return empty_text();
    }

    let style = req.style.as_deref().unwrap_or("ent");
    let result = state
        .pipeline
        .run(&req.text)
        .and_then(|doc| visualization_payload(&doc, style, req.title.as_deref()));
    match result {
        Ok(payload) => Json(payload).into_response(),
        Err(e) => error_response(e),
    }
}

/// Todos os sentidos possíveis de cada palavra elegível, e o escolhido
async fn senses_handler(
    State(state): State<Arc<AppState>>,
    Json(req): Json<AnalyzeRequest>,
) -> Response {
    if req.text.trim().is_empty() {
        return empty_text();
    }

    let doc = state.pipeline.make_doc(&req.text);
    match state.stage.analyze_senses(doc) {
        Ok(words) => Json(SensesResponse { words }).into_response(),
        Err(e) => error_response(e),
    }
}

/// Retorna textos de demonstração
async fn demo_texts_handler() -> impl IntoResponse {
    let texts: Vec<serde_json::Value> = demo_texts()
        .iter()
        .map(|(topic, text)| {
            serde_json::json!({
                "topic": topic,
                "text": text
            })
        })
        .collect();
    Json(texts)
}

/// Upgrade HTTP → WebSocket
async fn ws_handler(
    ws: WebSocketUpgrade,
    State(state): State<Arc<AppState>>,
) -> impl IntoResponse {
    ws.on_upgrade(move |socket| handle_websocket(socket, state))
}

/// Lógica do WebSocket: recebe texto, executa o estágio e repassa cada evento
/// ao cliente enquanto a análise ainda roda
async fn handle_websocket(mut socket: WebSocket, state: Arc<AppState>) {
    info!("WebSocket conectado");

    while let Some(Ok(msg)) = socket.recv().await {
        match msg {
            Message::Text(text) => {
                // Aceita {"text": "..."} ou o texto puro
                let text = match serde_json::from_str::<AnalyzeRequest>(&text) {
                    Ok(req) => req.text.trim().to_string(),
                    Err(_) => text.trim().to_string(),
                };
                if text.is_empty() {
                    continue;
                }

                info!("Analisando via WebSocket: {} bytes", text.len());

                let (tx, rx) = std::sync::mpsc::channel::<WsdEvent>();
                let mut live_rx = bridge_events(rx);
                let worker = Arc::clone(&state);

                // Etiquetagem + estágio são síncronos: rodam fora do runtime
                let analysis = tokio::task::spawn_blocking(move || {
                    let doc = worker.pipeline.make_doc(&text);
                    worker.stage.process_streaming(doc, tx);
                });
                // Cada evento vai para o cliente assim que o estágio o emite
                while let Some(event) = live_rx.recv().await {
                    let Ok(json) = serde_json::to_string(&event) else { continue };
                    if socket.send(Message::Text(json)).await.is_err() {
                        return; // cliente desconectou
                    }
                    // Pequena pausa para a animação passo a passo
                    tokio::time::sleep(tokio::time::Duration::from_millis(35)).await;
                }
                if let Err(e) = analysis.await {
                    warn!("tarefa de análise abortada: {e}");
                }
            }
            Message::Close(_) => {
                info!("WebSocket desconectado");
                return;
            }
            Message::Ping(payload) => {
                let _ = socket.send(Message::Pong(payload)).await;
            }
            _ => {}
        }
    }
}

/// Ponte do canal síncrono do estágio para um canal assíncrono. Cada evento
/// é repassado assim que chega; o canal fecha quando o estágio solta o `Sender`.
fn bridge_events(rx: std::sync::mpsc::Receiver<WsdEvent>) -> UnboundedReceiver<WsdEvent> {
    let (live_tx, live_rx) = tokio::sync::mpsc::unbounded_channel();
    tokio::task::spawn_blocking(move || {
        for event in rx {
            if live_tx.send(event).is_err() {
                break; // cliente já foi embora
            }
        }
    });
    live_rx
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[tokio::test]
    async fn test_bridge_forwards_while_stage_runs() {
        let (tx, rx) = std::sync::mpsc::channel();
        let mut live = bridge_events(rx);

        tx.send(WsdEvent::Error { message: "primeiro".into() }).unwrap();
        // `tx` segue aberto: o evento chega antes do fim da análise
        let first = tokio::time::timeout(Duration::from_secs(5), live.recv())
            .await
            .unwrap()
            .unwrap();
        assert!(matches!(first, WsdEvent::Error { ref message } if message == "primeiro"));

        drop(tx);
        assert!(live.recv().await.is_none());
    }
}
