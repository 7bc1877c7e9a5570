use crate::gui_bridge::model::VisualizationModel;
use crate::workflow::runner::Runner;
use log::{error, warn};
use serde_json::json;
use std::{
    net::SocketAddr,
    sync::{Arc, RwLock},
    thread,
};
use tokio::runtime::Builder;
use warp::{http::StatusCode, Filter};
use wavecore::{SignalError, SignalPayload, SignalResult, VisualizationSink, WaveSpec};

pub fn gui_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 9000))
}

type SharedModel = Arc<RwLock<VisualizationModel>>;

fn store(state: &SharedModel, model: VisualizationModel) -> SignalResult<()> {
    let mut guard = state
        .write()
        .map_err(|_| SignalError::Sink("visualization state poisoned".into()))?;
    *guard = model;
    Ok(())
}

fn error_reply(status: StatusCode, message: String) -> warp::reply::WithStatus<warp::reply::Json> {
    warp::reply::with_status(
        warp::reply::json(&json!({"status": "error", "message": message})),
        status,
    )
}

fn current_model(state: &SharedModel) -> warp::reply::WithStatus<warp::reply::Json> {
    match state.read() {
        Ok(guard) => warp::reply::with_status(warp::reply::json(&*guard), StatusCode::OK),
        Err(_) => error_reply(
            StatusCode::INTERNAL_SERVER_ERROR,
            "visualization state poisoned".into(),
        ),
    }
}

fn generate_and_store(
    spec: &WaveSpec,
    state: &SharedModel,
    runner: &Runner,
) -> warp::reply::WithStatus<warp::reply::Json> {
    let result = match runner.execute(spec) {
        Ok(result) => result,
        Err(err) => {
            warn!("generate error: {:#}", err);
            let status = match err.downcast_ref::<SignalError>() {
                Some(SignalError::InvalidArgument(_)) => StatusCode::BAD_REQUEST,
                _ => StatusCode::INTERNAL_SERVER_ERROR,
            };
            return error_reply(status, format!("{:#}", err));
        }
    };

    let model = VisualizationModel::from_payload(&runner.payload(&result));
    let samples = model.sample_count;
    if let Err(err) = store(state, model) {
        error!("generate error: {}", err);
        return error_reply(StatusCode::INTERNAL_SERVER_ERROR, err.to_string());
    }
    warp::reply::with_status(
        warp::reply::json(&json!({
            "status": "ok",
            "label": result.label,
            "samples": samples,
        })),
        StatusCode::OK,
    )
}

/// Sink that holds the latest rendered signal and serves it over HTTP.
pub struct GuiBridge {
    state: SharedModel,
    runner: Arc<Runner>,
}

impl GuiBridge {
    pub fn new(runner: Arc<Runner>) -> Self {
        Self {
            state: Arc::new(RwLock::new(VisualizationModel::default())),
            runner,
        }
    }

    /// Starts the HTTP endpoint on its own thread.
    ///
    /// `GET /signal` returns the current [`VisualizationModel`]; `POST /generate`
    /// accepts a [`WaveSpec`] body, generates it and replaces the model.
    pub fn serve(&self, addr: SocketAddr) -> thread::JoinHandle<()> {
        let state_for_filter = self.state.clone();
        let state_filter = warp::any().map(move || state_for_filter.clone());
        let runner = self.runner.clone();
        let runner_filter = warp::any().map(move || runner.clone());

        let get_route = warp::path("signal")
            .and(warp::get())
            .and(state_filter.clone())
            .map(|state: SharedModel| current_model(&state));

        let generate_route = warp::path("generate")
            .and(warp::post())
            .and(warp::body::json())
            .and(state_filter)
            .and(runner_filter)
            .map(|spec: WaveSpec, state: SharedModel, runner: Arc<Runner>| {
                generate_and_store(&spec, &state, &runner)
            });

        thread::spawn(move || {
            let routes = get_route.or(generate_route);
            let runtime = match Builder::new_current_thread().enable_all().build() {
                Ok(runtime) => runtime,
                Err(err) => {
                    error!("failed to build bridge runtime: {}", err);
                    return;
                }
            };
            runtime.block_on(async move {
                warp::serve(routes).run(addr).await;
            });
        })
    }

    pub fn publish_status(&self, message: &str) {
        println!("[GUI] {}", message);
    }

    #[cfg(test)]
    pub fn snapshot(&self) -> VisualizationModel {
        self.state.read().unwrap().clone()
    }
}

impl VisualizationSink for GuiBridge {
    fn render(&mut self, payload: &SignalPayload) -> SignalResult<()> {
        payload.figure.validate()?;
        store(&self.state, VisualizationModel::from_payload(payload))
    }
}
