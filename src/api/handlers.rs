//! Pod endpoint handlers
//!
//! Each handler binds its parameters, calls the pod service and wraps the
//! result in the response envelope. Binding failures are reported through
//! the same envelope instead of axum's plain-text rejections.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use k8s_openapi::api::core::v1::Pod;
use serde::{Deserialize, Deserializer};
use tracing::{error, info};

use super::AppState;
use super::response::{Envelope, done, ok};
use crate::dataselect::Selection;
use crate::error::{Error, Result};
use crate::service::NamespacePodCount;

#[derive(Debug, Default, Deserialize)]
pub struct ListPodsParams {
    #[serde(default)]
    pub filter_name: String,
    #[serde(default)]
    pub namespace: String,
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub limit: i64,
    #[serde(default, deserialize_with = "empty_as_zero")]
    pub page: i64,
}

/// Form-style integer: an empty value (`limit=`) reads as 0
fn empty_as_zero<'de, D>(deserializer: D) -> std::result::Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if raw.is_empty() {
        return Ok(0);
    }
    raw.parse().map_err(serde::de::Error::custom)
}

#[derive(Debug, Default, Deserialize)]
pub struct PodParams {
    #[serde(default)]
    pub pod_name: String,
    #[serde(default)]
    pub namespace: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdatePodParams {
    #[serde(default)]
    pub pod_name: String,
    #[serde(default)]
    pub namespace: String,
    pub content: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct PodLogParams {
    #[serde(default)]
    pub container_name: String,
    #[serde(default)]
    pub pod_name: String,
    #[serde(default)]
    pub namespace: String,
}

fn bind_query<T>(params: std::result::Result<Query<T>, QueryRejection>) -> Result<T> {
    params.map(|Query(p)| p).map_err(|e| {
        error!(error = %e, "Failed to bind query parameters");
        Error::BadRequest(e.body_text())
    })
}

fn bind_json<T>(params: std::result::Result<Json<T>, JsonRejection>) -> Result<T> {
    params.map(|Json(p)| p).map_err(|e| {
        error!(error = %e, "Failed to bind JSON body");
        Error::BadRequest(e.body_text())
    })
}

fn require(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(Error::BadRequest(format!("{} is required", field)));
    }
    Ok(())
}

/// GET /api/k8s/pods
pub async fn get_pods(
    State(state): State<AppState>,
    params: std::result::Result<Query<ListPodsParams>, QueryRejection>,
) -> Result<Json<Envelope<Selection<Pod>>>> {
    let params = bind_query(params)?;

    let data = state
        .pods
        .get_pods(&params.filter_name, &params.namespace, params.limit, params.page)
        .await?;

    Ok(ok("Listed pods", data))
}

/// GET /api/k8s/pods/detail
pub async fn get_pod_detail(
    State(state): State<AppState>,
    params: std::result::Result<Query<PodParams>, QueryRejection>,
) -> Result<Json<Envelope<Pod>>> {
    let params = bind_query(params)?;
    require("pod_name", &params.pod_name)?;
    require("namespace", &params.namespace)?;

    let data = state
        .pods
        .get_pod_detail(&params.pod_name, &params.namespace)
        .await?;

    Ok(ok("Fetched pod detail", data))
}

/// DELETE /api/k8s/pod/del
pub async fn delete_pod(
    State(state): State<AppState>,
    params: std::result::Result<Json<PodParams>, JsonRejection>,
) -> Result<Json<Envelope<()>>> {
    let params = bind_json(params)?;
    require("pod_name", &params.pod_name)?;
    require("namespace", &params.namespace)?;

    state
        .pods
        .delete_pod(&params.pod_name, &params.namespace)
        .await?;

    info!(pod = %params.pod_name, namespace = %params.namespace, "Deleted pod");
    Ok(done("Deleted pod"))
}

/// PUT /api/k8s/pod/update
pub async fn update_pod(
    State(state): State<AppState>,
    params: std::result::Result<Json<UpdatePodParams>, JsonRejection>,
) -> Result<Json<Envelope<()>>> {
    let params = bind_json(params)?;
    require("namespace", &params.namespace)?;

    state
        .pods
        .update_pod(&params.pod_name, &params.namespace, &params.content)
        .await?;

    info!(pod = %params.pod_name, namespace = %params.namespace, "Updated pod");
    Ok(done("Updated pod"))
}

/// GET /api/k8s/pod/container
pub async fn get_pod_containers(
    State(state): State<AppState>,
    params: std::result::Result<Query<PodParams>, QueryRejection>,
) -> Result<Json<Envelope<Vec<String>>>> {
    let params = bind_query(params)?;
    require("pod_name", &params.pod_name)?;
    require("namespace", &params.namespace)?;

    let data = state
        .pods
        .get_pod_containers(&params.pod_name, &params.namespace)
        .await?;

    Ok(ok("Listed pod containers", data))
}

/// GET /api/k8s/pod/log
pub async fn get_pod_log(
    State(state): State<AppState>,
    params: std::result::Result<Query<PodLogParams>, QueryRejection>,
) -> Result<Json<Envelope<String>>> {
    let params = bind_query(params)?;
    require("pod_name", &params.pod_name)?;
    require("namespace", &params.namespace)?;

    let data = state
        .pods
        .get_pod_log(&params.container_name, &params.pod_name, &params.namespace)
        .await?;

    Ok(ok("Fetched pod log", data))
}

/// GET /api/k8s/pod/numnp
pub async fn get_pod_num_per_namespace(
    State(state): State<AppState>,
) -> Result<Json<Envelope<Vec<NamespacePodCount>>>> {
    let data = state.pods.get_pod_num_per_namespace().await?;
    Ok(ok("Counted pods per namespace", data))
}
