use std::time::Duration;

use reqwest::header::{ACCEPT, ACCEPT_LANGUAGE, USER_AGENT};
use reqwest::{Client, ClientBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

use super::error::ApiError;

// 对 reqwest 的简单封装，统一默认请求头和超时
#[derive(Debug, Clone)]
pub struct ApiClient {
    inner: Client,
}

impl ApiClient {
    pub fn new(timeout: Duration) -> Result<Self, ApiError> {
        let inner = ClientBuilder::new()
            .timeout(timeout)
            .default_headers(Self::get_default_headers())
            .build()?;

        Ok(Self { inner })
    }

    pub fn get_default_headers() -> reqwest::header::HeaderMap {
        let mut headers = reqwest::header::HeaderMap::new();
        headers.insert(
            ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json,text/plain,*/*"),
        );
        headers.insert(
            ACCEPT_LANGUAGE,
            reqwest::header::HeaderValue::from_static("zh-CN,zh;q=0.9"),
        );
        headers.insert(USER_AGENT, reqwest::header::HeaderValue::from_static("Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/135.0.0.0 Safari/537.36"));

        headers
    }

    // 通用 GET 请求，响应体按 JSON 解析成目标类型
    pub async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        let resp = self.inner.get(url).send().await.map_err(|e| {
            error!("请求失败: {}", e);
            ApiError::Reqwest(e)
        })?;

        let status = resp.status();
        debug!("Response Status: {}", status);

        let raw_body = resp.bytes().await?;

        serde_json::from_slice::<T>(&raw_body).map_err(|e| {
            ApiError::InvalidResponse(format!(
                "解析响应失败: {}. 原始响应: {}",
                e,
                String::from_utf8_lossy(&raw_body)
            ))
        })
    }

    // 获取原始响应，供流式下载使用
    pub async fn get_raw_response(&self, url: &str) -> Result<Response, ApiError> {
        let resp = self.inner.get(url).send().await?;

        Ok(resp)
    }
}
