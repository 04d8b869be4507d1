//! 外部协作方契约模块
//!
//! # 设计思路
//!
//! 双模式调度的差异只体现在两个能力调用上：抓取远端图片、提交并等待结果。
//! 把它们抽象为阻塞版 `CaptchaEngine` 与挂起版 `AsyncCaptchaEngine` 两个 trait，
//! 解析/缓存/编码的共享逻辑写一遍，每个入口只换能力实现。
//!
//! 提交与轮询（createTask / getTaskResult）是外部基座引擎的职责，
//! 本 crate 只消费其契约，不提供实现；抓取部分则内置 reqwest 版辅助函数，
//! 引擎实现可以直接复用。
//!
//! # 实现思路
//!
//! - 抓取：GET 请求，非 2xx 视为失败，成功返回完整字节。
//! - 超时参数来自 `FetchOptions`，客户端按次构建。
//! - reqwest 错误统一映射到 `CaptchaError`（超时 / 连接 / 其他）。

use std::time::Duration;

use async_trait::async_trait;

use crate::config::FetchOptions;
use crate::error::CaptchaError;
use crate::payload::Payload;
use crate::result::SolveResult;

/// 阻塞模式的外部引擎契约。
pub trait CaptchaEngine {
    /// 抓取远端图片，返回原始字节；非成功状态视为失败。
    fn fetch_image(&self, url: &str, options: &FetchOptions) -> Result<Vec<u8>, CaptchaError>;

    /// 提交载荷并阻塞等待最终识别结果（内部可轮询）。
    fn submit_and_wait(
        &self,
        payload: &Payload,
        options: &FetchOptions,
    ) -> Result<SolveResult, CaptchaError>;
}

/// 挂起模式的外部引擎契约，行为与阻塞版一致。
#[async_trait]
pub trait AsyncCaptchaEngine: Send + Sync {
    /// 抓取远端图片，返回原始字节；非成功状态视为失败。
    async fn fetch_image(&self, url: &str, options: &FetchOptions)
    -> Result<Vec<u8>, CaptchaError>;

    /// 提交载荷并挂起等待最终识别结果（内部可轮询）。
    async fn submit_and_wait(
        &self,
        payload: &Payload,
        options: &FetchOptions,
    ) -> Result<SolveResult, CaptchaError>;
}

/// 阻塞版图片抓取辅助函数，供引擎实现复用。
pub fn blocking_fetch(url: &str, options: &FetchOptions) -> Result<Vec<u8>, CaptchaError> {
    log::info!("🌐 开始下载图片（阻塞）- URL: {}", url);

    let client = reqwest::blocking::Client::builder()
        .timeout(Duration::from_secs(options.download_timeout))
        .connect_timeout(Duration::from_secs(options.connect_timeout))
        .build()
        .map_err(|e| CaptchaError::Network(format!("无法创建 HTTP 客户端：{}", e)))?;

    let response = client
        .get(url)
        .send()
        .map_err(|e| map_reqwest_error(e, options))?;

    check_status(response.status())?;

    let bytes = response
        .bytes()
        .map_err(|e| map_reqwest_error(e, options))?;

    log::debug!("✅ 下载完成 - {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

/// 挂起版图片抓取辅助函数，供引擎实现复用。
pub async fn async_fetch(url: &str, options: &FetchOptions) -> Result<Vec<u8>, CaptchaError> {
    log::info!("🌐 开始下载图片（挂起）- URL: {}", url);

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(options.download_timeout))
        .connect_timeout(Duration::from_secs(options.connect_timeout))
        .build()
        .map_err(|e| CaptchaError::Network(format!("无法创建 HTTP 客户端：{}", e)))?;

    let response = client
        .get(url)
        .send()
        .await
        .map_err(|e| map_reqwest_error(e, options))?;

    check_status(response.status())?;

    let bytes = response
        .bytes()
        .await
        .map_err(|e| map_reqwest_error(e, options))?;

    log::debug!("✅ 下载完成 - {} bytes", bytes.len());
    Ok(bytes.to_vec())
}

fn check_status(status: reqwest::StatusCode) -> Result<(), CaptchaError> {
    if status.is_success() {
        return Ok(());
    }

    Err(CaptchaError::Network(format!(
        "HTTP {}: {}",
        status.as_u16(),
        status_message(status.as_u16())
    )))
}

/// 统一映射 reqwest 错误到业务错误。
fn map_reqwest_error(e: reqwest::Error, options: &FetchOptions) -> CaptchaError {
    if e.is_timeout() {
        CaptchaError::Timeout(format!("下载超时（{}秒）", options.download_timeout))
    } else if e.is_connect() {
        CaptchaError::Network(format!("无法连接：{}", e))
    } else {
        CaptchaError::Network(format!("请求失败：{}", e))
    }
}

/// 常见 HTTP 状态码本地化文案。
fn status_message(code: u16) -> &'static str {
    match code {
        404 => "未找到",
        403 => "访问被拒绝",
        500..=599 => "服务器错误",
        _ => "请求失败",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};
    use std::net::TcpListener;
    use std::thread;

    fn spawn_single_response_server(status_line: &'static str, body: &'static [u8]) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind test server failed");
        let addr = listener.local_addr().expect("read local addr failed");

        thread::spawn(move || {
            let (mut stream, _) = listener.accept().expect("accept failed");

            let mut req_buf = [0u8; 1024];
            let _ = stream.read(&mut req_buf);

            let response = format!(
                "{}\r\nContent-Type: image/png\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                status_line,
                body.len()
            );

            stream
                .write_all(response.as_bytes())
                .expect("write headers failed");
            stream.write_all(body).expect("write body failed");
            stream.flush().expect("flush failed");
        });

        format!("http://127.0.0.1:{}/captcha.png", addr.port())
    }

    #[test]
    fn blocking_fetch_returns_body_bytes() {
        let url = spawn_single_response_server("HTTP/1.1 200 OK", b"\x89PNG fake bytes");

        let bytes = blocking_fetch(&url, &FetchOptions::default()).expect("fetch failed");

        assert_eq!(bytes, b"\x89PNG fake bytes");
    }

    #[test]
    fn blocking_fetch_rejects_non_success_status() {
        let url = spawn_single_response_server("HTTP/1.1 404 Not Found", b"gone");

        let result = blocking_fetch(&url, &FetchOptions::default());

        assert!(matches!(result, Err(CaptchaError::Network(_))));
    }

    #[test]
    fn blocking_fetch_reports_connection_failure() {
        // 端口刚释放即关闭，连接必然被拒绝
        let listener = TcpListener::bind("127.0.0.1:0").expect("bind failed");
        let port = listener.local_addr().expect("read local addr failed").port();
        drop(listener);

        let url = format!("http://127.0.0.1:{}/captcha.png", port);
        let result = blocking_fetch(&url, &FetchOptions::default());

        assert!(matches!(result, Err(CaptchaError::Network(_))));
    }

    #[tokio::test]
    async fn async_fetch_returns_body_bytes() {
        let url = spawn_single_response_server("HTTP/1.1 200 OK", b"\x89PNG async bytes");

        let bytes = async_fetch(&url, &FetchOptions::default())
            .await
            .expect("fetch failed");

        assert_eq!(bytes, b"\x89PNG async bytes");
    }

    #[tokio::test]
    async fn async_fetch_rejects_non_success_status() {
        let url = spawn_single_response_server("HTTP/1.1 500 Internal Server Error", b"boom");

        let result = async_fetch(&url, &FetchOptions::default()).await;

        assert!(matches!(result, Err(CaptchaError::Network(_))));
    }
}
