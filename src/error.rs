//! 统一错误类型模块
//!
//! # 设计思路
//!
//! 定义全局统一的 `CaptchaError` 枚举，替代各模块中分散的
//! `.map_err(|e| e.to_string())`、`format!(...)` 等不一致模式。
//!
//! 注意错误分两类传播：识别链路自身的前置条件问题（未提供输入、
//! 远端图片抓取失败）会被吸收进 [`crate::SolveResult`] 返回给调用方；
//! 本地文件系统问题属于调用方配置错误，以 `CaptchaError` 硬错误上抛。
//!
//! # 实现思路
//!
//! - 使用 `thiserror` 派生可读错误消息。
//! - 提供 `From<CaptchaError> for String`，兼容仍使用字符串错误的调用点。

/// 验证码识别链路统一错误类型。
#[derive(Debug, thiserror::Error)]
pub enum CaptchaError {
    /// 网络请求失败（连接、非 2xx 状态码等）
    #[error("网络错误：{0}")]
    Network(String),

    /// 网络请求超时
    #[error("超时错误：{0}")]
    Timeout(String),

    /// 本地文件读取失败
    #[error("文件错误：{0}")]
    FileSystem(String),

    /// 图片存储目录创建/写入/清理失败
    #[error("存储错误：{0}")]
    Storage(String),

    /// 输入格式不合法（如未知的存储模式字符串）
    #[error("格式错误：{0}")]
    InvalidFormat(String),

    /// 识别服务端引擎报告的错误，原样透传
    #[error("识别服务错误：{0}")]
    Service(String),
}

impl From<CaptchaError> for String {
    /// 兼容部分仍使用字符串错误的调用点。
    fn from(error: CaptchaError) -> Self {
        error.to_string()
    }
}
