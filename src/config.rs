//! 配置模块
//!
//! # 设计思路
//!
//! 将所有"构造期一次性策略"集中到 `SolverConfig`，并在对象生命周期内保持不可变，
//! 保证单次识别链路使用一致参数。存储模式（temp / const）作为高层语义，
//! 决定抓取到的图片是否落盘以及对象销毁时是否清理目录。
//!
//! # 实现思路
//!
//! - `Default` 提供生产可用配置（临时模式、启用清理）。
//! - `SaveFormat` 负责模式字符串解析与反向输出。
//! - `FetchOptions` 是透传给抓取协作方的不透明参数，按次传入而非构造期固定。

use std::path::PathBuf;

use crate::error::CaptchaError;

/// 默认图片存储目录名。
pub const DEFAULT_IMG_PATH: &str = "CaptchaClientImages";

/// 图片存储模式。
///
/// - `Temp`：抓取的图片仅在内存中使用，不落盘
/// - `Const`：抓取的图片持久化到配置目录
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveFormat {
    Temp,
    Const,
}

impl SaveFormat {
    /// 从外部字符串解析存储模式。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use image_captcha_client::SaveFormat;
    ///
    /// let f = SaveFormat::from_str("const")?;
    /// assert_eq!(f.as_str(), "const");
    /// # Ok::<(), image_captcha_client::CaptchaError>(())
    /// ```
    pub fn from_str(format: &str) -> Result<Self, CaptchaError> {
        match format.trim().to_lowercase().as_str() {
            "temp" => Ok(Self::Temp),
            "const" => Ok(Self::Const),
            other => Err(CaptchaError::InvalidFormat(format!(
                "未知存储模式：{}（可选：temp / const）",
                other
            ))),
        }
    }

    /// 将模式输出为稳定字符串，供日志与持久化。
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Temp => "temp",
            Self::Const => "const",
        }
    }
}

/// 识别处理器配置。
///
/// 构造后不可变；`img_clearing` 仅在 `save_format = Const` 时有意义。
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// 图片存储模式。
    pub save_format: SaveFormat,
    /// 对象销毁时是否递归删除整个存储目录（仅持久化模式生效）。
    pub img_clearing: bool,
    /// 图片存储目录。
    pub img_path: PathBuf,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            save_format: SaveFormat::Temp,
            img_clearing: true,
            img_path: PathBuf::from(DEFAULT_IMG_PATH),
        }
    }
}

impl SolverConfig {
    /// 按指定模式构造配置。
    pub fn new(save_format: SaveFormat, img_clearing: bool, img_path: impl Into<PathBuf>) -> Self {
        Self {
            save_format,
            img_clearing,
            img_path: img_path.into(),
        }
    }
}

/// 远端图片抓取的透传选项。
///
/// 本层不解释其含义，只原样交给抓取协作方使用。
#[derive(Debug, Clone)]
pub struct FetchOptions {
    /// 下载总超时（秒）。
    pub download_timeout: u64,
    /// 建立连接（TCP/TLS）超时（秒）。
    pub connect_timeout: u64,
}

impl Default for FetchOptions {
    fn default() -> Self {
        Self {
            download_timeout: 30,
            connect_timeout: 8,
        }
    }
}
