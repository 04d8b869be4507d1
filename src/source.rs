//! 输入来源与中间模型
//!
//! # 设计思路
//!
//! 将"调用方三个可选参数"和"链路实际使用的唯一来源"解耦：
//! - `CaptchaInputs` 承载每次调用的可选输入组合
//! - `CaptchaSource` 是选定后的带标签来源，链路后续只认它
//!
//! 优先级规则固定为：本地文件 > 原始字节 > 远端 URL，与调用方赋值顺序无关。
//! 把优先级收敛到唯一的 `select()`，避免两条执行路径各写一遍分支判断后悄悄漂移。

use std::path::PathBuf;

/// 未提供任何输入时返回的固定错误文案（对外契约，勿改动）。
pub const NO_CAPTCHA_ERR: &str = "You did not send any file, local link or URL.";

/// 单次调用的可选输入组合。
///
/// 三个字段至多一个会被实际采用，见 [`CaptchaInputs::select`]。
#[derive(Debug, Clone, Default)]
pub struct CaptchaInputs {
    /// 本地图片文件路径。
    pub file: Option<PathBuf>,
    /// 内存中的已编码图片字节。
    pub bytes: Option<Vec<u8>>,
    /// 远端图片地址。
    pub url: Option<String>,
}

impl CaptchaInputs {
    /// 无输入（用于快速失败路径的显式表达）。
    pub fn none() -> Self {
        Self::default()
    }

    /// 仅本地文件输入。
    pub fn from_file(path: impl Into<PathBuf>) -> Self {
        Self {
            file: Some(path.into()),
            ..Self::default()
        }
    }

    /// 仅原始字节输入。
    pub fn from_bytes(bytes: impl Into<Vec<u8>>) -> Self {
        Self {
            bytes: Some(bytes.into()),
            ..Self::default()
        }
    }

    /// 仅远端 URL 输入。
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: Some(url.into()),
            ..Self::default()
        }
    }

    /// 按固定优先级选定唯一来源：文件 > 字节 > URL。
    ///
    /// 空路径、空字节、空字符串视同未提供。全部缺失时返回 `None`，
    /// 由上层合成固定的无输入错误结果。
    pub fn select(self) -> Option<CaptchaSource> {
        if let Some(path) = self.file {
            if !path.as_os_str().is_empty() {
                return Some(CaptchaSource::File(path));
            }
        }

        if let Some(bytes) = self.bytes {
            if !bytes.is_empty() {
                return Some(CaptchaSource::Bytes(bytes));
            }
        }

        if let Some(url) = self.url {
            if !url.is_empty() {
                return Some(CaptchaSource::Url(url));
            }
        }

        None
    }
}

/// 选定后的图片来源。
#[derive(Debug, Clone)]
pub enum CaptchaSource {
    /// 本地文件路径来源。
    File(PathBuf),
    /// 原始字节来源（不做任何解码与校验）。
    Bytes(Vec<u8>),
    /// 远端地址来源，由抓取协作方取回字节。
    Url(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_wins_when_all_three_inputs_are_supplied() {
        let inputs = CaptchaInputs {
            file: Some(PathBuf::from("sample.png")),
            bytes: Some(vec![1, 2, 3]),
            url: Some("http://example.com/captcha.png".to_string()),
        };

        assert!(matches!(inputs.select(), Some(CaptchaSource::File(_))));
    }

    #[test]
    fn bytes_win_over_url() {
        let inputs = CaptchaInputs {
            file: None,
            bytes: Some(vec![1, 2, 3]),
            url: Some("http://example.com/captcha.png".to_string()),
        };

        assert!(matches!(inputs.select(), Some(CaptchaSource::Bytes(_))));
    }

    #[test]
    fn empty_values_count_as_absent() {
        let inputs = CaptchaInputs {
            file: Some(PathBuf::new()),
            bytes: Some(Vec::new()),
            url: Some(String::new()),
        };

        assert!(inputs.select().is_none());
    }

    #[test]
    fn empty_file_falls_through_to_bytes() {
        let inputs = CaptchaInputs {
            file: Some(PathBuf::new()),
            bytes: Some(vec![9]),
            url: None,
        };

        assert!(matches!(inputs.select(), Some(CaptchaSource::Bytes(_))));
    }

    #[test]
    fn no_inputs_select_none() {
        assert!(CaptchaInputs::none().select().is_none());
    }
}
