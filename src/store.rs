//! 图片存储目录管理模块
//!
//! # 设计思路
//!
//! 统一管理持久化模式下抓取图片的落盘路径，本层是该目录概念上的唯一所有者：
//! 负责创建（含父级、幂等）、写入与销毁。清理是目录级的递归删除——
//! 包括本实例未写入的内容；多实例共享同一目录的调用方需自行知晓该契约。
//!
//! # 实现思路
//!
//! - 每次写入前 `create_dir_all`，目录已存在不报错，上层无需判断。
//! - 文件名为 `im-{uuid4}.png`，每次调用全新随机名，实际上不会碰撞，永不覆盖。
//! - 清理有两条触达路径：显式 `clear()` 确定性释放，以及作用域结束时的
//!   `Drop` 兜底；`clear()` 成功后会解除 `Drop` 的再次清理。
//! - 所有可能失败的操作均返回 `Result`，不使用 `expect()` / `unwrap()`。

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::error::CaptchaError;

/// 持久化图片存储。
///
/// 仅在持久化模式下由处理器持有；临时模式下根本不存在该对象，
/// 因此临时模式的对象销毁绝不触碰文件系统。
#[derive(Debug)]
pub struct ImageStore {
    dir: PathBuf,
    clear_on_drop: bool,
}

impl ImageStore {
    /// 绑定存储目录。
    ///
    /// `clear_on_drop` 为 true 时，对象销毁会递归删除整个目录树。
    pub fn new(dir: impl Into<PathBuf>, clear_on_drop: bool) -> Self {
        Self {
            dir: dir.into(),
            clear_on_drop,
        }
    }

    /// 存储目录路径。
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// 将抓取到的图片字节写入唯一命名的新文件。
    ///
    /// 仅产生副作用，不改变流向编码阶段的字节。
    pub fn save(&self, bytes: &[u8]) -> Result<PathBuf, CaptchaError> {
        fs::create_dir_all(&self.dir).map_err(|e| {
            CaptchaError::Storage(format!("创建图片目录 '{}' 失败：{}", self.dir.display(), e))
        })?;

        let file_name = format!("im-{}.png", Uuid::new_v4());
        let path = self.dir.join(file_name);

        fs::write(&path, bytes)
            .map_err(|e| CaptchaError::Storage(format!("保存图片失败：{}", e)))?;

        log::debug!("💾 已保存抓取图片 - {}", path.display());
        Ok(path)
    }

    /// 显式清理：递归删除整个存储目录树。
    ///
    /// 幂等（目录不存在视为已清理），成功后解除 `Drop` 的兜底清理。
    pub fn clear(&mut self) -> Result<(), CaptchaError> {
        if self.dir.exists() {
            fs::remove_dir_all(&self.dir).map_err(|e| {
                CaptchaError::Storage(format!("清理图片目录 '{}' 失败：{}", self.dir.display(), e))
            })?;
            log::info!("🧹 已清理图片目录 - {}", self.dir.display());
        }

        self.clear_on_drop = false;
        Ok(())
    }
}

impl Drop for ImageStore {
    /// 作用域结束时的兜底清理，失败只记日志不上抛。
    fn drop(&mut self) {
        if !self.clear_on_drop {
            return;
        }

        match fs::remove_dir_all(&self.dir) {
            Ok(()) => log::info!("🧹 已清理图片目录 - {}", self.dir.display()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {}
            Err(e) => log::warn!("⚠️ 清理图片目录 '{}' 失败：{}", self.dir.display(), e),
        }
    }
}
