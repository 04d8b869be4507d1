//! 核心编排模块
//!
//! # 设计思路
//!
//! `ImageCaptcha` 只负责流程编排与载荷管理，不绑定具体网络实现。
//! 处理链路固定为：
//! 1. 按固定优先级选定唯一输入来源
//! 2. 取得原始字节（读文件 / 直接采用 / 委托引擎抓取）
//! 3. 持久化模式下将抓取图片落盘
//! 4. base64 编码写入载荷正文，委托引擎提交并等待结果
//!
//! # 实现思路
//!
//! - 阻塞与挂起两个入口共用同一套解析/缓存/编码逻辑，仅能力调用不同，
//!   保证两条路径对相同输入与相同远端响应产生完全一致的结果。
//! - 入口方法取 `&mut self`：载荷是跨调用复用的共享可变资源，
//!   借用检查天然排除了同一实例上的并发调用交错。
//! - 无输入与抓取失败合成为统一结果返回；本地 I/O 失败作为硬错误上抛。

use std::fs;
use std::path::Path;
use std::time::Instant;

use crate::config::{FetchOptions, SaveFormat, SolverConfig};
use crate::error::CaptchaError;
use crate::payload::{self, Payload};
use crate::result::SolveResult;
use crate::source::{CaptchaInputs, CaptchaSource, NO_CAPTCHA_ERR};
use crate::store::ImageStore;
use crate::transport::{AsyncCaptchaEngine, CaptchaEngine};

/// 本地解析结论：要么字节已就绪，要么还需一次远端抓取。
enum LocalResolution {
    Ready(Vec<u8>),
    NeedsFetch(String),
}

/// 图片验证码处理器。
///
/// 持有构造期配置、持久化存储（仅 `Const` 模式）与跨调用复用的提交载荷。
pub struct ImageCaptcha {
    config: SolverConfig,
    store: Option<ImageStore>,
    payload: Payload,
}

impl ImageCaptcha {
    /// 根据配置创建处理器。
    ///
    /// 临时模式下不创建存储对象，对象销毁绝不触碰文件系统；
    /// 持久化模式下存储目录的清理由 `img_clearing` 决定。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use image_captcha_client::{ImageCaptcha, SolverConfig};
    ///
    /// let handler = ImageCaptcha::new(SolverConfig::default());
    /// ```
    pub fn new(config: SolverConfig) -> Self {
        let store = match config.save_format {
            SaveFormat::Const => Some(ImageStore::new(config.img_path.clone(), config.img_clearing)),
            SaveFormat::Temp => None,
        };

        Self {
            config,
            store,
            payload: payload::base_payload(),
        }
    }

    /// 当前生效配置。
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// 只读访问提交载荷。
    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// 可变访问提交载荷，供调用方预置引擎所属字段（任务参数、凭据等）。
    pub fn payload_mut(&mut self) -> &mut Payload {
        &mut self.payload
    }

    /// 显式清理存储目录（确定性释放，替代只依赖对象销毁）。
    ///
    /// 临时模式下为空操作。
    pub fn clear_images(&mut self) -> Result<(), CaptchaError> {
        match &mut self.store {
            Some(store) => store.clear(),
            None => Ok(()),
        }
    }

    /// 阻塞入口：解析输入、编码载荷并提交识别。
    ///
    /// 返回值约定：
    /// - `Ok(result)` — 成功结果，或无输入/抓取失败合成的错误结果
    /// - `Err(...)` — 本地文件系统硬错误（调用方配置问题）
    ///
    /// # 示例
    /// ```rust,ignore
    /// use image_captcha_client::{CaptchaInputs, FetchOptions, ImageCaptcha, SolverConfig};
    ///
    /// # fn demo(engine: &impl image_captcha_client::CaptchaEngine) -> Result<(), image_captcha_client::CaptchaError> {
    /// let mut handler = ImageCaptcha::new(SolverConfig::default());
    /// let result = handler.captcha_handler(
    ///     engine,
    ///     CaptchaInputs::from_file("src/examples/088636.png"),
    ///     &FetchOptions::default(),
    /// )?;
    /// # Ok(())
    /// # }
    /// ```
    pub fn captcha_handler<E: CaptchaEngine>(
        &mut self,
        engine: &E,
        inputs: CaptchaInputs,
        options: &FetchOptions,
    ) -> Result<SolveResult, CaptchaError> {
        let total_start = Instant::now();

        let resolution = match inputs.select() {
            Some(source) => Self::resolve_local(source)?,
            None => return Ok(Self::no_input_result()),
        };

        let bytes = match resolution {
            LocalResolution::Ready(bytes) => bytes,
            LocalResolution::NeedsFetch(url) => match engine.fetch_image(&url, options) {
                Ok(bytes) => {
                    self.cache_fetched_image(&bytes)?;
                    bytes
                }
                Err(err) => return Ok(Self::fetch_failure_result(err)),
            },
        };

        payload::insert_image_body(&mut self.payload, &bytes);
        let result = engine.submit_and_wait(&self.payload, options)?;

        log::info!(
            "✅ 验证码处理完成（阻塞）- total={}ms error={}",
            total_start.elapsed().as_millis(),
            result.error
        );
        Ok(result)
    }

    /// 挂起入口：与阻塞入口行为完全一致，仅网络能力换为挂起调用。
    ///
    /// # 示例
    /// ```rust,ignore
    /// use image_captcha_client::{CaptchaInputs, FetchOptions, ImageCaptcha, SolverConfig};
    ///
    /// # async fn demo(engine: &impl image_captcha_client::AsyncCaptchaEngine) -> Result<(), image_captcha_client::CaptchaError> {
    /// let mut handler = ImageCaptcha::new(SolverConfig::default());
    /// let result = handler
    ///     .aio_captcha_handler(
    ///         engine,
    ///         CaptchaInputs::from_url("https://example.com/captcha.jpg"),
    ///         &FetchOptions::default(),
    ///     )
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn aio_captcha_handler<E: AsyncCaptchaEngine>(
        &mut self,
        engine: &E,
        inputs: CaptchaInputs,
        options: &FetchOptions,
    ) -> Result<SolveResult, CaptchaError> {
        let total_start = Instant::now();

        let resolution = match inputs.select() {
            Some(source) => Self::resolve_local(source)?,
            None => return Ok(Self::no_input_result()),
        };

        let bytes = match resolution {
            LocalResolution::Ready(bytes) => bytes,
            LocalResolution::NeedsFetch(url) => match engine.fetch_image(&url, options).await {
                Ok(bytes) => {
                    self.cache_fetched_image(&bytes)?;
                    bytes
                }
                Err(err) => return Ok(Self::fetch_failure_result(err)),
            },
        };

        payload::insert_image_body(&mut self.payload, &bytes);
        let result = engine.submit_and_wait(&self.payload, options).await?;

        log::info!(
            "✅ 验证码处理完成（挂起）- total={}ms error={}",
            total_start.elapsed().as_millis(),
            result.error
        );
        Ok(result)
    }

    /// 不涉网的来源解析：文件读取与字节直通在这里完成。
    fn resolve_local(source: CaptchaSource) -> Result<LocalResolution, CaptchaError> {
        match source {
            CaptchaSource::File(path) => Ok(LocalResolution::Ready(Self::read_local_file(&path)?)),
            CaptchaSource::Bytes(bytes) => Ok(LocalResolution::Ready(bytes)),
            CaptchaSource::Url(url) => Ok(LocalResolution::NeedsFetch(url)),
        }
    }

    /// 读取本地图片文件；任何失败都作为硬错误上抛。
    fn read_local_file(path: &Path) -> Result<Vec<u8>, CaptchaError> {
        log::info!("📁 开始读取本地图片 - 路径: {}", path.display());

        if !path.exists() {
            return Err(CaptchaError::FileSystem(format!(
                "文件不存在：{}",
                path.display()
            )));
        }

        fs::read(path).map_err(|e| CaptchaError::FileSystem(format!("无法读取图片文件：{}", e)))
    }

    /// 持久化模式下将抓取图片落盘；临时模式下为空操作。
    fn cache_fetched_image(&self, bytes: &[u8]) -> Result<(), CaptchaError> {
        if let Some(store) = &self.store {
            store.save(bytes)?;
        }

        Ok(())
    }

    fn no_input_result() -> SolveResult {
        log::warn!("🚫 未提供任何输入，跳过提交");
        SolveResult::failure(NO_CAPTCHA_ERR)
    }

    fn fetch_failure_result(err: CaptchaError) -> SolveResult {
        log::warn!("⚠️ 远端图片抓取失败，合成错误结果：{}", err);
        SolveResult::failure(err.to_string())
    }
}
