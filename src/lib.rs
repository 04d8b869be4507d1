//! # 图片验证码识别客户端 — 库入口
//!
//! ## 架构总览
//!
//! ```text
//! 调用方（一次提供 文件路径 / 原始字节 / 远端 URL 之一）
//!        ↓
//! ┌──────┼──────────────────────────────────────────────────┐
//! │      ↓             本库（Rust）                          │
//! │                                                          │
//! │  ┌─ source ───── CaptchaInputs 优先级选源（文件>字节>URL）│
//! │  │                                                       │
//! │  ├─ handler ──── ImageCaptcha 双模式编排（阻塞 / 挂起）   │
//! │  │   ├─ store        抓取图片落盘 + 目录生命周期          │
//! │  │   └─ payload      base64 正文编码进共享载荷            │
//! │  │                                                       │
//! │  ├─ transport ── CaptchaEngine 契约 + reqwest 抓取辅助    │
//! │  ├─ result ───── SolveResult 统一结果容器                 │
//! │  ├─ config ───── SaveFormat / SolverConfig / FetchOptions │
//! │  └─ error ────── CaptchaError 统一错误类型                │
//! └───────┼──────────────────────────────────────────────────┘
//!         ↓ 提交 / 轮询（外部基座引擎，经 trait 注入）
//!    远端图片识别服务
//! ```
//!
//! ## 模块职责
//!
//! | 模块 | 职责 |
//! |------|------|
//! | [`error`] | 统一错误类型 `CaptchaError`，区分合成结果与硬错误 |
//! | [`config`] | 构造期不可变配置与抓取透传选项 |
//! | [`source`] | 三个可选输入按固定优先级收敛为唯一带标签来源 |
//! | [`result`] | 两条执行路径共用的结果容器与映射序列化 |
//! | [`store`] | 持久化图片目录：幂等创建、唯一命名写入、确定性清理 |
//! | [`payload`] | 共享提交载荷与 base64 正文编码 |
//! | [`transport`] | 外部引擎契约（抓取 + 提交等待）与 reqwest 抓取辅助 |
//! | [`handler`] | `ImageCaptcha` 双模式调度：阻塞与挂起入口行为一致 |

pub mod config;
pub mod error;
pub mod handler;
pub mod payload;
pub mod result;
pub mod source;
pub mod store;
pub mod transport;

pub use config::{DEFAULT_IMG_PATH, FetchOptions, SaveFormat, SolverConfig};
pub use error::CaptchaError;
pub use handler::ImageCaptcha;
pub use payload::{BODY_KEY, Payload};
pub use result::SolveResult;
pub use source::{CaptchaInputs, CaptchaSource, NO_CAPTCHA_ERR};
pub use store::ImageStore;
pub use transport::{AsyncCaptchaEngine, CaptchaEngine, async_fetch, blocking_fetch};
