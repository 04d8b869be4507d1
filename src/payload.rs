//! 提交载荷模块
//!
//! # 设计思路
//!
//! 外发请求载荷是一个共享可变映射：本层只负责写入一个字段——
//! base64 编码后的图片正文；其余字段（任务参数、凭据）归提交协作方所有，
//! 本层不读不解释。
//!
//! # 实现思路
//!
//! - 编码是纯变换：原始字节 → 标准 base64 文本，不做任何内容校验。
//!   图片是否合法由远端服务裁决。
//! - `base_payload` 预置 `method = base64`，对齐服务端的图片提交方式。

use base64::{Engine as _, engine::general_purpose};
use serde_json::{Map, Value};

/// 外发请求载荷映射。
pub type Payload = Map<String, Value>;

/// 图片正文在载荷中的键名。
pub const BODY_KEY: &str = "body";

/// 构造基础载荷（预置提交方式字段）。
pub fn base_payload() -> Payload {
    let mut payload = Payload::new();
    payload.insert("method".to_string(), Value::String("base64".to_string()));
    payload
}

/// 将图片字节以标准 base64 文本写入载荷正文字段。
///
/// 重复调用会覆盖旧正文（载荷在多次调用间复用）。
pub fn insert_image_body(payload: &mut Payload, bytes: &[u8]) {
    let encoded = general_purpose::STANDARD.encode(bytes);
    payload.insert(BODY_KEY.to_string(), Value::String(encoded));
}
