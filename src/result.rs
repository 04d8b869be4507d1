//! 识别结果容器模块
//!
//! # 设计思路
//!
//! 无论成功、远端报错还是本地前置条件失败，两条执行路径都返回同一形状的
//! `SolveResult`，调用方只需面对一种成功/失败契约。
//! 不变式：`error == true` 当且仅当 `error_body` 非空，由构造函数维护。
//!
//! # 实现思路
//!
//! - 字段名经 serde 重命名对齐服务端线上格式（`captchaSolve` / `taskId` / `errorBody`）。
//! - `to_map` 支持按需省略未赋值的可选字段（无输入快速失败路径希望"缺省"而非显式 null）。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 识别结果容器。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SolveResult {
    /// 识别出的文本答案。
    #[serde(rename = "captchaSolve")]
    pub captcha_solve: Option<String>,
    /// 服务端任务句柄，用于关联提交与结果。
    #[serde(rename = "taskId")]
    pub task_id: Option<String>,
    /// 是否失败。
    pub error: bool,
    /// 失败详情；仅在 `error = true` 时存在。
    #[serde(rename = "errorBody")]
    pub error_body: Option<String>,
}

impl SolveResult {
    /// 构造成功结果。
    pub fn solved(captcha_solve: impl Into<String>, task_id: impl Into<String>) -> Self {
        Self {
            captcha_solve: Some(captcha_solve.into()),
            task_id: Some(task_id.into()),
            error: false,
            error_body: None,
        }
    }

    /// 构造失败结果，保证 `error` 与 `error_body` 同步。
    pub fn failure(detail: impl Into<String>) -> Self {
        Self {
            captcha_solve: None,
            task_id: None,
            error: true,
            error_body: Some(detail.into()),
        }
    }

    /// 序列化为输出映射。
    ///
    /// `exclude_none = true` 时省略未赋值的可选字段，而非输出显式 null。
    pub fn to_map(&self, exclude_none: bool) -> Map<String, Value> {
        let mut map = Map::new();
        map.insert(
            "captchaSolve".to_string(),
            self.captcha_solve
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
        );
        map.insert(
            "taskId".to_string(),
            self.task_id.clone().map(Value::String).unwrap_or(Value::Null),
        );
        map.insert("error".to_string(), Value::Bool(self.error));
        map.insert(
            "errorBody".to_string(),
            self.error_body
                .clone()
                .map(Value::String)
                .unwrap_or(Value::Null),
        );

        if exclude_none {
            map.retain(|_, value| !value.is_null());
        }

        map
    }
}
