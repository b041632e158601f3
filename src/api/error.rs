// ==========================================
// 零售库存调货建议生成系统 - API层错误类型
// ==========================================
// 职责: 汇聚导入/引擎/导出错误, 转换为用户可解释的错误消息
// ==========================================

use crate::engine::error::EngineError;
use crate::export::error::ExportError;
use crate::importer::error::ImportError;
use thiserror::Error;

/// API层错误类型
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("无效输入: {0}")]
    InvalidInput(String),

    #[error("数据导入失败: {0}")]
    Import(#[from] ImportError),

    #[error("引擎约束违规: {0}")]
    Engine(#[from] EngineError),

    #[error("报表导出失败: {0}")]
    Export(#[from] ExportError),
}

/// Result 类型别名
pub type ApiResult<T> = Result<T, ApiError>;
