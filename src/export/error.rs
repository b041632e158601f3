// ==========================================
// 零售库存调货建议生成系统 - 导出模块错误类型
// ==========================================

use thiserror::Error;

/// 导出模块错误类型
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("报表写入失败: {0}")]
    WriteError(String),

    #[error("CSV 序列化失败: {0}")]
    CsvError(String),
}

impl From<std::io::Error> for ExportError {
    fn from(err: std::io::Error) -> Self {
        ExportError::WriteError(err.to_string())
    }
}

impl From<csv::Error> for ExportError {
    fn from(err: csv::Error) -> Self {
        ExportError::CsvError(err.to_string())
    }
}

/// Result 类型别名
pub type ExportResult<T> = Result<T, ExportError>;
