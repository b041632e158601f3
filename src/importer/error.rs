// ==========================================
// 零售库存调货建议生成系统 - 导入模块错误类型
// ==========================================
// 工具: thiserror 派生宏
// 策略: 结构性/类型性问题整体拒绝数据集, 不静默丢行
// ==========================================

use thiserror::Error;

/// 导入模块错误类型
#[derive(Error, Debug)]
pub enum ImportError {
    // ===== 文件相关错误 =====
    #[error("文件不存在: {0}")]
    FileNotFound(String),

    #[error("文件格式不支持: {0}（仅支持 .xlsx/.xls/.csv）")]
    UnsupportedFormat(String),

    #[error("文件读取失败: {0}")]
    FileReadError(String),

    #[error("Excel 解析失败: {0}")]
    ExcelParseError(String),

    #[error("CSV 解析失败: {0}")]
    CsvParseError(String),

    // ===== 结构校验错误 =====
    #[error("缺少必要栏位: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    // ===== 类型校验错误 =====
    // 数量字段必须可转换为非负整数; 负值同样视为类型错误,
    // 静默清零会扭曲供需总量
    #[error("类型转换失败 (行 {row}, 字段 {field}): 无法解析为非负整数, 实际值 \"{value}\"")]
    TypeConversionError {
        row: usize,
        field: String,
        value: String,
    },

    // ===== 通用错误 =====
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

// 实现 From<std::io::Error>
impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        ImportError::FileReadError(err.to_string())
    }
}

// 实现 From<csv::Error>
impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        ImportError::CsvParseError(err.to_string())
    }
}

// 实现 From<calamine::XlsxError>
impl From<calamine::XlsxError> for ImportError {
    fn from(err: calamine::XlsxError) -> Self {
        ImportError::ExcelParseError(err.to_string())
    }
}

/// Result 类型别名
pub type ImportResult<T> = Result<T, ImportError>;
