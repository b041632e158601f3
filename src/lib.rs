// ==========================================
// 零售库存调货建议生成系统 - 核心库
// ==========================================
// 技术栈: Rust + calamine/csv + tracing
// 系统定位: 决策支持系统 (调货建议仅供人工执行)
// ==========================================

// ==========================================
// 模块声明
// ==========================================

// 领域层 - 实体与类型
pub mod domain;

// 导入层 - 文件解析与清洗校验
pub mod importer;

// 配置层 - 模式规则
pub mod config;

// 引擎层 - 业务规则
pub mod engine;

// API 层 - 业务接口
pub mod api;

// 导出层 - CSV 报表
pub mod export;

// 日志系统
pub mod logging;

// ==========================================
// 重导出核心类型
// ==========================================

// 领域类型
pub use domain::types::{OmPolicy, RpType, TransferMode, TransferType};

// 领域实体
pub use domain::{
    ArticleStats, DemandAuditEntry, DonorCandidate, DonorSnapshot, InventoryRecord, OmStats,
    RawSheet, ReceiverDescriptor, ReceiverSnapshot, ReceiverStats, TransferRecommendation,
    TransferSummary, TransferTypeStats,
};

// 配置
pub use config::{ModeProfile, RfThreshold};

// 引擎
pub use engine::{
    diagnose_empty_run, DemandResolver, DonorSorter, EligibilityEngine, EmptyRunDiagnosis,
    EmptyRunReason, EngineError, SummaryEngine, TransferEngine, TransferMatcher,
};

// 导入/导出
pub use export::CsvExporter;
pub use importer::{ImportError, RecordNormalizer, UniversalFileParser, REQUIRED_COLUMNS};

// API
pub use api::{ApiError, TransferApi, TransferRunResult};

// ==========================================
// 常量定义
// ==========================================

// 系统版本
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// 系统名称
pub const APP_NAME: &str = "零售库存调货建议生成系统";
