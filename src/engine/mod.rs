// ==========================================
// 零售库存调货建议生成系统 - 引擎层
// ==========================================
// 职责: 实现调货业务规则, 纯函数, 不做 I/O
// 流程: 分类 → 排序 → 需求解析 → 匹配 → 统计
// ==========================================

pub mod classifier;
pub mod demand;
pub mod diagnosis;
pub mod error;
pub mod matcher;
pub mod ordering;
pub mod orchestrator;
pub mod summary;

// 重导出核心引擎
pub use classifier::{EligibilityEngine, GroupCandidates};
pub use demand::{DemandResolver, ReceiverEntry, ReceiverPool};
pub use diagnosis::{diagnose_empty_run, EmptyRunDiagnosis, EmptyRunReason};
pub use error::{EngineError, EngineResult};
pub use matcher::TransferMatcher;
pub use ordering::DonorSorter;
pub use orchestrator::TransferEngine;
pub use summary::SummaryEngine;
