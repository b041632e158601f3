// ==========================================
// 零售库存调货建议生成系统 - 领域层
// ==========================================

pub mod record;
pub mod summary;
pub mod transfer;
pub mod types;

pub use record::{InventoryRecord, RawSheet};
pub use summary::{
    ArticleStats, DemandAuditEntry, OmStats, ReceiverStats, TransferSummary, TransferTypeStats,
};
pub use transfer::{
    DonorCandidate, DonorSnapshot, ReceiverDescriptor, ReceiverSnapshot, TransferRecommendation,
};
pub use types::{OmPolicy, RpType, TransferMode, TransferType};
