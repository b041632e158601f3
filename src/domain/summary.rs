// ==========================================
// 零售库存调货建议生成系统 - 统计摘要领域模型
// ==========================================
// SummaryEngine 输出, 不可变, 供报表/导出层消费
// ==========================================

use crate::domain::types::TransferType;
use serde::{Deserialize, Serialize};

// ==========================================
// 按产品统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticleStats {
    pub article: String,
    /// 产品级总需求(匹配时生效的需求上限)
    pub total_demand: u64,
    pub total_transferred: u64,
    pub line_count: u32,
    /// 涉及 OM 数量(按转出方口径)
    pub om_count: u32,
    /// 需求满足率(百分比, 保留两位小数)
    pub fulfillment_rate_pct: f64,
}

// ==========================================
// 按 OM 统计(转出方口径)
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OmStats {
    pub om: String,
    pub total_transferred: u64,
    pub line_count: u32,
    pub article_count: u32,
}

// ==========================================
// 按转出类型统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferTypeStats {
    pub transfer_type: TransferType,
    pub total_qty: u64,
    pub line_count: u32,
}

// ==========================================
// 按接收店铺统计
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReceiverStats {
    pub site: String,
    /// 目标需求量(该店铺所有涉及产品的目标之和)
    pub target_qty: u64,
    pub received_qty: u64,
    pub fulfillment_rate_pct: f64,
}

// ==========================================
// 需求约束审计
// ==========================================
// 引擎正确时恒为空; 保留为导出侧审计面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DemandAuditEntry {
    pub article: String,
    pub total_demand: u64,
    pub total_transferred: u64,
    pub excess: u64,
}

// ==========================================
// TransferSummary - 统计摘要
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransferSummary {
    // ===== KPI 概览 =====
    pub total_transfer_qty: u64,
    pub total_lines: u32,
    pub article_count: u32,
    pub om_count: u32,

    // ===== 分组统计(均按键升序, 输出确定) =====
    pub by_article: Vec<ArticleStats>,
    pub by_om: Vec<OmStats>,
    pub by_transfer_type: Vec<TransferTypeStats>,
    pub by_receiver: Vec<ReceiverStats>,

    // ===== 约束审计 =====
    pub demand_audit: Vec<DemandAuditEntry>,
}

impl TransferSummary {
    /// 空摘要(零建议时)
    pub fn empty() -> Self {
        Self {
            total_transfer_qty: 0,
            total_lines: 0,
            article_count: 0,
            om_count: 0,
            by_article: Vec::new(),
            by_om: Vec::new(),
            by_transfer_type: Vec::new(),
            by_receiver: Vec::new(),
            demand_audit: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.total_lines == 0
    }
}
