// ==========================================
// 零售库存调货建议生成系统 - 调货领域模型
// ==========================================
// DonorCandidate / ReceiverDescriptor: 单个产品组匹配过程内的临时对象
// TransferRecommendation: 匹配器输出, 不可变, 供统计/导出消费
// ==========================================

use crate::domain::record::InventoryRecord;
use crate::domain::types::{RpType, TransferType};
use serde::{Deserialize, Serialize};

// ==========================================
// DonorSnapshot - 转出店铺匹配时快照
// ==========================================
// 审计/导出依据, 匹配后不再重算
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorSnapshot {
    pub net_stock: u32,
    pub available_stock: u32,
    pub safety_stock: u32,
    pub moq: u32,
    pub pending_received: u32,
    pub rp_type: RpType,
    pub last_month_sold: u32,
    pub mtd_sold: u32,
    pub effective_sales: u32,
}

impl DonorSnapshot {
    pub fn capture(record: &InventoryRecord) -> Self {
        Self {
            net_stock: record.net_stock,
            available_stock: record.available_stock,
            safety_stock: record.safety_stock,
            moq: record.moq,
            pending_received: record.pending_received,
            rp_type: record.rp_type,
            last_month_sold: record.last_month_sold,
            mtd_sold: record.mtd_sold,
            effective_sales: record.effective_sales,
        }
    }
}

// ==========================================
// ReceiverSnapshot - 接收店铺匹配时快照
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverSnapshot {
    pub target: u32,
    pub net_stock: u32,
    pub rp_type: RpType,
    pub last_month_sold: u32,
    pub mtd_sold: u32,
    pub effective_sales: u32,
}

impl ReceiverSnapshot {
    pub fn capture(record: &InventoryRecord) -> Self {
        Self {
            target: record.target,
            net_stock: record.net_stock,
            rp_type: record.rp_type,
            last_month_sold: record.last_month_sold,
            mtd_sold: record.mtd_sold,
            effective_sales: record.effective_sales,
        }
    }
}

// ==========================================
// DonorCandidate - 转出候选
// ==========================================
// 生命周期: 单个产品组的一次匹配过程; 匹配器在本地计数器上
// 扣减余量, 不回写 InventoryRecord
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DonorCandidate {
    pub article: String,
    pub site: String,
    pub om: String,
    pub transfer_type: TransferType,
    /// 本模式下允许转出的最大数量(已按 net_stock 封顶)
    pub max_donate_qty: u32,
    pub snapshot: DonorSnapshot,
}

impl DonorCandidate {
    /// 优先级档位: 1 = ND, 2 = RF
    pub fn priority_tier(&self) -> u8 {
        if self.transfer_type.is_nd() {
            1
        } else {
            2
        }
    }
}

// ==========================================
// ReceiverDescriptor - 接收候选
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceiverDescriptor {
    pub article: String,
    pub site: String,
    pub om: String,
    pub snapshot: ReceiverSnapshot,
}

impl ReceiverDescriptor {
    /// 初始未满足需求量 = 目标需求量(绝对口径, 不扣自身库存)
    pub fn initial_need(&self) -> u32 {
        self.snapshot.target
    }
}

// ==========================================
// TransferRecommendation - 调货建议(输出)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferRecommendation {
    pub article: String,
    pub article_desc: String,
    /// 转出店铺所属 OM
    pub om: String,
    pub donor_site: String,
    pub receiver_site: String,
    /// 接收店铺所属 OM(模式 C 允许与 om 不同)
    pub receiver_om: String,
    pub qty: u32,
    pub transfer_type: TransferType,
    /// 匹配时生效的产品级总需求上限(审计与统计分母)
    pub article_total_demand: u64,
    pub donor_snapshot: DonorSnapshot,
    pub receiver_snapshot: ReceiverSnapshot,
    pub notes: String,
}

impl TransferRecommendation {
    /// 转出后库存(报表口径: 快照净库存 - 本行转出量)
    pub fn donor_stock_after(&self) -> u32 {
        self.donor_snapshot.net_stock.saturating_sub(self.qty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::types::RpType;

    fn sample_record() -> InventoryRecord {
        let mut record = InventoryRecord {
            article: "A001".to_string(),
            article_desc: "测试产品".to_string(),
            rp_type: RpType::Nd,
            site: "S001".to_string(),
            om: "G1".to_string(),
            moq: 1,
            safety_stock: 2,
            net_stock: 10,
            pending_received: 5,
            target: 8,
            last_month_sold: 3,
            mtd_sold: 9,
            available_stock: 0,
            effective_sales: 0,
            notes: String::new(),
        };
        record.compute_derived();
        record
    }

    #[test]
    fn test_donor_snapshot_capture() {
        let record = sample_record();
        let snapshot = DonorSnapshot::capture(&record);
        assert_eq!(snapshot.net_stock, 10);
        assert_eq!(snapshot.available_stock, 15);
        assert_eq!(snapshot.effective_sales, 3);
        assert_eq!(snapshot.rp_type, RpType::Nd);
    }

    #[test]
    fn test_receiver_snapshot_capture() {
        let record = sample_record();
        let snapshot = ReceiverSnapshot::capture(&record);
        assert_eq!(snapshot.target, 8);
        assert_eq!(snapshot.net_stock, 10);
    }

    #[test]
    fn test_priority_tier() {
        let record = sample_record();
        let nd = DonorCandidate {
            article: record.article.clone(),
            site: record.site.clone(),
            om: record.om.clone(),
            transfer_type: TransferType::Nd,
            max_donate_qty: 10,
            snapshot: DonorSnapshot::capture(&record),
        };
        assert_eq!(nd.priority_tier(), 1);

        let rf = DonorCandidate {
            transfer_type: TransferType::RfExcess,
            ..nd.clone()
        };
        assert_eq!(rf.priority_tier(), 2);
    }
}
