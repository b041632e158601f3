// ==========================================
// 零售库存调货建议生成系统 - 转出资格分类器
// ==========================================
// 职责: 按模式规则把产品组内每行判定为转出候选/接收候选/两者/皆非
// 红线: 无状态、无副作用, 只读 InventoryRecord
// ==========================================

use crate::config::mode_profile::ModeProfile;
use crate::domain::record::InventoryRecord;
use crate::domain::transfer::{
    DonorCandidate, DonorSnapshot, ReceiverDescriptor, ReceiverSnapshot,
};
use crate::domain::types::{RpType, TransferType};

// ==========================================
// GroupCandidates - 单产品组分类结果
// ==========================================
// donors 待排序; receivers 待构建接收池
#[derive(Debug, Clone, Default)]
pub struct GroupCandidates {
    pub donors: Vec<DonorCandidate>,
    pub receivers: Vec<ReceiverDescriptor>,
}

// ==========================================
// EligibilityEngine - 转出资格分类器
// ==========================================
pub struct EligibilityEngine;

impl EligibilityEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 分类单个产品组的全部行
    ///
    /// 组内最大有效销量跨全部 OM 计算(销量门控基准)
    pub fn classify_group(
        &self,
        rows: &[&InventoryRecord],
        profile: &ModeProfile,
    ) -> GroupCandidates {
        let max_sales = self.max_effective_sales(rows);

        let mut result = GroupCandidates::default();
        for record in rows {
            if let Some(donor) = self.classify_donor(record, max_sales, profile) {
                result.donors.push(donor);
            }
            if let Some(receiver) = self.classify_receiver(record) {
                result.receivers.push(receiver);
            }
        }

        result
    }

    /// 产品组内最大有效销量(跨全部行)
    pub fn max_effective_sales(&self, rows: &[&InventoryRecord]) -> u32 {
        rows.iter().map(|r| r.effective_sales).max().unwrap_or(0)
    }

    /// 转出资格判定
    ///
    /// # 规则
    /// 1. ND 规则先判(优先级 1): net_stock > 0 即全量转出, 不再进入 RF 规则
    /// 2. RF 规则(优先级 2, 按模式配置):
    ///    - 可用库存须高于门槛(安全库存/MOQ/免门槛)
    ///    - 销量门控开启时要求 effective_sales < 组内最大
    ///    - 可转出量 = min(可用库存 - 门槛, floor(可用库存 × 比例上限), 净库存)
    /// 3. 可转出量为 0 → 非候选
    pub fn classify_donor(
        &self,
        record: &InventoryRecord,
        max_sales_in_group: u32,
        profile: &ModeProfile,
    ) -> Option<DonorCandidate> {
        match record.rp_type {
            RpType::Nd => self.classify_nd_donor(record),
            RpType::Rf => self.classify_rf_donor(record, max_sales_in_group, profile),
        }
    }

    /// ND 转出规则: 有净库存即全量转出(所有模式一致)
    fn classify_nd_donor(&self, record: &InventoryRecord) -> Option<DonorCandidate> {
        if record.net_stock == 0 {
            return None;
        }

        Some(DonorCandidate {
            article: record.article.clone(),
            site: record.site.clone(),
            om: record.om.clone(),
            transfer_type: TransferType::Nd,
            max_donate_qty: record.net_stock,
            snapshot: DonorSnapshot::capture(record),
        })
    }

    /// RF 转出规则(模式差异全部来自 ModeProfile)
    fn classify_rf_donor(
        &self,
        record: &InventoryRecord,
        max_sales_in_group: u32,
        profile: &ModeProfile,
    ) -> Option<DonorCandidate> {
        let threshold = profile.rf_threshold_value(record.safety_stock, record.moq);

        if record.available_stock <= threshold {
            return None;
        }
        if profile.rf_sales_gated && record.effective_sales >= max_sales_in_group {
            return None;
        }

        // 可用库存只放宽资格与上限, 物理转出量始终以净库存封顶
        let base = record.available_stock - threshold;
        let ratio_cap = (record.available_stock as f64 * profile.rf_cap_ratio).floor() as u32;
        let qty = base.min(ratio_cap).min(record.net_stock);

        if qty == 0 {
            return None;
        }

        Some(DonorCandidate {
            article: record.article.clone(),
            site: record.site.clone(),
            om: record.om.clone(),
            transfer_type: profile.rf_transfer_type,
            max_donate_qty: qty,
            snapshot: DonorSnapshot::capture(record),
        })
    }

    /// 接收资格判定: 有目标需求量即为接收候选(所有模式一致)
    ///
    /// 需求量 = target 绝对口径, 不扣自身现有库存
    pub fn classify_receiver(&self, record: &InventoryRecord) -> Option<ReceiverDescriptor> {
        if !record.is_receiver_candidate() {
            return None;
        }

        Some(ReceiverDescriptor {
            article: record.article.clone(),
            site: record.site.clone(),
            om: record.om.clone(),
            snapshot: ReceiverSnapshot::capture(record),
        })
    }
}

impl Default for EligibilityEngine {
    fn default() -> Self {
        Self::new()
    }
}
