// ==========================================
// 零售库存调货建议生成系统 - 库存记录领域模型
// ==========================================
// 一行 = 一个 产品(Article) x 店铺(Site) 组合
// 清洗层写入, 引擎层只读
// ==========================================

use crate::domain::types::RpType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

// ==========================================
// RawSheet - 文件解析中间结构
// ==========================================
// 用途: 解析管道中间产物(文件解析 → 清洗校验 → InventoryRecord)
// 生命周期: 仅在导入流程内
#[derive(Debug, Clone, Default)]
pub struct RawSheet {
    /// 表头(首行, 已 TRIM)
    pub headers: Vec<String>,
    /// 数据行: 表头 → 单元格文本(已 TRIM, 全空行已剔除)
    pub rows: Vec<HashMap<String, String>>,
}

impl RawSheet {
    /// 是否包含指定表头
    pub fn has_column(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }
}

// ==========================================
// InventoryRecord - 标准化库存记录
// ==========================================
// 派生字段在清洗时计算一次并缓存, 此后全程只读
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InventoryRecord {
    // ===== 产品标识 =====
    pub article: String,      // 产品编号
    pub article_desc: String, // 产品描述

    // ===== 店铺标识 =====
    pub rp_type: RpType, // 补货类型 (ND/RF)
    pub site: String,    // 店铺编号
    pub om: String,      // 所属 OM 单位

    // ===== 数量字段(非负整数) =====
    pub moq: u32,              // 最小订货量
    pub safety_stock: u32,     // 安全库存
    pub net_stock: u32,        // 在库净库存(物理转出上限)
    pub pending_received: u32, // 在途待收
    pub target: u32,           // 目标需求量(期望在店绝对数量)
    pub last_month_sold: u32,  // 上月销量
    pub mtd_sold: u32,         // 本月至今销量

    // ===== 派生字段(清洗时计算) =====
    pub available_stock: u32, // 净库存 + 在途, 仅用于转出资格判定
    pub effective_sales: u32, // 上月销量 > 0 取上月, 否则取本月至今

    // ===== 清洗备注 =====
    // 记录数据修正日志(销量异常限幅 / RP Type 回退等), 可为空
    pub notes: String,
}

impl InventoryRecord {
    /// 重算派生字段
    ///
    /// # 规则
    /// - available_stock = net_stock + pending_received
    /// - effective_sales = last_month_sold (>0 时), 否则 mtd_sold
    pub fn compute_derived(&mut self) {
        self.available_stock = self.net_stock + self.pending_received;
        self.effective_sales = if self.last_month_sold > 0 {
            self.last_month_sold
        } else {
            self.mtd_sold
        };
    }

    /// 是否为接收候选(有目标需求量)
    pub fn is_receiver_candidate(&self) -> bool {
        self.target > 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_record() -> InventoryRecord {
        InventoryRecord {
            article: "A001".to_string(),
            article_desc: "测试产品".to_string(),
            rp_type: RpType::Rf,
            site: "S001".to_string(),
            om: "G1".to_string(),
            moq: 2,
            safety_stock: 5,
            net_stock: 10,
            pending_received: 3,
            target: 0,
            last_month_sold: 0,
            mtd_sold: 7,
            available_stock: 0,
            effective_sales: 0,
            notes: String::new(),
        }
    }

    #[test]
    fn test_compute_derived_available_stock() {
        let mut record = sample_record();
        record.compute_derived();
        assert_eq!(record.available_stock, 13); // 10 + 3
    }

    #[test]
    fn test_compute_derived_effective_sales_fallback_to_mtd() {
        let mut record = sample_record();
        record.compute_derived();
        assert_eq!(record.effective_sales, 7); // 上月为 0, 取本月至今
    }

    #[test]
    fn test_compute_derived_effective_sales_prefers_last_month() {
        let mut record = sample_record();
        record.last_month_sold = 4;
        record.compute_derived();
        assert_eq!(record.effective_sales, 4);
    }

    #[test]
    fn test_is_receiver_candidate() {
        let mut record = sample_record();
        assert!(!record.is_receiver_candidate());
        record.target = 5;
        assert!(record.is_receiver_candidate());
    }
}
