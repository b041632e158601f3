// ==========================================
// 零售库存调货建议生成系统 - 转出候选排序器
// ==========================================
// 职责: 产品组内转出候选排序
// 输入: 已分类的转出候选列表
// 输出: 按处理顺序排列的候选列表
// ==========================================

use crate::domain::transfer::DonorCandidate;
use std::cmp::Ordering;

// ==========================================
// DonorSorter - 转出候选排序器
// ==========================================
pub struct DonorSorter;

impl DonorSorter {
    pub fn new() -> Self {
        Self
    }

    /// 排序转出候选
    ///
    /// 排序键:
    /// 1) 优先级档位: ND 档先于 RF 档(与销量无关)
    /// 2) 有效销量升序(低销量先被转出; 三种模式一致,
    ///    最高销量店铺自然排在档尾, 最不易被抽空)
    /// 3) 店铺编号升序(确定性平局裁决)
    pub fn sort(&self, mut donors: Vec<DonorCandidate>) -> Vec<DonorCandidate> {
        donors.sort_by(|a, b| self.compare(a, b));
        donors
    }

    /// 比较两个转出候选的处理顺序
    fn compare(&self, a: &DonorCandidate, b: &DonorCandidate) -> Ordering {
        // 1. 档位: ND 先于 RF
        match a.priority_tier().cmp(&b.priority_tier()) {
            Ordering::Equal => {}
            other => return other,
        }

        // 2. 有效销量升序
        match a
            .snapshot
            .effective_sales
            .cmp(&b.snapshot.effective_sales)
        {
            Ordering::Equal => {}
            other => return other,
        }

        // 3. 店铺编号升序
        a.site.cmp(&b.site)
    }
}

impl Default for DonorSorter {
    fn default() -> Self {
        Self::new()
    }
}
