// ==========================================
// 零售库存调货建议生成系统 - 调货匹配器
// ==========================================
// 职责: 产品组内贪心匹配, 转出候选按序消耗, 接收池按店铺序扫描
// 红线: 总转出不得超过总需求; 单店转出不得超过净库存
// ==========================================
// 输入: 排序后转出候选 + 接收池 + 模式配置
// 输出: TransferRecommendation 列表(含匹配时快照)
// ==========================================

use crate::config::mode_profile::ModeProfile;
use crate::domain::transfer::{DonorCandidate, TransferRecommendation};
use crate::engine::demand::ReceiverPool;
use crate::engine::error::{EngineError, EngineResult};

// ==========================================
// TransferMatcher - 调货匹配器
// ==========================================
pub struct TransferMatcher;

impl TransferMatcher {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 匹配单个产品组
    ///
    /// # 规则
    /// 1. 逐个处理转出候选(调用方已按优先级排序)
    /// 2. 接收池按店铺编号升序扫描, 跳过: 自转 / OM 策略不允许 / 余量为 0
    /// 3. 单笔分配量 = min(转出余量, 接收余量, 需求上限余量)
    /// 4. 分配量为 0 时终止当前转出候选(转出耗尽或需求上限已到)
    /// 5. 转出候选可拆分给多个接收方; 接收方可由多个转出方补足
    ///
    /// # 失败语义
    /// 缺接收方只产出空结果; 仅后置条件违规返回错误(引擎缺陷)
    pub fn match_group(
        &self,
        article_desc: &str,
        donors: &[DonorCandidate],
        pool: &mut ReceiverPool,
        profile: &ModeProfile,
    ) -> EngineResult<Vec<TransferRecommendation>> {
        let total_demand = pool.total_demand();
        let mut allocated_total: u64 = 0;
        let mut recommendations = Vec::new();

        for donor in donors {
            // 防御性封顶: 可转出量理应已被分类器按净库存封顶
            let capacity = donor.max_donate_qty.min(donor.snapshot.net_stock);
            let mut donor_remaining = capacity;

            for entry in pool.entries_mut() {
                if donor_remaining == 0 || allocated_total >= total_demand {
                    break;
                }
                if entry.remaining_need == 0 {
                    continue;
                }
                // 禁止自转
                if entry.descriptor.site == donor.site {
                    continue;
                }
                if !profile.om_policy.allows(&donor.om, &entry.descriptor.om) {
                    continue;
                }

                let headroom = total_demand - allocated_total;
                let qty = (donor_remaining as u64)
                    .min(entry.remaining_need as u64)
                    .min(headroom) as u32;
                if qty == 0 {
                    break;
                }

                recommendations.push(TransferRecommendation {
                    article: donor.article.clone(),
                    article_desc: article_desc.to_string(),
                    om: donor.om.clone(),
                    donor_site: donor.site.clone(),
                    receiver_site: entry.descriptor.site.clone(),
                    receiver_om: entry.descriptor.om.clone(),
                    qty,
                    transfer_type: donor.transfer_type,
                    article_total_demand: total_demand,
                    donor_snapshot: donor.snapshot.clone(),
                    receiver_snapshot: entry.descriptor.snapshot.clone(),
                    notes: format!("从{}转移至{}", donor.site, entry.descriptor.site),
                });

                donor_remaining -= qty;
                entry.remaining_need -= qty;
                allocated_total += qty as u64;
            }

            // 后置条件: 单店转出不得超过净库存
            let donated = capacity - donor_remaining;
            if donated > donor.snapshot.net_stock {
                return Err(EngineError::DonorOverNetStock {
                    article: donor.article.clone(),
                    site: donor.site.clone(),
                    donated,
                    net_stock: donor.snapshot.net_stock,
                });
            }
        }

        // 后置条件: 产品级总转出不得超过总需求
        if allocated_total > total_demand {
            return Err(EngineError::ArticleOverDemand {
                article: donors
                    .first()
                    .map(|d| d.article.clone())
                    .unwrap_or_default(),
                transferred: allocated_total,
                total_demand,
            });
        }

        Ok(recommendations)
    }
}

impl Default for TransferMatcher {
    fn default() -> Self {
        Self::new()
    }
}
