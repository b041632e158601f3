// ==========================================
// 零售库存调货建议生成系统 - 统计摘要引擎
// ==========================================
// 红线: 无状态引擎, 对建议列表的纯折叠, 无副作用
// ==========================================
// 输入: 调货建议列表
// 输出: TransferSummary(供报表/导出层消费)
// ==========================================

use crate::domain::summary::{
    ArticleStats, DemandAuditEntry, OmStats, ReceiverStats, TransferSummary, TransferTypeStats,
};
use crate::domain::transfer::TransferRecommendation;
use crate::domain::types::TransferType;
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// SummaryEngine - 统计摘要引擎
// ==========================================
pub struct SummaryEngine;

impl SummaryEngine {
    pub fn new() -> Self {
        Self
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 折叠建议列表为统计摘要
    ///
    /// 各分组统计均按键升序输出; 相同输入必然产出相同摘要
    pub fn summarize(&self, recommendations: &[TransferRecommendation]) -> TransferSummary {
        if recommendations.is_empty() {
            return TransferSummary::empty();
        }

        let total_transfer_qty: u64 = recommendations.iter().map(|r| r.qty as u64).sum();
        let total_lines = recommendations.len() as u32;

        let by_article = self.fold_by_article(recommendations);
        let by_om = self.fold_by_om(recommendations);
        let by_transfer_type = self.fold_by_transfer_type(recommendations);
        let by_receiver = self.fold_by_receiver(recommendations);
        let demand_audit = self.audit_demand(&by_article);

        TransferSummary {
            total_transfer_qty,
            total_lines,
            article_count: by_article.len() as u32,
            om_count: by_om.len() as u32,
            by_article,
            by_om,
            by_transfer_type,
            by_receiver,
            demand_audit,
        }
    }

    // ==========================================
    // 分组折叠
    // ==========================================

    /// 按产品统计: 需求/转出/行数/涉及 OM/满足率
    fn fold_by_article(&self, recommendations: &[TransferRecommendation]) -> Vec<ArticleStats> {
        struct Acc {
            total_demand: u64,
            total_transferred: u64,
            line_count: u32,
            oms: BTreeSet<String>,
        }

        let mut folded: BTreeMap<&str, Acc> = BTreeMap::new();
        for rec in recommendations {
            let acc = folded.entry(rec.article.as_str()).or_insert_with(|| Acc {
                // 需求上限由匹配器随建议带出, 同产品各行一致
                total_demand: rec.article_total_demand,
                total_transferred: 0,
                line_count: 0,
                oms: BTreeSet::new(),
            });
            acc.total_transferred += rec.qty as u64;
            acc.line_count += 1;
            acc.oms.insert(rec.om.clone());
        }

        folded
            .into_iter()
            .map(|(article, acc)| ArticleStats {
                article: article.to_string(),
                total_demand: acc.total_demand,
                total_transferred: acc.total_transferred,
                line_count: acc.line_count,
                om_count: acc.oms.len() as u32,
                fulfillment_rate_pct: rate_pct(acc.total_transferred, acc.total_demand),
            })
            .collect()
    }

    /// 按 OM 统计(转出方口径)
    fn fold_by_om(&self, recommendations: &[TransferRecommendation]) -> Vec<OmStats> {
        struct Acc {
            total_transferred: u64,
            line_count: u32,
            articles: BTreeSet<String>,
        }

        let mut folded: BTreeMap<&str, Acc> = BTreeMap::new();
        for rec in recommendations {
            let acc = folded.entry(rec.om.as_str()).or_insert_with(|| Acc {
                total_transferred: 0,
                line_count: 0,
                articles: BTreeSet::new(),
            });
            acc.total_transferred += rec.qty as u64;
            acc.line_count += 1;
            acc.articles.insert(rec.article.clone());
        }

        folded
            .into_iter()
            .map(|(om, acc)| OmStats {
                om: om.to_string(),
                total_transferred: acc.total_transferred,
                line_count: acc.line_count,
                article_count: acc.articles.len() as u32,
            })
            .collect()
    }

    /// 按转出类型统计
    fn fold_by_transfer_type(
        &self,
        recommendations: &[TransferRecommendation],
    ) -> Vec<TransferTypeStats> {
        let mut folded: BTreeMap<TransferType, (u64, u32)> = BTreeMap::new();
        for rec in recommendations {
            let acc = folded.entry(rec.transfer_type).or_insert((0, 0));
            acc.0 += rec.qty as u64;
            acc.1 += 1;
        }

        folded
            .into_iter()
            .map(|(transfer_type, (total_qty, line_count))| TransferTypeStats {
                transfer_type,
                total_qty,
                line_count,
            })
            .collect()
    }

    /// 按接收店铺统计: 目标(去重到 产品x店铺)与实收
    fn fold_by_receiver(&self, recommendations: &[TransferRecommendation]) -> Vec<ReceiverStats> {
        let mut received: BTreeMap<&str, u64> = BTreeMap::new();
        // 同一接收店铺可能出现在多条建议/多个产品中, 目标按 (店铺, 产品) 去重累计
        let mut targets: BTreeMap<(&str, &str), u64> = BTreeMap::new();

        for rec in recommendations {
            *received.entry(rec.receiver_site.as_str()).or_insert(0) += rec.qty as u64;
            targets.insert(
                (rec.receiver_site.as_str(), rec.article.as_str()),
                rec.receiver_snapshot.target as u64,
            );
        }

        let mut target_by_site: BTreeMap<&str, u64> = BTreeMap::new();
        for ((site, _article), target) in targets {
            *target_by_site.entry(site).or_insert(0) += target;
        }

        received
            .into_iter()
            .map(|(site, received_qty)| {
                let target_qty = target_by_site.get(site).copied().unwrap_or(0);
                ReceiverStats {
                    site: site.to_string(),
                    target_qty,
                    received_qty,
                    fulfillment_rate_pct: rate_pct(received_qty, target_qty),
                }
            })
            .collect()
    }

    /// 需求约束审计: 转出超过需求的产品(引擎正确时为空)
    fn audit_demand(&self, by_article: &[ArticleStats]) -> Vec<DemandAuditEntry> {
        by_article
            .iter()
            .filter(|stats| stats.total_transferred > stats.total_demand)
            .map(|stats| DemandAuditEntry {
                article: stats.article.clone(),
                total_demand: stats.total_demand,
                total_transferred: stats.total_transferred,
                excess: stats.total_transferred - stats.total_demand,
            })
            .collect()
    }
}

impl Default for SummaryEngine {
    fn default() -> Self {
        Self::new()
    }
}

/// 满足率(百分比, 保留两位小数); 需求为 0 时记 0
fn rate_pct(transferred: u64, demand: u64) -> f64 {
    if demand == 0 {
        return 0.0;
    }
    let pct = transferred as f64 / demand as f64 * 100.0;
    (pct * 100.0).round() / 100.0
}
