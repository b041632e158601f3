// ==========================================
// 零售库存调货建议生成系统 - 空结果诊断
// ==========================================
// 职责: 解释一次运行为何没有产出任何调货建议
// 空结果不是错误; 诊断供上层以友好方式呈现
// ==========================================

use crate::config::mode_profile::ModeProfile;
use crate::domain::record::InventoryRecord;
use crate::domain::types::TransferMode;
use crate::engine::classifier::EligibilityEngine;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

// ==========================================
// EmptyRunReason - 空结果原因
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EmptyRunReason {
    /// 既无转出候选也无接收候选
    NoEligibleCandidates,
    /// 无转出候选
    NoTransferOutCandidates,
    /// 无接收候选
    NoTransferInCandidates,
    /// 转出与接收候选的产品无交集
    NoCommonArticles,
    /// 仅因 OM 约束 / 自转禁止无法成交
    GroupRestriction,
}

// ==========================================
// EmptyRunDiagnosis - 诊断结果
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyRunDiagnosis {
    pub mode: TransferMode,
    pub reason: EmptyRunReason,
    pub donor_count: usize,
    pub receiver_count: usize,
    pub message: String,
    pub suggestions: Vec<String>,
}

/// 诊断零建议的运行
///
/// 按与引擎一致的分类规则重新扫描候选, 再按覆盖面收敛原因:
/// 双无候选 → 无转出 → 无接收 → 产品无交集 → 组约束
pub fn diagnose_empty_run(records: &[InventoryRecord], mode: TransferMode) -> EmptyRunDiagnosis {
    let profile = ModeProfile::for_mode(mode);
    let classifier = EligibilityEngine::new();

    let mut groups: BTreeMap<&str, Vec<&InventoryRecord>> = BTreeMap::new();
    for record in records {
        groups.entry(record.article.as_str()).or_default().push(record);
    }

    let mut donor_count = 0usize;
    let mut receiver_count = 0usize;
    let mut donor_articles: BTreeSet<&str> = BTreeSet::new();
    let mut receiver_articles: BTreeSet<&str> = BTreeSet::new();

    for (article, rows) in &groups {
        let candidates = classifier.classify_group(rows, &profile);
        if !candidates.donors.is_empty() {
            donor_count += candidates.donors.len();
            donor_articles.insert(*article);
        }
        if !candidates.receivers.is_empty() {
            receiver_count += candidates.receivers.len();
            receiver_articles.insert(*article);
        }
    }

    let has_common_articles = donor_articles
        .intersection(&receiver_articles)
        .next()
        .is_some();

    let (reason, message) = match (donor_count, receiver_count) {
        (0, 0) => (
            EmptyRunReason::NoEligibleCandidates,
            "没有找到符合转出或转入条件的候选店铺。请检查数据是否包含: ND类型且库存大于0的产品, 以及设置了目标需求量的产品。".to_string(),
        ),
        (0, _) => (
            EmptyRunReason::NoTransferOutCandidates,
            "没有找到符合转出条件的候选店铺。请检查是否有ND类型产品且库存大于0, 或RF类型产品是否满足所选模式的转出条件。".to_string(),
        ),
        (_, 0) => (
            EmptyRunReason::NoTransferInCandidates,
            "没有找到符合转入条件的候选店铺。请检查是否有产品设置了目标需求量(Target > 0)。".to_string(),
        ),
        _ if !has_common_articles => (
            EmptyRunReason::NoCommonArticles,
            "没有找到可以匹配的产品。转出候选和转入候选的产品没有交集。".to_string(),
        ),
        _ => (
            EmptyRunReason::GroupRestriction,
            "没有找到符合组约束的调货机会。请检查转出与接收店铺是否满足所选模式的OM约束, 或是否仅存在同店自转场景。".to_string(),
        ),
    };

    EmptyRunDiagnosis {
        mode,
        reason,
        donor_count,
        receiver_count,
        message,
        suggestions: vec![
            "检查文件是否包含所有必要栏位".to_string(),
            "确认是否有ND类型产品且库存大于0".to_string(),
            "确认是否有产品设置了目标需求量".to_string(),
            "检查转出和接收产品是否满足所选模式的OM约束".to_string(),
            "验证数量栏位是否为非负整数".to_string(),
        ],
    }
}
