// ==========================================
// 零售库存调货建议生成系统 - 调货引擎编排器
// ==========================================
// 职责: 按产品分组, 串联 分类 → 排序 → 需求解析 → 匹配
// 红线: 纯函数, 不修改输入记录; 产品组之间完全独立
// ==========================================

use crate::config::mode_profile::ModeProfile;
use crate::domain::record::InventoryRecord;
use crate::domain::transfer::TransferRecommendation;
use crate::domain::types::TransferMode;
use crate::engine::classifier::{EligibilityEngine, GroupCandidates};
use crate::engine::demand::DemandResolver;
use crate::engine::error::EngineResult;
use crate::engine::matcher::TransferMatcher;
use crate::engine::ordering::DonorSorter;
use std::collections::BTreeMap;

// ==========================================
// TransferEngine - 调货引擎编排器
// ==========================================
pub struct TransferEngine {
    classifier: EligibilityEngine,
    sorter: DonorSorter,
    resolver: DemandResolver,
    matcher: TransferMatcher,
}

impl TransferEngine {
    pub fn new() -> Self {
        Self {
            classifier: EligibilityEngine::new(),
            sorter: DonorSorter::new(),
            resolver: DemandResolver::new(),
            matcher: TransferMatcher::new(),
        }
    }

    // ==========================================
    // 核心方法
    // ==========================================

    /// 生成调货建议(确定性纯函数)
    ///
    /// 产品组之间相互独立; 按产品编号升序处理,
    /// 相同输入与模式必然产出逐字节相同的建议序列
    pub fn generate_recommendations(
        &self,
        records: &[InventoryRecord],
        mode: TransferMode,
    ) -> EngineResult<Vec<TransferRecommendation>> {
        let profile = ModeProfile::for_mode(mode);

        // 按产品分组(BTreeMap 保证组间顺序确定)
        let mut groups: BTreeMap<&str, Vec<&InventoryRecord>> = BTreeMap::new();
        for record in records {
            groups.entry(record.article.as_str()).or_default().push(record);
        }

        let mut recommendations = Vec::new();
        for rows in groups.values() {
            recommendations.extend(self.process_group(rows, &profile)?);
        }

        Ok(recommendations)
    }

    /// 处理单个产品组
    fn process_group(
        &self,
        rows: &[&InventoryRecord],
        profile: &ModeProfile,
    ) -> EngineResult<Vec<TransferRecommendation>> {
        let GroupCandidates { donors, receivers } = self.classifier.classify_group(rows, profile);
        if donors.is_empty() || receivers.is_empty() {
            return Ok(Vec::new());
        }

        // 产品描述取组内首个非空值
        let article_desc = rows
            .iter()
            .map(|r| r.article_desc.as_str())
            .find(|d| !d.is_empty())
            .unwrap_or_default();

        let donors = self.sorter.sort(donors);
        let mut pool = self.resolver.resolve(receivers);
        self.matcher
            .match_group(article_desc, &donors, &mut pool, profile)
    }
}

impl Default for TransferEngine {
    fn default() -> Self {
        Self::new()
    }
}
