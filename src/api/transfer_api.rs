// ==========================================
// 零售库存调货建议生成系统 - 调货建议API
// ==========================================
// 职责: 面向调用方的业务接口, 串联 导入 → 引擎 → 统计
// 引擎本身不写日志; 运行过程的可观测性集中在本层
// ==========================================

use crate::api::error::ApiResult;
use crate::domain::record::InventoryRecord;
use crate::domain::summary::TransferSummary;
use crate::domain::transfer::TransferRecommendation;
use crate::domain::types::TransferMode;
use crate::engine::diagnosis::{diagnose_empty_run, EmptyRunDiagnosis};
use crate::engine::{SummaryEngine, TransferEngine};
use crate::importer::{RecordNormalizer, UniversalFileParser};
use std::path::Path;
use tracing::{info, instrument};

// ==========================================
// TransferRunResult - 单次运行结果
// ==========================================
#[derive(Debug, Clone)]
pub struct TransferRunResult {
    pub mode: TransferMode,
    pub records: Vec<InventoryRecord>,
    pub recommendations: Vec<TransferRecommendation>,
    pub summary: TransferSummary,
    /// 零建议时的原因诊断
    pub diagnosis: Option<EmptyRunDiagnosis>,
}

// ==========================================
// TransferApi - 调货建议API
// ==========================================
pub struct TransferApi {
    parser: UniversalFileParser,
    normalizer: RecordNormalizer,
    engine: TransferEngine,
    summary_engine: SummaryEngine,
}

impl TransferApi {
    pub fn new() -> Self {
        Self {
            parser: UniversalFileParser,
            normalizer: RecordNormalizer::new(),
            engine: TransferEngine::new(),
            summary_engine: SummaryEngine::new(),
        }
    }

    /// 从数据文件运行完整流程
    #[instrument(skip(self), fields(mode = %mode))]
    pub fn run_file(&self, file_path: &Path, mode: TransferMode) -> ApiResult<TransferRunResult> {
        info!("读取数据文件: {}", file_path.display());
        let sheet = self.parser.parse(file_path)?;
        info!("解析完成: {} 行数据", sheet.rows.len());

        let records = self.normalizer.normalize(&sheet)?;
        self.run_records(records, mode)
    }

    /// 对已标准化的记录运行引擎与统计
    pub fn run_records(
        &self,
        records: Vec<InventoryRecord>,
        mode: TransferMode,
    ) -> ApiResult<TransferRunResult> {
        info!(
            "开始生成调货建议: 模式 {} ({}), 记录数 {}",
            mode,
            mode.title(),
            records.len()
        );

        let recommendations = self.engine.generate_recommendations(&records, mode)?;
        let summary = self.summary_engine.summarize(&recommendations);
        tracing::debug!(
            "统计摘要: {}",
            serde_json::to_string(&summary).unwrap_or_default()
        );

        let diagnosis = if recommendations.is_empty() {
            let diagnosis = diagnose_empty_run(&records, mode);
            info!("无调货建议: {}", diagnosis.message);
            Some(diagnosis)
        } else {
            info!(
                "生成完成: {} 条建议, 总转出 {} 件, 涉及 {} 个产品 / {} 个OM",
                summary.total_lines,
                summary.total_transfer_qty,
                summary.article_count,
                summary.om_count
            );
            None
        };

        Ok(TransferRunResult {
            mode,
            records,
            recommendations,
            summary,
            diagnosis,
        })
    }
}

impl Default for TransferApi {
    fn default() -> Self {
        Self::new()
    }
}
