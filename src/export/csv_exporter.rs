// ==========================================
// 零售库存调货建议生成系统 - CSV 报表导出
// ==========================================
// 职责: 调货建议明细 + 统计摘要两份报表
// 所有数值取自匹配时快照, 不重算
// ==========================================

use crate::domain::summary::TransferSummary;
use crate::domain::transfer::TransferRecommendation;
use crate::export::error::ExportResult;
use chrono::NaiveDate;
use csv::WriterBuilder;
use std::path::Path;

/// 调货建议明细报表栏位(顺序即契约)
pub const RECOMMENDATION_COLUMNS: [&str; 20] = [
    "Article",
    "Article Description",
    "OM",
    "Transfer Site",
    "Transfer Qty",
    "Transfer Site Original Stock",
    "Transfer Site After Transfer Stock",
    "Transfer Site Safety Stock",
    "Transfer Site MOQ",
    "Transfer Site RP Type",
    "Transfer Site Last Month Sold Qty",
    "Transfer Site MTD Sold Qty",
    "Receive Site",
    "Receive Site Target Qty",
    "Receive Site RP Type",
    "Receive Site Last Month Sold Qty",
    "Receive Site MTD Sold Qty",
    "Transfer Type",
    "Receive Qty",
    "Notes",
];

// ==========================================
// CsvExporter - CSV 报表导出器
// ==========================================
pub struct CsvExporter;

impl CsvExporter {
    pub fn new() -> Self {
        Self
    }

    /// 带日期的报表文件名, 如 "调货建议_20251008.csv"
    pub fn dated_report_name(prefix: &str, date: NaiveDate) -> String {
        format!("{}_{}.csv", prefix, date.format("%Y%m%d"))
    }

    // ==========================================
    // 调货建议明细
    // ==========================================

    pub fn export_recommendations(
        &self,
        recommendations: &[TransferRecommendation],
        path: &Path,
    ) -> ExportResult<()> {
        let mut writer = WriterBuilder::new().from_path(path)?;

        writer.write_record(RECOMMENDATION_COLUMNS)?;
        for rec in recommendations {
            let row: [String; 20] = [
                rec.article.clone(),
                rec.article_desc.clone(),
                rec.om.clone(),
                rec.donor_site.clone(),
                rec.qty.to_string(),
                rec.donor_snapshot.net_stock.to_string(),
                rec.donor_stock_after().to_string(),
                rec.donor_snapshot.safety_stock.to_string(),
                rec.donor_snapshot.moq.to_string(),
                rec.donor_snapshot.rp_type.to_string(),
                rec.donor_snapshot.last_month_sold.to_string(),
                rec.donor_snapshot.mtd_sold.to_string(),
                rec.receiver_site.clone(),
                rec.receiver_snapshot.target.to_string(),
                rec.receiver_snapshot.rp_type.to_string(),
                rec.receiver_snapshot.last_month_sold.to_string(),
                rec.receiver_snapshot.mtd_sold.to_string(),
                rec.transfer_type.to_string(),
                rec.qty.to_string(),
                rec.notes.clone(),
            ];
            writer.write_record(&row)?;
        }

        writer.flush()?;
        Ok(())
    }

    // ==========================================
    // 统计摘要
    // ==========================================

    /// 分节摘要报表: KPI 概览 / 按产品 / 按OM / 按转出类型 / 按接收店铺
    pub fn export_summary(&self, summary: &TransferSummary, path: &Path) -> ExportResult<()> {
        // 各节行宽不一致, 需放宽 CSV 行长度校验
        let mut writer = WriterBuilder::new().flexible(true).from_path(path)?;

        // KPI 概览
        writer.write_record(["KPI Overview"])?;
        writer.write_record([
            "".to_string(),
            "总转货建议数量".to_string(),
            summary.total_transfer_qty.to_string(),
        ])?;
        writer.write_record([
            "".to_string(),
            "总转货行数".to_string(),
            summary.total_lines.to_string(),
        ])?;
        writer.write_record([
            "".to_string(),
            "涉及产品数量".to_string(),
            summary.article_count.to_string(),
        ])?;
        writer.write_record([
            "".to_string(),
            "涉及OM数量".to_string(),
            summary.om_count.to_string(),
        ])?;
        writer.write_record([""])?;

        // 按产品统计
        if !summary.by_article.is_empty() {
            writer.write_record(["Statistics by Article"])?;
            writer.write_record([
                "Article",
                "总需求件数",
                "总调货件数",
                "涉及OM数量",
                "转货行数",
                "需求满足率(%)",
            ])?;
            for stats in &summary.by_article {
                writer.write_record([
                    stats.article.clone(),
                    stats.total_demand.to_string(),
                    stats.total_transferred.to_string(),
                    stats.om_count.to_string(),
                    stats.line_count.to_string(),
                    format!("{:.2}", stats.fulfillment_rate_pct),
                ])?;
            }
            writer.write_record([""])?;
        }

        // 按 OM 统计
        if !summary.by_om.is_empty() {
            writer.write_record(["Statistics by OM"])?;
            writer.write_record(["OM", "总调货件数", "涉及产品数量", "转货行数"])?;
            for stats in &summary.by_om {
                writer.write_record([
                    stats.om.clone(),
                    stats.total_transferred.to_string(),
                    stats.article_count.to_string(),
                    stats.line_count.to_string(),
                ])?;
            }
            writer.write_record([""])?;
        }

        // 转出类型分布
        if !summary.by_transfer_type.is_empty() {
            writer.write_record(["Transfer Type Distribution"])?;
            writer.write_record(["Transfer Type", "总件数", "涉及行数"])?;
            for stats in &summary.by_transfer_type {
                writer.write_record([
                    stats.transfer_type.to_string(),
                    stats.total_qty.to_string(),
                    stats.line_count.to_string(),
                ])?;
            }
            writer.write_record([""])?;
        }

        // 接收店铺分布
        if !summary.by_receiver.is_empty() {
            writer.write_record(["Receive Site Distribution"])?;
            writer.write_record([
                "Receive Site",
                "实际接收数量",
                "目标需求数量",
                "需求满足率(%)",
            ])?;
            for stats in &summary.by_receiver {
                writer.write_record([
                    stats.site.clone(),
                    stats.received_qty.to_string(),
                    stats.target_qty.to_string(),
                    format!("{:.2}", stats.fulfillment_rate_pct),
                ])?;
            }
            writer.write_record([""])?;
        }

        // 约束审计(引擎正确时为空)
        if !summary.demand_audit.is_empty() {
            writer.write_record(["Demand Constraint Violations"])?;
            writer.write_record(["Article", "总需求件数", "总调货件数", "超出数量"])?;
            for entry in &summary.demand_audit {
                writer.write_record([
                    entry.article.clone(),
                    entry.total_demand.to_string(),
                    entry.total_transferred.to_string(),
                    entry.excess.to_string(),
                ])?;
            }
        }

        writer.flush()?;
        Ok(())
    }
}

impl Default for CsvExporter {
    fn default() -> Self {
        Self::new()
    }
}
