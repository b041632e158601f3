// ==========================================
// 零售库存调货建议生成系统 - 命令行入口
// ==========================================
// 用法:
//   retail-transfer-dss <数据文件.xlsx|.csv> <A|B|C> [输出目录]
//
// 批处理驱动: 读取库存数据 → 生成调货建议 → 打印统计 → 导出 CSV 报表
// ==========================================

use anyhow::{bail, Context};
use chrono::Local;
use retail_transfer_dss::export::CsvExporter;
use retail_transfer_dss::{logging, TransferApi, TransferMode};
use std::path::PathBuf;

fn main() -> anyhow::Result<()> {
    // 初始化日志系统
    logging::init();

    tracing::info!("==================================================");
    tracing::info!("{} - 决策支持系统", retail_transfer_dss::APP_NAME);
    tracing::info!("系统版本: {}", retail_transfer_dss::VERSION);
    tracing::info!("==================================================");

    let mut args = std::env::args().skip(1);

    let input_path = match args.next() {
        Some(p) => PathBuf::from(p),
        None => {
            print_usage();
            bail!("缺少数据文件参数");
        }
    };

    let mode_arg = match args.next() {
        Some(m) => m,
        None => {
            print_usage();
            bail!("缺少转货模式参数");
        }
    };
    let mode = TransferMode::parse(&mode_arg)
        .with_context(|| format!("无效的转货模式: {} (可选 A/B/C)", mode_arg))?;

    let output_dir = args.next().map(PathBuf::from).unwrap_or_else(|| ".".into());

    // 运行完整流程
    let api = TransferApi::new();
    let result = api.run_file(&input_path, mode)?;

    if let Some(diagnosis) = &result.diagnosis {
        tracing::warn!("{}", diagnosis.message);
        tracing::info!("疑难排解建议:");
        for suggestion in &diagnosis.suggestions {
            tracing::info!("  - {}", suggestion);
        }
        return Ok(());
    }

    // 导出报表
    let today = Local::now().date_naive();
    let exporter = CsvExporter::new();

    let rec_path = output_dir.join(CsvExporter::dated_report_name("调货建议", today));
    exporter.export_recommendations(&result.recommendations, &rec_path)?;
    tracing::info!("调货建议明细已导出: {}", rec_path.display());

    let summary_path = output_dir.join(CsvExporter::dated_report_name("统计摘要", today));
    exporter.export_summary(&result.summary, &summary_path)?;
    tracing::info!("统计摘要已导出: {}", summary_path.display());

    print_summary_overview(&result);

    Ok(())
}

fn print_usage() {
    eprintln!("用法: retail-transfer-dss <数据文件.xlsx|.csv> <A|B|C> [输出目录]");
    eprintln!("  模式 A: 保守转货 (RF 按安全库存门槛, 50% 上限)");
    eprintln!("  模式 B: 加强转货 (RF 按 MOQ 门槛, 90% 上限)");
    eprintln!("  模式 C: 特强转货 (RF 免最低库存门槛, 允许跨 OM)");
}

fn print_summary_overview(result: &retail_transfer_dss::TransferRunResult) {
    let summary = &result.summary;
    tracing::info!("---------------- 统计概览 ----------------");
    tracing::info!("转货模式:       {} ({})", result.mode, result.mode.title());
    tracing::info!("总转货建议数量: {}", summary.total_transfer_qty);
    tracing::info!("总转货行数:     {}", summary.total_lines);
    tracing::info!("涉及产品数量:   {}", summary.article_count);
    tracing::info!("涉及OM数量:     {}", summary.om_count);
    for stats in &summary.by_transfer_type {
        tracing::info!(
            "  {}: {} 件 / {} 行",
            stats.transfer_type,
            stats.total_qty,
            stats.line_count
        );
    }
    if !summary.demand_audit.is_empty() {
        tracing::error!(
            "发现 {} 个产品的转出量超过总需求, 请联系维护者",
            summary.demand_audit.len()
        );
    }
}
