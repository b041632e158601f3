// ==========================================
// 导入管道端到端测试
// ==========================================
// 场景: CSV 数据文件 → 解析 → 清洗校验 → 引擎 → 报表导出
// ==========================================

use retail_transfer_dss::export::CsvExporter;
use retail_transfer_dss::{ApiError, ImportError, TransferApi, TransferMode};
use std::io::Write;
use std::path::PathBuf;
use tempfile::TempDir;

// ==========================================
// 测试辅助函数
// ==========================================

const HEADER: &str = "Article,Article Description,RP Type,Site,OM,MOQ,SaSa Net Stock,Target,Pending Received,Safety Stock,Last Month Sold Qty,MTD Sold Qty";

fn write_dataset(dir: &TempDir, name: &str, lines: &[&str]) -> PathBuf {
    let path = dir.path().join(name);
    let mut file = std::fs::File::create(&path).unwrap();
    for line in lines {
        writeln!(file, "{}", line).unwrap();
    }
    path
}

// ==========================================
// 完整流程
// ==========================================

#[test]
fn test_csv_to_recommendations_and_reports() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(
        &dir,
        "inventory.csv",
        &[
            HEADER,
            // ND 转出方 10 件
            "X001,润唇膏,ND,S001,G1,0,10,0,0,0,0,0",
            // RF 转出方: 可用 20 > 安全库存 8, 销量 3 低于组内最高 9
            "X001,润唇膏,RF,S002,G1,2,20,0,0,8,3,0",
            // 组内最高销量店铺(不可转出)
            "X001,润唇膏,RF,S003,G1,2,5,0,0,2,9,0",
            // 接收方
            "X001,润唇膏,RF,S004,G1,1,0,18,0,2,6,0",
        ],
    );

    let api = TransferApi::new();
    let result = api.run_file(&path, TransferMode::A).unwrap();

    assert_eq!(result.records.len(), 4);
    assert!(result.diagnosis.is_none());

    // ND 10 件先出, RF 补 8 件至需求上限 18
    assert_eq!(result.recommendations.len(), 2);
    assert_eq!(result.recommendations[0].donor_site, "S001");
    assert_eq!(result.recommendations[0].qty, 10);
    assert_eq!(result.recommendations[1].donor_site, "S002");
    assert_eq!(result.recommendations[1].qty, 8);
    assert_eq!(result.summary.total_transfer_qty, 18);

    // 报表导出
    let exporter = CsvExporter::new();
    let rec_path = dir.path().join("调货建议.csv");
    let summary_path = dir.path().join("统计摘要.csv");
    exporter
        .export_recommendations(&result.recommendations, &rec_path)
        .unwrap();
    exporter.export_summary(&result.summary, &summary_path).unwrap();

    let rec_content = std::fs::read_to_string(&rec_path).unwrap();
    assert!(rec_content.contains("S001"));
    assert!(rec_content.contains("ND Transfer"));
    assert!(rec_content.contains("RF Excess Transfer"));

    let summary_content = std::fs::read_to_string(&summary_path).unwrap();
    assert!(summary_content.contains("KPI Overview"));
    assert!(summary_content.contains("X001"));
}

#[test]
fn test_empty_run_produces_diagnosis() {
    let dir = tempfile::tempdir().unwrap();
    // 只有转出方, 没有目标需求
    let path = write_dataset(
        &dir,
        "inventory.csv",
        &[HEADER, "X001,润唇膏,ND,S001,G1,0,10,0,0,0,0,0"],
    );

    let api = TransferApi::new();
    let result = api.run_file(&path, TransferMode::A).unwrap();

    assert!(result.recommendations.is_empty());
    let diagnosis = result.diagnosis.unwrap();
    assert_eq!(diagnosis.donor_count, 1);
    assert_eq!(diagnosis.receiver_count, 0);
}

// ==========================================
// 数据质量失败路径
// ==========================================

#[test]
fn test_missing_column_rejects_dataset() {
    let dir = tempfile::tempdir().unwrap();
    // 缺少 MTD Sold Qty 栏位
    let path = write_dataset(
        &dir,
        "inventory.csv",
        &[
            "Article,Article Description,RP Type,Site,OM,MOQ,SaSa Net Stock,Target,Pending Received,Safety Stock,Last Month Sold Qty",
            "X001,润唇膏,ND,S001,G1,0,10,0,0,0,0",
        ],
    );

    let api = TransferApi::new();
    let err = api.run_file(&path, TransferMode::A).unwrap_err();

    match err {
        ApiError::Import(ImportError::MissingColumns(missing)) => {
            assert_eq!(missing, vec!["MTD Sold Qty".to_string()]);
        }
        other => panic!("期望 MissingColumns, 实际 {:?}", other),
    }
}

#[test]
fn test_invalid_numeric_rejects_dataset() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_dataset(
        &dir,
        "inventory.csv",
        &[
            HEADER,
            "X001,润唇膏,ND,S001,G1,0,10,0,0,0,0,0",
            "X001,润唇膏,RF,S002,G1,0,很多,5,0,0,0,0",
        ],
    );

    let api = TransferApi::new();
    let err = api.run_file(&path, TransferMode::A).unwrap_err();

    match err {
        ApiError::Import(ImportError::TypeConversionError { row, field, .. }) => {
            assert_eq!(row, 3);
            assert_eq!(field, "SaSa Net Stock");
        }
        other => panic!("期望 TypeConversionError, 实际 {:?}", other),
    }
}

#[test]
fn test_unsupported_file_format() {
    let api = TransferApi::new();
    let err = api
        .run_file(std::path::Path::new("inventory.txt"), TransferMode::A)
        .unwrap_err();

    assert!(matches!(
        err,
        ApiError::Import(ImportError::UnsupportedFormat(_))
    ));
}
