// ==========================================
// 调货引擎端到端测试
// ==========================================
// 职责: 验证引擎的整体性质
// 覆盖: 守恒约束 / 禁止自转 / OM 约束 / 确定性 / 模式力度单调性
// ==========================================

#[path = "helpers/test_data_builder.rs"]
mod test_data_builder;

use retail_transfer_dss::{
    InventoryRecord, SummaryEngine, TransferEngine, TransferMode, TransferRecommendation,
    TransferType,
};
use std::collections::HashMap;
use test_data_builder::RecordBuilder;

// ==========================================
// 测试辅助函数
// ==========================================

/// 混合数据集: 两个产品, 多 OM, ND/RF 混合
fn mixed_dataset() -> Vec<InventoryRecord> {
    vec![
        // 产品 X / OM G1
        RecordBuilder::new("X", "S01").nd().net_stock(10).build(),
        RecordBuilder::new("X", "S02")
            .rf()
            .net_stock(18)
            .pending_received(2)
            .safety_stock(8)
            .moq(2)
            .last_month_sold(3)
            .build(),
        RecordBuilder::new("X", "S03")
            .rf()
            .net_stock(6)
            .last_month_sold(9) // 组内最高销量
            .build(),
        RecordBuilder::new("X", "S04").rf().target(15).build(),
        RecordBuilder::new("X", "S05").rf().target(9).build(),
        // 产品 X / OM G2
        RecordBuilder::new("X", "S06").om("G2").nd().net_stock(4).build(),
        RecordBuilder::new("X", "S07").om("G2").rf().target(3).build(),
        // 产品 Y / OM G1
        RecordBuilder::new("Y", "S01")
            .rf()
            .net_stock(12)
            .safety_stock(2)
            .moq(1)
            .last_month_sold(1)
            .build(),
        RecordBuilder::new("Y", "S02").rf().mtd_sold(8).build(),
        RecordBuilder::new("Y", "S08").rf().target(30).build(),
    ]
}

fn total_qty(recommendations: &[TransferRecommendation]) -> u64 {
    recommendations.iter().map(|r| r.qty as u64).sum()
}

fn run(records: &[InventoryRecord], mode: TransferMode) -> Vec<TransferRecommendation> {
    TransferEngine::new()
        .generate_recommendations(records, mode)
        .unwrap()
}

// ==========================================
// 守恒约束
// ==========================================

#[test]
fn test_conservation_per_article_and_per_donor() {
    let records = mixed_dataset();

    for mode in [TransferMode::A, TransferMode::B, TransferMode::C] {
        let recommendations = run(&records, mode);

        // 产品级: 总转出 ≤ 总需求
        let mut demand_by_article: HashMap<&str, u64> = HashMap::new();
        for record in &records {
            if record.target > 0 {
                *demand_by_article.entry(record.article.as_str()).or_insert(0) +=
                    record.target as u64;
            }
        }
        let mut transferred_by_article: HashMap<&str, u64> = HashMap::new();
        for rec in &recommendations {
            *transferred_by_article.entry(rec.article.as_str()).or_insert(0) += rec.qty as u64;
        }
        for (article, transferred) in &transferred_by_article {
            let demand = demand_by_article.get(article).copied().unwrap_or(0);
            assert!(
                *transferred <= demand,
                "模式 {:?}: 产品 {} 转出 {} 超过需求 {}",
                mode,
                article,
                transferred,
                demand
            );
        }

        // 店铺级: 单店单产品转出 ≤ 净库存
        let mut donated: HashMap<(&str, &str), u64> = HashMap::new();
        for rec in &recommendations {
            *donated
                .entry((rec.article.as_str(), rec.donor_site.as_str()))
                .or_insert(0) += rec.qty as u64;
        }
        for ((article, site), qty) in donated {
            let net_stock = records
                .iter()
                .find(|r| r.article == article && r.site == site)
                .map(|r| r.net_stock as u64)
                .unwrap();
            assert!(
                qty <= net_stock,
                "模式 {:?}: 店铺 {} 产品 {} 转出 {} 超过净库存 {}",
                mode,
                site,
                article,
                qty,
                net_stock
            );
        }
    }
}

#[test]
fn test_no_self_transfer() {
    // 同店同时具备转出与接收资格
    let records = vec![
        RecordBuilder::new("X", "S01").nd().net_stock(10).target(5).build(),
        RecordBuilder::new("X", "S02").rf().target(8).build(),
    ];

    for mode in [TransferMode::A, TransferMode::B, TransferMode::C] {
        let recommendations = run(&records, mode);
        assert!(recommendations
            .iter()
            .all(|rec| rec.donor_site != rec.receiver_site));
    }
}

// ==========================================
// OM 约束
// ==========================================

#[test]
fn test_same_om_restriction_in_modes_a_b() {
    let records = mixed_dataset();

    for mode in [TransferMode::A, TransferMode::B] {
        let recommendations = run(&records, mode);
        assert!(!recommendations.is_empty());
        for rec in &recommendations {
            assert_eq!(rec.om, rec.receiver_om, "模式 {:?} 必须同 OM", mode);
        }
    }
}

#[test]
fn test_mode_c_hd_restriction() {
    let records = vec![
        RecordBuilder::new("X", "S01").om("HD").nd().net_stock(10).build(),
        RecordBuilder::new("X", "S02").om("HA").rf().target(5).build(),
        RecordBuilder::new("X", "S03").om("HB").rf().target(5).build(),
        RecordBuilder::new("X", "S04").om("HC").rf().target(5).build(),
        RecordBuilder::new("X", "S05").om("G1").rf().target(5).build(),
    ];

    let recommendations = run(&records, TransferMode::C);

    // HD 只能转入 G1
    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].receiver_om, "G1");
    assert_eq!(recommendations[0].qty, 5);
}

// ==========================================
// 确定性
// ==========================================

#[test]
fn test_determinism_byte_identical_output() {
    let records = mixed_dataset();

    for mode in [TransferMode::A, TransferMode::B, TransferMode::C] {
        let first = run(&records, mode);
        let second = run(&records, mode);

        let first_json = serde_json::to_string(&first).unwrap();
        let second_json = serde_json::to_string(&second).unwrap();
        assert_eq!(first_json, second_json);
    }
}

#[test]
fn test_input_records_untouched() {
    let records = mixed_dataset();
    let before = records.clone();

    let _ = run(&records, TransferMode::C);

    assert_eq!(records, before);
}

// ==========================================
// 模式力度单调性
// ==========================================

#[test]
fn test_monotonic_aggressiveness_across_modes() {
    // 需求远大于供给, 需求上限不构成约束
    let records = vec![
        RecordBuilder::new("X", "S01")
            .rf()
            .net_stock(20)
            .safety_stock(8)
            .moq(2)
            .last_month_sold(3)
            .build(),
        RecordBuilder::new("X", "S02")
            .rf()
            .net_stock(15)
            .safety_stock(5)
            .moq(1)
            .last_month_sold(5)
            .build(),
        RecordBuilder::new("X", "S03").rf().last_month_sold(9).build(),
        RecordBuilder::new("X", "S04").rf().target(100).build(),
    ];

    let qty_a = total_qty(&run(&records, TransferMode::A));
    let qty_b = total_qty(&run(&records, TransferMode::B));
    let qty_c = total_qty(&run(&records, TransferMode::C));

    // A: S01 min(20-8, 10)=10, S02 min(15-5, 7)=7 → 17
    // B: S01 min(20-2, 18)=18, S02 min(15-1, 13)=13 → 31
    // C: S01 20, S02 15 → 35
    assert_eq!(qty_a, 17);
    assert_eq!(qty_b, 31);
    assert_eq!(qty_c, 35);
    assert!(qty_a <= qty_b && qty_b <= qty_c);
}

// ==========================================
// 优先级与拆分
// ==========================================

#[test]
fn test_nd_tier_consumed_before_rf_tier() {
    // 需求上限 6, ND 转出方销量虽高仍先于 RF 被消耗
    let records = vec![
        RecordBuilder::new("X", "S01").nd().net_stock(6).last_month_sold(9).build(),
        RecordBuilder::new("X", "S02")
            .rf()
            .net_stock(10)
            .safety_stock(1)
            .last_month_sold(1)
            .build(),
        RecordBuilder::new("X", "S03").rf().target(6).last_month_sold(2).build(),
    ];

    let recommendations = run(&records, TransferMode::A);

    assert_eq!(recommendations.len(), 1);
    assert_eq!(recommendations[0].donor_site, "S01");
    assert_eq!(recommendations[0].transfer_type, TransferType::Nd);
    assert_eq!(recommendations[0].qty, 6);
}

#[test]
fn test_demand_cap_truncates_later_donor() {
    // 需求上限 12: 第一转出方出 10, 第二转出方被截为 2
    let records = vec![
        RecordBuilder::new("X", "S01").nd().net_stock(10).last_month_sold(1).build(),
        RecordBuilder::new("X", "S02").nd().net_stock(15).last_month_sold(2).build(),
        RecordBuilder::new("X", "S03").rf().target(12).build(),
    ];

    let recommendations = run(&records, TransferMode::A);

    assert_eq!(recommendations.len(), 2);
    assert_eq!(recommendations[0].donor_site, "S01");
    assert_eq!(recommendations[0].qty, 10);
    assert_eq!(recommendations[1].donor_site, "S02");
    assert_eq!(recommendations[1].qty, 2);
}

// ==========================================
// 统计摘要
// ==========================================

#[test]
fn test_summarize_consistency_and_idempotence() {
    let records = mixed_dataset();
    let recommendations = run(&records, TransferMode::B);
    let engine = SummaryEngine::new();

    let summary = engine.summarize(&recommendations);

    assert_eq!(summary.total_transfer_qty, total_qty(&recommendations));
    assert_eq!(summary.total_lines as usize, recommendations.len());
    assert!(summary.demand_audit.is_empty());

    // 各产品行数之和 = 总行数
    let article_lines: u32 = summary.by_article.iter().map(|s| s.line_count).sum();
    assert_eq!(article_lines, summary.total_lines);

    // 幂等
    let again = engine.summarize(&recommendations);
    assert_eq!(summary, again);
}
