// ==========================================
// 零售库存调货建议生成系统 - 记录清洗校验器
// ==========================================
// 职责: 结构校验 / 非负整数转换 / 业务清洗 / 派生字段计算
// 输入: RawSheet(文件解析产物)
// 输出: Vec<InventoryRecord>, 或整体拒绝(不静默丢行)
// ==========================================

use crate::domain::record::{InventoryRecord, RawSheet};
use crate::domain::types::RpType;
use crate::importer::error::{ImportError, ImportResult};

/// 必要栏位(源数据契约)
pub const REQUIRED_COLUMNS: [&str; 12] = [
    "Article",
    "Article Description",
    "RP Type",
    "Site",
    "OM",
    "MOQ",
    "SaSa Net Stock",
    "Target",
    "Pending Received",
    "Safety Stock",
    "Last Month Sold Qty",
    "MTD Sold Qty",
];

/// 销量异常上限: 超出即限幅并记录备注
pub const SALES_OUTLIER_CAP: u32 = 100_000;

// ==========================================
// RecordNormalizer - 记录清洗校验器
// ==========================================
pub struct RecordNormalizer;

impl RecordNormalizer {
    pub fn new() -> Self {
        Self
    }

    /// 校验并标准化整个数据集
    ///
    /// # 规则
    /// 1. 必要栏位缺失 → MissingColumns, 整体失败
    /// 2. 数量字段无法转换为非负整数 → TypeConversionError, 整体失败
    /// 3. 销量超过 100000 → 限幅为 100000, 记录备注
    /// 4. RP Type 非 ND/RF → 回退为 ND, 记录备注
    /// 5. 派生字段计算一次并缓存
    pub fn normalize(&self, sheet: &RawSheet) -> ImportResult<Vec<InventoryRecord>> {
        self.validate_columns(sheet)?;

        let mut records = Vec::with_capacity(sheet.rows.len());
        for (idx, row) in sheet.rows.iter().enumerate() {
            // 行号按文件行计(首行为表头)
            let row_no = idx + 2;
            records.push(self.normalize_row(row_no, row)?);
        }

        Ok(records)
    }

    /// 结构校验: 所有必要栏位必须存在
    fn validate_columns(&self, sheet: &RawSheet) -> ImportResult<()> {
        let missing: Vec<String> = REQUIRED_COLUMNS
            .iter()
            .filter(|col| !sheet.has_column(col))
            .map(|col| col.to_string())
            .collect();

        if missing.is_empty() {
            Ok(())
        } else {
            Err(ImportError::MissingColumns(missing))
        }
    }

    /// 清洗单行
    fn normalize_row(
        &self,
        row_no: usize,
        row: &std::collections::HashMap<String, String>,
    ) -> ImportResult<InventoryRecord> {
        let text = |col: &str| -> String {
            row.get(col).map(|v| v.trim().to_string()).unwrap_or_default()
        };

        let mut notes: Vec<String> = Vec::new();

        // RP Type: 非 ND/RF 回退为 ND
        let rp_raw = text("RP Type");
        let rp_type = match RpType::parse(&rp_raw) {
            Some(rp) => rp,
            None => {
                notes.push("RP Type无效，已设为ND".to_string());
                RpType::Nd
            }
        };

        let moq = self.coerce_quantity(row_no, "MOQ", &text("MOQ"))?;
        let net_stock = self.coerce_quantity(row_no, "SaSa Net Stock", &text("SaSa Net Stock"))?;
        let target = self.coerce_quantity(row_no, "Target", &text("Target"))?;
        let pending_received =
            self.coerce_quantity(row_no, "Pending Received", &text("Pending Received"))?;
        let safety_stock = self.coerce_quantity(row_no, "Safety Stock", &text("Safety Stock"))?;
        let mut last_month_sold =
            self.coerce_quantity(row_no, "Last Month Sold Qty", &text("Last Month Sold Qty"))?;
        let mut mtd_sold = self.coerce_quantity(row_no, "MTD Sold Qty", &text("MTD Sold Qty"))?;

        // 销量异常限幅
        if last_month_sold > SALES_OUTLIER_CAP || mtd_sold > SALES_OUTLIER_CAP {
            notes.push(format!("销量异常值已限制为{}", SALES_OUTLIER_CAP));
            last_month_sold = last_month_sold.min(SALES_OUTLIER_CAP);
            mtd_sold = mtd_sold.min(SALES_OUTLIER_CAP);
        }

        let mut record = InventoryRecord {
            article: text("Article"),
            article_desc: text("Article Description"),
            rp_type,
            site: text("Site"),
            om: text("OM"),
            moq,
            safety_stock,
            net_stock,
            pending_received,
            target,
            last_month_sold,
            mtd_sold,
            available_stock: 0,
            effective_sales: 0,
            notes: notes.join("; "),
        };
        record.compute_derived();

        Ok(record)
    }

    /// 数量字段转换: 非负整数; 空白视为 0; 小数向下取整
    fn coerce_quantity(&self, row_no: usize, field: &str, value: &str) -> ImportResult<u32> {
        if value.is_empty() {
            return Ok(0);
        }

        if let Ok(v) = value.parse::<u32>() {
            return Ok(v);
        }

        // Excel 数值单元格可能带小数表示(如 "5.0")
        if let Ok(v) = value.parse::<f64>() {
            if v.is_finite() && v >= 0.0 && v <= u32::MAX as f64 {
                return Ok(v.trunc() as u32);
            }
        }

        Err(ImportError::TypeConversionError {
            row: row_no,
            field: field.to_string(),
            value: value.to_string(),
        })
    }
}

impl Default for RecordNormalizer {
    fn default() -> Self {
        Self::new()
    }
}
