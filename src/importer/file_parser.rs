// ==========================================
// 零售库存调货建议生成系统 - 文件解析器
// ==========================================
// 支持: Excel (.xlsx/.xls) / CSV (.csv)
// 输出: RawSheet(表头 + 文本行), 交由 RecordNormalizer 校验清洗
// ==========================================

use crate::domain::record::RawSheet;
use crate::importer::error::{ImportError, ImportResult};
use calamine::{open_workbook, Reader, Xlsx};
use csv::ReaderBuilder;
use std::collections::HashMap;
use std::fs::File;
use std::path::Path;

// ==========================================
// CSV 解析
// ==========================================
pub struct CsvSheetParser;

impl CsvSheetParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawSheet> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let file = File::open(file_path)?;
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(file);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for result in reader.records() {
            let record = result?;
            let mut row_map = HashMap::new();

            for (col_idx, value) in record.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), value.trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawSheet { headers, rows })
    }
}

// ==========================================
// Excel 解析
// ==========================================
pub struct ExcelSheetParser;

impl ExcelSheetParser {
    pub fn parse(&self, file_path: &Path) -> ImportResult<RawSheet> {
        if !file_path.exists() {
            return Err(ImportError::FileNotFound(file_path.display().to_string()));
        }

        let mut workbook: Xlsx<_> = open_workbook(file_path)?;

        // 读取第一个工作表
        let sheet_names = workbook.sheet_names();
        let sheet_name = sheet_names
            .first()
            .cloned()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无工作表".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| ImportError::ExcelParseError(e.to_string()))?;

        // 首行为表头
        let mut sheet_rows = range.rows();
        let header_row = sheet_rows
            .next()
            .ok_or_else(|| ImportError::ExcelParseError("Excel 文件无数据行".to_string()))?;

        let headers: Vec<String> = header_row
            .iter()
            .map(|cell| cell.to_string().trim().to_string())
            .collect();

        let mut rows = Vec::new();
        for data_row in sheet_rows {
            let mut row_map = HashMap::new();

            for (col_idx, cell) in data_row.iter().enumerate() {
                if let Some(header) = headers.get(col_idx) {
                    row_map.insert(header.clone(), cell.to_string().trim().to_string());
                }
            }

            // 跳过完全空白的行
            if row_map.values().all(|v| v.is_empty()) {
                continue;
            }

            rows.push(row_map);
        }

        Ok(RawSheet { headers, rows })
    }
}

// ==========================================
// 通用文件解析器(按扩展名自动选择)
// ==========================================
pub struct UniversalFileParser;

impl UniversalFileParser {
    pub fn parse<P: AsRef<Path>>(&self, file_path: P) -> ImportResult<RawSheet> {
        let path = file_path.as_ref();
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();

        match ext.as_str() {
            "csv" => CsvSheetParser.parse(path),
            "xlsx" | "xls" => ExcelSheetParser.parse(path),
            _ => Err(ImportError::UnsupportedFormat(ext)),
        }
    }
}
