// ==========================================
// 零售库存调货建议生成系统 - 引擎层错误类型
// ==========================================
// 约束违规属引擎实现缺陷, 正确运行时永不触发;
// 业务数据缺候选不报错, 仅产出空建议
// ==========================================

use thiserror::Error;

/// 引擎层错误类型
#[derive(Error, Debug)]
pub enum EngineError {
    /// 后置条件违规: 单店转出超过净库存
    #[error("约束违规: 产品 {article} 转出店铺 {site} 转出量 {donated} 超过净库存 {net_stock}")]
    DonorOverNetStock {
        article: String,
        site: String,
        donated: u32,
        net_stock: u32,
    },

    /// 后置条件违规: 产品级总转出超过总需求
    #[error("约束违规: 产品 {article} 总转出量 {transferred} 超过总需求 {total_demand}")]
    ArticleOverDemand {
        article: String,
        transferred: u64,
        total_demand: u64,
    },
}

/// Result 类型别名
pub type EngineResult<T> = Result<T, EngineError>;
