// ==========================================
// 零售库存调货建议生成系统 - 模式规则配置表
// ==========================================
// 三种模式只在门槛口径/比例上限/销量门控/OM 策略/标签上不同,
// 以声明式配置驱动同一套分类器与匹配器, 避免三份逻辑各自漂移
// ==========================================

use crate::domain::types::{OmPolicy, TransferMode, TransferType};
use serde::{Deserialize, Serialize};

// ==========================================
// RF 转出门槛口径
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RfThreshold {
    /// 可用库存须高于安全库存(模式 A)
    SafetyStock,
    /// 可用库存须高于 MOQ(模式 B)
    Moq,
    /// 免最低库存门槛(模式 C)
    None,
}

// ==========================================
// ModeProfile - 单模式规则参数
// ==========================================
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModeProfile {
    pub mode: TransferMode,

    /// RF 转出门槛口径
    pub rf_threshold: RfThreshold,

    /// RF 可转出量的可用库存比例上限(向下取整)
    pub rf_cap_ratio: f64,

    /// RF 转出是否要求 effective_sales 低于产品组内最大值
    pub rf_sales_gated: bool,

    /// 转出/接收 OM 匹配策略
    pub om_policy: OmPolicy,

    /// RF 转出标签(ND 档标签固定为 TransferType::Nd)
    pub rf_transfer_type: TransferType,
}

impl ModeProfile {
    /// 模式 → 规则参数
    pub fn for_mode(mode: TransferMode) -> Self {
        match mode {
            TransferMode::A => Self {
                mode,
                rf_threshold: RfThreshold::SafetyStock,
                rf_cap_ratio: 0.5,
                rf_sales_gated: true,
                om_policy: OmPolicy::SameGroup,
                rf_transfer_type: TransferType::RfExcess,
            },
            TransferMode::B => Self {
                mode,
                rf_threshold: RfThreshold::Moq,
                rf_cap_ratio: 0.9,
                rf_sales_gated: true,
                om_policy: OmPolicy::SameGroup,
                rf_transfer_type: TransferType::RfEnhanced,
            },
            TransferMode::C => Self {
                mode,
                rf_threshold: RfThreshold::None,
                rf_cap_ratio: 1.0,
                rf_sales_gated: false,
                om_policy: OmPolicy::CrossGroupGuarded,
                rf_transfer_type: TransferType::RfSuper,
            },
        }
    }

    /// 该模式下 RF 门槛取值
    pub fn rf_threshold_value(&self, safety_stock: u32, moq: u32) -> u32 {
        match self.rf_threshold {
            RfThreshold::SafetyStock => safety_stock,
            RfThreshold::Moq => moq,
            RfThreshold::None => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_a_profile() {
        let profile = ModeProfile::for_mode(TransferMode::A);
        assert_eq!(profile.rf_threshold, RfThreshold::SafetyStock);
        assert_eq!(profile.rf_cap_ratio, 0.5);
        assert!(profile.rf_sales_gated);
        assert_eq!(profile.om_policy, OmPolicy::SameGroup);
        assert_eq!(profile.rf_transfer_type, TransferType::RfExcess);
    }

    #[test]
    fn test_mode_b_profile() {
        let profile = ModeProfile::for_mode(TransferMode::B);
        assert_eq!(profile.rf_threshold, RfThreshold::Moq);
        assert_eq!(profile.rf_cap_ratio, 0.9);
        assert!(profile.rf_sales_gated);
        assert_eq!(profile.om_policy, OmPolicy::SameGroup);
        assert_eq!(profile.rf_transfer_type, TransferType::RfEnhanced);
    }

    #[test]
    fn test_mode_c_profile() {
        let profile = ModeProfile::for_mode(TransferMode::C);
        assert_eq!(profile.rf_threshold, RfThreshold::None);
        assert_eq!(profile.rf_cap_ratio, 1.0);
        assert!(!profile.rf_sales_gated);
        assert_eq!(profile.om_policy, OmPolicy::CrossGroupGuarded);
        assert_eq!(profile.rf_transfer_type, TransferType::RfSuper);
    }

    #[test]
    fn test_rf_threshold_value() {
        let a = ModeProfile::for_mode(TransferMode::A);
        let b = ModeProfile::for_mode(TransferMode::B);
        let c = ModeProfile::for_mode(TransferMode::C);
        assert_eq!(a.rf_threshold_value(8, 2), 8);
        assert_eq!(b.rf_threshold_value(8, 2), 2);
        assert_eq!(c.rf_threshold_value(8, 2), 0);
    }
}
